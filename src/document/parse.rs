//! Positional extraction of document fields.

use super::lines::{Fragment, concat_fragments, split_lines};
use super::types::{ParseError, ParsedDocument};

const HEADER_LINES: usize = 3;

/// Offset of the summary line within the body lines.
const SUMMARY_OFFSET: usize = 1;

/// Parse raw object bytes into document fields.
///
/// Missing header lines are an error. A body too short to hold the summary line yields an
/// empty summary instead.
pub fn parse_document(bytes: &[u8]) -> Result<ParsedDocument, ParseError> {
    let lines = split_lines(bytes);
    let [title, author, date, body_lines @ ..] = lines.as_slice() else {
        return Err(ParseError::TooFewLines { found: lines.len() });
    };

    let title = decode_line(title, 0)?;
    let author = decode_line(author, 1)?;
    let date = decode_line(date, 2)?;

    let body = concat_fragments(body_lines.iter().copied().map(Fragment::Bytes))
        .map_err(|err| err.offset_lines(HEADER_LINES))?;

    let summary = body_lines
        .iter()
        .enumerate()
        .skip(SUMMARY_OFFSET)
        .take(1)
        .map(|(index, line)| decode_line(line, HEADER_LINES + index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParsedDocument {
        title,
        author,
        date,
        body,
        summary,
    })
}

fn decode_line(line: &[u8], number: usize) -> Result<String, ParseError> {
    std::str::from_utf8(line)
        .map(str::to_owned)
        .map_err(|source| ParseError::InvalidUtf8 {
            line: number,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_fields_by_position() {
        let document =
            parse_document(b"The Title\nJane Doe\n2024-01-02\n\nFirst paragraph\nSecond\nThird\n")
                .expect("parsed");

        assert_eq!(document.title, "The Title");
        assert_eq!(document.author, "Jane Doe");
        assert_eq!(document.date, "2024-01-02");
        assert_eq!(document.body, "First paragraphSecondThird");
        assert_eq!(document.summary, vec!["First paragraph".to_string()]);
    }

    #[test]
    fn header_fields_are_not_trimmed() {
        let document = parse_document(b"  Title \r\n\tAuthor\r\n date\r\nx\r\n y ").expect("parsed");
        assert_eq!(document.title, "  Title ");
        assert_eq!(document.author, "\tAuthor");
        assert_eq!(document.date, " date");
        assert_eq!(document.body, "x y ");
        assert_eq!(document.summary, vec![" y ".to_string()]);
    }

    #[test]
    fn four_lines_yield_empty_summary() {
        let document = parse_document(b"t\na\nd\nonly body").expect("parsed");
        assert_eq!(document.body, "only body");
        assert!(document.summary.is_empty());
    }

    #[test]
    fn three_lines_yield_empty_body() {
        let document = parse_document(b"t\na\nd").expect("parsed");
        assert_eq!(document.body, "");
        assert!(document.summary.is_empty());
    }

    #[test]
    fn short_header_is_rejected() {
        assert_eq!(
            parse_document(b"title\nauthor\n"),
            Err(ParseError::TooFewLines { found: 2 })
        );
        assert_eq!(
            parse_document(b""),
            Err(ParseError::TooFewLines { found: 0 })
        );
    }

    #[test]
    fn invalid_utf8_reports_line_number() {
        let err = parse_document(b"t\na\nd\nok\n\xff\xfe\n").expect_err("decode failure");
        assert!(matches!(err, ParseError::InvalidUtf8 { line: 4, .. }));

        let err = parse_document(b"t\n\xc3\nd\n").expect_err("decode failure");
        assert!(matches!(err, ParseError::InvalidUtf8 { line: 1, .. }));
    }

    #[test]
    fn serializes_with_capitalized_keys() {
        let document = parse_document(b"T\nA\nD\n\nS\nrest").expect("parsed");
        let value = serde_json::to_value(&document).expect("json");
        assert_eq!(
            value,
            json!({
                "Title": "T",
                "Author": "A",
                "Date": "D",
                "Body": "Srest",
                "Summary": ["S"],
            })
        );
    }
}
