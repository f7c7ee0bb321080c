//! Line splitting and delimiter-free concatenation.

use super::types::ParseError;

/// Split raw bytes on `\n`, `\r`, and `\r\n`.
///
/// A trailing terminator does not yield an empty final line, and empty input yields no lines.
pub fn split_lines(bytes: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut rest = bytes;

    while !rest.is_empty() {
        match rest.iter().position(|byte| matches!(byte, b'\n' | b'\r')) {
            Some(pos) => {
                lines.push(&rest[..pos]);
                let terminator = if rest[pos..].starts_with(b"\r\n") { 2 } else { 1 };
                rest = &rest[pos + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }

    lines
}

/// Either undecoded bytes or text, concatenated by [`concat_fragments`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Bytes decoded as strict UTF-8.
    Bytes(&'a [u8]),
    /// Text used as is.
    Text(&'a str),
}

impl<'a> Fragment<'a> {
    fn decode(self) -> Result<&'a str, std::str::Utf8Error> {
        match self {
            Self::Bytes(bytes) => std::str::from_utf8(bytes),
            Self::Text(text) => Ok(text),
        }
    }
}

impl<'a> From<&'a [u8]> for Fragment<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Fragment<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

/// Decode every fragment independently and join them with no delimiter, preserving order.
///
/// A byte fragment that is not UTF-8 fails with its zero-based position in the sequence.
pub fn concat_fragments<'a, I>(fragments: I) -> Result<String, ParseError>
where
    I: IntoIterator,
    I::Item: Into<Fragment<'a>>,
{
    let mut joined = String::new();
    for (line, fragment) in fragments.into_iter().enumerate() {
        let text = fragment
            .into()
            .decode()
            .map_err(|source| ParseError::InvalidUtf8 { line, source })?;
        joined.push_str(text);
    }
    Ok(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(bytes: &[u8]) -> Vec<&str> {
        split_lines(bytes)
            .into_iter()
            .map(|line| std::str::from_utf8(line).expect("utf8 line"))
            .collect()
    }

    #[test]
    fn splits_on_every_terminator_style() {
        assert_eq!(texts(b"a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn trailing_terminator_adds_no_line() {
        assert_eq!(texts(b"a\n"), vec!["a"]);
        assert_eq!(texts(b"a\r\n"), vec!["a"]);
        assert!(split_lines(b"").is_empty());
    }

    #[test]
    fn blank_lines_are_kept() {
        assert_eq!(texts(b"\n"), vec![""]);
        assert_eq!(texts(b"a\n\n\nb"), vec!["a", "", "", "b"]);
        assert_eq!(texts(b"\r\r\n"), vec!["", ""]);
    }

    #[test]
    fn concatenates_mixed_fragments_in_order() {
        let fragments = [
            Fragment::Bytes(b"alpha "),
            Fragment::Text("beta"),
            Fragment::Bytes("γάμμα".as_bytes()),
            Fragment::Text(""),
            Fragment::Text(" end"),
        ];
        assert_eq!(
            concat_fragments(fragments).expect("concat"),
            "alpha betaγάμμα end"
        );
    }

    #[test]
    fn empty_sequence_concatenates_to_empty_string() {
        let fragments: Vec<&str> = Vec::new();
        assert_eq!(concat_fragments(fragments).expect("concat"), "");
    }

    #[test]
    fn invalid_bytes_report_their_position() {
        let fragments = [
            Fragment::Text("ok"),
            Fragment::Bytes(b"also ok"),
            Fragment::Bytes(&[0xff, 0xfe]),
        ];
        let err = concat_fragments(fragments).expect_err("decode failure");
        assert!(matches!(err, ParseError::InvalidUtf8 { line: 2, .. }));
    }
}
