//! Parsed document shape and parse failures.

use serde::Serialize;
use std::str::Utf8Error;
use thiserror::Error;

/// Errors produced while turning raw object bytes into a [`ParsedDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A line was not valid UTF-8.
    #[error("line {line} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        /// Zero-based line number within the object.
        line: usize,
        /// Decoder error for that line.
        #[source]
        source: Utf8Error,
    },
    /// The object is missing one of the title, author, or date lines.
    #[error("expected at least 3 header lines, found {found}")]
    TooFewLines {
        /// Number of lines present in the object.
        found: usize,
    },
}

impl ParseError {
    /// Shift a line-numbered error by `offset` lines.
    pub(crate) fn offset_lines(self, offset: usize) -> Self {
        match self {
            Self::InvalidUtf8 { line, source } => Self::InvalidUtf8 {
                line: line + offset,
                source,
            },
            other => other,
        }
    }
}

/// Fields extracted from a document and written to the search index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParsedDocument {
    /// First line.
    pub title: String,
    /// Second line.
    pub author: String,
    /// Third line, kept verbatim.
    pub date: String,
    /// Every remaining line concatenated without separators.
    pub body: String,
    /// The second body line, when present.
    pub summary: Vec<String>,
}
