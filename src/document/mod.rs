//! Plain-text document format: title, author, date, then body lines.

mod lines;
mod parse;
pub mod types;

pub use lines::{Fragment, concat_fragments, split_lines};
pub use parse::parse_document;
pub use types::{ParseError, ParsedDocument};
