//! Search engine integration.

pub mod client;
pub mod types;

pub use client::SearchIndexService;
pub use types::{IndexError, IndexReceipt, IndexTarget};
