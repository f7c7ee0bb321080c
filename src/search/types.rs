//! Shared types used by the search client.

use reqwest::StatusCode;
use thiserror::Error;

use crate::auth::AuthError;
use crate::keys::encode_document_id;

/// Errors returned while writing a document to the search engine.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Base URL or document path failed to form a valid URL.
    #[error("Invalid search URL: {0}")]
    InvalidUrl(String),
    /// Document could not be serialized to JSON.
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Request could not be signed.
    #[error(transparent)]
    Signing(#[from] AuthError),
    /// HTTP layer failed before receiving a response.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Search engine responded with a non-success status code.
    #[error("Unexpected search response ({status}): {body}")]
    UnexpectedStatus {
        /// HTTP status returned by the search engine.
        status: StatusCode,
        /// Body payload associated with the failing response.
        body: String,
    },
}

/// Destination of one document: index, document type, and encoded id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexTarget {
    /// Index name.
    pub index: String,
    /// Document type path segment.
    pub document_type: String,
    /// Percent-encoded document id.
    pub id: String,
}

impl IndexTarget {
    /// Address the document for a decoded object key.
    pub fn for_key(index: &str, document_type: &str, key: &str) -> Self {
        Self {
            index: index.to_string(),
            document_type: document_type.to_string(),
            id: encode_document_id(key),
        }
    }

    /// Request path relative to the search host.
    pub fn path(&self) -> String {
        format!("{}/{}/{}", self.index, self.document_type, self.id)
    }
}

/// Successful upsert response.
#[derive(Debug, Clone)]
pub struct IndexReceipt {
    /// HTTP status returned by the search engine.
    pub status: StatusCode,
    /// Raw response body.
    pub body: String,
}
