//! Invocation result and error types.

use serde::Serialize;
use thiserror::Error;

use crate::{
    auth::AuthError, document::ParseError, search::IndexError, storage::StorageError,
};

/// Errors that abort an invocation.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Credentials for signing could not be resolved.
    #[error("Credential resolution failed: {0}")]
    Credentials(#[from] AuthError),
    /// An object could not be read from storage.
    #[error("Object fetch failed: {0}")]
    Storage(#[from] StorageError),
    /// An object could not be parsed into a document.
    #[error("Failed to parse s3://{bucket}/{key}: {source}")]
    Parse {
        /// Bucket holding the object.
        bucket: String,
        /// Decoded object key.
        key: String,
        /// Underlying parse failure.
        #[source]
        source: ParseError,
    },
    /// A document upsert failed while the fail-fast policy is active.
    #[error("Indexing failed: {0}")]
    Index(#[from] IndexError),
}

/// Response returned to the invoking runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationResponse {
    /// HTTP-style status code.
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// Short completion message.
    pub body: String,
}

impl InvocationResponse {
    /// The response reported when every record was fetched and parsed.
    pub fn done() -> Self {
        Self {
            status_code: 200,
            body: "Done".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn done_response_serializes_like_a_proxy_result() {
        let value = serde_json::to_value(InvocationResponse::done()).expect("json");
        assert_eq!(value, json!({ "statusCode": 200, "body": "Done" }));
    }
}
