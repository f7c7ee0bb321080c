//! Object storage access.

use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use thiserror::Error;

/// Errors raised while reading an object from storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage service rejected or failed the read request.
    #[error("Failed to fetch s3://{bucket}/{key}: {message}")]
    Fetch {
        /// Bucket that was read.
        bucket: String,
        /// Decoded object key.
        key: String,
        /// Rendered service error.
        message: String,
    },
    /// The object body could not be streamed to completion.
    #[error("Failed to read body of s3://{bucket}/{key}: {message}")]
    Read {
        /// Bucket that was read.
        bucket: String,
        /// Decoded object key.
        key: String,
        /// Rendered stream error.
        message: String,
    },
}

/// Read access to the object store that emits notifications.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Retrieve the full byte content of an object.
    async fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError>;
}

/// [`ObjectStore`] backed by the S3 API.
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    /// Wrap an already configured S3 client.
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| StorageError::Fetch {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: DisplayErrorContext(&err).to_string(),
            })?;

        let body = output
            .body
            .collect()
            .await
            .map_err(|err| StorageError::Read {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: err.to_string(),
            })?;

        let bytes = body.into_bytes();
        tracing::debug!(bucket, key, bytes = bytes.len(), "Fetched object");
        Ok(bytes.to_vec())
    }
}
