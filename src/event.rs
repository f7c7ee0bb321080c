//! Storage notification payloads received by the handler.

use serde::Deserialize;

use crate::keys::decode_object_key;

/// Batch of object-created notifications delivered in one invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationEvent {
    /// Records in delivery order.
    #[serde(rename = "Records")]
    pub records: Vec<NotificationRecord>,
}

/// One newly created object.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationRecord {
    /// Storage entity describing the bucket and object.
    pub s3: S3Entity,
}

/// Bucket and object pair carried by a record.
#[derive(Debug, Clone, Deserialize)]
pub struct S3Entity {
    /// Bucket holding the object.
    pub bucket: S3Bucket,
    /// The object itself.
    pub object: S3Object,
}

/// Bucket descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct S3Bucket {
    /// Bucket name.
    pub name: String,
}

/// Object descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct S3Object {
    /// Form-encoded object key.
    pub key: String,
}

/// Decoded address of an object in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    /// Bucket name.
    pub bucket: String,
    /// Object key with notification encoding removed.
    pub key: String,
}

impl NotificationRecord {
    /// Resolve the bucket and decoded key for this record.
    pub fn location(&self) -> ObjectLocation {
        ObjectLocation {
            bucket: self.s3.bucket.name.clone(),
            key: decode_object_key(&self.s3.object.key),
        }
    }
}
