use std::io;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::{StorageName, StoredUpload};

/// Byte sink for upload payloads.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Streams `stream` into the store under `name` and returns the persisted
    /// upload. A stream error must leave no partial object addressable.
    async fn store(
        &self,
        name: &StorageName,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<StoredUpload, BlobStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BlobStoreError {
    /// The sink itself failed (disk full, permissions, rename failure).
    #[error("upload failed: {0}")]
    UploadFailed(String),
    /// The incoming byte stream failed before the sink did.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
