use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use bytes::Bytes;
use chrono::Utc;
use futures::StreamExt;
use futures::stream::BoxStream;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::{AudioFormat, StorageName, StoredUpload};

/// Orchestrates one upload: extension validation, naming, the size ceiling,
/// and the store write.
pub struct UploadService<B>
where
    B: BlobStore,
{
    blob_store: Arc<B>,
    max_upload_bytes: u64,
}

impl<B> UploadService<B>
where
    B: BlobStore,
{
    pub fn new(blob_store: Arc<B>, max_upload_bytes: u64) -> Self {
        Self {
            blob_store,
            max_upload_bytes,
        }
    }

    /// Validates, names, and persists one upload.
    ///
    /// Bytes are forwarded to the store as they arrive; the ceiling is
    /// checked per chunk, so an oversized body is cut off mid-transfer and
    /// the store aborts the write.
    pub async fn save(
        &self,
        original_name: &str,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<StoredUpload, UploadError> {
        AudioFormat::from_filename(original_name).ok_or(UploadError::UnsupportedFormat)?;

        let name = StorageName::generate(original_name, Utc::now().timestamp_millis());

        let limit = self.max_upload_bytes;
        let exceeded = Arc::new(AtomicBool::new(false));
        let tripped = Arc::clone(&exceeded);
        let mut received: u64 = 0;
        let guarded = stream
            .map(move |chunk| {
                let bytes = chunk?;
                received += bytes.len() as u64;
                if received > limit {
                    tripped.store(true, Ordering::Relaxed);
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        "size ceiling exceeded",
                    ));
                }
                Ok(bytes)
            })
            .boxed();

        match self.blob_store.store(&name, guarded).await {
            Ok(stored) => Ok(stored),
            Err(_) if exceeded.load(Ordering::Relaxed) => Err(UploadError::TooLarge { limit }),
            Err(e) => Err(UploadError::Store(e)),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Only .wav files are allowed")]
    UnsupportedFormat,
    #[error("File too large (> {limit} bytes)")]
    TooLarge { limit: u64 },
    #[error("storage error: {0}")]
    Store(#[from] BlobStoreError),
}
