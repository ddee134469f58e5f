use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::{StorageName, StoredUpload};

/// In-memory store for tests; keeps every object behind a mutex.
#[derive(Default)]
pub struct MockBlobStore {
    objects: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MockBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn bytes_of(&self, filename: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .find(|(name, _)| name == filename)
            .map(|(_, bytes)| bytes.clone())
    }
}

#[async_trait]
impl BlobStore for MockBlobStore {
    async fn store(
        &self,
        name: &StorageName,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<StoredUpload, BlobStoreError> {
        let mut buf = Vec::new();
        while let Some(chunk) = stream.next().await {
            buf.extend_from_slice(&chunk?);
        }
        let stored = StoredUpload {
            filename: name.as_str().to_string(),
            path: PathBuf::from("mock-uploads").join(name.as_str()),
            size_bytes: buf.len() as u64,
        };
        self.objects
            .lock()
            .unwrap()
            .push((name.as_str().to_string(), buf));
        Ok(stored)
    }
}

/// Store whose writes always fail; exercises the internal-error path.
pub struct FailingBlobStore;

#[async_trait]
impl BlobStore for FailingBlobStore {
    async fn store(
        &self,
        _name: &StorageName,
        _stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<StoredUpload, BlobStoreError> {
        Err(BlobStoreError::UploadFailed("disk unavailable".to_string()))
    }
}
