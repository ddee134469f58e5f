use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{MultipartUpload, ObjectStore, PutPayload};

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::{StorageName, StoredUpload};

/// Blob store writing to a flat directory on the local filesystem.
///
/// Writes go through a multipart upload that only becomes visible under the
/// final name on `complete`; an aborted write leaves no addressable file.
pub struct LocalBlobStore {
    inner: Arc<LocalFileSystem>,
    base_dir: PathBuf,
}

impl LocalBlobStore {
    /// Creates the upload directory recursively if it does not exist yet.
    pub fn new(base_dir: PathBuf) -> Result<Self, BlobStoreError> {
        std::fs::create_dir_all(&base_dir).map_err(BlobStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(&base_dir)
            .map_err(|e| BlobStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            base_dir,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn store(
        &self,
        name: &StorageName,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<StoredUpload, BlobStoreError> {
        let store_path = StorePath::from(name.as_str());
        let mut upload = self
            .inner
            .put_multipart(&store_path)
            .await
            .map_err(|e| BlobStoreError::UploadFailed(e.to_string()))?;

        let mut total_bytes: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let bytes = match chunk {
                Ok(b) => b,
                Err(e) => {
                    let _ = upload.abort().await;
                    return Err(BlobStoreError::Io(e));
                }
            };
            total_bytes += bytes.len() as u64;
            if let Err(e) = upload.put_part(PutPayload::from(bytes)).await {
                let _ = upload.abort().await;
                return Err(BlobStoreError::UploadFailed(e.to_string()));
            }
        }

        upload
            .complete()
            .await
            .map_err(|e| BlobStoreError::UploadFailed(e.to_string()))?;

        Ok(StoredUpload {
            filename: name.as_str().to_string(),
            path: self.base_dir.join(name.as_str()),
            size_bytes: total_bytes,
        })
    }
}
