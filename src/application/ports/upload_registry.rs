use async_trait::async_trait;

use crate::domain::UploadRecord;

/// Append-only record of successful uploads.
#[async_trait]
pub trait UploadRegistry: Send + Sync {
    /// Appends one row; earlier rows are never rewritten.
    async fn append(&self, record: &UploadRecord) -> Result<(), RegistryError>;

    /// Rows whose device name matches `device` case-insensitively after
    /// trimming, newest first, at most `limit` (clamped to `1..=500`).
    async fn list_for_device(
        &self,
        device: &str,
        limit: usize,
    ) -> Result<Vec<UploadRecord>, RegistryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("registry io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("registry encoding error: {0}")]
    Csv(#[from] csv::Error),
    #[error("registry task failed: {0}")]
    Join(String),
}
