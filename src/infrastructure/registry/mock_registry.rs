use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{RegistryError, UploadRegistry};
use crate::domain::UploadRecord;

/// In-memory registry for tests.
#[derive(Default)]
pub struct MockUploadRegistry {
    rows: Mutex<Vec<UploadRecord>>,
}

impl MockUploadRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<UploadRecord>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<UploadRecord> {
        self.rows.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl UploadRegistry for MockUploadRegistry {
    async fn append(&self, record: &UploadRecord) -> Result<(), RegistryError> {
        self.rows.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn list_for_device(
        &self,
        device: &str,
        limit: usize,
    ) -> Result<Vec<UploadRecord>, RegistryError> {
        let device = device.trim().to_ascii_lowercase();
        let mut rows: Vec<UploadRecord> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.device_name.trim().eq_ignore_ascii_case(&device))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        rows.truncate(limit.clamp(1, 500));
        Ok(rows)
    }
}

/// Registry whose appends always fail; exercises the warning path.
pub struct FailingUploadRegistry;

#[async_trait]
impl UploadRegistry for FailingUploadRegistry {
    async fn append(&self, _record: &UploadRecord) -> Result<(), RegistryError> {
        Err(RegistryError::Join("registry offline".to_string()))
    }

    async fn list_for_device(
        &self,
        _device: &str,
        _limit: usize,
    ) -> Result<Vec<UploadRecord>, RegistryError> {
        Err(RegistryError::Join("registry offline".to_string()))
    }
}
