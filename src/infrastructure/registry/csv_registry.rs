use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ports::{RegistryError, UploadRegistry};
use crate::domain::UploadRecord;

const HEADERS: [&str; 10] = [
    "timestamp",
    "deviceName",
    "latitude",
    "longitude",
    "originalname",
    "filename",
    "size",
    "mimetype",
    "path",
    "client_ip",
];

const MAX_LIST_LIMIT: usize = 500;

/// Upload registry backed by a flat CSV file.
pub struct CsvUploadRegistry {
    path: PathBuf,
}

impl CsvUploadRegistry {
    /// Writes the header row if the file does not exist yet.
    pub fn new(path: PathBuf) -> Result<Self, RegistryError> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let mut writer = csv::Writer::from_path(&path)?;
            writer.write_record(HEADERS)?;
            writer.flush()?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl UploadRegistry for CsvUploadRegistry {
    async fn append(&self, record: &UploadRecord) -> Result<(), RegistryError> {
        let path = self.path.clone();
        let record = record.clone();
        tokio::task::spawn_blocking(move || append_row(&path, &record))
            .await
            .map_err(|e| RegistryError::Join(e.to_string()))?
    }

    async fn list_for_device(
        &self,
        device: &str,
        limit: usize,
    ) -> Result<Vec<UploadRecord>, RegistryError> {
        let path = self.path.clone();
        let device = device.trim().to_ascii_lowercase();
        let limit = limit.clamp(1, MAX_LIST_LIMIT);
        tokio::task::spawn_blocking(move || read_rows(&path, &device, limit))
            .await
            .map_err(|e| RegistryError::Join(e.to_string()))?
    }
}

fn append_row(path: &Path, record: &UploadRecord) -> Result<(), RegistryError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.serialize(record)?;
    writer.flush()?;
    Ok(())
}

fn read_rows(path: &Path, device: &str, limit: usize) -> Result<Vec<UploadRecord>, RegistryError> {
    let mut reader = match csv::Reader::from_path(path) {
        Ok(reader) => reader,
        Err(e) => {
            if is_not_found(&e) {
                return Ok(Vec::new());
            }
            return Err(RegistryError::Csv(e));
        }
    };

    let mut rows = Vec::new();
    for result in reader.deserialize::<UploadRecord>() {
        let record = result?;
        if record.device_name.trim().eq_ignore_ascii_case(device) {
            rows.push(record);
        }
    }

    rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    rows.truncate(limit);
    Ok(rows)
}

fn is_not_found(e: &csv::Error) -> bool {
    matches!(e.kind(), csv::ErrorKind::Io(inner) if inner.kind() == io::ErrorKind::NotFound)
}
