use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the upload registry.
///
/// Field order matches the registry's CSV header row; the serde renames keep
/// the header names stable for external consumers of the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRecord {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "deviceName")]
    pub device_name: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    #[serde(rename = "originalname")]
    pub original_name: String,
    pub filename: String,
    pub size: u64,
    #[serde(rename = "mimetype")]
    pub mime_type: String,
    pub path: String,
    pub client_ip: String,
}
