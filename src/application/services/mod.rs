mod upload_service;

pub use upload_service::{UploadError, UploadService};
