mod audio_format;
mod storage_name;
mod stored_upload;
mod upload_record;

pub use audio_format::AudioFormat;
pub use storage_name::StorageName;
pub use stored_upload::StoredUpload;
pub use upload_record::UploadRecord;
