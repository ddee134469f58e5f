mod blob_store;
mod upload_registry;

pub use blob_store::{BlobStore, BlobStoreError};
pub use upload_registry::{RegistryError, UploadRegistry};
