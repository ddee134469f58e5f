use std::sync::Arc;

use crate::application::ports::{BlobStore, UploadRegistry};
use crate::application::services::UploadService;
use crate::presentation::config::Settings;

pub struct AppState<B, R>
where
    B: BlobStore,
    R: UploadRegistry,
{
    pub upload_service: Arc<UploadService<B>>,
    pub registry: Arc<R>,
    pub settings: Settings,
}

impl<B, R> Clone for AppState<B, R>
where
    B: BlobStore,
    R: UploadRegistry,
{
    fn clone(&self) -> Self {
        Self {
            upload_service: Arc::clone(&self.upload_service),
            registry: Arc::clone(&self.registry),
            settings: self.settings.clone(),
        }
    }
}
