mod settings;

pub use settings::{
    DEFAULT_MAX_UPLOAD_BYTES, LoggingSettings, RegistrySettings, ServerSettings, Settings,
    StorageSettings,
};
