mod csv_registry;
mod mock_registry;

pub use csv_registry::CsvUploadRegistry;
pub use mock_registry::{FailingUploadRegistry, MockUploadRegistry};
