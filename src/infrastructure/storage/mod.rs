mod local_store;
mod mock_store;

pub use local_store::LocalBlobStore;
pub use mock_store::{FailingBlobStore, MockBlobStore};
