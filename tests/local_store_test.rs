use std::io;

use bytes::Bytes;
use futures::stream;

use audiodrop::application::ports::BlobStore;
use audiodrop::domain::StorageName;
use audiodrop::infrastructure::storage::LocalBlobStore;

fn create_test_store() -> (tempfile::TempDir, LocalBlobStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalBlobStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_valid_stream_when_storing_then_file_holds_exact_bytes() {
    let (dir, store) = create_test_store();
    let name = StorageName::generate("clip.wav", 1);

    let chunks = vec![Ok(Bytes::from("hello ")), Ok(Bytes::from("world"))];
    let stored = store
        .store(&name, Box::pin(stream::iter(chunks)))
        .await
        .unwrap();

    assert_eq!(stored.size_bytes, 11);
    assert_eq!(stored.filename, name.as_str());
    assert_eq!(stored.path, dir.path().join(name.as_str()));

    let on_disk = std::fs::read(dir.path().join(name.as_str())).unwrap();
    assert_eq!(on_disk, b"hello world");
}

#[tokio::test]
async fn given_missing_directory_when_creating_store_then_directory_is_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");

    let _store = LocalBlobStore::new(nested.clone()).unwrap();

    assert!(nested.is_dir());
}

#[tokio::test]
async fn given_stream_error_when_storing_then_no_file_remains_under_final_name() {
    let (dir, store) = create_test_store();
    let name = StorageName::generate("clip.wav", 2);

    let chunks: Vec<Result<Bytes, io::Error>> = vec![
        Ok(Bytes::from("partial")),
        Err(io::Error::new(
            io::ErrorKind::ConnectionReset,
            "network drop",
        )),
    ];
    let result = store.store(&name, Box::pin(stream::iter(chunks))).await;

    assert!(result.is_err());
    assert!(!dir.path().join(name.as_str()).exists());
}

#[tokio::test]
async fn given_empty_stream_when_storing_then_empty_file_is_persisted() {
    let (dir, store) = create_test_store();
    let name = StorageName::generate("silence.wav", 3);

    let chunks: Vec<Result<Bytes, io::Error>> = vec![];
    let stored = store
        .store(&name, Box::pin(stream::iter(chunks)))
        .await
        .unwrap();

    assert_eq!(stored.size_bytes, 0);
    assert_eq!(
        std::fs::read(dir.path().join(name.as_str())).unwrap().len(),
        0
    );
}
