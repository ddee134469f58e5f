use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use audiodrop::application::ports::UploadRegistry;
use audiodrop::domain::UploadRecord;
use audiodrop::infrastructure::registry::CsvUploadRegistry;

fn record(device: &str, filename: &str, secs: i64) -> UploadRecord {
    UploadRecord {
        timestamp: Utc.timestamp_opt(secs, 0).unwrap(),
        device_name: device.to_string(),
        latitude: Some("59.91".to_string()),
        longitude: None,
        original_name: "clip.wav".to_string(),
        filename: filename.to_string(),
        size: 1000,
        mime_type: "audio/wav".to_string(),
        path: format!("uploads/{}", filename),
        client_ip: String::new(),
    }
}

fn create_test_registry() -> (TempDir, CsvUploadRegistry) {
    let dir = TempDir::new().unwrap();
    let registry = CsvUploadRegistry::new(dir.path().join("uploads.csv")).unwrap();
    (dir, registry)
}

#[tokio::test]
async fn given_new_registry_when_created_then_csv_starts_with_header_row() {
    let (dir, _registry) = create_test_registry();

    let contents = std::fs::read_to_string(dir.path().join("uploads.csv")).unwrap();
    assert!(contents.starts_with(
        "timestamp,deviceName,latitude,longitude,originalname,filename,size,mimetype,path,client_ip"
    ));
}

#[tokio::test]
async fn given_appended_record_when_listing_then_roundtrip_matches() {
    let (_dir, registry) = create_test_registry();
    let original = record("Field Mic", "clip_1.wav", 1_700_000_000);

    registry.append(&original).await.unwrap();
    let rows = registry.list_for_device("Field Mic", 50).await.unwrap();

    assert_eq!(rows, vec![original]);
}

#[tokio::test]
async fn given_mixed_devices_when_listing_then_match_is_case_insensitive() {
    let (_dir, registry) = create_test_registry();
    registry
        .append(&record("Field Mic", "a.wav", 1))
        .await
        .unwrap();
    registry
        .append(&record("other", "b.wav", 2))
        .await
        .unwrap();

    let rows = registry.list_for_device("field mic", 50).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].filename, "a.wav");
}

#[tokio::test]
async fn given_several_records_when_listing_then_newest_first() {
    let (_dir, registry) = create_test_registry();
    registry.append(&record("mic", "old.wav", 1)).await.unwrap();
    registry
        .append(&record("mic", "newest.wav", 300))
        .await
        .unwrap();
    registry.append(&record("mic", "mid.wav", 20)).await.unwrap();

    let rows = registry.list_for_device("mic", 50).await.unwrap();

    let names: Vec<&str> = rows.iter().map(|r| r.filename.as_str()).collect();
    assert_eq!(names, vec!["newest.wav", "mid.wav", "old.wav"]);
}

#[tokio::test]
async fn given_limit_when_listing_then_row_count_is_capped() {
    let (_dir, registry) = create_test_registry();
    for i in 0..5i64 {
        registry
            .append(&record("mic", &format!("clip_{}.wav", i), i))
            .await
            .unwrap();
    }

    let rows = registry.list_for_device("mic", 2).await.unwrap();
    assert_eq!(rows.len(), 2);

    let rows = registry.list_for_device("mic", 0).await.unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn given_missing_csv_when_listing_then_returns_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("uploads.csv");
    let registry = CsvUploadRegistry::new(path.clone()).unwrap();
    std::fs::remove_file(&path).unwrap();

    let rows = registry.list_for_device("mic", 50).await.unwrap();

    assert!(rows.is_empty());
}
