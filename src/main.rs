use std::sync::Arc;

use tokio::net::TcpListener;

use audiodrop::application::services::UploadService;
use audiodrop::infrastructure::observability::{LogFormat, init_telemetry};
use audiodrop::infrastructure::registry::CsvUploadRegistry;
use audiodrop::infrastructure::storage::LocalBlobStore;
use audiodrop::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let settings = Settings::from_env();

    let format = if settings.logging.json_format {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    init_telemetry(format);

    let blob_store = Arc::new(LocalBlobStore::new(settings.storage.upload_dir.clone())?);
    let registry = Arc::new(CsvUploadRegistry::new(settings.registry.csv_path.clone())?);
    let upload_service = Arc::new(UploadService::new(
        Arc::clone(&blob_store),
        settings.storage.max_upload_bytes,
    ));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);

    let state = AppState {
        upload_service,
        registry,
        settings,
    };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
