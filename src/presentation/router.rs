use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{BlobStore, UploadRegistry};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, upload_audio_handler, upload_history_handler};
use crate::presentation::state::AppState;

// Multipart framing overhead on top of the per-file ceiling.
const BODY_LIMIT_SLACK: usize = 1024 * 1024;

pub fn create_router<B, R>(state: AppState<B, R>) -> Router
where
    B: BlobStore + 'static,
    R: UploadRegistry + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = state.settings.storage.max_upload_bytes as usize + BODY_LIMIT_SLACK;
    let serve_uploads = ServeDir::new(&state.settings.storage.upload_dir);

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/audio",
            post(upload_audio_handler::<B, R>).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/api/audios", get(upload_history_handler::<B, R>))
        .nest_service("/audios", serve_uploads)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
