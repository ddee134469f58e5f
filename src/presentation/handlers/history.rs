use axum::Json;
use axum::extract::{Query, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::ports::{BlobStore, UploadRegistry};
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Deserialize)]
pub struct HistoryQuery {
    #[serde(rename = "deviceName")]
    pub device_name: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "deviceName")]
    pub device_name: String,
    pub filename: String,
    pub size: u64,
    #[serde(rename = "urlPath")]
    pub url_path: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// `GET /api/audios?deviceName=…&limit=…`: newest uploads first for one
/// device.
pub async fn upload_history_handler<B, R>(
    State(state): State<AppState<B, R>>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryEntry>>, ApiError>
where
    B: BlobStore + 'static,
    R: UploadRegistry + 'static,
{
    let device = query.device_name.unwrap_or_default();
    if device.trim().is_empty() {
        return Err(ApiError::BadRequest("deviceName is required".to_string()));
    }

    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let rows = state
        .registry
        .list_for_device(&device, limit)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let entries = rows
        .into_iter()
        .map(|row| {
            let url_path = format!("/audios/{}", row.filename);
            HistoryEntry {
                timestamp: row.timestamp,
                device_name: row.device_name,
                filename: row.filename,
                size: row.size,
                url_path,
                latitude: row.latitude,
                longitude: row.longitude,
            }
        })
        .collect();

    Ok(Json(entries))
}
