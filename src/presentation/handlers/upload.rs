use std::io;

use axum::Json;
use axum::extract::State;
use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::http::HeaderMap;
use chrono::Utc;
use futures::StreamExt;
use futures::stream;
use serde::Serialize;

use crate::application::ports::{BlobStore, UploadRegistry};
use crate::domain::{StoredUpload, UploadRecord};
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub ok: bool,
    pub filename: String,
    pub size: u64,
    pub path: String,
}

/// `POST /api/audio`: one multipart file under the `audio` field.
///
/// The field's bytes are streamed into the blob store as they arrive. The
/// optional `deviceName`/`latitude`/`longitude` text fields end up in the
/// upload registry; every other field is ignored.
pub async fn upload_audio_handler<B, R>(
    State(state): State<AppState<B, R>>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError>
where
    B: BlobStore + 'static,
    R: UploadRegistry + 'static,
{
    let mut multipart = multipart
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart body: {}", e)))?;

    let mut device_name = String::new();
    let mut latitude: Option<String> = None;
    let mut longitude: Option<String> = None;
    let mut stored: Option<(StoredUpload, String, String)> = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "audio" if stored.is_none() => {
                let original_name = field.file_name().unwrap_or("audio.wav").to_string();
                let mime_type = field.content_type().unwrap_or("").to_string();

                tracing::debug!(
                    original_name = %original_name,
                    mime_type = %mime_type,
                    "receiving audio upload"
                );

                let byte_stream = stream::try_unfold(field, |mut f| async move {
                    match f.chunk().await {
                        Ok(Some(bytes)) => Ok(Some((bytes, f))),
                        Ok(None) => Ok(None),
                        Err(e) => Err(io::Error::other(e)),
                    }
                })
                .boxed();

                let upload = state
                    .upload_service
                    .save(&original_name, byte_stream)
                    .await?;
                stored = Some((upload, original_name, mime_type));
            }
            "deviceName" => device_name = field.text().await.map_err(bad_multipart)?,
            "latitude" => latitude = Some(field.text().await.map_err(bad_multipart)?),
            "longitude" => longitude = Some(field.text().await.map_err(bad_multipart)?),
            _ => {}
        }
    }

    let Some((upload, original_name, mime_type)) = stored else {
        return Err(ApiError::BadRequest("No file provided".to_string()));
    };

    let record = UploadRecord {
        timestamp: Utc::now(),
        device_name,
        latitude,
        longitude,
        original_name,
        filename: upload.filename.clone(),
        size: upload.size_bytes,
        mime_type,
        path: upload.path.display().to_string(),
        client_ip: client_ip(&headers),
    };

    if let Err(e) = state.registry.append(&record).await {
        tracing::warn!(
            error = %e,
            filename = %upload.filename,
            "upload stored but not recorded in registry"
        );
    }

    tracing::info!(
        filename = %upload.filename,
        size = upload.size_bytes,
        "audio upload stored"
    );

    Ok(Json(UploadResponse {
        ok: true,
        filename: upload.filename,
        size: upload.size_bytes,
        path: upload.path.display().to_string(),
    }))
}

fn bad_multipart(e: MultipartError) -> ApiError {
    ApiError::BadRequest(format!("Failed to read multipart body: {}", e))
}

fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}
