//! Handler for image uploads into object storage.
//!
//! Uploads are stored under a freshly generated unique key preserving the
//! original file extension, then served back via the `/files` static route.
//! An upload that fails leaves no row-store trace; the caller decides
//! whether and when to attach the returned URL to a record.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use containment_core::storage::object_key;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum accepted upload size in bytes.
///
/// Axum's default body limit is 2 MB, which real camera images routinely
/// exceed; the uploads route raises it to this value explicitly.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Response payload for a stored object.
#[derive(Debug, Serialize)]
pub struct StoredObject {
    /// Key of the object within the storage root.
    pub key: String,
    /// Public URL the object is retrievable at.
    pub url: String,
}

/// POST /api/v1/admin/uploads
///
/// Accepts a multipart form with a required `file` field. The bytes are
/// written to the storage root under a unique key and the derived public
/// URL is returned.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut file_data: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "file" {
            let filename = field.file_name().unwrap_or("upload.bin").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            file_data = Some((filename, data.to_vec()));
        }
        // ignore unknown fields
    }

    let (filename, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    let key = object_key(&filename);

    tokio::fs::create_dir_all(&state.config.storage_root)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let path = state.config.storage_root.join(&key);
    tokio::fs::write(&path, &data)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let url = state.config.public_object_url(&key);
    tracing::info!(%key, size = data.len(), "Stored uploaded object");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: StoredObject { key, url },
        }),
    ))
}
