//! Handlers for the admin CRUD surface.
//!
//! Writes go straight to the repository; on success a [`RecordChange`] is
//! published so change-feed subscribers can re-read. There is no optimistic
//! client state to reconcile -- consumers always re-fetch after a write.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use containment_core::error::CoreError;
use containment_core::preview::preview;
use containment_core::record::validate_record_id;
use containment_core::types::RecordId;
use containment_db::models::record::{CreateRecord, Record, UpdateRecord};
use containment_db::repositories::RecordRepo;
use containment_events::{ChangeAction, RecordChange};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// One row of the admin table: truncated previews of the long-text fields
/// and a presence flag instead of the raw image URL.
#[derive(Debug, Serialize)]
pub struct AdminRecordRow {
    pub id: RecordId,
    pub object_class: String,
    pub title: String,
    pub containment_preview: Option<String>,
    pub description_preview: Option<String>,
    pub additional_info_preview: Option<String>,
    pub has_image: bool,
}

impl From<Record> for AdminRecordRow {
    fn from(record: Record) -> Self {
        Self {
            containment_preview: preview(&record.containment_procedures),
            description_preview: preview(&record.description),
            additional_info_preview: preview(&record.additional_info),
            has_image: record.image_url.is_some(),
            id: record.id,
            object_class: record.object_class,
            title: record.title,
        }
    }
}

/// GET /api/v1/admin/records
///
/// Admin table rows for all records, ordered by ascending id.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows: Vec<AdminRecordRow> = RecordRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(AdminRecordRow::from)
        .collect();
    Ok(Json(DataResponse { data: rows }))
}

/// POST /api/v1/admin/records
///
/// Create a new record. The id is caller-supplied and must be valid; a
/// duplicate id maps to 409 via the unique-violation classifier.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateRecord>,
) -> AppResult<impl IntoResponse> {
    validate_record_id(&input.id)?;

    let record = RecordRepo::create(&state.pool, &input).await?;

    state
        .change_bus
        .publish(RecordChange::new(ChangeAction::Insert, record.id.clone()));
    tracing::info!(record_id = %record.id, "Record created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// PUT /api/v1/admin/records/{id}
///
/// Update an existing record. Absent payload fields are left unchanged;
/// the id itself is immutable.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    Json(input): Json<UpdateRecord>,
) -> AppResult<impl IntoResponse> {
    let record = RecordRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Record",
            id,
        }))?;

    state
        .change_bus
        .publish(RecordChange::new(ChangeAction::Update, record.id.clone()));
    tracing::info!(record_id = %record.id, "Record updated");

    Ok(Json(DataResponse { data: record }))
}

/// DELETE /api/v1/admin/records/{id}
///
/// Delete a record by id. Irreversible; a subsequent list fetch will not
/// include the row.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<StatusCode> {
    let deleted = RecordRepo::delete(&state.pool, &id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Record",
            id,
        }));
    }

    state
        .change_bus
        .publish(RecordChange::new(ChangeAction::Delete, id.clone()));
    tracing::info!(record_id = %id, "Record deleted");

    Ok(StatusCode::NO_CONTENT)
}
