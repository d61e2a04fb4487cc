//! Handlers for the public read surface.
//!
//! Read-only views over the catalog: the browse grid, the navigation menu,
//! and the full detail view. No pagination or filtering; every request is a
//! fresh read of backend truth.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use containment_core::classification::Badge;
use containment_core::error::CoreError;
use containment_core::types::RecordId;
use containment_db::models::record::RecordSummary;
use containment_db::repositories::RecordRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// One card in the public browse grid: the summary columns plus the
/// server-computed badge style for the object class.
#[derive(Debug, Serialize)]
pub struct RecordCard {
    pub id: RecordId,
    pub title: String,
    pub object_class: String,
    pub badge: Badge,
    pub image_url: Option<String>,
}

impl From<RecordSummary> for RecordCard {
    fn from(summary: RecordSummary) -> Self {
        Self {
            badge: Badge::from_object_class(&summary.object_class),
            id: summary.id,
            title: summary.title,
            object_class: summary.object_class,
            image_url: summary.image_url,
        }
    }
}

/// GET /api/v1/records
///
/// Browse grid: id, title, object class + badge, image URL, ordered by
/// ascending id. An empty catalog is an empty array, not an error.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cards: Vec<RecordCard> = RecordRepo::list_summaries(&state.pool)
        .await?
        .into_iter()
        .map(RecordCard::from)
        .collect();
    Ok(Json(DataResponse { data: cards }))
}

/// GET /api/v1/records/menu
///
/// Navigation menu entries: id + title for every record with a non-blank
/// title, ordered by ascending id.
pub async fn menu(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = RecordRepo::list_menu_entries(&state.pool).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/records/{id}
///
/// Full record detail. Unknown ids are a clean 404.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<impl IntoResponse> {
    let record = RecordRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Record",
            id,
        }))?;
    Ok(Json(DataResponse { data: record }))
}
