//! Route definitions for the admin surface.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{admin, uploads};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /records        -> list (previews + image indicator)
/// POST   /records        -> create
/// PUT    /records/{id}   -> update
/// DELETE /records/{id}   -> delete
/// POST   /uploads        -> upload an image to object storage
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/records", get(admin::list).post(admin::create))
        .route("/records/{id}", put(admin::update).delete(admin::delete))
        .route(
            "/uploads",
            post(uploads::upload).layer(DefaultBodyLimit::max(uploads::MAX_UPLOAD_BYTES)),
        )
}
