//! Route definitions for the public read surface.

use axum::routing::get;
use axum::Router;

use crate::handlers::records;
use crate::state::AppState;

/// Routes mounted at `/records`.
///
/// ```text
/// GET /          -> list (browse grid summaries)
/// GET /menu      -> menu (id + non-blank titles)
/// GET /{id}      -> get_by_id (full record)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(records::list))
        .route("/menu", get(records::menu))
        .route("/{id}", get(records::get_by_id))
}
