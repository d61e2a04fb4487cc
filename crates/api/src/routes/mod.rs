pub mod admin;
pub mod health;
pub mod records;

use axum::routing::any;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /ws                          WebSocket change feed
///
/// /records                     public browse list
/// /records/menu                navigation menu entries
/// /records/{id}                public detail view
///
/// /admin/records               admin list, create
/// /admin/records/{id}          update, delete
/// /admin/uploads               image upload to object storage
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ws", any(ws::ws_handler))
        .nest("/records", records::router())
        .nest("/admin", admin::router())
}
