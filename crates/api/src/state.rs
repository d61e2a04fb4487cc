use std::sync::Arc;

use containment_events::ChangeBus;

use crate::config::ServerConfig;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: containment_db::DbPool,
    /// Server configuration, constructed once at startup and read-only after.
    pub config: Arc<ServerConfig>,
    /// WebSocket connection manager (change-feed subscribers).
    pub ws_manager: Arc<WsManager>,
    /// Change bus every committed record write publishes to.
    pub change_bus: Arc<ChangeBus>,
}
