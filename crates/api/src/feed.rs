//! Change-feed broadcaster.
//!
//! [`ChangeFeed`] subscribes to the record change bus and pushes each event
//! to every connected WebSocket client as a JSON text frame. Clients react
//! by re-running their canonical queries; the feed carries only the fact of
//! the change, never row data.

use std::sync::Arc;

use axum::extract::ws::Message;
use containment_events::RecordChange;
use tokio::sync::broadcast;

use crate::ws::WsManager;

/// Forwards record changes from the bus to WebSocket subscribers.
pub struct ChangeFeed {
    ws_manager: Arc<WsManager>,
}

impl ChangeFeed {
    /// Create a new feed over the given connection manager.
    pub fn new(ws_manager: Arc<WsManager>) -> Self {
        Self { ws_manager }
    }

    /// Run the main forwarding loop.
    ///
    /// Consumes changes from `receiver` until the channel closes (i.e. the
    /// [`ChangeBus`](containment_events::ChangeBus) is dropped at shutdown).
    pub async fn run(self, mut receiver: broadcast::Receiver<RecordChange>) {
        loop {
            match receiver.recv().await {
                Ok(change) => self.forward(&change).await,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Change feed lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Change bus closed, change feed shutting down");
                    break;
                }
            }
        }
    }

    /// Serialize one change and broadcast it to all connections.
    async fn forward(&self, change: &RecordChange) {
        let json = match serde_json::to_string(change) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize record change");
                return;
            }
        };
        tracing::debug!(record_id = %change.record_id, action = ?change.action, "Broadcasting change");
        self.ws_manager.broadcast(Message::Text(json.into())).await;
    }
}
