//! In-process change bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`ChangeBus`] is the publish/subscribe hub for [`RecordChange`] events.
//! It is designed to be shared via `Arc<ChangeBus>` across the application.

use chrono::{DateTime, Utc};
use containment_core::types::RecordId;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// The kind of row-level change that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeAction {
    Insert,
    Update,
    Delete,
}

/// A row-level change on the `records` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordChange {
    pub action: ChangeAction,
    pub record_id: RecordId,
    /// When the change was observed (UTC).
    pub timestamp: DateTime<Utc>,
}

impl RecordChange {
    pub fn new(action: ChangeAction, record_id: impl Into<RecordId>) -> Self {
        Self {
            action,
            record_id: record_id.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// In-process fan-out change bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`RecordChange`].
pub struct ChangeBus {
    sender: broadcast::Sender<RecordChange>,
}

impl ChangeBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest un-consumed messages are dropped
    /// and slow receivers observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish a change to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped;
    /// consumers re-read from the database anyway, so a missed event costs
    /// nothing but freshness.
    pub fn publish(&self, change: RecordChange) {
        // Ignore the SendError — it only means there are zero receivers.
        let _ = self.sender.send(change);
    }

    /// Subscribe to all changes published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<RecordChange> {
        self.sender.subscribe()
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
