//! Change-notification infrastructure for the containment catalog.
//!
//! Every committed write to the `records` table publishes a [`RecordChange`]
//! on the [`ChangeBus`]; subscribers (notably the WebSocket change feed)
//! re-run their canonical queries on any event rather than applying local
//! mutations, which keeps them eventually consistent even with writes that
//! originate outside this process's handlers.

pub mod bus;

pub use bus::{ChangeAction, ChangeBus, RecordChange};
