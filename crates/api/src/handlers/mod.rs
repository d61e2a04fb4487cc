//! Request handlers.
//!
//! Each submodule provides async handler functions for one surface of the
//! API. Handlers delegate to `RecordRepo` in `containment_db` and map
//! errors via [`AppError`](crate::error::AppError); every committed write
//! publishes a change on the bus.

pub mod admin;
pub mod records;
pub mod uploads;
