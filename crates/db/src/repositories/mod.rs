//! Repository layer.
//!
//! Repositories are zero-sized structs providing async CRUD methods that
//! accept `&PgPool` as the first argument.

pub mod record_repo;

pub use record_repo::RecordRepo;
