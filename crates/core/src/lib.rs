//! Domain logic for the containment catalog.
//!
//! Pure, dependency-light building blocks shared by the database and API
//! layers: the record id newtype rules, object-class classification,
//! long-text previews, and object-storage key generation.

pub mod classification;
pub mod error;
pub mod preview;
pub mod record;
pub mod storage;
pub mod types;
