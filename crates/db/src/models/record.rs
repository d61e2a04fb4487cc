//! Record entity model and DTOs.
//!
//! One row per catalogued entry. The id is supplied by the caller on create
//! and never changes; update DTO fields are optional so a partial payload
//! leaves untouched columns as they are.

use containment_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A full row from the `records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Record {
    pub id: RecordId,
    pub object_class: String,
    pub title: String,
    pub containment_procedures: String,
    pub description: String,
    pub additional_info: String,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The column subset the public browse grid needs.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecordSummary {
    pub id: RecordId,
    pub title: String,
    pub object_class: String,
    pub image_url: Option<String>,
}

/// The column pair the navigation menu needs.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MenuEntry {
    pub id: RecordId,
    pub title: String,
}

/// DTO for creating a new record. Only `id` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecord {
    pub id: RecordId,
    #[serde(default)]
    pub object_class: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub containment_procedures: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub additional_info: String,
    pub image_url: Option<String>,
}

/// DTO for updating an existing record. The id is immutable and addressed
/// by the route; absent fields are left unchanged. `image_url` is nested in
/// a double `Option` so a payload can distinguish "leave alone" (absent)
/// from "clear the image" (explicit null).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRecord {
    pub object_class: Option<String>,
    pub title: Option<String>,
    pub containment_procedures: Option<String>,
    pub description: Option<String>,
    pub additional_info: Option<String>,
    #[serde(default, with = "double_option")]
    pub image_url: Option<Option<String>>,
}

/// Serde helper distinguishing an absent `image_url` from an explicit null.
mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(de: D) -> Result<Option<Option<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(de).map(Some)
    }
}
