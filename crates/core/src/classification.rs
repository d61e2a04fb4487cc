//! Object-class classification.
//!
//! `object_class` is an open-ended text column; only the three canonical
//! classes get a distinct visual treatment in clients. The match is
//! case-insensitive and anything unrecognised (including a missing or empty
//! value) falls back to the neutral style.

use serde::Serialize;

/// Badge style derived from a record's object class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Safe,
    Euclid,
    Keter,
    Neutral,
}

impl Badge {
    /// Classify a raw `object_class` value.
    pub fn from_object_class(object_class: &str) -> Self {
        match object_class.trim().to_lowercase().as_str() {
            "safe" => Badge::Safe,
            "euclid" => Badge::Euclid,
            "keter" => Badge::Keter,
            _ => Badge::Neutral,
        }
    }
}
