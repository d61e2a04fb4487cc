//! Record id rules.

use crate::error::CoreError;

/// Validate a caller-supplied record id.
///
/// Ids are URL path segments, so an id must be non-empty after trimming and
/// may not contain `/`. No other constraint applies; everything else about
/// a record is optional free text.
pub fn validate_record_id(id: &str) -> Result<(), CoreError> {
    if id.trim().is_empty() {
        return Err(CoreError::Validation("id must not be empty".into()));
    }
    if id.contains('/') {
        return Err(CoreError::Validation("id must not contain '/'".into()));
    }
    Ok(())
}
