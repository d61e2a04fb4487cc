/// Record primary keys are caller-supplied text (e.g. `"173"`), not
/// database-generated integers. They are immutable after creation and are
/// the sole addressing key for detail, edit, and delete operations.
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
