/// Record identifiers are opaque strings (UUID v4, hyphenated).
pub type RecordId = String;

/// Generate a fresh record identifier.
///
/// Random v4 UUIDs are unique for the process lifetime and never reuse the
/// identifier of a deleted record.
pub fn new_record_id() -> RecordId {
    uuid::Uuid::new_v4().to_string()
}
