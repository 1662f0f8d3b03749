//! Display-side entry point for stored embedding records.

use crate::record::EmbeddingRecord;

/// Recover a stored record for display.
///
/// Absent or empty input yields the "No data" sentinel and malformed input
/// yields the "Invalid embedding record JSON" sentinel; this never fails.
pub fn format_record(serialized: Option<&str>) -> EmbeddingRecord {
    EmbeddingRecord::decode(serialized)
}
