//! Core Data epoch conversion.
//!
//! Timestamps in the cookie container are IEEE-754 doubles counting seconds
//! since 2001-01-01T00:00:00Z (the Core Data reference epoch), stored
//! little-endian.

/// Seconds between the Unix epoch and 2001-01-01T00:00:00Z.
pub const CORE_DATA_EPOCH_OFFSET: i64 = 978_307_200;

/// Convert Core Data seconds to Unix seconds, truncating the fractional
/// part. No timezone handling; the result is an instant in time.
pub fn to_unix(core_data_seconds: f64) -> i64 {
    core_data_seconds as i64 + CORE_DATA_EPOCH_OFFSET
}

/// Decode 8 little-endian bytes as a Core Data timestamp and return Unix
/// seconds. Pure and deterministic: the same bytes always yield the same
/// instant.
pub fn decode_le(raw: &[u8; 8]) -> i64 {
    to_unix(f64::from_le_bytes(*raw))
}
