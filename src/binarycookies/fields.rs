//! Field extraction from raw cookie records.

use byteorder::{ByteOrder, LittleEndian};

use super::epoch;
use super::error::{CookieError, Result};
use super::models::{CookieFlags, CookieRecord, RawCookieRecord};

/// Byte length of the fixed field region at the start of every record.
pub const MIN_RECORD_LEN: usize = 56;

/// Decode one raw cookie record into an owned [`CookieRecord`].
///
/// Fixed-field layout (byte ranges from record start, little-endian):
/// size [0,4), flags [8,12), domain/name/path/value offsets at
/// [16,20)/[20,24)/[24,28)/[28,32), expires [40,48) and lastAccessed
/// [48,56) as f64 Core Data timestamps. Text fields are NUL-terminated
/// strings at their offsets, bounded by the record's own length.
///
/// # Errors
/// - [`CookieError::TruncatedCookie`] if the record is shorter than 56 bytes
/// - [`CookieError::OffsetOutOfRange`] if a text field offset reaches past
///   the record end
pub fn decode(raw: &RawCookieRecord<'_>) -> Result<CookieRecord> {
    let bytes = raw.bytes;
    if bytes.len() < MIN_RECORD_LEN {
        return Err(CookieError::TruncatedCookie { len: bytes.len() });
    }

    let size = LittleEndian::read_u32(&bytes[0..4]);
    let raw_flags = LittleEndian::read_u32(&bytes[8..12]);

    let domain_offset = LittleEndian::read_u32(&bytes[16..20]) as usize;
    let name_offset = LittleEndian::read_u32(&bytes[20..24]) as usize;
    let path_offset = LittleEndian::read_u32(&bytes[24..28]) as usize;
    let value_offset = LittleEndian::read_u32(&bytes[28..32]) as usize;

    let expires = epoch::to_unix(LittleEndian::read_f64(&bytes[40..48]));
    let last_accessed = epoch::to_unix(LittleEndian::read_f64(&bytes[48..56]));

    Ok(CookieRecord {
        size,
        name: read_text(bytes, name_offset, "name")?,
        value: read_text(bytes, value_offset, "value")?,
        domain: read_text(bytes, domain_offset, "domain")?,
        path: read_text(bytes, path_offset, "path")?,
        flags: CookieFlags::from_raw(raw_flags),
        expires,
        last_accessed,
    })
}

/// Carve a NUL-terminated text field out of the record, scanning forward
/// from `offset` but never past the record's own end. A missing terminator
/// yields the remainder of the record; scanning into a neighboring record is
/// not possible. Bytes are decoded as UTF-8 with lossy replacement.
fn read_text(record: &[u8], offset: usize, field: &'static str) -> Result<String> {
    if offset >= record.len() {
        return Err(CookieError::OffsetOutOfRange {
            context: field,
            offset,
            bound: record.len(),
        });
    }
    let tail = &record[offset..];
    let end = tail.iter().position(|&b| b == 0).unwrap_or(tail.len());
    Ok(String::from_utf8_lossy(&tail[..end]).into_owned())
}
