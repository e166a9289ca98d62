//! Bounds-checked byte reading utilities.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Read a big-endian u32 at `offset`, returning `None` if the buffer is too
/// short. The container header stores its integers in byte order as written.
pub fn read_u32_be(buf: &[u8], offset: usize) -> Option<u32> {
    let end = offset.checked_add(4)?;
    if end > buf.len() {
        return None;
    }
    Some(BigEndian::read_u32(&buf[offset..end]))
}

/// Read a little-endian u32 at `offset`, returning `None` if the buffer is
/// too short. Used for every multi-byte integer inside the page region.
pub fn read_u32_le(buf: &[u8], offset: usize) -> Option<u32> {
    let end = offset.checked_add(4)?;
    if end > buf.len() {
        return None;
    }
    Some(LittleEndian::read_u32(&buf[offset..end]))
}
