//! Container validation and fixed-offset header parsing.

use byteorder::{BigEndian, ByteOrder};
use log::debug;

use super::error::{CookieError, Result};
use super::models::Container;
use super::utils;

/// ASCII magic at the start of every binary cookie container.
pub const MAGIC: &[u8; 4] = b"cook";

/// Check that the buffer starts with the `cook` magic and is long enough to
/// hold the fixed 8-byte prelude. Must run before anything else touches the
/// buffer.
pub fn validate_magic(data: &[u8]) -> Result<()> {
    if data.len() < 8 {
        return Err(CookieError::InvalidFormat(format!(
            "buffer too short for container header: {} bytes",
            data.len()
        )));
    }
    if &data[..4] != MAGIC {
        return Err(CookieError::InvalidFormat(
            "missing `cook` magic number".to_string(),
        ));
    }
    Ok(())
}

/// Parse the container header into a [`Container`] view.
///
/// Header layout: bytes [0,4) magic, [4,8) page count, then `page_count`
/// consecutive per-page byte sizes. The header integers are stored
/// big-endian, unlike everything inside the page region.
///
/// # Errors
/// - [`CookieError::InvalidFormat`] on a missing magic or a sub-8-byte buffer
/// - [`CookieError::InvalidPageCount`] if the declared page count implies a
///   header larger than the buffer
/// - [`CookieError::TruncatedHeader`] if the page-size table cannot be read
pub fn parse(data: &[u8]) -> Result<Container<'_>> {
    validate_magic(data)?;

    // validate_magic guarantees the 8-byte prelude is present
    let page_count = BigEndian::read_u32(&data[4..8]);

    // u64 arithmetic: 8 + 4 * page_count can exceed a 32-bit usize
    let header_size = 8u64 + 4 * page_count as u64;
    if header_size > data.len() as u64 {
        return Err(CookieError::InvalidPageCount {
            count: page_count,
            header_size,
            buffer_len: data.len() as u64,
        });
    }
    let header_size = header_size as usize;

    let mut page_sizes = Vec::with_capacity(page_count as usize);
    for i in 0..page_count as usize {
        let size = utils::read_u32_be(data, 8 + 4 * i).ok_or(CookieError::TruncatedHeader {
            needed: 8 + 4 * (i + 1),
            available: data.len(),
        })?;
        page_sizes.push(size);
    }

    debug!(
        "Container header: {} pages, {} byte header, {} byte buffer",
        page_count,
        header_size,
        data.len()
    );

    Ok(Container {
        data,
        page_count,
        page_sizes,
        header_size,
    })
}
