//! Record framing within a page: the offset table and raw record slices.

use log::debug;

use super::error::{CookieError, Result};
use super::models::Page;
use super::utils;

/// Parse a page's record offset table into a [`Page`].
///
/// Page layout: bytes [0,4) are a reserved marker (ignored), [4,8) hold the
/// cookie count, followed by `cookie_count` record offsets relative to page
/// start. All integers in the page region are little-endian, the cookie
/// count included.
///
/// # Errors
/// - [`CookieError::TruncatedPage`] if the page cannot hold its own count
///   field or offset table
/// - [`CookieError::OffsetOutOfRange`] if an offset reaches past the page or
///   the table is not strictly increasing
pub fn parse(bytes: &[u8]) -> Result<Page<'_>> {
    let cookie_count = utils::read_u32_le(bytes, 4).ok_or(CookieError::TruncatedPage {
        context: "page cookie count",
        needed: 8,
        available: bytes.len(),
    })?;

    // Table bounds before any allocation sized by the untrusted count
    let table_end = 8u64 + 4 * cookie_count as u64;
    if table_end > bytes.len() as u64 {
        return Err(CookieError::TruncatedPage {
            context: "page offset table",
            needed: table_end.min(usize::MAX as u64) as usize,
            available: bytes.len(),
        });
    }

    let mut offsets = Vec::with_capacity(cookie_count as usize);
    for i in 0..cookie_count as usize {
        let offset = utils::read_u32_le(bytes, 8 + 4 * i).ok_or(CookieError::TruncatedPage {
            context: "page offset table",
            needed: 8 + 4 * (i + 1),
            available: bytes.len(),
        })?;

        if offset as usize >= bytes.len() {
            return Err(CookieError::OffsetOutOfRange {
                context: "cookie record start",
                offset: offset as usize,
                bound: bytes.len(),
            });
        }
        if let Some(&prev) = offsets.last() {
            if offset <= prev {
                return Err(CookieError::OffsetOutOfRange {
                    context: "offset table (not strictly increasing)",
                    offset: offset as usize,
                    bound: prev as usize,
                });
            }
        }
        offsets.push(offset);
    }

    debug!("Page holds {} cookie records", cookie_count);

    Ok(Page {
        bytes,
        cookie_count,
        offsets,
    })
}
