//! Splitting the post-header payload into page byte spans.

use log::{debug, warn};

use super::error::{CookieError, Result};
use super::models::Container;

/// Partition the container payload into page spans using the cumulative
/// sizes from the header table.
///
/// The final page always extends to end-of-buffer; if its table size
/// disagrees with the remaining byte count the mismatch is logged as a
/// warning rather than corrupting the last page.
///
/// # Errors
/// Returns [`CookieError::TruncatedPage`] if a non-final page would extend
/// past the end of the buffer.
pub fn split<'a>(container: &Container<'a>) -> Result<Vec<&'a [u8]>> {
    let data = container.data;
    let mut cursor = container.header_size;
    let mut pages = Vec::with_capacity(container.page_sizes.len());

    for (i, &size) in container.page_sizes.iter().enumerate() {
        let is_last = i + 1 == container.page_sizes.len();
        if is_last {
            let tail = &data[cursor..];
            if tail.len() != size as usize {
                warn!(
                    "final page size mismatch: header table says {} bytes, {} remain",
                    size,
                    tail.len()
                );
            }
            pages.push(tail);
        } else {
            let end = cursor.saturating_add(size as usize);
            if end > data.len() {
                return Err(CookieError::TruncatedPage {
                    context: "page payload",
                    needed: end,
                    available: data.len(),
                });
            }
            pages.push(&data[cursor..end]);
            cursor = end;
        }
    }

    debug!("Split payload into {} pages", pages.len());
    Ok(pages)
}
