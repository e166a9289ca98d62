//! Core binary cookie decoding module.
//!
//! The pipeline runs strictly forward over an in-memory buffer:
//! bytes → validated container → page spans → raw records → decoded records.
//! No stage mutates another stage's output after handoff.

pub mod epoch;
pub mod error;
pub mod fields;
pub mod header;
pub mod models;
pub mod pages;
pub mod records;
mod utils;

use log::{debug, info, warn};

pub use error::{CookieError, Result};
use models::CookieRecord;

/// Policy for cookie records that fail field decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedRecordPolicy {
    /// Abort the whole decode on the first malformed record (default,
    /// matching the historical extractor behavior).
    #[default]
    Fail,
    /// Skip malformed records with a logged warning and return the rest.
    Skip,
}

/// Decoder configuration. Passed explicitly by the caller; nothing in the
/// pipeline reads ambient state.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOptions {
    pub malformed_records: MalformedRecordPolicy,
}

/// Decode a complete binary cookie container with default options.
///
/// See [`decode_with`] for errors and the malformed-record policy.
pub fn decode(data: &[u8]) -> Result<Vec<CookieRecord>> {
    decode_with(data, &DecodeOptions::default())
}

/// Decode a complete binary cookie container.
///
/// Container-level failures (bad magic, truncated header or page, corrupt
/// offset table) are always fatal. Per-record failures follow
/// [`DecodeOptions::malformed_records`]. Records are returned in original
/// page and record order.
///
/// # Errors
/// Returns an error if:
/// - The buffer lacks the `cook` magic or is shorter than 8 bytes
/// - The header or a non-final page is truncated
/// - An offset table is corrupt
/// - A record is malformed and the policy is [`MalformedRecordPolicy::Fail`]
pub fn decode_with(data: &[u8], options: &DecodeOptions) -> Result<Vec<CookieRecord>> {
    let container = header::parse(data)?;
    info!(
        "Decoding container: {} pages, {} byte header",
        container.page_count, container.header_size
    );

    let page_spans = pages::split(&container)?;

    let mut cookies = Vec::new();
    for (page_index, span) in page_spans.iter().enumerate() {
        let page = records::parse(span)?;
        debug!("Page {}: {} cookie records", page_index, page.cookie_count);

        for raw in page.records() {
            match fields::decode(&raw) {
                Ok(cookie) => cookies.push(cookie),
                Err(e) if options.malformed_records == MalformedRecordPolicy::Skip => {
                    warn!("Skipping malformed cookie record in page {}: {}", page_index, e);
                }
                Err(e) => return Err(e),
            }
        }
    }

    info!("Decoded {} cookies from {} pages", cookies.len(), page_spans.len());
    Ok(cookies)
}
