//! Data structures representing binary cookie container components.

use std::fmt;

use serde::Serialize;

/// A parsed view of the container header over the full file buffer.
///
/// Borrows the input buffer; [`Page`] and [`RawCookieRecord`] are sub-slices
/// of the same buffer and share its lifetime. Only the final
/// [`CookieRecord`] owns its data.
#[derive(Debug)]
pub struct Container<'a> {
    /// The complete file buffer, header included.
    pub data: &'a [u8],
    /// Number of pages declared at header offset 4.
    pub page_count: u32,
    /// Per-page byte sizes from the header table (length == `page_count`).
    pub page_sizes: Vec<u32>,
    /// `8 + 4 * page_count`; the first page payload starts here.
    pub header_size: usize,
}

/// A single page: a contiguous region of the container holding a batch of
/// cookie records plus their offset table.
#[derive(Debug)]
pub struct Page<'a> {
    /// The page's byte span within the container payload.
    pub bytes: &'a [u8],
    /// Number of cookie records declared at page offset 4.
    pub cookie_count: u32,
    /// Record start offsets relative to page start, strictly increasing
    /// (length == `cookie_count`).
    pub offsets: Vec<u32>,
}

impl<'a> Page<'a> {
    /// Slice this page into its raw cookie records using consecutive offset
    /// pairs; the final record runs to end-of-page.
    ///
    /// Offsets are validated during [`records::parse`](super::records::parse),
    /// so slicing here cannot go out of bounds.
    pub fn records(&self) -> Vec<RawCookieRecord<'a>> {
        let mut records = Vec::with_capacity(self.offsets.len());
        for (i, &start) in self.offsets.iter().enumerate() {
            let end = self
                .offsets
                .get(i + 1)
                .map(|&next| next as usize)
                .unwrap_or(self.bytes.len());
            records.push(RawCookieRecord {
                bytes: &self.bytes[start as usize..end],
            });
        }
        records
    }
}

/// The undecoded byte span of one cookie within a page.
#[derive(Debug, Clone, Copy)]
pub struct RawCookieRecord<'a> {
    pub bytes: &'a [u8],
}

/// Secure/HttpOnly attributes decoded from the record's flag word.
///
/// Values other than 0, 1, 4 and 5 are preserved as [`CookieFlags::Unknown`]
/// for diagnostics rather than discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CookieFlags {
    None,
    Secure,
    HttpOnly,
    SecureHttpOnly,
    Unknown(u32),
}

impl CookieFlags {
    /// Map the raw 32-bit flag word to its known attribute combination.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => CookieFlags::None,
            1 => CookieFlags::Secure,
            4 => CookieFlags::HttpOnly,
            5 => CookieFlags::SecureHttpOnly,
            other => CookieFlags::Unknown(other),
        }
    }
}

impl fmt::Display for CookieFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CookieFlags::None => write!(f, "None"),
            CookieFlags::Secure => write!(f, "Secure"),
            CookieFlags::HttpOnly => write!(f, "HttpOnly"),
            CookieFlags::SecureHttpOnly => write!(f, "Secure; HttpOnly"),
            CookieFlags::Unknown(raw) => write!(f, "Unknown ({:#x})", raw),
        }
    }
}

/// A fully decoded cookie. Owns its data and carries no references into the
/// input buffer, so it may outlive the buffer it was decoded from.
///
/// Timestamps are Unix seconds; converting them to human-readable form is the
/// consumer's concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieRecord {
    /// Record size in bytes as declared in the record's own header.
    pub size: u32,
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    pub flags: CookieFlags,
    /// Expiry instant, Unix seconds.
    pub expires: i64,
    /// Last-access instant, Unix seconds.
    pub last_accessed: i64,
}
