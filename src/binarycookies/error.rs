//! Custom error types for the binarycookies-reader crate.

use thiserror::Error;

/// The primary error type for all decode operations in this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CookieError {
    /// The buffer does not carry the `cook` magic, or is too short to hold it.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// The declared page count implies a header larger than the buffer.
    #[error("Invalid page count {count}: header of {header_size} bytes exceeds buffer of {buffer_len} bytes")]
    InvalidPageCount {
        count: u32,
        header_size: u64,
        buffer_len: u64,
    },

    /// The buffer ended before the page-size table was fully read.
    #[error("Truncated header: need {needed} bytes, buffer has {available}")]
    TruncatedHeader { needed: usize, available: usize },

    /// A page span or a page's own offset table extends past its bounds.
    #[error("Truncated page: {context} needs {needed} bytes, {available} available")]
    TruncatedPage {
        context: &'static str,
        needed: usize,
        available: usize,
    },

    /// A cookie record is shorter than the 56-byte fixed field region.
    #[error("Truncated cookie record: {len} bytes, fixed fields need 56")]
    TruncatedCookie { len: usize },

    /// An offset points outside its bounding page or record, or the offset
    /// table is not strictly increasing.
    #[error("Offset out of range for {context}: offset {offset}, bound {bound}")]
    OffsetOutOfRange {
        context: &'static str,
        offset: usize,
        bound: usize,
    },
}

/// A convenience `Result` type alias using the crate's `CookieError` type.
pub type Result<T> = std::result::Result<T, CookieError>;
