//! # binarycookies-reader
//!
//! A decoder for Apple's binary cookie container format, the
//! `Cookies.binarycookies` file written by Safari and iOS/iPadOS.
//!
//! The decoder works on an in-memory byte buffer and never performs file
//! I/O itself. Feed it the file contents and it returns owned
//! [`CookieRecord`] values:
//!
//! ```no_run
//! # fn main() -> binarycookies_reader::Result<()> {
//! let data = std::fs::read("Cookies.binarycookies").unwrap();
//! for cookie in binarycookies_reader::decode(&data)? {
//!     println!("{}={} ({})", cookie.name, cookie.value, cookie.domain);
//! }
//! # Ok(())
//! # }
//! ```
pub mod binarycookies;

// Re-export the main types for convenience
pub use binarycookies::{
    decode, decode_with,
    error::{CookieError, Result},
    models::{Container, CookieFlags, CookieRecord, Page, RawCookieRecord},
    DecodeOptions, MalformedRecordPolicy,
};
