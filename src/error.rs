//! Error types for sitemap writing operations.
//!
//! This module provides the [`Error`] enum which represents all possible
//! failure modes when writing sitemap documents, along with a convenient
//! [`Result<T>`] type alias.
//!
//! # Error Handling
//!
//! All fallible operations in this crate return `Result<T, Error>`. You can
//! handle errors using pattern matching or the `?` operator:
//!
//! ```rust,no_run
//! use sitemapper::{Entry, Result, SitemapWriter};
//!
//! fn write_sitemap(path: &str) -> Result<()> {
//!     let mut writer = SitemapWriter::urlset(path);
//!     writer.begin()?;
//!     writer.add_entry(&Entry::new().loc("http://example.com/"))?;
//!     writer.end()?;
//!     Ok(())
//! }
//! ```
//!
//! For fine-grained handling, match on specific variants:
//!
//! ```rust,no_run
//! use sitemapper::{Error, SitemapWriter};
//!
//! fn begin_with_report(writer: &mut SitemapWriter) {
//!     match writer.begin() {
//!         Ok(()) => {}
//!         Err(Error::Io(e)) => eprintln!("cannot open output: {}", e),
//!         Err(Error::InvalidState { operation, state }) => {
//!             eprintln!("{} called on a {} document", operation, state);
//!         }
//!         Err(e) => eprintln!("error: {}", e),
//!     }
//! }
//! ```

use std::io;

/// The main error type for sitemap writing operations.
///
/// Each variant includes relevant context to help diagnose the issue.
/// I/O errors are never recovered internally; they propagate to the
/// caller with the underlying [`io::ErrorKind`] intact.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred during file operations.
    ///
    /// This wraps [`std::io::Error`] and is returned when the destination
    /// file cannot be opened, written, closed, or compressed. Common
    /// causes include:
    /// - Missing parent directory
    /// - Permission denied
    /// - Disk full
    ///
    /// Check the underlying [`std::io::ErrorKind`] for specific handling.
    /// A failed [`end`](crate::SitemapWriter::end) may leave an
    /// unterminated XML file on disk; no rollback is attempted.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A lifecycle operation was called in the wrong state.
    ///
    /// Returned when `begin` is called on a document that was already
    /// begun, or when `add_entry`/`end` is called on a document that is
    /// not open. The document on disk is left untouched by the rejected
    /// call.
    #[error("invalid state for {operation}: document is {state}")]
    InvalidState {
        /// The operation that was rejected.
        operation: &'static str,
        /// The lifecycle state the writer was found in.
        state: &'static str,
    },

    /// An invalid gzip compression level was provided.
    ///
    /// Levels must be in the range 0-9:
    /// - 0: No compression (store only)
    /// - 1-3: Fast compression, lower ratio
    /// - 4-6: Balanced compression (default is 6)
    /// - 7-9: Maximum compression, slower
    #[cfg(feature = "gzip")]
    #[error("invalid gzip level {level}: must be 0-9")]
    InvalidGzipLevel {
        /// The invalid level that was provided.
        level: u32,
    },
}

impl Error {
    /// Returns `true` if this error is a lifecycle state violation.
    ///
    /// State errors indicate a caller bug (calling operations out of
    /// order) rather than an environmental failure, so retrying the same
    /// call can never succeed.
    pub fn is_state_error(&self) -> bool {
        matches!(self, Error::InvalidState { .. })
    }

    /// Returns `true` if this error might be transient.
    ///
    /// Only interrupted or timed-out I/O qualifies; state errors and
    /// non-transient I/O failures like `PermissionDenied` indicate issues
    /// that won't resolve on retry.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Io(e) => matches!(
                e.kind(),
                io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted | io::ErrorKind::TimedOut
            ),
            _ => false,
        }
    }
}

/// A specialized Result type for sitemap operations.
///
/// This is defined as `std::result::Result<T, Error>` for convenience.
pub type Result<T> = std::result::Result<T, Error>;
