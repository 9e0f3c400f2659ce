//! Progress reporting for document writing.
//!
//! The writer logs its lifecycle through the `log` facade; this module
//! provides a parallel callback capability for callers that want to
//! observe progress programmatically (progress bars, counters, tests).
//!
//! # Example
//!
//! ```rust,no_run
//! use sitemapper::{progress_fn, Entry, SitemapWriter};
//!
//! let mut writer = SitemapWriter::urlset("sitemap.xml")
//!     .progress(progress_fn(|entries| println!("{} entries so far", entries)));
//! ```

use std::path::Path;

/// Progress reporting trait for document writing.
///
/// All methods have no-op defaults; implement only the hooks you need.
/// The writer calls them synchronously from the thread doing the I/O.
pub trait ProgressReporter: Send {
    /// Called once when `begin` has opened the document.
    fn on_begin(&mut self, path: &Path) {
        let _ = path;
    }

    /// Called whenever the entry count reaches an exact multiple of the
    /// dialect's reporting interval (10000 for sitemaps, 100 for
    /// sitemap indexes).
    fn on_progress(&mut self, entries: u64) {
        let _ = entries;
    }

    /// Called once when `end` has closed the document.
    fn on_end(&mut self, entries: u64) {
        let _ = entries;
    }

    /// Called after the gzip copy of a finished document was written.
    #[cfg(feature = "gzip")]
    fn on_compressed(&mut self, path: &Path) {
        let _ = path;
    }
}

/// A reporter that ignores all notifications.
///
/// This is the default for writers constructed without an explicit
/// reporter.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {}

/// A [`ProgressReporter`] wrapping a closure.
///
/// Created by [`progress_fn`]; the closure receives the entry count at
/// each reporting-interval boundary.
pub struct ProgressFn<F>(F);

impl<F: FnMut(u64) + Send> ProgressReporter for ProgressFn<F> {
    fn on_progress(&mut self, entries: u64) {
        (self.0)(entries);
    }
}

/// Wraps a closure as a [`ProgressReporter`].
///
/// # Example
///
/// ```rust
/// use sitemapper::progress_fn;
///
/// let reporter = progress_fn(|entries| eprintln!("at {} entries", entries));
/// ```
pub fn progress_fn<F: FnMut(u64) + Send>(f: F) -> ProgressFn<F> {
    ProgressFn(f)
}
