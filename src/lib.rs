//! # sitemapper
//!
//! A streaming writer for XML sitemaps and sitemap index files.
//!
//! This crate produces documents conforming to the
//! [Sitemaps protocol](https://www.sitemaps.org/protocol.html): it opens a
//! destination file, streams well-formed XML entry blocks as they arrive,
//! and finalizes the document, optionally producing a gzip-compressed copy
//! alongside it.
//!
//! ## Quick Start
//!
//! ### Writing a Sitemap
//!
//! ```rust,no_run
//! use sitemapper::{Entry, Result, SitemapWriter};
//!
//! fn main() -> Result<()> {
//!     let mut writer = SitemapWriter::urlset("sitemap.xml");
//!
//!     writer.begin()?;
//!     writer.add_entry(
//!         &Entry::new()
//!             .loc("http://example.com/")
//!             .lastmod("2024-01-15")
//!             .priority("0.8"),
//!     )?;
//!     let result = writer.end()?;
//!
//!     println!("Wrote {} entries", result.entries_written);
//!     Ok(())
//! }
//! ```
//!
//! ### Writing a Sitemap Index
//!
//! ```rust,no_run
//! use sitemapper::{Entry, Result, SitemapWriter};
//!
//! fn main() -> Result<()> {
//!     let mut writer = SitemapWriter::index("sitemap_index.xml");
//!
//!     writer.begin()?;
//!     writer.add_entry(&Entry::new().loc("http://example.com/sitemap1.xml"))?;
//!     writer.add_entry(&Entry::new().loc("http://example.com/sitemap2.xml"))?;
//!     writer.end()?;
//!     Ok(())
//! }
//! ```
//!
//! ### Producing a Gzip Copy
//!
//! ```rust,ignore
//! # #[cfg(feature = "gzip")]
//! use sitemapper::{Entry, Result, SitemapWriter, WriteOptions};
//!
//! # #[cfg(feature = "gzip")]
//! fn main() -> Result<()> {
//!     let mut writer = SitemapWriter::urlset("sitemap.xml")
//!         .options(WriteOptions::new().gzip(true));
//!
//!     writer.begin()?;
//!     writer.add_entry(&Entry::new().loc("http://example.com/"))?;
//!     let result = writer.end()?;
//!
//!     // The uncompressed file is retained; the copy lands at sitemap.xml.gz
//!     assert!(result.compressed_path.is_some());
//!     Ok(())
//! }
//! # #[cfg(not(feature = "gzip"))]
//! # fn main() {}
//! ```
//!
//! ## Document Lifecycle
//!
//! A writer is single-use and moves through three states:
//!
//! 1. **Created** — path and options bound, no I/O performed yet.
//! 2. **Open** — after [`begin`](SitemapWriter::begin): the stream is open,
//!    the header is written, and entries may be added.
//! 3. **Finished** — after [`end`](SitemapWriter::end): the footer is
//!    written and the stream is closed.
//!
//! Calling an operation outside its state fails with
//! [`Error::InvalidState`] rather than corrupting the document.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `gzip` | Yes | Gzip-compressed copies of finished documents |
//!
//! ## Error Handling
//!
//! All operations return [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`. I/O failures propagate as
//! [`Error::Io`] with the underlying [`std::io::ErrorKind`] intact.
//!
//! ## Scope
//!
//! The crate does not validate URLs, resolve relative paths, or split
//! documents when the protocol's 50000-entry ceiling is exceeded. The
//! ceiling is exposed as [`DocumentConfig::max_entries`] so a wrapping
//! layer can implement chunking.
//!
//! ## Minimum Supported Rust Version (MSRV)
//!
//! This crate requires **Rust 1.85** or later.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod config;
pub mod entry;
pub mod error;
pub mod escape;
pub mod progress;
pub mod writer;

#[cfg(feature = "gzip")]
#[cfg_attr(docsrs, doc(cfg(feature = "gzip")))]
pub mod gzip;

pub use config::{DocumentConfig, DocumentKind, SITEMAP_NAMESPACE, WriteOptions};

#[cfg(feature = "gzip")]
pub use config::GzipLevel;
pub use entry::Entry;
pub use error::{Error, Result};
pub use escape::escape_text;
pub use progress::{NoProgress, ProgressReporter, progress_fn};
pub use writer::{SitemapWriter, WriteResult};

#[cfg(feature = "gzip")]
pub use gzip::compress_file;
