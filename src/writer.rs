//! Streaming sitemap document writer.
//!
//! This module provides the public API for writing one sitemap or sitemap
//! index document: construct a [`SitemapWriter`] bound to a destination
//! path, call [`begin`](SitemapWriter::begin), feed entries with
//! [`add_entry`](SitemapWriter::add_entry), and finalize with
//! [`end`](SitemapWriter::end).
//!
//! # Example
//!
//! ```rust,ignore
//! use sitemapper::{Entry, SitemapWriter};
//!
//! let mut writer = SitemapWriter::urlset("sitemap.xml");
//! writer.begin()?;
//! writer.add_entry(&Entry::new().loc("http://example.com/"))?;
//! let result = writer.end()?;
//! println!("Wrote {} entries", result.entries_written);
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::{DocumentConfig, DocumentKind, WriteOptions};
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::escape::escape_text;
use crate::progress::{NoProgress, ProgressReporter};

/// XML declaration emitted as the first line of every document.
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Lifecycle state of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentState {
    /// Path and options bound, no I/O performed yet.
    Created,
    /// Stream open, header written, accepting entries.
    Open,
    /// Footer written, stream closed. A finished document is single-use
    /// and cannot be reopened.
    Finished,
}

impl DocumentState {
    /// State name used in error messages.
    fn describe(self) -> &'static str {
        match self {
            Self::Created => "not begun",
            Self::Open => "open",
            Self::Finished => "finished",
        }
    }
}

/// Statistics returned by [`SitemapWriter::end`].
#[derive(Debug, Clone)]
pub struct WriteResult {
    /// Number of entries written to the document.
    pub entries_written: u64,
    /// Path of the gzip copy, if one was requested.
    #[cfg(feature = "gzip")]
    pub compressed_path: Option<PathBuf>,
}

/// A streaming writer for one sitemap or sitemap index document.
///
/// The writer owns its output stream and tracks an explicit lifecycle
/// state; operations called out of order fail with
/// [`Error::InvalidState`] instead of corrupting the document. All I/O is
/// synchronous and blocking, and a document is single-use: after
/// [`end`](SitemapWriter::end) the writer cannot be reused.
///
/// The destination file must not be written by anyone else between
/// `begin` and `end`; the writer assumes exclusive ownership of the path
/// for the session. If the process dies mid-session the file is left
/// truncated and invalid.
pub struct SitemapWriter {
    path: PathBuf,
    kind: DocumentKind,
    config: &'static DocumentConfig,
    options: WriteOptions,
    state: DocumentState,
    sink: Option<BufWriter<File>>,
    entries: u64,
    progress: Box<dyn ProgressReporter>,
}

impl std::fmt::Debug for SitemapWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SitemapWriter")
            .field("path", &self.path)
            .field("kind", &self.kind)
            .field("state", &self.state)
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

impl SitemapWriter {
    /// Creates a writer for the given destination path and dialect.
    ///
    /// No I/O happens until [`begin`](SitemapWriter::begin).
    pub fn new(path: impl Into<PathBuf>, kind: DocumentKind) -> Self {
        Self {
            path: path.into(),
            kind,
            config: kind.config(),
            options: WriteOptions::default(),
            state: DocumentState::Created,
            sink: None,
            entries: 0,
            progress: Box::new(NoProgress),
        }
    }

    /// Creates a sitemap (`urlset`) writer.
    pub fn urlset(path: impl Into<PathBuf>) -> Self {
        Self::new(path, DocumentKind::Urlset)
    }

    /// Creates a sitemap index (`sitemapindex`) writer.
    pub fn index(path: impl Into<PathBuf>) -> Self {
        Self::new(path, DocumentKind::SitemapIndex)
    }

    /// Sets the write options.
    pub fn options(mut self, options: WriteOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the progress reporter.
    pub fn progress(mut self, reporter: impl ProgressReporter + 'static) -> Self {
        self.progress = Box::new(reporter);
        self
    }

    /// Returns the destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the document dialect.
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Returns the dialect configuration, including the informational
    /// [`max_entries`](DocumentConfig::max_entries) ceiling.
    pub fn config(&self) -> &'static DocumentConfig {
        self.config
    }

    /// Returns the number of entries written so far (0 before `begin`).
    pub fn entries(&self) -> u64 {
        self.entries
    }

    /// Returns `true` if the stream has never been opened or has been
    /// closed; `false` while the document is open.
    pub fn closed(&self) -> bool {
        self.state != DocumentState::Open
    }

    /// Opens the destination and writes the document header.
    ///
    /// Writes the XML declaration and the opening root tag (attributes
    /// sorted by name so output is byte-reproducible), and resets the
    /// entry counter to zero.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the path cannot be opened for writing;
    /// [`Error::InvalidState`] if the document was already begun.
    pub fn begin(&mut self) -> Result<()> {
        if self.state != DocumentState::Created {
            return Err(Error::InvalidState {
                operation: "begin",
                state: self.state.describe(),
            });
        }

        let file = File::create(&self.path)?;
        let mut sink = BufWriter::new(file);
        log::debug!("Opened sitemap file: {}", self.path.display());

        writeln!(sink, "{XML_DECLARATION}")?;
        let mut attrs = self.config.namespace_attrs.to_vec();
        attrs.sort_by_key(|&(name, _)| name);
        write!(sink, "<{}", self.config.root_element)?;
        for (name, value) in attrs {
            write!(sink, " {name}=\"{value}\"")?;
        }
        writeln!(sink, ">")?;

        self.sink = Some(sink);
        self.entries = 0;
        self.state = DocumentState::Open;
        log::info!("Started writing sitemap: {}", self.path.display());
        self.progress.on_begin(&self.path);
        Ok(())
    }

    /// Writes one entry block.
    ///
    /// Recognized properties with non-empty values are emitted in the
    /// dialect's fixed order, XML-escaped; everything else on the entry
    /// is dropped. The protocol's per-document ceiling is not enforced.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if writing fails; [`Error::InvalidState`] if the
    /// document is not open.
    pub fn add_entry(&mut self, entry: &Entry) -> Result<()> {
        let config = self.config;
        let sink = self.ensure_open("add_entry")?;

        writeln!(sink, "  <{}>", config.entry_element)?;
        for &name in config.properties {
            match entry.get(name) {
                Some(value) if !value.is_empty() => {
                    writeln!(sink, "    <{name}>{}</{name}>", escape_text(value))?;
                }
                _ => {}
            }
        }
        writeln!(sink, "  </{}>", config.entry_element)?;

        self.entries += 1;
        log::debug!("Added entry to sitemap: {} {:?}", self.path.display(), entry);

        if self.entries % config.reporting_interval == 0 {
            log::info!(
                "Processed {} entries; last entry: {:?}",
                self.entries,
                entry
            );
            self.progress.on_progress(self.entries);
        }
        Ok(())
    }

    /// Writes the document footer and closes the stream.
    ///
    /// If the options request gzip, a compressed copy is produced at
    /// `<path>.gz` after the stream is closed; the uncompressed file is
    /// retained either way. A compression failure leaves the finished
    /// document intact.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the footer cannot be written, the stream cannot
    /// be flushed, or compression fails; [`Error::InvalidState`] if the
    /// document is not open.
    pub fn end(&mut self) -> Result<WriteResult> {
        let mut sink = match (self.state, self.sink.take()) {
            (DocumentState::Open, Some(sink)) => sink,
            (state, _) => {
                return Err(Error::InvalidState {
                    operation: "end",
                    state: state.describe(),
                });
            }
        };
        self.state = DocumentState::Finished;

        writeln!(sink, "</{}>", self.config.root_element)?;
        sink.flush()?;
        drop(sink);
        log::debug!("Closed sitemap file: {}", self.path.display());
        log::info!(
            "Finished writing sitemap: {} [{} entries]",
            self.path.display(),
            self.entries
        );
        self.progress.on_end(self.entries);

        #[cfg(feature = "gzip")]
        let compressed_path = if self.options.gzip {
            let gz_path = crate::gzip::compress_file(&self.path, self.options.gzip_level)?;
            self.progress.on_compressed(&gz_path);
            Some(gz_path)
        } else {
            None
        };

        Ok(WriteResult {
            entries_written: self.entries,
            #[cfg(feature = "gzip")]
            compressed_path,
        })
    }

    /// Returns the open stream, or a state error naming `operation`.
    fn ensure_open(&mut self, operation: &'static str) -> Result<&mut BufWriter<File>> {
        match (self.state, self.sink.as_mut()) {
            (DocumentState::Open, Some(sink)) => Ok(sink),
            (state, _) => Err(Error::InvalidState {
                operation,
                state: state.describe(),
            }),
        }
    }
}
