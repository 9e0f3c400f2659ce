//! Variant configuration and write options for sitemap documents.
//!
//! The two document dialects (sitemap and sitemap index) share one write
//! protocol and differ only in the fixed table captured by
//! [`DocumentConfig`]: element names, recognized properties, and the
//! progress reporting cadence.

#[cfg(feature = "gzip")]
use crate::error::Result;

/// The XML namespace of the Sitemaps protocol.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Which document dialect a writer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentKind {
    /// A sitemap: a `<urlset>` of `<url>` entries.
    #[default]
    Urlset,
    /// A sitemap index: a `<sitemapindex>` of `<sitemap>` entries
    /// referencing other sitemap files.
    SitemapIndex,
}

impl DocumentKind {
    /// Returns the fixed configuration table for this dialect.
    pub fn config(self) -> &'static DocumentConfig {
        match self {
            Self::Urlset => &URLSET,
            Self::SitemapIndex => &SITEMAP_INDEX,
        }
    }
}

/// The fixed per-dialect table driving document emission.
///
/// Instances are compile-time constants; callers never construct one.
/// Property emission order is `properties` order, regardless of the order
/// properties were supplied on an entry.
#[derive(Debug)]
pub struct DocumentConfig {
    /// Root element name (`urlset` or `sitemapindex`).
    pub root_element: &'static str,
    /// Entry element name (`url` or `sitemap`).
    pub entry_element: &'static str,
    /// Attributes of the root element. Emitted sorted by attribute name
    /// so output is byte-reproducible across runs.
    pub namespace_attrs: &'static [(&'static str, &'static str)],
    /// Recognized entry property names, in emission order.
    pub properties: &'static [&'static str],
    /// Protocol ceiling on entries per document.
    ///
    /// Informational only: the writer never rejects entries beyond this
    /// count. A wrapping layer that needs multiple files can read it to
    /// decide when to start a new document.
    pub max_entries: u64,
    /// Entry count between periodic progress notifications.
    pub reporting_interval: u64,
}

impl DocumentConfig {
    /// Returns `true` if `name` is a recognized property for this dialect.
    pub fn recognizes(&self, name: &str) -> bool {
        self.properties.contains(&name)
    }
}

/// Sitemap protocol constraints for the `urlset` dialect.
static URLSET: DocumentConfig = DocumentConfig {
    root_element: "urlset",
    entry_element: "url",
    namespace_attrs: &[("xmlns", SITEMAP_NAMESPACE)],
    properties: &["loc", "lastmod", "changefreq", "priority"],
    max_entries: 50_000,
    reporting_interval: 10_000,
};

/// Sitemap protocol constraints for the `sitemapindex` dialect.
static SITEMAP_INDEX: DocumentConfig = DocumentConfig {
    root_element: "sitemapindex",
    entry_element: "sitemap",
    namespace_attrs: &[("xmlns", SITEMAP_NAMESPACE)],
    properties: &["loc", "lastmod"],
    max_entries: 50_000,
    reporting_interval: 100,
};

/// Options controlling document finalization.
///
/// # Example
///
/// ```rust
/// use sitemapper::WriteOptions;
///
/// let options = WriteOptions::new();
/// # #[cfg(feature = "gzip")]
/// let options = WriteOptions::new().gzip(true);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Produce a gzip copy of the finished document at `<path>.gz`.
    ///
    /// The uncompressed file is always retained. Default: false.
    #[cfg(feature = "gzip")]
    pub gzip: bool,

    /// Gzip compression level (0-9, default 6).
    #[cfg(feature = "gzip")]
    pub gzip_level: GzipLevel,
}

/// Validated gzip compression level.
#[cfg(feature = "gzip")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GzipLevel(u32);

#[cfg(feature = "gzip")]
impl GzipLevel {
    /// Creates a validated level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGzipLevel`](crate::Error::InvalidGzipLevel)
    /// if `level` is not in the range 0-9.
    pub fn new(level: u32) -> Result<Self> {
        if level > 9 {
            return Err(crate::error::Error::InvalidGzipLevel { level });
        }
        Ok(Self(level))
    }

    /// Returns the raw level value (0-9).
    pub fn get(self) -> u32 {
        self.0
    }
}

#[cfg(feature = "gzip")]
impl Default for GzipLevel {
    fn default() -> Self {
        Self(6)
    }
}

impl WriteOptions {
    /// Creates options with default settings (no compression).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the gzip copy of the finished document.
    #[cfg(feature = "gzip")]
    #[cfg_attr(docsrs, doc(cfg(feature = "gzip")))]
    pub fn gzip(mut self, enabled: bool) -> Self {
        self.gzip = enabled;
        self
    }

    /// Sets the gzip compression level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGzipLevel`](crate::Error::InvalidGzipLevel)
    /// if `level` is not in the range 0-9.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sitemapper::WriteOptions;
    ///
    /// let options = WriteOptions::new().gzip(true).gzip_level(9).unwrap();
    /// assert!(WriteOptions::new().gzip_level(15).is_err());
    /// ```
    #[cfg(feature = "gzip")]
    #[cfg_attr(docsrs, doc(cfg(feature = "gzip")))]
    pub fn gzip_level(mut self, level: u32) -> Result<Self> {
        self.gzip_level = GzipLevel::new(level)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urlset_table() {
        let config = DocumentKind::Urlset.config();
        assert_eq!(config.root_element, "urlset");
        assert_eq!(config.entry_element, "url");
        assert_eq!(
            config.properties,
            &["loc", "lastmod", "changefreq", "priority"]
        );
        assert_eq!(config.max_entries, 50_000);
        assert_eq!(config.reporting_interval, 10_000);
    }

    #[test]
    fn test_sitemap_index_table() {
        let config = DocumentKind::SitemapIndex.config();
        assert_eq!(config.root_element, "sitemapindex");
        assert_eq!(config.entry_element, "sitemap");
        assert_eq!(config.properties, &["loc", "lastmod"]);
        assert_eq!(config.reporting_interval, 100);
    }

    #[test]
    fn test_namespace_shared() {
        assert_eq!(
            DocumentKind::Urlset.config().namespace_attrs,
            DocumentKind::SitemapIndex.config().namespace_attrs,
        );
    }

    #[test]
    fn test_recognizes() {
        let config = DocumentKind::SitemapIndex.config();
        assert!(config.recognizes("loc"));
        assert!(config.recognizes("lastmod"));
        assert!(!config.recognizes("changefreq"));
        assert!(!config.recognizes("priority"));
    }

    #[cfg(feature = "gzip")]
    #[test]
    fn test_write_options_gzip_level() {
        let options = WriteOptions::new();
        assert_eq!(options.gzip_level.get(), 6);
        assert!(!options.gzip);

        let options = WriteOptions::new().gzip(true).gzip_level(9).unwrap();
        assert!(options.gzip);
        assert_eq!(options.gzip_level.get(), 9);

        assert!(matches!(
            WriteOptions::new().gzip_level(10),
            Err(crate::Error::InvalidGzipLevel { level: 10 })
        ));
    }
}
