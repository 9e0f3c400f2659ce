//! Entry records fed to the document writer.

use std::collections::HashMap;

/// One URL (or one sitemap reference) record within a document.
///
/// An entry is a transient mapping from property name to string value.
/// Builder-style setters cover the properties the Sitemaps protocol
/// defines; [`property`](Entry::property) accepts any name. Which
/// properties actually appear in the output is decided by the writer's
/// dialect: unrecognized names are silently dropped, and empty values
/// produce no element.
///
/// Values are emitted as supplied (after XML escaping); the writer does
/// not validate URLs, dates, or priority ranges.
///
/// # Example
///
/// ```rust
/// use sitemapper::Entry;
///
/// let entry = Entry::new()
///     .loc("http://example.com/about")
///     .lastmod("2024-01-15")
///     .changefreq("monthly")
///     .priority("0.5");
/// assert_eq!(entry.get("loc"), Some("http://example.com/about"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Entry {
    properties: HashMap<String, String>,
}

impl Entry {
    /// Creates an empty entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `loc` property: the entry's URL.
    pub fn loc(self, value: impl Into<String>) -> Self {
        self.property("loc", value)
    }

    /// Sets the `lastmod` property: the last-modification date.
    pub fn lastmod(self, value: impl Into<String>) -> Self {
        self.property("lastmod", value)
    }

    /// Sets the `changefreq` property: the expected change frequency.
    ///
    /// Only recognized by the `urlset` dialect.
    pub fn changefreq(self, value: impl Into<String>) -> Self {
        self.property("changefreq", value)
    }

    /// Sets the `priority` property: the relative crawl priority.
    ///
    /// Only recognized by the `urlset` dialect.
    pub fn priority(self, value: impl Into<String>) -> Self {
        self.property("priority", value)
    }

    /// Sets an arbitrary named property.
    ///
    /// Names the writer's dialect does not recognize are dropped at
    /// emission time.
    pub fn property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Returns the value of a property, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Returns `true` if no properties are set.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
