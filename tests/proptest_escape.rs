//! Property-based tests using proptest.
//!
//! These tests verify the escaping round-trip law and the counter/output
//! invariants of the document writer under randomly generated inputs.

mod common;

use proptest::prelude::*;
use sitemapper::{Entry, SitemapWriter, escape_text};

/// Reverses [`escape_text`]. Entity replacements run before `&amp;` so a
/// literal `&` is never mistaken for the start of another entity.
fn unescape_text(input: &str) -> String {
    input
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

proptest! {
    /// Unescaping escaped text yields the original value.
    #[test]
    fn escape_round_trips(value in ".*") {
        let escaped = escape_text(&value);
        prop_assert_eq!(unescape_text(&escaped), value);
    }

    /// Escaped text never contains a raw `<` or `>`, and every `&` it
    /// contains starts one of the three entities.
    #[test]
    fn escaped_text_has_no_raw_specials(value in ".*") {
        let escaped = escape_text(&value);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        for (i, _) in escaped.match_indices('&') {
            let rest = &escaped[i..];
            prop_assert!(
                rest.starts_with("&amp;")
                    || rest.starts_with("&lt;")
                    || rest.starts_with("&gt;"),
                "bare ampersand at byte {} of {:?}", i, escaped
            );
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// The number of entry blocks in the output equals the number of
    /// add_entry calls, whatever the property values contain.
    #[test]
    fn entry_blocks_match_add_count(values in proptest::collection::vec(".*", 0..20)) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.xml");

        let mut writer = SitemapWriter::urlset(&path);
        writer.begin().unwrap();
        for value in &values {
            writer.add_entry(&Entry::new().loc(value.clone())).unwrap();
        }
        let result = writer.end().unwrap();

        prop_assert_eq!(result.entries_written, values.len() as u64);
        let content = common::read_document(&path);
        // Raw '<' never survives escaping, so tag counts are exact
        prop_assert_eq!(
            common::count_occurrences(&content, "<url>"),
            values.len()
        );
        prop_assert_eq!(
            common::count_occurrences(&content, "</url>"),
            values.len()
        );
    }
}
