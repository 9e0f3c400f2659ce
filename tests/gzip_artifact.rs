//! Gzip artifact integration tests.
//!
//! These verify that a finished document's `.gz` copy decompresses to
//! byte-identical content and that the uncompressed file is retained.

#![cfg(feature = "gzip")]

mod common;

use std::fs::File;
use std::io::Read;

use flate2::read::GzDecoder;
use sitemapper::{Entry, SitemapWriter, WriteOptions};

#[test]
fn test_gzip_artifact_decompresses_to_identical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sitemap.xml");

    let mut writer = SitemapWriter::urlset(&path).options(WriteOptions::new().gzip(true));
    writer.begin().unwrap();
    for i in 0..500 {
        writer
            .add_entry(
                &Entry::new()
                    .loc(format!("http://example.com/page/{i}?a=1&b=2"))
                    .changefreq("daily"),
            )
            .unwrap();
    }
    let result = writer.end().unwrap();

    let gz_path = result.compressed_path.expect("gzip copy was requested");
    assert_eq!(gz_path, dir.path().join("sitemap.xml.gz"));

    let mut decompressed = Vec::new();
    GzDecoder::new(File::open(&gz_path).unwrap())
        .read_to_end(&mut decompressed)
        .unwrap();
    assert_eq!(decompressed, std::fs::read(&path).unwrap());

    // Compression is additive: the uncompressed document is retained
    assert!(path.exists());
    assert!(common::read_document(&path).ends_with("</urlset>\n"));
}

#[test]
fn test_no_gzip_without_request() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sitemap.xml");

    let mut writer = SitemapWriter::urlset(&path);
    writer.begin().unwrap();
    let result = writer.end().unwrap();

    assert!(result.compressed_path.is_none());
    assert!(!dir.path().join("sitemap.xml.gz").exists());
}

#[test]
fn test_gzip_level_applies() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sitemap.xml");

    let options = WriteOptions::new().gzip(true).gzip_level(9).unwrap();
    let mut writer = SitemapWriter::index(&path).options(options);
    writer.begin().unwrap();
    writer
        .add_entry(&Entry::new().loc("http://example.com/sitemap1.xml"))
        .unwrap();
    let result = writer.end().unwrap();

    let gz_path = result.compressed_path.unwrap();
    let mut decompressed = Vec::new();
    GzDecoder::new(File::open(&gz_path).unwrap())
        .read_to_end(&mut decompressed)
        .unwrap();
    assert_eq!(decompressed, std::fs::read(&path).unwrap());
}
