//! Gzip copies of finished documents.
//!
//! Large sitemaps are commonly served compressed; crawlers accept a
//! `.gz` artifact whose decompressed content is the sitemap itself. This
//! module produces that artifact next to the finished file, leaving the
//! uncompressed original in place.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::config::GzipLevel;
use crate::error::Result;

/// Compresses a finished document to `<path>.gz`.
///
/// The source file is read back in full and streamed through a gzip
/// encoder; decompressing the artifact yields content byte-identical to
/// the source. The source file is retained.
///
/// # Arguments
///
/// * `path` - The finished document to compress
/// * `level` - Gzip compression level
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the source cannot be read
/// or the artifact cannot be written. The source file is never modified
/// or removed, even on failure.
pub fn compress_file(path: impl AsRef<Path>, level: GzipLevel) -> Result<PathBuf> {
    let path = path.as_ref();
    let mut gz_path = path.as_os_str().to_owned();
    gz_path.push(".gz");
    let gz_path = PathBuf::from(gz_path);

    let mut source = BufReader::new(File::open(path)?);
    let target = File::create(&gz_path)?;
    let mut encoder = GzEncoder::new(target, Compression::new(level.get()));
    io::copy(&mut source, &mut encoder)?;
    encoder.finish()?;

    log::info!("Wrote gzip copy: {}", gz_path.display());
    Ok(gz_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};

    #[test]
    fn test_compress_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.xml");
        let content = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset></urlset>\n";
        std::fs::File::create(&path)
            .unwrap()
            .write_all(content)
            .unwrap();

        let gz_path = compress_file(&path, GzipLevel::default()).unwrap();
        assert_eq!(gz_path, dir.path().join("sitemap.xml.gz"));

        let mut decoder = flate2::read::GzDecoder::new(File::open(&gz_path).unwrap());
        let mut decompressed = Vec::new();
        decoder.read_to_end(&mut decompressed).unwrap();
        assert_eq!(decompressed, content);

        // Original is retained
        assert!(path.exists());
    }

    #[test]
    fn test_compress_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = compress_file(dir.path().join("absent.xml"), GzipLevel::default());
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
