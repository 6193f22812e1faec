//! Shared fixtures for integration tests

#![allow(dead_code, reason = "Not every test binary uses every fixture")]
#![expect(clippy::unwrap_used, reason = "This is a test module")]

use std::io::{Cursor, Write as _};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Build an in-memory zip archive from `(name, contents)` pairs
///
/// Names ending in `/` become directory entries.
pub fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, contents) in entries {
        if name.ends_with('/') {
            writer.add_directory(*name, options).unwrap();
        } else {
            writer.start_file(*name, options).unwrap();
            writer.write_all(contents.as_bytes()).unwrap();
        }
    }

    writer.finish().unwrap().into_inner()
}

/// The titanic dataset as the download step delivers it
pub fn titanic_zip() -> Vec<u8> {
    build_zip(&[
        ("train.csv", "PassengerId,Survived\n1,0\n2,1\n"),
        ("test.csv", "PassengerId\n892\n893\n"),
    ])
}
