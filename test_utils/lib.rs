pub mod constants;

pub mod csv_fixture_server;
pub use csv_fixture_server::CsvFixtureServer;

use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Reads a fixture file relative to the crate root.
pub fn read_fixture(file_path: &str) -> String {
    fs::read_to_string(file_path).expect("Failed to read fixture file")
}

/// Writes a gzip-compressed copy of `contents` to `<directory>/<file_name>`.
pub fn write_gzip_fixture(directory: &Path, file_name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = directory.join(file_name);

    let mut encoder = GzEncoder::new(File::create(&path)?, Compression::default());
    encoder.write_all(contents.as_bytes())?;
    encoder.finish()?;

    Ok(path)
}
