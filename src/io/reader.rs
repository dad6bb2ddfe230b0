//! Corpus reading.
use std::{fs::File, io::Read, path::Path};

use flate2::read::GzDecoder;
use log::{debug, info};
use serde::de::DeserializeOwned;

use crate::error::Error;

/// Reads the whole corpus file into memory.
///
/// # Errors
/// Fails if the file is missing, unreadable or not valid UTF-8.
pub fn read_corpus(src: &Path) -> Result<String, Error> {
    info!("reading corpus {:?}", src);
    let text = std::fs::read_to_string(src)?;
    debug!("read {} bytes", text.len());
    Ok(text)
}

/// Loads a blob written by [crate::io::writer::write_blob].
///
/// A truncated blob fails on the gzip checksum or on JSON parsing.
pub fn read_blob<T: DeserializeOwned>(src: &Path) -> Result<T, Error> {
    info!("loading {:?}", src);
    let mut decoder = GzDecoder::new(File::open(src)?);
    let mut json = Vec::new();
    decoder.read_to_end(&mut json)?;
    Ok(serde_json::from_slice(&json)?)
}
