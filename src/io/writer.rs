//! Blob writing.
//!
//! Blobs are gzip compressed JSON documents. There is no temporary file:
//! a failed write leaves a missing or truncated file behind, which [super::reader::read_blob] rejects.
use std::{fs::File, io::Write, path::Path};

use flate2::{write::GzEncoder, Compression};
use log::{debug, info};
use serde::Serialize;

use crate::error::Error;

/// Serializes `value` into `dst`, creating parent directories if needed.
///
/// # Errors
/// Propagates filesystem and serialization errors.
pub fn write_blob<T: Serialize>(value: &T, dst: &Path) -> Result<(), Error> {
    if let Some(parent) = dst.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            debug!("creating output directory {:?}", parent);
            std::fs::create_dir_all(parent)?;
        }
    }

    info!("writing {:?}", dst);
    let dest_file = File::create(dst)?;
    let mut enc = GzEncoder::new(dest_file, Compression::default());
    serde_json::to_writer(&mut enc, value)?;
    let mut dest_file = enc.finish()?;
    dest_file.flush()?;

    Ok(())
}
