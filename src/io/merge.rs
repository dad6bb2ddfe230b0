//! Merging of per-artist lyrics files into a single corpus file.
use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use crate::error::Error;

/// Appends every regular file of `src` to `dst`, in file name order.
///
/// `dst` is created if it does not exist, and is skipped if it lives in `src`.
/// Returns the number of merged files.
///
/// # Errors
/// Fails if `src` is not a directory or if any file can't be read/written.
pub fn merge_lyrics(src: &Path, dst: &Path) -> Result<usize, Error> {
    if !src.is_dir() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{:?} is not a directory", src),
        )));
    }

    let mut options = OpenOptions::new();
    options.append(true).create(true);
    let mut out = options.open(dst)?;
    let dst_canonical = dst.canonicalize()?;

    let src_str = src
        .to_str()
        .ok_or_else(|| Error::Custom(format!("invalid source path {:?}", src)))?;
    // folder names may hold glob metacharacters
    let pattern = Path::new(&glob::Pattern::escape(src_str)).join("*");
    let pattern = pattern
        .to_str()
        .ok_or_else(|| Error::Custom(format!("invalid source path {:?}", src)))?;

    let mut paths = glob::glob(pattern)?.collect::<Result<Vec<PathBuf>, _>>()?;
    paths.retain(|p| p.is_file());
    paths.sort();

    let mut nb_merged = 0;
    for path in paths {
        if path.canonicalize()? == dst_canonical {
            warn!("skipping {:?}: it is the merge destination", path);
            continue;
        }
        debug!("merging {:?}", path);
        let mut lyrics = File::open(&path)?;
        std::io::copy(&mut lyrics, &mut out)?;
        nb_merged += 1;
    }
    out.flush()?;

    info!("merged {} files from {:?} into {:?}", nb_merged, src, dst);
    Ok(nb_merged)
}
