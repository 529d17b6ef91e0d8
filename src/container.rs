//! Extraction of the zip-based presentation container.

use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;
use zip::ZipArchive;

/// Package-internal path of the presentation metadata part.
pub const PRESENTATION_PART: &str = "ppt/presentation.xml";

/// Extract every entry of `archive` under `scratch`.
///
/// The scratch directory is owned by the caller; the batch driver hands in a
/// temporary directory that is removed once the run finishes, whether or not
/// it succeeded. Entries whose paths would escape the destination are
/// skipped.
pub fn unpack(archive: &Path, scratch: &Path) -> Result<()> {
    if !archive.exists() {
        return Err(Error::UnreadableArchive(format!(
            "{}: no such file",
            archive.display()
        )));
    }

    let file = fs::File::open(archive)?;
    let mut zip = ZipArchive::new(file)
        .map_err(|e| Error::UnreadableArchive(format!("{}: {}", archive.display(), e)))?;

    for i in 0..zip.len() {
        let mut entry = zip
            .by_index(i)
            .map_err(|e| Error::UnreadableArchive(format!("{}: {}", archive.display(), e)))?;

        let entry_path = match entry.enclosed_name() {
            Some(p) => p.to_path_buf(),
            None => continue,
        };
        let output_path = scratch.join(entry_path);

        if entry.is_dir() {
            fs::create_dir_all(&output_path)?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = fs::File::create(&output_path)?;
            io::copy(&mut entry, &mut outfile)?;
        }
    }

    Ok(())
}
