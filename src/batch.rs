//! Batch discovery of deck directories and the per-directory pipeline.
//!
//! A candidate directory holds one packaged deck plus a same-named folder of
//! exported slide images. Each candidate is processed independently; any
//! failure is recorded in that directory's outcome and the batch moves on.

use crate::container;
use crate::error::{Error, Result};
use crate::materialize::{self, SectionCopyStats};
use crate::metadata::{self, ResolvedSection};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Extension of the packaged presentation document.
pub const DECK_EXT: &str = "pptx";

/// Prefix of transient Office lock-file artifacts, never real decks.
pub const LOCK_FILE_PREFIX: &str = "~$";

/// Name of the per-directory output root.
pub const OUTPUT_DIR_NAME: &str = "restructured";

/// Result of one fully processed deck directory.
#[derive(Debug)]
pub struct DeckReport {
    /// The deck file that was processed
    pub deck: PathBuf,
    /// Sections in document order with resolved 1-based slide positions
    pub sections: Vec<ResolvedSection>,
    /// Copy outcome per section, parallel to `sections`
    pub stats: Vec<SectionCopyStats>,
}

/// Outcome of one candidate directory.
///
/// Failures stop here, never the batch: the driver records the error and
/// keeps going.
#[derive(Debug)]
pub struct DirOutcome {
    /// The candidate directory
    pub dir: PathBuf,
    /// Its report, or the error that ended its run
    pub result: Result<DeckReport>,
}

/// Find the packaged deck in `dir`: a `.pptx` file (case-insensitive
/// extension) that is not a lock-file artifact. With several candidates the
/// lexicographically first wins.
pub fn find_deck_file(dir: &Path) -> Option<PathBuf> {
    let mut decks: Vec<PathBuf> = fs::read_dir(dir)
        .ok()?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_deck_file(path))
        .collect();
    decks.sort();

    if decks.len() > 1 {
        log::warn!(
            "{}: several deck files, using {}",
            dir.display(),
            decks[0].display()
        );
    }
    decks.into_iter().next()
}

fn is_deck_file(path: &Path) -> bool {
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(n) => n,
        None => return false,
    };
    if name.starts_with(LOCK_FILE_PREFIX) {
        return false;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DECK_EXT))
}

/// Run the unpack -> resolve -> materialize pipeline for one directory.
///
/// The deck file and the same-named image folder are checked before any
/// work starts; their absence is a skip condition, not a pipeline failure.
/// The container is extracted into a temporary scratch directory that is
/// removed when this function returns.
pub fn process_deck_dir(dir: &Path) -> Result<DeckReport> {
    let deck = find_deck_file(dir)
        .ok_or_else(|| Error::MissingInput(format!("{}: no deck file", dir.display())))?;

    let deck_name = deck
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let image_dir = dir.join(&deck_name);
    if !image_dir.is_dir() {
        return Err(Error::MissingInput(format!(
            "{}: no image folder",
            image_dir.display()
        )));
    }

    log::info!("processing deck {}", deck.display());

    let scratch = TempDir::new()?;
    container::unpack(&deck, scratch.path())?;

    let presentation = scratch.path().join(container::PRESENTATION_PART);
    let xml = fs::read(&presentation).map_err(|_| {
        Error::MalformedMetadata(format!(
            "{}: no {} part",
            deck.display(),
            container::PRESENTATION_PART
        ))
    })?;

    let sections = metadata::resolve(&xml)?;
    for section in &sections {
        log::info!("section {}: slides {:?}", section.name, section.ppt_index);
    }

    let stats = materialize::materialize(&sections, &image_dir, &dir.join(OUTPUT_DIR_NAME))?;

    Ok(DeckReport {
        deck,
        sections,
        stats,
    })
}

/// Process every immediate subdirectory of `root`, collecting one outcome
/// per directory.
///
/// Directories are visited in file-name order so runs are deterministic. A
/// failing directory is logged and recorded; it never prevents the
/// remaining candidates from being processed.
pub fn process_root(root: &Path) -> Vec<DirOutcome> {
    WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| {
            let dir = entry.into_path();
            let result = process_deck_dir(&dir);
            match result {
                Err(Error::MissingInput(ref msg)) => log::info!("skipping {}", msg),
                Err(ref err) => log::error!("{}: {}", dir.display(), err),
                Ok(_) => {},
            }
            DirOutcome { dir, result }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_deck_discovery_skips_lock_files_and_other_types() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("~$deck.pptx"), b"lock").unwrap();
        fs::write(dir.path().join("notes.txt"), b"text").unwrap();
        fs::write(dir.path().join("deck.PPTX"), b"deck").unwrap();

        let found = find_deck_file(dir.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), "deck.PPTX");
    }

    #[test]
    fn test_deck_discovery_prefers_first_by_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.pptx"), b"b").unwrap();
        fs::write(dir.path().join("a.pptx"), b"a").unwrap();

        let found = find_deck_file(dir.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), "a.pptx");
    }

    #[test]
    fn test_directory_without_deck_is_missing_input() {
        let dir = TempDir::new().unwrap();

        let err = process_deck_dir(dir.path()).unwrap_err();
        assert!(matches!(err, Error::MissingInput(_)));
    }

    #[test]
    fn test_deck_without_image_folder_is_missing_input() {
        let dir = TempDir::new().unwrap();
        // Never unpacked, so the payload does not need to be a real archive
        fs::write(dir.path().join("deck.pptx"), b"deck").unwrap();

        let err = process_deck_dir(dir.path()).unwrap_err();
        assert!(matches!(err, Error::MissingInput(_)));
    }
}
