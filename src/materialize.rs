//! Copying slide images into per-section directories.

use crate::error::Result;
use crate::metadata::ResolvedSection;
use std::fs;
use std::path::Path;

/// File name prefix the image export step puts in front of the slide number.
///
/// The exporter runs under a Chinese PowerPoint locale, so files come out as
/// `幻灯片<n>.png`. This is a contract with that step and must match byte
/// for byte.
pub const SLIDE_IMAGE_PREFIX: &str = "幻灯片";

/// Extension of exported slide images.
pub const SLIDE_IMAGE_EXT: &str = "png";

/// Expected file name of the exported image for a 1-based slide position.
pub fn slide_image_name(index: usize) -> String {
    format!("{}{}.{}", SLIDE_IMAGE_PREFIX, index, SLIDE_IMAGE_EXT)
}

/// Copy outcome for one section.
#[derive(Debug, Clone, Default)]
pub struct SectionCopyStats {
    /// Section name
    pub name: String,
    /// 1-based slide positions whose image was found and copied
    pub copied: Vec<usize>,
    /// 1-based slide positions with no matching source image
    pub missing: Vec<usize>,
}

/// Create one directory per section under `dest_root` and copy the matching
/// slide images from `image_dir` into it.
///
/// Directories are created idempotently and destination files from an
/// earlier run are overwritten. A missing source image is logged and
/// counted, never an error: partially exported decks are expected input.
/// Source images are read only.
pub fn materialize(
    sections: &[ResolvedSection],
    image_dir: &Path,
    dest_root: &Path,
) -> Result<Vec<SectionCopyStats>> {
    fs::create_dir_all(dest_root)?;

    let mut stats = Vec::with_capacity(sections.len());
    for section in sections {
        let section_dir = dest_root.join(&section.name);
        fs::create_dir_all(&section_dir)?;

        let mut stat = SectionCopyStats {
            name: section.name.clone(),
            ..Default::default()
        };
        for &index in &section.ppt_index {
            let file_name = slide_image_name(index);
            let source = image_dir.join(&file_name);
            if source.exists() {
                fs::copy(&source, section_dir.join(&file_name))?;
                log::debug!("copied {} -> {}", file_name, section_dir.display());
                stat.copied.push(index);
            } else {
                log::warn!("missing source image: {}", source.display());
                stat.missing.push(index);
            }
        }
        stats.push(stat);
    }

    Ok(stats)
}
