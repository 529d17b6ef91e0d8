//! End-to-end scenarios over synthetic deck directories.
//!
//! Each test builds real `.pptx` containers (zip archives carrying a
//! `ppt/presentation.xml`) in a temporary directory tree and drives the
//! public pipeline the way the binary does.

use std::fs;
use std::io::Write;
use std::path::Path;

use loquat::Error;
use loquat::batch;
use loquat::materialize::slide_image_name;
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
</Types>"#;

/// Slide order 256, 257, 258 (positions 1, 2, 3) with one section
/// "Intro" holding the first and third slides.
const PRESENTATION_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
  <p:sldIdLst>
    <p:sldId id="256" r:id="rId2"/>
    <p:sldId id="257" r:id="rId3"/>
    <p:sldId id="258" r:id="rId4"/>
  </p:sldIdLst>
  <p:extLst>
    <p:ext uri="{521415D9-36F7-43E2-AB2F-B90AF26B5E84}">
      <p14:sectionLst xmlns:p14="http://schemas.microsoft.com/office/powerpoint/2010/main">
        <p14:section name="Intro" id="{0C9F4C2F-4DA4-4B41-9578-183E7BC3EF2B}">
          <p14:sldIdLst>
            <p14:sldId id="256"/>
            <p14:sldId id="258"/>
          </p14:sldIdLst>
        </p14:section>
      </p14:sectionLst>
    </p:ext>
  </p:extLst>
</p:presentation>"#;

fn write_deck(path: &Path, presentation_xml: &str) {
    let file = fs::File::create(path).unwrap();
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    writer.start_file("[Content_Types].xml", options).unwrap();
    writer.write_all(CONTENT_TYPES_XML.as_bytes()).unwrap();
    writer.start_file("ppt/presentation.xml", options).unwrap();
    writer.write_all(presentation_xml.as_bytes()).unwrap();
    writer.finish().unwrap();
}

/// Lay out one candidate directory: `<root>/<name>/<name>.pptx` plus the
/// same-named image folder holding the given 1-based slide images.
fn write_deck_dir(root: &Path, name: &str, images: &[usize]) -> std::path::PathBuf {
    let dir = root.join(name);
    fs::create_dir(&dir).unwrap();
    write_deck(&dir.join(format!("{}.pptx", name)), PRESENTATION_XML);

    let image_dir = dir.join(name);
    fs::create_dir(&image_dir).unwrap();
    for &index in images {
        fs::write(
            image_dir.join(slide_image_name(index)),
            format!("png{}", index),
        )
        .unwrap();
    }
    dir
}

#[test]
fn groups_images_by_section() {
    let root = TempDir::new().unwrap();
    // Images exist for slides 1 and 2 only; "Intro" claims slides 1 and 3
    let dir = write_deck_dir(root.path(), "lecture", &[1, 2]);

    let report = batch::process_deck_dir(&dir).unwrap();

    assert_eq!(report.sections.len(), 1);
    assert_eq!(report.sections[0].name, "Intro");
    assert_eq!(report.sections[0].ppt_index, vec![1, 3]);

    let intro = dir.join("restructured").join("Intro");
    assert_eq!(
        fs::read(intro.join(slide_image_name(1))).unwrap(),
        b"png1"
    );
    // Slide 2 is not a member, slide 3 has no exported image
    assert!(!intro.join(slide_image_name(2)).exists());
    assert!(!intro.join(slide_image_name(3)).exists());

    assert_eq!(report.stats[0].copied, vec![1]);
    assert_eq!(report.stats[0].missing, vec![3]);
}

#[test]
fn source_images_are_left_untouched() {
    let root = TempDir::new().unwrap();
    let dir = write_deck_dir(root.path(), "deck", &[1, 2]);

    batch::process_deck_dir(&dir).unwrap();

    let image_dir = dir.join("deck");
    assert_eq!(
        fs::read(image_dir.join(slide_image_name(1))).unwrap(),
        b"png1"
    );
    assert_eq!(
        fs::read(image_dir.join(slide_image_name(2))).unwrap(),
        b"png2"
    );
}

#[test]
fn reprocessing_a_directory_is_idempotent() {
    let root = TempDir::new().unwrap();
    let dir = write_deck_dir(root.path(), "deck", &[1]);

    batch::process_deck_dir(&dir).unwrap();
    let report = batch::process_deck_dir(&dir).unwrap();

    assert_eq!(report.stats[0].copied, vec![1]);
    assert!(
        dir.join("restructured")
            .join("Intro")
            .join(slide_image_name(1))
            .is_file()
    );
}

#[test]
fn batch_isolates_failing_directories() {
    let root = TempDir::new().unwrap();

    // A deck that is not a zip archive at all
    let corrupt = root.path().join("a_corrupt");
    fs::create_dir(&corrupt).unwrap();
    fs::write(corrupt.join("broken.pptx"), b"this is not a zip").unwrap();
    fs::create_dir(corrupt.join("broken")).unwrap();

    // A valid deck with no exported image folder next to it
    let no_images = root.path().join("b_no_images");
    fs::create_dir(&no_images).unwrap();
    write_deck(&no_images.join("deck.pptx"), PRESENTATION_XML);

    write_deck_dir(root.path(), "c_good", &[1, 2, 3]);

    let outcomes = batch::process_root(root.path());
    assert_eq!(outcomes.len(), 3);

    assert!(outcomes[0].dir.ends_with("a_corrupt"));
    assert!(matches!(
        outcomes[0].result,
        Err(Error::UnreadableArchive(_))
    ));

    assert!(outcomes[1].dir.ends_with("b_no_images"));
    assert!(matches!(outcomes[1].result, Err(Error::MissingInput(_))));

    assert!(outcomes[2].dir.ends_with("c_good"));
    let report = outcomes[2].result.as_ref().unwrap();
    assert_eq!(report.sections[0].ppt_index, vec![1, 3]);
    assert!(
        root.path()
            .join("c_good")
            .join("restructured")
            .join("Intro")
            .join(slide_image_name(3))
            .is_file()
    );
}

#[test]
fn empty_root_yields_no_outcomes() {
    let root = TempDir::new().unwrap();
    assert!(batch::process_root(root.path()).is_empty());
}
