//! Presentation metadata parsing and slide-position resolution.
//!
//! `ppt/presentation.xml` carries the two lists this tool cares about: the
//! top-level `<p:sldIdLst>` giving the slides in presentation order, and the
//! optional `<p14:sectionLst>` extension (PowerPoint 2010 namespace) that
//! groups slide ids into named sections. The presentation and extension
//! namespaces reuse the `sldIdLst`/`sldId` local names, so the parser tracks
//! `sectionLst` nesting to tell the two lists apart.

use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::Event;

/// Slide identifiers in presentation order.
///
/// Positions are 1-based when exposed, matching the numbering the image
/// export step uses for file names. Built once per document and not mutated
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideOrder {
    ids: Vec<String>,
}

impl SlideOrder {
    /// 1-based position of a slide id, or `None` if the id is not listed.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|known| known == id).map(|i| i + 1)
    }

    /// Number of slides in the presentation.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the document declared no slides.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Slide ids in presentation order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

impl FromIterator<String> for SlideOrder {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// A named slide group as declared in the section extension list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section name
    pub name: String,
    /// Member slide ids, in declaration order
    pub slide_ids: Vec<String>,
}

impl Section {
    /// Map the declared members to 1-based slide positions.
    ///
    /// A member absent from `order` is dropped without error or placeholder.
    /// Downstream consumers rely on this best-effort filtering when decks
    /// were only partially exported. Ids are not deduplicated: a slide
    /// claimed by several sections resolves in each of them.
    pub fn resolve(&self, order: &SlideOrder) -> ResolvedSection {
        let ppt_index = self
            .slide_ids
            .iter()
            .filter_map(|id| order.position_of(id))
            .collect();
        ResolvedSection {
            name: self.name.clone(),
            ppt_index,
        }
    }
}

/// A section with its members resolved to 1-based slide positions.
///
/// This is the form the materializer consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSection {
    /// Section name, used verbatim as the output directory name
    pub name: String,
    /// 1-based slide positions, in declaration order
    pub ppt_index: Vec<usize>,
}

/// Parse presentation XML into the slide order and the declared sections.
///
/// A document without a `<p14:sectionLst>` yields an empty section list;
/// that is a valid state meaning "no user-defined sections", not an error.
/// Sections with an empty or absent `name` are dropped entirely, even when
/// they have slides, and so are sections whose member id list is absent or
/// empty. Malformed XML fails the whole parse.
pub fn parse_presentation(xml: &[u8]) -> Result<(SlideOrder, Vec<Section>)> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut order: Vec<String> = Vec::new();
    let mut sections: Vec<Section> = Vec::new();
    let mut in_section_list = false;
    let mut current_section: Option<Section> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"sectionLst" => in_section_list = true,
                b"section" if in_section_list => {
                    let mut name = String::new();
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"name"
                            && let Ok(value) = std::str::from_utf8(&attr.value)
                        {
                            name = value.to_string();
                        }
                    }
                    current_section = Some(Section {
                        name,
                        slide_ids: Vec::new(),
                    });
                },
                b"sldId" => {
                    // The plain `id` attribute only; top-level entries also
                    // carry an `r:id` relationship ref which has the same
                    // local name but a different raw key.
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"id"
                            && let Ok(id) = std::str::from_utf8(&attr.value)
                            && !id.is_empty()
                        {
                            match current_section {
                                Some(ref mut section) => section.slide_ids.push(id.to_string()),
                                None if !in_section_list => order.push(id.to_string()),
                                None => {},
                            }
                        }
                    }
                },
                _ => {},
            },
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"sectionLst" => {
                    in_section_list = false;
                    // A dangling empty <section/> has no members and is
                    // dropped with the list.
                    current_section = None;
                },
                b"section" => {
                    if let Some(section) = current_section.take()
                        && !section.name.is_empty()
                        && !section.slide_ids.is_empty()
                    {
                        sections.push(section);
                    }
                },
                _ => {},
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::MalformedMetadata(e.to_string())),
            _ => {},
        }
    }

    Ok((SlideOrder { ids: order }, sections))
}

/// Resolve presentation XML into its ordered section index lists.
///
/// The two-stage core of the tool: parse the slide order and the section
/// declarations, then map every member id through the order. Sections come
/// back in document order. A named section whose members all fail to resolve
/// is kept with an empty index list.
pub fn resolve(xml: &[u8]) -> Result<Vec<ResolvedSection>> {
    let (order, sections) = parse_presentation(xml)?;
    Ok(sections.iter().map(|s| s.resolve(&order)).collect())
}
