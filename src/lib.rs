//! Loquat - regroup exported slide images by PowerPoint section.
//!
//! PowerPoint's per-slide image export writes a flat folder of files named
//! by absolute slide position, while the author's section grouping only
//! exists inside the deck's packaged XML metadata. This crate recovers that
//! grouping and rebuilds it on disk:
//!
//! 1. The deck container is unpacked and `ppt/presentation.xml` is parsed
//!    into the ordered slide-id list and the named section declarations.
//! 2. Section members are resolved to 1-based slide positions and the
//!    matching images are copied into one folder per section.
//!
//! Processing is deliberately best-effort: unmatched slide ids, unnamed
//! sections, and missing image files are dropped or logged without failing
//! the run, and one broken deck directory never stops a batch.
//!
//! # Example
//!
//! ```no_run
//! use loquat::batch;
//!
//! // Process every deck directory under the current directory.
//! let outcomes = batch::process_root(std::path::Path::new("."));
//! for outcome in outcomes {
//!     match outcome.result {
//!         Ok(report) => println!("{}: {} sections", outcome.dir.display(), report.sections.len()),
//!         Err(err) => println!("{}: {}", outcome.dir.display(), err),
//!     }
//! }
//! ```

/// Batch discovery of deck directories and the per-directory pipeline
pub mod batch;
/// Extraction of the zip-based presentation container
pub mod container;
/// Error types shared across the pipeline
pub mod error;
/// Copying slide images into per-section directories
pub mod materialize;
/// Presentation metadata parsing and slide-position resolution
pub mod metadata;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use metadata::{ResolvedSection, Section, SlideOrder};
