/// Error types shared across the pipeline.
use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for deck processing.
///
/// Every variant is fatal to the current deck directory's run only; the
/// batch driver records it and moves on to the next candidate directory.
#[derive(Error, Debug)]
pub enum Error {
    /// Container is missing or not a valid ZIP archive
    #[error("unreadable archive: {0}")]
    UnreadableArchive(String),

    /// Presentation metadata is not well-formed XML
    #[error("malformed metadata: {0}")]
    MalformedMetadata(String),

    /// Deck file or image folder absent from the input directory
    #[error("missing input: {0}")]
    MissingInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::MalformedMetadata(err.to_string())
    }
}
