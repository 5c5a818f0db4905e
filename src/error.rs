//! Error types for apadoc library.
//!
//! Parsing and rendering never fail on content; every variant here comes
//! from the edges: reading metadata, serializing previews and writing the
//! DOCX package.

use std::io;
use thiserror::Error;

/// Result type alias for apadoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while producing a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The DOCX container could not be assembled.
    #[error("DOCX packaging error: {0}")]
    Zip(String),

    /// A document part could not be written as XML.
    #[error("XML writing error: {0}")]
    Xml(String),

    /// Title metadata is missing or malformed.
    #[error("Invalid title metadata: {0}")]
    Metadata(String),

    /// Error while rendering a preview (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Whether this error comes from the environment (file system, packaging)
    /// rather than from the caller's data.
    pub fn is_environment(&self) -> bool {
        matches!(self, Error::Io(_) | Error::Zip(_) | Error::Xml(_))
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            _ => Error::Zip(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}
