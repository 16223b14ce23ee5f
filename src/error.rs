//! Error types for pagemark library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pagemark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering a document.
#[derive(Error, Debug)]
pub enum Error {
    /// The source document does not exist.
    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing the PDF structure.
    #[error("PDF writing error: {0}")]
    Pdf(String),

    /// Error during rendering of the layout plan (JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// A caption date could not be parsed.
    #[error("Invalid date '{0}': expected DD/MM/YYYY")]
    InvalidDate(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Pdf(err.to_string()),
        }
    }
}
