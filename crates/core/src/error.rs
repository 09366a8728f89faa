//! Error types for presentation text extraction and export.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a presentation or exporting text.
///
/// The `Io`, `UnsupportedFormat`, `Zip`, `Xml`, and `Corrupted` variants
/// cover failures to open or parse the source document. `Write` and
/// `NothingToSave` belong to the export side.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read the input file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The file format is not supported or could not be detected.
    #[error("Unsupported or unrecognized file format: {0}")]
    UnsupportedFormat(String),

    /// ZIP package error (a .pptx is a ZIP archive).
    #[error("ZIP error: {0}")]
    Zip(String),

    /// XML parsing error in one of the document parts.
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// Invalid or corrupted document structure.
    #[error("Invalid or corrupted file: {0}")]
    Corrupted(String),

    /// Failed to write an export file.
    #[error("Failed to write output: {0}")]
    Write(String),

    /// Export was requested while the text buffer is empty.
    #[error("Nothing to save: no text has been extracted")]
    NothingToSave,
}

impl Error {
    /// Whether this error came from reading/parsing the source document
    /// (as opposed to the export side).
    pub fn is_read_error(&self) -> bool {
        matches!(
            self,
            Error::Io(_)
                | Error::UnsupportedFormat(_)
                | Error::Zip(_)
                | Error::Xml(_)
                | Error::Corrupted(_)
        )
    }
}
