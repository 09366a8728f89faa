//! Session state shared by the front-ends.
//!
//! Holds the last extracted text for display and subsequent export. The
//! buffer is overwritten wholesale on each new extraction; export is only
//! possible after a successful extraction produced non-blank text.

use crate::error::{Error, Result};
use crate::export::{self, ExportFormat};
use crate::types::ExtractedText;
use std::path::{Path, PathBuf};

/// The single piece of application state: source path plus displayed text.
#[derive(Debug, Default)]
pub struct Session {
    source: Option<PathBuf>,
    buffer: String,
    slide_count: usize,
    fragment_count: usize,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the session contents with a fresh extraction result.
    pub fn display(&mut self, source: impl Into<PathBuf>, extracted: &ExtractedText) {
        self.source = Some(source.into());
        self.buffer = extracted.to_text();
        self.slide_count = extracted.slide_count;
        self.fragment_count = extracted.fragment_count();
    }

    /// Reset to the empty state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The currently displayed text.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Path of the file the buffer was extracted from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of slides in the last extracted document.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Number of fragments in the last extraction.
    pub fn fragment_count(&self) -> usize {
        self.fragment_count
    }

    /// Whether there is non-blank text to export.
    pub fn can_export(&self) -> bool {
        !self.buffer.trim().is_empty()
    }

    /// Export the displayed text to `path` in the given format.
    pub fn export(&self, format: ExportFormat, path: &Path) -> Result<()> {
        if !self.can_export() {
            return Err(Error::NothingToSave);
        }
        export::write_export(path, format, &self.buffer)
    }
}
