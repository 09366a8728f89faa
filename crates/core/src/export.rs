//! Export of extracted text to plain text, Markdown, or HTML files.
//!
//! The format determines only the output transform, never the content:
//! plain text and Markdown are written verbatim, HTML wraps the text in a
//! minimal `<pre>` envelope with `&`, `<`, and `>` escaped.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Target format for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Byte-identical copy of the displayed text.
    PlainText,
    /// The text written as-is; extracted slide text is already valid Markdown.
    Markdown,
    /// The text wrapped in an HTML `<pre>` envelope.
    Html,
}

impl ExportFormat {
    /// File extension for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::PlainText => "txt",
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }

    /// Detect a format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "txt" => Some(Self::PlainText),
            "md" | "markdown" => Some(Self::Markdown),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }
}

/// Apply the format-specific transform to the displayed text.
pub fn render(format: ExportFormat, text: &str) -> String {
    match format {
        ExportFormat::PlainText | ExportFormat::Markdown => text.to_string(),
        ExportFormat::Html => format!(
            "<html><body><pre>{}</pre></body></html>",
            escape_html(text)
        ),
    }
}

/// Render and write the displayed text to `path`.
///
/// Fails with [`Error::NothingToSave`] before touching the filesystem when
/// the text is empty or whitespace-only.
pub fn write_export(path: &Path, format: ExportFormat, text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(Error::NothingToSave);
    }

    let rendered = render(format, text);

    let mut file = File::create(path)
        .map_err(|e| Error::Write(format!("failed to create {}: {}", path.display(), e)))?;
    file.write_all(rendered.as_bytes())
        .map_err(|e| Error::Write(format!("failed to write {}: {}", path.display(), e)))?;

    Ok(())
}

/// Escape the characters that would break the HTML envelope.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
