//! Domain types for representing extracted presentation content.

use serde::{Deserialize, Serialize};

/// Where a text fragment came from within the slide tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentKind {
    /// A plain text box (or placeholder) on a slide.
    TextBox,
    /// A single table cell.
    TableCell,
    /// A direct child of a group shape.
    GroupChild,
    /// A chart's title.
    ChartTitle,
    /// One chart category label.
    ChartCategory,
    /// The name of one chart data series.
    ChartSeriesName,
    /// One numeric value from a chart data series, rendered as text.
    ChartValue,
    /// One SmartArt diagram node.
    DiagramNode,
    /// The flattened text of a whole slide (flat-text strategy only).
    SlideBody,
}

/// A single non-blank piece of text extracted from a presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fragment {
    /// The cleaned text content. Never blank.
    pub text: String,

    /// Where the text came from.
    pub kind: FragmentKind,
}

/// The ordered result of one extraction pass.
///
/// Fragments appear in traversal order: slide order, then shape order within
/// a slide, then row/column order within tables, then child order within
/// groups. Blank or whitespace-only text is never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedText {
    /// Fragments in traversal order.
    pub fragments: Vec<Fragment>,

    /// Number of slides in the source document.
    pub slide_count: usize,
}

impl ExtractedText {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clean `raw` and append it as a fragment.
    ///
    /// Returns `false` (and stores nothing) when the cleaned text is empty.
    pub fn push(&mut self, kind: FragmentKind, raw: impl AsRef<str>) -> bool {
        let text = crate::clean::fragment(raw.as_ref());
        if text.is_empty() {
            return false;
        }
        self.fragments.push(Fragment { text, kind });
        true
    }

    /// Whether no fragments were extracted.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Number of stored fragments.
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// Join all fragments with a blank-line separator into a single string.
    pub fn to_text(&self) -> String {
        self.fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// The format of a source presentation file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceFormat {
    /// Modern PPTX (Office Open XML).
    Pptx,
}

impl SourceFormat {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pptx" => Some(Self::Pptx),
            _ => None,
        }
    }

    /// Detect format from file magic bytes.
    pub fn from_magic(bytes: &[u8]) -> Option<Self> {
        // PPTX is a ZIP file (PK\x03\x04)
        if bytes.len() >= 4 && bytes.starts_with(&[0x50, 0x4B, 0x03, 0x04]) {
            return Some(Self::Pptx);
        }
        None
    }
}

/// Whether the header bytes belong to a legacy OLE/CFB .ppt file, which we
/// recognize only to report a clearer error.
pub fn looks_like_legacy_ppt(bytes: &[u8]) -> bool {
    bytes.len() >= 8 && bytes.starts_with(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1])
}
