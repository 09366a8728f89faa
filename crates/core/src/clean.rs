//! Cleanup applied to every extracted text fragment.
//!
//! Unifies line endings, applies Unicode NFC normalization, and trims
//! surrounding whitespace. Interior line breaks are preserved.

use unicode_normalization::UnicodeNormalization;

/// Clean one raw fragment of extracted text.
pub fn fragment(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");
    let normalized: String = unified.nfc().collect();
    normalized.trim().to_string()
}
