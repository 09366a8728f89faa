//! Tauri commands for presentation text extraction and export.
//!
//! The webview drives the flow: pick a file (dialog plugin), call
//! `extract_presentation`, render the returned text, then call
//! `export_text` with a save path. The extracted buffer lives in the
//! managed [`AppState`] so export works on whatever was last displayed.

use serde::{Deserialize, Serialize};
use slidetext_core::{ExportFormat, Session};
use slidetext_pptx::{PptxExtractor, Strategy};
use std::path::Path;
use std::sync::Mutex;
use tauri::Emitter;

/// Managed application state: the one session shared by all commands.
#[derive(Default)]
pub struct AppState {
    session: Mutex<Session>,
}

/// Extraction strategy choice exposed to the webview.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyChoice {
    Shapes,
    Flat,
    Fidelity,
}

impl StrategyChoice {
    fn to_strategy(self) -> Strategy {
        match self {
            Self::Shapes => Strategy::Shapes,
            Self::Flat => Strategy::FlatText,
            Self::Fidelity => Strategy::Fidelity,
        }
    }
}

/// Export format choice exposed to the webview.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatChoice {
    Txt,
    Md,
    Html,
}

impl FormatChoice {
    fn to_format(self) -> ExportFormat {
        match self {
            Self::Txt => ExportFormat::PlainText,
            Self::Md => ExportFormat::Markdown,
            Self::Html => ExportFormat::Html,
        }
    }
}

/// Result of extracting a presentation.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Original filename.
    pub filename: String,
    /// Number of slides found.
    pub slide_count: usize,
    /// Number of text fragments extracted.
    pub fragment_count: usize,
    /// The joined text, ready for display.
    pub text: String,
}

/// Current session state, for enabling/disabling the export buttons.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionStatus {
    pub can_export: bool,
    pub source: Option<String>,
    pub slide_count: usize,
    pub fragment_count: usize,
}

/// Extract text from a presentation file and store it in the session.
///
/// Emits `extract-progress` events (completion percentage) to the calling
/// window while the traversal runs.
#[tauri::command]
pub async fn extract_presentation(
    window: tauri::Window,
    state: tauri::State<'_, AppState>,
    file_path: String,
    strategy: StrategyChoice,
) -> Result<ExtractionResult, String> {
    let path = Path::new(&file_path);

    let extractor = PptxExtractor::with_strategy(strategy.to_strategy());
    let extracted = extractor
        .extract_path_with_progress(path, |percent| {
            if let Err(e) = window.emit("extract-progress", percent) {
                log::warn!("failed to emit progress event: {}", e);
            }
        })
        .map_err(|e| e.to_string())?;

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    let mut session = state
        .session
        .lock()
        .map_err(|_| "session state poisoned".to_string())?;
    session.display(path, &extracted);

    Ok(ExtractionResult {
        filename,
        slide_count: extracted.slide_count,
        fragment_count: extracted.fragment_count(),
        text: session.text().to_string(),
    })
}

/// Export the last extracted text to a file in the chosen format.
///
/// Fails (with a message for the webview to show) when nothing has been
/// extracted yet or the destination cannot be written.
#[tauri::command]
pub async fn export_text(
    state: tauri::State<'_, AppState>,
    file_path: String,
    format: FormatChoice,
) -> Result<(), String> {
    let session = state
        .session
        .lock()
        .map_err(|_| "session state poisoned".to_string())?;

    session
        .export(format.to_format(), Path::new(&file_path))
        .map_err(|e| e.to_string())
}

/// Report whether there is text to export, and where it came from.
#[tauri::command]
pub async fn session_status(
    state: tauri::State<'_, AppState>,
) -> Result<SessionStatus, String> {
    let session = state
        .session
        .lock()
        .map_err(|_| "session state poisoned".to_string())?;

    Ok(SessionStatus {
        can_export: session.can_export(),
        source: session.source().map(|p| p.display().to_string()),
        slide_count: session.slide_count(),
        fragment_count: session.fragment_count(),
    })
}
