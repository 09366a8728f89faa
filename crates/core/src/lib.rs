//! Core domain types, text cleanup, export formats, and session state
//! for presentation text extraction.

pub mod clean;
pub mod error;
pub mod export;
pub mod session;
pub mod types;

pub use error::{Error, Result};
pub use export::ExportFormat;
pub use session::Session;
pub use types::{ExtractedText, Fragment, FragmentKind, SourceFormat};
