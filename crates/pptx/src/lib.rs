//! PPTX (Office Open XML) extraction backend.
//!
//! A .pptx file is a ZIP package of XML parts. This crate walks the slide
//! parts (and, depending on strategy, chart and SmartArt diagram parts) and
//! produces an ordered [`slidetext_core::ExtractedText`].

mod chart;
mod diagram;
mod rels;
mod slide;
mod xml;

pub mod parser;

pub use parser::{PptxExtractor, Strategy};
