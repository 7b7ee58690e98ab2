//! PPTX (Office Open XML) backend for the ambassador deck.
//!
//! Writes an in-memory [`deck_core::Deck`] as a .pptx package (a ZIP archive
//! of XML parts) and reads generated packages back for inspection.

pub mod reader;
mod template;
pub mod writer;
mod xml;

pub use reader::{PptxReader, SlideOutline};
pub use writer::PptxWriter;
