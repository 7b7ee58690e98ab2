//! Core presentation model, EMU units, and slide drawing helpers
//! for building a deck in memory before it is written to PPTX.

pub mod builder;
pub mod color;
pub mod error;
pub mod image;
pub mod types;
pub mod units;

pub use color::Rgb;
pub use error::{Error, Result};
pub use image::{ImageData, ImageFormat};
pub use types::{
    Align, Deck, MediaId, Outline, Paragraph, Picture, Rectangle, Shape, Slide, TextBox, TextStyle,
};
pub use units::{inches, points, Emu, Frame};
