//! Domain types for representing a deck before it is written out.

use crate::color::Rgb;
use crate::image::ImageData;
use crate::units::{inches, Emu, Frame};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default font for every run of text.
pub const DEFAULT_FONT: &str = "Calibri";

/// An entire presentation: page size, shared media, and slides in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    /// Document title written to the core properties.
    pub title: String,

    /// Author written to the core properties.
    pub author: String,

    /// Creation timestamp (W3CDTF), fixed so output is reproducible.
    pub created: String,

    pub slide_width: Emu,
    pub slide_height: Emu,

    /// Solid fill painted behind every slide.
    pub background_fill: Rgb,

    /// Index into `media` of the full-bleed background picture, if one loaded.
    pub background_image: Option<MediaId>,

    /// Images stored once and referenced by picture shapes.
    pub media: Vec<ImageData>,

    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Create an empty deck with the given page size.
    pub fn new(title: impl Into<String>, slide_width: Emu, slide_height: Emu) -> Self {
        Self {
            title: title.into(),
            author: String::new(),
            created: "2026-02-01T00:00:00Z".to_string(),
            slide_width,
            slide_height,
            background_fill: Rgb::WHITE,
            background_image: None,
            media: Vec::new(),
            slides: Vec::new(),
        }
    }

    /// Create an empty 16:9 widescreen deck (13.333in x 7.5in).
    pub fn widescreen(title: impl Into<String>) -> Self {
        Self::new(title, inches(13.333), inches(7.5))
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_created(mut self, created: impl Into<String>) -> Self {
        self.created = created.into();
        self
    }

    pub fn with_background_fill(mut self, fill: Rgb) -> Self {
        self.background_fill = fill;
        self
    }

    /// Store an image in the deck's media and return its id.
    pub fn add_media(&mut self, image: ImageData) -> MediaId {
        self.media.push(image);
        MediaId(self.media.len() - 1)
    }

    /// Try to use the image at `path` as the background picture of
    /// subsequently added slides.
    ///
    /// Failures are not errors: they are logged and the solid fill is used
    /// on its own. Returns whether the picture was loaded.
    pub fn load_background(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match ImageData::load(path) {
            Ok(image) => {
                log::debug!("Using background picture {}", path.display());
                let id = self.add_media(image);
                self.background_image = Some(id);
                true
            }
            Err(e) => {
                log::debug!("Skipping background picture: {}", e);
                false
            }
        }
    }

    /// Append a slide carrying the deck background and return it for drawing.
    pub fn add_slide(&mut self) -> &mut Slide {
        let mut slide = Slide::new(self.slides.len() + 1, self.background_fill);
        if let Some(media) = self.background_image {
            let frame = Frame::new(Emu(0), Emu(0), self.slide_width, self.slide_height);
            slide.add_picture(frame, media, "background");
        }
        self.slides.push(slide);
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get all text lines from all slides, flattened.
    pub fn all_lines(&self) -> Vec<&str> {
        self.slides.iter().flat_map(|s| s.lines()).collect()
    }
}

/// Handle to an image in `Deck::media`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MediaId(pub usize);

/// A single slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    /// 1-based slide number.
    pub number: usize,

    /// Solid background fill.
    pub background_fill: Rgb,

    /// Shapes in z-order (first is drawn at the back).
    pub shapes: Vec<Shape>,
}

impl Slide {
    /// Create a new empty slide.
    pub fn new(number: usize, background_fill: Rgb) -> Self {
        Self {
            number,
            background_fill,
            shapes: Vec::new(),
        }
    }

    /// Id for the next shape. Id 1 belongs to the slide's shape tree.
    pub(crate) fn next_shape_id(&self) -> u32 {
        self.shapes.len() as u32 + 2
    }

    /// Add a picture shape referencing deck media.
    pub fn add_picture(&mut self, frame: Frame, media: MediaId, description: impl Into<String>) {
        let id = self.next_shape_id();
        self.shapes.push(Shape::Picture(Picture {
            id,
            frame,
            media,
            description: description.into(),
        }));
    }

    /// Text of every paragraph on the slide, in z-order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().flat_map(|shape| match shape {
            Shape::TextBox(tb) => tb
                .paragraphs
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>(),
            _ => Vec::new(),
        })
    }

    /// Whether any text box on the slide contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.lines().any(|line| line.contains(needle))
    }

    pub fn pictures(&self) -> impl Iterator<Item = &Picture> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Picture(p) => Some(p),
            _ => None,
        })
    }
}

/// A drawable element on a slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    TextBox(TextBox),
    Rectangle(Rectangle),
    Picture(Picture),
}

impl Shape {
    pub fn id(&self) -> u32 {
        match self {
            Shape::TextBox(s) => s.id,
            Shape::Rectangle(s) => s.id,
            Shape::Picture(s) => s.id,
        }
    }

    pub fn frame(&self) -> Frame {
        match self {
            Shape::TextBox(s) => s.frame,
            Shape::Rectangle(s) => s.frame,
            Shape::Picture(s) => s.frame,
        }
    }
}

/// A text box holding one or more paragraphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBox {
    pub id: u32,
    pub frame: Frame,
    pub word_wrap: bool,
    pub paragraphs: Vec<Paragraph>,
}

/// A paragraph of text with uniform formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    pub style: TextStyle,
}

/// A filled rectangle with an optional outline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rectangle {
    pub id: u32,
    pub frame: Frame,
    pub fill: Rgb,
    pub outline: Option<Outline>,
}

/// Outline of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    pub color: Rgb,
    pub width: Emu,
}

/// A picture stretched to fill its frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Picture {
    pub id: u32,
    pub frame: Frame,
    pub media: MediaId,
    pub description: String,
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Align {
    #[default]
    Left,
    Center,
}

impl Align {
    /// Value of `a:pPr/@algn`.
    pub fn as_ooxml(self) -> &'static str {
        match self {
            Align::Left => "l",
            Align::Center => "ctr",
        }
    }
}

/// Run and paragraph formatting for a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in points.
    pub size: f64,
    pub color: Rgb,
    pub bold: bool,
    pub font: String,
    pub align: Align,
    /// Space after the paragraph, in points.
    pub space_after: Option<f64>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 18.0,
            color: Rgb::WHITE,
            bold: false,
            font: DEFAULT_FONT.to_string(),
            align: Align::Left,
            space_after: None,
        }
    }
}

impl TextStyle {
    /// Default style at the given point size.
    pub fn sized(size: f64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn centered(self) -> Self {
        self.align(Align::Center)
    }

    pub fn space_after(mut self, points: f64) -> Self {
        self.space_after = Some(points);
        self
    }

    /// Size in hundredths of a point, as `a:rPr/@sz` expects.
    pub fn size_hundredths(&self) -> u32 {
        (self.size * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slides_numbered_in_order() {
        let mut deck = Deck::widescreen("Test");
        deck.add_slide();
        deck.add_slide();
        let numbers: Vec<usize> = deck.slides.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(deck.slide_count(), 2);
    }

    #[test]
    fn test_missing_background_keeps_solid_fill() {
        let mut deck = Deck::widescreen("Test").with_background_fill(Rgb(15, 15, 35));
        assert!(!deck.load_background("/no/such/background.png"));
        let slide = deck.add_slide();
        assert_eq!(slide.background_fill, Rgb(15, 15, 35));
        assert!(slide.shapes.is_empty());
        assert!(deck.media.is_empty());
    }

    #[test]
    fn test_background_picture_covers_slide() {
        let mut deck = Deck::widescreen("Test");
        let media = deck.add_media(
            ImageData::from_bytes(vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]).unwrap(),
        );
        deck.background_image = Some(media);
        let (width, height) = (deck.slide_width, deck.slide_height);
        let slide = deck.add_slide();

        let pictures: Vec<&Picture> = slide.pictures().collect();
        assert_eq!(pictures.len(), 1);
        assert_eq!(pictures[0].id, 2);
        assert_eq!(pictures[0].frame, Frame::new(Emu(0), Emu(0), width, height));
    }

    #[test]
    fn test_text_style_builder() {
        let style = TextStyle::sized(36.0).bold().centered().color(Rgb(1, 2, 3));
        assert!(style.bold);
        assert_eq!(style.align, Align::Center);
        assert_eq!(style.font, "Calibri");
        assert_eq!(style.size_hundredths(), 3600);
    }
}
