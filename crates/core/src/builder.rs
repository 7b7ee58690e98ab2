//! Drawing helpers that compose shapes onto a slide.
//!
//! These are layout conveniences over the raw shape types: a word-wrapped
//! text box, a bullet list, and the bordered "card" used throughout the deck.

use crate::color::Rgb;
use crate::types::{Outline, Paragraph, Rectangle, Shape, Slide, TextBox, TextStyle};
use crate::units::{inches, points, Emu, Frame};

/// Fill of a card's rectangle.
pub const CARD_FILL: Rgb = Rgb(25, 25, 50);

/// Outline color of a card's rectangle.
pub const CARD_BORDER: Rgb = Rgb(60, 60, 90);

/// Color of card items and bullet lists unless overridden.
pub const CARD_ITEM_COLOR: Rgb = Rgb(200, 200, 220);

/// Vertical distance between consecutive card items.
const CARD_ITEM_PITCH: f64 = 0.28;

impl Slide {
    /// Add a word-wrapped text box holding a single paragraph.
    pub fn add_text(&mut self, frame: Frame, text: impl Into<String>, style: TextStyle) {
        self.push_text_box(
            frame,
            vec![Paragraph {
                text: text.into(),
                style,
            }],
        )
    }

    /// Add one text box with a paragraph per item, spaced 6pt apart.
    pub fn add_bullet_list<S: AsRef<str>>(
        &mut self,
        frame: Frame,
        items: &[S],
        style: TextStyle,
    ) {
        let style = style.space_after(6.0);
        let paragraphs = items
            .iter()
            .map(|item| Paragraph {
                text: item.as_ref().to_string(),
                style: style.clone(),
            })
            .collect();
        self.push_text_box(frame, paragraphs)
    }

    /// Add a bordered rectangle with a bold title in `accent` and one
    /// bulleted line per item below it.
    ///
    /// Items are laid out at a fixed pitch; they are not clipped to the
    /// card's height. An empty item leaves a blank row.
    pub fn add_card<S: AsRef<str>>(&mut self, frame: Frame, title: &str, items: &[S], accent: Rgb) {
        let id = self.next_shape_id();
        self.shapes.push(Shape::Rectangle(Rectangle {
            id,
            frame,
            fill: CARD_FILL,
            outline: Some(Outline {
                color: CARD_BORDER,
                width: points(1.0),
            }),
        }));

        self.add_text(
            Frame::new(
                frame.x + inches(0.2),
                frame.y + inches(0.15),
                frame.cx - inches(0.4),
                inches(0.4),
            ),
            title,
            TextStyle::sized(16.0).color(accent).bold(),
        );

        let mut y = frame.y + inches(0.55);
        for item in items {
            self.add_text(
                Frame::new(frame.x + inches(0.3), y, frame.cx - inches(0.5), inches(0.3)),
                format!("• {}", item.as_ref()),
                TextStyle::sized(12.0).color(CARD_ITEM_COLOR),
            );
            y = y + inches(CARD_ITEM_PITCH);
        }
    }

    fn push_text_box(&mut self, frame: Frame, paragraphs: Vec<Paragraph>) {
        let id = self.next_shape_id();
        self.shapes.push(Shape::TextBox(TextBox {
            id,
            frame,
            word_wrap: true,
            paragraphs,
        }));
    }
}

/// Horizontal offset of column `index` in a row that starts at `start`
/// and advances by `pitch` inches.
pub fn column_x(start: f64, pitch: f64, index: usize) -> Emu {
    inches(start) + inches(pitch) * index as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Align;

    fn slide() -> Slide {
        Slide::new(1, Rgb::BLACK)
    }

    fn text_box(slide: &Slide, index: usize) -> &TextBox {
        match &slide.shapes[index] {
            Shape::TextBox(tb) => tb,
            other => panic!("expected text box, got {:?}", other),
        }
    }

    #[test]
    fn test_add_text() {
        let mut slide = slide();
        slide.add_text(
            Frame::inches(1.0, 1.5, 11.0, 1.0),
            "Hello & welcome",
            TextStyle::sized(20.0).bold().centered(),
        );
        let tb = text_box(&slide, 0);
        assert!(tb.word_wrap);
        assert_eq!(tb.paragraphs.len(), 1);
        assert_eq!(tb.paragraphs[0].style.align, Align::Center);
        assert_eq!(slide.shapes[0].id(), 2);
    }

    #[test]
    fn test_bullet_list_spacing() {
        let mut slide = slide();
        slide.add_bullet_list(
            Frame::inches(1.0, 1.0, 5.0, 3.0),
            &["one", "two", "three"],
            TextStyle::sized(16.0),
        );
        let tb = text_box(&slide, 0);
        assert_eq!(tb.paragraphs.len(), 3);
        assert!(tb.paragraphs.iter().all(|p| p.style.space_after == Some(6.0)));
        assert_eq!(slide.shapes.len(), 1);
    }

    #[test]
    fn test_card_layout() {
        let mut slide = slide();
        let frame = Frame::inches(0.8, 1.8, 3.6, 4.5);
        slide.add_card(frame, "Starter", &["a", "b"], Rgb(251, 191, 36));

        // rectangle + title + 2 items
        assert_eq!(slide.shapes.len(), 4);
        let ids: Vec<u32> = slide.shapes.iter().map(Shape::id).collect();
        assert_eq!(ids, vec![2, 3, 4, 5]);

        match &slide.shapes[0] {
            Shape::Rectangle(rect) => {
                assert_eq!(rect.fill, CARD_FILL);
                assert_eq!(rect.outline.map(|o| o.width), Some(Emu(12_700)));
            }
            other => panic!("expected rectangle, got {:?}", other),
        }

        let title = slide.shapes[1].frame();
        assert_eq!(title.x, frame.x + inches(0.2));
        assert_eq!(title.cx, frame.cx - inches(0.4));

        let first = slide.shapes[2].frame();
        let second = slide.shapes[3].frame();
        assert_eq!(first.y, frame.y + inches(0.55));
        assert_eq!(second.y, first.y + inches(0.28));

        let lines: Vec<&str> = slide.lines().collect();
        assert_eq!(lines, vec!["Starter", "• a", "• b"]);
    }

    #[test]
    fn test_column_x() {
        assert_eq!(column_x(0.8, 4.0, 0), inches(0.8));
        assert_eq!(column_x(0.8, 4.0, 2), inches(0.8) + inches(4.0) * 2);
    }
}
