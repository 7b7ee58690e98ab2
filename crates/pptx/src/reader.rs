//! PPTX package reader.
//!
//! Recovers the slide sequence and the visible text of each slide from a
//! written package, so a generated deck can be inspected or verified.

use deck_core::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Text and media summary of one slide.
#[derive(Debug, Clone, Serialize)]
pub struct SlideOutline {
    /// 1-based slide number.
    pub number: usize,

    /// Text lines in reading order (top-to-bottom, then left-to-right).
    pub lines: Vec<String>,

    /// Number of picture shapes on the slide.
    pub pictures: usize,

    /// Solid background fill as `RRGGBB`, if the slide sets one.
    pub background: Option<String>,
}

impl SlideOutline {
    pub fn contains_text(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

/// Reader for PPTX (Office Open XML) files.
pub struct PptxReader;

impl PptxReader {
    /// Create a new PPTX reader.
    pub fn new() -> Self {
        Self
    }

    /// Read the slides of the package at `path`.
    pub fn read_path(&self, path: &Path) -> Result<Vec<SlideOutline>> {
        let file = File::open(path)?;
        self.read(BufReader::new(file))
    }

    /// Read the slides of a package.
    pub fn read<R: Read + Seek>(&self, reader: R) -> Result<Vec<SlideOutline>> {
        let mut archive = ZipArchive::new(reader)
            .map_err(|e| Error::ZipError(format!("Failed to open ZIP: {}", e)))?;

        let slide_order = self.slide_order(&mut archive)?;
        log::debug!("Package lists {} slides", slide_order.len());

        slide_order
            .iter()
            .enumerate()
            .map(|(idx, slide_path)| self.read_slide(&mut archive, slide_path, idx + 1))
            .collect()
    }

    /// Ordered slide part paths from the presentation relationships.
    fn slide_order<R: Read + Seek>(&self, archive: &mut ZipArchive<R>) -> Result<Vec<String>> {
        let rels_content = read_file_from_archive(archive, "ppt/_rels/presentation.xml.rels")?;
        let mut slides: Vec<(String, Option<usize>)> = Vec::new();

        let mut reader = Reader::from_str(&rels_content);
        reader.trim_text(true);

        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if e.name().as_ref() == b"Relationship" =>
                {
                    let rel_type = attribute(e, b"Type").unwrap_or_default();
                    let target = attribute(e, b"Target").unwrap_or_default();
                    let id = attribute(e, b"Id").unwrap_or_default();

                    if rel_type.ends_with("/slide") {
                        let order = extract_number(&id).or_else(|| extract_number(&target));
                        let full_path = match target.strip_prefix('/') {
                            Some(absolute) => absolute.to_string(),
                            None => format!("ppt/{}", target),
                        };
                        slides.push((full_path, order));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::XmlError(format!(
                        "Error parsing relationships: {}",
                        e
                    )));
                }
                _ => {}
            }
        }

        slides.sort_by(|a, b| match (a.1, b.1) {
            (Some(na), Some(nb)) => na.cmp(&nb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.0.cmp(&b.0),
        });

        Ok(slides.into_iter().map(|(path, _)| path).collect())
    }

    fn read_slide<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        slide_path: &str,
        number: usize,
    ) -> Result<SlideOutline> {
        let content = read_file_from_archive(archive, slide_path)?;
        let scan = scan_slide(&content)?;

        let mut shapes = scan.shapes;
        shapes.sort_by(|a, b| (a.y, a.x).cmp(&(b.y, b.x)));

        Ok(SlideOutline {
            number,
            lines: shapes
                .into_iter()
                .flat_map(|shape| shape.paragraphs)
                .collect(),
            pictures: scan.pictures,
            background: scan.background,
        })
    }
}

impl Default for PptxReader {
    fn default() -> Self {
        Self::new()
    }
}

/// A text-bearing shape with its offset.
#[derive(Debug, Default)]
struct ShapeText {
    paragraphs: Vec<String>,
    x: i64,
    y: i64,
}

#[derive(Debug, Default)]
struct SlideScan {
    shapes: Vec<ShapeText>,
    pictures: usize,
    background: Option<String>,
}

fn scan_slide(xml: &str) -> Result<SlideScan> {
    let mut scan = SlideScan::default();
    let mut reader = Reader::from_str(xml);

    let mut current: Option<ShapeText> = None;
    let mut in_background = false;
    let mut in_text = false;
    let mut paragraph: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match local_name(e.name().as_ref()) {
                b"bg" => in_background = true,
                b"sp" => current = Some(ShapeText::default()),
                b"pic" => scan.pictures += 1,
                b"p" if current.is_some() => paragraph = Some(String::new()),
                b"t" => in_text = paragraph.is_some(),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match local_name(e.name().as_ref()) {
                b"off" => {
                    if let Some(shape) = current.as_mut() {
                        shape.x = attribute(e, b"x").and_then(|v| v.parse().ok()).unwrap_or(0);
                        shape.y = attribute(e, b"y").and_then(|v| v.parse().ok()).unwrap_or(0);
                    }
                }
                b"srgbClr" if in_background && scan.background.is_none() => {
                    scan.background = attribute(e, b"val");
                }
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_text => {
                if let Some(text) = paragraph.as_mut() {
                    text.push_str(&e.unescape().unwrap_or_default());
                }
            }
            Ok(Event::End(ref e)) => match local_name(e.name().as_ref()) {
                b"bg" => in_background = false,
                b"t" => in_text = false,
                b"p" => {
                    if let (Some(shape), Some(text)) = (current.as_mut(), paragraph.take()) {
                        if !text.trim().is_empty() {
                            shape.paragraphs.push(text);
                        }
                    }
                }
                b"sp" => {
                    if let Some(shape) = current.take() {
                        if !shape.paragraphs.is_empty() {
                            scan.shapes.push(shape);
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlError(format!("Error parsing slide: {}", e)));
            }
            _ => {}
        }
    }

    Ok(scan)
}

/// Read a file from the ZIP archive.
fn read_file_from_archive<R: Read + Seek>(archive: &mut ZipArchive<R>, path: &str) -> Result<String> {
    let mut file = archive
        .by_name(path)
        .map_err(|e| Error::CorruptedFile(format!("Part not found '{}': {}", path, e)))?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| Error::ZipError(format!("Failed to read '{}': {}", path, e)))?;

    Ok(content)
}

/// Unescaped value of the attribute `key`, if present.
fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    match name.iter().position(|&b| b == b':') {
        Some(pos) => &name[pos + 1..],
        None => name,
    }
}

/// Trailing number of a string like "rId12" or "slide3.xml".
fn extract_number(s: &str) -> Option<usize> {
    let s = s.trim_end_matches(".xml").trim_end_matches(".rels");
    let start = s
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    s[start..].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PptxWriter;
    use deck_core::{Deck, Frame, ImageData, Rgb, TextStyle};
    use std::io::Cursor;

    #[test]
    fn test_extract_number() {
        assert_eq!(extract_number("rId1"), Some(1));
        assert_eq!(extract_number("rId12"), Some(12));
        assert_eq!(extract_number("slide123.xml"), Some(123));
        assert_eq!(extract_number("nodigits"), None);
    }

    #[test]
    fn test_local_name() {
        assert_eq!(local_name(b"p:sp"), b"sp");
        assert_eq!(local_name(b"a:t"), b"t");
        assert_eq!(local_name(b"sp"), b"sp");
    }

    #[test]
    fn test_scan_orders_by_position() {
        let xml = r#"<p:sld xmlns:a="a" xmlns:p="p"><p:cSld>
            <p:bg><p:bgPr><a:solidFill><a:srgbClr val="0F0F23"/></a:solidFill></p:bgPr></p:bg>
            <p:spTree>
              <p:sp><p:spPr><a:xfrm><a:off x="100" y="500"/></a:xfrm></p:spPr>
                <p:txBody><a:p><a:r><a:t>lower</a:t></a:r></a:p></p:txBody></p:sp>
              <p:sp><p:spPr><a:xfrm><a:off x="900" y="10"/></a:xfrm></p:spPr>
                <p:txBody><a:p><a:r><a:t>right</a:t></a:r></a:p></p:txBody></p:sp>
              <p:sp><p:spPr><a:xfrm><a:off x="5" y="10"/></a:xfrm></p:spPr>
                <p:txBody><a:p><a:r><a:t>Q&amp;A</a:t></a:r></a:p><a:p><a:r><a:t>second</a:t></a:r></a:p></p:txBody></p:sp>
            </p:spTree></p:cSld></p:sld>"#;
        let mut scan = scan_slide(xml).unwrap();
        assert_eq!(scan.background.as_deref(), Some("0F0F23"));
        scan.shapes.sort_by(|a, b| (a.y, a.x).cmp(&(b.y, b.x)));
        let lines: Vec<String> = scan.shapes.into_iter().flat_map(|s| s.paragraphs).collect();
        assert_eq!(lines, vec!["Q&A", "second", "right", "lower"]);
    }

    #[test]
    fn test_read_written_deck() {
        let mut deck = Deck::widescreen("Check").with_background_fill(Rgb(15, 15, 35));
        let media = deck.add_media(
            ImageData::from_bytes(vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]).unwrap(),
        );
        deck.background_image = Some(media);
        for title in ["First", "Second", "Third"] {
            let slide = deck.add_slide();
            slide.add_text(Frame::inches(0.8, 0.5, 11.0, 0.6), title, TextStyle::sized(36.0));
        }

        let bytes = PptxWriter::new().to_bytes(&deck).unwrap();
        let slides = PptxReader::new().read(Cursor::new(bytes)).unwrap();

        assert_eq!(slides.len(), 3);
        let titles: Vec<&str> = slides.iter().map(|s| s.lines[0].as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
        assert!(slides.iter().all(|s| s.pictures == 1));
        assert!(slides.iter().all(|s| s.background.as_deref() == Some("0F0F23")));
    }

    #[test]
    fn test_read_rejects_non_zip() {
        let result = PptxReader::new().read(Cursor::new(b"not a zip".to_vec()));
        assert!(matches!(result, Err(Error::ZipError(_))));
    }
}
