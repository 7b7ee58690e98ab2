//! PPTX package writer.
//!
//! Serializes a [`Deck`] into an Office Open XML package. Output is
//! reproducible: ZIP entries carry a fixed timestamp and parts are always
//! written in the same order, so the same deck yields the same bytes.

use crate::template::{
    PRES_PROPS_XML, SLIDE_LAYOUT_XML, SLIDE_MASTER_XML, TABLE_STYLES_XML, THEME_XML,
};
use crate::xml::{XmlSink, NS_CONTENT_TYPES, NS_PACKAGE_RELS, PML_NAMESPACES};
use deck_core::{Deck, Error, MediaId, Paragraph, Result, Shape, Slide};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_EXTENDED_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_SLIDE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_THEME: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
const REL_PRES_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps";
const REL_TABLE_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/tableStyles";
const REL_IMAGE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

const CT_PRESENTATION: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
const CT_SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
const CT_SLIDE_MASTER: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
const CT_SLIDE_LAYOUT: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
const CT_THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
const CT_PRES_PROPS: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presProps+xml";
const CT_TABLE_STYLES: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml";
const CT_CORE: &str = "application/vnd.openxmlformats-package.core-properties+xml";
const CT_EXTENDED: &str = "application/vnd.openxmlformats-officedocument.extended-properties+xml";

/// First id of `p:sldId`; lower values are reserved.
const FIRST_SLIDE_ID: usize = 256;

/// Writer for PPTX (Office Open XML) packages.
pub struct PptxWriter;

impl PptxWriter {
    /// Create a new PPTX writer.
    pub fn new() -> Self {
        Self
    }

    /// Write `deck` to `path`, creating parent directories and replacing any
    /// existing file.
    pub fn save(&self, deck: &Deck, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        let mut out = self.write(deck, BufWriter::new(file))?;
        out.flush()?;
        log::debug!("Wrote {} slides to {}", deck.slide_count(), path.display());
        Ok(())
    }

    /// Serialize `deck` into an in-memory package.
    pub fn to_bytes(&self, deck: &Deck) -> Result<Vec<u8>> {
        let cursor = self.write(deck, Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    /// Write `deck` as a package into `writer`, returning the writer.
    pub fn write<W: Write + Seek>(&self, deck: &Deck, writer: W) -> Result<W> {
        let mut zip = ZipWriter::new(writer);

        add_part(&mut zip, "[Content_Types].xml", &content_types_xml(deck)?)?;
        add_part(&mut zip, "_rels/.rels", &package_rels_xml()?)?;
        add_part(&mut zip, "docProps/core.xml", &core_xml(deck)?)?;
        add_part(&mut zip, "docProps/app.xml", &app_xml(deck)?)?;
        add_part(&mut zip, "ppt/presentation.xml", &presentation_xml(deck)?)?;
        add_part(&mut zip, "ppt/_rels/presentation.xml.rels", &presentation_rels_xml(deck)?)?;
        add_part(&mut zip, "ppt/presProps.xml", PRES_PROPS_XML.as_bytes())?;
        add_part(&mut zip, "ppt/tableStyles.xml", TABLE_STYLES_XML.as_bytes())?;
        add_part(&mut zip, "ppt/theme/theme1.xml", THEME_XML.as_bytes())?;
        add_part(&mut zip, "ppt/slideMasters/slideMaster1.xml", SLIDE_MASTER_XML.as_bytes())?;
        add_part(
            &mut zip,
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            &relationships_xml(&[
                ("rId1", REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"),
                ("rId2", REL_THEME, "../theme/theme1.xml"),
            ])?,
        )?;
        add_part(&mut zip, "ppt/slideLayouts/slideLayout1.xml", SLIDE_LAYOUT_XML.as_bytes())?;
        add_part(
            &mut zip,
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            &relationships_xml(&[(
                "rId1",
                REL_SLIDE_MASTER,
                "../slideMasters/slideMaster1.xml",
            )])?,
        )?;

        for slide in &deck.slides {
            let media_rels = media_relationships(slide);
            add_part(
                &mut zip,
                &format!("ppt/slides/slide{}.xml", slide.number),
                &slide_xml(slide, &media_rels)?,
            )?;
            add_part(
                &mut zip,
                &format!("ppt/slides/_rels/slide{}.xml.rels", slide.number),
                &slide_rels_xml(deck, &media_rels)?,
            )?;
        }

        for (index, image) in deck.media.iter().enumerate() {
            add_part(&mut zip, &media_part_name(deck, MediaId(index)), &image.bytes)?;
        }

        zip.finish()
            .map_err(|e| Error::ZipError(format!("Failed to finish archive: {}", e)))
    }
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Add one deflated entry with a fixed modification time.
fn add_part<W: Write + Seek>(zip: &mut ZipWriter<W>, name: &str, data: &[u8]) -> Result<()> {
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());
    zip.start_file(name, options)
        .map_err(|e| Error::ZipError(format!("Failed to start '{}': {}", name, e)))?;
    zip.write_all(data)?;
    Ok(())
}

/// Package-relative name of a media part, e.g. `ppt/media/image1.png`.
fn media_part_name(deck: &Deck, id: MediaId) -> String {
    let ext = deck.media[id.0].format.extension();
    format!("ppt/media/image{}.{}", id.0 + 1, ext)
}

/// Relationship ids for the media a slide references, in first-use order.
/// `rId1` always points at the slide layout.
fn media_relationships(slide: &Slide) -> BTreeMap<MediaId, String> {
    let mut rels = BTreeMap::new();
    for picture in slide.pictures() {
        let next = rels.len() + 2;
        rels.entry(picture.media)
            .or_insert_with(|| format!("rId{}", next));
    }
    rels
}

fn relationships_xml(rels: &[(&str, &str, &str)]) -> Result<Vec<u8>> {
    let mut xml = XmlSink::new()?;
    xml.start("Relationships", &[("xmlns", NS_PACKAGE_RELS)])?;
    for &(id, rel_type, target) in rels {
        xml.empty(
            "Relationship",
            &[("Id", id), ("Type", rel_type), ("Target", target)],
        )?;
    }
    xml.end("Relationships")?;
    Ok(xml.finish())
}

fn content_types_xml(deck: &Deck) -> Result<Vec<u8>> {
    let mut xml = XmlSink::new()?;
    xml.start("Types", &[("xmlns", NS_CONTENT_TYPES)])?;
    xml.empty(
        "Default",
        &[
            ("Extension", "rels"),
            ("ContentType", "application/vnd.openxmlformats-package.relationships+xml"),
        ],
    )?;
    xml.empty("Default", &[("Extension", "xml"), ("ContentType", "application/xml")])?;

    let mut formats: Vec<_> = deck.media.iter().map(|m| m.format).collect();
    formats.sort_by_key(|f| f.extension());
    formats.dedup();
    for format in formats {
        xml.empty(
            "Default",
            &[("Extension", format.extension()), ("ContentType", format.content_type())],
        )?;
    }

    let mut overrides: Vec<(String, &str)> = vec![
        ("/ppt/presentation.xml".to_string(), CT_PRESENTATION),
        ("/ppt/slideMasters/slideMaster1.xml".to_string(), CT_SLIDE_MASTER),
        ("/ppt/slideLayouts/slideLayout1.xml".to_string(), CT_SLIDE_LAYOUT),
    ];
    for slide in &deck.slides {
        overrides.push((format!("/ppt/slides/slide{}.xml", slide.number), CT_SLIDE));
    }
    overrides.extend([
        ("/ppt/theme/theme1.xml".to_string(), CT_THEME),
        ("/ppt/presProps.xml".to_string(), CT_PRES_PROPS),
        ("/ppt/tableStyles.xml".to_string(), CT_TABLE_STYLES),
        ("/docProps/core.xml".to_string(), CT_CORE),
        ("/docProps/app.xml".to_string(), CT_EXTENDED),
    ]);
    for (part, content_type) in &overrides {
        xml.empty(
            "Override",
            &[("PartName", part.as_str()), ("ContentType", *content_type)],
        )?;
    }

    xml.end("Types")?;
    Ok(xml.finish())
}

fn package_rels_xml() -> Result<Vec<u8>> {
    relationships_xml(&[
        ("rId1", REL_OFFICE_DOCUMENT, "ppt/presentation.xml"),
        ("rId2", REL_CORE_PROPERTIES, "docProps/core.xml"),
        ("rId3", REL_EXTENDED_PROPERTIES, "docProps/app.xml"),
    ])
}

fn core_xml(deck: &Deck) -> Result<Vec<u8>> {
    let mut xml = XmlSink::new()?;
    xml.start(
        "cp:coreProperties",
        &[
            (
                "xmlns:cp",
                "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
            ),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
            ("xmlns:dcmitype", "http://purl.org/dc/dcmitype/"),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ],
    )?;
    xml.text_element("dc:title", &[], &deck.title)?;
    xml.text_element("dc:creator", &[], &deck.author)?;
    xml.text_element("cp:lastModifiedBy", &[], &deck.author)?;
    xml.text_element("dcterms:created", &[("xsi:type", "dcterms:W3CDTF")], &deck.created)?;
    xml.text_element("dcterms:modified", &[("xsi:type", "dcterms:W3CDTF")], &deck.created)?;
    xml.end("cp:coreProperties")?;
    Ok(xml.finish())
}

fn app_xml(deck: &Deck) -> Result<Vec<u8>> {
    let mut xml = XmlSink::new()?;
    xml.start(
        "Properties",
        &[
            (
                "xmlns",
                "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties",
            ),
            (
                "xmlns:vt",
                "http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes",
            ),
        ],
    )?;
    xml.text_element("Application", &[], env!("CARGO_PKG_NAME"))?;
    xml.text_element("Slides", &[], &deck.slide_count().to_string())?;
    xml.end("Properties")?;
    Ok(xml.finish())
}

fn presentation_xml(deck: &Deck) -> Result<Vec<u8>> {
    let mut xml = XmlSink::new()?;
    let mut attrs = PML_NAMESPACES.to_vec();
    attrs.push(("saveSubsetFonts", "1"));
    xml.start("p:presentation", &attrs)?;

    xml.start("p:sldMasterIdLst", &[])?;
    xml.empty("p:sldMasterId", &[("id", "2147483648"), ("r:id", "rId1")])?;
    xml.end("p:sldMasterIdLst")?;

    if !deck.slides.is_empty() {
        xml.start("p:sldIdLst", &[])?;
        for (index, _) in deck.slides.iter().enumerate() {
            let id = (FIRST_SLIDE_ID + index).to_string();
            let rel_id = slide_rel_id(index);
            xml.empty("p:sldId", &[("id", id.as_str()), ("r:id", rel_id.as_str())])?;
        }
        xml.end("p:sldIdLst")?;
    }

    let (cx, cy) = (deck.slide_width.to_string(), deck.slide_height.to_string());
    xml.empty("p:sldSz", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    xml.empty("p:notesSz", &[("cx", "6858000"), ("cy", "9144000")])?;
    xml.end("p:presentation")?;
    Ok(xml.finish())
}

/// Slides follow the master (`rId1`) in the presentation relationships.
fn slide_rel_id(index: usize) -> String {
    format!("rId{}", index + 2)
}

fn presentation_rels_xml(deck: &Deck) -> Result<Vec<u8>> {
    let slide_targets: Vec<(String, String)> = deck
        .slides
        .iter()
        .enumerate()
        .map(|(index, slide)| (slide_rel_id(index), format!("slides/slide{}.xml", slide.number)))
        .collect();

    let after = deck.slides.len() + 2;
    let tail_ids = [
        format!("rId{}", after),
        format!("rId{}", after + 1),
        format!("rId{}", after + 2),
    ];

    let mut rels: Vec<(&str, &str, &str)> =
        vec![("rId1", REL_SLIDE_MASTER, "slideMasters/slideMaster1.xml")];
    rels.extend(
        slide_targets
            .iter()
            .map(|(id, target)| (id.as_str(), REL_SLIDE, target.as_str())),
    );
    rels.push((tail_ids[0].as_str(), REL_THEME, "theme/theme1.xml"));
    rels.push((tail_ids[1].as_str(), REL_PRES_PROPS, "presProps.xml"));
    rels.push((tail_ids[2].as_str(), REL_TABLE_STYLES, "tableStyles.xml"));
    relationships_xml(&rels)
}

fn slide_rels_xml(deck: &Deck, media_rels: &BTreeMap<MediaId, String>) -> Result<Vec<u8>> {
    let targets: Vec<(&str, String)> = media_rels
        .iter()
        .map(|(media, rel_id)| {
            let target = media_part_name(deck, *media).replacen("ppt/", "../", 1);
            (rel_id.as_str(), target)
        })
        .collect();

    let mut rels: Vec<(&str, &str, &str)> =
        vec![("rId1", REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml")];
    rels.extend(
        targets
            .iter()
            .map(|(id, target)| (*id, REL_IMAGE, target.as_str())),
    );
    relationships_xml(&rels)
}

fn slide_xml(slide: &Slide, media_rels: &BTreeMap<MediaId, String>) -> Result<Vec<u8>> {
    let mut xml = XmlSink::new()?;
    xml.start("p:sld", &PML_NAMESPACES)?;
    xml.start("p:cSld", &[])?;

    xml.start("p:bg", &[])?;
    xml.start("p:bgPr", &[])?;
    xml.solid_fill(&slide.background_fill.to_hex())?;
    xml.empty("a:effectLst", &[])?;
    xml.end("p:bgPr")?;
    xml.end("p:bg")?;

    xml.start("p:spTree", &[])?;
    xml.start("p:nvGrpSpPr", &[])?;
    xml.empty("p:cNvPr", &[("id", "1"), ("name", "")])?;
    xml.empty("p:cNvGrpSpPr", &[])?;
    xml.empty("p:nvPr", &[])?;
    xml.end("p:nvGrpSpPr")?;
    xml.start("p:grpSpPr", &[])?;
    xml.start("a:xfrm", &[])?;
    xml.empty("a:off", &[("x", "0"), ("y", "0")])?;
    xml.empty("a:ext", &[("cx", "0"), ("cy", "0")])?;
    xml.empty("a:chOff", &[("x", "0"), ("y", "0")])?;
    xml.empty("a:chExt", &[("cx", "0"), ("cy", "0")])?;
    xml.end("a:xfrm")?;
    xml.end("p:grpSpPr")?;

    for shape in &slide.shapes {
        write_shape(&mut xml, shape, media_rels)?;
    }

    xml.end("p:spTree")?;
    xml.end("p:cSld")?;
    xml.start("p:clrMapOvr", &[])?;
    xml.empty("a:masterClrMapping", &[])?;
    xml.end("p:clrMapOvr")?;
    xml.end("p:sld")?;
    Ok(xml.finish())
}

fn write_shape(
    xml: &mut XmlSink,
    shape: &Shape,
    media_rels: &BTreeMap<MediaId, String>,
) -> Result<()> {
    let id = shape.id().to_string();
    match shape {
        Shape::TextBox(tb) => {
            let name = format!("TextBox {}", tb.id - 1);
            xml.start("p:sp", &[])?;
            xml.start("p:nvSpPr", &[])?;
            xml.empty("p:cNvPr", &[("id", id.as_str()), ("name", name.as_str())])?;
            xml.empty("p:cNvSpPr", &[("txBox", "1")])?;
            xml.empty("p:nvPr", &[])?;
            xml.end("p:nvSpPr")?;

            xml.start("p:spPr", &[])?;
            xml.xfrm(&tb.frame)?;
            write_rect_geometry(xml)?;
            xml.empty("a:noFill", &[])?;
            xml.end("p:spPr")?;

            xml.start("p:txBody", &[])?;
            let wrap = if tb.word_wrap { "square" } else { "none" };
            xml.start("a:bodyPr", &[("wrap", wrap), ("rtlCol", "0")])?;
            xml.empty("a:spAutoFit", &[])?;
            xml.end("a:bodyPr")?;
            xml.empty("a:lstStyle", &[])?;
            for paragraph in &tb.paragraphs {
                write_paragraph(xml, paragraph)?;
            }
            xml.end("p:txBody")?;
            xml.end("p:sp")
        }
        Shape::Rectangle(rect) => {
            let name = format!("Rectangle {}", rect.id - 1);
            xml.start("p:sp", &[])?;
            xml.start("p:nvSpPr", &[])?;
            xml.empty("p:cNvPr", &[("id", id.as_str()), ("name", name.as_str())])?;
            xml.empty("p:cNvSpPr", &[])?;
            xml.empty("p:nvPr", &[])?;
            xml.end("p:nvSpPr")?;

            xml.start("p:spPr", &[])?;
            xml.xfrm(&rect.frame)?;
            write_rect_geometry(xml)?;
            xml.solid_fill(&rect.fill.to_hex())?;
            if let Some(outline) = rect.outline {
                let width = outline.width.to_string();
                xml.start("a:ln", &[("w", width.as_str())])?;
                xml.solid_fill(&outline.color.to_hex())?;
                xml.end("a:ln")?;
            }
            xml.end("p:spPr")?;
            xml.end("p:sp")
        }
        Shape::Picture(pic) => {
            let rel_id = media_rels.get(&pic.media).ok_or_else(|| {
                Error::CorruptedFile(format!("picture {} has no media relationship", pic.id))
            })?;
            let name = format!("Picture {}", pic.id - 1);
            xml.start("p:pic", &[])?;
            xml.start("p:nvPicPr", &[])?;
            xml.empty(
                "p:cNvPr",
                &[
                    ("id", id.as_str()),
                    ("name", name.as_str()),
                    ("descr", pic.description.as_str()),
                ],
            )?;
            xml.start("p:cNvPicPr", &[])?;
            xml.empty("a:picLocks", &[("noChangeAspect", "1")])?;
            xml.end("p:cNvPicPr")?;
            xml.empty("p:nvPr", &[])?;
            xml.end("p:nvPicPr")?;

            xml.start("p:blipFill", &[])?;
            xml.empty("a:blip", &[("r:embed", rel_id.as_str())])?;
            xml.start("a:stretch", &[])?;
            xml.empty("a:fillRect", &[])?;
            xml.end("a:stretch")?;
            xml.end("p:blipFill")?;

            xml.start("p:spPr", &[])?;
            xml.xfrm(&pic.frame)?;
            write_rect_geometry(xml)?;
            xml.end("p:spPr")?;
            xml.end("p:pic")
        }
    }
}

fn write_rect_geometry(xml: &mut XmlSink) -> Result<()> {
    xml.start("a:prstGeom", &[("prst", "rect")])?;
    xml.empty("a:avLst", &[])?;
    xml.end("a:prstGeom")
}

fn write_paragraph(xml: &mut XmlSink, paragraph: &Paragraph) -> Result<()> {
    let style = &paragraph.style;
    xml.start("a:p", &[])?;

    let algn = [("algn", style.align.as_ooxml())];
    match style.space_after {
        Some(space) => {
            // spcPts is in hundredths of a point
            let val = ((space * 100.0).round() as i64).to_string();
            xml.start("a:pPr", &algn)?;
            xml.start("a:spcAft", &[])?;
            xml.empty("a:spcPts", &[("val", val.as_str())])?;
            xml.end("a:spcAft")?;
            xml.end("a:pPr")?;
        }
        None => xml.empty("a:pPr", &algn)?,
    }

    let size = style.size_hundredths().to_string();
    let bold = if style.bold { "1" } else { "0" };
    let run_props = [("lang", "en-US"), ("sz", size.as_str()), ("b", bold), ("dirty", "0")];
    if !paragraph.text.is_empty() {
        xml.start("a:r", &[])?;
        write_run_properties(xml, "a:rPr", &run_props, paragraph)?;
        xml.text_element("a:t", &[], &paragraph.text)?;
        xml.end("a:r")?;
    }
    write_run_properties(xml, "a:endParaRPr", &run_props, paragraph)?;

    xml.end("a:p")
}

fn write_run_properties(
    xml: &mut XmlSink,
    name: &str,
    attrs: &[(&str, &str)],
    paragraph: &Paragraph,
) -> Result<()> {
    xml.start(name, attrs)?;
    xml.solid_fill(&paragraph.style.color.to_hex())?;
    xml.empty("a:latin", &[("typeface", paragraph.style.font.as_str())])?;
    xml.end(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{Frame, ImageData, Rgb, TextStyle};
    use std::io::Read;
    use zip::ZipArchive;

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn sample_deck() -> Deck {
        let mut deck = Deck::widescreen("Sample").with_background_fill(Rgb(15, 15, 35));
        let slide = deck.add_slide();
        slide.add_text(
            Frame::inches(1.0, 1.0, 11.0, 1.0),
            "Growth & <Retention>",
            TextStyle::sized(36.0).bold().centered(),
        );
        let slide = deck.add_slide();
        slide.add_card(
            Frame::inches(0.8, 1.8, 3.6, 4.5),
            "Starter",
            &["3+ referral sign-ups", ""],
            Rgb(251, 191, 36),
        );
        deck
    }

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_package_parts() {
        let bytes = PptxWriter::new().to_bytes(&sample_deck()).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
        ] {
            assert!(names.contains(&part), "missing {}", part);
        }
        assert!(!names.iter().any(|n| n.starts_with("ppt/media/")));
    }

    #[test]
    fn test_content_types_list_every_slide() {
        let bytes = PptxWriter::new().to_bytes(&sample_deck()).unwrap();
        let types = read_part(&bytes, "[Content_Types].xml");
        assert!(types.contains(r#"PartName="/ppt/slides/slide1.xml""#));
        assert!(types.contains(r#"PartName="/ppt/slides/slide2.xml""#));
        assert!(!types.contains(r#"Extension="png""#));
    }

    #[test]
    fn test_presentation_size_and_ids() {
        let bytes = PptxWriter::new().to_bytes(&sample_deck()).unwrap();
        let pres = read_part(&bytes, "ppt/presentation.xml");
        assert!(pres.contains(r#"<p:sldSz cx="12191695" cy="6858000"/>"#));
        assert!(pres.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(pres.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));

        let rels = read_part(&bytes, "ppt/_rels/presentation.xml.rels");
        assert!(rels.contains(r#"Id="rId4""#) && rels.contains("theme/theme1.xml"));
    }

    #[test]
    fn test_slide_xml_content() {
        let bytes = PptxWriter::new().to_bytes(&sample_deck()).unwrap();
        let slide = read_part(&bytes, "ppt/slides/slide1.xml");
        assert!(slide.contains(r#"<a:srgbClr val="0F0F23"/>"#));
        assert!(slide.contains("<a:t>Growth &amp; &lt;Retention&gt;</a:t>"));
        assert!(slide.contains(r#"<a:pPr algn="ctr"/>"#));
        assert!(slide.contains(r#"sz="3600" b="1""#));
        assert!(slide.contains(r#"<a:latin typeface="Calibri"/>"#));

        let card = read_part(&bytes, "ppt/slides/slide2.xml");
        assert!(card.contains(r#"<a:ln w="12700"><a:solidFill><a:srgbClr val="3C3C5A"/>"#));
        assert!(card.contains("<a:t>• 3+ referral sign-ups</a:t>"));
    }

    #[test]
    fn test_background_media_shared() {
        let mut deck = Deck::widescreen("Sample");
        let media = deck.add_media(ImageData::from_bytes(PNG_HEADER.to_vec()).unwrap());
        deck.background_image = Some(media);
        deck.add_slide();
        deck.add_slide();

        let bytes = PptxWriter::new().to_bytes(&deck).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let media_parts: Vec<&str> = archive
            .file_names()
            .filter(|n| n.starts_with("ppt/media/"))
            .collect();
        assert_eq!(media_parts, vec!["ppt/media/image1.png"]);

        let rels = read_part(&bytes, "ppt/slides/_rels/slide2.xml.rels");
        assert!(rels.contains(r#"Id="rId2""#));
        assert!(rels.contains(r#"Target="../media/image1.png""#));
        let slide = read_part(&bytes, "ppt/slides/slide2.xml");
        assert!(slide.contains(r#"<a:blip r:embed="rId2"/>"#));
        let types = read_part(&bytes, "[Content_Types].xml");
        assert!(types.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
    }

    #[test]
    fn test_output_is_reproducible() {
        let deck = sample_deck();
        let writer = PptxWriter::new();
        assert_eq!(writer.to_bytes(&deck).unwrap(), writer.to_bytes(&deck).unwrap());
    }

    #[test]
    fn test_save_creates_directory_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deck.pptx");
        let writer = PptxWriter::new();

        writer.save(&sample_deck(), &path).unwrap();
        assert!(path.exists());

        std::fs::write(&path, b"stale").unwrap();
        writer.save(&sample_deck(), &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, writer.to_bytes(&sample_deck()).unwrap());
    }
}
