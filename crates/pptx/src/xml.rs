//! Thin wrapper over `quick_xml::Writer` for emitting package parts.

use deck_core::{Error, Frame, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

pub(crate) const NS_MAIN: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
pub(crate) const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub(crate) const NS_OFFICE_RELS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub(crate) const NS_PACKAGE_RELS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";
pub(crate) const NS_CONTENT_TYPES: &str =
    "http://schemas.openxmlformats.org/package/2006/content-types";

/// Namespace declarations shared by presentation, slide, master and layout parts.
pub(crate) const PML_NAMESPACES: [(&str, &str); 3] = [
    ("xmlns:a", NS_DRAWING),
    ("xmlns:r", NS_OFFICE_RELS),
    ("xmlns:p", NS_MAIN),
];

/// Accumulates one XML part in memory.
pub(crate) struct XmlSink {
    writer: Writer<Vec<u8>>,
}

impl XmlSink {
    /// Start a new standalone UTF-8 document.
    pub(crate) fn new() -> Result<Self> {
        let mut writer = Writer::new(Vec::new());
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
            .map_err(xml_error)?;
        Ok(Self { writer })
    }

    pub(crate) fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let elem = element(name, attrs);
        self.writer.write_event(Event::Start(elem)).map_err(xml_error)
    }

    pub(crate) fn end(&mut self, name: &str) -> Result<()> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_error)
    }

    pub(crate) fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let elem = element(name, attrs);
        self.writer.write_event(Event::Empty(elem)).map_err(xml_error)
    }

    /// Write `<name attrs>text</name>`, escaping the text.
    pub(crate) fn text_element(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) -> Result<()> {
        self.start(name, attrs)?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_error)?;
        self.end(name)
    }

    /// `<a:xfrm>` with offset and extent.
    pub(crate) fn xfrm(&mut self, frame: &Frame) -> Result<()> {
        let (x, y) = (frame.x.to_string(), frame.y.to_string());
        let (cx, cy) = (frame.cx.to_string(), frame.cy.to_string());
        self.start("a:xfrm", &[])?;
        self.empty("a:off", &[("x", x.as_str()), ("y", y.as_str())])?;
        self.empty("a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
        self.end("a:xfrm")
    }

    /// `<a:solidFill><a:srgbClr val=".."/></a:solidFill>`.
    pub(crate) fn solid_fill(&mut self, hex: &str) -> Result<()> {
        self.start("a:solidFill", &[])?;
        self.empty("a:srgbClr", &[("val", hex)])?;
        self.end("a:solidFill")
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}

fn element<'a>(name: &'a str, attrs: &[(&'a str, &'a str)]) -> BytesStart<'a> {
    let mut elem = BytesStart::new(name);
    for &attr in attrs {
        elem.push_attribute(attr);
    }
    elem
}

pub(crate) fn xml_error(e: quick_xml::Error) -> Error {
    Error::XmlError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::Frame;

    fn render(f: impl FnOnce(&mut XmlSink) -> Result<()>) -> String {
        let mut sink = XmlSink::new().unwrap();
        f(&mut sink).unwrap();
        String::from_utf8(sink.finish()).unwrap()
    }

    #[test]
    fn test_declaration_first() {
        let xml = render(|s| s.empty("root", &[]));
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#));
        assert!(xml.ends_with("<root/>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let xml = render(|s| s.text_element("a:t", &[], "Q&A <now>"));
        assert!(xml.contains("<a:t>Q&amp;A &lt;now&gt;</a:t>"));
    }

    #[test]
    fn test_attribute_is_escaped() {
        let xml = render(|s| s.empty("p:cNvPr", &[("name", "\"quoted\"")]));
        assert!(xml.contains(r#"name="&quot;quoted&quot;""#));
    }

    #[test]
    fn test_xfrm() {
        let xml = render(|s| s.xfrm(&Frame::inches(1.0, 0.5, 2.0, 0.25)));
        assert!(xml.contains(
            r#"<a:xfrm><a:off x="914400" y="457200"/><a:ext cx="1828800" cy="228600"/></a:xfrm>"#
        ));
    }
}
