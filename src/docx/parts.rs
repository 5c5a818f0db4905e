//! WordprocessingML parts of the DOCX package.

use std::io::Cursor;

use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::Result;
use crate::model::{
    Alignment, DocumentProperties, Element, FieldKind, InlineContent, Paragraph, StyledDocument,
    TextRun,
};
use crate::render::StyleConfig;

const NS_MAIN: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const NS_REL: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_PACKAGE_REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
const NS_CORE: &str = "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";

const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
const REL_HEADER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/header";

/// Relationship id of the page header inside `word/_rels/document.xml.rels`.
const HEADER_REL_ID: &str = "rId2";

/// US Letter in twips.
const PAGE_WIDTH: i32 = 12240;
const PAGE_HEIGHT: i32 = 15840;

/// Distance of the header and footer from the page edge, in twips.
const HEADER_DISTANCE: i32 = 720;

/// Small wrapper around the quick-xml writer.
struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
    fn new() -> Result<Self> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        writer.write_event(Event::Decl(BytesDecl::new(
            "1.0",
            Some("UTF-8"),
            Some("yes"),
        )))?;
        Ok(Self { writer })
    }

    fn element(name: &str, attrs: &[(&str, &str)]) -> BytesStart<'static> {
        let mut elem = BytesStart::new(name.to_string());
        for &(key, value) in attrs {
            elem.push_attribute((key, value));
        }
        elem
    }

    fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        self.writer
            .write_event(Event::Start(Self::element(name, attrs)))?;
        Ok(())
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        self.writer
            .write_event(Event::Empty(Self::element(name, attrs)))?;
        Ok(())
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<()> {
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    /// `<name>text</name>`
    fn text_element(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) -> Result<()> {
        self.start(name, attrs)?;
        self.text(text)?;
        self.end(name)
    }

    fn finish(self) -> Vec<u8> {
        self.writer.into_inner().into_inner()
    }
}

/// `[Content_Types].xml`
pub(crate) fn content_types(with_header: bool) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.start("Types", &[("xmlns", NS_CONTENT_TYPES)])?;
    xml.empty(
        "Default",
        &[
            ("Extension", "rels"),
            (
                "ContentType",
                "application/vnd.openxmlformats-package.relationships+xml",
            ),
        ],
    )?;
    xml.empty(
        "Default",
        &[("Extension", "xml"), ("ContentType", "application/xml")],
    )?;

    let mut overrides = vec![
        (
            "/word/document.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
        ),
        (
            "/word/styles.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
        ),
        (
            "/docProps/core.xml",
            "application/vnd.openxmlformats-package.core-properties+xml",
        ),
    ];
    if with_header {
        overrides.push((
            "/word/header1.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml",
        ));
    }
    for (part, content_type) in overrides {
        xml.empty(
            "Override",
            &[("PartName", part), ("ContentType", content_type)],
        )?;
    }

    xml.end("Types")?;
    Ok(xml.finish())
}

/// `_rels/.rels`
pub(crate) fn package_relationships() -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.start("Relationships", &[("xmlns", NS_PACKAGE_REL)])?;
    xml.empty(
        "Relationship",
        &[
            ("Id", "rId1"),
            ("Type", REL_OFFICE_DOCUMENT),
            ("Target", "word/document.xml"),
        ],
    )?;
    xml.empty(
        "Relationship",
        &[
            ("Id", "rId2"),
            ("Type", REL_CORE_PROPERTIES),
            ("Target", "docProps/core.xml"),
        ],
    )?;
    xml.end("Relationships")?;
    Ok(xml.finish())
}

/// `word/_rels/document.xml.rels`
pub(crate) fn document_relationships(with_header: bool) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.start("Relationships", &[("xmlns", NS_PACKAGE_REL)])?;
    xml.empty(
        "Relationship",
        &[
            ("Id", "rId1"),
            ("Type", REL_STYLES),
            ("Target", "styles.xml"),
        ],
    )?;
    if with_header {
        xml.empty(
            "Relationship",
            &[
                ("Id", HEADER_REL_ID),
                ("Type", REL_HEADER),
                ("Target", "header1.xml"),
            ],
        )?;
    }
    xml.end("Relationships")?;
    Ok(xml.finish())
}

/// `docProps/core.xml`
pub(crate) fn core_properties(
    properties: &DocumentProperties,
    created: DateTime<Utc>,
) -> Result<Vec<u8>> {
    let timestamp = created.to_rfc3339_opts(SecondsFormat::Secs, true);

    let mut xml = XmlWriter::new()?;
    xml.start(
        "cp:coreProperties",
        &[
            ("xmlns:cp", NS_CORE),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ],
    )?;
    if let Some(ref title) = properties.title {
        xml.text_element("dc:title", &[], title)?;
    }
    if let Some(ref author) = properties.author {
        xml.text_element("dc:creator", &[], author)?;
    }
    xml.text_element(
        "dcterms:created",
        &[("xsi:type", "dcterms:W3CDTF")],
        &timestamp,
    )?;
    xml.text_element(
        "dcterms:modified",
        &[("xsi:type", "dcterms:W3CDTF")],
        &timestamp,
    )?;
    xml.end("cp:coreProperties")?;
    Ok(xml.finish())
}

/// `word/styles.xml`: the document-wide defaults.
pub(crate) fn styles(style: &StyleConfig) -> Result<Vec<u8>> {
    let font = style.font_family.as_str();
    let size = style.font_half_points().to_string();
    let line = style.line_spacing.line_value().to_string();
    let before = style.space_before.twips().to_string();
    let after = style.space_after.twips().to_string();

    let mut xml = XmlWriter::new()?;
    xml.start("w:styles", &[("xmlns:w", NS_MAIN)])?;
    xml.start("w:docDefaults", &[])?;

    xml.start("w:rPrDefault", &[])?;
    xml.start("w:rPr", &[])?;
    xml.empty(
        "w:rFonts",
        &[
            ("w:ascii", font),
            ("w:hAnsi", font),
            ("w:eastAsia", font),
            ("w:cs", font),
        ],
    )?;
    xml.empty("w:sz", &[("w:val", &size)])?;
    xml.empty("w:szCs", &[("w:val", &size)])?;
    xml.empty("w:lang", &[("w:val", "en-US")])?;
    xml.end("w:rPr")?;
    xml.end("w:rPrDefault")?;

    xml.start("w:pPrDefault", &[])?;
    xml.start("w:pPr", &[])?;
    xml.empty(
        "w:spacing",
        &[
            ("w:before", &before),
            ("w:after", &after),
            ("w:line", &line),
            ("w:lineRule", "auto"),
        ],
    )?;
    xml.end("w:pPr")?;
    xml.end("w:pPrDefault")?;

    xml.end("w:docDefaults")?;

    xml.start(
        "w:style",
        &[
            ("w:type", "paragraph"),
            ("w:default", "1"),
            ("w:styleId", "Normal"),
        ],
    )?;
    xml.empty("w:name", &[("w:val", "Normal")])?;
    xml.empty("w:qFormat", &[])?;
    xml.end("w:style")?;

    xml.end("w:styles")?;
    Ok(xml.finish())
}

/// `word/header1.xml`
pub(crate) fn header(paragraph: &Paragraph) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.start("w:hdr", &[("xmlns:w", NS_MAIN), ("xmlns:r", NS_REL)])?;
    write_paragraph(&mut xml, paragraph)?;
    xml.end("w:hdr")?;
    Ok(xml.finish())
}

/// `word/document.xml`
pub(crate) fn document(doc: &StyledDocument) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.start("w:document", &[("xmlns:w", NS_MAIN), ("xmlns:r", NS_REL)])?;
    xml.start("w:body", &[])?;

    for element in &doc.body {
        match element {
            Element::Paragraph(p) => write_paragraph(&mut xml, p)?,
            Element::PageBreak => {
                xml.start("w:p", &[])?;
                xml.start("w:r", &[])?;
                xml.empty("w:br", &[("w:type", "page")])?;
                xml.end("w:r")?;
                xml.end("w:p")?;
            }
        }
    }

    write_section(&mut xml, &doc.style, doc.header.is_some())?;

    xml.end("w:body")?;
    xml.end("w:document")?;
    Ok(xml.finish())
}

fn write_section(xml: &mut XmlWriter, style: &StyleConfig, with_header: bool) -> Result<()> {
    let margins = style.margins;
    let top = margins.top.twips().to_string();
    let right = margins.right.twips().to_string();
    let bottom = margins.bottom.twips().to_string();
    let left = margins.left.twips().to_string();
    let distance = HEADER_DISTANCE.to_string();

    xml.start("w:sectPr", &[])?;
    if with_header {
        xml.empty(
            "w:headerReference",
            &[("w:type", "default"), ("r:id", HEADER_REL_ID)],
        )?;
    }
    xml.empty(
        "w:pgSz",
        &[
            ("w:w", &PAGE_WIDTH.to_string()),
            ("w:h", &PAGE_HEIGHT.to_string()),
        ],
    )?;
    xml.empty(
        "w:pgMar",
        &[
            ("w:top", &top),
            ("w:right", &right),
            ("w:bottom", &bottom),
            ("w:left", &left),
            ("w:header", &distance),
            ("w:footer", &distance),
            ("w:gutter", "0"),
        ],
    )?;
    xml.end("w:sectPr")
}

fn write_paragraph(xml: &mut XmlWriter, paragraph: &Paragraph) -> Result<()> {
    xml.start("w:p", &[])?;

    let format = &paragraph.format;
    let has_indent = format.left_indent.is_some() || format.first_line_indent.is_some();
    if format.alignment != Alignment::Left || has_indent {
        xml.start("w:pPr", &[])?;
        if has_indent {
            let mut attrs: Vec<(&str, String)> = Vec::new();
            if let Some(left) = format.left_indent {
                attrs.push(("w:left", left.twips().to_string()));
            }
            if let Some(first) = format.first_line_indent {
                if first.is_negative() {
                    attrs.push(("w:hanging", first.abs().twips().to_string()));
                } else {
                    attrs.push(("w:firstLine", first.twips().to_string()));
                }
            }
            let attrs: Vec<(&str, &str)> = attrs.iter().map(|(k, v)| (*k, v.as_str())).collect();
            xml.empty("w:ind", &attrs)?;
        }
        match format.alignment {
            Alignment::Left => {}
            Alignment::Center => xml.empty("w:jc", &[("w:val", "center")])?,
            Alignment::Right => xml.empty("w:jc", &[("w:val", "right")])?,
        }
        xml.end("w:pPr")?;
    }

    for content in &paragraph.content {
        match content {
            InlineContent::Text(run) => write_run(xml, run)?,
            InlineContent::Field(field) => write_field(xml, *field)?,
        }
    }

    xml.end("w:p")
}

fn write_run(xml: &mut XmlWriter, run: &TextRun) -> Result<()> {
    xml.start("w:r", &[])?;
    if run.style.has_styling() {
        xml.start("w:rPr", &[])?;
        if run.style.bold {
            xml.empty("w:b", &[])?;
        }
        if run.style.italic {
            xml.empty("w:i", &[])?;
        }
        xml.end("w:rPr")?;
    }
    xml.text_element("w:t", &[("xml:space", "preserve")], &run.text)?;
    xml.end("w:r")
}

/// Complex field: begin, instruction, separator, cached value, end.
fn write_field(xml: &mut XmlWriter, field: FieldKind) -> Result<()> {
    let (instruction, cached) = match field {
        FieldKind::PageNumber => (" PAGE ", "1"),
    };

    xml.start("w:r", &[])?;
    xml.empty("w:fldChar", &[("w:fldCharType", "begin")])?;
    xml.end("w:r")?;

    xml.start("w:r", &[])?;
    xml.text_element("w:instrText", &[("xml:space", "preserve")], instruction)?;
    xml.end("w:r")?;

    xml.start("w:r", &[])?;
    xml.empty("w:fldChar", &[("w:fldCharType", "separate")])?;
    xml.end("w:r")?;

    xml.start("w:r", &[])?;
    xml.text_element("w:t", &[], cached)?;
    xml.end("w:r")?;

    xml.start("w:r", &[])?;
    xml.empty("w:fldChar", &[("w:fldCharType", "end")])?;
    xml.end("w:r")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Length;

    fn as_string(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_paragraph_indents() {
        let mut doc = StyledDocument::new(StyleConfig::default());
        doc.add_paragraph(
            Paragraph::with_text("Hanging")
                .left_indent(Length::inches(0.5))
                .first_line_indent(Length::inches(-0.5)),
        );
        doc.add_paragraph(Paragraph::with_text("First").first_line_indent(Length::inches(0.5)));

        let xml = as_string(document(&doc).unwrap());
        assert!(xml.contains(r#"<w:ind w:left="720" w:hanging="720"/>"#));
        assert!(xml.contains(r#"<w:ind w:firstLine="720"/>"#));
    }

    #[test]
    fn test_run_styles_and_escaping() {
        let mut doc = StyledDocument::new(StyleConfig::default());
        doc.add_paragraph(
            Paragraph::with_run(TextRun::bold_italic("a < b & c")).aligned(Alignment::Center),
        );

        let xml = as_string(document(&doc).unwrap());
        assert!(xml.contains("<w:rPr><w:b/><w:i/></w:rPr>"));
        assert!(xml.contains("a &lt; b &amp; c"));
        assert!(xml.contains(r#"<w:jc w:val="center"/>"#));
    }

    #[test]
    fn test_section_margins() {
        let doc = StyledDocument::new(StyleConfig::default());
        let xml = as_string(document(&doc).unwrap());
        assert!(xml.contains(r#"w:top="1440" w:right="1440" w:bottom="1440" w:left="1440""#));
        assert!(!xml.contains("w:headerReference"));
    }

    #[test]
    fn test_styles_defaults() {
        let xml = as_string(styles(&StyleConfig::default()).unwrap());
        assert!(xml.contains(r#"w:ascii="Times New Roman""#));
        assert!(xml.contains(r#"<w:sz w:val="24"/>"#));
        assert!(xml.contains(
            r#"<w:spacing w:before="0" w:after="0" w:line="480" w:lineRule="auto"/>"#
        ));
    }

    #[test]
    fn test_header_page_field() {
        let mut paragraph = Paragraph::new().aligned(Alignment::Right);
        paragraph.add_field(FieldKind::PageNumber);

        let xml = as_string(header(&paragraph).unwrap());
        assert!(xml.contains(r#"<w:jc w:val="right"/>"#));
        assert!(xml.contains(r#"<w:fldChar w:fldCharType="begin"/>"#));
        assert!(xml.contains(" PAGE </w:instrText>"));
        assert!(xml.contains(r#"<w:fldChar w:fldCharType="end"/>"#));
    }

    #[test]
    fn test_core_properties() {
        let properties = DocumentProperties {
            title: Some("Title & More".to_string()),
            author: Some("Jane Doe".to_string()),
        };
        let created = DateTime::parse_from_rfc3339("2025-10-16T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let xml = as_string(core_properties(&properties, created).unwrap());
        assert!(xml.contains("<dc:title>Title &amp; More</dc:title>"));
        assert!(xml.contains("<dc:creator>Jane Doe</dc:creator>"));
        assert!(xml.contains("2025-10-16T12:00:00Z"));
    }

    #[test]
    fn test_content_types_header_override() {
        let with = as_string(content_types(true).unwrap());
        let without = as_string(content_types(false).unwrap());
        assert!(with.contains("/word/header1.xml"));
        assert!(!without.contains("/word/header1.xml"));
    }
}
