//! DOCX packaging for styled documents.
//!
//! A `.docx` file is a ZIP container of XML parts. This module writes the
//! minimal set Word and LibreOffice need to open the document with the APA
//! defaults intact:
//!
//! - `[Content_Types].xml`
//! - `_rels/.rels`
//! - `docProps/core.xml`
//! - `word/document.xml`
//! - `word/styles.xml`
//! - `word/header1.xml` (only when page numbers are enabled)
//! - `word/_rels/document.xml.rels`
//!
//! # Example
//!
//! ```no_run
//! use apadoc::docx::DocxWriter;
//! use apadoc::{format_text, TitleMetadata};
//!
//! let metadata = TitleMetadata::new("A Study of Things");
//! let doc = format_text(&metadata, "# Introduction\nSome text.");
//! DocxWriter::new().save(&doc, "paper.docx")?;
//! # Ok::<(), apadoc::Error>(())
//! ```

mod parts;

use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;
use crate::model::StyledDocument;

/// Serializes a `StyledDocument` into a DOCX package.
#[derive(Debug, Clone, Default)]
pub struct DocxWriter {
    created: Option<DateTime<Utc>>,
}

impl DocxWriter {
    /// Create a new writer. The creation timestamp defaults to now.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed creation timestamp.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Write the document into an in-memory DOCX file.
    pub fn write(&self, doc: &StyledDocument) -> Result<Vec<u8>> {
        let cursor = self.write_to(doc, Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    /// Write the document to a file, replacing it if it exists.
    pub fn save<P: AsRef<Path>>(&self, doc: &StyledDocument, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = self.write_to(doc, BufWriter::new(file))?;
        writer.flush()?;
        log::info!("Saved {}", path.display());
        Ok(())
    }

    /// Write the document into any seekable sink and hand the sink back.
    pub fn write_to<W: Write + Seek>(&self, doc: &StyledDocument, sink: W) -> Result<W> {
        let with_header = doc.header.is_some();
        let created = self.created.unwrap_or_else(Utc::now);

        let mut zip = ZipWriter::new(sink);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let mut entries = vec![
            ("[Content_Types].xml", parts::content_types(with_header)?),
            ("_rels/.rels", parts::package_relationships()?),
            (
                "docProps/core.xml",
                parts::core_properties(&doc.properties, created)?,
            ),
            ("word/document.xml", parts::document(doc)?),
            ("word/styles.xml", parts::styles(&doc.style)?),
            (
                "word/_rels/document.xml.rels",
                parts::document_relationships(with_header)?,
            ),
        ];
        if let Some(ref header) = doc.header {
            entries.push(("word/header1.xml", parts::header(header)?));
        }

        for (name, bytes) in &entries {
            zip.start_file(*name, options)?;
            zip.write_all(bytes)?;
        }

        log::debug!(
            "Packaged {} parts for {} body elements",
            entries.len(),
            doc.body.len()
        );
        Ok(zip.finish()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, TextRun};
    use crate::render::StyleConfig;
    use std::io::Read;
    use zip::ZipArchive;

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_write_package() {
        let mut doc = StyledDocument::new(StyleConfig::default());
        doc.add_paragraph(Paragraph::with_run(TextRun::bold("Hello")));

        let bytes = DocxWriter::new().write(&doc).unwrap();
        assert_eq!(&bytes[..2], b"PK");

        let document = read_part(&bytes, "word/document.xml");
        assert!(document.contains("Hello"));

        let archive = ZipArchive::new(Cursor::new(&bytes[..])).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        assert!(names.contains(&"[Content_Types].xml"));
        assert!(names.contains(&"word/styles.xml"));
        assert!(!names.contains(&"word/header1.xml"));
    }
}
