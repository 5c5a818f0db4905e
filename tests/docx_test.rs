//! Integration tests for DOCX output.

use std::fs::File;
use std::io::{Cursor, Read};

use apadoc::{create_apa_document, format_text, Apadoc, DocxWriter, Error, TitleMetadata};
use chrono::{TimeZone, Utc};
use tempfile::TempDir;
use zip::ZipArchive;

const SAMPLE: &str = "# Introduction\n\
                      Artificial intelligence is transforming education.\n\
                      \n\
                      #### Notable Study.\n\
                      The text follows.\n\
                      `E = mc^2`\n\
                      ---\n\
                      Smith, A. (2015). Early educational computing.";

fn read_part<R: Read + std::io::Seek>(archive: &mut ZipArchive<R>, name: &str) -> String {
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

fn metadata() -> TitleMetadata {
    TitleMetadata::new("The Impact of Technology")
        .with_author("Jane Doe")
        .with_date("October 16, 2025")
}

#[test]
fn test_create_apa_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("paper.docx");

    create_apa_document(&metadata(), SAMPLE, &path).unwrap();

    let mut archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
    let document = read_part(&mut archive, "word/document.xml");

    assert!(document.contains("The Impact of Technology"));
    assert!(document.contains("Artificial intelligence is transforming education."));
    assert!(document.contains("Notable Study. "));
    assert!(document.contains("E = mc^2"));
    assert!(document.contains("Smith, A. (2015). Early educational computing."));
    assert!(document.contains(r#"<w:br w:type="page"/>"#));
    assert!(document.contains(r#"w:hanging="720""#));
    assert!(document.contains(r#"<w:headerReference w:type="default" r:id="rId2"/>"#));

    let header = read_part(&mut archive, "word/header1.xml");
    assert!(header.contains(" PAGE "));
    assert!(header.contains(r#"<w:jc w:val="right"/>"#));
}

#[test]
fn test_page_breaks_match_pages() {
    let doc = format_text(&metadata(), SAMPLE);
    let bytes = DocxWriter::new().write(&doc).unwrap();

    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let document = read_part(&mut archive, "word/document.xml");

    let breaks = document.matches(r#"<w:br w:type="page"/>"#).count();
    assert_eq!(breaks + 1, doc.page_count());
}

#[test]
fn test_core_properties_timestamp() {
    let doc = format_text(&metadata(), "Body.");
    let created = Utc.with_ymd_and_hms(2025, 10, 16, 9, 30, 0).unwrap();
    let bytes = DocxWriter::new().with_created(created).write(&doc).unwrap();

    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let core = read_part(&mut archive, "docProps/core.xml");
    assert!(core.contains("<dc:title>The Impact of Technology</dc:title>"));
    assert!(core.contains("<dc:creator>Jane Doe</dc:creator>"));
    assert!(core.contains("2025-10-16T09:30:00Z"));
}

#[test]
fn test_save_overwrites() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("paper.docx");
    std::fs::write(&path, b"stale").unwrap();

    let result = Apadoc::new().format(&metadata(), SAMPLE).unwrap();
    result.save(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_unwritable_path_is_environment_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("paper.docx");

    let err = create_apa_document(&metadata(), SAMPLE, &path).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(err.is_environment());
}

#[test]
fn test_missing_title_is_not_environment_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("paper.docx");

    let err = create_apa_document(&TitleMetadata::new(""), SAMPLE, &path).unwrap_err();
    assert!(matches!(err, Error::Metadata(_)));
    assert!(!err.is_environment());
    assert!(!path.exists());
}
