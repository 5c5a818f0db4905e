//! # apadoc
//!
//! Turn markdown-structured paper text into an APA 7th edition document.
//!
//! The text is parsed into headings, paragraphs and formulas plus a
//! reference list, then laid out as a title page, a body and a references
//! page with the APA defaults (Times New Roman 12 pt, double spacing,
//! 1 inch margins, page numbers top right).
//!
//! ## Quick Start
//!
//! ```no_run
//! use apadoc::{create_apa_document, TitleMetadata};
//!
//! fn main() -> apadoc::Result<()> {
//!     let metadata = TitleMetadata::new("The Impact of Technology in Modern Education")
//!         .with_author("Jane Doe")
//!         .with_institution("University of Technology");
//!
//!     let text = "# Introduction\nArtificial intelligence is transforming education.\n\
//!                 \n---\nSmith, A. (2015). Early educational computing.";
//!
//!     create_apa_document(&metadata, text, "paper.docx")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Input conventions
//!
//! - `#` to `#####` start headings level 1 to 5
//! - a line with a backtick span becomes a centered, italic formula
//! - blank lines separate paragraphs
//! - `---` or `References` on its own line starts the reference list

pub mod docx;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use docx::DocxWriter;
pub use error::{Error, Result};
pub use model::{
    Alignment, BodyItem, ContentBlock, DocumentProperties, Element, FieldKind, InlineContent,
    Length, Paragraph, ParagraphFormat, ParsedText, ReferenceEntry, StyledDocument, TextRun,
    TextStyle, TitleMetadata,
};
pub use parser::{bind_run_in_headings, MarkdownParser, ParseOptions};
pub use render::{
    ApaRenderer, DocumentStats, JsonFormat, LineSpacing, Margins, ReferenceOrder, RenderOptions,
    RenderResult, StyleConfig,
};

use std::path::Path;

/// Parse markdown-structured text into blocks and references.
///
/// # Example
///
/// ```
/// use apadoc::{parse, ContentBlock};
///
/// let parsed = parse("####### X");
/// assert_eq!(parsed.blocks, vec![ContentBlock::heading(5, "X")]);
/// ```
pub fn parse(raw_text: &str) -> ParsedText {
    MarkdownParser::default().parse(raw_text)
}

/// Parse with custom options.
pub fn parse_with_options(raw_text: &str, options: ParseOptions) -> ParsedText {
    MarkdownParser::new(options).parse(raw_text)
}

/// Lay out parsed content as an APA document with the default style.
pub fn render(
    metadata: &TitleMetadata,
    blocks: &[ContentBlock],
    references: &[ReferenceEntry],
) -> StyledDocument {
    render::render(metadata, blocks, references)
}

/// Parse and render in one step.
pub fn format_text(metadata: &TitleMetadata, raw_text: &str) -> StyledDocument {
    let parsed = parse(raw_text);
    render(metadata, &parsed.blocks, &parsed.references)
}

/// Parse, render and save a `.docx` file.
///
/// # Example
///
/// ```no_run
/// use apadoc::{create_apa_document, TitleMetadata};
///
/// let metadata = TitleMetadata::new("On Testing").with_today();
/// create_apa_document(&metadata, "# Method\nWe tested.", "out/paper.docx").unwrap();
/// ```
pub fn create_apa_document<P: AsRef<Path>>(
    metadata: &TitleMetadata,
    raw_text: &str,
    output_path: P,
) -> Result<()> {
    Apadoc::new().format(metadata, raw_text)?.save(output_path)
}

/// Builder for formatting documents with custom options.
///
/// # Example
///
/// ```no_run
/// use apadoc::{Apadoc, LineSpacing, StyleConfig, TitleMetadata};
///
/// let metadata = TitleMetadata::new("Draft");
/// let result = Apadoc::new()
///     .with_style(StyleConfig::apa().with_line_spacing(LineSpacing::Single))
///     .sorted_references()
///     .format(&metadata, "Body text.\n\nReferences\nB, B. (2001).\nA, A. (2000).")?;
///
/// result.save("draft.docx")?;
/// # Ok::<(), apadoc::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Apadoc {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Apadoc {
    /// Create a new builder with APA defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Set the document style.
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.render_options = self.render_options.with_style(style);
        self
    }

    /// Set the reference order.
    pub fn with_reference_order(mut self, order: ReferenceOrder) -> Self {
        self.render_options = self.render_options.with_reference_order(order);
        self
    }

    /// Sort references alphabetically.
    pub fn sorted_references(self) -> Self {
        self.with_reference_order(ReferenceOrder::Alphabetical)
    }

    /// Parse and render a document.
    ///
    /// Fails only when the metadata has no title.
    pub fn format(&self, metadata: &TitleMetadata, raw_text: &str) -> Result<ApadocResult> {
        metadata.validate()?;

        let parsed = parse_with_options(raw_text, self.parse_options.clone());
        let rendered = render::render_with_stats(
            metadata,
            &parsed.blocks,
            &parsed.references,
            &self.render_options,
        );

        Ok(ApadocResult {
            parsed,
            document: rendered.document,
            stats: rendered.stats,
        })
    }
}

/// A parsed and rendered document.
#[derive(Debug, Clone)]
pub struct ApadocResult {
    /// Parser output
    pub parsed: ParsedText,

    /// The styled document
    pub document: StyledDocument,

    /// Content statistics
    pub stats: DocumentStats,
}

impl ApadocResult {
    /// Serialize to DOCX bytes.
    pub fn to_docx(&self) -> Result<Vec<u8>> {
        DocxWriter::new().write(&self.document)
    }

    /// Save as a `.docx` file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        DocxWriter::new().save(&self.document, path)
    }

    /// Convert the styled document to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Plain text preview.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &StyledDocument {
        &self.document
    }
}
