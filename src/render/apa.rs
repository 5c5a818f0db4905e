//! APA 7th edition layout.
//!
//! Builds a `StyledDocument` in three parts separated by hard page breaks:
//! the title page, the body and the reference list.

use crate::model::{
    Alignment, BodyItem, ContentBlock, FieldKind, Paragraph, ReferenceEntry, StyledDocument,
    TextRun, TextStyle, TitleMetadata,
};
use crate::parser::bind_run_in_headings;

use super::{DocumentStats, ReferenceOrder, RenderOptions, RenderResult};

/// Blank lines above the title.
const TITLE_TOP_PADDING: usize = 3;

/// Heading of the reference list.
const REFERENCES_HEADING: &str = "References";

/// Render with the default APA options.
pub fn render(
    metadata: &TitleMetadata,
    blocks: &[ContentBlock],
    references: &[ReferenceEntry],
) -> StyledDocument {
    ApaRenderer::default().render(metadata, blocks, references)
}

/// Render and count what went into the document.
pub fn render_with_stats(
    metadata: &TitleMetadata,
    blocks: &[ContentBlock],
    references: &[ReferenceEntry],
    options: &RenderOptions,
) -> RenderResult {
    let renderer = ApaRenderer::new(options.clone());
    let document = renderer.render(metadata, blocks, references);
    RenderResult::new(document, DocumentStats::collect(blocks, references))
}

/// APA document renderer.
#[derive(Debug, Clone, Default)]
pub struct ApaRenderer {
    options: RenderOptions,
}

impl ApaRenderer {
    /// Create a new renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Build the complete document.
    pub fn render(
        &self,
        metadata: &TitleMetadata,
        blocks: &[ContentBlock],
        references: &[ReferenceEntry],
    ) -> StyledDocument {
        let mut doc = StyledDocument::new(self.options.style.clone());
        doc.properties.title = Some(metadata.title.clone());
        doc.properties.author = metadata.author.clone();

        if self.options.style.page_numbers {
            doc.header = Some(self.page_header());
        }

        self.render_title_page(&mut doc, metadata);
        doc.add_page_break();
        self.render_body(&mut doc, blocks);
        doc.add_page_break();
        self.render_references(&mut doc, references);

        log::debug!(
            "Rendered {} blocks and {} references into {} pages",
            blocks.len(),
            references.len(),
            doc.page_count()
        );
        doc
    }

    fn page_header(&self) -> Paragraph {
        let mut header = Paragraph::new().aligned(Alignment::Right);
        header.add_field(FieldKind::PageNumber);
        header
    }

    fn render_title_page(&self, doc: &mut StyledDocument, metadata: &TitleMetadata) {
        for _ in 0..TITLE_TOP_PADDING {
            doc.add_blank_line();
        }

        doc.add_paragraph(
            Paragraph::with_run(TextRun::bold(metadata.title.as_str())).aligned(Alignment::Center),
        );
        doc.add_blank_line();

        for line in metadata.info_lines() {
            doc.add_paragraph(Paragraph::with_text(line).aligned(Alignment::Center));
        }
    }

    fn render_body(&self, doc: &mut StyledDocument, blocks: &[ContentBlock]) {
        for item in bind_run_in_headings(blocks) {
            let paragraph = match item {
                BodyItem::RunIn {
                    level,
                    heading,
                    body,
                } => self.run_in_heading(level, heading, body),
                BodyItem::Block(block) => self.block(block),
            };
            doc.add_paragraph(paragraph);
        }
    }

    fn block(&self, block: &ContentBlock) -> Paragraph {
        match block {
            ContentBlock::Heading { level, text } => self.heading(*level, text),
            ContentBlock::Paragraph { text } => {
                Paragraph::with_text(text.as_str()).first_line_indent(self.options.style.indent)
            }
            ContentBlock::MathFormula { expression } => {
                Paragraph::with_run(TextRun::italic(expression.as_str())).aligned(Alignment::Center)
            }
        }
    }

    /// Standalone heading. Levels 4 and 5 land here only when no paragraph
    /// follows them, and keep their indent and closing period.
    fn heading(&self, level: u8, text: &str) -> Paragraph {
        let style = heading_style(level);
        match level {
            1 => Paragraph::with_run(TextRun::styled(text, style)).aligned(Alignment::Center),
            2 | 3 => Paragraph::with_run(TextRun::styled(text, style)),
            _ => Paragraph::with_run(TextRun::styled(with_period(text), style))
                .left_indent(self.options.style.indent),
        }
    }

    fn run_in_heading(&self, level: u8, heading: &str, body: &str) -> Paragraph {
        let mut paragraph = Paragraph::new().left_indent(self.options.style.indent);
        paragraph.add_run(TextRun::styled(
            format!("{} ", with_period(heading)),
            heading_style(level),
        ));
        paragraph.add_run(TextRun::new(body));
        paragraph
    }

    fn render_references(&self, doc: &mut StyledDocument, references: &[ReferenceEntry]) {
        if references.is_empty() {
            return;
        }

        let mut entries: Vec<&ReferenceEntry> = references.iter().collect();
        if self.options.reference_order == ReferenceOrder::Alphabetical {
            entries.sort_by_cached_key(|entry| entry.as_str().to_lowercase());
        }

        doc.add_paragraph(
            Paragraph::with_run(TextRun::bold(REFERENCES_HEADING)).aligned(Alignment::Center),
        );

        let indent = self.options.style.indent;
        for entry in entries {
            doc.add_paragraph(
                Paragraph::with_text(entry.as_str())
                    .left_indent(indent)
                    .first_line_indent(-indent),
            );
        }
    }
}

/// Bold for levels 1, 2 and 4; bold italic for 3 and 5.
fn heading_style(level: u8) -> TextStyle {
    match level {
        3 | 5 => TextStyle::BOLD_ITALIC,
        _ => TextStyle::BOLD,
    }
}

/// Heading text ending in a period.
fn with_period(text: &str) -> String {
    if text.ends_with('.') {
        text.to_string()
    } else {
        format!("{}.", text)
    }
}
