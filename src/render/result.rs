//! Rendering result with statistics.

use crate::model::{BodyItem, ContentBlock, ReferenceEntry, StyledDocument};
use crate::parser::bind_run_in_headings;
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered document
    pub document: StyledDocument,

    /// Content statistics
    pub stats: DocumentStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(document: StyledDocument, stats: DocumentStats) -> Self {
        Self { document, stats }
    }
}

/// Counts of what a document is made of.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Headings rendered on their own line
    pub heading_count: u32,

    /// Level 4/5 headings merged into their paragraph
    pub run_in_heading_count: u32,

    /// Body paragraphs, including those carrying a run-in heading
    pub paragraph_count: u32,

    /// Displayed formulas
    pub formula_count: u32,

    /// Reference entries
    pub reference_count: u32,

    /// Approximate body word count (whitespace-separated tokens)
    pub word_count: u32,
}

impl DocumentStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the blocks and references of one document.
    pub fn collect(blocks: &[ContentBlock], references: &[ReferenceEntry]) -> Self {
        let mut stats = Self::new();

        for item in bind_run_in_headings(blocks) {
            match item {
                BodyItem::RunIn { heading, body, .. } => {
                    stats.run_in_heading_count += 1;
                    stats.paragraph_count += 1;
                    stats.count_text(heading);
                    stats.count_text(body);
                }
                BodyItem::Block(ContentBlock::Heading { text, .. }) => {
                    stats.heading_count += 1;
                    stats.count_text(text);
                }
                BodyItem::Block(ContentBlock::Paragraph { text }) => {
                    stats.paragraph_count += 1;
                    stats.count_text(text);
                }
                BodyItem::Block(ContentBlock::MathFormula { .. }) => {
                    stats.formula_count += 1;
                }
            }
        }

        stats.reference_count = references.len() as u32;
        stats
    }

    /// Add the word count of `text`.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
    }
}
