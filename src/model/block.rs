//! Parsed content blocks.

use crate::render::DocumentStats;
use serde::{Deserialize, Serialize};

/// Deepest APA heading level.
pub const MAX_HEADING_LEVEL: u8 = 5;

/// One semantic unit of parsed content, in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// A heading (level 1-5)
    Heading {
        /// Heading level, always within 1..=5
        level: u8,
        /// Heading text without the `#` markers
        text: String,
    },

    /// A body paragraph
    Paragraph {
        /// Paragraph text, source lines joined with single spaces
        text: String,
    },

    /// A displayed formula
    MathFormula {
        /// Formula text between the backticks
        expression: String,
    },
}

impl ContentBlock {
    /// Create a heading, clamping the level into 1..=5.
    pub fn heading(level: usize, text: impl Into<String>) -> Self {
        ContentBlock::Heading {
            level: level.clamp(1, MAX_HEADING_LEVEL as usize) as u8,
            text: text.into(),
        }
    }

    /// Create a paragraph.
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph { text: text.into() }
    }

    /// Create a math formula.
    pub fn math(expression: impl Into<String>) -> Self {
        ContentBlock::MathFormula {
            expression: expression.into(),
        }
    }

    /// Heading level, or None for non-headings.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            ContentBlock::Heading { level, .. } => Some(*level),
            _ => None,
        }
    }

    /// The text carried by the block.
    pub fn text(&self) -> &str {
        match self {
            ContentBlock::Heading { text, .. } => text,
            ContentBlock::Paragraph { text } => text,
            ContentBlock::MathFormula { expression } => expression,
        }
    }
}

/// A single bibliography entry: trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceEntry(String);

impl ReferenceEntry {
    /// Create an entry from raw text. Returns None if the text is blank.
    pub fn new(text: impl AsRef<str>) -> Option<Self> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Entry text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ReferenceEntry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReferenceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Output of the markdown parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedText {
    /// Body blocks in reading order
    pub blocks: Vec<ContentBlock>,

    /// Reference entries in source order
    pub references: Vec<ReferenceEntry>,
}

impl ParsedText {
    /// Check if nothing was parsed.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.references.is_empty()
    }

    /// Reference entries as plain strings.
    pub fn reference_strings(&self) -> Vec<&str> {
        self.references.iter().map(ReferenceEntry::as_str).collect()
    }

    /// Count what the parsed text is made of.
    pub fn stats(&self) -> DocumentStats {
        DocumentStats::collect(&self.blocks, &self.references)
    }
}

/// A body block after run-in headings have been bound to their paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyItem<'a> {
    /// A block rendered on its own
    Block(&'a ContentBlock),

    /// A level 4 or 5 heading merged with the paragraph that follows it
    RunIn {
        /// Heading level (4 or 5)
        level: u8,
        /// Heading text
        heading: &'a str,
        /// Text of the consumed paragraph
        body: &'a str,
    },
}
