//! Styled document produced by the renderer.

use crate::render::StyleConfig;
use serde::{Deserialize, Serialize};

/// A fully styled document, ready to be serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyledDocument {
    /// Document-wide defaults inherited by every paragraph
    pub style: StyleConfig,

    /// Descriptive properties stored with the file
    pub properties: DocumentProperties,

    /// Page header repeated on every page
    pub header: Option<Paragraph>,

    /// Body content in order
    pub body: Vec<Element>,
}

impl StyledDocument {
    /// Create an empty document with the given defaults.
    pub fn new(style: StyleConfig) -> Self {
        Self {
            style,
            properties: DocumentProperties::default(),
            header: None,
            body: Vec::new(),
        }
    }

    /// Append a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.body.push(Element::Paragraph(paragraph));
    }

    /// Append an empty paragraph (one blank line).
    pub fn add_blank_line(&mut self) {
        self.add_paragraph(Paragraph::new());
    }

    /// Append a hard page break.
    pub fn add_page_break(&mut self) {
        self.body.push(Element::PageBreak);
    }

    /// Iterate over body paragraphs, skipping page breaks.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.body.iter().filter_map(|element| match element {
            Element::Paragraph(p) => Some(p),
            Element::PageBreak => None,
        })
    }

    /// Number of pages delimited by hard page breaks.
    pub fn page_count(&self) -> usize {
        1 + self
            .body
            .iter()
            .filter(|element| matches!(element, Element::PageBreak))
            .count()
    }

    /// Check if the body has no content.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Get plain text content of the body, one paragraph per line.
    pub fn plain_text(&self) -> String {
        self.paragraphs()
            .map(Paragraph::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// File-level properties (shown by word processors as document info).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentProperties {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,
}

/// A top-level body element.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A paragraph
    Paragraph(Paragraph),

    /// A hard page break
    PageBreak,
}

/// A paragraph of styled inline content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Runs and fields in the paragraph
    pub content: Vec<InlineContent>,

    /// Paragraph formatting
    pub format: ParagraphFormat,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_run(TextRun::new(text));
        p
    }

    /// Create a paragraph holding a single run.
    pub fn with_run(run: TextRun) -> Self {
        let mut p = Self::new();
        p.add_run(run);
        p
    }

    /// Set the alignment.
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.format.alignment = alignment;
        self
    }

    /// Set the left indent.
    pub fn left_indent(mut self, indent: Length) -> Self {
        self.format.left_indent = Some(indent);
        self
    }

    /// Set the first-line indent. Negative values hang.
    pub fn first_line_indent(mut self, indent: Length) -> Self {
        self.format.first_line_indent = Some(indent);
        self
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.content.push(InlineContent::Text(run));
    }

    /// Add a field whose value is computed by the word processor.
    pub fn add_field(&mut self, field: FieldKind) {
        self.content.push(InlineContent::Field(field));
    }

    /// Text runs in the paragraph, skipping fields.
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.content.iter().filter_map(|c| match c {
            InlineContent::Text(run) => Some(run),
            InlineContent::Field(_) => None,
        })
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|c| match c {
                InlineContent::Text(run) => run.text.as_str(),
                InlineContent::Field(FieldKind::PageNumber) => "#",
            })
            .collect()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() || self.plain_text().trim().is_empty()
    }
}

/// Inline content within a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineContent {
    /// A text run with styling
    Text(TextRun),

    /// A computed field
    Field(FieldKind),
}

/// Fields evaluated by the word processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Current page number
    PageNumber,
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Text styling
    pub style: TextStyle,
}

impl TextRun {
    /// Create a new text run with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::styled(text, TextStyle::BOLD)
    }

    /// Create an italic text run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::styled(text, TextStyle::ITALIC)
    }

    /// Create a bold italic text run.
    pub fn bold_italic(text: impl Into<String>) -> Self {
        Self::styled(text, TextStyle::BOLD_ITALIC)
    }

    /// Create a run with an explicit style.
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Character styling on top of the document defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,
}

impl TextStyle {
    /// Bold only.
    pub const BOLD: TextStyle = TextStyle {
        bold: true,
        italic: false,
    };

    /// Italic only.
    pub const ITALIC: TextStyle = TextStyle {
        bold: false,
        italic: true,
    };

    /// Bold and italic.
    pub const BOLD_ITALIC: TextStyle = TextStyle {
        bold: true,
        italic: true,
    };

    /// Check if any styling is applied.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic
    }
}

/// Paragraph formatting on top of the document defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphFormat {
    /// Text alignment
    pub alignment: Alignment,

    /// Left indent of every line
    pub left_indent: Option<Length>,

    /// Extra indent of the first line; negative for a hanging indent
    pub first_line_indent: Option<Length>,
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
}

/// A length in twentieths of a point (twips).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Length(i32);

impl Length {
    /// Twips per inch.
    pub const TWIPS_PER_INCH: i32 = 1440;

    /// Zero length.
    pub const ZERO: Length = Length(0);

    /// Length in inches.
    pub fn inches(inches: f32) -> Self {
        Self((inches * Self::TWIPS_PER_INCH as f32).round() as i32)
    }

    /// Length in points.
    pub fn points(points: f32) -> Self {
        Self((points * 20.0).round() as i32)
    }

    /// Value in twips.
    pub fn twips(self) -> i32 {
        self.0
    }

    /// Value in inches.
    pub fn as_inches(self) -> f32 {
        self.0 as f32 / Self::TWIPS_PER_INCH as f32
    }

    /// Check if the length is negative.
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Absolute value.
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

impl std::ops::Neg for Length {
    type Output = Length;

    fn neg(self) -> Length {
        Length(-self.0)
    }
}
