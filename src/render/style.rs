//! Document-wide style configuration.

use crate::model::Length;
use serde::{Deserialize, Serialize};

/// Defaults every paragraph inherits unless it overrides them.
///
/// The renderer receives this explicitly through `RenderOptions` and copies
/// it into the `StyledDocument`, where the DOCX writer turns it into the
/// document defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Body typeface
    pub font_family: String,

    /// Font size in points
    pub font_size: f32,

    /// Line spacing of every paragraph
    pub line_spacing: LineSpacing,

    /// Space before each paragraph
    pub space_before: Length,

    /// Space after each paragraph
    pub space_after: Length,

    /// Page margins
    pub margins: Margins,

    /// Indent unit used for first lines, run-in headings and hanging indents
    pub indent: Length,

    /// Put a page number field at the top right of every page
    pub page_numbers: bool,
}

impl StyleConfig {
    /// APA 7th edition student paper defaults.
    pub fn apa() -> Self {
        Self {
            font_family: "Times New Roman".to_string(),
            font_size: 12.0,
            line_spacing: LineSpacing::Double,
            space_before: Length::ZERO,
            space_after: Length::ZERO,
            margins: Margins::uniform(Length::inches(1.0)),
            indent: Length::inches(0.5),
            page_numbers: true,
        }
    }

    /// Set the typeface.
    pub fn with_font(mut self, family: impl Into<String>, size: f32) -> Self {
        self.font_family = family.into();
        self.font_size = size;
        self
    }

    /// Set the line spacing.
    pub fn with_line_spacing(mut self, spacing: LineSpacing) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Set all four margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Enable or disable the page number header.
    pub fn with_page_numbers(mut self, enabled: bool) -> Self {
        self.page_numbers = enabled;
        self
    }

    /// Font size in half-points, the unit WordprocessingML uses.
    pub fn font_half_points(&self) -> u32 {
        (self.font_size * 2.0).round() as u32
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::apa()
    }
}

/// Line spacing rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSpacing {
    /// Single spacing
    Single,
    /// One and a half lines
    OneAndHalf,
    /// Double spacing (APA default)
    #[default]
    Double,
}

impl LineSpacing {
    /// Line height in 240ths of a line.
    pub fn line_value(self) -> u32 {
        match self {
            LineSpacing::Single => 240,
            LineSpacing::OneAndHalf => 360,
            LineSpacing::Double => 480,
        }
    }
}

/// Page margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    /// Top margin
    pub top: Length,
    /// Right margin
    pub right: Length,
    /// Bottom margin
    pub bottom: Length,
    /// Left margin
    pub left: Length,
}

impl Margins {
    /// Same margin on all four sides.
    pub fn uniform(length: Length) -> Self {
        Self {
            top: length,
            right: length,
            bottom: length,
            left: length,
        }
    }
}
