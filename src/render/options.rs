//! Rendering options and configuration.

use super::StyleConfig;

/// Options for rendering an APA document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    /// Document-wide style
    pub style: StyleConfig,

    /// Order of the reference list
    pub reference_order: ReferenceOrder,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document style.
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Set the reference order.
    pub fn with_reference_order(mut self, order: ReferenceOrder) -> Self {
        self.reference_order = order;
        self
    }

    /// Sort references alphabetically.
    pub fn sorted_references(self) -> Self {
        self.with_reference_order(ReferenceOrder::Alphabetical)
    }
}

/// How the reference list is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceOrder {
    /// Keep the order the entries were written in
    #[default]
    AsWritten,
    /// Case-insensitive sort on the entry text
    Alphabetical,
}
