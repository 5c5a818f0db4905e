//! Parsing options and configuration.

/// Options for parsing markdown-structured text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Normalize the input to Unicode NFC before parsing (off by default,
    /// so block text matches the input byte for byte)
    pub normalize_unicode: bool,

    /// Try ``double backtick`` formula spans before single backtick spans
    pub double_backtick_math: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable Unicode normalization.
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Enable or disable double backtick formula spans.
    pub fn with_double_backtick_math(mut self, enabled: bool) -> Self {
        self.double_backtick_math = enabled;
        self
    }

    /// Parse the input exactly as written: no normalization, single backtick
    /// spans only.
    pub fn literal() -> Self {
        Self {
            normalize_unicode: false,
            double_backtick_math: false,
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            normalize_unicode: false,
            double_backtick_math: true,
        }
    }
}
