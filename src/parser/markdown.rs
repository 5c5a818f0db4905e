//! Line-oriented parser for markdown-structured paper text.
//!
//! The input conventions are deliberately small:
//!
//! - `#` to `#####` start a heading (deeper markers clamp to level 5)
//! - a line containing a backtick span is a standalone formula
//! - blank lines separate paragraphs, other lines are joined with spaces
//! - a line of `---` or `References` starts the reference list; every
//!   following non-blank line is one entry

use std::borrow::Cow;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::ParseOptions;
use crate::model::{ContentBlock, ParsedText, ReferenceEntry};

/// Markdown block parser.
#[derive(Debug, Clone)]
pub struct MarkdownParser {
    options: ParseOptions,
    single_span: Regex,
    double_span: Regex,
}

impl MarkdownParser {
    /// Create a parser with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            single_span: Regex::new(r"`(.+?)`").unwrap(),
            double_span: Regex::new(r"``(.+?)``").unwrap(),
        }
    }

    /// Parse raw text into body blocks and reference entries.
    ///
    /// Never fails: text without any structure becomes paragraphs.
    pub fn parse(&self, raw_text: &str) -> ParsedText {
        let text: Cow<'_, str> = if self.options.normalize_unicode {
            Cow::Owned(raw_text.nfc().collect())
        } else {
            Cow::Borrowed(raw_text)
        };

        let mut state = ParseState::default();
        for (line_no, line) in text.lines().enumerate() {
            self.parse_line(&mut state, line_no + 1, line);
        }
        let parsed = state.finish();

        log::debug!(
            "Parsed {} blocks and {} references",
            parsed.blocks.len(),
            parsed.references.len()
        );
        parsed
    }

    fn parse_line(&self, state: &mut ParseState, line_no: usize, line: &str) {
        let stripped = line.trim();

        if is_references_marker(stripped) {
            if !state.in_references {
                log::debug!("Reference section starts at line {}", line_no);
            }
            state.flush_paragraph();
            state.in_references = true;
            return;
        }

        if state.in_references {
            if let Some(entry) = ReferenceEntry::new(stripped) {
                state.references.push(entry);
            }
            return;
        }

        if stripped.starts_with('#') {
            state.flush_paragraph();
            let level = stripped.chars().take_while(|&c| c == '#').count();
            let text = stripped.trim_start_matches('#').trim();
            log::trace!("Line {}: heading level {}", line_no, level);
            state.blocks.push(ContentBlock::heading(level, text));
        } else if stripped.contains('`') {
            state.flush_paragraph();
            match self.extract_formula(stripped) {
                Some(expression) => {
                    log::trace!("Line {}: formula", line_no);
                    state.blocks.push(ContentBlock::math(expression));
                }
                None => log::debug!("Line {}: unmatched backtick, line dropped", line_no),
            }
        } else if !stripped.is_empty() {
            state.pending.push(stripped.to_string());
        } else {
            state.flush_paragraph();
        }
    }

    /// First backtick-delimited span on the line.
    fn extract_formula<'a>(&self, line: &'a str) -> Option<&'a str> {
        let double = if self.options.double_backtick_math {
            self.double_span.captures(line)
        } else {
            None
        };

        double
            .or_else(|| self.single_span.captures(line))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

fn is_references_marker(stripped: &str) -> bool {
    stripped == "---" || stripped.eq_ignore_ascii_case("references")
}

/// Accumulators for one pass over the input.
#[derive(Debug, Default)]
struct ParseState {
    blocks: Vec<ContentBlock>,
    references: Vec<ReferenceEntry>,
    pending: Vec<String>,
    in_references: bool,
}

impl ParseState {
    fn flush_paragraph(&mut self) {
        if !self.pending.is_empty() {
            let text = self.pending.join(" ");
            self.pending.clear();
            self.blocks.push(ContentBlock::paragraph(text));
        }
    }

    fn finish(mut self) -> ParsedText {
        self.flush_paragraph();
        ParsedText {
            blocks: self.blocks,
            references: self.references,
        }
    }
}
