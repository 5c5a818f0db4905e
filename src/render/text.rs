//! Plain text preview of a styled document.

use crate::model::{Alignment, Element, Length, Paragraph, StyledDocument};

/// Preview width in columns.
const PAGE_WIDTH: usize = 72;

/// Columns per inch of indentation.
const COLUMNS_PER_INCH: f32 = 8.0;

/// Render a document as plain text.
///
/// Alignment and indents are approximated with spaces; page breaks become
/// form feeds. Bold and italic are dropped.
pub fn to_text(doc: &StyledDocument) -> String {
    let mut output = String::new();

    for element in &doc.body {
        match element {
            Element::Paragraph(p) => render_paragraph(&mut output, p),
            Element::PageBreak => output.push_str("\u{000C}\n"),
        }
    }

    output.trim_end().to_string()
}

fn render_paragraph(output: &mut String, para: &Paragraph) {
    let text = para.plain_text();

    match para.format.alignment {
        Alignment::Center => {
            let pad = PAGE_WIDTH.saturating_sub(text.chars().count()) / 2;
            output.push_str(&" ".repeat(pad));
        }
        Alignment::Right => {
            let pad = PAGE_WIDTH.saturating_sub(text.chars().count());
            output.push_str(&" ".repeat(pad));
        }
        Alignment::Left => {
            let left = columns(para.format.left_indent);
            let first = columns(para.format.first_line_indent);
            // A hanging indent pulls the first line back to the margin
            output.push_str(&" ".repeat((left + first).max(0) as usize));
        }
    }

    output.push_str(&text);
    output.push('\n');
}

fn columns(length: Option<Length>) -> i32 {
    length
        .map(|l| (l.as_inches() * COLUMNS_PER_INCH).round() as i32)
        .unwrap_or(0)
}
