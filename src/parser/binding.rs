//! Run-in heading binding.

use crate::model::{BodyItem, ContentBlock};

/// Pair every level 4 or 5 heading with the paragraph right after it.
///
/// A run-in heading that is not followed by a paragraph stays a plain
/// `BodyItem::Block`; the renderer decides how that degrades.
pub fn bind_run_in_headings(blocks: &[ContentBlock]) -> Vec<BodyItem<'_>> {
    let mut items = Vec::with_capacity(blocks.len());
    let mut i = 0;

    while i < blocks.len() {
        let block = &blocks[i];

        if let ContentBlock::Heading { level, text } = block {
            if *level >= 4 {
                if let Some(ContentBlock::Paragraph { text: body }) = blocks.get(i + 1) {
                    items.push(BodyItem::RunIn {
                        level: *level,
                        heading: text,
                        body,
                    });
                    i += 2;
                    continue;
                }
            }
        }

        items.push(BodyItem::Block(block));
        i += 1;
    }

    items
}
