//! Document model types.
//!
//! Two layers live here: the parsed input (`ContentBlock`, `ReferenceEntry`,
//! `TitleMetadata`) and the styled output (`StyledDocument`) that the
//! renderer builds and the DOCX writer serializes.

mod block;
mod metadata;
mod styled;

pub use block::{BodyItem, ContentBlock, ParsedText, ReferenceEntry, MAX_HEADING_LEVEL};
pub use metadata::TitleMetadata;
pub use styled::{
    Alignment, DocumentProperties, Element, FieldKind, InlineContent, Length, Paragraph,
    ParagraphFormat, StyledDocument, TextRun, TextStyle,
};
