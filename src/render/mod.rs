//! Rendering module for turning parsed blocks into an APA document.

mod apa;
mod json;
mod options;
mod result;
mod style;
mod text;

pub use apa::{render, render_with_stats, ApaRenderer};
pub use json::{to_json, JsonFormat};
pub use options::{ReferenceOrder, RenderOptions};
pub use result::{DocumentStats, RenderResult};
pub use style::{LineSpacing, Margins, StyleConfig};
pub use text::to_text;
