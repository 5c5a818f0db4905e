//! Markdown block parsing module.

mod binding;
mod markdown;
mod options;

pub use binding::bind_run_in_headings;
pub use markdown::MarkdownParser;
pub use options::ParseOptions;
