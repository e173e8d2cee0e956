//! Markdown to LaTeX converter
//!
//! A single linear pass over the input lines. Each line is classified at
//! block level and routed through one rule; text is escaped with math spans
//! protected, then emphasis is rewritten.
//!
//! ```text
//! lines -> classify -> state machine -> escape -> inline -> output lines
//!                          |
//!                          +-> table buffer -> tabular
//! ```

pub mod context;
mod classify;
mod converter;
mod escape;
mod inline;
mod table;

pub use classify::{classify_line, LineKind};
pub use context::{ConvertContext, DisplayMathMode, ListMode, M2LOptions};
pub use converter::{convert_markdown, MarkdownConverter};
pub use escape::{count_stray_dollars, escape_latex, escape_text, split_math, Segment};
pub use inline::{escape_and_format, format_inline, has_unbalanced_emphasis};
pub use table::{
    flush_table, is_table_row, parse_table_row, LatexTableGenerator, RowMismatch, TableBuffer,
    TableFlush,
};
