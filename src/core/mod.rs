//! Core conversion modules
//!
//! This module contains the conversion engine:
//! - `md2latex`: Markdown to LaTeX converter (line-based)

pub mod md2latex;

// Re-export main types and functions from md2latex
pub use md2latex::{
    convert_markdown, ConvertContext, DisplayMathMode, ListMode, M2LOptions, MarkdownConverter,
};
