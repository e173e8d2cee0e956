//! # mdtex
//!
//! Markdown to LaTeX converter written in Rust.
//!
//! ## Features
//!
//! - **Block structure**: headings, block quotes, bullet lists, pipe tables,
//!   fenced code blocks (`lstlisting`)
//! - **Math-aware escaping**: `$...$` and `$$...$$` spans pass through
//!   untouched while text is escaped for LaTeX
//! - **Emphasis**: `**bold**` and `*italic*`
//! - **Full document**: fixed preamble with xeCJK, listings and hyperref
//! - **Diagnostics**: non-fatal warnings for malformed constructs
//!
//! ## Usage Examples
//!
//! ### Escaping
//!
//! ```rust
//! use mdtex::escape_latex;
//!
//! assert_eq!(escape_latex("R&D costs $x_1$"), r"R\&D costs $x_1$");
//! ```
//!
//! ### Full Document Conversion
//!
//! ```rust
//! use mdtex::{markdown_to_latex, markdown_to_latex_with_options, M2LOptions};
//!
//! let latex = markdown_to_latex("# Results\n\nIt **works**.");
//! assert!(latex.starts_with(r"\documentclass"));
//! assert!(latex.contains(r"\part{Results}"));
//!
//! let body = markdown_to_latex_with_options("### A & B", &M2LOptions::body_only());
//! assert_eq!(body, r"\section{A \& B}");
//! ```

/// Core conversion modules
pub mod core;

/// Data layer - static mappings and constants
pub mod data;

/// Feature modules - document templates
pub mod features;

/// Utility modules
pub mod utils;

// Re-export core conversion functions
pub use core::md2latex;
pub use core::md2latex::{
    classify_line, convert_markdown, escape_latex, format_inline, parse_table_row, split_math,
    ConvertContext, DisplayMathMode, LineKind, ListMode, M2LOptions, MarkdownConverter, Segment,
};

// Re-export feature modules
pub use features::templates;

// Re-export utilities
pub use utils::error::{
    ConversionError, ConversionOutput, ConversionResult, ConversionWarning, WarningKind,
};
pub use utils::files::{convert_file, default_output_path};

/// Convert a Markdown document to a complete LaTeX document
///
/// # Arguments
/// * `input` - Markdown source
///
/// # Returns
/// LaTeX source, lines joined by `\n`, without a trailing newline
pub fn markdown_to_latex(input: &str) -> String {
    convert_markdown(input, &M2LOptions::default()).content
}

/// Convert Markdown to LaTeX with custom options
///
/// # Arguments
/// * `input` - Markdown source
/// * `options` - Conversion options
///
/// # Returns
/// LaTeX source
pub fn markdown_to_latex_with_options(input: &str, options: &M2LOptions) -> String {
    convert_markdown(input, options).content
}

/// Convert Markdown to LaTeX and keep the warnings for malformed constructs
pub fn markdown_to_latex_with_diagnostics(input: &str, options: &M2LOptions) -> ConversionOutput {
    convert_markdown(input, options)
}
