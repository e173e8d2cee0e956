//! Conversion context and options for Markdown to LaTeX conversion
//!
//! This module handles state management, output buffering, and conversion options.

use crate::utils::error::{ConversionWarning, WarningKind};

use super::table::TableBuffer;

/// How consecutive bullet lines are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMode {
    /// Every item becomes its own closed `itemize` block
    #[default]
    PerLine,
    /// Consecutive items share one `itemize` block
    Merged,
}

/// How a line holding only `$$` is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMathMode {
    /// Every such line opens `\[`; nothing is ever closed
    #[default]
    AlwaysOpen,
    /// Alternate between `\[` and `\]`, copying lines in between verbatim
    Toggle,
}

/// Options for Markdown to LaTeX conversion
#[derive(Debug, Clone)]
pub struct M2LOptions {
    /// Whether to wrap output in a complete LaTeX document
    pub full_document: bool,
    /// Document class to use (default: "report")
    pub document_class: String,
    /// Options passed to `\documentclass[...]`
    pub class_options: String,
    /// Main CJK font for xeCJK
    pub cjk_font: String,
    /// List emission strategy
    pub list_mode: ListMode,
    /// Standalone `$$` handling
    pub display_math: DisplayMathMode,
}

impl Default for M2LOptions {
    fn default() -> Self {
        Self {
            full_document: true,
            document_class: "report".to_string(),
            class_options: "a4paper,12pt".to_string(),
            cjk_font: "SimSun".to_string(),
            list_mode: ListMode::PerLine,
            display_math: DisplayMathMode::AlwaysOpen,
        }
    }
}

impl M2LOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn full_document() -> Self {
        Self::default()
    }

    /// Body only, without preamble or `\end{document}`
    pub fn body_only() -> Self {
        Self {
            full_document: false,
            ..Default::default()
        }
    }

    /// Merged lists and paired `$$` delimiters
    pub fn improved() -> Self {
        Self {
            list_mode: ListMode::Merged,
            display_math: DisplayMathMode::Toggle,
            ..Default::default()
        }
    }
}

/// Conversion context for tracking state during conversion
///
/// One instance lives for exactly one conversion call.
pub struct ConvertContext {
    /// Output lines (append-only)
    pub output: Vec<String>,
    /// Inside a fenced code block
    pub in_code_block: bool,
    /// Reading consecutive table rows
    pub in_table: bool,
    /// Rows of the table being read
    pub table_buffer: TableBuffer,
    /// Inside a `$$` display block (toggle mode only)
    pub in_display_math: bool,
    /// An `itemize` block is open (merged list mode only)
    pub in_list: bool,
    /// Current input line, 1-indexed
    pub line_number: usize,
    /// Line on which the open code block or table started
    pub block_start: usize,
    /// Line of the `$$` that opened the current display block
    pub display_math_start: usize,
    /// Collected warnings during conversion
    pub warnings: Vec<ConversionWarning>,
    /// Conversion options
    pub options: M2LOptions,
}

/// Initial capacity for output buffer (reduces reallocations)
const INITIAL_BUFFER_CAPACITY: usize = 256;

impl ConvertContext {
    /// Create a new context with pre-allocated buffer
    pub fn new(options: M2LOptions) -> Self {
        Self {
            output: Vec::with_capacity(INITIAL_BUFFER_CAPACITY),
            in_code_block: false,
            in_table: false,
            table_buffer: TableBuffer::new(),
            in_display_math: false,
            in_list: false,
            line_number: 0,
            block_start: 0,
            display_math_start: 0,
            warnings: Vec::new(),
            options,
        }
    }

    /// Append one output line
    pub fn push(&mut self, line: impl Into<String>) {
        self.output.push(line.into());
    }

    /// Record a warning at the current line
    pub fn warn(&mut self, kind: WarningKind, message: impl Into<String>) {
        let line = self.line_number;
        self.warn_at(kind, message, line);
    }

    /// Record a warning at a specific line
    pub fn warn_at(&mut self, kind: WarningKind, message: impl Into<String>, line: usize) {
        self.warnings
            .push(ConversionWarning::at_line(kind, message, line));
    }
}

impl Default for ConvertContext {
    fn default() -> Self {
        Self::new(M2LOptions::default())
    }
}
