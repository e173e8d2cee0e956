//! Error handling for mdtex conversions
//!
//! This module provides a unified error type and result type for the file
//! boundary, plus the non-fatal warnings produced while converting malformed
//! Markdown.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Conversion error type
///
/// Only the file boundary can fail. Malformed Markdown never produces an
/// error, see [`ConversionWarning`].
#[derive(Debug, Error)]
pub enum ConversionError {
    /// IO error (for file operations)
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Input file is not valid UTF-8
    #[error("{} is not valid UTF-8", .path.display())]
    Encoding { path: PathBuf },
    /// Output path resolves to the input file
    #[error("output {} would overwrite the input file", .path.display())]
    OutputIsInput { path: PathBuf },
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

// Convenience constructors for errors
impl ConversionError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConversionError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn encoding(path: impl Into<PathBuf>) -> Self {
        ConversionError::Encoding { path: path.into() }
    }

    pub fn output_is_input(path: impl Into<PathBuf>) -> Self {
        ConversionError::OutputIsInput { path: path.into() }
    }
}

/// Kind of warning generated during Markdown to LaTeX conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Input ended inside a fenced code block
    UnterminatedCodeBlock,
    /// Input ended inside a `$$` display block (toggle mode)
    UnterminatedDisplayMath,
    /// A table row's cell count differs from the header's
    TableColumnMismatch,
    /// An odd number of `*` markers outside math
    UnbalancedEmphasis,
    /// A `$` that does not belong to any math span
    StrayDollar,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::UnterminatedCodeBlock => write!(f, "unterminated code block"),
            WarningKind::UnterminatedDisplayMath => write!(f, "unterminated display math"),
            WarningKind::TableColumnMismatch => write!(f, "table column mismatch"),
            WarningKind::UnbalancedEmphasis => write!(f, "unbalanced emphasis"),
            WarningKind::StrayDollar => write!(f, "stray dollar"),
        }
    }
}

/// Conversion warnings (non-fatal issues)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionWarning {
    pub kind: WarningKind,
    pub message: String,
    /// Input line, 1-indexed
    pub line: Option<usize>,
}

impl ConversionWarning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            line: None,
        }
    }

    pub fn at_line(kind: WarningKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line: Some(line),
        }
    }
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(l) = self.line {
            write!(f, "[{}] line {}: {}", self.kind, l, self.message)
        } else {
            write!(f, "[{}] {}", self.kind, self.message)
        }
    }
}

/// Conversion output with optional warnings
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    /// The converted content
    pub content: String,
    /// Any warnings generated during conversion
    pub warnings: Vec<ConversionWarning>,
}

impl ConversionOutput {
    pub fn new(content: String) -> Self {
        Self {
            content,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(content: String, warnings: Vec<ConversionWarning>) -> Self {
        Self { content, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Content followed by the warnings as LaTeX `%` comments
    pub fn content_with_embedded_warnings(&self) -> String {
        if self.warnings.is_empty() {
            return self.content.clone();
        }

        let mut result = self.content.clone();
        result.push_str("\n\n% ===============================================================\n");
        result.push_str("% Conversion Warnings\n");
        result.push_str("% ===============================================================");
        for warning in &self.warnings {
            result.push_str("\n% ");
            result.push_str(&warning.to_string());
        }
        result
    }
}
