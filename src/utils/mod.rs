//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - File reading/writing and output path derivation
//! - Logging setup for the CLI

pub mod error;
pub mod files;

#[cfg(feature = "cli")]
pub mod logging;

// Re-export commonly used items
pub use error::{
    ConversionError, ConversionOutput, ConversionResult, ConversionWarning, WarningKind,
};
pub use files::{convert_file, default_output_path, ensure_distinct, read_markdown, write_latex};
