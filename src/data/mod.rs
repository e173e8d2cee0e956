//! Data layer - Static mappings and constants
//!
//! This module contains all static data used for Markdown → LaTeX conversion:
//! - Special character escapes
//! - Sectioning commands
//! - Block markers

pub mod constants;

// Re-export commonly used items
pub use constants::{
    get_heading_command, latex_escape_for, DISPLAY_MATH_DELIMITER, FENCE_MARKER,
    HEADING_COMMANDS, LATEX_SPECIAL_CHARS, LIST_MARKERS, MAX_HEADING_LEVEL, QUOTE_MARKER,
    TABLE_DELIMITER,
};
