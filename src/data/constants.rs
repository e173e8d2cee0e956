//! Constants and mapping tables for Markdown to LaTeX conversion
//!
//! This module contains:
//! - The LaTeX special-character escape table
//! - Heading level to sectioning command mapping
//! - Block markers recognized by the line classifier

use phf::phf_map;

// ============================================================================
// Special Characters
// ============================================================================

/// LaTeX special characters and their text-mode escapes.
///
/// `$` is deliberately absent: dollar signs are either math delimiters or left
/// as-is.
pub static LATEX_SPECIAL_CHARS: phf::Map<char, &'static str> = phf_map! {
    '&' => "\\&",
    '%' => "\\%",
    '#' => "\\#",
    '_' => "\\_",
    '{' => "\\{",
    '}' => "\\}",
    '~' => "\\textasciitilde{}",
    '^' => "\\textasciicircum{}",
    '\\' => "\\textbackslash{}",
};

/// Get the escape sequence for a character, if it needs one
#[inline]
pub fn latex_escape_for(ch: char) -> Option<&'static str> {
    LATEX_SPECIAL_CHARS.get(&ch).copied()
}

// ============================================================================
// Heading Level Mapping
// ============================================================================

/// Mapping from Markdown heading level to LaTeX sectioning command
pub const HEADING_COMMANDS: [&str; 5] = [
    "\\part",          // level 1
    "\\chapter",       // level 2
    "\\section",       // level 3
    "\\subsection",    // level 4
    "\\subsubsection", // level 5
];

/// Deepest heading level that maps to a sectioning command
pub const MAX_HEADING_LEVEL: usize = HEADING_COMMANDS.len();

/// Get LaTeX sectioning command for a heading level (1-indexed)
pub fn get_heading_command(level: usize) -> Option<&'static str> {
    if level == 0 {
        return None;
    }
    HEADING_COMMANDS.get(level - 1).copied()
}

// ============================================================================
// Block Markers
// ============================================================================

/// Opens and closes a fenced code block
pub const FENCE_MARKER: &str = "```";

/// A line consisting of only this opens (or closes) display math
pub const DISPLAY_MATH_DELIMITER: &str = "$$";

/// Table cell delimiter
pub const TABLE_DELIMITER: char = '|';

/// Block quote prefix
pub const QUOTE_MARKER: &str = "> ";

/// Bullet list prefixes
pub const LIST_MARKERS: [&str; 2] = ["- ", "* "];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_chars() {
        assert_eq!(latex_escape_for('&'), Some("\\&"));
        assert_eq!(latex_escape_for('\\'), Some("\\textbackslash{}"));
        assert_eq!(latex_escape_for('~'), Some("\\textasciitilde{}"));
        assert_eq!(latex_escape_for('$'), None);
        assert_eq!(latex_escape_for('a'), None);
    }

    #[test]
    fn test_heading_commands() {
        assert_eq!(get_heading_command(1), Some("\\part"));
        assert_eq!(get_heading_command(3), Some("\\section"));
        assert_eq!(get_heading_command(5), Some("\\subsubsection"));
        assert_eq!(get_heading_command(0), None);
        assert_eq!(get_heading_command(6), None);
    }
}
