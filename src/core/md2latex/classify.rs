//! Block-level line classification
//!
//! Recognizes which Markdown block rule a single (right-trimmed) line looks
//! like, without regard to conversion state. The state machine in
//! `converter` decides which of these recognitions actually apply.

use crate::data::{
    DISPLAY_MATH_DELIMITER, FENCE_MARKER, LIST_MARKERS, MAX_HEADING_LEVEL, QUOTE_MARKER,
};

use super::table::is_table_row;

/// What a line looks like at block level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A code fence delimiter (```` ``` ```` with optional info string)
    Fence,
    /// A pipe-table row
    TableRow,
    /// An ATX heading of level 1..=5 with its trimmed text
    Heading { level: usize, text: &'a str },
    /// A block quote line with the text after `> `
    Quote(&'a str),
    /// A bullet list item with the text after the marker
    ListItem(&'a str),
    /// A line holding only `$$`
    DisplayMath,
    /// Any other non-blank line
    Paragraph(&'a str),
    /// An empty or whitespace-only line
    Blank,
}

/// Classify a line. First match wins, in the order the variants are listed.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if line.starts_with(FENCE_MARKER) {
        return LineKind::Fence;
    }
    if is_table_row(line) {
        return LineKind::TableRow;
    }
    if let Some((level, text)) = parse_heading(line) {
        return LineKind::Heading { level, text };
    }
    if let Some(text) = line.strip_prefix(QUOTE_MARKER) {
        return LineKind::Quote(text);
    }

    let trimmed = line.trim();
    if let Some(text) = LIST_MARKERS
        .iter()
        .find_map(|marker| trimmed.strip_prefix(marker))
    {
        return LineKind::ListItem(text);
    }
    if trimmed == DISPLAY_MATH_DELIMITER {
        return LineKind::DisplayMath;
    }
    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    LineKind::Paragraph(line)
}

/// Match `#{1,5} ` at the very start of the line
fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > MAX_HEADING_LEVEL {
        return None;
    }
    let text = line[level..].strip_prefix(' ')?;
    Some((level, text.trim()))
}
