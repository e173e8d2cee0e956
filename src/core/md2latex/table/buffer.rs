//! Pipe-table row recognition and buffering

use crate::data::TABLE_DELIMITER;

/// Whether a line is a pipe-table row: trimmed, it starts and ends with `|`
/// and is at least two characters long
pub fn is_table_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 2
        && trimmed.starts_with(TABLE_DELIMITER)
        && trimmed.ends_with(TABLE_DELIMITER)
}

/// Split a table row into trimmed cells.
///
/// Exactly one leading and one trailing `|` are removed before splitting, so
/// `||a||` yields `["", "a", ""]`.
pub fn parse_table_row(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix(TABLE_DELIMITER).unwrap_or(trimmed);
    let inner = inner.strip_suffix(TABLE_DELIMITER).unwrap_or(inner);

    inner
        .split(TABLE_DELIMITER)
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Rows of the table currently being read
#[derive(Debug, Clone, Default)]
pub struct TableBuffer {
    rows: Vec<Vec<String>>,
}

impl TableBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a row line and append it
    pub fn push_line(&mut self, line: &str) {
        self.rows.push(parse_table_row(line));
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Remove and return every buffered row, leaving the buffer empty
    pub fn take(&mut self) -> Vec<Vec<String>> {
        std::mem::take(&mut self.rows)
    }
}
