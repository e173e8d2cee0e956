//! Markdown to LaTeX Table Conversion
//!
//! Consecutive pipe-table lines are collected into a [`TableBuffer`] and
//! emitted together as one `table`/`tabular` block when the table ends.
//!
//! # Architecture
//!
//! ```text
//! Pipe rows -> TableBuffer -> LatexTableGenerator -> LaTeX lines
//! ```
//!
//! Row 0 is the header, row 1 the alignment row (its content is ignored),
//! and every later row is data.
//!
//! # Example
//!
//! ```ignore
//! use table::{TableBuffer, flush_table};
//!
//! let mut buffer = TableBuffer::new();
//! buffer.push_line("| A | B |");
//! buffer.push_line("|---|---|");
//! buffer.push_line("| 1 | 2 |");
//! let flushed = flush_table(buffer.take());
//! ```

mod buffer;
mod generator;


// Re-export public API
pub use buffer::{is_table_row, parse_table_row, TableBuffer};
pub use generator::{flush_table, LatexTableGenerator, RowMismatch, TableFlush};
