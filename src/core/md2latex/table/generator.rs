//! LaTeX tabular generator for buffered pipe tables

use tracing::trace;

use crate::core::md2latex::escape::escape_latex;

/// A row whose cell count differed from the header's
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowMismatch {
    /// Index of the row within the table (0 = header)
    pub row: usize,
    /// Number of cells the row actually had
    pub found: usize,
    /// Number of columns declared by the header
    pub expected: usize,
}

/// Result of flushing a table buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFlush {
    /// Output lines, in order
    pub lines: Vec<String>,
    /// Data rows that had to be padded or truncated
    pub mismatches: Vec<RowMismatch>,
}

/// LaTeX table generator
///
/// The column count is fixed by the header row. Every emitted row is brought
/// to exactly that width: short rows are padded with empty cells and long
/// rows are truncated.
pub struct LatexTableGenerator {
    /// Number of columns
    pub col_count: usize,
    /// Escaped cells of each emitted row
    rows: Vec<Vec<String>>,
    /// Rows that did not match the header width
    mismatches: Vec<RowMismatch>,
}

impl LatexTableGenerator {
    /// Create a new generator with the given column count
    pub fn new(col_count: usize) -> Self {
        LatexTableGenerator {
            col_count,
            rows: Vec::new(),
            mismatches: Vec::new(),
        }
    }

    /// Add one row of raw (unescaped) cells.
    ///
    /// `index` is the row's position in the source table and is only used
    /// for mismatch reporting.
    pub fn process_row(&mut self, index: usize, cells: &[String]) {
        if cells.len() != self.col_count {
            self.mismatches.push(RowMismatch {
                row: index,
                found: cells.len(),
                expected: self.col_count,
            });
        }

        let mut row: Vec<String> = cells
            .iter()
            .take(self.col_count)
            .map(|cell| escape_latex(cell))
            .collect();
        // No more input cells, fill with empty
        row.resize(self.col_count, String::new());

        self.rows.push(row);
    }

    /// Generate the complete `table` environment, one output line per entry
    pub fn generate_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 6);

        lines.push("\\begin{table}[h!]".to_string());
        lines.push("\\centering".to_string());
        lines.push(format!("\\begin{{tabular}}{{{}}}", self.build_column_spec()));
        lines.push("\\hline".to_string());

        for row in &self.rows {
            lines.push(format!("{} \\\\ \\hline", row.join(" & ")));
        }

        lines.push("\\end{tabular}".to_string());
        lines.push("\\end{table}".to_string());

        lines
    }

    /// Rows that were padded or truncated
    pub fn mismatches(&self) -> &[RowMismatch] {
        &self.mismatches
    }

    /// Build the column specification string (e.g., "|l|l|l|")
    fn build_column_spec(&self) -> String {
        let mut spec = String::from("|");
        for _ in 0..self.col_count {
            spec.push('l');
            spec.push('|');
        }
        spec
    }
}

/// Convert buffered table rows into LaTeX.
///
/// Row 1 (the Markdown alignment row) is skipped. An empty buffer produces
/// no lines.
pub fn flush_table(rows: Vec<Vec<String>>) -> TableFlush {
    let Some(header) = rows.first() else {
        return TableFlush::default();
    };

    let mut gen = LatexTableGenerator::new(header.len());
    gen.process_row(0, header);
    for (index, row) in rows.iter().enumerate().skip(2) {
        gen.process_row(index, row);
    }

    trace!(
        columns = gen.col_count,
        rows = rows.len(),
        "flushing table"
    );

    TableFlush {
        lines: gen.generate_lines(),
        mismatches: gen.mismatches,
    }
}
