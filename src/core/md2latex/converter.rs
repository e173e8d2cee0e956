//! Line-by-line Markdown to LaTeX state machine
//!
//! Each input line is right-trimmed, classified, and routed through exactly
//! one block rule. The only state that spans lines is the code-fence flag,
//! the table buffer, and the optional display-math and open-list flags.

use tracing::debug;

use crate::data::get_heading_command;
use crate::features::templates::wrap_document;
use crate::utils::error::{ConversionOutput, WarningKind};

use super::classify::{classify_line, LineKind};
use super::context::{ConvertContext, DisplayMathMode, ListMode, M2LOptions};
use super::escape::{count_stray_dollars, escape_latex};
use super::inline::{escape_and_format, has_unbalanced_emphasis};
use super::table;

/// Streaming line converter for one document
pub struct MarkdownConverter {
    ctx: ConvertContext,
}

impl MarkdownConverter {
    pub fn new(options: M2LOptions) -> Self {
        Self {
            ctx: ConvertContext::new(options),
        }
    }

    /// Current conversion state
    pub fn context(&self) -> &ConvertContext {
        &self.ctx
    }

    /// Process the next input line
    pub fn process_line(&mut self, raw: &str) {
        self.ctx.line_number += 1;
        let line = raw.trim_end();
        let kind = classify_line(line);

        if !matches!(kind, LineKind::ListItem(_)) {
            self.close_list();
        }

        if kind == LineKind::Fence {
            self.toggle_code_block();
            return;
        }

        if self.ctx.in_code_block {
            self.ctx.push(line);
            return;
        }

        if self.ctx.in_display_math {
            if kind == LineKind::DisplayMath {
                self.ctx.push("\\]");
                self.ctx.in_display_math = false;
            } else {
                self.ctx.push(line);
            }
            return;
        }

        if kind == LineKind::TableRow {
            if !self.ctx.in_table {
                self.ctx.in_table = true;
                self.ctx.block_start = self.ctx.line_number;
            }
            self.ctx.table_buffer.push_line(line);
            return;
        }

        // Any other line ends the table, then is processed normally
        if self.ctx.in_table {
            self.flush_table();
        }

        match kind {
            LineKind::Heading { level, text } => {
                if let Some(cmd) = get_heading_command(level) {
                    self.check_dollars(text);
                    let heading = format!("{}{{{}}}", cmd, escape_latex(text));
                    self.ctx.push(heading);
                }
            }
            LineKind::Quote(text) => {
                let content = self.render_inline(text);
                self.ctx
                    .push(format!("\\begin{{quote}}{}\\end{{quote}}", content));
            }
            LineKind::ListItem(text) => {
                let content = self.render_inline(text);
                match self.ctx.options.list_mode {
                    ListMode::PerLine => {
                        self.ctx.push("\\begin{itemize}");
                        self.ctx.push(format!("\\item {}", content));
                        self.ctx.push("\\end{itemize}");
                    }
                    ListMode::Merged => {
                        if !self.ctx.in_list {
                            self.ctx.push("\\begin{itemize}");
                            self.ctx.in_list = true;
                        }
                        self.ctx.push(format!("\\item {}", content));
                    }
                }
            }
            LineKind::DisplayMath => {
                self.ctx.push("\\[");
                if self.ctx.options.display_math == DisplayMathMode::Toggle {
                    self.ctx.in_display_math = true;
                    self.ctx.display_math_start = self.ctx.line_number;
                }
            }
            LineKind::Paragraph(text) => {
                let content = self.render_inline(text);
                self.ctx.push(format!("{} \\\\", content));
            }
            LineKind::Blank => self.ctx.push("\\par"),
            // handled above
            LineKind::Fence | LineKind::TableRow => {}
        }
    }

    /// Flush pending state, wrap the body and return the result
    pub fn finish(mut self) -> ConversionOutput {
        if self.ctx.in_table {
            self.flush_table();
        }
        self.close_list();

        if self.ctx.in_code_block {
            let start = self.ctx.block_start;
            self.ctx.warn_at(
                WarningKind::UnterminatedCodeBlock,
                "code block is never closed; remaining lines were copied verbatim",
                start,
            );
        }
        if self.ctx.in_display_math {
            let start = self.ctx.display_math_start;
            self.ctx.warn_at(
                WarningKind::UnterminatedDisplayMath,
                "display math opened with `$$` is never closed",
                start,
            );
        }

        let ConvertContext {
            output,
            warnings,
            options,
            line_number,
            ..
        } = self.ctx;

        let lines = if options.full_document {
            wrap_document(output, &options)
        } else {
            output
        };

        debug!(
            input_lines = line_number,
            output_lines = lines.len(),
            warnings = warnings.len(),
            "markdown conversion finished"
        );

        ConversionOutput::with_warnings(lines.join("\n"), warnings)
    }

    fn toggle_code_block(&mut self) {
        if self.ctx.in_code_block {
            self.ctx.push("\\end{lstlisting}");
            self.ctx.in_code_block = false;
        } else {
            // A table directly above the fence ends here
            if self.ctx.in_table {
                self.flush_table();
            }
            self.ctx.push("\\begin{lstlisting}");
            self.ctx.in_code_block = true;
            self.ctx.block_start = self.ctx.line_number;
        }
    }

    fn flush_table(&mut self) {
        let start = self.ctx.block_start;
        let flushed = table::flush_table(self.ctx.table_buffer.take());
        self.ctx.in_table = false;

        for line in flushed.lines {
            self.ctx.push(line);
        }
        for mismatch in flushed.mismatches {
            self.ctx.warn_at(
                WarningKind::TableColumnMismatch,
                format!(
                    "row has {} cells but the header has {}",
                    mismatch.found, mismatch.expected
                ),
                start + mismatch.row,
            );
        }
    }

    fn close_list(&mut self) {
        if self.ctx.in_list {
            self.ctx.push("\\end{itemize}");
            self.ctx.in_list = false;
        }
    }

    /// Escape then apply emphasis, recording warnings for the raw text
    fn render_inline(&mut self, text: &str) -> String {
        self.check_dollars(text);
        if has_unbalanced_emphasis(text) {
            self.ctx.warn(
                WarningKind::UnbalancedEmphasis,
                "odd number of `*` markers",
            );
        }
        escape_and_format(text)
    }

    fn check_dollars(&mut self, text: &str) {
        let stray = count_stray_dollars(text);
        if stray > 0 {
            self.ctx.warn(
                WarningKind::StrayDollar,
                format!("{} `$` outside any math span left unescaped", stray),
            );
        }
    }
}

/// Convert a whole Markdown document with a fresh state
pub fn convert_markdown(input: &str, options: &M2LOptions) -> ConversionOutput {
    debug!(bytes = input.len(), "converting markdown");

    let mut converter = MarkdownConverter::new(options.clone());
    for line in input.split('\n') {
        converter.process_line(line);
    }
    converter.finish()
}
