//! md2tex CLI - Markdown to LaTeX converter

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use mdtex::{
    convert_markdown, default_output_path,
    utils::{files, logging::init_logger},
    ConversionOutput, ConversionResult, DisplayMathMode, ListMode, M2LOptions,
};
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};
#[cfg(feature = "cli")]
use tracing::{debug, warn};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "md2tex")]
#[command(version)]
#[command(about = "mdtex - Markdown to LaTeX converter", long_about = None)]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output LaTeX file (defaults to the input path with a .tex extension)
    output: Option<PathBuf>,

    /// LaTeX document class
    #[arg(long, default_value = "report")]
    document_class: String,

    /// Options for \documentclass (empty for none)
    #[arg(long, default_value = "a4paper,12pt")]
    class_options: String,

    /// Main CJK font passed to \setCJKmainfont
    #[arg(long, default_value = "SimSun")]
    cjk_font: String,

    /// Emit only the converted body, without preamble or \end{document}
    #[arg(long)]
    body_only: bool,

    /// Put consecutive list items into a single itemize environment
    #[arg(long)]
    merge_lists: bool,

    /// Treat standalone $$ lines as alternating \[ and \] delimiters
    #[arg(long)]
    toggle_display_math: bool,

    /// Embed warnings as comments in the output file
    #[arg(long)]
    embed_warnings: bool,

    /// Strict mode: exit with an error status on failure or any warning
    #[arg(long)]
    strict: bool,

    /// Verbose mode: debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored log output
    #[arg(long)]
    no_color: bool,
}

#[cfg(feature = "cli")]
impl Cli {
    fn options(&self) -> M2LOptions {
        M2LOptions {
            full_document: !self.body_only,
            document_class: self.document_class.clone(),
            class_options: self.class_options.clone(),
            cjk_font: self.cjk_font.clone(),
            list_mode: if self.merge_lists {
                ListMode::Merged
            } else {
                ListMode::PerLine
            },
            display_math: if self.toggle_display_math {
                DisplayMathMode::Toggle
            } else {
                DisplayMathMode::AlwaysOpen
            },
        }
    }
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet, cli.no_color);

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));

    match run(&cli, &output_path) {
        Ok(result) => {
            for warning in &result.warnings {
                warn!("{}", warning);
            }

            println!("✓ Output written to: {}", output_path.display());
            println!("Hint: compile it with xelatex so the CJK font setup works.");

            if cli.strict && result.has_warnings() {
                eprintln!(
                    "Error: {} conversion warning(s) in strict mode",
                    result.warnings.len()
                );
                std::process::exit(1);
            }
        }
        Err(e) => {
            println!("Error: {}", e);
            if cli.strict {
                std::process::exit(1);
            }
        }
    }
}

/// Read, convert and write; every failure surfaces as one error
#[cfg(feature = "cli")]
fn run(cli: &Cli, output_path: &Path) -> ConversionResult<ConversionOutput> {
    let options = cli.options();
    debug!(input = %cli.input.display(), output = %output_path.display(), "converting");

    files::ensure_distinct(&cli.input, output_path)?;
    let markdown = files::read_markdown(&cli.input)?;
    let result = convert_markdown(&markdown, &options);

    let content = if cli.embed_warnings {
        result.content_with_embedded_warnings()
    } else {
        result.content.clone()
    };
    files::write_latex(output_path, &content)?;

    Ok(result)
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install mdtex --features cli");
    eprintln!("  md2tex <INPUT> [OUTPUT]");
}
