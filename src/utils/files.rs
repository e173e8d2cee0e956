//! File boundary for Markdown → LaTeX conversion
//!
//! Reading the Markdown source, deriving the default `.tex` path and writing
//! the result. All failures are mapped to [`ConversionError`] with the path
//! that caused them.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::md2latex::{convert_markdown, M2LOptions};
use crate::utils::error::{ConversionError, ConversionOutput, ConversionResult};

/// Extension of generated files
pub const OUTPUT_EXTENSION: &str = "tex";

/// Replace the input's final extension with `.tex` (or append it)
///
/// Only the file name is considered, so dots in directory names are kept.
pub fn default_output_path(input: impl AsRef<Path>) -> PathBuf {
    input.as_ref().with_extension(OUTPUT_EXTENSION)
}

/// Fail when `output` names the same file as `input`
pub fn ensure_distinct(input: &Path, output: &Path) -> ConversionResult<()> {
    let same = input == output
        || matches!(
            (fs::canonicalize(input), fs::canonicalize(output)),
            (Ok(a), Ok(b)) if a == b
        );
    if same {
        return Err(ConversionError::output_is_input(output));
    }
    Ok(())
}

/// Read a whole UTF-8 Markdown file
pub fn read_markdown(path: impl AsRef<Path>) -> ConversionResult<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| ConversionError::io(path, e))?;
    String::from_utf8(bytes).map_err(|_| ConversionError::encoding(path))
}

/// Write LaTeX output, replacing any existing file
pub fn write_latex(path: impl AsRef<Path>, content: &str) -> ConversionResult<()> {
    let path = path.as_ref();
    fs::write(path, content).map_err(|e| ConversionError::io(path, e))
}

/// Read `input`, convert it and write the result to `output`.
///
/// Nothing is written when reading fails or when `output` is the input file. The returned output carries the
/// same content that was written, plus any conversion warnings.
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &M2LOptions,
) -> ConversionResult<ConversionOutput> {
    let input = input.as_ref();
    let output = output.as_ref();
    ensure_distinct(input, output)?;

    let markdown = read_markdown(input)?;
    debug!(input = %input.display(), bytes = markdown.len(), "read markdown");

    let converted = convert_markdown(&markdown, options);
    write_latex(output, &converted.content)?;
    debug!(output = %output.display(), "wrote latex");

    Ok(converted)
}
