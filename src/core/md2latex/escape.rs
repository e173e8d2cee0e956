//! Math-aware LaTeX escaping
//!
//! Text is first tokenized into plain-text and math segments. Math segments
//! (`$$...$$` and `$...$`) are copied verbatim; plain text has every LaTeX
//! special character replaced in a single pass, so escapes introduced for one
//! character are never re-escaped by another.

use crate::data::latex_escape_for;

/// A run of input text, tagged by whether it is a math span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Ordinary text that must be escaped
    Text(&'a str),
    /// A complete math span including its delimiters
    Math(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Text(s) | Segment::Math(s) => s,
        }
    }

    pub fn is_math(&self) -> bool {
        matches!(self, Segment::Math(_))
    }
}

/// Split text into alternating text and math segments.
///
/// At each `$` the block form `$$...$$` (shortest, possibly empty, may cross
/// newlines) is tried first, then the inline form `$...$` (non-empty, no `$`
/// and no newline inside). A `$` that starts neither stays in the text.
pub fn split_math(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while let Some(offset) = text[pos..].find('$') {
        let start = pos + offset;
        match math_span_end(text, start) {
            Some(end) => {
                if text_start < start {
                    segments.push(Segment::Text(&text[text_start..start]));
                }
                segments.push(Segment::Math(&text[start..end]));
                text_start = end;
                pos = end;
            }
            None => pos = start + 1,
        }
    }

    if text_start < text.len() {
        segments.push(Segment::Text(&text[text_start..]));
    }

    segments
}

/// Byte offset one past the math span starting at `start`, if any
fn math_span_end(text: &str, start: usize) -> Option<usize> {
    let rest = &text[start..];

    if let Some(body) = rest.strip_prefix("$$") {
        if let Some(close) = body.find("$$") {
            return Some(start + 2 + close + 2);
        }
    }

    let body = &rest[1..];
    let close = body.find(|c: char| c == '$' || c == '\n')?;
    if close > 0 && body.as_bytes()[close] == b'$' {
        Some(start + 1 + close + 1)
    } else {
        None
    }
}

/// Escape LaTeX special characters in plain text (no math detection)
pub fn escape_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 4);
    for ch in text.chars() {
        match latex_escape_for(ch) {
            Some(escaped) => result.push_str(escaped),
            None => result.push(ch),
        }
    }
    result
}

/// Escape LaTeX special characters while leaving math spans untouched
pub fn escape_latex(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 4);
    for segment in split_math(text) {
        match segment {
            Segment::Math(math) => result.push_str(math),
            Segment::Text(plain) => result.push_str(&escape_text(plain)),
        }
    }
    result
}

/// Count `$` characters that do not belong to any math span
pub fn count_stray_dollars(text: &str) -> usize {
    split_math(text)
        .iter()
        .filter(|s| !s.is_math())
        .map(|s| s.as_str().matches('$').count())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_latex("Hello world, 123."), "Hello world, 123.");
        assert_eq!(escape_latex(""), "");
    }

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(escape_latex("A & B"), "A \\& B");
        assert_eq!(escape_latex("50%"), "50\\%");
        assert_eq!(escape_latex("#1"), "\\#1");
        assert_eq!(escape_latex("snake_case"), "snake\\_case");
        assert_eq!(escape_latex("{x}"), "\\{x\\}");
        assert_eq!(escape_latex("a~b"), "a\\textasciitilde{}b");
        assert_eq!(escape_latex("a^b"), "a\\textasciicircum{}b");
        assert_eq!(escape_latex("C:\\dir"), "C:\\textbackslash{}dir");
    }

    #[test]
    fn test_backslash_not_double_escaped() {
        // The backslash inside `\&` must not be escaped a second time
        assert_eq!(escape_latex("\\&"), "\\textbackslash{}\\&");
        assert_eq!(escape_latex("~{"), "\\textasciitilde{}\\{");
    }

    #[test]
    fn test_inline_math_preserved() {
        assert_eq!(
            escape_latex("sum_a $x_1 + y^2$ & more"),
            "sum\\_a $x_1 + y^2$ \\& more"
        );
    }

    #[test]
    fn test_block_math_preserved() {
        assert_eq!(escape_latex("see $$\\int_0^1 f$$ here"), "see $$\\int_0^1 f$$ here");
    }

    #[test]
    fn test_lone_dollar_left_alone() {
        assert_eq!(escape_latex("costs $5 & up"), "costs $5 \\& up");
        assert_eq!(count_stray_dollars("costs $5 & up"), 1);
        assert_eq!(count_stray_dollars("$x$ and $$y$$"), 0);
    }

    #[test]
    fn test_split_math_segments() {
        assert_eq!(
            split_math("a $x$ b"),
            vec![Segment::Text("a "), Segment::Math("$x$"), Segment::Text(" b")]
        );
        assert_eq!(split_math("$$$$"), vec![Segment::Math("$$$$")]);
        assert_eq!(split_math("$$"), vec![Segment::Text("$$")]);
    }

    #[test]
    fn test_split_math_unclosed_block_falls_back_to_inline() {
        // `$$` with no partner: the second `$` may still open an inline span
        assert_eq!(
            split_math("$$abc$ d"),
            vec![Segment::Text("$"), Segment::Math("$abc$"), Segment::Text(" d")]
        );
    }

    #[test]
    fn test_inline_math_does_not_cross_newline() {
        assert_eq!(split_math("$a\nb$"), vec![Segment::Text("$a\nb$")]);
        assert_eq!(split_math("$$a\nb$$"), vec![Segment::Math("$$a\nb$$")]);
    }

    #[test]
    fn test_unicode_text() {
        assert_eq!(escape_latex("中文 & $α$"), "中文 \\& $α$");
    }
}
