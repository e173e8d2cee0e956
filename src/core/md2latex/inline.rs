//! Inline emphasis formatting
//!
//! Rewrites `**bold**` and `*italic*` into `\textbf{}` / `\textit{}`. Runs on
//! already-escaped text. Math spans are masked while the rewriting runs, so
//! a `*` inside `$...$` never pairs with anything.

use lazy_static::lazy_static;
use regex::Regex;

use super::escape::{escape_text, split_math, Segment};

/// Stands in for one math span while emphasis is rewritten
const MATH_PLACEHOLDER: char = '\u{FFFC}';

lazy_static! {
    static ref BOLD_RE: Regex = Regex::new(r"\*\*(.*?)\*\*").unwrap();
    static ref ITALIC_RE: Regex = Regex::new(r"\*(.*?)\*").unwrap();
}

/// Apply bold then italic rewriting.
///
/// Both passes are non-greedy. Unbalanced markers are left as they are or
/// paired up with whatever follows; no attempt is made to repair them.
pub fn format_inline(text: &str) -> String {
    let bolded = BOLD_RE.replace_all(text, r"\textbf{$1}");
    ITALIC_RE.replace_all(&bolded, r"\textit{$1}").into_owned()
}

/// Escape a line and apply emphasis outside its math spans.
///
/// Emphasis may still enclose a math span (`**see $x$**`); the span itself
/// is copied verbatim.
pub fn escape_and_format(text: &str) -> String {
    let segments = split_math(text);

    // The placeholder is ambiguous if the input already uses it
    if text.contains(MATH_PLACEHOLDER) {
        return segments
            .iter()
            .map(|segment| match segment {
                Segment::Math(math) => math.to_string(),
                Segment::Text(plain) => format_inline(&escape_text(plain)),
            })
            .collect();
    }

    let mut masked = String::with_capacity(text.len() + text.len() / 4);
    let mut spans = Vec::new();
    for segment in segments {
        match segment {
            Segment::Math(math) => {
                masked.push(MATH_PLACEHOLDER);
                spans.push(math);
            }
            Segment::Text(plain) => masked.push_str(&escape_text(plain)),
        }
    }

    let formatted = format_inline(&masked);
    let mut spans = spans.into_iter();
    let mut result = String::with_capacity(formatted.len() + text.len());
    for ch in formatted.chars() {
        if ch == MATH_PLACEHOLDER {
            result.push_str(spans.next().unwrap_or_default());
        } else {
            result.push(ch);
        }
    }
    result
}

/// Whether the `*` markers outside math spans cannot all be paired
pub fn has_unbalanced_emphasis(text: &str) -> bool {
    let markers: usize = split_math(text)
        .iter()
        .filter(|s| !s.is_math())
        .map(|s| s.as_str().matches('*').count())
        .sum();
    markers % 2 == 1
}
