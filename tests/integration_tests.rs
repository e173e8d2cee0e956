//! Integration tests for mdtex Markdown to LaTeX conversion

use mdtex::{
    convert_file, default_output_path, escape_latex, markdown_to_latex,
    markdown_to_latex_with_diagnostics, markdown_to_latex_with_options, M2LOptions, WarningKind,
};
use pretty_assertions::assert_eq;

fn body(input: &str) -> String {
    markdown_to_latex_with_options(input, &M2LOptions::body_only())
}

// ============================================================================
// Escaping
// ============================================================================

mod escaping {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn test_safe_text_unchanged() {
        let samples = [
            "plain words",
            "Numbers 1, 2, 3.",
            "punctuation: ;()[]!?'\"",
            "中文文本",
        ];
        for sample in samples {
            assert_eq!(escape_latex(sample), sample);
        }
    }

    #[test]
    fn test_math_span_preserved() {
        let result = escape_latex("before $x+y$ after");
        assert_eq!(result, "before $x+y$ after");

        let result = escape_latex("a_b $x+y$ c&d");
        assert!(result.contains("$x+y$"));
        assert!(result.starts_with("a\\_b "));
        assert!(result.ends_with(" c\\&d"));
    }

    #[test]
    fn test_math_content_not_escaped_in_paragraph() {
        let result = body("Energy $E = mc^2$ and $$\\sum_{i} x_i$$ here.");
        assert_eq!(result, "Energy $E = mc^2$ and $$\\sum_{i} x_i$$ here. \\\\");
    }

    #[test]
    fn test_emphasis_stays_outside_math() {
        let result = body("Let $a*b$ and $c*d$ hold, **really** $x*y*z$");
        assert_eq!(
            result,
            "Let $a*b$ and $c*d$ hold, \\textbf{really} $x*y*z$ \\\\"
        );
    }

    #[test]
    fn test_every_special_char() {
        assert_eq!(
            escape_latex("& % # _ { } ~ ^ \\"),
            "\\& \\% \\# \\_ \\{ \\} \\textasciitilde{} \\textasciicircum{} \\textbackslash{}"
        );
    }
}

// ============================================================================
// Block structure
// ============================================================================

mod blocks {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn test_heading_mapping() {
        assert!(body("# Title").contains("\\part{Title}"));
        assert!(body("### Title").contains("\\section{Title}"));
        assert!(body("### A & B").contains("\\section{A \\& B}"));
    }

    #[test]
    fn test_table_shape() {
        for n in 1..=5 {
            let header = format!("|{}", "h|".repeat(n));
            let sep = format!("|{}", "---|".repeat(n));
            let data = format!("|{}", "d|".repeat(n));
            let result = body(&format!("{}\n{}\n{}", header, sep, data));

            let spec = format!("\\begin{{tabular}}{{|{}}}", "l|".repeat(n));
            assert!(result.contains(&spec), "missing {} in {}", spec, result);

            let content_rows = result
                .lines()
                .filter(|l| l.ends_with("\\\\ \\hline"))
                .count();
            assert_eq!(content_rows, 2);
            assert!(!result.contains("---"));
        }
    }

    #[test]
    fn test_code_fence_opacity() {
        let code = "let s = \"50% & $5 #1 _x_ {y} ~ ^ \\\\ **b** *i*\";";
        let result = body(&format!("```rust\n{}\n```", code));
        assert_eq!(
            result,
            format!("\\begin{{lstlisting}}\n{}\n\\end{{lstlisting}}", code)
        );
    }

    #[test]
    fn test_list_per_line_independence() {
        let result = body("- first\n- second");
        assert_eq!(result.matches("\\begin{itemize}").count(), 2);
        assert_eq!(result.matches("\\end{itemize}").count(), 2);
        assert_eq!(result.matches("\\item ").count(), 2);
    }

    #[test]
    fn test_unterminated_fence() {
        let output = markdown_to_latex_with_diagnostics(
            "intro\n```\nfn main() {}\n\n# still code",
            &M2LOptions::default(),
        );
        assert!(!output.content.contains("\\end{lstlisting}"));
        assert!(output.content.contains("fn main() {}\n\n# still code\n\\end{document}"));
        assert_eq!(output.warnings.len(), 1);
        assert_eq!(output.warnings[0].kind, WarningKind::UnterminatedCodeBlock);
        assert_eq!(output.warnings[0].line, Some(2));
    }

    #[test]
    fn test_improved_mode() {
        let result = markdown_to_latex_with_options(
            "- a\n- b\n$$\nx_1\n$$",
            &M2LOptions {
                full_document: false,
                ..M2LOptions::improved()
            },
        );
        assert_eq!(
            result,
            "\\begin{itemize}\n\\item a\n\\item b\n\\end{itemize}\n\\[\nx_1\n\\]"
        );
    }
}

// ============================================================================
// Full documents
// ============================================================================

mod documents {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "# Theory

Intro with **bold** and *italic* text, cost 5% & $a^2 + b^2$.

> Note: see *below*

- point_one
- point two

| Name | Value |
|------|-------|
| alpha | $\\alpha$ |

```
raw_code & more
```
$$";

    #[test]
    fn test_sample_body() {
        let expected = "\\part{Theory}
\\par
Intro with \\textbf{bold} and \\textit{italic} text, cost 5\\% \\& $a^2 + b^2$. \\\\
\\par
\\begin{quote}Note: see \\textit{below}\\end{quote}
\\par
\\begin{itemize}
\\item point\\_one
\\end{itemize}
\\begin{itemize}
\\item point two
\\end{itemize}
\\par
\\begin{table}[h!]
\\centering
\\begin{tabular}{|l|l|}
\\hline
Name & Value \\\\ \\hline
alpha & $\\alpha$ \\\\ \\hline
\\end{tabular}
\\end{table}
\\par
\\begin{lstlisting}
raw_code & more
\\end{lstlisting}
\\[";
        assert_eq!(body(SAMPLE), expected);
    }

    #[test]
    fn test_full_document_frame() {
        let result = markdown_to_latex(SAMPLE);
        assert!(result.starts_with("\\documentclass[a4paper,12pt]{report}\n"));
        assert!(result.contains("\\usepackage{xeCJK}\n\\setCJKmainfont{SimSun}"));
        assert!(result.contains("\\usepackage{float}\n\n\\lstset{"));
        assert!(result.contains("}\n\n\\begin{document}\n\\tableofcontents\n\\newpage\n\\part{Theory}"));
        assert!(result.ends_with("\\[\n\\end{document}"));
        assert!(!result.ends_with('\n'));
    }

    #[test]
    fn test_conversions_are_independent() {
        let first = markdown_to_latex("```\nunclosed");
        let second = markdown_to_latex("# Heading");
        assert!(second.contains("\\part{Heading}"));
        assert!(!second.contains("lstlisting}\n# Heading"));
        assert_ne!(first, second);
    }
}

// ============================================================================
// Files
// ============================================================================

mod files {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn test_convert_file_with_default_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("paper.md");
        fs::write(&input, "## Chapter\n\nText_1").unwrap();

        let output = default_output_path(&input);
        assert_eq!(output, dir.path().join("paper.tex"));

        let result = convert_file(&input, &output, &M2LOptions::default()).unwrap();
        assert!(!result.has_warnings());

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("\\chapter{Chapter}\n\\par\nText\\_1 \\\\"));
        assert!(written.ends_with("\\end{document}"));
    }

    #[test]
    fn test_convert_file_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = convert_file(
            dir.path().join("missing.md"),
            dir.path().join("missing.tex"),
            &M2LOptions::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("missing.md"));
    }
}
