//! LaTeX document template
//!
//! The fixed preamble wrapped around every converted body in full-document
//! mode: document class, page geometry, math, CJK font support (xeCJK, so the
//! result needs `xelatex`), hyperlinks, graphics, code listings with a fixed
//! style, colors and floats, followed by a table of contents and a page break.
//!
//! ## Example
//!
//! ```rust
//! use mdtex::templates::preamble_lines;
//! use mdtex::M2LOptions;
//!
//! let preamble = preamble_lines(&M2LOptions::default());
//! assert_eq!(preamble[0], r"\documentclass[a4paper,12pt]{report}");
//! ```

use crate::core::md2latex::M2LOptions;

/// Packages loaded after the CJK setup, in order
const TRAILING_PACKAGES: [&str; 5] = ["hyperref", "graphicx", "listings", "xcolor", "float"];

/// `\lstset` block applied to every `lstlisting`
const LISTING_STYLE: [&str; 9] = [
    "\\lstset{",
    "    basicstyle=\\ttfamily\\small,",
    "    breaklines=true,",
    "    frame=single,",
    "    backgroundcolor=\\color{gray!10},",
    "    keywordstyle=\\color{blue},",
    "    commentstyle=\\color{green!50!black},",
    "    stringstyle=\\color{red}",
    "}",
];

/// Closes the document
pub const DOCUMENT_END: &str = "\\end{document}";

/// Build the `\documentclass` line
pub fn document_class_line(options: &M2LOptions) -> String {
    if options.class_options.is_empty() {
        format!("\\documentclass{{{}}}", options.document_class)
    } else {
        format!(
            "\\documentclass[{}]{{{}}}",
            options.class_options, options.document_class
        )
    }
}

/// Every line from `\documentclass` through `\newpage`
pub fn preamble_lines(options: &M2LOptions) -> Vec<String> {
    let mut lines = vec![
        document_class_line(options),
        "\\usepackage{geometry}".to_string(),
        "\\geometry{left=2.5cm,right=2.5cm,top=2.5cm,bottom=2.5cm}".to_string(),
        "\\usepackage{amsmath, amssymb}".to_string(),
        "\\usepackage{xeCJK}".to_string(),
        format!("\\setCJKmainfont{{{}}}", options.cjk_font),
    ];
    lines.extend(
        TRAILING_PACKAGES
            .iter()
            .map(|pkg| format!("\\usepackage{{{}}}", pkg)),
    );

    // Style block is set off by blank lines
    lines.push(String::new());
    lines.extend(LISTING_STYLE.iter().map(|l| l.to_string()));
    lines.push(String::new());

    lines.push("\\begin{document}".to_string());
    lines.push("\\tableofcontents".to_string());
    lines.push("\\newpage".to_string());
    lines
}

/// Surround converted body lines with the preamble and document end
pub fn wrap_document(body: Vec<String>, options: &M2LOptions) -> Vec<String> {
    let mut lines = preamble_lines(options);
    lines.reserve(body.len() + 1);
    lines.extend(body);
    lines.push(DOCUMENT_END.to_string());
    lines
}
