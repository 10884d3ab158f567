//! Docstring normalization
//!
//! Doc strings are written with the summary on the first line and the body
//! indented to match the surrounding source. [`dedent`] removes the common
//! margin of the body while keeping relative indentation, so code examples
//! inside a doc keep their shape.

/// Margins wider than this are not treated as a common indent
pub const MAX_COMMON_INDENT: usize = 16;

/// Dedent a docstring.
///
/// The text is stripped of leading whitespace and split into lines. The
/// first line is kept as is; every later line loses the smallest leading
/// whitespace width found among the non-blank later lines. Widths are
/// counted in characters, so a tab counts as one column.
///
/// ```
/// use refdoc::dedent;
///
/// let doc = "Summary.\n    Body.\n        Nested.";
/// assert_eq!(dedent(doc), "Summary.\nBody.\n    Nested.");
/// ```
pub fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text.trim_start().lines().collect();

    let indent = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim_start().is_empty())
        .map(|line| indent_width(line))
        .min()
        .filter(|&width| width <= MAX_COMMON_INDENT)
        .unwrap_or(0);

    let mut out: Vec<&str> = Vec::with_capacity(lines.len());
    for (i, &line) in lines.iter().enumerate() {
        if i == 0 {
            out.push(line);
        } else {
            out.push(skip_chars(line, indent));
        }
    }
    out.join("\n")
}

/// Number of leading whitespace characters
fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Drop the first `n` characters, or everything if the line is shorter
fn skip_chars(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}
