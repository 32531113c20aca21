//! Whitespace-only reformatting of raw CSS

use std::sync::LazyLock;

use regex::Regex;

/// Braces and semicolons with the whitespace around them
static CSS_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*([{};])\s*").expect("valid regex"));

const INDENT: &str = "  ";

/// Put each selector, declaration and brace on its own line, indented two
/// spaces per brace depth, followed by one blank line.
///
/// Empty input yields empty output. A closing brace never dedents below zero.
pub fn format_advanced_css(css: &str) -> String {
    if css.is_empty() {
        return String::new();
    }

    let broken = CSS_BREAK_RE.replace_all(css, "$1\n");
    let mut depth: usize = 0;
    let mut out = String::with_capacity(broken.len() + 16);

    for line in broken.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if line.starts_with('}') {
            depth = depth.saturating_sub(1);
        }
        out.push_str(&INDENT.repeat(depth));
        out.push_str(line);
        out.push('\n');
        if line.ends_with('{') {
            depth += 1;
        }
    }

    out.push('\n');
    out
}
