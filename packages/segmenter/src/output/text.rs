//! Plain-text rendering with wrapping.

use std::sync::LazyLock;

use regex::Regex;
use textwrap::{fill, Options};

use crate::types::SectionSet;

/// Placeholder shown for a section without content.
pub const EMPTY_SECTION: &str = "(no guidance)";

/// List item marker: `-`, `*`, `+`, `1.` or `2)` followed by whitespace.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*(?:[-*+]|\d{1,3}[.)])\s+)").expect("valid regex"));

/// Wrap one line, hanging continuation lines under list item text.
fn wrap_line(line: &str, width: usize) -> String {
    if line.chars().count() <= width {
        return line.to_string();
    }

    let indent = LIST_MARKER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| " ".repeat(m.as_str().chars().count()))
        .unwrap_or_default();

    let options = Options::new(width).subsequent_indent(&indent);
    fill(line, &options)
}

/// Wrap text at the given width.
///
/// Line breaks in the input are kept, so lists and blank-line paragraph
/// breaks survive. Only lines longer than `width` are rewrapped.
pub fn wrap_text(text: &str, width: usize) -> String {
    text.lines()
        .map(|line| wrap_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render all four sections as titled, wrapped blocks in canonical order.
///
/// # Example
/// ```
/// use advisory_segmenter::output::render_text;
/// use advisory_segmenter::SectionSet;
///
/// let sections = SectionSet::from_parts("Rest well.", "", "", "");
/// let text = render_text(&sections, 80);
/// assert!(text.starts_with("Health\n======\nRest well.\n"));
/// assert!(text.contains("Nutrition\n=========\n(no guidance)\n"));
/// ```
pub fn render_text(sections: &SectionSet, width: usize) -> String {
    sections
        .iter()
        .map(|(label, body)| {
            let title = label.title();
            let underline = "=".repeat(title.chars().count());
            let body = if body.is_empty() {
                EMPTY_SECTION.to_string()
            } else {
                wrap_text(body, width)
            };
            format!("{title}\n{underline}\n{body}\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
