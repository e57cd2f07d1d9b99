//! Markup recognition for generated advisory text.
//!
//! Generated reports loosely follow markdown: `###` headings, whole-line
//! bold labels, numbered titles and horizontal rules. Everything here works
//! on single lines so that a malformed document can never derail the parse.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::config::{MARKUP_CHARS, MAX_HEADING_LEVEL};

/// ATX heading: up to three spaces, one to `MAX_HEADING_LEVEL` hashes,
/// optional title, optional closing hashes.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ATX_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^ {{0,3}}#{{1,{MAX_HEADING_LEVEL}}}(?:[ \t]*$|[ \t]*([^#\s].*?)[ \t#]*$)"
    ))
    .expect("valid regex")
});

/// Whole-line bold heading, optionally numbered: `**Diet**`, `1. __Diet:__`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BOLD_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:\d{1,3}[.)]\s*)?(?:\*\*|__)\s*(.+?)\s*(?:\*\*|__)\s*:?\s*$")
        .expect("valid regex")
});

/// Leading enumeration on a title: `1.`, `2)`, `3 -`, `iv.`, `b)`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ENUMERATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?:\d{1,3}|[ivx]{1,5}|[a-z])[.)]\s*|\d{1,3}\s*[-:]\s+)")
        .expect("valid regex")
});

/// Horizontal rule: three or more of the same `-`, `*` or `_`, spaces allowed.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static RULE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:(?:-\s*){3,}|(?:\*\s*){3,}|(?:_\s*){3,})$").expect("valid regex")
});

/// Normalize line endings and unwrap a report fenced as a single code block.
///
/// Generation services sometimes answer with the whole report inside
/// ```` ```markdown ```` fences.
pub fn normalize_input(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    match unwrap_fence(&text) {
        Some(inner) => inner.to_string(),
        None => text,
    }
}

fn unwrap_fence(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    let rest = trimmed.strip_prefix("```")?;
    let inner = rest.strip_suffix("```")?;
    // Skip the info string (language tag) on the opening line.
    let (_, body) = inner.split_once('\n')?;
    if body.contains("\n```") || body.starts_with("```") {
        return None;
    }
    Some(body)
}

/// Fold text for keyword matching: NFKC compatibility forms, then lowercase.
pub fn fold(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase()
}

/// Extract the title from a heading line.
///
/// Returns `None` when the line is not a heading. A heading without a
/// title (`###`) yields an empty string.
pub fn parse_heading(line: &str, bold_headings: bool) -> Option<String> {
    if let Some(caps) = ATX_HEADING.captures(line) {
        let title = caps.get(1).map_or("", |m| m.as_str());
        return Some(clean_title(title));
    }

    if bold_headings {
        if let Some(caps) = BOLD_HEADING.captures(line) {
            let title = caps.get(1).map_or("", |m| m.as_str());
            // "**Eat** more **fiber**" is emphasis inside prose, not a heading.
            if !title.contains("**") && !title.contains("__") {
                return Some(clean_title(title));
            }
        }
    }

    None
}

/// Strip enumeration, emphasis markers and a trailing colon from a title.
pub fn clean_title(title: &str) -> String {
    let title = title.trim();
    let title = ENUMERATION.replace(title, "");
    title
        .trim()
        .trim_matches(&['*', '_'][..])
        .trim()
        .trim_end_matches(':')
        .trim()
        .to_string()
}

/// A non-empty line made only of marker characters (`###`, `---`, `**`).
pub fn is_markup_noise(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_whitespace() || MARKUP_CHARS.contains(&c))
}

/// A line carrying heading markup: hash prefix or bold wrap.
///
/// A trailing colon alone is prose ("Here are some diet tips:").
pub fn is_heading_like(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return false;
    }
    trimmed.starts_with('#') || parse_heading(trimmed, true).is_some()
}

/// A horizontal rule line.
pub fn is_rule(line: &str) -> bool {
    RULE_LINE.is_match(line)
}

/// An opening or closing code fence line.
pub fn is_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

/// Join body lines, dropping blank and rule lines at both edges.
///
/// Internal lines, blank ones included, are kept verbatim.
pub fn trim_body<S: AsRef<str>>(lines: &[S]) -> String {
    let is_edge = |line: &S| line.as_ref().trim().is_empty() || is_rule(line.as_ref());

    let start = lines.iter().position(|l| !is_edge(l)).unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !is_edge(l))
        .map_or(start, |i| i + 1);

    lines[start..end]
        .iter()
        .map(|l| l.as_ref())
        .collect::<Vec<&str>>()
        .join("\n")
        .trim()
        .to_string()
}
