//! Scanners for single-line and short multi-line labeled directives.
//!
//! Generated drafts carry their metadata as labeled lines: a leading `# `
//! heading for the title, `META_*:` lines for SEO fields, and a `SUMMARY:`
//! line for the abstract. Each scanner locates the first occurrence of its
//! pattern and returns the captured text; an absent directive yields an
//! empty string, never an error.

use regex::Regex;
use std::sync::LazyLock;

pub(crate) const META_TITLE_LABEL: &str = "META_TITLE:";
pub(crate) const META_DESCRIPTION_LABEL: &str = "META_DESCRIPTION:";
pub(crate) const META_KEYWORDS_LABEL: &str = "META_KEYWORDS:";
pub(crate) const SUMMARY_LABEL: &str = "SUMMARY:";

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").expect("title pattern is valid"));

/// Returns the trimmed text of the first level-1 heading, scanning top to
/// bottom. Deeper headings (`##`, `###`, ...) are ignored.
pub fn extract_title(text: &str) -> String {
    TITLE_RE
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Returns the remainder of the first `META_TITLE:` line, trimmed.
pub fn extract_meta_title(text: &str) -> String {
    first_labeled_line(text, META_TITLE_LABEL)
}

/// Returns the remainder of the first `META_DESCRIPTION:` line, trimmed.
pub fn extract_meta_description(text: &str) -> String {
    first_labeled_line(text, META_DESCRIPTION_LABEL)
}

/// Returns the remainder of the first `META_KEYWORDS:` line, trimmed.
/// The value keeps its comma-joined shape; splitting it is the tag
/// scanner's fallback, not this scanner's concern.
pub fn extract_meta_keywords(text: &str) -> String {
    first_labeled_line(text, META_KEYWORDS_LABEL)
}

/// Two-tier summary extraction.
///
/// Tier 1: a `SUMMARY:` line captures its remainder plus every immediately
/// following non-blank, non-directive line, stopping at the first blank
/// line, the next directive, or end of input.
///
/// Tier 2, tried only when no `SUMMARY:` directive exists: the first
/// blank-line-bounded paragraph that does not start with a heading marker.
pub fn extract_summary(text: &str) -> String {
    let mut lines = text.lines();
    while let Some(line) = lines.next() {
        let rest = match line.strip_prefix(SUMMARY_LABEL) {
            Some(rest) => rest,
            None => continue,
        };

        let mut summary = rest.trim().to_string();
        for follow in lines.by_ref() {
            if follow.trim().is_empty() || is_directive_line(follow) {
                break;
            }
            summary.push('\n');
            summary.push_str(follow);
        }
        return summary.trim().to_string();
    }

    first_prose_paragraph(text)
}

/// True for lines that open any recognized directive.
pub(crate) fn is_directive_line(line: &str) -> bool {
    line.starts_with(SUMMARY_LABEL) || is_meta_line(line)
}

/// True for lines that open a `META_*` directive.
pub(crate) fn is_meta_line(line: &str) -> bool {
    line.starts_with(META_TITLE_LABEL)
        || line.starts_with(META_DESCRIPTION_LABEL)
        || line.starts_with(META_KEYWORDS_LABEL)
}

/// Finds the first line beginning with `label` and returns the remainder of
/// that single line, trimmed. Labels do not support multi-line continuation.
fn first_labeled_line(text: &str, label: &str) -> String {
    text.lines()
        .find_map(|line| line.strip_prefix(label))
        .map(|rest| rest.trim().to_string())
        .unwrap_or_default()
}

/// The first paragraph of prose, bounded by blank lines, skipping any
/// paragraph that starts with a heading marker.
fn first_prose_paragraph(text: &str) -> String {
    for paragraph in text.split("\n\n") {
        let trimmed = paragraph.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        return trimmed.to_string();
    }
    String::new()
}
