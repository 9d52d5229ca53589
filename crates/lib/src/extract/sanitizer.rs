//! Produces the displayable body by stripping recognized directive lines.

use super::directives::{is_meta_line, SUMMARY_LABEL};

/// Deletes every `SUMMARY:` section (the directive line plus its non-blank
/// continuation lines) and every `META_*` line, then trims the result.
///
/// The tag-list section, image placeholders and raw video fragments are
/// deliberately left inline: images and embeds must still render in place.
pub fn cleanup_content(text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut in_summary = false;

    for line in text.lines() {
        if line.starts_with(SUMMARY_LABEL) {
            in_summary = true;
            continue;
        }
        if is_meta_line(line) {
            in_summary = false;
            continue;
        }
        if in_summary {
            if line.trim().is_empty() {
                in_summary = false;
                kept.push(line);
            }
            continue;
        }
        kept.push(line);
    }

    kept.join("\n").trim().to_string()
}
