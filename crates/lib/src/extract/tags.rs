//! Tag-list extraction with a metadata-keyword fallback.

use super::directives::extract_meta_keywords;

/// Accepted section headers, compared case-insensitively against the
/// trimmed line.
const SECTION_HEADERS: [&str; 3] = ["tags:", "related topics:", "keywords:"];

/// Extracts the explicit tag-list section: a recognized header immediately
/// followed by one or more list lines starting with `-` or `*`, each
/// contributing one trimmed tag in document order.
///
/// When no such section exists, falls back to splitting the
/// `META_KEYWORDS:` value on commas. Both paths keep duplicates; tags are
/// an ordered sequence, not a set.
pub fn extract_tags(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();

    for (i, line) in lines.iter().enumerate() {
        if !is_section_header(line) {
            continue;
        }
        let mut tags = Vec::new();
        for item in &lines[i + 1..] {
            let trimmed = item.trim_start();
            let rest = match trimmed
                .strip_prefix('-')
                .or_else(|| trimmed.strip_prefix('*'))
            {
                Some(rest) => rest,
                None => break,
            };
            tags.push(rest.trim().to_string());
        }
        if !tags.is_empty() {
            return tags;
        }
    }

    extract_meta_keywords(text)
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}

fn is_section_header(line: &str) -> bool {
    let lowered = line.trim().to_lowercase();
    SECTION_HEADERS.iter().any(|header| lowered == *header)
}
