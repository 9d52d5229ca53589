//! Inline marker scanners for image placeholders and video embeds.
//!
//! Both families of markers may appear anywhere in the text; there is no
//! section restriction. All occurrences are captured in document order with
//! duplicates preserved.

use crate::types::SuggestedImage;
use regex::Regex;
use std::sync::LazyLock;

static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]*)\]\((image_placeholder_\d+)\)").expect("image pattern is valid")
});

static VIDEO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"youtube\.com/embed/([A-Za-z0-9_-]+)").expect("video pattern is valid")
});

/// Scans the whole text for image references of the shape
/// `[alt text](image_placeholder_<n>)`.
///
/// The same alt text may legitimately appear with different placeholder
/// indices, so every match becomes one record.
pub fn extract_suggested_images(text: &str) -> Vec<SuggestedImage> {
    IMAGE_RE
        .captures_iter(text)
        .map(|cap| SuggestedImage {
            alt_text: cap[1].to_string(),
            placeholder_token: cap[2].to_string(),
        })
        .collect()
}

/// Captures every `youtube.com/embed/<id>` fragment in the text.
///
/// No surrounding link syntax is required; a bare URL in prose is enough.
pub fn extract_video_embeds(text: &str) -> Vec<String> {
    VIDEO_RE
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect()
}
