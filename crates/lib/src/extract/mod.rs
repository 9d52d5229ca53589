//! # Extraction Pipeline
//!
//! Converts one immutable block of AI-generated text into an
//! [`ExtractedDocument`]. The pipeline is a set of independent scanning
//! passes over the same input (directives, tag list, inline placeholders,
//! body sanitization) composed through explicit fallback chains. A missing
//! directive degrades to an empty value; extraction never fails.

pub mod directives;
pub mod placeholders;
pub mod sanitizer;
pub mod tags;

pub use directives::{
    extract_meta_description, extract_meta_keywords, extract_meta_title, extract_summary,
    extract_title,
};
pub use placeholders::{extract_suggested_images, extract_video_embeds};
pub use sanitizer::cleanup_content;
pub use tags::extract_tags;

use crate::types::ExtractedDocument;
use tracing::debug;

/// Runs every scanner against the same, unmodified input and assembles the
/// structured document.
///
/// Fallback precedence: `meta_title` falls back to the document title when
/// the `META_TITLE:` directive is absent, and `meta_description` falls back
/// to the summary. Every other field maps one-to-one to its scanner's
/// result.
///
/// Each scanner is a pure function over the same snapshot, so there is no
/// ordering dependency between the calls and re-running on bit-identical
/// input yields a bit-identical document.
pub fn extract_document(text: &str) -> ExtractedDocument {
    let title = extract_title(text);
    let summary = extract_summary(text);
    let meta_title = extract_meta_title(text);
    let meta_description = extract_meta_description(text);

    let document = ExtractedDocument {
        meta_title: if meta_title.is_empty() {
            title.clone()
        } else {
            meta_title
        },
        meta_description: if meta_description.is_empty() {
            summary.clone()
        } else {
            meta_description
        },
        title,
        summary,
        meta_keywords: extract_meta_keywords(text),
        tags: extract_tags(text),
        suggested_images: extract_suggested_images(text),
        video_embeds: extract_video_embeds(text),
        body: cleanup_content(text),
    };

    debug!(
        "Extracted document: title={:?}, {} tags, {} images, {} videos.",
        document.title,
        document.tags.len(),
        document.suggested_images.len(),
        document.video_embeds.len()
    );

    document
}
