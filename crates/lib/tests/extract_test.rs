//! # Extraction Pipeline Tests
//!
//! Covers every scanner, the fallback chains, the sanitizer's selectivity,
//! and the end-to-end assembly of a full generated draft.

use pressroom::extract::{
    cleanup_content, extract_document, extract_summary, extract_tags, extract_title,
};
use pressroom::types::SuggestedImage;

// --- Purity ---

#[test]
fn test_extraction_is_deterministic() {
    let text = pressroom_test_utils::sample_draft();

    let first = extract_document(text);
    let second = extract_document(text);

    assert_eq!(first, second);
}

// --- Title ---

#[test]
fn test_title_from_first_heading_only() {
    let text = "Intro line.\n# First Title\nBody.\n# Second Title\n";
    assert_eq!(extract_title(text), "First Title");
}

#[test]
fn test_title_ignores_deeper_headings() {
    let text = "## Subheading\n### Deeper\nNo level-1 heading here.";
    assert_eq!(extract_title(text), "");
}

#[test]
fn test_title_fallback_when_no_heading() {
    let document = extract_document("META_TITLE: Foo\n\nSome body.");
    assert_eq!(document.meta_title, "Foo");
    assert_eq!(document.title, "");
}

#[test]
fn test_title_precedence_without_meta_title() {
    let document = extract_document("# Hello World\n\nSome body.");
    assert_eq!(document.meta_title, "Hello World");
    assert_eq!(document.title, "Hello World");
}

// --- Summary ---

#[test]
fn test_summary_captures_continuation_lines() {
    let text = "SUMMARY: Line one\nLine two\n\nOther text";
    assert_eq!(extract_summary(text), "Line one\nLine two");
}

#[test]
fn test_summary_fallback_to_first_paragraph() {
    let text = "Intro sentence.\n\nSecond paragraph.";
    assert_eq!(extract_summary(text), "Intro sentence.");
}

#[test]
fn test_summary_fallback_skips_headings() {
    let text = "# A Heading\n\nFirst real paragraph.\n\nMore.";
    assert_eq!(extract_summary(text), "First real paragraph.");
}

#[test]
fn test_summary_stops_at_following_directive() {
    let text = "SUMMARY: The gist.\nMETA_TITLE: A Title\n\nBody.";
    assert_eq!(extract_summary(text), "The gist.");
}

#[test]
fn test_meta_description_falls_back_to_summary() {
    let document = extract_document("SUMMARY: A concise abstract.\n\nBody text.");
    assert_eq!(document.meta_description, "A concise abstract.");
    assert_eq!(document.summary, "A concise abstract.");
}

// --- Tags ---

#[test]
fn test_tags_preserve_duplicates_and_order() {
    let text = "Tags:\n- a\n- a\n- b\n";
    assert_eq!(extract_tags(text), vec!["a", "a", "b"]);
}

#[test]
fn test_tags_accept_header_synonyms_case_insensitively() {
    assert_eq!(extract_tags("related TOPICS:\n* x\n* y\n"), vec!["x", "y"]);
    assert_eq!(extract_tags("KEYWORDS:\n- z\n"), vec!["z"]);
}

#[test]
fn test_tags_fallback_from_meta_keywords() {
    let text = "META_KEYWORDS: x, y , z\n\nNo tag section here.";
    assert_eq!(extract_tags(text), vec!["x", "y", "z"]);
}

#[test]
fn test_tags_empty_when_both_sources_missing() {
    assert!(extract_tags("Plain prose, nothing else.").is_empty());
}

#[test]
fn test_tags_section_wins_over_keywords() {
    let text = "META_KEYWORDS: from, keywords\n\nTags:\n- from-section\n";
    assert_eq!(extract_tags(text), vec!["from-section"]);
}

// --- Placeholders ---

#[test]
fn test_image_placeholders_in_document_order() {
    let text = "![Alt One](image_placeholder_1)\nprose\n![Alt Two](image_placeholder_2)";
    let document = extract_document(text);

    assert_eq!(
        document.suggested_images,
        vec![
            SuggestedImage {
                alt_text: "Alt One".to_string(),
                placeholder_token: "image_placeholder_1".to_string(),
            },
            SuggestedImage {
                alt_text: "Alt Two".to_string(),
                placeholder_token: "image_placeholder_2".to_string(),
            },
        ]
    );
}

#[test]
fn test_image_marker_requires_placeholder_token() {
    // A regular markdown image pointing at a real URL is not a suggestion.
    let document = extract_document("![photo](https://example.com/photo.jpg)");
    assert!(document.suggested_images.is_empty());
}

#[test]
fn test_video_embeds_preserve_duplicates() {
    let text = "See https://youtube.com/embed/abc123 and again\n\
                https://youtube.com/embed/abc123 in prose.";
    let document = extract_document(text);

    assert_eq!(document.video_embeds, vec!["abc123", "abc123"]);
}

#[test]
fn test_video_embed_without_link_syntax() {
    let document = extract_document("watch youtube.com/embed/dQw4w9_WgXcQ today");
    assert_eq!(document.video_embeds, vec!["dQw4w9_WgXcQ"]);
}

// --- Sanitizer ---

#[test]
fn test_sanitizer_strips_meta_but_keeps_tag_section() {
    let text = "META_TITLE: An SEO Title\n\nBody paragraph.\n\nTags:\n- kept\n";
    let body = cleanup_content(text);

    assert!(!body.contains("META_TITLE"));
    assert!(body.contains("Tags:\n- kept"));
}

#[test]
fn test_sanitizer_removes_summary_continuation() {
    let text = "SUMMARY: Line one\nLine two\n\nBody stays.";
    assert_eq!(cleanup_content(text), "Body stays.");
}

#[test]
fn test_sanitizer_keeps_placeholders_inline() {
    let text = "SUMMARY: gone\n\n![img](image_placeholder_3)\nyoutube.com/embed/keepme";
    let body = cleanup_content(text);

    assert!(body.contains("![img](image_placeholder_3)"));
    assert!(body.contains("youtube.com/embed/keepme"));
}

// --- Degradation ---

#[test]
fn test_unstructured_input_yields_valid_empty_fields() {
    let document = extract_document(pressroom_test_utils::unstructured_draft());

    assert_eq!(document.title, "");
    assert_eq!(document.meta_title, "");
    assert_eq!(document.meta_keywords, "");
    assert!(document.tags.is_empty());
    assert!(document.suggested_images.is_empty());
    assert!(document.video_embeds.is_empty());
    // The whole text is its own first paragraph, so summary falls back to it.
    assert_eq!(document.summary, pressroom_test_utils::unstructured_draft());
    assert_eq!(document.body, pressroom_test_utils::unstructured_draft());
}

#[test]
fn test_empty_input_yields_all_empty_document() {
    let document = extract_document("");
    assert_eq!(document, Default::default());
}

#[test]
fn test_malformed_markers_degrade_silently() {
    // Partially matching shapes: unclosed bracket, wrong token prefix,
    // an embed path with no identifier.
    let text = "![broken(image_placeholder_1)\n\
                ![alt](image_placeholder_x)\n\
                youtube.com/embed/";
    let document = extract_document(text);

    assert!(document.suggested_images.is_empty());
    assert!(document.video_embeds.is_empty());
}

// --- End-to-end ---

#[test]
fn test_full_draft_assembly() {
    let text = "# My Post\nSUMMARY: A short post.\nMETA_TITLE: My Post SEO\nMETA_KEYWORDS: a, b\n\nBody text here.\n\nTags:\n- a\n- b\n\n![img](image_placeholder_1)\nhttps://youtube.com/embed/xyz";

    let document = extract_document(text);

    assert_eq!(document.title, "My Post");
    assert_eq!(document.summary, "A short post.");
    assert_eq!(document.meta_title, "My Post SEO");
    assert_eq!(document.meta_description, "A short post.");
    assert_eq!(document.meta_keywords, "a, b");
    assert_eq!(document.tags, vec!["a", "b"]);
    assert_eq!(
        document.suggested_images,
        vec![SuggestedImage {
            alt_text: "img".to_string(),
            placeholder_token: "image_placeholder_1".to_string(),
        }]
    );
    assert_eq!(document.video_embeds, vec!["xyz"]);
    assert_eq!(
        document.body,
        "# My Post\n\nBody text here.\n\nTags:\n- a\n- b\n\n![img](image_placeholder_1)\nhttps://youtube.com/embed/xyz"
    );
}
