//! Core data types shared by the extraction pipeline and the review
//! workflow.

use serde::{Deserialize, Serialize};

/// A single image suggestion discovered in the generated text.
///
/// The `placeholder_token` is a synthetic identifier
/// (`image_placeholder_<n>`) inserted by the content generator in place of a
/// real URL. Resolving the token into an asset URL is the job of an external
/// provisioning collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedImage {
    pub alt_text: String,
    pub placeholder_token: String,
}

/// The structured document assembled from one block of raw generated text.
///
/// Every field is a deterministic, pure function of the input snapshot; a
/// value is never updated after construction. Absent directives degrade to
/// empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExtractedDocument {
    /// The first level-1 heading, or empty when the draft has none.
    pub title: String,
    /// The directive-stripped body. Tag lists, image placeholders and video
    /// fragments remain inline so they still render in place.
    pub body: String,
    pub summary: String,
    pub meta_title: String,
    pub meta_description: String,
    /// The raw comma-joined keyword value, exactly as the generator wrote it.
    pub meta_keywords: String,
    /// Ordered and repeat-tolerant; uniqueness belongs to downstream
    /// consumers.
    pub tags: Vec<String>,
    pub suggested_images: Vec<SuggestedImage>,
    /// Video identifiers in document order, duplicates preserved.
    pub video_embeds: Vec<String>,
}
