//! # `pressroom`: AI Draft Ingestion & Review
//!
//! This crate converts an unstructured, AI-generated block of text into a
//! structured document record ready for publication, and provides the
//! review workflow that lets an operator inspect and approve the extracted
//! fields before they are handed to an external editing surface.
//!
//! The two halves of the crate:
//!
//! 1. **Extraction** ([`extract`]): a set of independent, pure scanning
//!    passes over the raw text (directives, tag lists, inline placeholders),
//!    composed by an assembler that applies the title/description fallback
//!    precedence. A missing directive degrades to an empty value, never an
//!    error.
//! 2. **Review** ([`review`]): a small state machine wrapping one extracted
//!    document in a preview session, ending in a one-shot hand-off through
//!    an [`review::Outbox`] to the external post-creation form.

pub mod extract;
pub mod review;
pub mod types;

pub use extract::extract_document;
pub use review::{
    EditorSurface, HandoffError, HandoffPayload, MemoryOutbox, Outbox, OutboxError, ReviewSession,
    ReviewState, ReviewTab,
};
pub use types::{ExtractedDocument, SuggestedImage};
