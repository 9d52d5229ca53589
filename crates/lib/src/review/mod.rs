//! # Review Workflow
//!
//! A small state machine wrapping one extracted document in a preview
//! session. The operator switches between a content view and a metadata
//! view, and on confirmation the session performs a one-shot hand-off to
//! the external editing surface.
//!
//! ```text
//! Closed ──open──▶ Open{Content} ◀──switch_tab──▶ Open{Metadata}
//!                      │    ▲
//!            confirm   │    │ hand-off failed (state restored)
//!                      ▼    │
//!                  Committing ──success──▶ Closed
//! ```
//!
//! `cancel` from any `Open` state returns directly to `Closed` without
//! touching shared storage.

pub mod handoff;
pub mod outbox;

pub use handoff::{
    EditorSurface, HandoffError, HandoffPayload, HANDOFF_DOCUMENT_KEY, HANDOFF_REDIRECT_KEY,
};
pub use outbox::{MemoryOutbox, Outbox, OutboxError};

use crate::types::ExtractedDocument;
use tracing::{info, warn};

/// The view the operator is currently inspecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewTab {
    Content,
    Metadata,
}

/// The phase of a preview session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewState {
    Closed,
    Open { tab: ReviewTab },
    Committing,
}

/// A preview session over one extracted document.
///
/// The session borrows its collaborators: the outbox the hand-off payload
/// is written into, and the editing surface signalled afterwards. Each
/// session is independent; there is no shared state between sessions.
pub struct ReviewSession<'a> {
    state: ReviewState,
    document: Option<ExtractedDocument>,
    outbox: &'a dyn Outbox,
    editor: &'a dyn EditorSurface,
}

impl<'a> ReviewSession<'a> {
    /// Creates a closed session wired to its collaborators.
    pub fn new(outbox: &'a dyn Outbox, editor: &'a dyn EditorSurface) -> Self {
        Self {
            state: ReviewState::Closed,
            document: None,
            outbox,
            editor,
        }
    }

    pub fn state(&self) -> ReviewState {
        self.state
    }

    /// The document under review, while the session is not closed.
    pub fn document(&self) -> Option<&ExtractedDocument> {
        self.document.as_ref()
    }

    /// Opens a preview for `document`, landing on the content tab.
    /// Re-opening while already open resets the tab to content.
    pub fn open(&mut self, document: ExtractedDocument) {
        info!("Opening review session: title={:?}.", document.title);
        self.document = Some(document);
        self.state = ReviewState::Open {
            tab: ReviewTab::Content,
        };
    }

    /// Switches the active view. A pure transition: permitted in any open
    /// state, ignored otherwise, no external effect.
    pub fn switch_tab(&mut self, tab: ReviewTab) {
        if let ReviewState::Open { .. } = self.state {
            self.state = ReviewState::Open { tab };
        }
    }

    /// Discards the session. No hand-off is performed and shared storage is
    /// left untouched.
    pub fn cancel(&mut self) {
        if let ReviewState::Open { .. } = self.state {
            info!("Review session cancelled.");
            self.state = ReviewState::Closed;
            self.document = None;
        }
    }

    /// Commits the review: serializes the document, writes the hand-off
    /// payload and redirect flag under their fixed keys, then signals the
    /// editing surface to take over.
    ///
    /// Returns `Ok(true)` when the hand-off completed and the session
    /// closed, `Ok(false)` when there was no open session to commit. On
    /// failure the session returns to its previous open state with the
    /// document intact; the in-progress review is never silently lost.
    ///
    /// The hand-off is at-most-once per call. A repeated call on a
    /// re-opened session overwrites the stored payload rather than erroring,
    /// so callers disable the action once it has succeeded.
    pub fn confirm_and_edit(&mut self, return_to_list: bool) -> Result<bool, HandoffError> {
        let tab = match self.state {
            ReviewState::Open { tab } => tab,
            _ => {
                warn!("confirm_and_edit called without an open session; ignoring.");
                return Ok(false);
            }
        };
        let document = match &self.document {
            Some(document) => document.clone(),
            None => return Ok(false),
        };

        self.state = ReviewState::Committing;

        let payload = HandoffPayload {
            document,
            return_to_list,
        };
        let result = payload.store(self.outbox).and_then(|()| {
            self.editor
                .activate()
                .map_err(HandoffError::Navigation)
        });

        match result {
            Ok(()) => {
                info!("Hand-off complete; review session closed.");
                self.state = ReviewState::Closed;
                self.document = None;
                Ok(true)
            }
            Err(err) => {
                warn!("Hand-off failed, keeping the review session open: {err}");
                self.state = ReviewState::Open { tab };
                Err(err)
            }
        }
    }
}
