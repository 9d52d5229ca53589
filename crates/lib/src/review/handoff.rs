//! The hand-off contract between the review workflow and the external
//! editing surface.
//!
//! On confirmation, two values are written into the outbox under fixed
//! keys: the serialized document and a redirect flag. The post-creation
//! form reads and clears both keys exactly once, then presents an editable
//! form pre-populated from the document.

use crate::review::outbox::{Outbox, OutboxError};
use crate::types::ExtractedDocument;
use thiserror::Error;
use tracing::debug;

/// Outbox key holding the serialized [`ExtractedDocument`].
pub const HANDOFF_DOCUMENT_KEY: &str = "pressroom.handoff.document";
/// Outbox key holding the "return to list after save" flag.
pub const HANDOFF_REDIRECT_KEY: &str = "pressroom.handoff.redirect";

/// Errors that can interrupt the hand-off.
///
/// These are the only errors this subsystem surfaces to the operator;
/// extraction itself never fails.
#[derive(Error, Debug)]
pub enum HandoffError {
    #[error("Failed to serialize the document for hand-off: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Shared storage rejected the hand-off payload: {0}")]
    Storage(#[from] OutboxError),
    #[error("The editing surface could not be activated: {0}")]
    Navigation(#[source] anyhow::Error),
}

/// The pair of values transferred to the editing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct HandoffPayload {
    pub document: ExtractedDocument,
    /// Whether the editing surface should return to the document list after
    /// saving.
    pub return_to_list: bool,
}

impl HandoffPayload {
    /// Serializes the document and writes both values under their fixed
    /// keys. A repeated store overwrites the previous payload silently.
    pub fn store(&self, outbox: &dyn Outbox) -> Result<(), HandoffError> {
        let document_json = serde_json::to_string(&self.document)?;
        debug!(
            "Storing hand-off payload ({} bytes) under '{HANDOFF_DOCUMENT_KEY}'.",
            document_json.len()
        );
        outbox.put(HANDOFF_DOCUMENT_KEY, &document_json)?;
        outbox.put(
            HANDOFF_REDIRECT_KEY,
            if self.return_to_list { "true" } else { "false" },
        )?;
        Ok(())
    }

    /// Reads and clears both keys, returning `None` when no hand-off is
    /// pending. This is the consumer side of the contract, used by the
    /// post-creation form.
    pub fn take(outbox: &dyn Outbox) -> Result<Option<Self>, HandoffError> {
        let document_json = match outbox.take_once(HANDOFF_DOCUMENT_KEY) {
            Some(json) => json,
            None => return Ok(None),
        };
        let redirect = outbox.take_once(HANDOFF_REDIRECT_KEY);

        let document: ExtractedDocument = serde_json::from_str(&document_json)?;
        Ok(Some(Self {
            document,
            return_to_list: redirect.as_deref() == Some("true"),
        }))
    }
}

/// The external editing surface reached by the one-shot hand-off.
///
/// Activation is fire-and-forget: the surface is a separate page reached
/// via navigation, not a collaborator whose acknowledgement is awaited.
pub trait EditorSurface: Send + Sync {
    fn activate(&self) -> anyhow::Result<()>;
}
