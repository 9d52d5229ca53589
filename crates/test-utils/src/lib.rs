//! Shared helpers for `pressroom` integration tests: canned generated-draft
//! fixtures and mock collaborators for the review workflow.

use anyhow::anyhow;
use pressroom::review::{EditorSurface, Outbox, OutboxError};
use std::sync::{Arc, Mutex};

/// Initializes a `tracing` subscriber for test output. Safe to call from
/// every test; only the first call installs the subscriber.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// --- Mock Editing Surface ---

/// A mock editing surface that records activations and can be programmed to
/// fail.
#[derive(Clone)]
pub struct RecordingEditor {
    activations: Arc<Mutex<usize>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl RecordingEditor {
    pub fn new() -> Self {
        Self {
            activations: Arc::new(Mutex::new(0)),
            failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Makes every subsequent activation fail with `message`.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    /// How many times the surface was successfully activated.
    pub fn activation_count(&self) -> usize {
        *self.activations.lock().unwrap()
    }
}

impl Default for RecordingEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSurface for RecordingEditor {
    fn activate(&self) -> anyhow::Result<()> {
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(anyhow!("{message}"));
        }
        *self.activations.lock().unwrap() += 1;
        Ok(())
    }
}

// --- Mock Outbox ---

/// An outbox whose storage is permanently unavailable. Every `put` fails.
pub struct UnavailableOutbox;

impl Outbox for UnavailableOutbox {
    fn put(&self, _key: &str, _value: &str) -> Result<(), OutboxError> {
        Err(OutboxError::Unavailable(
            "shared storage is not accessible".to_string(),
        ))
    }

    fn take_once(&self, _key: &str) -> Option<String> {
        None
    }
}

// --- Fixtures ---

/// A well-formed generated draft exercising every directive and marker the
/// extraction pipeline recognizes.
pub fn sample_draft() -> &'static str {
    "# The Rise of Edge Computing\n\
     SUMMARY: Edge computing moves processing close to the data source.\n\
     META_TITLE: Edge Computing Explained\n\
     META_DESCRIPTION: What edge computing is and why it matters.\n\
     META_KEYWORDS: edge, computing, latency\n\
     \n\
     Edge computing is reshaping how applications are deployed.\n\
     \n\
     ![A server rack at a regional site](image_placeholder_1)\n\
     \n\
     Latency-sensitive workloads benefit the most.\n\
     \n\
     https://youtube.com/embed/9bZkp7q19f0\n\
     \n\
     Tags:\n\
     - edge\n\
     - infrastructure\n"
}

/// A draft with no recognizable structure at all.
pub fn unstructured_draft() -> &'static str {
    "Just a stream of consciousness with no directives, markers or sections."
}
