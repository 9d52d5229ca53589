//! # Outbox: the shared-storage channel to the editing surface
//!
//! The hand-off to the external post-creation form goes through an explicit
//! single-slot mailbox rather than ambient keyed storage: values are written
//! with [`Outbox::put`] and consumed exactly once with
//! [`Outbox::take_once`], which makes the at-most-once contract part of the
//! type instead of a convention.

use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

/// Errors raised by an outbox implementation when a value cannot be stored.
#[derive(Error, Debug)]
pub enum OutboxError {
    #[error("storage quota exceeded: {attempted} bytes requested, {available} available")]
    QuotaExceeded { attempted: usize, available: usize },
    #[error("shared storage is unavailable: {0}")]
    Unavailable(String),
}

/// Ephemeral, page-scoped shared storage between the review workflow and
/// the external editing surface.
pub trait Outbox: Send + Sync {
    /// Stores `value` under `key`, overwriting any previous value.
    fn put(&self, key: &str, value: &str) -> Result<(), OutboxError>;

    /// Removes and returns the value under `key`, if any. A consumer
    /// observes a given `put` at most once.
    fn take_once(&self, key: &str) -> Option<String>;
}

/// The default in-process outbox.
///
/// An optional byte quota mirrors the limits of real page-scoped storage;
/// a `put` that would push the total size of all slots past the quota is
/// rejected with [`OutboxError::QuotaExceeded`].
pub struct MemoryOutbox {
    slots: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryOutbox {
    /// Creates an unbounded outbox.
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            quota: None,
        }
    }

    /// Creates an outbox that rejects writes once the total stored bytes
    /// (keys plus values) would exceed `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            quota: Some(bytes),
        }
    }
}

impl Default for MemoryOutbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Outbox for MemoryOutbox {
    fn put(&self, key: &str, value: &str) -> Result<(), OutboxError> {
        let mut slots = self.slots.lock().unwrap();

        if let Some(quota) = self.quota {
            // The slot being overwritten does not count against the quota.
            let occupied: usize = slots
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let attempted = key.len() + value.len();
            if occupied + attempted > quota {
                return Err(OutboxError::QuotaExceeded {
                    attempted,
                    available: quota.saturating_sub(occupied),
                });
            }
        }

        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn take_once(&self, key: &str) -> Option<String> {
        self.slots.lock().unwrap().remove(key)
    }
}
