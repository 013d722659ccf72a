// SPDX-License-Identifier: MIT

//! State stores behind narrow trait interfaces.
//!
//! Handlers only see the traits, so the in-memory backing can be swapped for
//! a persistent store without touching handler logic.

pub mod memory;

pub use memory::{MemoryActivationStore, MemorySessionLedger};

use crate::models::{ActivationRecord, CallerIdentity, SessionRecord};

/// Why a session could not be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumeError {
    /// No activation record exists for the caller
    NotActivated,
    /// Activated, but the quota is exhausted
    NoSessions,
}

/// Activated devices, keyed by caller identity.
pub trait ActivationStore: Send + Sync {
    fn get(&self, identity: &CallerIdentity) -> Option<ActivationRecord>;

    /// Create or overwrite the caller's activation. Re-activation resets the
    /// quota; it never accumulates.
    fn put(&self, identity: CallerIdentity, record: ActivationRecord);

    /// Remove the caller's activation (logout hook). Idempotent.
    fn remove(&self, identity: &CallerIdentity);

    /// Atomically check-and-decrement the caller's remaining quota.
    ///
    /// Returns the updated `sessions_remaining`. The check and the decrement
    /// must be serialized per identity; a failed call mutates nothing.
    fn consume_session(&self, identity: &CallerIdentity) -> Result<u32, ConsumeError>;
}

/// Started coaching sessions, keyed by session token.
pub trait SessionLedger: Send + Sync {
    fn insert(&self, record: SessionRecord);

    fn get(&self, session_id: &str) -> Option<SessionRecord>;

    /// Mark a session finished and store its summary, returning the stored
    /// summary. Re-finishing is accepted and overwrites the summary.
    /// Returns `None` for an unknown session id.
    fn finish(&self, session_id: &str, summary: String) -> Option<String>;
}
