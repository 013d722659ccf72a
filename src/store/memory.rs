// SPDX-License-Identifier: MIT

//! In-memory store implementations backed by `DashMap`.

use dashmap::DashMap;

use crate::models::{ActivationRecord, CallerIdentity, SessionRecord};
use crate::store::{ActivationStore, ConsumeError, SessionLedger};

/// Activated devices held in process memory.
#[derive(Default)]
pub struct MemoryActivationStore {
    records: DashMap<CallerIdentity, ActivationRecord>,
}

impl MemoryActivationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ActivationStore for MemoryActivationStore {
    fn get(&self, identity: &CallerIdentity) -> Option<ActivationRecord> {
        self.records.get(identity).map(|r| r.clone())
    }

    fn put(&self, identity: CallerIdentity, record: ActivationRecord) {
        self.records.insert(identity, record);
    }

    fn remove(&self, identity: &CallerIdentity) {
        self.records.remove(identity);
    }

    fn consume_session(&self, identity: &CallerIdentity) -> Result<u32, ConsumeError> {
        // get_mut holds the entry's shard write lock, so the check and the
        // decrement are serialized per identity.
        match self.records.get_mut(identity) {
            None => Err(ConsumeError::NotActivated),
            Some(mut record) => {
                if record.sessions_remaining == 0 {
                    return Err(ConsumeError::NoSessions);
                }
                record.sessions_remaining -= 1;
                Ok(record.sessions_remaining)
            }
        }
    }
}

/// Started sessions held in process memory. Never pruned.
#[derive(Default)]
pub struct MemorySessionLedger {
    sessions: DashMap<String, SessionRecord>,
}

impl MemorySessionLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionLedger for MemorySessionLedger {
    fn insert(&self, record: SessionRecord) {
        self.sessions.insert(record.session_id.clone(), record);
    }

    fn get(&self, session_id: &str) -> Option<SessionRecord> {
        self.sessions.get(session_id).map(|r| r.clone())
    }

    fn finish(&self, session_id: &str, summary: String) -> Option<String> {
        let mut record = self.sessions.get_mut(session_id)?;
        record.finished = true;
        record.summary = Some(summary.clone());
        Some(summary)
    }
}
