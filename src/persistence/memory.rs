// SPDX-License-Identifier: GPL-3.0-only

//! In-process backend

use super::{DurableRecord, StateBackend};
use crate::errors::StorageError;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Inner {
    json: Option<String>,
    fail_writes: bool,
    saves: usize,
}

/// Keeps the serialized record in memory
///
/// Clones share the same slot, so a test can hand one clone to the store and
/// inspect what was written through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend holding raw text, for exercising unreadable records
    pub fn with_raw(json: impl Into<String>) -> Self {
        let backend = Self::new();
        backend.lock().json = Some(json.into());
        backend
    }

    /// Make every following save fail with [`StorageError::QuotaExceeded`]
    pub fn set_fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Last successfully written record
    pub fn stored(&self) -> Option<DurableRecord> {
        let json = self.lock().json.clone()?;
        DurableRecord::from_json(&json).ok()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panicked writer cannot leave the slot half-written; keep going.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StateBackend for MemoryBackend {
    fn load(&self) -> Result<Option<DurableRecord>, StorageError> {
        match &self.lock().json {
            Some(json) => DurableRecord::from_json(json).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, record: &DurableRecord) -> Result<(), StorageError> {
        let json = record.to_json()?;
        let mut inner = self.lock();
        if inner.fail_writes {
            return Err(StorageError::QuotaExceeded);
        }
        inner.json = Some(json);
        inner.saves += 1;
        Ok(())
    }
}
