// SPDX-License-Identifier: GPL-3.0-only

//! Background record writer
//!
//! Store mutations should not wait on the disk. [`WriteBehind`] hands each
//! record to a dedicated thread and returns immediately. When records pile up
//! faster than they can be written, only the newest one is written.

use super::{DurableRecord, StateBackend};
use crate::errors::StorageError;
use std::sync::Arc;
use std::sync::mpsc::{self, Sender};
use std::thread::JoinHandle;
use tracing::{debug, error, warn};

pub struct WriteBehind<B: StateBackend + Sync + 'static> {
    backend: Arc<B>,
    sender: Option<Sender<DurableRecord>>,
    worker: Option<JoinHandle<()>>,
}

impl<B: StateBackend + Sync + 'static> WriteBehind<B> {
    /// Start the writer thread for `backend`
    pub fn spawn(backend: B) -> Result<Self, StorageError> {
        let backend = Arc::new(backend);
        let (sender, receiver) = mpsc::channel::<DurableRecord>();

        let worker_backend = Arc::clone(&backend);
        let worker = std::thread::Builder::new()
            .name("polaroid-writer".to_string())
            .spawn(move || {
                while let Ok(mut record) = receiver.recv() {
                    // Coalesce: only the newest pending record matters
                    let mut skipped = 0usize;
                    while let Ok(newer) = receiver.try_recv() {
                        record = newer;
                        skipped += 1;
                    }
                    if skipped > 0 {
                        debug!(skipped, "Coalesced pending records");
                    }
                    if let Err(e) = worker_backend.save(&record) {
                        warn!(error = %e, "Background write failed");
                    }
                }
                debug!("Record writer stopped");
            })?;

        Ok(Self {
            backend,
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    /// Stop accepting records and wait until the last one is written
    pub fn shutdown(&mut self) {
        drop(self.sender.take());
        if let Some(worker) = self.worker.take()
            && worker.join().is_err()
        {
            error!("Record writer thread panicked");
        }
    }
}

impl<B: StateBackend + Sync + 'static> StateBackend for WriteBehind<B> {
    fn load(&self) -> Result<Option<DurableRecord>, StorageError> {
        self.backend.load()
    }

    /// Queue `record`; errors only surface in the log
    fn save(&self, record: &DurableRecord) -> Result<(), StorageError> {
        let Some(sender) = &self.sender else {
            return self.backend.save(record);
        };
        if sender.send(record.clone()).is_err() {
            // Writer is gone; fall back to writing inline.
            return self.backend.save(record);
        }
        Ok(())
    }
}

impl<B: StateBackend + Sync + 'static> Drop for WriteBehind<B> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
