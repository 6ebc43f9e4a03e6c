// SPDX-License-Identifier: GPL-3.0-only

//! Durable storage for the photo store
//!
//! The whole store state is kept as a single JSON record under the
//! `polaroid-storage` key and rewritten after every mutation. Backends:
//!
//! - [`JsonFileBackend`]: record file in the user's data directory
//! - [`MemoryBackend`]: process-local, for tests and throwaway sessions
//! - [`WriteBehind`]: wraps another backend and writes on a background thread

pub mod file;
pub mod memory;
pub mod record;
pub mod writer;

pub use file::JsonFileBackend;
pub use memory::MemoryBackend;
pub use record::DurableRecord;
pub use writer::WriteBehind;

use crate::errors::StorageError;

/// A place the durable record lives
pub trait StateBackend: Send {
    /// Read the stored record; `Ok(None)` on first run
    fn load(&self) -> Result<Option<DurableRecord>, StorageError>;

    /// Replace the stored record
    fn save(&self, record: &DurableRecord) -> Result<(), StorageError>;
}

impl<B: StateBackend + ?Sized> StateBackend for Box<B> {
    fn load(&self) -> Result<Option<DurableRecord>, StorageError> {
        (**self).load()
    }

    fn save(&self, record: &DurableRecord) -> Result<(), StorageError> {
        (**self).save(record)
    }
}
