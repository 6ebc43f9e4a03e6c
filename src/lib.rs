// SPDX-License-Identifier: MPL-2.0

//! Polaroid Booth - a photo booth that prints captures as polaroid cards
//!
//! Captured frames become draggable, captioned polaroids on a freeform
//! canvas. The arrangement is kept in a small entity store that persists
//! itself locally after every change.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`store`]: the photo entity store, single writer of all canvas state
//! - [`persistence`]: durable record backends (JSON file, memory, write-behind)
//! - [`pipelines`]: still capture, resize/mirror and JPEG encoding
//! - [`booth`]: capture → store orchestration and canvas interactions
//! - [`config`]: user configuration handling
//!
//! # Example
//!
//! ```
//! use polaroid_booth::store::{PhotoPatch, PhotoStore};
//!
//! let mut store = PhotoStore::in_memory();
//! assert!(!store.update_photo(uuid::Uuid::new_v4(), PhotoPatch::caption("hi")));
//! assert!(store.snapshot().is_empty());
//! ```

pub mod booth;
pub mod config;
pub mod constants;
pub mod errors;
pub mod persistence;
pub mod pipelines;
pub mod store;

// Re-export commonly used types
pub use booth::{Booth, Placement};
pub use config::Config;
pub use errors::{AppError, AppResult, CaptureError, StorageError};
pub use persistence::{DurableRecord, JsonFileBackend, MemoryBackend, StateBackend, WriteBehind};
pub use store::{
    NewPhoto, PhotoEntity, PhotoId, PhotoPatch, PhotoStore, Settings, SettingsPatch, StoreCommand,
    StoreState,
};
