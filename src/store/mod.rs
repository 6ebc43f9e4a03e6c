// SPDX-License-Identifier: GPL-3.0-only

//! Photo entity store
//!
//! The store is the single writer of all polaroid state:
//!
//! ```text
//! capture ──add_photo──▶ PhotoStore ──snapshot/subscribe──▶ canvas
//!                           │   ▲                             │
//!                           │   └──── update/front/remove ────┘
//!                           ▼
//!                     StateBackend (durable record)
//! ```
//!
//! Every mutation runs to completion on the caller's thread: the next
//! snapshot is computed, published to subscribers and handed to the backend.
//! Backend failures are logged and never undo the in-memory change; the
//! in-memory state is authoritative for the session.
//!
//! Operations on an unknown id are no-ops. They return `false` so callers can
//! tell, but nothing treats that as an error.

pub mod command;
pub mod photo;
pub mod settings;
pub mod state;

pub use command::StoreCommand;
pub use photo::{ImageData, NewPhoto, PhotoEntity, PhotoId, PhotoPatch, Position};
pub use settings::{Settings, SettingsPatch, parse_color};
pub use state::StoreState;

use crate::persistence::{MemoryBackend, StateBackend};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

pub struct PhotoStore {
    state: Arc<StoreState>,
    backend: Box<dyn StateBackend>,
    notifier: watch::Sender<Arc<StoreState>>,
}

impl PhotoStore {
    /// Open the store, rehydrating from `backend`
    ///
    /// A missing record starts an empty store; an unreadable one is logged
    /// and treated as missing.
    pub fn open(backend: impl StateBackend + 'static) -> Self {
        Self::open_boxed(Box::new(backend))
    }

    pub fn open_boxed(backend: Box<dyn StateBackend>) -> Self {
        let state = match backend.load() {
            Ok(Some(record)) => {
                let state = StoreState::from_record(record);
                info!(
                    photos = state.len(),
                    max_stack_order = state.max_stack_order(),
                    "Restored photo store"
                );
                state
            }
            Ok(None) => {
                debug!("No stored record, starting empty");
                StoreState::default()
            }
            Err(e) => {
                warn!(error = %e, "Failed to load stored record, starting empty");
                StoreState::default()
            }
        };

        let state = Arc::new(state);
        let (notifier, _) = watch::channel(Arc::clone(&state));

        Self {
            state,
            backend,
            notifier,
        }
    }

    /// Store without durable storage beyond the process
    pub fn in_memory() -> Self {
        Self::open(MemoryBackend::new())
    }

    /// Current snapshot (read-only, shared)
    pub fn snapshot(&self) -> Arc<StoreState> {
        Arc::clone(&self.state)
    }

    /// Receive a fresh snapshot after every applied mutation
    pub fn subscribe(&self) -> watch::Receiver<Arc<StoreState>> {
        self.notifier.subscribe()
    }

    /// Append a photo on top of the stack
    ///
    /// The incoming `stack_order` is ignored. A photo whose id is already in
    /// the collection is rejected to keep ids unique.
    pub fn add_photo(&mut self, photo: impl Into<PhotoEntity>) -> bool {
        let photo = photo.into();
        if self.state.contains(photo.id) {
            warn!(id = %photo.id, "Ignoring photo with duplicate id");
            return false;
        }
        let id = photo.id;
        Arc::make_mut(&mut self.state).add(photo);
        debug!(
            %id,
            stack_order = self.state.max_stack_order(),
            "Photo added"
        );
        self.commit();
        true
    }

    pub fn update_photo(&mut self, id: PhotoId, patch: PhotoPatch) -> bool {
        if patch.is_empty() || !self.state.contains(id) {
            return false;
        }
        let changed = Arc::make_mut(&mut self.state).update(id, &patch);
        if changed {
            debug!(%id, ?patch, "Photo updated");
            self.commit();
        }
        changed
    }

    pub fn remove_photo(&mut self, id: PhotoId) -> bool {
        if !self.state.contains(id) {
            return false;
        }
        Arc::make_mut(&mut self.state).remove(id);
        debug!(%id, "Photo removed");
        self.commit();
        true
    }

    /// Drop every photo and reset the stacking counter; settings stay
    pub fn clear_all_photos(&mut self) {
        let count = self.state.len();
        Arc::make_mut(&mut self.state).clear_photos();
        info!(count, "Cleared all photos");
        self.commit();
    }

    pub fn update_settings(&mut self, patch: SettingsPatch) -> bool {
        let changed = Arc::make_mut(&mut self.state).update_settings(&patch);
        if changed {
            debug!(settings = ?self.state.settings(), "Settings updated");
            self.commit();
        }
        changed
    }

    /// Give the photo the next stacking order, above everything else
    pub fn bring_to_front(&mut self, id: PhotoId) -> bool {
        if !self.state.contains(id) {
            return false;
        }
        Arc::make_mut(&mut self.state).bring_to_front(id);
        debug!(
            %id,
            stack_order = self.state.max_stack_order(),
            "Photo brought to front"
        );
        self.commit();
        true
    }

    /// Dispatch a command; returns whether the state changed
    pub fn apply(&mut self, command: StoreCommand) -> bool {
        let name = command.name();
        let changed = match command {
            StoreCommand::AddPhoto(photo) => self.add_photo(photo),
            StoreCommand::UpdatePhoto(id, patch) => self.update_photo(id, patch),
            StoreCommand::RemovePhoto(id) => self.remove_photo(id),
            StoreCommand::ClearAllPhotos => {
                self.clear_all_photos();
                true
            }
            StoreCommand::UpdateSettings(patch) => self.update_settings(patch),
            StoreCommand::BringToFront(id) => self.bring_to_front(id),
        };
        if !changed {
            debug!(command = name, "Command left state unchanged");
        }
        changed
    }

    /// Write the current state to the backend again
    pub fn persist(&self) {
        if let Err(e) = self.backend.save(&self.state.to_record()) {
            warn!(error = %e, "Failed to persist photo store");
        }
    }

    fn commit(&mut self) {
        self.notifier.send_replace(Arc::clone(&self.state));
        self.persist();
    }
}
