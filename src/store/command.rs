// SPDX-License-Identifier: GPL-3.0-only

//! Store commands
//!
//! Every mutation the presentation layer can request, as a value. Handlers
//! build one of these from a UI event and hand it to
//! [`PhotoStore::apply`](super::PhotoStore::apply).

use super::photo::{PhotoEntity, PhotoId, PhotoPatch};
use super::settings::SettingsPatch;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCommand {
    /// A finished capture lands on the canvas
    AddPhoto(PhotoEntity),
    /// Drag end, caption commit, recolor
    UpdatePhoto(PhotoId, PhotoPatch),
    /// Delete from the context menu
    RemovePhoto(PhotoId),
    /// "Clear All Photos" confirmation
    ClearAllPhotos,
    /// Settings panel change
    UpdateSettings(SettingsPatch),
    /// Pointer down on a polaroid
    BringToFront(PhotoId),
}

impl StoreCommand {
    /// Short name used in log fields
    pub fn name(&self) -> &'static str {
        match self {
            StoreCommand::AddPhoto(_) => "add_photo",
            StoreCommand::UpdatePhoto(..) => "update_photo",
            StoreCommand::RemovePhoto(_) => "remove_photo",
            StoreCommand::ClearAllPhotos => "clear_all_photos",
            StoreCommand::UpdateSettings(_) => "update_settings",
            StoreCommand::BringToFront(_) => "bring_to_front",
        }
    }
}
