// SPDX-License-Identifier: GPL-3.0-only

//! Immutable store snapshot and its transitions
//!
//! [`StoreState`] is the whole canonical state: the photo collection (in
//! capture order), the settings and the global stacking counter. Each
//! transition takes one snapshot to the next; [`super::PhotoStore`] owns the
//! current one and hands out shared copies.

use super::photo::{PhotoEntity, PhotoId, PhotoPatch};
use super::settings::{Settings, SettingsPatch};
use crate::constants::INITIAL_STACK_ORDER;
use crate::persistence::DurableRecord;
use std::collections::HashSet;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct StoreState {
    photos: Vec<PhotoEntity>,
    settings: Settings,
    max_stack_order: u64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            photos: Vec::new(),
            settings: Settings::default(),
            max_stack_order: INITIAL_STACK_ORDER,
        }
    }
}

impl StoreState {
    /// Photos in insertion (capture) order
    pub fn photos(&self) -> &[PhotoEntity] {
        &self.photos
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current value of the global stacking counter
    pub fn max_stack_order(&self) -> u64 {
        self.max_stack_order
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn get(&self, id: PhotoId) -> Option<&PhotoEntity> {
        self.photos.iter().find(|photo| photo.id == id)
    }

    pub fn contains(&self, id: PhotoId) -> bool {
        self.get(id).is_some()
    }

    /// Photos bottom-to-top; ties keep capture order
    pub fn render_order(&self) -> Vec<&PhotoEntity> {
        let mut ordered: Vec<&PhotoEntity> = self.photos.iter().collect();
        ordered.sort_by_key(|photo| photo.stack_order);
        ordered
    }

    /// Rebuild a snapshot from a durable record
    ///
    /// Records written by other tools may carry duplicate ids or a counter
    /// below the highest stacking order; both are repaired here so the
    /// invariants hold from the first operation on.
    pub fn from_record(record: DurableRecord) -> Self {
        let mut seen = HashSet::with_capacity(record.photos.len());
        let mut photos = Vec::with_capacity(record.photos.len());
        for photo in record.photos {
            if seen.insert(photo.id) {
                photos.push(photo);
            } else {
                warn!(id = %photo.id, "Dropping duplicate photo from stored record");
            }
        }

        let highest = photos
            .iter()
            .map(|photo| photo.stack_order)
            .max()
            .unwrap_or(INITIAL_STACK_ORDER);
        let max_stack_order = record
            .max_stack_order
            .max(highest)
            .max(INITIAL_STACK_ORDER);

        Self {
            photos,
            settings: record.settings,
            max_stack_order,
        }
    }

    pub fn to_record(&self) -> DurableRecord {
        DurableRecord {
            photos: self.photos.clone(),
            settings: self.settings.clone(),
            max_stack_order: self.max_stack_order,
        }
    }

    fn next_stack_order(&mut self) -> u64 {
        self.max_stack_order += 1;
        self.max_stack_order
    }

    pub(crate) fn add(&mut self, mut photo: PhotoEntity) -> bool {
        if self.contains(photo.id) {
            return false;
        }
        photo.stack_order = self.next_stack_order();
        self.photos.push(photo);
        true
    }

    pub(crate) fn update(&mut self, id: PhotoId, patch: &PhotoPatch) -> bool {
        let Some(photo) = self.photos.iter_mut().find(|photo| photo.id == id) else {
            return false;
        };
        let changed = patch.apply_to(photo);
        if let Some(stack_order) = patch.stack_order
            && stack_order > self.max_stack_order
        {
            self.max_stack_order = stack_order;
        }
        changed
    }

    pub(crate) fn remove(&mut self, id: PhotoId) -> bool {
        let before = self.photos.len();
        self.photos.retain(|photo| photo.id != id);
        self.photos.len() != before
    }

    pub(crate) fn clear_photos(&mut self) {
        self.photos.clear();
        self.max_stack_order = INITIAL_STACK_ORDER;
    }

    pub(crate) fn update_settings(&mut self, patch: &SettingsPatch) -> bool {
        patch.apply_to(&mut self.settings)
    }

    pub(crate) fn bring_to_front(&mut self, id: PhotoId) -> bool {
        let Some(index) = self.photos.iter().position(|photo| photo.id == id) else {
            return false;
        };
        let stack_order = self.next_stack_order();
        self.photos[index].stack_order = stack_order;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::photo::{ImageData, NewPhoto};
    use chrono::Utc;
    use uuid::Uuid;

    fn photo() -> PhotoEntity {
        NewPhoto {
            id: Uuid::new_v4(),
            image_data: ImageData::from("data:image/jpeg;base64,AAAA"),
            x: 60.0,
            y: 80.0,
            rotation: 1.5,
            caption: String::new(),
            created_at: Utc::now(),
            background_color: "#ffffff".to_string(),
        }
        .into()
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut state = StoreState::default();
        let p = photo();
        assert!(state.add(p.clone()));
        assert!(!state.add(p));
        assert_eq!(state.len(), 1);
        assert_eq!(state.max_stack_order(), 2);
    }

    #[test]
    fn test_bring_to_front_missing_leaves_counter() {
        let mut state = StoreState::default();
        state.add(photo());
        assert!(!state.bring_to_front(Uuid::new_v4()));
        assert_eq!(state.max_stack_order(), 2);
    }

    #[test]
    fn test_explicit_stack_order_lifts_counter() {
        let mut state = StoreState::default();
        let p = photo();
        let id = p.id;
        state.add(p);
        state.update(id, &PhotoPatch::stack_order(10));
        assert_eq!(state.max_stack_order(), 10);

        state.add(photo());
        assert_eq!(state.photos()[1].stack_order, 11);
    }

    #[test]
    fn test_render_order_ties_keep_capture_order() {
        let mut state = StoreState::default();
        let a = photo();
        let b = photo();
        let (a_id, b_id) = (a.id, b.id);
        state.add(a);
        state.add(b);
        state.update(a_id, &PhotoPatch::stack_order(3));

        let order: Vec<PhotoId> = state.render_order().iter().map(|p| p.id).collect();
        assert_eq!(order, vec![a_id, b_id]);
    }

    #[test]
    fn test_from_record_repairs_invariants() {
        let mut first = photo();
        first.stack_order = 7;
        let duplicate = first.clone();
        let record = DurableRecord {
            photos: vec![first, duplicate],
            settings: Settings::default(),
            max_stack_order: 3,
        };

        let state = StoreState::from_record(record);
        assert_eq!(state.len(), 1);
        assert_eq!(state.max_stack_order(), 7);
    }
}
