// SPDX-License-Identifier: GPL-3.0-only

//! Photo entity model
//!
//! A [`PhotoEntity`] is one printed polaroid: the captured still plus its
//! placement, caption, card color and stacking order on the canvas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Unique photo identifier (random UUID v4)
pub type PhotoId = Uuid;

/// Canvas coordinate of a polaroid's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Encoded still payload, usually a `data:image/jpeg;base64,...` URL
///
/// Cloning is cheap; snapshots of the store share the payload.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageData(Arc<str>);

impl ImageData {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for ImageData {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl From<&str> for ImageData {
    fn from(value: &str) -> Self {
        Self(Arc::from(value))
    }
}

// Payloads are hundreds of kilobytes; keep them out of debug logs.
impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageData({} bytes)", self.0.len())
    }
}

/// One polaroid on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoEntity {
    /// Immutable identifier
    pub id: PhotoId,
    /// Immutable encoded still
    pub image_data: ImageData,
    /// Canvas position, updated when a drag ends
    #[serde(flatten)]
    pub position: Position,
    /// Card tilt in degrees
    pub rotation: f64,
    #[serde(default)]
    pub caption: String,
    /// Capture time, informational only
    pub created_at: DateTime<Utc>,
    /// Card color, copied from the settings when the photo was taken
    pub background_color: String,
    /// Visual layering, highest renders on top
    #[serde(default)]
    pub stack_order: u64,
}

/// Entity creation input handed over by the capture side
///
/// The store assigns the stacking order, so there is no field for it here.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPhoto {
    pub id: PhotoId,
    pub image_data: ImageData,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub caption: String,
    pub created_at: DateTime<Utc>,
    pub background_color: String,
}

impl From<NewPhoto> for PhotoEntity {
    fn from(photo: NewPhoto) -> Self {
        Self {
            id: photo.id,
            image_data: photo.image_data,
            position: Position::new(photo.x, photo.y),
            rotation: photo.rotation,
            caption: photo.caption,
            created_at: photo.created_at,
            background_color: photo.background_color,
            stack_order: 0,
        }
    }
}

/// Partial update of a photo's mutable fields
///
/// Unset fields are left untouched. `id`, `image_data` and `created_at` are
/// not representable here because they never change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoPatch {
    pub position: Option<Position>,
    pub rotation: Option<f64>,
    pub caption: Option<String>,
    pub background_color: Option<String>,
    pub stack_order: Option<u64>,
}

impl PhotoPatch {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            position: Some(Position::new(x, y)),
            ..Default::default()
        }
    }

    pub fn caption(caption: impl Into<String>) -> Self {
        Self {
            caption: Some(caption.into()),
            ..Default::default()
        }
    }

    pub fn background_color(color: impl Into<String>) -> Self {
        Self {
            background_color: Some(color.into()),
            ..Default::default()
        }
    }

    pub fn rotation(rotation: f64) -> Self {
        Self {
            rotation: Some(rotation),
            ..Default::default()
        }
    }

    pub fn stack_order(stack_order: u64) -> Self {
        Self {
            stack_order: Some(stack_order),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_none()
            && self.rotation.is_none()
            && self.caption.is_none()
            && self.background_color.is_none()
            && self.stack_order.is_none()
    }

    /// Apply the set fields to `photo`, returning whether anything changed
    pub(crate) fn apply_to(&self, photo: &mut PhotoEntity) -> bool {
        let mut changed = false;

        if let Some(position) = self.position
            && photo.position != position
        {
            photo.position = position;
            changed = true;
        }
        if let Some(rotation) = self.rotation
            && photo.rotation != rotation
        {
            photo.rotation = rotation;
            changed = true;
        }
        if let Some(caption) = &self.caption
            && &photo.caption != caption
        {
            photo.caption.clone_from(caption);
            changed = true;
        }
        if let Some(color) = &self.background_color
            && &photo.background_color != color
        {
            photo.background_color.clone_from(color);
            changed = true;
        }
        if let Some(stack_order) = self.stack_order
            && photo.stack_order != stack_order
        {
            photo.stack_order = stack_order;
            changed = true;
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PhotoEntity {
        NewPhoto {
            id: Uuid::new_v4(),
            image_data: ImageData::from("data:image/jpeg;base64,AAAA"),
            x: 75.5,
            y: 120.25,
            rotation: -2.5,
            caption: String::new(),
            created_at: Utc::now(),
            background_color: "#ffffff".to_string(),
        }
        .into()
    }

    #[test]
    fn test_new_photo_starts_unstacked() {
        let photo = sample();
        assert_eq!(photo.stack_order, 0);
        assert_eq!(photo.position, Position::new(75.5, 120.25));
    }

    #[test]
    fn test_patch_applies_only_set_fields() {
        let mut photo = sample();
        let before = photo.clone();

        let changed = PhotoPatch::caption("beach day").apply_to(&mut photo);
        assert!(changed);
        assert_eq!(photo.caption, "beach day");
        assert_eq!(photo.position, before.position);
        assert_eq!(photo.background_color, before.background_color);
    }

    #[test]
    fn test_patch_reports_unchanged() {
        let mut photo = sample();
        let patch = PhotoPatch::position(photo.position.x, photo.position.y);
        assert!(!patch.apply_to(&mut photo));
        assert!(PhotoPatch::default().is_empty());
    }

    #[test]
    fn test_entity_json_uses_flat_camel_case_fields() {
        let photo = sample();
        let value = serde_json::to_value(&photo).unwrap();

        assert_eq!(value["x"], 75.5);
        assert_eq!(value["y"], 120.25);
        assert_eq!(value["imageData"], "data:image/jpeg;base64,AAAA");
        assert_eq!(value["backgroundColor"], "#ffffff");
        assert_eq!(value["stackOrder"], 0);
        assert!(value.get("position").is_none());
    }

    #[test]
    fn test_image_data_debug_hides_payload() {
        let data = ImageData::from("data:image/jpeg;base64,AAAA");
        assert_eq!(format!("{:?}", data), "ImageData(27 bytes)");
    }
}
