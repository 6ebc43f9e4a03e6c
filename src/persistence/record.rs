// SPDX-License-Identifier: GPL-3.0-only

use crate::constants::INITIAL_STACK_ORDER;
use crate::errors::StorageError;
use crate::store::{PhotoEntity, Settings};
use serde::{Deserialize, Serialize};

/// Persisted snapshot of the entire store
///
/// Layout: `{ "photos": [...], "settings": {...}, "maxStackOrder": n }`.
/// There is no schema version; missing fields fall back to defaults and
/// unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurableRecord {
    #[serde(default)]
    pub photos: Vec<PhotoEntity>,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default = "initial_stack_order")]
    pub max_stack_order: u64,
}

fn initial_stack_order() -> u64 {
    INITIAL_STACK_ORDER
}

impl Default for DurableRecord {
    fn default() -> Self {
        Self {
            photos: Vec::new(),
            settings: Settings::default(),
            max_stack_order: INITIAL_STACK_ORDER,
        }
    }
}

impl DurableRecord {
    pub fn to_json(&self) -> Result<String, StorageError> {
        serde_json::to_string(self).map_err(|e| StorageError::Serialize(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        serde_json::from_str(json).map_err(|e| StorageError::Deserialize(e.to_string()))
    }
}
