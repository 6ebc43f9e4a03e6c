// SPDX-License-Identifier: GPL-3.0-only

//! Global booth settings

use crate::constants::{DEFAULT_BACKGROUND_COLOR, preset_color};
use serde::{Deserialize, Serialize};

/// Session-wide preferences, applied when a photo is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Card color given to new photos (hex string)
    pub default_background_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }
}

/// Partial settings update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub default_background_color: Option<String>,
}

impl SettingsPatch {
    pub fn default_background_color(color: impl Into<String>) -> Self {
        Self {
            default_background_color: Some(color.into()),
        }
    }

    /// Merge into `settings`, returning whether anything changed
    pub(crate) fn apply_to(&self, settings: &mut Settings) -> bool {
        match &self.default_background_color {
            Some(color) if &settings.default_background_color != color => {
                settings.default_background_color.clone_from(color);
                true
            }
            _ => false,
        }
    }
}

/// Parse user color input into a lowercase `#rrggbb` string
///
/// Accepts preset names ("Lavender"), `#rgb` and `#rrggbb`. The store itself
/// does not validate colors; this is for input boundaries.
pub fn parse_color(input: &str) -> Option<String> {
    let input = input.trim();
    if let Some(preset) = preset_color(input) {
        return Some(preset.value.to_string());
    }

    let hex = input.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        6 => Some(format!("#{}", hex.to_ascii_lowercase())),
        3 => {
            let expanded: String = hex
                .chars()
                .flat_map(|c| {
                    let c = c.to_ascii_lowercase();
                    [c, c]
                })
                .collect();
            Some(format!("#{}", expanded))
        }
        _ => None,
    }
}
