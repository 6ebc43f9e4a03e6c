// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// Namespace key of the durable record
pub const STORAGE_KEY: &str = "polaroid-storage";

/// File name of the durable record inside the storage directory
pub const STORAGE_FILE_NAME: &str = "polaroid-storage.json";

/// Folder used under the platform config/data directories
pub const APP_FOLDER: &str = "polaroid-booth";

/// Config file name inside the config folder
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Initial value of the global stacking counter
///
/// The first photo added to an empty collection receives `INITIAL_STACK_ORDER + 1`.
pub const INITIAL_STACK_ORDER: u64 = 1;

/// Maximum caption length in characters (enforced when a caption edit is committed)
pub const CAPTION_MAX_CHARS: usize = 40;

/// Default polaroid background color
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";

/// Preset polaroid background colors offered in the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetColor {
    pub name: &'static str,
    pub value: &'static str,
}

pub const PRESET_COLORS: [PresetColor; 6] = [
    PresetColor {
        name: "White",
        value: "#ffffff",
    },
    PresetColor {
        name: "Ivory",
        value: "#fffff0",
    },
    PresetColor {
        name: "Pink",
        value: "#ffd1dc",
    },
    PresetColor {
        name: "Mint",
        value: "#d4f1f4",
    },
    PresetColor {
        name: "Sky",
        value: "#e0f4ff",
    },
    PresetColor {
        name: "Lavender",
        value: "#e6e6fa",
    },
];

/// Look up a preset color by name (case-insensitive)
pub fn preset_color(name: &str) -> Option<&'static PresetColor> {
    PRESET_COLORS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}

/// Capture bounds
pub mod capture {
    /// Maximum width of a captured still (aspect ratio preserved)
    pub const MAX_WIDTH: u32 = 800;
    /// Maximum height of a captured still (aspect ratio preserved)
    pub const MAX_HEIGHT: u32 = 800;
}

/// Initial placement ranges for new polaroids on the canvas
pub mod placement {
    /// Minimum x/y offset in canvas pixels
    pub const OFFSET_MIN: f64 = 50.0;
    /// Width of the x/y offset range in canvas pixels
    pub const OFFSET_SPAN: f64 = 100.0;
    /// Total rotation spread in degrees, centered on zero
    pub const ROTATION_SPREAD_DEG: f64 = 10.0;
}

/// UI timing constants
pub mod timing {
    /// Length of the "printing" animation before a photo lands on the canvas
    pub const PRINT_DELAY_MS: u64 = 1200;
}
