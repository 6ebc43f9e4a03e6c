// SPDX-License-Identifier: MPL-2.0

//! Integration tests for constants module

use polaroid_booth::constants::{
    CAPTION_MAX_CHARS, DEFAULT_BACKGROUND_COLOR, INITIAL_STACK_ORDER, PRESET_COLORS,
    STORAGE_FILE_NAME, STORAGE_KEY, capture, preset_color,
};
use polaroid_booth::store::parse_color;

#[test]
fn test_preset_colors() {
    // Six presets, White first as the default
    assert_eq!(PRESET_COLORS.len(), 6);
    assert_eq!(PRESET_COLORS[0].value, DEFAULT_BACKGROUND_COLOR);
}

#[test]
fn test_preset_colors_are_valid_hex() {
    for preset in PRESET_COLORS {
        assert!(!preset.name.is_empty(), "Preset has empty name");
        assert_eq!(
            parse_color(preset.value).as_deref(),
            Some(preset.value),
            "Preset {} is not a normalized hex color",
            preset.name
        );
    }
}

#[test]
fn test_preset_lookup_is_case_insensitive() {
    assert_eq!(preset_color("lavender").map(|p| p.value), Some("#e6e6fa"));
    assert!(preset_color("Chartreuse").is_none());
}

#[test]
fn test_store_limits() {
    assert_eq!(INITIAL_STACK_ORDER, 1);
    assert_eq!(CAPTION_MAX_CHARS, 40);
    assert_eq!((capture::MAX_WIDTH, capture::MAX_HEIGHT), (800, 800));
    assert!(STORAGE_FILE_NAME.starts_with(STORAGE_KEY));
}
