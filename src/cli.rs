// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for operating the booth headless
//!
//! Every command opens the stored canvas, applies one interaction and exits.
//! The store writes the record back before the process ends.

use polaroid_booth::CaptureError;
use polaroid_booth::pipelines::photo::PhotoCapture;
use polaroid_booth::store::{PhotoId, PhotoStore, StoreState, parse_color};
use polaroid_booth::{Booth, Config};
use std::error::Error;
use std::path::{Path, PathBuf};

type CliResult = Result<(), Box<dyn Error>>;

/// Default folder name for exported photos
const DEFAULT_EXPORT_FOLDER: &str = "Polaroids";

fn open_booth(config: &Config) -> Result<Booth, Box<dyn Error>> {
    let backend = config.open_backend()?;
    Ok(Booth::new(PhotoStore::open_boxed(backend), config))
}

/// Resolve a full id or a unique prefix of one
fn resolve_id(state: &StoreState, input: &str) -> Result<PhotoId, Box<dyn Error>> {
    if let Ok(id) = input.parse::<PhotoId>() {
        return if state.contains(id) {
            Ok(id)
        } else {
            Err(format!("No photo with id {}", id).into())
        };
    }

    let needle = input.to_ascii_lowercase();
    let mut matches = state
        .photos()
        .iter()
        .map(|photo| photo.id)
        .filter(|id| id.to_string().starts_with(&needle));

    match (matches.next(), matches.next()) {
        (Some(id), None) => Ok(id),
        (None, _) => Err(format!("No photo matching '{}'", input).into()),
        (Some(_), Some(_)) => Err(format!("Id prefix '{}' is ambiguous", input).into()),
    }
}

fn color_arg(input: &str) -> Result<String, Box<dyn Error>> {
    parse_color(input).ok_or_else(|| {
        format!(
            "Invalid color '{}' (use #rgb, #rrggbb or a preset name)",
            input
        )
        .into()
    })
}

/// Status text for a failed capture, with the detail logged
fn capture_failure(error: CaptureError) -> Box<dyn Error> {
    tracing::warn!(error = %error, "Capture failed");
    let mut message = error.user_message().to_string();
    if error.is_retryable() {
        message.push_str(" Run the command again once access is granted.");
    }
    message.into()
}

fn short_id(id: &PhotoId) -> String {
    id.to_string().chars().take(8).collect()
}

/// Capture a photo from an image file
pub fn snap(config: &Config, input: &Path) -> CliResult {
    let frame = PhotoCapture::capture_from_file(input).map_err(capture_failure)?;
    let mut booth = open_booth(config)?;

    if config.print_delay_ms > 0 {
        println!("Printing...");
    }

    let rt = tokio::runtime::Runtime::new()?;
    let id = rt.block_on(booth.snap(frame)).map_err(capture_failure)?;

    println!("Photo printed: {}", id);
    Ok(())
}

/// List photos bottom to top
pub fn list(config: &Config) -> CliResult {
    let booth = open_booth(config)?;
    let state = booth.store().snapshot();

    println!("Card color for new photos: {}", state.settings().default_background_color);

    if state.is_empty() {
        println!("Your photos will appear here (no photos yet).");
        return Ok(());
    }

    println!(
        "{} photo{} (bottom to top):",
        state.len(),
        if state.len() == 1 { "" } else { "s" }
    );
    println!();
    for photo in state.render_order() {
        println!(
            "  [{:>3}] {}  ({:>7.1}, {:>7.1})  {:>5.1}°  {}  \"{}\"",
            photo.stack_order,
            short_id(&photo.id),
            photo.position.x,
            photo.position.y,
            photo.rotation,
            photo.background_color,
            photo.caption
        );
    }

    Ok(())
}

pub fn move_photo(config: &Config, id: &str, x: f64, y: f64) -> CliResult {
    let mut booth = open_booth(config)?;
    let id = resolve_id(&booth.store().snapshot(), id)?;
    booth.move_photo(id, x, y);
    println!("Moved {} to ({}, {})", short_id(&id), x, y);
    Ok(())
}

pub fn caption(config: &Config, id: &str, text: &str) -> CliResult {
    let mut booth = open_booth(config)?;
    let id = resolve_id(&booth.store().snapshot(), id)?;
    booth.commit_caption(id, text);

    let state = booth.store().snapshot();
    if let Some(photo) = state.get(id) {
        println!("Caption for {}: \"{}\"", short_id(&id), photo.caption);
    }
    Ok(())
}

pub fn bring_to_front(config: &Config, id: &str) -> CliResult {
    let mut booth = open_booth(config)?;
    let id = resolve_id(&booth.store().snapshot(), id)?;
    booth.bring_to_front(id);
    println!("{} is now on top", short_id(&id));
    Ok(())
}

pub fn recolor(config: &Config, id: &str, color: &str) -> CliResult {
    let color = color_arg(color)?;
    let mut booth = open_booth(config)?;
    let id = resolve_id(&booth.store().snapshot(), id)?;
    booth.recolor_photo(id, &color);
    println!("Card color for {}: {}", short_id(&id), color);
    Ok(())
}

pub fn delete(config: &Config, id: &str) -> CliResult {
    let mut booth = open_booth(config)?;
    let id = resolve_id(&booth.store().snapshot(), id)?;
    booth.delete_photo(id);
    println!("Deleted {}", short_id(&id));
    Ok(())
}

pub fn clear(config: &Config) -> CliResult {
    let mut booth = open_booth(config)?;
    let count = booth.store().snapshot().len();
    if count == 0 {
        println!("No photos to delete.");
        return Ok(());
    }
    booth.clear_all();
    println!(
        "Deleted {} photo{}",
        count,
        if count == 1 { "" } else { "s" }
    );
    Ok(())
}

pub fn set_default_color(config: &Config, color: &str) -> CliResult {
    let color = color_arg(color)?;
    let mut booth = open_booth(config)?;
    booth.set_default_color(&color);
    println!("New photos will use {}", color);
    Ok(())
}

pub fn export(config: &Config, id: &str, output: Option<PathBuf>) -> CliResult {
    let booth = open_booth(config)?;
    let id = resolve_id(&booth.store().snapshot(), id)?;
    let dir = output.unwrap_or_else(get_default_export_dir);

    match booth.export_photo(id, &dir)? {
        Some(path) => println!("Photo saved: {}", path.display()),
        None => return Err(format!("No photo with id {}", id).into()),
    }
    Ok(())
}

/// Get default export directory
fn get_default_export_dir() -> PathBuf {
    dirs::picture_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join(DEFAULT_EXPORT_FOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use polaroid_booth::store::{ImageData, NewPhoto};

    fn store_with(ids: &[&str]) -> PhotoStore {
        let mut store = PhotoStore::in_memory();
        for id in ids {
            store.add_photo(NewPhoto {
                id: id.parse().unwrap(),
                image_data: ImageData::from("data:image/jpeg;base64,AAAA"),
                x: 50.0,
                y: 50.0,
                rotation: 0.0,
                caption: String::new(),
                created_at: Utc::now(),
                background_color: "#ffffff".to_string(),
            });
        }
        store
    }

    #[test]
    fn test_resolve_id_by_prefix() {
        let store = store_with(&[
            "6f1c2a4e-1d2b-4c3d-9e8f-0a1b2c3d4e5f",
            "6f9d0000-1d2b-4c3d-9e8f-0a1b2c3d4e5f",
        ]);
        let state = store.snapshot();

        let id = resolve_id(&state, "6F1C").unwrap();
        assert_eq!(id.to_string(), "6f1c2a4e-1d2b-4c3d-9e8f-0a1b2c3d4e5f");
        assert!(resolve_id(&state, "6f").is_err());
        assert!(resolve_id(&state, "abc").is_err());
    }

    #[test]
    fn test_capture_failure_uses_status_text() {
        let denied = capture_failure(CaptureError::PermissionDenied).to_string();
        assert!(denied.starts_with("Camera permission denied."));
        assert!(denied.contains("again"));

        let decode = capture_failure(CaptureError::DecodeFailed("bad header".into())).to_string();
        assert_eq!(
            decode,
            "Unable to access camera. Please check your device settings."
        );
    }

    #[test]
    fn test_snap_reports_unreadable_input() {
        let dir = std::env::temp_dir().join(format!("polaroid-booth-cli-{}", uuid::Uuid::new_v4()));
        let config = Config {
            storage_dir: Some(dir.clone()),
            print_delay_ms: 0,
            write_behind: false,
            ..Default::default()
        };

        let err = snap(&config, &dir.join("missing.png")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unable to access camera. Please check your device settings."
        );
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_color_arg() {
        assert_eq!(color_arg("Sky").unwrap(), "#e0f4ff");
        assert!(color_arg("blue-ish").is_err());
    }
}
