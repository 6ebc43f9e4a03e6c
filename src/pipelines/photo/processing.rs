// SPDX-License-Identifier: MPL-2.0

//! Async post-processing for stills
//!
//! - RGBA to RGB conversion (drop alpha channel, honour row stride)
//! - Downscale to fit the capture bounds, keeping the aspect ratio
//! - Horizontal mirror, so the still matches a mirrored live preview

use super::capture::CameraFrame;
use crate::constants::capture::{MAX_HEIGHT, MAX_WIDTH};
use image::RgbImage;
use image::imageops::{self, FilterType};
use std::sync::Arc;
use tracing::{debug, info};

/// Post-processing configuration
#[derive(Debug, Clone)]
pub struct PostProcessingConfig {
    /// Flip horizontally (preview shown in selfie mode)
    pub mirror: bool,
    /// Maximum output width
    pub max_width: u32,
    /// Maximum output height
    pub max_height: u32,
}

impl Default for PostProcessingConfig {
    fn default() -> Self {
        Self {
            mirror: true,
            max_width: MAX_WIDTH,
            max_height: MAX_HEIGHT,
        }
    }
}

/// Processed image data
pub struct ProcessedImage {
    pub image: RgbImage,
    pub width: u32,
    pub height: u32,
}

/// Output size for a `width`×`height` frame inside the bounds
///
/// Frames already inside the bounds are left alone; larger ones are scaled
/// by the tighter of the two ratios. Never returns a zero dimension.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }
    let ratio = f64::min(
        max_width as f64 / width as f64,
        max_height as f64 / height as f64,
    );
    let fitted_width = ((width as f64 * ratio) as u32).max(1);
    let fitted_height = ((height as f64 * ratio) as u32).max(1);
    (fitted_width, fitted_height)
}

/// Post-processor for captured frames
pub struct PostProcessor {
    config: PostProcessingConfig,
}

impl PostProcessor {
    pub fn new(config: PostProcessingConfig) -> Self {
        Self { config }
    }

    /// Process a captured frame on a blocking task
    pub async fn process(&self, frame: Arc<CameraFrame>) -> Result<ProcessedImage, String> {
        info!(
            width = frame.width,
            height = frame.height,
            mirror = self.config.mirror,
            "Starting post-processing"
        );

        let config = self.config.clone();
        tokio::task::spawn_blocking(move || Self::process_blocking(&frame, &config))
            .await
            .map_err(|e| format!("Post-processing task error: {}", e))?
    }

    /// Synchronous body of [`Self::process`]
    pub fn process_blocking(
        frame: &CameraFrame,
        config: &PostProcessingConfig,
    ) -> Result<ProcessedImage, String> {
        let rgb = Self::convert_rgba_to_rgb(frame)?;

        let (width, height) =
            fit_within(frame.width, frame.height, config.max_width, config.max_height);
        let mut image = if (width, height) != (frame.width, frame.height) {
            debug!(width, height, "Downscaling still");
            imageops::resize(&rgb, width, height, FilterType::Triangle)
        } else {
            rgb
        };

        if config.mirror {
            imageops::flip_horizontal_in_place(&mut image);
        }

        debug!("Post-processing complete");

        Ok(ProcessedImage {
            width: image.width(),
            height: image.height(),
            image,
        })
    }

    /// Convert RGBA rows to an RGB image (drop alpha channel)
    fn convert_rgba_to_rgb(frame: &CameraFrame) -> Result<RgbImage, String> {
        let width = frame.width as usize;
        let height = frame.height as usize;
        let stride = frame.stride as usize;

        let mut rgb_data = Vec::with_capacity(width * height * 3);
        for row in 0..height {
            let start = row * stride;
            let end = start + width * 4;
            let pixels = frame.data.get(start..end).ok_or_else(|| {
                format!(
                    "RGBA data too small: row {} needs bytes {}..{}, got {}",
                    row,
                    start,
                    end,
                    frame.data.len()
                )
            })?;
            rgb_data.extend(
                pixels
                    .chunks_exact(4)
                    .flat_map(|rgba| [rgba[0], rgba[1], rgba[2]]),
            );
        }

        RgbImage::from_raw(frame.width, frame.height, rgb_data)
            .ok_or_else(|| "Failed to create RGB image from converted data".to_string())
    }
}
