// SPDX-License-Identifier: MPL-2.0

//! Async still pipeline
//!
//! ```text
//! Camera frame → Capture → Post-Processing → Encoding → data URL
//! ```
//!
//! # Pipeline Stages
//!
//! 1. **Capture**: take the current frame (or decode a file when headless)
//! 2. **Post-Processing**: fit within 800×800 and mirror to match the preview
//! 3. **Encoding**: JPEG at the configured quality, wrapped as a data URL
//!
//! The result is handed to the booth, which builds the photo entity. Nothing
//! here touches the store.

pub mod capture;
pub mod encoding;
pub mod processing;

pub use capture::{CameraFrame, PhotoCapture};
pub use encoding::{DataUrl, EncodedStill, EncodingQuality, PhotoEncoder, decode_data_url};
pub use processing::{PostProcessingConfig, PostProcessor, fit_within};

use crate::errors::CaptureError;
use std::sync::Arc;
use tracing::debug;

/// Complete still pipeline: frame → processed → encoded
pub struct StillPipeline {
    post_processor: PostProcessor,
    encoder: PhotoEncoder,
}

impl StillPipeline {
    pub fn new(processing_config: PostProcessingConfig, quality: EncodingQuality) -> Self {
        Self {
            post_processor: PostProcessor::new(processing_config),
            encoder: PhotoEncoder::new(quality),
        }
    }

    /// Turn a frame into an encoded still
    pub async fn process(&self, frame: Arc<CameraFrame>) -> Result<EncodedStill, CaptureError> {
        let processed = self
            .post_processor
            .process(frame)
            .await
            .map_err(CaptureError::EncodingFailed)?;

        let encoded = self
            .encoder
            .encode(processed)
            .await
            .map_err(CaptureError::EncodingFailed)?;

        debug!(
            width = encoded.width,
            height = encoded.height,
            bytes = encoded.data.len(),
            "Still ready"
        );
        Ok(encoded)
    }
}
