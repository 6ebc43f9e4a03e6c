// SPDX-License-Identifier: GPL-3.0-only

//! Async still encoding
//!
//! Stills are stored inline in the durable record, so they are encoded as
//! JPEG (lossy, compact) and wrapped in a base64 data URL.

use super::processing::ProcessedImage;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::RgbImage;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// MIME type of encoded stills
pub const JPEG_MIME: &str = "image/jpeg";

/// Encoding quality settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EncodingQuality {
    /// Low quality (high compression)
    Low,
    /// Medium quality (balanced, default for polaroids)
    #[default]
    Medium,
    /// High quality (low compression)
    High,
    /// Maximum quality (minimal compression)
    Maximum,
}

impl EncodingQuality {
    /// Get JPEG quality value (0-100)
    pub fn jpeg_quality(&self) -> u8 {
        match self {
            EncodingQuality::Low => 60,
            EncodingQuality::Medium => 80,
            EncodingQuality::High => 92,
            EncodingQuality::Maximum => 98,
        }
    }
}

/// Encoded still ready to become a photo payload
pub struct EncodedStill {
    pub data: Vec<u8>,
    pub mime: &'static str,
    pub width: u32,
    pub height: u32,
}

impl EncodedStill {
    /// `data:<mime>;base64,<payload>`
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.data))
    }
}

/// Decoded data URL payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl DataUrl {
    /// File extension for the payload's MIME type
    pub fn extension(&self) -> &'static str {
        match self.mime.as_str() {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/png" => "png",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "bin",
        }
    }
}

/// Parse a base64 `data:` URL; `None` for anything else
pub fn decode_data_url(url: &str) -> Option<DataUrl> {
    let rest = url.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let mime = header.strip_suffix(";base64")?;
    let bytes = STANDARD.decode(payload.trim()).ok()?;
    Some(DataUrl {
        mime: if mime.is_empty() {
            "text/plain".to_string()
        } else {
            mime.to_string()
        },
        bytes,
    })
}

/// Photo encoder
pub struct PhotoEncoder {
    quality: EncodingQuality,
}

impl PhotoEncoder {
    pub fn new(quality: EncodingQuality) -> Self {
        Self { quality }
    }

    /// Encode a processed image on a blocking task
    pub async fn encode(&self, processed: ProcessedImage) -> Result<EncodedStill, String> {
        info!(
            width = processed.width,
            height = processed.height,
            quality = self.quality.jpeg_quality(),
            "Starting encoding"
        );

        let quality = self.quality;
        tokio::task::spawn_blocking(move || {
            let data = Self::encode_jpeg(&processed.image, quality)?;

            debug!(size = data.len(), "Encoding complete");

            Ok(EncodedStill {
                data,
                mime: JPEG_MIME,
                width: processed.width,
                height: processed.height,
            })
        })
        .await
        .map_err(|e| format!("Encoding task error: {}", e))?
    }

    /// Encode image as JPEG
    fn encode_jpeg(image: &RgbImage, quality: EncodingQuality) -> Result<Vec<u8>, String> {
        let mut buffer = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buffer);

        let mut encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, quality.jpeg_quality());

        encoder
            .encode(
                image.as_raw(),
                image.width(),
                image.height(),
                image::ExtendedColorType::Rgb8,
            )
            .map_err(|e| format!("JPEG encoding failed: {}", e))?;

        Ok(buffer)
    }
}

impl Default for PhotoEncoder {
    fn default() -> Self {
        Self::new(EncodingQuality::default())
    }
}
