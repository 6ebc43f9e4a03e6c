// SPDX-License-Identifier: MPL-2.0

//! Photo capture
//!
//! Turns whatever the camera side has (a live preview frame, or an image file
//! when running headless) into a [`CameraFrame`] ready for the pipeline.

use crate::errors::CaptureError;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Raw RGBA frame
#[derive(Debug, Clone)]
pub struct CameraFrame {
    pub width: u32,
    pub height: u32,
    /// RGBA bytes, `stride` bytes per row
    pub data: Arc<[u8]>,
    pub stride: u32,
    pub captured_at: Instant,
}

impl CameraFrame {
    /// Tightly packed RGBA frame
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data: Arc::from(data),
            stride: width.saturating_mul(4),
            captured_at: Instant::now(),
        }
    }

    fn expected_len(&self) -> usize {
        if self.height == 0 {
            return 0;
        }
        (self.stride as usize) * (self.height as usize - 1) + (self.width as usize) * 4
    }
}

/// Photo capture handler
pub struct PhotoCapture;

impl PhotoCapture {
    /// Use the current preview frame as the still
    ///
    /// # Returns
    /// * `Ok(Arc<CameraFrame>)` - Frame wrapped in Arc
    /// * `Err(CaptureError)` - Frame is empty or truncated
    pub fn capture_from_frame(frame: CameraFrame) -> Result<Arc<CameraFrame>, CaptureError> {
        let row_bytes = match frame.width.checked_mul(4) {
            Some(row_bytes) if frame.width > 0 && frame.height > 0 => row_bytes,
            _ => return Err(CaptureError::NoFrameAvailable),
        };
        if frame.stride < row_bytes {
            return Err(CaptureError::NoFrameAvailable);
        }
        if frame.data.len() < frame.expected_len() {
            return Err(CaptureError::DecodeFailed(format!(
                "frame data too small: expected {}, got {}",
                frame.expected_len(),
                frame.data.len()
            )));
        }

        debug!(
            width = frame.width,
            height = frame.height,
            "Using current preview frame for photo"
        );

        Ok(Arc::new(frame))
    }

    /// Decode an image file into a frame (headless capture)
    pub fn capture_from_file(path: &Path) -> Result<Arc<CameraFrame>, CaptureError> {
        info!(path = %path.display(), "Capturing photo from file");

        let image = image::open(path)?.to_rgba8();
        let (width, height) = image.dimensions();

        Self::capture_from_frame(CameraFrame::from_rgba(width, height, image.into_raw()))
    }

    /// Capture from the latest preview frame, if the camera produced one
    pub fn capture_latest(latest: Option<CameraFrame>) -> Result<Arc<CameraFrame>, CaptureError> {
        match latest {
            Some(frame) => Self::capture_from_frame(frame),
            None => Err(CaptureError::NoFrameAvailable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_from_frame() {
        let frame = CameraFrame::from_rgba(1280, 720, vec![0u8; 1280 * 720 * 4]);

        let captured = PhotoCapture::capture_from_frame(frame).unwrap();
        assert_eq!(captured.width, 1280);
        assert_eq!(captured.height, 720);
    }

    #[test]
    fn test_truncated_frame_is_rejected() {
        let frame = CameraFrame::from_rgba(4, 4, vec![0u8; 10]);
        assert!(matches!(
            PhotoCapture::capture_from_frame(frame),
            Err(CaptureError::DecodeFailed(_))
        ));
    }

    #[test]
    fn test_no_frame() {
        assert_eq!(
            PhotoCapture::capture_latest(None).unwrap_err(),
            CaptureError::NoFrameAvailable
        );
    }

    #[test]
    fn test_oversized_width_is_rejected() {
        let frame = CameraFrame {
            width: (1 << 30) + 1,
            height: 1,
            data: Arc::from(vec![0u8; 16]),
            stride: u32::MAX,
            captured_at: Instant::now(),
        };
        assert_eq!(
            PhotoCapture::capture_from_frame(frame).unwrap_err(),
            CaptureError::NoFrameAvailable
        );

        let packed = CameraFrame::from_rgba((1 << 30) + 1, 1, vec![0u8; 16]);
        assert_eq!(packed.stride, u32::MAX);
        assert_eq!(
            PhotoCapture::capture_from_frame(packed).unwrap_err(),
            CaptureError::NoFrameAvailable
        );
    }

    #[test]
    fn test_padded_stride_is_accepted() {
        let mut frame = CameraFrame::from_rgba(2, 2, vec![0u8; 24]);
        frame.stride = 12;
        assert!(PhotoCapture::capture_from_frame(frame).is_ok());
    }
}
