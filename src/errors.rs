// SPDX-License-Identifier: MPL-2.0

//! Error types for the photo booth
//!
//! Store operations never fail from the caller's point of view. These types
//! cover the collaborators around the store: capture, durable storage,
//! configuration and export.

use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// Capture-related errors
    Capture(CaptureError),
    /// Durable storage errors
    Storage(StorageError),
    /// Configuration errors
    Config(String),
    /// Export errors (writing a photo out to disk)
    Export(String),
    /// Generic error with message
    Other(String),
}

/// Capture errors
///
/// These are shown to the user as a status message and never reach the store,
/// since no entity is created until a capture succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// No camera device is available
    NoCameraFound,
    /// The user (or platform) refused camera access
    PermissionDenied,
    /// No frame available for capture
    NoFrameAvailable,
    /// Input image could not be decoded into a frame
    DecodeFailed(String),
    /// Still could not be encoded
    EncodingFailed(String),
}

impl CaptureError {
    /// Status text shown in place of the live preview
    pub fn user_message(&self) -> &'static str {
        match self {
            CaptureError::PermissionDenied => {
                "Camera permission denied. Please allow access to use the camera."
            }
            CaptureError::NoCameraFound
            | CaptureError::NoFrameAvailable
            | CaptureError::DecodeFailed(_)
            | CaptureError::EncodingFailed(_) => {
                "Unable to access camera. Please check your device settings."
            }
        }
    }

    /// Whether the UI should offer a retry action
    pub fn is_retryable(&self) -> bool {
        matches!(self, CaptureError::PermissionDenied)
    }
}

/// Durable storage errors
///
/// The store logs these and keeps going; the in-memory state stays
/// authoritative for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Filesystem failure
    Io(String),
    /// Record could not be serialized
    Serialize(String),
    /// Stored record could not be parsed
    Deserialize(String),
    /// Backend refused the write because it is full
    QuotaExceeded,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Capture(e) => write!(f, "Capture error: {}", e),
            AppError::Storage(e) => write!(f, "Storage error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Export(msg) => write!(f, "Export error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::NoCameraFound => write!(f, "No camera devices found"),
            CaptureError::PermissionDenied => write!(f, "Camera permission denied"),
            CaptureError::NoFrameAvailable => write!(f, "No frame available for capture"),
            CaptureError::DecodeFailed(msg) => write!(f, "Decode failed: {}", msg),
            CaptureError::EncodingFailed(msg) => write!(f, "Encoding failed: {}", msg),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "I/O failure: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Failed to serialize record: {}", msg),
            StorageError::Deserialize(msg) => write!(f, "Failed to parse record: {}", msg),
            StorageError::QuotaExceeded => write!(f, "Storage quota exceeded"),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for CaptureError {}
impl std::error::Error for StorageError {}

impl From<CaptureError> for AppError {
    fn from(err: CaptureError) -> Self {
        AppError::Capture(err)
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err)
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Other(msg.to_string())
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.into())
    }
}

impl From<image::ImageError> for CaptureError {
    fn from(err: image::ImageError) -> Self {
        CaptureError::DecodeFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_is_retryable() {
        assert!(CaptureError::PermissionDenied.is_retryable());
        assert!(!CaptureError::NoCameraFound.is_retryable());
    }

    #[test]
    fn test_user_messages() {
        assert!(
            CaptureError::PermissionDenied
                .user_message()
                .contains("permission denied")
        );
        assert!(
            CaptureError::NoCameraFound
                .user_message()
                .starts_with("Unable to access camera")
        );
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let err: AppError = std::io::Error::other("disk gone").into();
        assert!(matches!(err, AppError::Storage(StorageError::Io(_))));
        assert_eq!(err.to_string(), "Storage error: I/O failure: disk gone");
    }
}
