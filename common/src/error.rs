//! Error taxonomy
//!
//! Camera failures and recognition failures are separate enums so the UI can
//! tell a device problem apart from a backend problem. Every message is
//! user-visible; none of these are fatal to the app.

use thiserror::Error;

/// Camera adapter failures. All locally recoverable: the user can retry or
/// fall back to the upload tab.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    #[error("Your browser does not support camera access. Please use the upload option instead.")]
    Unavailable,

    #[error("Camera access was denied. Please check your browser permissions.")]
    PermissionDenied,

    #[error("Camera error: {0}")]
    Device(String),
}

/// Recognition client failures. No retries are performed; the user re-triggers
/// the analyze button manually.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecognizeError {
    /// Network or HTTP-status failure before a body could be read.
    #[error("Network error: {0}")]
    Transport(String),

    /// The backend answered but flagged the analysis as failed.
    #[error("{0}")]
    Backend(String),

    /// The body could not be decoded into the expected shape.
    #[error("Unexpected response from the server: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_error_display() {
        assert!(CameraError::Unavailable.to_string().contains("upload option"));
        assert!(CameraError::PermissionDenied.to_string().contains("denied"));
        let err = CameraError::Device("NotFoundError".to_string());
        assert_eq!(err.to_string(), "Camera error: NotFoundError");
    }

    #[test]
    fn test_recognize_error_backend_is_verbatim() {
        let err = RecognizeError::Backend("no label found".to_string());
        assert_eq!(err.to_string(), "no label found");
    }

    #[test]
    fn test_recognize_error_transport_display() {
        let err = RecognizeError::Transport("server returned HTTP 502".to_string());
        assert_eq!(err.to_string(), "Network error: server returned HTTP 502");
    }

    #[test]
    fn test_camera_error_eq() {
        assert_eq!(CameraError::PermissionDenied, CameraError::PermissionDenied);
        assert_ne!(
            CameraError::PermissionDenied,
            CameraError::Device("x".to_string())
        );
    }
}
