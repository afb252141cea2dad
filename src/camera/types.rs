//! Camera types and data structures.

use std::fmt;

use crate::buffer::BufferError;

/// Default output width in characters for live frames.
pub const DEFAULT_TARGET_WIDTH: u32 = 100;

/// Default row squash factor: terminal cells are roughly twice as tall as wide.
pub const DEFAULT_ASPECT: f32 = 0.55;

/// Information about an available camera device.
#[derive(Debug, Clone)]
pub struct CameraInfo {
    /// Device index for selection
    pub index: u32,
    /// Human-readable device name
    pub name: String,
    /// Device description
    pub description: String,
}

impl fmt::Display for CameraInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.index, self.name, self.description)
    }
}

/// Requested capture resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Medium resolution (640x480) - plenty for a 100-column frame
    pub const MEDIUM: Resolution = Resolution {
        width: 640,
        height: 480,
    };
}

impl Default for Resolution {
    fn default() -> Self {
        Self::MEDIUM
    }
}

/// Settings for camera capture.
#[derive(Debug, Clone)]
pub struct CameraSettings {
    /// Camera device index
    pub device_index: u32,
    /// Requested capture resolution
    pub resolution: Resolution,
    /// Requested FPS (actual may vary)
    pub fps: u32,
    /// Output width in characters after resizing
    pub target_width: u32,
    /// Row squash factor applied when resizing
    pub aspect: f32,
    /// Mirror horizontally (selfie mode)
    pub mirror: bool,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            device_index: 0,
            resolution: Resolution::default(),
            fps: 30,
            target_width: DEFAULT_TARGET_WIDTH,
            aspect: DEFAULT_ASPECT,
            mirror: false,
        }
    }
}

/// Errors that can occur during camera operations.
#[derive(Debug)]
pub enum CameraError {
    /// Binary was built without the `camera` feature
    Unsupported,
    /// Failed to query camera devices
    QueryFailed(String),
    /// Camera device not found at specified index
    DeviceNotFound(u32),
    /// Failed to open camera
    OpenFailed(String),
    /// Camera permission denied (macOS/iOS)
    PermissionDenied,
    /// Failed to start video stream
    StreamFailed(String),
    /// A capture returned no usable data
    EmptyFrame(String),
    /// Frame cannot be resized (not RGB, or zero-sized)
    InvalidFrame(String),
    /// Storage for a frame could not be created
    Buffer(BufferError),
}

impl CameraError {
    /// True for failures that happen before any frame is captured.
    pub fn is_open_error(&self) -> bool {
        matches!(
            self,
            CameraError::Unsupported
                | CameraError::QueryFailed(_)
                | CameraError::DeviceNotFound(_)
                | CameraError::OpenFailed(_)
                | CameraError::PermissionDenied
                | CameraError::StreamFailed(_)
        )
    }
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::Unsupported => write!(
                f,
                "Camera support not compiled in. Rebuild with `--features camera`"
            ),
            CameraError::QueryFailed(msg) => write!(f, "Failed to query cameras: {}", msg),
            CameraError::DeviceNotFound(index) => {
                write!(
                    f,
                    "Camera device {} not found. Run 'list-cameras' to see available devices",
                    index
                )
            }
            CameraError::OpenFailed(msg) => write!(f, "Failed to open camera: {}", msg),
            CameraError::PermissionDenied => {
                write!(
                    f,
                    "Camera permission denied. On macOS, grant access in System Settings > Privacy & Security > Camera"
                )
            }
            CameraError::StreamFailed(msg) => write!(f, "Failed to start camera stream: {}", msg),
            CameraError::EmptyFrame(msg) => write!(f, "No frame captured from the camera: {}", msg),
            CameraError::InvalidFrame(msg) => write!(f, "Invalid frame: {}", msg),
            CameraError::Buffer(e) => write!(f, "Frame buffer error: {}", e),
        }
    }
}

impl std::error::Error for CameraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CameraError::Buffer(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BufferError> for CameraError {
    fn from(e: BufferError) -> Self {
        CameraError::Buffer(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_info_display() {
        let info = CameraInfo {
            index: 0,
            name: "Test Camera".to_string(),
            description: "Built-in".to_string(),
        };
        assert_eq!(format!("{}", info), "[0] Test Camera (Built-in)");
    }

    #[test]
    fn test_camera_settings_default() {
        let settings = CameraSettings::default();
        assert_eq!(settings.device_index, 0);
        assert_eq!(settings.resolution, Resolution::MEDIUM);
        assert_eq!(settings.fps, 30);
        assert_eq!(settings.target_width, 100);
        assert!((settings.aspect - 0.55).abs() < f32::EPSILON);
        assert!(!settings.mirror);
    }

    #[test]
    fn test_camera_error_display() {
        assert_eq!(
            format!("{}", CameraError::QueryFailed("test".to_string())),
            "Failed to query cameras: test"
        );
        assert_eq!(
            format!("{}", CameraError::OpenFailed("test".to_string())),
            "Failed to open camera: test"
        );
        assert!(format!("{}", CameraError::PermissionDenied).contains("permission denied"));
        assert!(format!("{}", CameraError::DeviceNotFound(5)).contains("5"));
        assert!(format!("{}", CameraError::Unsupported).contains("--features camera"));
        assert_eq!(
            format!("{}", CameraError::EmptyFrame("disconnected".to_string())),
            "No frame captured from the camera: disconnected"
        );
    }

    #[test]
    fn test_open_error_classification() {
        assert!(CameraError::Unsupported.is_open_error());
        assert!(CameraError::DeviceNotFound(1).is_open_error());
        assert!(!CameraError::EmptyFrame(String::new()).is_open_error());
        assert!(!CameraError::InvalidFrame(String::new()).is_open_error());
    }
}
