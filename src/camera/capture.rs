//! Synchronous camera capture.
//!
//! Frames are pulled on demand from the calling thread: each call to
//! [`CameraCapture::capture_frame`] blocks until the device delivers one.

use super::frame_utils::{mirror_horizontal, resize_frame};
use super::types::{CameraError, CameraSettings};
use crate::buffer::PixelBuffer;

#[cfg(feature = "camera")]
use nokhwa::{
    pixel_format::RgbFormat,
    utils::{
        CameraFormat, CameraIndex, FrameFormat as NokhwaFrameFormat, RequestedFormat,
        RequestedFormatType,
    },
    Camera,
};

/// Open camera stream.
pub struct CameraCapture {
    #[cfg(feature = "camera")]
    camera: Camera,
    settings: CameraSettings,
}

impl std::fmt::Debug for CameraCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraCapture")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl CameraCapture {
    /// Open a camera and start its stream.
    ///
    /// # Errors
    /// * `CameraError::DeviceNotFound` - If the device index doesn't exist
    /// * `CameraError::PermissionDenied` - If camera access is denied (macOS)
    /// * `CameraError::OpenFailed` - If the camera fails to open for other reasons
    /// * `CameraError::StreamFailed` - If the camera stream fails to start
    /// * `CameraError::Unsupported` - If built without the `camera` feature
    #[cfg(feature = "camera")]
    pub fn open(settings: CameraSettings) -> Result<Self, CameraError> {
        let devices = super::device::list_devices()?;
        if !devices.iter().any(|d| d.index == settings.device_index) {
            return Err(CameraError::DeviceNotFound(settings.device_index));
        }

        let index = CameraIndex::Index(settings.device_index);
        let mut camera = open_camera_with_fallback(&index, &settings)?;
        camera
            .open_stream()
            .map_err(|e| CameraError::StreamFailed(e.to_string()))?;

        let res = camera.resolution();
        log::info!(
            "Camera {} streaming at {}x{} @ {} fps",
            settings.device_index,
            res.width(),
            res.height(),
            camera.frame_rate()
        );

        Ok(Self { camera, settings })
    }

    #[cfg(not(feature = "camera"))]
    pub fn open(settings: CameraSettings) -> Result<Self, CameraError> {
        log::debug!(
            "Camera {} requested but camera support is not compiled in",
            settings.device_index
        );
        Err(CameraError::Unsupported)
    }

    /// Capture one frame at the device's native size, in RGB order.
    ///
    /// # Errors
    /// * `CameraError::EmptyFrame` - If the device returns nothing or undecodable data
    #[cfg(feature = "camera")]
    pub fn capture_frame(&mut self) -> Result<PixelBuffer, CameraError> {
        let raw = self
            .camera
            .frame()
            .map_err(|e| CameraError::EmptyFrame(e.to_string()))?;
        // Handles MJPEG, YUYV, NV12 and friends
        let decoded = raw
            .decode_image::<RgbFormat>()
            .map_err(|e| CameraError::EmptyFrame(e.to_string()))?;

        let (width, height) = (decoded.width(), decoded.height());
        let data = decoded.into_raw();
        if width == 0 || height == 0 || data.is_empty() {
            return Err(CameraError::EmptyFrame("device returned an empty frame".to_string()));
        }
        Ok(PixelBuffer::from_bytes(width, height, 3, &data)?)
    }

    #[cfg(not(feature = "camera"))]
    pub fn capture_frame(&mut self) -> Result<PixelBuffer, CameraError> {
        Err(CameraError::Unsupported)
    }

    /// Capture one frame and scale it to the configured terminal width.
    pub fn capture_scaled(&mut self) -> Result<PixelBuffer, CameraError> {
        let frame = self.capture_frame()?;
        let mut scaled = resize_frame(&frame, self.settings.target_width, self.settings.aspect)?;
        if self.settings.mirror {
            mirror_horizontal(&mut scaled);
        }
        Ok(scaled)
    }
}

#[cfg(feature = "camera")]
impl Drop for CameraCapture {
    fn drop(&mut self) {
        let _ = self.camera.stop_stream();
    }
}

/// Try to open a camera with multiple format fallback strategies.
#[cfg(feature = "camera")]
fn open_camera_with_fallback(
    index: &CameraIndex,
    settings: &CameraSettings,
) -> Result<Camera, CameraError> {
    let resolution =
        nokhwa::utils::Resolution::new(settings.resolution.width, settings.resolution.height);

    // In order of preference:
    // 1. Closest match with NV12 (common on macOS)
    // 2. Closest match with MJPEG (widely supported)
    // 3. Highest resolution available (let camera decide format)
    let format_attempts = [
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(CameraFormat::new(
            resolution,
            NokhwaFrameFormat::NV12,
            settings.fps,
        ))),
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(CameraFormat::new(
            resolution,
            NokhwaFrameFormat::MJPEG,
            settings.fps,
        ))),
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution),
    ];

    let mut last_error = String::from("no capture format attempted");

    for requested in format_attempts {
        match Camera::new(index.clone(), requested) {
            Ok(cam) => return Ok(cam),
            Err(e) => {
                log::debug!("Camera format rejected: {}", e);
                last_error = e.to_string();
            }
        }
    }

    let msg = last_error.to_lowercase();
    if msg.contains("permission")
        || msg.contains("denied")
        || msg.contains("authorization")
        || msg.contains("access")
    {
        Err(CameraError::PermissionDenied)
    } else {
        Err(CameraError::OpenFailed(last_error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_open_invalid_device() {
        // Use a device index that is very unlikely to exist
        let settings = CameraSettings {
            device_index: 999,
            ..CameraSettings::default()
        };
        let err = CameraCapture::open(settings).unwrap_err();
        assert!(err.is_open_error(), "unexpected error: {:?}", err);
    }
}
