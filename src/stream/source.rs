//! Frame sources for the streaming loop.

use super::StreamError;
use crate::buffer::PixelBuffer;
use crate::camera::{CameraCapture, CameraSettings};

/// Something that yields RGB frames, one per call.
pub trait FrameSource {
    /// Acquire the next frame. Blocks until one is available.
    fn next_frame(&mut self) -> Result<&PixelBuffer, StreamError>;
}

/// Replays one pre-loaded image forever.
///
/// Used to animate a still picture with the rainbow mode.
#[derive(Debug)]
pub struct StillSource {
    image: PixelBuffer,
}

impl StillSource {
    pub fn new(image: PixelBuffer) -> Self {
        Self { image }
    }

    /// Give the image back.
    pub fn into_inner(self) -> PixelBuffer {
        self.image
    }
}

impl FrameSource for StillSource {
    fn next_frame(&mut self) -> Result<&PixelBuffer, StreamError> {
        Ok(&self.image)
    }
}

/// Live frames from a webcam, scaled to the terminal width.
#[derive(Debug)]
pub struct CameraSource {
    capture: CameraCapture,
    frame: PixelBuffer,
}

impl CameraSource {
    /// Open the device described by `settings`.
    ///
    /// Fails with the camera's open error before any frame is processed.
    pub fn open(settings: CameraSettings) -> Result<Self, StreamError> {
        let capture = CameraCapture::open(settings)?;
        Ok(Self {
            capture,
            frame: PixelBuffer::default(),
        })
    }
}

impl FrameSource for CameraSource {
    fn next_frame(&mut self) -> Result<&PixelBuffer, StreamError> {
        // Previous frame is dropped here, one buffer alive at a time.
        self.frame = self.capture.capture_scaled()?;
        Ok(&self.frame)
    }
}
