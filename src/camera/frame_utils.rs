//! Frame resizing and transformation utilities.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Rgb};

use super::types::CameraError;
use crate::buffer::PixelBuffer;

/// Output height for a frame scaled to `target_width` columns.
///
/// `rows * (target_width / cols) * aspect`, truncated, at least 1.
pub fn scaled_height(width: u32, height: u32, target_width: u32, aspect: f32) -> u32 {
    if width == 0 {
        return 0;
    }
    let scaled = height as f32 * (target_width as f32 / width as f32) * aspect;
    (scaled as u32).max(1)
}

/// Resize an RGB frame to `target_width` columns, squashing rows by `aspect`.
///
/// # Errors
/// * `CameraError::InvalidFrame` - If the frame is not RGB or has no pixels
pub fn resize_frame(
    frame: &PixelBuffer,
    target_width: u32,
    aspect: f32,
) -> Result<PixelBuffer, CameraError> {
    if frame.channels() != 3 {
        return Err(CameraError::InvalidFrame(format!(
            "expected 3 channels, got {}",
            frame.channels()
        )));
    }
    if frame.is_empty() || target_width == 0 {
        return Err(CameraError::InvalidFrame(format!(
            "cannot scale {}x{} to width {}",
            frame.width(),
            frame.height(),
            target_width
        )));
    }

    let view: ImageBuffer<Rgb<u8>, &[u8]> =
        ImageBuffer::from_raw(frame.width(), frame.height(), frame.data()).ok_or_else(|| {
            CameraError::InvalidFrame("frame data does not match its dimensions".to_string())
        })?;

    let new_height = scaled_height(frame.width(), frame.height(), target_width, aspect);
    let resized = imageops::resize(&view, target_width, new_height, FilterType::Triangle);

    Ok(PixelBuffer::from_bytes_tracked(
        resized.width(),
        resized.height(),
        3,
        resized.as_raw(),
        frame.tracker(),
    )?)
}

/// Mirror a frame horizontally (flip left-right) for selfie mode.
pub fn mirror_horizontal(frame: &mut PixelBuffer) {
    let width = frame.width() as usize;
    let height = frame.height() as usize;
    let bpp = frame.channels() as usize;
    let data = frame.data_mut();

    for y in 0..height {
        let row_start = y * width * bpp;
        let row = &mut data[row_start..row_start + width * bpp];

        // Swap pixels from left and right
        for x in 0..width / 2 {
            let left = x * bpp;
            let right = (width - 1 - x) * bpp;
            for i in 0..bpp {
                row.swap(left + i, right + i);
            }
        }
    }
}
