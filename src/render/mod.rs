//! Frame renderer: RGB pixel buffers to terminal text.
//!
//! Three modes share the luminance/glyph lookup:
//! - [`RenderMode::Grayscale`] - plain glyphs, one `\n` per row
//! - [`RenderMode::Color`] - each glyph preceded by a 24-bit foreground
//!   escape carrying the pixel's own color
//! - [`RenderMode::Rainbow`] - same layout, escape color taken from
//!   [`rainbow_color`] at the given frame offset
//!
//! Color frames end with `ESC[0m` and a NUL terminator. Their destination
//! is sized for the worst case of 20 bytes per pixel (19-byte escape plus
//! one glyph), so a correctly sized buffer is never truncated.

mod text;
mod writer;

pub use writer::BoundedWriter;

use crate::ascii::{rainbow_color, GlyphTable, Rgb};
use crate::buffer::{BufferError, PixelBuffer};
use text::Rows;

/// Foreground color escape prefix.
pub const FG_PREFIX: &[u8] = b"\x1b[38;2;";

/// Reset all attributes.
pub const RESET: &[u8] = b"\x1b[0m";

/// Cursor home, then clear the screen.
pub const CLEAR_HOME: &[u8] = b"\x1b[H\x1b[2J";

/// Worst-case bytes per pixel in the color modes: `ESC[38;2;255;255;255m` + glyph.
pub const MAX_BYTES_PER_PIXEL: usize = 20;

/// Room after the last row of a color frame for the reset and terminator.
pub const FOOTER_BYTES: usize = 16;

/// Errors that can occur while rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("source has {channels} channel(s); RGB (3) required")]
    UnsupportedChannels { channels: u32 },

    #[error(transparent)]
    Buffer(#[from] BufferError),
}

/// Output style, chosen per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Plain glyphs
    #[default]
    Grayscale,
    /// Glyphs colored with the pixel's own RGB
    Color,
    /// Glyphs colored by the rainbow model at `offset`
    Rainbow { offset: u64 },
}

impl RenderMode {
    /// Destination byte capacity for a `width x height` source.
    pub fn capacity(&self, width: u32, height: u32) -> usize {
        match self {
            RenderMode::Grayscale => grayscale_capacity(width, height),
            RenderMode::Color | RenderMode::Rainbow { .. } => color_capacity(width, height),
        }
    }

    /// Same mode advanced by `frames` animation steps. Only rainbow moves.
    pub fn advanced(self, frames: u64) -> Self {
        match self {
            RenderMode::Rainbow { offset } => RenderMode::Rainbow {
                offset: offset.wrapping_add(frames),
            },
            other => other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RenderMode::Grayscale => "grayscale",
            RenderMode::Color => "color",
            RenderMode::Rainbow { .. } => "rainbow",
        }
    }
}

/// `height * (width + 1)`: one glyph per pixel plus one newline per row.
pub fn grayscale_capacity(width: u32, height: u32) -> usize {
    (height as usize).saturating_mul((width as usize).saturating_add(1))
}

/// `height * (width * 20 + 1) + 16`.
pub fn color_capacity(width: u32, height: u32) -> usize {
    let row = (width as usize)
        .saturating_mul(MAX_BYTES_PER_PIXEL)
        .saturating_add(1);
    (height as usize)
        .saturating_mul(row)
        .saturating_add(FOOTER_BYTES)
}

/// Result of one render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOutput {
    /// Logical text length (excluding the NUL terminator)
    pub len: usize,
    /// True if the destination was too small and output was cut short
    pub truncated: bool,
}

/// Render `src` into the caller-owned `dst`.
///
/// `dst` should hold at least [`RenderMode::capacity`] bytes. A smaller
/// destination is filled as far as it goes and reported as truncated;
/// nothing is ever written past `dst.len()`.
///
/// # Errors
/// * `RenderError::UnsupportedChannels` - If `src` is not 3-channel RGB
pub fn render_into(
    mode: RenderMode,
    table: &GlyphTable,
    src: &PixelBuffer,
    dst: &mut PixelBuffer,
) -> Result<RenderOutput, RenderError> {
    if src.channels() != 3 {
        return Err(RenderError::UnsupportedChannels {
            channels: src.channels(),
        });
    }

    let rows = Rows {
        data: src.data(),
        width: src.width(),
        height: src.height(),
    };
    let capacity = dst.len();

    let (len, truncated) = match mode {
        RenderMode::Grayscale => {
            let mut w = BoundedWriter::new(dst.data_mut());
            let _ = text::write_grayscale(&mut w, table, &rows);
            let truncated = w.is_truncated();
            (w.finish(), truncated)
        }
        RenderMode::Color => {
            let mut w = BoundedWriter::terminated(dst.data_mut());
            let _ = text::write_colored(&mut w, table, &rows, |_, _, px| Rgb::from_slice(px));
            let truncated = w.is_truncated();
            (w.finish(), truncated)
        }
        RenderMode::Rainbow { offset } => {
            let mut w = BoundedWriter::terminated(dst.data_mut());
            let _ = text::write_colored(&mut w, table, &rows, |x, y, _| {
                rainbow_color(x, y, offset)
            });
            let truncated = w.is_truncated();
            (w.finish(), truncated)
        }
    };

    if truncated {
        log::warn!(
            "{} frame {}x{} truncated at {} bytes (need {})",
            mode.name(),
            rows.width,
            rows.height,
            capacity,
            mode.capacity(rows.width, rows.height)
        );
    }

    Ok(RenderOutput { len, truncated })
}

/// Render `src` into a freshly allocated, correctly sized text buffer.
///
/// The buffer reports to the same tracker as `src`.
pub fn render(
    mode: RenderMode,
    table: &GlyphTable,
    src: &PixelBuffer,
) -> Result<PixelBuffer, RenderError> {
    let capacity = mode.capacity(src.width(), src.height());
    let mut dst = PixelBuffer::with_capacity_tracked(capacity, src.tracker())?;
    render_into(mode, table, src, &mut dst)?;
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacities() {
        assert_eq!(grayscale_capacity(4, 3), 15);
        assert_eq!(color_capacity(4, 3), 3 * 81 + 16);
        assert_eq!(color_capacity(0, 0), 16);
        assert_eq!(RenderMode::Color.capacity(2, 2), color_capacity(2, 2));
        assert_eq!(
            RenderMode::Rainbow { offset: 9 }.capacity(2, 2),
            color_capacity(2, 2)
        );
    }

    #[test]
    fn test_advanced_only_moves_rainbow() {
        assert_eq!(
            RenderMode::Rainbow { offset: 3 }.advanced(2),
            RenderMode::Rainbow { offset: 5 }
        );
        assert_eq!(RenderMode::Color.advanced(2), RenderMode::Color);
        assert_eq!(RenderMode::Grayscale.advanced(2), RenderMode::Grayscale);
    }

    #[test]
    fn test_rejects_non_rgb_source() {
        let src = PixelBuffer::new(2, 2, 4).unwrap();
        let mut dst = PixelBuffer::with_capacity(64).unwrap();
        let err = render_into(RenderMode::Color, GlyphTable::standard(), &src, &mut dst)
            .unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedChannels { channels: 4 }));
    }

    #[test]
    fn test_empty_image_color_frame() {
        let src = PixelBuffer::new(0, 0, 3).unwrap();
        let out = render(RenderMode::Color, GlyphTable::standard(), &src).unwrap();
        assert_eq!(out.text(), RESET);
    }
}
