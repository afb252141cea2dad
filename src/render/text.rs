//! Text frame assembly for the grayscale and color modes.

use std::fmt;

use super::writer::BoundedWriter;
use super::{FG_PREFIX, RESET};
use crate::ascii::{luminance_of, GlyphTable, Rgb};

/// Packed RGB rows of a source image.
pub(super) struct Rows<'a> {
    pub data: &'a [u8],
    pub width: u32,
    pub height: u32,
}

impl<'a> Rows<'a> {
    fn row(&self, y: u32) -> &'a [u8] {
        let row_bytes = self.width as usize * 3;
        let start = y as usize * row_bytes;
        &self.data[start..start + row_bytes]
    }
}

/// One glyph per pixel, `\n` after each row.
pub(super) fn write_grayscale(
    w: &mut BoundedWriter<'_>,
    table: &GlyphTable,
    rows: &Rows<'_>,
) -> fmt::Result {
    for y in 0..rows.height {
        for px in rows.row(y).chunks_exact(3) {
            w.put_byte(table.glyph(luminance_of(px)))?;
        }
        w.put_byte(b'\n')?;
    }
    Ok(())
}

/// Foreground escape plus glyph per pixel, `\n` after each row, one reset
/// at the end. `color_at` picks the escape color; the glyph always comes
/// from the sampled pixel.
pub(super) fn write_colored<F>(
    w: &mut BoundedWriter<'_>,
    table: &GlyphTable,
    rows: &Rows<'_>,
    color_at: F,
) -> fmt::Result
where
    F: Fn(u32, u32, &[u8]) -> Rgb,
{
    for y in 0..rows.height {
        for (x, px) in rows.row(y).chunks_exact(3).enumerate() {
            let color = color_at(x as u32, y, px);
            write_foreground(w, color)?;
            w.put_byte(table.glyph(luminance_of(px)))?;
        }
        w.put_byte(b'\n')?;
    }
    w.put(RESET)
}

/// `ESC[38;2;R;G;Bm`, at most 19 bytes.
fn write_foreground(w: &mut BoundedWriter<'_>, color: Rgb) -> fmt::Result {
    w.put(FG_PREFIX)?;
    w.put_decimal(color.r)?;
    w.put_byte(b';')?;
    w.put_decimal(color.g)?;
    w.put_byte(b';')?;
    w.put_decimal(color.b)?;
    w.put_byte(b'm')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreground_escape_worst_case_length() {
        let mut buf = [0u8; 32];
        let mut w = BoundedWriter::new(&mut buf);
        write_foreground(&mut w, Rgb::new(255, 255, 255)).unwrap();
        let n = w.finish();
        assert_eq!(&buf[..n], b"\x1b[38;2;255;255;255m");
        assert_eq!(n, 19);
    }

    #[test]
    fn test_foreground_escape_short_values() {
        let mut buf = [0u8; 32];
        let mut w = BoundedWriter::new(&mut buf);
        write_foreground(&mut w, Rgb::new(0, 9, 10)).unwrap();
        let n = w.finish();
        assert_eq!(&buf[..n], b"\x1b[38;2;0;9;10m");
    }

    #[test]
    fn test_grayscale_rows() {
        let data = [0, 0, 0, 255, 255, 255, 255, 255, 255, 0, 0, 0];
        let rows = Rows {
            data: &data,
            width: 2,
            height: 2,
        };
        let mut buf = [0u8; 6];
        let mut w = BoundedWriter::new(&mut buf);
        write_grayscale(&mut w, GlyphTable::standard(), &rows).unwrap();
        assert_eq!(w.finish(), 6);
        assert_eq!(&buf, b" $\n$ \n");
    }
}
