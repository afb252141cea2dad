//! RGB to luminance conversion using the ITU-R BT.601 formula.

/// Perceptual brightness of an RGB triple.
///
/// The luminance formula is: Y = 0.299*R + 0.587*G + 0.114*B
///
/// Coefficients are scaled by 1000 to stay in integer math on the hot path.
/// They sum to 1000, so the result never exceeds 255.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let r = r as u32;
    let g = g as u32;
    let b = b as u32;
    ((299 * r + 587 * g + 114 * b) / 1000) as u8
}

/// Luminance of the first three bytes of `rgb`.
///
/// # Panics
/// If `rgb` holds fewer than three bytes.
#[inline]
pub fn luminance_of(rgb: &[u8]) -> u8 {
    luminance(rgb[0], rgb[1], rgb[2])
}

/// Luminance of every pixel of a packed RGB slice.
pub fn to_luminance(rgb: &[u8]) -> Vec<u8> {
    rgb.chunks_exact(3).map(luminance_of).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primaries() {
        assert_eq!(luminance(255, 0, 0), 76); // 299 * 255 / 1000
        assert_eq!(luminance(0, 255, 0), 149); // 587 * 255 / 1000
        assert_eq!(luminance(0, 0, 255), 29); // 114 * 255 / 1000
    }

    #[test]
    fn test_extremes() {
        assert_eq!(luminance(0, 0, 0), 0);
        assert_eq!(luminance(255, 255, 255), 255);
    }

    #[test]
    fn test_mid_gray() {
        // 29.9 + 58.7 + 11.4 = 100
        assert_eq!(luminance(100, 100, 100), 100);
    }

    #[test]
    fn test_to_luminance_ignores_partial_pixel() {
        let gray = to_luminance(&[255, 255, 255, 0, 0, 0, 9]);
        assert_eq!(gray, vec![255, 0]);
    }
}
