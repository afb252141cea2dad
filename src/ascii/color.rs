//! Color types and the animated rainbow color model.

/// Angular frequency of the rainbow along the image diagonal.
pub const RAINBOW_FREQUENCY: f64 = 0.1;

/// Phase offsets (radians) of the red, green and blue waves.
pub const RAINBOW_PHASES: [f64; 3] = [0.0, 2.0, 4.0];

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Color of the first three bytes of `rgb`.
    pub fn from_slice(rgb: &[u8]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

/// Rainbow color for pixel `(x, y)` at animation step `offset`.
///
/// Each channel is `round(sin(0.1 * (x + y + offset) + phase) * 127 + 128)`,
/// giving a diagonal gradient that drifts as `offset` advances.
pub fn rainbow_color(x: u32, y: u32, offset: u64) -> Rgb {
    let position = x as f64 + y as f64 + offset as f64;
    let angle = RAINBOW_FREQUENCY * position;
    let channel = |phase: f64| ((angle + phase).sin() * 127.0 + 128.0).round() as u8;
    Rgb::new(
        channel(RAINBOW_PHASES[0]),
        channel(RAINBOW_PHASES[1]),
        channel(RAINBOW_PHASES[2]),
    )
}
