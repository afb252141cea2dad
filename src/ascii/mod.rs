//! Pixel to glyph model.
//!
//! 1. **Luminance** - RGB to brightness using BT.601 integer weights
//! 2. **Glyph lookup** - brightness to an ASCII glyph via a 256-entry table
//! 3. **Rainbow color** - animated per-pixel color for the rainbow mode
//!
//! # Ramps
//!
//! Glyph ramps are available via [`Ramp`]:
//! - `Detailed` - 58-level ramp, the default
//! - `Standard` - 10-level ASCII density ramp
//! - `Minimal` - 4-level clean look

mod color;
mod glyph;
mod luminance;
mod ramp;

pub use color::{rainbow_color, Rgb, RAINBOW_FREQUENCY, RAINBOW_PHASES};
pub use glyph::{glyph_for, GlyphError, GlyphTable};
pub use luminance::{luminance, luminance_of, to_luminance};
pub use ramp::{Ramp, DETAILED_RAMP, MINIMAL_RAMP, STANDARD_RAMP};
