//! Glyph ramp definitions.
//!
//! Every ramp is ordered from sparsest (space) to densest glyph and holds
//! printable single-byte ASCII only, so one glyph is always one byte of
//! output.

/// Detailed density ramp (58 levels), the default.
pub const DETAILED_RAMP: &str =
    " .`,:\"^`_-'!Ii><~+*jftrxunvczXYUJCLQ0OZmwdbqkhao*#MW&8B%@$";

/// Standard ASCII density ramp (10 levels).
pub const STANDARD_RAMP: &str = " .:-=+*#%@";

/// Minimal ramp (4 levels).
/// Clean, less noisy look.
pub const MINIMAL_RAMP: &str = " .:#";

/// Built-in ramp presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ramp {
    /// Detailed 58-level ramp ending in `$`
    #[default]
    Detailed,
    /// Standard 10-level ramp ending in `@`
    Standard,
    /// Minimal 4-level ramp
    Minimal,
}

impl Ramp {
    /// Glyphs of this ramp, sparse to dense.
    pub fn glyphs(&self) -> &'static str {
        match self {
            Ramp::Detailed => DETAILED_RAMP,
            Ramp::Standard => STANDARD_RAMP,
            Ramp::Minimal => MINIMAL_RAMP,
        }
    }

    /// Human-readable name, as used in config files.
    pub fn name(&self) -> &'static str {
        match self {
            Ramp::Detailed => "detailed",
            Ramp::Standard => "standard",
            Ramp::Minimal => "minimal",
        }
    }

    /// Look a preset up by its config name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Ramp> {
        match name.to_ascii_lowercase().as_str() {
            "detailed" => Some(Ramp::Detailed),
            "standard" => Some(Ramp::Standard),
            "minimal" => Some(Ramp::Minimal),
            _ => None,
        }
    }
}
