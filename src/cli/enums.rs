//! CLI enum types for render mode and glyph ramp options.

use clap::ValueEnum;

use crate::ascii::Ramp;
use crate::render::RenderMode;

/// Output mode for rendered frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ModeArg {
    Grayscale,
    #[default]
    Color,
    Rainbow,
}

impl ModeArg {
    /// Concrete render mode; `offset` only applies to rainbow.
    pub fn with_offset(self, offset: u64) -> RenderMode {
        match self {
            ModeArg::Grayscale => RenderMode::Grayscale,
            ModeArg::Color => RenderMode::Color,
            ModeArg::Rainbow => RenderMode::Rainbow { offset },
        }
    }
}

impl From<ModeArg> for RenderMode {
    fn from(m: ModeArg) -> Self {
        m.with_offset(0)
    }
}

/// Glyph ramp preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RampArg {
    #[default]
    Detailed,
    Standard,
    Minimal,
}

impl From<RampArg> for Ramp {
    fn from(r: RampArg) -> Self {
        match r {
            RampArg::Detailed => Ramp::Detailed,
            RampArg::Standard => Ramp::Standard,
            RampArg::Minimal => Ramp::Minimal,
        }
    }
}
