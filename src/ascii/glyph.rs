//! Luminance to glyph lookup.

use super::ramp::{Ramp, DETAILED_RAMP};

/// Errors that can occur when building a [`GlyphTable`] from a custom ramp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GlyphError {
    #[error("glyph ramp is empty")]
    EmptyRamp,

    /// Multi-byte or control characters would break the per-pixel size bound
    #[error("glyph ramp contains {0:?}; only printable ASCII is allowed")]
    NonAsciiRamp(char),
}

/// Precomputed mapping from every luminance value to one glyph byte.
///
/// `table[i] = ramp[i * (len - 1) / 255]`, so luminance 0 always maps to the
/// first (sparsest) glyph and 255 to the last (densest).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    table: [u8; 256],
}

static DEFAULT_TABLE: GlyphTable = GlyphTable {
    table: build_table(DETAILED_RAMP.as_bytes(), false),
};

const fn build_table(ramp: &[u8], invert: bool) -> [u8; 256] {
    let levels = ramp.len();
    let mut table = [b' '; 256];
    let mut i = 0;
    while i < 256 {
        let lum = if invert { 255 - i } else { i };
        table[i] = ramp[lum * (levels - 1) / 255];
        i += 1;
    }
    table
}

impl GlyphTable {
    /// The process-wide table for the default (detailed) ramp.
    pub fn standard() -> &'static GlyphTable {
        &DEFAULT_TABLE
    }

    /// Build a table for one of the built-in ramps.
    pub fn from_preset(ramp: Ramp, invert: bool) -> Self {
        Self {
            table: build_table(ramp.glyphs().as_bytes(), invert),
        }
    }

    /// Build a table from a custom ramp, ordered sparse to dense.
    ///
    /// # Arguments
    /// * `ramp` - Printable ASCII glyphs, at least one
    /// * `invert` - If true, bright pixels map to sparse glyphs (for light terminals)
    pub fn from_ramp(ramp: &str, invert: bool) -> Result<Self, GlyphError> {
        if ramp.is_empty() {
            return Err(GlyphError::EmptyRamp);
        }
        if let Some(bad) = ramp.chars().find(|c| !(' '..='~').contains(c)) {
            return Err(GlyphError::NonAsciiRamp(bad));
        }
        Ok(Self {
            table: build_table(ramp.as_bytes(), invert),
        })
    }

    /// Glyph for a luminance value.
    #[inline]
    pub fn glyph(&self, luminance: u8) -> u8 {
        self.table[luminance as usize]
    }

    /// Glyph for an arbitrary integer, clamped to [0, 255] first.
    #[inline]
    pub fn glyph_for(&self, luminance: i32) -> u8 {
        self.glyph(luminance.clamp(0, 255) as u8)
    }

    /// The full lookup table.
    pub fn as_bytes(&self) -> &[u8; 256] {
        &self.table
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        DEFAULT_TABLE.clone()
    }
}

/// Glyph for `luminance` from the default table.
#[inline]
pub fn glyph_for(luminance: i32) -> u8 {
    GlyphTable::standard().glyph_for(luminance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_endpoints() {
        let table = GlyphTable::standard();
        assert_eq!(table.glyph(0), b' ');
        assert_eq!(table.glyph(255), b'$');
    }

    #[test]
    fn test_table_formula() {
        let ramp = DETAILED_RAMP.as_bytes();
        let table = GlyphTable::standard();
        for i in 0..256usize {
            assert_eq!(table.as_bytes()[i], ramp[i * (ramp.len() - 1) / 255]);
        }
    }

    #[test]
    fn test_glyph_for_clamps() {
        assert_eq!(glyph_for(-40), b' ');
        assert_eq!(glyph_for(1000), b'$');
    }

    #[test]
    fn test_single_glyph_ramp() {
        let table = GlyphTable::from_ramp("#", false).unwrap();
        assert!(table.as_bytes().iter().all(|&g| g == b'#'));
    }

    #[test]
    fn test_invert_swaps_endpoints() {
        let table = GlyphTable::from_preset(Ramp::Standard, true);
        assert_eq!(table.glyph(0), b'@');
        assert_eq!(table.glyph(255), b' ');
    }

    #[test]
    fn test_rejects_bad_ramps() {
        assert_eq!(GlyphTable::from_ramp("", false), Err(GlyphError::EmptyRamp));
        assert_eq!(
            GlyphTable::from_ramp(" ░▒", false),
            Err(GlyphError::NonAsciiRamp('░'))
        );
        assert_eq!(
            GlyphTable::from_ramp(" \t#", false),
            Err(GlyphError::NonAsciiRamp('\t'))
        );
    }

    #[test]
    fn test_default_matches_preset() {
        assert_eq!(
            GlyphTable::default(),
            GlyphTable::from_preset(Ramp::Detailed, false)
        );
    }
}
