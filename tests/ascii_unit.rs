//! Unit tests for the luminance, glyph and color models.
//!
//! These tests verify:
//! - Luminance against the floating-point BT.601 weights
//! - Glyph lookup at the extremes and its monotonicity
//! - Rainbow color determinism

use termglyph::ascii::*;

// ==================== Luminance Tests ====================

#[test]
fn test_luminance_within_one_of_float_formula() {
    for r in 0..=255u32 {
        for g in 0..=255u32 {
            for b in 0..=255u32 {
                let exact = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
                let got = luminance(r as u8, g as u8, b as u8) as f64;
                assert!(
                    (got - exact).abs() <= 1.0,
                    "({}, {}, {}) -> {} vs {}",
                    r,
                    g,
                    b,
                    got,
                    exact
                );
            }
        }
    }
}

#[test]
fn test_luminance_primaries() {
    assert_eq!(luminance(255, 0, 0), 76);
    assert_eq!(luminance(0, 255, 0), 149);
    assert_eq!(luminance(0, 0, 255), 29);
    assert_eq!(luminance(255, 255, 255), 255);
    assert_eq!(luminance(0, 0, 0), 0);
}

#[test]
fn test_to_luminance_per_pixel() {
    let rgb = [255, 255, 255, 0, 0, 0, 10, 20, 30];
    assert_eq!(to_luminance(&rgb), vec![255, 0, 18]);
}

// ==================== Glyph Tests ====================

#[test]
fn test_black_is_space_white_is_densest() {
    assert_eq!(glyph_for(0), b' ');
    assert_eq!(glyph_for(255), b'$');
    assert_eq!(GlyphTable::standard().glyph(0), b' ');
    assert_eq!(GlyphTable::standard().glyph(255), b'$');
}

#[test]
fn test_out_of_range_clamps() {
    assert_eq!(glyph_for(-40), b' ');
    assert_eq!(glyph_for(1000), b'$');
}

/// Every glyph must appear in the ramp at or after the previous one.
fn assert_monotonic(table: &GlyphTable, ramp: &str) {
    let ramp = ramp.as_bytes();
    let mut pos = 0;
    for lum in 0..=255u8 {
        let glyph = table.glyph(lum);
        let found = ramp[pos..]
            .iter()
            .position(|&c| c == glyph)
            .unwrap_or_else(|| panic!("glyph {:?} at {} goes backwards", glyph as char, lum));
        pos += found;
    }
}

#[test]
fn test_table_is_monotonic() {
    assert_monotonic(GlyphTable::standard(), DETAILED_RAMP);
    for ramp in [Ramp::Detailed, Ramp::Standard, Ramp::Minimal] {
        assert_monotonic(&GlyphTable::from_preset(ramp, false), ramp.glyphs());
    }
}

#[test]
fn test_every_ramp_level_is_reachable() {
    let table = GlyphTable::from_preset(Ramp::Standard, false);
    for glyph in STANDARD_RAMP.bytes() {
        assert!(table.as_bytes().contains(&glyph), "{:?} unused", glyph as char);
    }
}

#[test]
fn test_inverted_table() {
    let table = GlyphTable::from_preset(Ramp::Standard, true);
    assert_eq!(table.glyph(0), b'@');
    assert_eq!(table.glyph(255), b' ');
}

#[test]
fn test_custom_ramp_validation() {
    assert!(matches!(GlyphTable::from_ramp("", false), Err(GlyphError::EmptyRamp)));
    assert!(matches!(
        GlyphTable::from_ramp(" .\u{2588}", false),
        Err(GlyphError::NonAsciiRamp(_))
    ));
    let table = GlyphTable::from_ramp(" o", false).unwrap();
    assert_eq!(table.glyph(0), b' ');
    assert_eq!(table.glyph(255), b'o');
}

// ==================== Rainbow Tests ====================

#[test]
fn test_rainbow_origin() {
    assert_eq!(rainbow_color(0, 0, 0), Rgb::new(128, 243, 32));
}

#[test]
fn test_rainbow_drifts_with_offset() {
    let colors: Vec<Rgb> = (0..10).map(|offset| rainbow_color(0, 0, offset)).collect();
    assert!(colors.windows(2).all(|pair| pair[0] != pair[1]));
    // One step of offset equals one step along the diagonal
    assert_eq!(rainbow_color(4, 0, 1), rainbow_color(5, 0, 0));
}

#[test]
fn test_rainbow_channels_stay_in_range() {
    for pos in 0..200 {
        let c = rainbow_color(pos, 0, 0);
        for v in [c.r, c.g, c.b] {
            assert!(v >= 1, "channel {} at {}", v, pos);
        }
    }
}
