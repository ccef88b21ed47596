//! Unit conversion utilities.
//!
//! DrawingML positions and sizes are expressed in English Metric Units (EMU).
//! Deck layouts are authored in inches and font metrics in points, so this
//! module converts between the three.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

/// Convert inches to EMU, rounding to the nearest unit.
///
/// # Examples
///
/// ```
/// use signal_deck::common::unit::inches;
///
/// assert_eq!(inches(1.0), 914_400);
/// assert_eq!(inches(7.5), 6_858_000);
/// ```
#[inline]
pub fn inches(value: f64) -> i64 {
    (value * EMUS_PER_INCH as f64).round() as i64
}

/// Convert points to EMU, rounding to the nearest unit.
#[inline]
pub fn pt_to_emu_f64(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64).round() as i64
}

#[inline]
pub fn emu_to_inches_f64(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

#[inline]
pub fn emu_to_pt_f64(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_PT as f64
}

/// Font size in hundredths of a point, the unit of `a:rPr/@sz`.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}

/// Spacing in hundredths of a point, the unit of `a:spcPts/@val`.
#[inline]
pub fn spacing_pt_to_val(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_to_emu() {
        assert_eq!(inches(10.0), 9_144_000);
        assert_eq!(inches(0.2), 182_880);
        assert_eq!(inches(2.75), 2_514_600);
        assert_eq!(emu_to_inches_f64(inches(4.2)), 4.2);
    }

    #[test]
    fn test_points() {
        assert_eq!(pt_to_emu_f64(2.0), 25_400);
        assert_eq!(emu_to_pt_f64(25_400), 2.0);
        assert_eq!(pt_to_centipoints(54.0), 5400);
        assert_eq!(spacing_pt_to_val(12.0), 1200);
    }
}
