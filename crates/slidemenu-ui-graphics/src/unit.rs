//! Unit types: Mm, Density, and conversions to device pixels

/// Density-independent pixels per millimeter at density 1.0.
pub const DP_PER_MM: f32 = 6.299;

/// Physical length in millimeters.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Mm(pub f32);

impl Mm {
    /// Rounded pixel length at `density`. See [`mm_to_px`].
    pub fn to_px(&self, density: Density) -> i32 {
        mm_to_px(*self, density)
    }

    /// Truncated pixel length at `density`, used for measured sizes.
    pub fn to_px_floor(&self, density: Density) -> i32 {
        (self.0 * DP_PER_MM * density.0) as i32
    }
}

impl std::ops::Add for Mm {
    type Output = Mm;

    fn add(self, rhs: Self) -> Self::Output {
        Mm(self.0 + rhs.0)
    }
}

/// Density factor supplied by the host, multiplying density-independent
/// pixels into device pixels.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Density(pub f32);

impl Density {
    pub const DEFAULT: Density = Density(1.0);

    /// A density that can produce non-empty geometry.
    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Converts a physical length to device pixels: `round(mm * DP_PER_MM * density)`.
///
/// Every rectangle in the layout goes through this one function, so equal
/// inputs always produce equal edges.
pub fn mm_to_px(mm: Mm, density: Density) -> i32 {
    (mm.0 * DP_PER_MM * density.0).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_mm_at_double_density_is_stable() {
        let first = mm_to_px(Mm(9.0), Density(2.0));
        let second = mm_to_px(Mm(9.0), Density(2.0));
        assert_eq!(first, second);
        assert_eq!(first, (9.0f32 * DP_PER_MM * 2.0).round() as i32);
        assert_eq!(first, 113);
    }

    #[test]
    fn floor_conversion_truncates() {
        assert_eq!(Mm(9.0).to_px_floor(Density(2.0)), 113);
        assert_eq!(Mm(9.0).to_px_floor(Density(1.0)), 56);
        assert_eq!(Mm(9.0).to_px(Density(1.0)), 57);
    }

    #[test]
    fn degenerate_density_yields_zero_or_negative() {
        assert!(!Density(0.0).is_valid());
        assert!(!Density(-1.0).is_valid());
        assert!(!Density(f32::NAN).is_valid());
        assert_eq!(mm_to_px(Mm(11.0), Density(0.0)), 0);
        assert!(mm_to_px(Mm(11.0), Density(-1.0)) < 0);
    }
}
