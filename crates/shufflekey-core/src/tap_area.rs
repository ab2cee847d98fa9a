//! Button tap-area size.

/// Side length of a key's tap area, in points.
///
/// Always within `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TapArea(f32);

impl TapArea {
    /// Smallest tap area.
    pub const MIN: f32 = 20.0;
    /// Largest tap area.
    pub const MAX: f32 = 100.0;
    /// Change applied by the +/- buttons.
    pub const STEP: f32 = 5.0;
    /// Initial tap area.
    pub const DEFAULT: f32 = 100.0;
    /// Upper bound on the label font size.
    pub const MAX_FONT_SIZE: f32 = 24.0;

    /// Tap area of `size` points, clamped into range. NaN gives the default.
    pub fn new(size: f32) -> Self {
        if size.is_nan() { Self(Self::DEFAULT) } else { Self(size.clamp(Self::MIN, Self::MAX)) }
    }

    /// Size in points.
    pub fn size(self) -> f32 {
        self.0
    }

    /// One step larger, clamped.
    #[must_use]
    pub fn increased(self) -> Self {
        Self::new(self.0 + Self::STEP)
    }

    /// One step smaller, clamped.
    #[must_use]
    pub fn decreased(self) -> Self {
        Self::new(self.0 - Self::STEP)
    }

    /// Label font size for this tap area.
    pub fn font_size(self) -> f32 {
        (self.0 * 0.4).min(Self::MAX_FONT_SIZE)
    }
}

impl Default for TapArea {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_range() {
        assert_eq!(TapArea::new(5.0).size(), TapArea::MIN);
        assert_eq!(TapArea::new(500.0).size(), TapArea::MAX);
        assert_eq!(TapArea::new(f32::NAN), TapArea::default());
    }

    #[test]
    fn steps_stop_at_bounds() {
        let max = TapArea::default();
        assert_eq!(max.increased(), max);
        assert_eq!(max.decreased().size(), 95.0);
        assert_eq!(TapArea::new(22.0).decreased().size(), TapArea::MIN);
    }

    #[test]
    fn font_size_is_capped() {
        assert_eq!(TapArea::new(100.0).font_size(), 24.0);
        assert_eq!(TapArea::new(50.0).font_size(), 20.0);
    }
}
