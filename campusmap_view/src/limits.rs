// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Inclusive scale range enforced by every zooming operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    min: f64,
    max: f64,
}

impl ZoomLimits {
    /// Smallest scale allowed by [`ZoomLimits::default`].
    pub const DEFAULT_MIN: f64 = 0.3;
    /// Largest scale allowed by [`ZoomLimits::default`].
    pub const DEFAULT_MAX: f64 = 4.0;

    /// Creates a new range.
    ///
    /// The bounds are normalized so that `min <= max`. Non-finite or
    /// non-positive bounds fall back to the defaults.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let min = if min.is_finite() && min > 0.0 {
            min
        } else {
            Self::DEFAULT_MIN
        };
        let max = if max.is_finite() && max > 0.0 {
            max
        } else {
            Self::DEFAULT_MAX
        };
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Lower bound.
    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    /// Clamps `scale` into the range.
    #[must_use]
    pub fn clamp(self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }

    /// Returns `true` if `scale` lies inside the range.
    #[must_use]
    pub fn contains(self, scale: f64) -> bool {
        scale >= self.min && scale <= self.max
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

/// How a two-finger pinch moves the content while it scales.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PinchAnchor {
    /// Keep the point under the initial finger midpoint fixed on screen,
    /// matching wheel and button zoom.
    #[default]
    Midpoint,
    /// Scale only; translation is left exactly as it was.
    None,
}

#[cfg(test)]
mod tests {
    use super::ZoomLimits;

    #[test]
    fn new_normalizes_inverted_bounds() {
        let limits = ZoomLimits::new(4.0, 0.5);
        assert_eq!(limits.min(), 0.5);
        assert_eq!(limits.max(), 4.0);
    }

    #[test]
    fn invalid_bounds_fall_back_to_defaults() {
        let limits = ZoomLimits::new(f64::NAN, -1.0);
        assert_eq!(limits, ZoomLimits::default());
    }

    #[test]
    fn clamp_and_contains_agree() {
        let limits = ZoomLimits::default();
        for scale in [0.0, 0.1, 0.3, 1.0, 4.0, 9.0] {
            assert!(limits.contains(limits.clamp(scale)));
        }
        assert!(!limits.contains(0.29));
    }
}
