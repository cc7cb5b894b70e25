// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch geometry.

use kurbo::{Point, Vec2};

use crate::limits::{PinchAnchor, ZoomLimits};

/// Distances at or below this are treated as coincident touches.
const MIN_PINCH_DISTANCE: f64 = 1e-6;

/// Snapshot taken when a two-finger pinch begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchBaseline {
    /// Distance between the two touches at pinch start.
    pub distance: f64,
    /// Scale at pinch start.
    pub scale: f64,
    /// Translation at pinch start.
    pub translate: Vec2,
    /// Midpoint of the two touches at pinch start, in container space.
    pub midpoint: Point,
}

impl PinchBaseline {
    /// Records the baseline for touches `a` and `b` under the given transform.
    #[must_use]
    pub fn new(a: Point, b: Point, scale: f64, translate: Vec2) -> Self {
        Self {
            distance: a.distance(b),
            scale,
            translate,
            midpoint: a.midpoint(b),
        }
    }

    /// Computes the scale and translation for the touches' current positions.
    ///
    /// Returns `None` when the baseline distance is degenerate or the
    /// result would not be finite; callers should skip the update.
    #[must_use]
    pub fn apply(
        &self,
        a: Point,
        b: Point,
        limits: ZoomLimits,
        anchor: PinchAnchor,
        current_translate: Vec2,
    ) -> Option<(f64, Vec2)> {
        if !self.distance.is_finite() || self.distance <= MIN_PINCH_DISTANCE || self.scale <= 0.0 {
            return None;
        }
        let ratio = a.distance(b) / self.distance;
        if !ratio.is_finite() {
            return None;
        }
        let scale = limits.clamp(self.scale * ratio);
        let translate = match anchor {
            PinchAnchor::Midpoint => {
                let mid = self.midpoint.to_vec2();
                mid - (mid - self.translate) * (scale / self.scale)
            }
            PinchAnchor::None => current_translate,
        };
        Some((scale, translate))
    }
}
