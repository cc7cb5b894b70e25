// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker geometry in pin-local coordinates.
//!
//! A pin's tip sits at the local origin, which is placed on the marked
//! location. The body rises above it with the round head centered on
//! [`PIN_HEAD_CENTER`].

use kurbo::{BezPath, Point, Rect};

/// Center of the pin head, relative to the tip.
pub const PIN_HEAD_CENTER: Point = Point::new(0.0, -17.0);

/// Baseline offset for a label letter drawn on the pin head.
pub const PIN_LABEL_BASELINE: Point = Point::new(0.0, -13.0);

/// Teardrop outline of a pin, tip near the origin.
#[must_use]
pub fn pin_outline() -> BezPath {
    let mut path = BezPath::new();
    path.move_to((0.0, -35.0));
    path.curve_to((-10.0, -35.0), (-18.0, -27.0), (-18.0, -17.0));
    path.curve_to((-18.0, -7.0), (0.0, 5.0), (0.0, 5.0));
    path.curve_to((0.0, 5.0), (18.0, -7.0), (18.0, -17.0));
    path.curve_to((18.0, -27.0), (10.0, -35.0), (0.0, -35.0));
    path.close_path();
    path
}

/// Control-point bounds of [`pin_outline`].
#[must_use]
pub fn pin_bounds() -> Rect {
    Rect::new(-18.0, -35.0, 18.0, 5.0)
}

/// Open polyline through `points`; empty for an empty slice.
#[must_use]
pub fn polyline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
        for p in iter {
            path.line_to(*p);
        }
    }
    path
}
