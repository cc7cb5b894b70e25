// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Affine, Point, Size, Vec2};

use crate::limits::ZoomLimits;
use crate::pinch::PinchBaseline;

/// Pan/zoom state of the map content layer.
///
/// The transform maps content (native image) coordinates to container
/// coordinates as `screen = content * scale + translate`. The gesture fields
/// record an in-progress drag or pinch; at most one of them is set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Uniform scale factor.
    pub scale: f64,
    /// Translation in container pixels, applied after scaling.
    pub translate: Vec2,
    /// Offset between the pointer and the translation while dragging.
    pub drag_anchor: Option<Vec2>,
    /// Baseline captured when a two-finger pinch began.
    pub pinch: Option<PinchBaseline>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate: Vec2::ZERO,
            drag_anchor: None,
            pinch: None,
        }
    }
}

impl ViewportState {
    /// Computes the state that shows all of `content` inside `container`.
    ///
    /// The largest scale fitting both axes is multiplied by `margin`, clamped
    /// into `limits`, and the scaled content is centered. Degenerate sizes
    /// yield the default state with its scale clamped.
    #[must_use]
    pub fn fit(container: Size, content: Size, margin: f64, limits: ZoomLimits) -> Self {
        let usable = |s: Size| {
            s.width.is_finite() && s.height.is_finite() && s.width > 0.0 && s.height > 0.0
        };
        if !usable(container) || !usable(content) {
            return Self {
                scale: limits.clamp(1.0),
                ..Self::default()
            };
        }
        let margin = if margin.is_finite() && margin > 0.0 {
            margin.min(1.0)
        } else {
            1.0
        };

        let sx = container.width / content.width;
        let sy = container.height / content.height;
        let scale = limits.clamp(sx.min(sy) * margin);
        let translate = Vec2::new(
            (container.width - content.width * scale) / 2.0,
            (container.height - content.height * scale) / 2.0,
        );
        Self {
            scale,
            translate,
            drag_anchor: None,
            pinch: None,
        }
    }

    /// Returns this state zoomed by `factor` about `pivot` (container space).
    ///
    /// The resulting scale is clamped into `limits`, and the translation is
    /// corrected with the clamped ratio so `pivot` keeps its screen position.
    /// Non-positive or non-finite factors leave the state unchanged.
    #[must_use]
    pub fn zoomed(self, factor: f64, pivot: Point, limits: ZoomLimits) -> Self {
        if !factor.is_finite() || factor <= 0.0 || self.scale <= 0.0 {
            return self;
        }
        let new_scale = limits.clamp(self.scale * factor);
        let ratio = new_scale / self.scale;
        let pivot = pivot.to_vec2();
        Self {
            scale: new_scale,
            translate: pivot - (pivot - self.translate) * ratio,
            ..self
        }
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    /// Content-to-container transform.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }

    /// Maps a content-space point to container space.
    #[must_use]
    pub fn content_to_screen(&self, pt: Point) -> Point {
        self.to_affine() * pt
    }

    /// Maps a container-space point back to content space.
    #[must_use]
    pub fn screen_to_content(&self, pt: Point) -> Point {
        self.to_affine().inverse() * pt
    }

    /// CSS `transform` value applying this state to the content layer.
    #[must_use]
    pub fn css_transform(&self) -> CssTransform {
        CssTransform {
            scale: self.scale,
            translate: self.translate,
        }
    }
}

/// Displays as `translate(Xpx, Ypx) scale(S)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CssTransform {
    scale: f64,
    translate: Vec2,
}

impl fmt::Display for CssTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}px, {}px) scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }
}
