// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::limits::{PinchAnchor, ZoomLimits};
use crate::pinch::PinchBaseline;
use crate::state::ViewportState;

/// Tunables for a [`ViewportController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    /// Scale range.
    pub limits: ZoomLimits,
    /// Fraction of the container the fitted content may occupy.
    pub fit_margin: f64,
    /// Pinch translation policy.
    pub pinch_anchor: PinchAnchor,
    /// Factor applied for one wheel notch towards the user (zoom in).
    pub wheel_in_factor: f64,
    /// Factor applied for one wheel notch away from the user (zoom out).
    pub wheel_out_factor: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            limits: ZoomLimits::default(),
            fit_margin: 0.9,
            pinch_anchor: PinchAnchor::default(),
            wheel_in_factor: 1.1,
            wheel_out_factor: 0.9,
        }
    }
}

/// Converts pointer, touch and button input into content-layer transforms.
///
/// The controller owns a [`ViewportState`] and never draws. Every mutating
/// call returns the resulting state, whose transform should be applied
/// verbatim to the content layer.
///
/// Drag and pinch are mutually exclusive: starting one cancels the other,
/// and every end event (including the pointer leaving the surface) resets
/// the gesture fields.
#[derive(Clone, Debug)]
pub struct ViewportController {
    state: ViewportState,
    container: Size,
    content: Size,
    config: ViewportConfig,
}

impl ViewportController {
    /// Creates a controller fitted to `container`.
    #[must_use]
    pub fn new(container: Size, content: Size, config: ViewportConfig) -> Self {
        let mut controller = Self {
            state: ViewportState::default(),
            container,
            content,
            config,
        };
        controller.reset_to_fit();
        controller
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Container size in pixels.
    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    /// Native content size.
    #[must_use]
    pub fn content(&self) -> Size {
        self.content
    }

    /// Updates the container size without changing the transform.
    pub fn set_container(&mut self, container: Size) {
        self.container = container;
    }

    /// Updates the native content size without changing the transform.
    pub fn set_content(&mut self, content: Size) {
        self.content = content;
    }

    /// Computes the fitted state for the current sizes without applying it.
    #[must_use]
    pub fn fit_to_container(&self) -> ViewportState {
        ViewportState::fit(
            self.container,
            self.content,
            self.config.fit_margin,
            self.config.limits,
        )
    }

    /// Replaces the state with the fitted one, cancelling any gesture.
    pub fn reset_to_fit(&mut self) -> ViewportState {
        self.state = self.fit_to_container();
        self.state
    }

    /// Sets the transform directly. The scale is clamped.
    pub fn apply_transform(&mut self, scale: f64, translate: Vec2) -> ViewportState {
        if scale.is_finite() && translate.is_finite() {
            self.state.scale = self.config.limits.clamp(scale);
            self.state.translate = translate;
        }
        self.state
    }

    /// Zooms about the container center.
    pub fn zoom_by(&mut self, factor: f64) -> ViewportState {
        let center = Point::new(self.container.width / 2.0, self.container.height / 2.0);
        self.zoom_about(factor, center)
    }

    /// Zooms about `pivot`, given in container coordinates.
    pub fn zoom_about(&mut self, factor: f64, pivot: Point) -> ViewportState {
        self.state = self.state.zoomed(factor, pivot, self.config.limits);
        self.state
    }

    /// Handles a wheel event: positive `delta_y` zooms out, anything else in.
    pub fn wheel(&mut self, delta_y: f64, pivot: Point) -> ViewportState {
        let factor = if delta_y > 0.0 {
            self.config.wheel_out_factor
        } else {
            self.config.wheel_in_factor
        };
        self.zoom_about(factor, pivot)
    }

    /// Starts a drag at `pointer`, cancelling any pinch.
    pub fn begin_drag(&mut self, pointer: Point) -> ViewportState {
        self.state.pinch = None;
        self.state.drag_anchor = Some(pointer.to_vec2() - self.state.translate);
        self.state
    }

    /// Moves the content with the pointer. No-op unless dragging.
    pub fn continue_drag(&mut self, pointer: Point) -> ViewportState {
        if let Some(anchor) = self.state.drag_anchor {
            self.state.translate = pointer.to_vec2() - anchor;
        }
        self.state
    }

    /// Ends any drag. Idempotent.
    pub fn end_drag(&mut self) -> ViewportState {
        self.state.drag_anchor = None;
        self.state
    }

    /// Starts a pinch with touches `a` and `b`, cancelling any drag.
    pub fn begin_pinch(&mut self, a: Point, b: Point) -> ViewportState {
        self.state.drag_anchor = None;
        self.state.pinch = Some(PinchBaseline::new(
            a,
            b,
            self.state.scale,
            self.state.translate,
        ));
        self.state
    }

    /// Rescales from the pinch baseline. No-op unless pinching, and skipped
    /// when the baseline distance is degenerate.
    pub fn continue_pinch(&mut self, a: Point, b: Point) -> ViewportState {
        let Some(baseline) = self.state.pinch else {
            return self.state;
        };
        if let Some((scale, translate)) = baseline.apply(
            a,
            b,
            self.config.limits,
            self.config.pinch_anchor,
            self.state.translate,
        ) {
            self.state.scale = scale;
            self.state.translate = translate;
        }
        self.state
    }

    /// Ends any pinch. Idempotent.
    pub fn end_pinch(&mut self) -> ViewportState {
        self.state.pinch = None;
        self.state
    }

    /// Clears all gesture state.
    pub fn end_gesture(&mut self) -> ViewportState {
        self.state.drag_anchor = None;
        self.state.pinch = None;
        self.state
    }

    /// Mouse button pressed on the surface.
    pub fn pointer_down(&mut self, pointer: Point) -> ViewportState {
        self.begin_drag(pointer)
    }

    /// Mouse moved over the surface.
    pub fn pointer_move(&mut self, pointer: Point) -> ViewportState {
        self.continue_drag(pointer)
    }

    /// Mouse button released.
    pub fn pointer_up(&mut self) -> ViewportState {
        self.end_gesture()
    }

    /// Pointer left the surface; treated exactly like a release.
    pub fn pointer_leave(&mut self) -> ViewportState {
        self.end_gesture()
    }

    /// Touches began; `touches` lists every active touch.
    ///
    /// One touch starts a drag, two or more start a pinch on the first two.
    pub fn touch_start(&mut self, touches: &[Point]) -> ViewportState {
        match touches {
            [] => self.state,
            [only] => self.begin_drag(*only),
            [a, b, ..] => self.begin_pinch(*a, *b),
        }
    }

    /// Touches moved; `touches` lists every active touch.
    pub fn touch_move(&mut self, touches: &[Point]) -> ViewportState {
        match touches {
            [only] if self.state.is_dragging() => self.continue_drag(*only),
            [a, b, ..] if self.state.is_pinching() => self.continue_pinch(*a, *b),
            _ => self.state,
        }
    }

    /// Touches ended; `remaining` lists the touches still down.
    ///
    /// With none left every gesture ends. A single touch left over from a
    /// pinch continues as a drag from its current position.
    pub fn touch_end(&mut self, remaining: &[Point]) -> ViewportState {
        match remaining {
            [] => self.end_gesture(),
            [only] if self.state.is_pinching() => self.begin_drag(*only),
            _ => self.state,
        }
    }
}
