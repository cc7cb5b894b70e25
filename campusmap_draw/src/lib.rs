// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Campusmap Draw: drawing commands for the overlays on top of the map image.
//!
//! The route renderer never touches a concrete rendering technology. It
//! talks to a [`MapCanvas`], a tiny retained-mode interface with four
//! operations:
//!
//! - [`MapCanvas::draw_path`]: stroke an open polyline.
//! - [`MapCanvas::draw_circle`]: fill a circle.
//! - [`MapCanvas::draw_pin`]: place a teardrop pin that can later be moved.
//! - [`MapCanvas::clear_layer`]: drop everything in one layer.
//!
//! All geometry is in the map image's native coordinate space. Marks are
//! grouped into [`LayerId`]s; clearing one layer never affects another, and
//! the base image is not a layer at all.
//!
//! [`RecordingCanvas`] implements the interface by keeping the marks in
//! memory, which is what tests and headless consumers assert on. SVG output
//! lives in `campusmap_draw_svg`.

#![no_std]

extern crate alloc;

pub mod glyph;
mod record;
mod style;

use kurbo::Point;

pub use record::{CanvasEvent, Mark, RecordingCanvas};
pub use style::{CircleStyle, DashAnimation, DashPattern, Halo, PinRole, PinStyle, StrokeStyle};

/// Overlay layer a mark belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayerId {
    /// Live-position marker. Painted above the base image, below routes.
    Marker,
    /// Route path and its endpoint pins.
    Route,
}

impl LayerId {
    /// Layers from bottom to top.
    pub const PAINT_ORDER: [Self; 2] = [Self::Marker, Self::Route];

    /// Identifier of the group element holding this layer.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Marker => "marker-layer",
            Self::Route => "route-layer",
        }
    }

    /// Position in [`LayerId::PAINT_ORDER`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Marker => 0,
            Self::Route => 1,
        }
    }
}

/// Identifier for a mark drawn on a canvas.
///
/// This is a small, opaque handle that stays valid until the layer holding
/// the mark is cleared. Handles are never reused within a canvas.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MarkId(pub u32);

/// A 2D vector surface with independently clearable overlay layers.
///
/// Marks within a layer paint in the order they were drawn.
pub trait MapCanvas {
    /// Removes every mark in `layer`. Idempotent.
    fn clear_layer(&mut self, layer: LayerId);

    /// Strokes an open polyline through `points`.
    fn draw_path(&mut self, layer: LayerId, points: &[Point], style: &StrokeStyle) -> MarkId;

    /// Fills a circle.
    fn draw_circle(
        &mut self,
        layer: LayerId,
        center: Point,
        radius: f64,
        style: &CircleStyle,
    ) -> MarkId;

    /// Places a pin whose tip touches `at`.
    fn draw_pin(&mut self, layer: LayerId, at: Point, role: PinRole, style: &PinStyle) -> MarkId;

    /// Repositions an existing pin in place, keeping its identity.
    ///
    /// Returns `false` if `id` does not name a live pin.
    fn move_pin(&mut self, id: MarkId, to: Point) -> bool;
}
