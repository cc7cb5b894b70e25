// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::Point;

use crate::{CircleStyle, LayerId, MapCanvas, MarkId, PinRole, PinStyle, StrokeStyle};

/// A retained mark, as stored by [`RecordingCanvas`].
#[derive(Clone, Debug, PartialEq)]
pub enum Mark {
    /// Stroked polyline.
    Path {
        /// Vertices in drawing order.
        points: Box<[Point]>,
        /// Stroke style.
        style: StrokeStyle,
    },
    /// Filled circle.
    Circle {
        /// Center point.
        center: Point,
        /// Radius.
        radius: f64,
        /// Fill style.
        style: CircleStyle,
    },
    /// Teardrop pin.
    Pin {
        /// Tip position.
        at: Point,
        /// Semantic tag.
        role: PinRole,
        /// Appearance.
        style: PinStyle,
    },
}

/// Event recorded by [`RecordingCanvas`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CanvasEvent {
    /// A layer was cleared.
    Clear(LayerId),
    /// A mark was added to a layer.
    Draw(LayerId, MarkId),
    /// A pin was repositioned.
    Move(MarkId, Point),
}

/// In-memory implementation of [`MapCanvas`].
///
/// This canvas:
/// - Stores marks per layer in drawing order,
/// - Records [`CanvasEvent`]s as operations are applied,
/// - Hands out monotonically increasing [`MarkId`]s.
///
/// It does not rasterize; it is intended for tests and for backends that
/// translate the retained marks into another format afterwards.
#[derive(Clone, Default, Debug)]
pub struct RecordingCanvas {
    layers: [Vec<(MarkId, Mark)>; 2],
    events: Vec<CanvasEvent>,
    next_id: u32,
}

impl RecordingCanvas {
    /// Creates an empty canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks in `layer`, bottom to top.
    pub fn layer(&self, layer: LayerId) -> impl ExactSizeIterator<Item = &Mark> + '_ {
        self.layers[layer.index()].iter().map(|(_, mark)| mark)
    }

    /// Marks in `layer` with their handles.
    #[must_use]
    pub fn layer_entries(&self, layer: LayerId) -> &[(MarkId, Mark)] {
        &self.layers[layer.index()]
    }

    /// Looks up a mark by handle.
    #[must_use]
    pub fn get(&self, id: MarkId) -> Option<&Mark> {
        self.layers
            .iter()
            .flat_map(|layer| layer.iter())
            .find(|(mark_id, _)| *mark_id == id)
            .map(|(_, mark)| mark)
    }

    /// Events in the order they were applied.
    #[must_use]
    pub fn events(&self) -> &[CanvasEvent] {
        &self.events
    }

    /// Clears the event log but keeps the marks.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    fn push(&mut self, layer: LayerId, mark: Mark) -> MarkId {
        let id = MarkId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.layers[layer.index()].push((id, mark));
        self.events.push(CanvasEvent::Draw(layer, id));
        id
    }
}

impl MapCanvas for RecordingCanvas {
    fn clear_layer(&mut self, layer: LayerId) {
        self.layers[layer.index()].clear();
        self.events.push(CanvasEvent::Clear(layer));
    }

    fn draw_path(&mut self, layer: LayerId, points: &[Point], style: &StrokeStyle) -> MarkId {
        self.push(
            layer,
            Mark::Path {
                points: points.into(),
                style: *style,
            },
        )
    }

    fn draw_circle(
        &mut self,
        layer: LayerId,
        center: Point,
        radius: f64,
        style: &CircleStyle,
    ) -> MarkId {
        self.push(
            layer,
            Mark::Circle {
                center,
                radius,
                style: *style,
            },
        )
    }

    fn draw_pin(&mut self, layer: LayerId, at: Point, role: PinRole, style: &PinStyle) -> MarkId {
        self.push(
            layer,
            Mark::Pin {
                at,
                role,
                style: *style,
            },
        )
    }

    fn move_pin(&mut self, id: MarkId, to: Point) -> bool {
        let pin = self
            .layers
            .iter_mut()
            .flat_map(|layer| layer.iter_mut())
            .find(|(mark_id, _)| *mark_id == id);
        match pin {
            Some((_, Mark::Pin { at, .. })) => {
                *at = to;
                self.events.push(CanvasEvent::Move(id, to));
                true
            }
            _ => false,
        }
    }
}
