// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use campusmap_draw::{LayerId, MapCanvas, MarkId, PinRole};
use kurbo::Point;

use crate::{CampusData, RouteMatch, RouteTheme};

/// Result of [`RouteRenderer::render`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The route was drawn through this many points.
    Drawn {
        /// Number of resolved points.
        points: usize,
    },
    /// Too few points resolved; the route layer was left empty.
    Skipped {
        /// Number of resolved points.
        resolved: usize,
    },
}

/// The route currently on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedRoute {
    /// Resolved positions in travel order.
    pub coordinates: Vec<Point>,
    /// Handles of the drawn marks, bottom to top.
    pub marks: Vec<MarkId>,
}

/// Draws routes into [`LayerId::Route`] and owns the live marker in
/// [`LayerId::Marker`].
///
/// Every render replaces the route layer wholesale. The live marker is
/// created once and afterwards only moved, so route changes never touch it.
#[derive(Clone, Debug, Default)]
pub struct RouteRenderer {
    theme: RouteTheme,
    rendered: Option<RenderedRoute>,
    live: Option<(MarkId, Point)>,
}

impl RouteRenderer {
    /// Creates a renderer with the given styles.
    #[must_use]
    pub fn new(theme: RouteTheme) -> Self {
        Self {
            theme,
            rendered: None,
            live: None,
        }
    }

    /// Styles in use.
    #[must_use]
    pub fn theme(&self) -> &RouteTheme {
        &self.theme
    }

    /// The route currently drawn, if any.
    #[must_use]
    pub fn rendered(&self) -> Option<&RenderedRoute> {
        self.rendered.as_ref()
    }

    /// Current live-marker position, once one has been placed.
    #[must_use]
    pub fn live_position(&self) -> Option<Point> {
        self.live.map(|(_, at)| at)
    }

    /// Resolves `matched` against `data` and draws it.
    pub fn render<C: MapCanvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        data: &CampusData,
        matched: &RouteMatch<'_>,
    ) -> RenderOutcome {
        let coordinates = data.route_coordinates(matched);
        tracing::debug!(
            origin = matched.origin(),
            destination = matched.destination(),
            reversed = matched.reversed,
            "rendering route"
        );
        self.draw(canvas, coordinates)
    }

    /// Replaces the route layer with a route through `coordinates`.
    ///
    /// Paints, bottom to top: shadow stroke, dashed stroke, a dot at each
    /// interior point, the origin pin and the destination pin. Fewer than two
    /// points leaves the layer empty.
    pub fn draw<C: MapCanvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        coordinates: Vec<Point>,
    ) -> RenderOutcome {
        canvas.clear_layer(LayerId::Route);
        self.rendered = None;

        let (first, last) = match coordinates.as_slice() {
            [first, .., last] => (*first, *last),
            _ => {
                tracing::warn!(
                    resolved = coordinates.len(),
                    "route has fewer than two resolvable points, nothing drawn"
                );
                return RenderOutcome::Skipped {
                    resolved: coordinates.len(),
                };
            }
        };

        let theme = &self.theme;
        let mut marks = Vec::with_capacity(coordinates.len() + 2);
        marks.push(canvas.draw_path(LayerId::Route, &coordinates, &theme.shadow));
        marks.push(canvas.draw_path(LayerId::Route, &coordinates, &theme.primary));
        for point in &coordinates[1..coordinates.len() - 1] {
            marks.push(canvas.draw_circle(
                LayerId::Route,
                *point,
                theme.waypoint_radius,
                &theme.waypoint,
            ));
        }
        marks.push(canvas.draw_pin(LayerId::Route, first, PinRole::Origin, &theme.origin));
        marks.push(canvas.draw_pin(
            LayerId::Route,
            last,
            PinRole::Destination,
            &theme.destination,
        ));

        let points = coordinates.len();
        self.rendered = Some(RenderedRoute { coordinates, marks });
        RenderOutcome::Drawn { points }
    }

    /// Empties the route layer. Idempotent.
    pub fn clear<C: MapCanvas + ?Sized>(&mut self, canvas: &mut C) {
        canvas.clear_layer(LayerId::Route);
        if self.rendered.take().is_some() {
            tracing::debug!("route cleared");
        }
    }

    /// Places the live marker, or moves it if it already exists.
    pub fn update_live_marker<C: MapCanvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        at: Point,
    ) -> MarkId {
        if let Some((id, position)) = &mut self.live
            && canvas.move_pin(*id, at)
        {
            *position = at;
            tracing::debug!(x = at.x, y = at.y, "live marker moved");
            return *id;
        }
        let id = canvas.draw_pin(LayerId::Marker, at, PinRole::Live, &self.theme.live);
        self.live = Some((id, at));
        tracing::debug!(x = at.x, y = at.y, "live marker placed");
        id
    }
}

#[cfg(test)]
mod tests {
    use campusmap_draw::{CanvasEvent, LayerId, Mark, PinRole, RecordingCanvas};
    use kurbo::Point;

    use super::{RenderOutcome, RouteRenderer};
    use crate::CampusData;

    #[test]
    fn draws_in_z_order() {
        let data = CampusData::builtin().unwrap();
        let matched = data.find_route("cafeteria", "edificio_p").unwrap();
        let mut canvas = RecordingCanvas::new();
        let mut renderer = RouteRenderer::default();

        let outcome = renderer.render(&mut canvas, &data, &matched);
        assert_eq!(outcome, RenderOutcome::Drawn { points: 9 });

        let marks: Vec<_> = canvas.layer(LayerId::Route).collect();
        assert_eq!(marks.len(), 2 + 7 + 2);
        assert!(matches!(marks[0], Mark::Path { style, .. } if style.dash.is_none()));
        assert!(matches!(marks[1], Mark::Path { style, .. } if style.dash.is_some()));
        assert!(
            marks[2..9]
                .iter()
                .all(|m| matches!(m, Mark::Circle { radius, .. } if *radius == 6.0))
        );
        assert!(matches!(
            marks[9],
            Mark::Pin { role: PinRole::Origin, at, .. } if *at == Point::new(310.0, 255.0)
        ));
        assert!(matches!(
            marks[10],
            Mark::Pin { role: PinRole::Destination, at, .. } if *at == Point::new(230.0, 680.0)
        ));
        assert_eq!(renderer.rendered().map(|r| r.marks.len()), Some(11));
    }

    #[test]
    fn every_render_starts_by_clearing() {
        let mut canvas = RecordingCanvas::new();
        let mut renderer = RouteRenderer::default();
        renderer.draw(&mut canvas, vec![Point::ZERO, Point::new(1.0, 1.0)]);
        assert_eq!(canvas.events()[0], CanvasEvent::Clear(LayerId::Route));
    }

    #[test]
    fn two_points_have_no_interior_dots() {
        let mut canvas = RecordingCanvas::new();
        let mut renderer = RouteRenderer::default();
        renderer.draw(&mut canvas, vec![Point::ZERO, Point::new(1.0, 1.0)]);
        let circles = canvas
            .layer(LayerId::Route)
            .filter(|m| matches!(m, Mark::Circle { .. }))
            .count();
        assert_eq!(circles, 0);
        assert_eq!(canvas.layer(LayerId::Route).len(), 4);
    }

    #[test]
    fn shortfall_leaves_empty_layer() {
        let mut canvas = RecordingCanvas::new();
        let mut renderer = RouteRenderer::default();
        renderer.draw(&mut canvas, vec![Point::ZERO, Point::new(1.0, 1.0)]);

        let outcome = renderer.draw(&mut canvas, vec![Point::new(5.0, 5.0)]);
        assert_eq!(outcome, RenderOutcome::Skipped { resolved: 1 });
        assert_eq!(canvas.layer(LayerId::Route).len(), 0);
        assert!(renderer.rendered().is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut canvas = RecordingCanvas::new();
        let mut renderer = RouteRenderer::default();
        renderer.draw(&mut canvas, vec![Point::ZERO, Point::new(1.0, 1.0)]);
        renderer.clear(&mut canvas);
        renderer.clear(&mut canvas);
        assert_eq!(canvas.layer(LayerId::Route).len(), 0);
        assert!(renderer.rendered().is_none());
    }

    #[test]
    fn live_marker_is_created_once_then_moved() {
        let mut canvas = RecordingCanvas::new();
        let mut renderer = RouteRenderer::default();
        let first = renderer.update_live_marker(&mut canvas, Point::new(382.0, 409.0));
        let second = renderer.update_live_marker(&mut canvas, Point::new(390.0, 400.0));
        assert_eq!(first, second);
        assert_eq!(canvas.layer(LayerId::Marker).len(), 1);
        assert_eq!(renderer.live_position(), Some(Point::new(390.0, 400.0)));
    }

    #[test]
    fn live_marker_is_replaced_if_canvas_lost_it() {
        use campusmap_draw::MapCanvas;

        let mut canvas = RecordingCanvas::new();
        let mut renderer = RouteRenderer::default();
        let first = renderer.update_live_marker(&mut canvas, Point::new(1.0, 1.0));
        canvas.clear_layer(LayerId::Marker);
        let second = renderer.update_live_marker(&mut canvas, Point::new(2.0, 2.0));
        assert_ne!(first, second);
        assert_eq!(canvas.layer(LayerId::Marker).len(), 1);
    }
}
