// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Campusmap Route: authored campus routes and how they are drawn.
//!
//! - [`CampusData`] holds the static tables: selectable [`Location`]s,
//!   unselectable [`Waypoint`]s, and [`Route`]s keyed by their ordered
//!   `(origin, destination)` pair. It loads from JSON, and
//!   [`CampusData::builtin`] carries the calibrated campus tables.
//! - [`CampusData::find_route`] looks a pair up in either direction and
//!   reports whether the authored point list has to be walked backwards.
//!   Bad selections and missing routes are distinct [`RouteError`]s.
//! - [`RouteRenderer`] draws a matched route onto any
//!   [`MapCanvas`](campusmap_draw::MapCanvas) and keeps the live-position
//!   marker in its own layer.
//!
//! ```
//! use campusmap_draw::{LayerId, RecordingCanvas};
//! use campusmap_route::{CampusData, RenderOutcome, RouteRenderer};
//!
//! let data = CampusData::builtin().unwrap();
//! let matched = data.find_route("edificio_a", "entrada_principal").unwrap();
//! assert!(matched.reversed);
//! assert_eq!(matched.route.badge_text(), "450m (~5-6 min)");
//!
//! let mut canvas = RecordingCanvas::new();
//! let mut renderer = RouteRenderer::default();
//! let outcome = renderer.render(&mut canvas, &data, &matched);
//! assert_eq!(outcome, RenderOutcome::Drawn { points: 11 });
//! assert_eq!(canvas.layer(LayerId::Route).len(), 2 + 9 + 2);
//! ```

mod error;
mod lookup;
mod model;
mod render;
mod theme;

pub use error::{DataError, RouteError, ValidationFailure};
pub use lookup::RouteMatch;
pub use model::{CampusData, Location, Route, Waypoint};
pub use render::{RenderOutcome, RenderedRoute, RouteRenderer};
pub use theme::{DESTINATION_COLOR, LIVE_COLOR, ORIGIN_COLOR, ROUTE_COLOR, RouteTheme};
