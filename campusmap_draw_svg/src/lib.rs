// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Campusmap Draw SVG: an SVG backend for [`campusmap_draw::MapCanvas`].
//!
//! Two pieces live here:
//!
//! - [`SvgCanvas`] keeps every overlay mark as an SVG fragment, grouped by
//!   layer, and serializes the layers as `<g id="marker-layer">` and
//!   `<g id="route-layer">` groups.
//! - [`MapDocument`] ingests the campus map image itself. It checks that the
//!   root element is `<svg>`, learns the image's native size from `viewBox`
//!   (or `width`/`height`), and re-emits it filling its container with the
//!   overlay groups appended as the last children.
//!
//! ```
//! use campusmap_draw::{CircleStyle, LayerId, MapCanvas};
//! use campusmap_draw_svg::{MapDocument, SvgCanvas};
//! use kurbo::Point;
//! use peniko::Color;
//!
//! let doc = MapDocument::parse(
//!     r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1056 816"><rect width="1056" height="816"/></svg>"#,
//! )
//! .unwrap();
//! let mut canvas = SvgCanvas::new();
//! let dot = CircleStyle { fill: Color::from_rgba8(255, 255, 255, 255), outline: None, class: None };
//! canvas.draw_circle(LayerId::Route, Point::new(340.0, 620.0), 6.0, &dot);
//!
//! let svg = doc.compose(&canvas);
//! assert!(svg.contains("<g id=\"route-layer\"><circle cx=\"340\" cy=\"620\" r=\"6\""));
//! ```

mod canvas;
mod document;
mod fmt;

pub use canvas::SvgCanvas;
pub use document::{AssetError, MapDocument};
