// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Campusmap: an interactive campus map session.
//!
//! [`MapSession`] wires the pieces together:
//!
//! - the map image ([`MapDocument`]), loaded once through an [`AssetSource`]
//!   and replaced by a placeholder if that fails,
//! - the pan/zoom viewport from `campusmap_view`,
//! - the route tables and renderer from `campusmap_route`,
//! - an overlay canvas implementing [`MapCanvas`](campusmap_draw::MapCanvas).
//!
//! Commands mirror the map's controls: select origin and destination,
//! calculate, clear, zoom in and out, reset view, and move the live marker.
//!
//! ```
//! use campusmap::{MapConfig, MapSession};
//! use campusmap_draw_svg::MapDocument;
//! use campusmap_route::CampusData;
//! use kurbo::Size;
//!
//! let asset = MapDocument::parse("<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 1056 816\"/>")
//!     .map_err(Into::into);
//! let mut session = MapSession::initialize(
//!     MapConfig::default(),
//!     CampusData::builtin().unwrap(),
//!     campusmap_draw_svg::SvgCanvas::new(),
//!     Size::new(800.0, 600.0),
//!     asset,
//! );
//! session.select_origin("entrada_principal");
//! session.select_destination("edificio_a");
//! session.calculate_route().unwrap();
//! assert_eq!(session.badge(), Some("450m (~5-6 min)"));
//! assert!(session.to_svg().contains("id=\"live-marker\""));
//! ```

mod asset;
mod config;
mod session;

#[cfg(feature = "http")]
pub use asset::HttpSource;
pub use asset::{AssetLoadFailure, AssetSource, FileSource, load_asset};
pub use campusmap_draw_svg::MapDocument;
pub use config::{ConfigError, MapConfig};
pub use session::MapSession;
