// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `campusmap` crate.
//!
//! These drive a [`MapSession`] the way the map's controls do, using an
//! in-memory asset source and the recording canvas.

use std::collections::HashMap;

use campusmap::{AssetLoadFailure, AssetSource, MapConfig, MapSession, load_asset};
use campusmap_draw::{LayerId, Mark, PinRole, RecordingCanvas};
use campusmap_draw_svg::SvgCanvas;
use campusmap_route::{CampusData, RenderOutcome, RouteError, ValidationFailure};
use kurbo::{Point, Size};

struct MemorySource(HashMap<&'static str, &'static str>);

impl AssetSource for MemorySource {
    fn fetch(&self, path: &str) -> Result<String, AssetLoadFailure> {
        self.0
            .get(path)
            .map(|text| (*text).to_owned())
            .ok_or(AssetLoadFailure::Status(404))
    }
}

const MAP: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="1056" height="816"><rect width="1056" height="816" fill="#e8f0e8"/></svg>"##;

fn source() -> MemorySource {
    MemorySource(HashMap::from([("assets/MapUVNew.svg", MAP)]))
}

fn session() -> MapSession<RecordingCanvas> {
    let config = MapConfig::default();
    let asset = load_asset(&source(), &config.asset_path);
    MapSession::initialize(
        config,
        CampusData::builtin().unwrap(),
        RecordingCanvas::new(),
        Size::new(800.0, 600.0),
        asset,
    )
}

#[test]
fn startup_fits_and_places_live_marker() {
    let session = session();
    let state = session.viewport();
    let expected = (800.0_f64 / 1056.0).min(600.0 / 816.0) * 0.9;
    assert!((state.scale - expected).abs() < 1e-9);
    assert!((state.translate.x - (800.0 - 1056.0 * expected) / 2.0).abs() < 1e-9);
    assert!((state.translate.y - (600.0 - 816.0 * expected) / 2.0).abs() < 1e-9);

    assert!(!session.document().is_placeholder());
    let markers: Vec<_> = session.canvas().layer(LayerId::Marker).collect();
    assert!(matches!(
        markers.as_slice(),
        [Mark::Pin { role: PinRole::Live, at, .. }] if *at == Point::new(382.0, 409.0)
    ));
}

#[test]
fn failed_asset_falls_back_to_placeholder() {
    let config = MapConfig::default();
    let asset = load_asset(&MemorySource(HashMap::new()), &config.asset_path);
    assert!(matches!(asset, Err(AssetLoadFailure::Status(404))));

    let mut session = MapSession::initialize(
        config,
        CampusData::builtin().unwrap(),
        SvgCanvas::new(),
        Size::new(800.0, 600.0),
        asset,
    );
    assert!(session.document().is_placeholder());
    assert!(session.viewport().scale > 0.6);

    session.select_origin("cafeteria");
    session.select_destination("edificio_p");
    assert!(session.calculate_route().is_ok());
    let svg = session.to_svg();
    assert!(svg.contains("Campus map"));
    assert!(svg.contains("id=\"live-marker\""));
    assert!(svg.contains("class=\"pin pin-origin\""));
}

#[test]
fn unsized_asset_is_fitted_at_configured_size() {
    let config = MapConfig::default();
    let sized_in_mm = MemorySource(HashMap::from([(
        "assets/MapUVNew.svg",
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="279.4mm" height="215.9mm"><g/></svg>"#,
    )]));
    let asset = load_asset(&sized_in_mm, &config.asset_path);
    let session = MapSession::initialize(
        config,
        CampusData::builtin().unwrap(),
        RecordingCanvas::new(),
        Size::new(800.0, 600.0),
        asset,
    );
    assert!(!session.document().is_placeholder());
    assert_eq!(session.document().native_size(), None);
    let expected = (800.0_f64 / 1056.0).min(600.0 / 816.0) * 0.9;
    assert!((session.viewport().scale - expected).abs() < 1e-9);
}

#[test]
fn unparsable_asset_falls_back_to_placeholder() {
    let config = MapConfig::default();
    let bad = MemorySource(HashMap::from([("assets/MapUVNew.svg", "<html/>")]));
    let asset = load_asset(&bad, &config.asset_path);
    assert!(matches!(asset, Err(AssetLoadFailure::Document(_))));
    let session = MapSession::initialize(
        config,
        CampusData::builtin().unwrap(),
        RecordingCanvas::new(),
        Size::new(800.0, 600.0),
        asset,
    );
    assert!(session.document().is_placeholder());
}

#[test]
fn calculate_sets_badge_and_draws_route() {
    let mut session = session();
    session.select_origin("edificio_a");
    session.select_destination("entrada_principal");
    assert_eq!(
        session.calculate_route().unwrap(),
        RenderOutcome::Drawn { points: 11 }
    );
    assert_eq!(session.badge(), Some("450m (~5-6 min)"));

    let route = session.renderer().rendered().unwrap();
    assert_eq!(route.coordinates.first(), Some(&Point::new(350.0, 85.0)));
    assert_eq!(route.coordinates.last(), Some(&Point::new(355.0, 720.0)));
}

#[test]
fn failures_leave_previous_route_in_place() {
    let mut session = session();
    session.select_origin("cafeteria");
    session.select_destination("edificio_p");
    session.calculate_route().unwrap();
    let drawn: Vec<_> = session.canvas().layer(LayerId::Route).cloned().collect();

    session.select_destination("cafeteria");
    assert_eq!(
        session.calculate_route().unwrap_err(),
        RouteError::Validation(ValidationFailure::SameEndpoints)
    );
    session.select_destination("");
    assert_eq!(
        session.calculate_route().unwrap_err(),
        RouteError::Validation(ValidationFailure::MissingSelection)
    );
    session.select_destination("entrada_ruiz_cortinez");
    let err = session.calculate_route().unwrap_err();
    assert!(err.guidance().contains("• Cafetería ↔ Edificio P"));

    let after: Vec<_> = session.canvas().layer(LayerId::Route).cloned().collect();
    assert_eq!(drawn, after);
    assert_eq!(session.badge(), Some("320m (~4 min)"));
}

#[test]
fn clear_resets_selections_and_keeps_live_marker() {
    let mut session = session();
    session.select_origin("entrada_ruiz_cortinez");
    session.select_destination("edificio_f");
    session.calculate_route().unwrap();
    assert_eq!(session.badge(), Some("- (~-)"));

    session.clear();
    assert_eq!(session.origin(), "");
    assert_eq!(session.destination(), "");
    assert_eq!(session.badge(), None);
    assert_eq!(session.canvas().layer(LayerId::Route).len(), 0);
    assert_eq!(session.canvas().layer(LayerId::Marker).len(), 1);
}

#[test]
fn zoom_buttons_and_reset() {
    let mut session = session();
    let fitted = session.viewport();

    let zoomed = session.zoom_in();
    assert!((zoomed.scale - fitted.scale * 1.3).abs() < 1e-9);
    // Container center stays put.
    let center = Point::new(400.0, 300.0);
    let before = fitted.screen_to_content(center);
    let after = zoomed.screen_to_content(center);
    assert!((before - after).hypot() < 1e-9);

    for _ in 0..20 {
        session.zoom_out();
    }
    assert!((session.viewport().scale - 0.3).abs() < 1e-9);

    session.select_origin("cafeteria");
    session.select_destination("edificio_p");
    session.calculate_route().unwrap();
    let reset = session.reset_view();
    assert!((reset.scale - fitted.scale).abs() < 1e-9);
    assert_eq!(session.badge(), None);
    assert_eq!(session.canvas().layer(LayerId::Route).len(), 0);
}

#[test]
fn live_marker_moves_without_touching_route() {
    let mut session = session();
    session.select_origin("cafeteria");
    session.select_destination("edificio_p");
    session.calculate_route().unwrap();
    let route: Vec<_> = session.canvas().layer(LayerId::Route).cloned().collect();

    let first = session.update_live_marker(300.0, 320.0);
    let second = session.update_live_marker(305.0, 400.0);
    assert_eq!(first, second);
    assert_eq!(session.renderer().live_position(), Some(Point::new(305.0, 400.0)));
    let after: Vec<_> = session.canvas().layer(LayerId::Route).cloned().collect();
    assert_eq!(route, after);
}

#[test]
fn no_live_marker_when_disabled() {
    let config = MapConfig {
        live_marker: None,
        ..MapConfig::default()
    };
    let asset = load_asset(&source(), &config.asset_path);
    let session = MapSession::initialize(
        config,
        CampusData::builtin().unwrap(),
        RecordingCanvas::new(),
        Size::new(800.0, 600.0),
        asset,
    );
    assert_eq!(session.canvas().layer(LayerId::Marker).len(), 0);
}

#[test]
fn gestures_reach_the_viewport() {
    let mut session = session();
    let start = session.viewport().translate;
    let view = session.viewport_mut();
    view.pointer_down(Point::new(100.0, 100.0));
    view.pointer_move(Point::new(130.0, 80.0));
    view.pointer_leave();
    view.pointer_move(Point::new(500.0, 500.0));
    let moved = session.viewport().translate;
    assert!((moved.x - (start.x + 30.0)).abs() < 1e-9);
    assert!((moved.y - (start.y - 20.0)).abs() < 1e-9);
    assert!(!session.viewport().is_dragging());
}
