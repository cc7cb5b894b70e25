// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `campusmap_route` crate.
//!
//! These walk the campus tables end to end: lookup in both directions,
//! the two failure classes, and what a render leaves on the canvas.

use campusmap_draw::{LayerId, MapCanvas, Mark, PinRole, RecordingCanvas};
use campusmap_route::{CampusData, RenderOutcome, RouteError, RouteRenderer, ValidationFailure};
use kurbo::Point;

fn campus() -> CampusData {
    CampusData::builtin().unwrap()
}

#[test]
fn main_entrance_to_building_a() {
    let data = campus();
    let matched = data.find_route("entrada_principal", "edificio_a").unwrap();
    assert!(!matched.reversed);

    let coords = data.route_coordinates(&matched);
    assert_eq!(coords.len(), 11);
    assert_eq!(coords[0], Point::new(355.0, 720.0));
    assert_eq!(coords[10], Point::new(350.0, 85.0));
    assert_eq!(matched.route.badge_text(), "450m (~5-6 min)");

    let mut canvas = RecordingCanvas::new();
    let mut renderer = RouteRenderer::default();
    renderer.render(&mut canvas, &data, &matched);
    let dots = canvas
        .layer(LayerId::Route)
        .filter(|m| matches!(m, Mark::Circle { .. }))
        .count();
    assert_eq!(dots, 9);
}

#[test]
fn reverse_request_yields_reversed_points_and_same_badge() {
    let data = campus();
    let forward = data.find_route("entrada_principal", "edificio_a").unwrap();
    let backward = data.find_route("edificio_a", "entrada_principal").unwrap();
    assert!(backward.reversed);

    let mut expected = data.route_coordinates(&forward);
    expected.reverse();
    assert_eq!(data.route_coordinates(&backward), expected);
    assert_eq!(backward.route.badge_text(), forward.route.badge_text());
}

#[test]
fn every_route_reverses_exactly() {
    let data = campus();
    for route in data.routes() {
        let a = data.find_route(&route.origin, &route.destination).unwrap();
        let b = data.find_route(&route.destination, &route.origin).unwrap();
        let mut reversed = data.route_coordinates(&b);
        reversed.reverse();
        assert_eq!(data.route_coordinates(&a), reversed);
    }
}

#[test]
fn pair_without_route_lists_available_routes() {
    let data = campus();
    let err = data
        .find_route("cafeteria", "entrada_ruiz_cortinez")
        .unwrap_err();
    assert!(!err.is_validation());
    assert_eq!(
        err.guidance(),
        "No route available.\n\nAvailable routes:\n\
         • Entrada Principal ↔ Edificio A\n\
         • Cafetería ↔ Edificio P\n\
         • Entrada Ruiz Cortinez ↔ Edificio F"
    );
}

#[test]
fn same_location_is_always_a_validation_failure() {
    let data = campus();
    for (id, _) in data.locations() {
        assert_eq!(
            data.find_route(id, id).unwrap_err(),
            RouteError::Validation(ValidationFailure::SameEndpoints)
        );
    }
    assert_eq!(
        data.find_route("ghost", "ghost").unwrap_err(),
        RouteError::Validation(ValidationFailure::SameEndpoints)
    );
}

#[test]
fn render_clear_render_matches_single_render() {
    let data = campus();
    let matched = data.find_route("entrada_ruiz_cortinez", "edificio_f").unwrap();

    let mut once = RecordingCanvas::new();
    RouteRenderer::default().render(&mut once, &data, &matched);

    let mut twice = RecordingCanvas::new();
    let mut renderer = RouteRenderer::default();
    renderer.render(&mut twice, &data, &matched);
    renderer.clear(&mut twice);
    renderer.render(&mut twice, &data, &matched);

    let a: Vec<_> = once.layer(LayerId::Route).cloned().collect();
    let b: Vec<_> = twice.layer(LayerId::Route).cloned().collect();
    assert_eq!(a, b);
}

#[test]
fn new_route_replaces_old_one() {
    let data = campus();
    let mut canvas = RecordingCanvas::new();
    let mut renderer = RouteRenderer::default();
    let first = data.find_route("entrada_principal", "edificio_a").unwrap();
    let second = data.find_route("cafeteria", "edificio_p").unwrap();
    renderer.render(&mut canvas, &data, &first);
    let outcome = renderer.render(&mut canvas, &data, &second);
    assert_eq!(outcome, RenderOutcome::Drawn { points: 9 });
    assert_eq!(canvas.layer(LayerId::Route).len(), 2 + 7 + 2);
}

#[test]
fn live_marker_survives_route_changes_and_never_touches_route_layer() {
    let data = campus();
    let mut canvas = RecordingCanvas::new();
    let mut renderer = RouteRenderer::default();
    let marker = renderer.update_live_marker(&mut canvas, Point::new(382.0, 409.0));

    let matched = data.find_route("cafeteria", "edificio_p").unwrap();
    renderer.render(&mut canvas, &data, &matched);
    let before: Vec<_> = canvas.layer(LayerId::Route).cloned().collect();

    renderer.update_live_marker(&mut canvas, Point::new(300.0, 300.0));
    let after: Vec<_> = canvas.layer(LayerId::Route).cloned().collect();
    assert_eq!(before, after);

    renderer.clear(&mut canvas);
    assert!(matches!(
        canvas.get(marker),
        Some(Mark::Pin { role: PinRole::Live, at, .. }) if *at == Point::new(300.0, 300.0)
    ));
    assert!(canvas.move_pin(marker, Point::new(1.0, 1.0)));
}

#[test]
fn data_with_dangling_waypoint_still_renders() {
    let data = CampusData::from_json(
        r#"{
            "locations": {
                "a": { "name": "A", "x": 0, "y": 0 },
                "b": { "name": "B", "x": 100, "y": 0 }
            },
            "waypoints": { "m": { "x": 50, "y": 10 } },
            "routes": [
                { "origin": "a", "destination": "b", "points": ["a", "m", "lost", "b"],
                  "distance": "100m", "duration": "1 min" }
            ]
        }"#,
    )
    .unwrap();
    let matched = data.find_route("a", "b").unwrap();
    let mut canvas = RecordingCanvas::new();
    let outcome = RouteRenderer::default().render(&mut canvas, &data, &matched);
    assert_eq!(outcome, RenderOutcome::Drawn { points: 3 });
}
