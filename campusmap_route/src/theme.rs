// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use campusmap_draw::{CircleStyle, DashAnimation, DashPattern, Halo, PinStyle, StrokeStyle};
use kurbo::{Cap, Join};
use peniko::Color;

/// Origin pin color.
pub const ORIGIN_COLOR: Color = Color::from_rgba8(0x4c, 0xaf, 0x50, 255);
/// Destination pin color.
pub const DESTINATION_COLOR: Color = Color::from_rgba8(0xf4, 0x43, 0x36, 255);
/// Live-position marker color.
pub const LIVE_COLOR: Color = Color::from_rgba8(0x19, 0x76, 0xd2, 255);
/// Primary route stroke color.
pub const ROUTE_COLOR: Color = Color::from_rgba8(0x2e, 0x7d, 0x32, 255);

const WHITE: Color = Color::from_rgba8(255, 255, 255, 255);

/// Every style the route renderer uses.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RouteTheme {
    /// Wide translucent stroke under the route.
    pub shadow: StrokeStyle,
    /// Dashed, animated route stroke.
    pub primary: StrokeStyle,
    /// Dot at each interior point.
    pub waypoint: CircleStyle,
    /// Radius of the interior dots.
    pub waypoint_radius: f64,
    /// Pin at the first point.
    pub origin: PinStyle,
    /// Pin at the last point.
    pub destination: PinStyle,
    /// The live-position marker.
    pub live: PinStyle,
}

impl RouteTheme {
    /// Endpoint pin: colored body, white disc carrying one letter.
    #[must_use]
    pub fn endpoint_pin(fill: Color, label: char) -> PinStyle {
        PinStyle {
            fill,
            outline: WHITE,
            outline_width: 2.0,
            shadow_opacity: 0.3,
            inner_radius: 8.0,
            inner_fill: WHITE,
            label: Some(label),
            center_dot: None,
            halo: None,
        }
    }

    /// Live marker pin with a pulsing halo.
    #[must_use]
    pub fn live_pin(fill: Color) -> PinStyle {
        PinStyle {
            fill,
            outline: WHITE,
            outline_width: 1.5,
            shadow_opacity: 0.25,
            inner_radius: 6.0,
            inner_fill: WHITE,
            label: None,
            center_dot: Some(3.0),
            halo: Some(Halo {
                color: fill,
                from_radius: 8.0,
                to_radius: 28.0,
                from_opacity: 0.6,
                to_opacity: 0.0,
                duration_secs: 1.6,
            }),
        }
    }
}

impl Default for RouteTheme {
    fn default() -> Self {
        Self {
            shadow: StrokeStyle::solid(Color::from_rgba8(0, 0, 0, 51), 10.0),
            primary: StrokeStyle {
                color: ROUTE_COLOR,
                width: 5.0,
                cap: Cap::Round,
                join: Join::Round,
                dash: Some(DashPattern {
                    on: 20.0,
                    off: 12.0,
                    animation: Some(DashAnimation {
                        from_offset: 0.0,
                        to_offset: -64.0,
                        duration_secs: 1.5,
                    }),
                }),
                class: Some("route-polyline"),
            },
            waypoint: CircleStyle {
                fill: WHITE,
                outline: Some((ROUTE_COLOR, 2.0)),
                class: Some("route-marker"),
            },
            waypoint_radius: 6.0,
            origin: Self::endpoint_pin(ORIGIN_COLOR, 'O'),
            destination: Self::endpoint_pin(DESTINATION_COLOR, 'D'),
            live: Self::live_pin(LIVE_COLOR),
        }
    }
}
