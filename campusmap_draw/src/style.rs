// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Cap, Join};
use peniko::Color;

/// Animated dash offset, looping forever.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DashAnimation {
    /// Dash offset at the start of a cycle.
    pub from_offset: f64,
    /// Dash offset at the end of a cycle.
    pub to_offset: f64,
    /// Cycle length in seconds.
    pub duration_secs: f64,
}

/// Two-segment dash pattern.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DashPattern {
    /// Length of each drawn segment.
    pub on: f64,
    /// Length of each gap.
    pub off: f64,
    /// Optional marching-ants animation.
    pub animation: Option<DashAnimation>,
}

/// How a polyline is stroked.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color, including alpha.
    pub color: Color,
    /// Stroke width in content units.
    pub width: f64,
    /// Line cap.
    pub cap: Cap,
    /// Line join.
    pub join: Join,
    /// Dashing, or `None` for a solid stroke.
    pub dash: Option<DashPattern>,
    /// Presentation class hint for backends that support styling.
    pub class: Option<&'static str>,
}

impl StrokeStyle {
    /// Solid round-capped stroke.
    #[must_use]
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            cap: Cap::Round,
            join: Join::Round,
            dash: None,
            class: None,
        }
    }
}

/// How a filled circle is painted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CircleStyle {
    /// Fill color.
    pub fill: Color,
    /// Optional outline as `(color, width)`.
    pub outline: Option<(Color, f64)>,
    /// Presentation class hint.
    pub class: Option<&'static str>,
}

/// Expanding, fading ring drawn beneath a pin head.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Halo {
    /// Ring color.
    pub color: Color,
    /// Radius at the start of a cycle.
    pub from_radius: f64,
    /// Radius at the end of a cycle.
    pub to_radius: f64,
    /// Opacity at the start of a cycle.
    pub from_opacity: f64,
    /// Opacity at the end of a cycle.
    pub to_opacity: f64,
    /// Cycle length in seconds.
    pub duration_secs: f64,
}

/// What a pin stands for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PinRole {
    /// Start of the drawn route.
    Origin,
    /// End of the drawn route.
    Destination,
    /// Real-time position.
    Live,
}

impl PinRole {
    /// Short lowercase tag, suitable for element ids and classes.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Origin => "origin",
            Self::Destination => "destination",
            Self::Live => "live",
        }
    }
}

/// Appearance of a teardrop pin; see [`crate::glyph`] for its geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PinStyle {
    /// Body fill.
    pub fill: Color,
    /// Body outline color.
    pub outline: Color,
    /// Body outline width.
    pub outline_width: f64,
    /// Opacity of the drop shadow under the body; zero disables it.
    pub shadow_opacity: f64,
    /// Radius of the light disc inside the head.
    pub inner_radius: f64,
    /// Fill of the disc inside the head.
    pub inner_fill: Color,
    /// Letter drawn on the disc, in the body color.
    pub label: Option<char>,
    /// Radius of a dot drawn on the disc, in the body color.
    pub center_dot: Option<f64>,
    /// Pulsing ring beneath the body.
    pub halo: Option<Halo>,
}
