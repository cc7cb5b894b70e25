// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt::Write as _;

use campusmap_draw::glyph::{PIN_HEAD_CENTER, PIN_LABEL_BASELINE, pin_outline, polyline};
use campusmap_draw::{CircleStyle, Halo, LayerId, MapCanvas, MarkId, PinRole, PinStyle, StrokeStyle};
use kurbo::{BezPath, Cap, Join, PathEl, Point};

use crate::fmt::{color, escape, num};

#[derive(Clone, Debug)]
struct SvgMark {
    id: MarkId,
    /// Translation of the wrapping group, for pins.
    origin: Option<Point>,
    element_id: Option<&'static str>,
    classes: String,
    body: String,
}

/// A [`MapCanvas`] that keeps each mark as an SVG fragment.
///
/// Pins are kept as groups translated to their tip position, so
/// [`MapCanvas::move_pin`] only rewrites the group transform.
#[derive(Clone, Default, Debug)]
pub struct SvgCanvas {
    layers: [Vec<SvgMark>; 2],
    next_id: u32,
}

impl SvgCanvas {
    /// Creates an empty canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of marks in `layer`.
    #[must_use]
    pub fn mark_count(&self, layer: LayerId) -> usize {
        self.layers[layer.index()].len()
    }

    /// The `<g id="...">` element holding `layer`.
    #[must_use]
    pub fn layer_markup(&self, layer: LayerId) -> String {
        let mut out = String::new();
        let _ = write!(out, "<g id=\"{}\">", layer.element_id());
        for mark in &self.layers[layer.index()] {
            match mark.origin {
                Some(at) => {
                    let _ = write!(out, "<g");
                    if let Some(id) = mark.element_id {
                        let _ = write!(out, " id=\"{id}\"");
                    }
                    let _ = write!(
                        out,
                        " class=\"{}\" transform=\"translate({}, {})\">{}</g>",
                        mark.classes,
                        num(at.x),
                        num(at.y),
                        mark.body
                    );
                }
                None => out.push_str(&mark.body),
            }
        }
        out.push_str("</g>");
        out
    }

    /// Every layer group, bottom to top.
    #[must_use]
    pub fn overlay_markup(&self) -> String {
        LayerId::PAINT_ORDER
            .iter()
            .map(|layer| self.layer_markup(*layer))
            .collect()
    }

    fn push(&mut self, layer: LayerId, mut mark: SvgMark) -> MarkId {
        let id = MarkId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        mark.id = id;
        self.layers[layer.index()].push(mark);
        id
    }
}

impl MapCanvas for SvgCanvas {
    fn clear_layer(&mut self, layer: LayerId) {
        self.layers[layer.index()].clear();
    }

    fn draw_path(&mut self, layer: LayerId, points: &[Point], style: &StrokeStyle) -> MarkId {
        let body = path_element(points, style);
        self.push(
            layer,
            SvgMark {
                id: MarkId(0),
                origin: None,
                element_id: None,
                classes: String::new(),
                body,
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
        let body = circle_element(center, radius, style);
        self.push(
            layer,
            SvgMark {
                id: MarkId(0),
                origin: None,
                element_id: None,
                classes: String::new(),
                body,
            },
        )
    }

    fn draw_pin(&mut self, layer: LayerId, at: Point, role: PinRole, style: &PinStyle) -> MarkId {
        let element_id = (role == PinRole::Live).then_some("live-marker");
        self.push(
            layer,
            SvgMark {
                id: MarkId(0),
                origin: Some(at),
                element_id,
                classes: format!("pin pin-{}", role.tag()),
                body: pin_body(style),
            },
        )
    }

    fn move_pin(&mut self, id: MarkId, to: Point) -> bool {
        let mark = self
            .layers
            .iter_mut()
            .flat_map(|layer| layer.iter_mut())
            .find(|mark| mark.id == id);
        match mark {
            Some(SvgMark {
                origin: Some(at), ..
            }) => {
                *at = to;
                true
            }
            _ => false,
        }
    }
}

fn path_element(points: &[Point], style: &StrokeStyle) -> String {
    let (stroke, alpha) = color(style.color);
    let mut out = format!("<path d=\"{}\" fill=\"none\"", path_data(&polyline(points)));
    if let Some(class) = style.class {
        let _ = write!(out, " class=\"{}\"", escape(class));
    }
    let _ = write!(out, " stroke=\"{stroke}\"");
    if alpha < 1.0 {
        let _ = write!(out, " stroke-opacity=\"{}\"", num(alpha));
    }
    let _ = write!(
        out,
        " stroke-width=\"{}\" stroke-linecap=\"{}\" stroke-linejoin=\"{}\"",
        num(style.width),
        cap_name(style.cap),
        join_name(style.join)
    );
    let Some(dash) = style.dash else {
        out.push_str("/>");
        return out;
    };
    let _ = write!(
        out,
        " stroke-dasharray=\"{} {}\"",
        num(dash.on),
        num(dash.off)
    );
    match dash.animation {
        Some(anim) => {
            out.push('>');
            out.push_str(&animate(
                "stroke-dashoffset",
                anim.from_offset,
                anim.to_offset,
                anim.duration_secs,
            ));
            out.push_str("</path>");
        }
        None => out.push_str("/>"),
    }
    out
}

fn circle_element(center: Point, radius: f64, style: &CircleStyle) -> String {
    let (fill, alpha) = color(style.fill);
    let mut out = format!(
        "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"",
        num(center.x),
        num(center.y),
        num(radius)
    );
    if let Some(class) = style.class {
        let _ = write!(out, " class=\"{}\"", escape(class));
    }
    let _ = write!(out, " fill=\"{fill}\"");
    if alpha < 1.0 {
        let _ = write!(out, " fill-opacity=\"{}\"", num(alpha));
    }
    if let Some((outline, width)) = style.outline {
        let (stroke, _) = color(outline);
        let _ = write!(out, " stroke=\"{stroke}\" stroke-width=\"{}\"", num(width));
    }
    out.push_str("/>");
    out
}

fn pin_body(style: &PinStyle) -> String {
    let head = PIN_HEAD_CENTER;
    let (fill, _) = color(style.fill);
    let mut out = String::new();

    if let Some(halo) = style.halo {
        out.push_str(&halo_element(&halo));
    }

    let (outline, _) = color(style.outline);
    let _ = write!(
        out,
        "<path d=\"{}\" fill=\"{fill}\" stroke=\"{outline}\" stroke-width=\"{}\"",
        path_data(&pin_outline()),
        num(style.outline_width)
    );
    if style.shadow_opacity > 0.0 {
        let _ = write!(
            out,
            " filter=\"drop-shadow(0 3px 6px rgba(0,0,0,{}))\"",
            num(style.shadow_opacity)
        );
    }
    out.push_str("/>");

    let (inner, _) = color(style.inner_fill);
    let _ = write!(
        out,
        "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{inner}\"/>",
        num(head.x),
        num(head.y),
        num(style.inner_radius)
    );

    if let Some(letter) = style.label {
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" fill=\"{fill}\" font-size=\"12\" \
             font-weight=\"bold\" font-family=\"Poppins, sans-serif\">{}</text>",
            num(PIN_LABEL_BASELINE.x),
            num(PIN_LABEL_BASELINE.y),
            escape(letter.encode_utf8(&mut [0; 4]))
        );
    }
    if let Some(radius) = style.center_dot {
        let _ = write!(
            out,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{fill}\"/>",
            num(head.x),
            num(head.y),
            num(radius)
        );
    }
    out
}

fn halo_element(halo: &Halo) -> String {
    let (fill, _) = color(halo.color);
    format!(
        "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{fill}\" opacity=\"{}\">{}{}</circle>",
        num(PIN_HEAD_CENTER.x),
        num(PIN_HEAD_CENTER.y),
        num(halo.from_radius),
        num(halo.from_opacity),
        animate("r", halo.from_radius, halo.to_radius, halo.duration_secs),
        animate(
            "opacity",
            halo.from_opacity,
            halo.to_opacity,
            halo.duration_secs
        ),
    )
}

fn animate(attribute: &str, from: f64, to: f64, duration_secs: f64) -> String {
    format!(
        "<animate attributeName=\"{attribute}\" from=\"{}\" to=\"{}\" dur=\"{}s\" \
         repeatCount=\"indefinite\"/>",
        num(from),
        num(to),
        num(duration_secs)
    )
}

fn path_data(path: &BezPath) -> String {
    let mut d = String::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                let _ = write!(d, "M{} {}", num(p.x), num(p.y));
            }
            PathEl::LineTo(p) => {
                let _ = write!(d, "L{} {}", num(p.x), num(p.y));
            }
            PathEl::QuadTo(p1, p) => {
                let _ = write!(d, "Q{} {} {} {}", num(p1.x), num(p1.y), num(p.x), num(p.y));
            }
            PathEl::CurveTo(p1, p2, p) => {
                let _ = write!(
                    d,
                    "C{} {} {} {} {} {}",
                    num(p1.x),
                    num(p1.y),
                    num(p2.x),
                    num(p2.y),
                    num(p.x),
                    num(p.y)
                );
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

fn cap_name(cap: Cap) -> &'static str {
    match cap {
        Cap::Butt => "butt",
        Cap::Round => "round",
        Cap::Square => "square",
    }
}

fn join_name(join: Join) -> &'static str {
    match join {
        Join::Bevel => "bevel",
        Join::Miter => "miter",
        Join::Round => "round",
    }
}
