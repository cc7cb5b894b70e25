// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt::Write as _;

use kurbo::Size;

use crate::SvgCanvas;
use crate::fmt::{escape, num};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// Root attributes replaced when the document is composed.
const SIZING_ATTRIBUTES: [&str; 3] = ["width", "height", "preserveAspectRatio"];

/// Failure turning asset text into a [`MapDocument`].
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The text is not well-formed XML.
    #[error("map asset is not well-formed XML: {0}")]
    Parse(#[from] roxmltree::Error),

    /// The root element is not `<svg>`.
    #[error("map asset root element is <{found}>, expected <svg>")]
    MissingRoot {
        /// Local name of the root element that was found.
        found: String,
    },
}

/// The map image, ready to receive the overlay layers.
///
/// The original root element's attributes (minus sizing) and its children
/// are retained verbatim. [`MapDocument::compose`] re-emits them with
/// container-filling, aspect-preserving sizing and appends the overlay
/// groups as the last children, so overlays share the image's coordinate
/// space.
#[derive(Clone, Debug)]
pub struct MapDocument {
    doctype: Option<String>,
    root_attributes: Vec<(String, String)>,
    inner: String,
    native_size: Option<Size>,
    placeholder: bool,
}

impl MapDocument {
    /// Parses an SVG document.
    ///
    /// A `<!DOCTYPE>` is accepted. When it declares an internal subset the
    /// declaration is kept and re-emitted by [`MapDocument::compose`], so
    /// entity references in the retained markup still resolve.
    pub fn parse(text: &str) -> Result<Self, AssetError> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(text, options)?;
        let root = doc.root_element();
        if root.tag_name().name() != "svg" {
            return Err(AssetError::MissingRoot {
                found: root.tag_name().name().to_owned(),
            });
        }

        let mut root_attributes = Vec::new();
        for ns in root.namespaces() {
            if ns.uri() == XML_NS {
                continue;
            }
            let key = match ns.name() {
                Some(prefix) => format!("xmlns:{prefix}"),
                None => "xmlns".to_owned(),
            };
            root_attributes.push((key, ns.uri().to_owned()));
        }
        if !root_attributes.iter().any(|(key, _)| key == "xmlns") {
            root_attributes.insert(0, ("xmlns".to_owned(), SVG_NS.to_owned()));
        }

        for attr in root.attributes() {
            let key = match attr.namespace() {
                None if SIZING_ATTRIBUTES.contains(&attr.name()) => continue,
                None => attr.name().to_owned(),
                Some(uri) => match root.lookup_prefix(uri) {
                    Some(prefix) => format!("{prefix}:{}", attr.name()),
                    None => continue,
                },
            };
            root_attributes.push((key, attr.value().to_owned()));
        }

        let from_view_box = root.attribute("viewBox").and_then(parse_view_box);
        let native_size = from_view_box.or_else(|| {
            let width = root.attribute("width").and_then(parse_length)?;
            let height = root.attribute("height").and_then(parse_length)?;
            Some(Size::new(width, height))
        });
        if from_view_box.is_none()
            && let Some(size) = native_size
        {
            // Keep the intrinsic coordinate system once width/height are replaced.
            root_attributes.push((
                "viewBox".to_owned(),
                format!("0 0 {} {}", num(size.width), num(size.height)),
            ));
        }

        let element = text.get(root.range()).unwrap_or_default();
        let inner = element_content(element).unwrap_or_default().to_owned();
        let doctype = text
            .get(..root.range().start)
            .and_then(internal_subset_doctype);

        Ok(Self {
            doctype,
            root_attributes,
            inner,
            native_size,
            placeholder: false,
        })
    }

    /// A stand-in shown when the real image cannot be loaded.
    #[must_use]
    pub fn placeholder(native_size: Size) -> Self {
        let (w, h) = (num(native_size.width), num(native_size.height));
        let cx = num(native_size.width / 2.0);
        let mut inner = String::new();
        let _ = write!(inner, "<rect width=\"{w}\" height=\"{h}\" fill=\"#f0f0f0\"/>");
        let _ = write!(
            inner,
            "<text x=\"{cx}\" y=\"{}\" text-anchor=\"middle\" fill=\"#666\" font-size=\"24\" \
             font-family=\"Poppins\">Campus map</text>",
            num(native_size.height / 2.0 - 8.0)
        );
        let _ = write!(
            inner,
            "<text x=\"{cx}\" y=\"{}\" text-anchor=\"middle\" fill=\"#999\" font-size=\"14\" \
             font-family=\"Poppins\">Map image unavailable - routes can still be shown</text>",
            num(native_size.height / 2.0 + 32.0)
        );
        Self {
            doctype: None,
            root_attributes: vec![
                ("xmlns".to_owned(), SVG_NS.to_owned()),
                ("viewBox".to_owned(), format!("0 0 {w} {h}")),
                ("style".to_owned(), "background:#f8faf9".to_owned()),
            ],
            inner,
            native_size: Some(native_size),
            placeholder: true,
        }
    }

    /// Size of the image's own coordinate space, if the document declares one.
    ///
    /// Taken from `viewBox`, else from `width` and `height` when both are
    /// unitless or in `px`. Physical units such as `mm` give `None`.
    #[must_use]
    pub fn native_size(&self) -> Option<Size> {
        self.native_size
    }

    /// Returns `true` for documents built by [`MapDocument::placeholder`].
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// Serializes the image followed by the overlay layers of `canvas`.
    #[must_use]
    pub fn compose(&self, canvas: &SvgCanvas) -> String {
        let mut out = String::new();
        if let Some(doctype) = &self.doctype {
            out.push_str(doctype);
            out.push('\n');
        }
        out.push_str("<svg");
        for (key, value) in &self.root_attributes {
            let _ = write!(out, " {key}=\"{}\"", escape(value));
        }
        out.push_str(" width=\"100%\" height=\"100%\" preserveAspectRatio=\"xMidYMid meet\">");
        out.push_str(&self.inner);
        out.push_str(&canvas.overlay_markup());
        out.push_str("</svg>");
        out
    }
}

/// The markup between the start and end tags of `element`, or `None` if it
/// is self-closing.
fn element_content(element: &str) -> Option<&str> {
    let mut quote = None;
    let mut start_end = None;
    for (i, c) in element.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => {
                start_end = Some(i);
                break;
            }
            (None, _) => {}
        }
    }
    let start_end = start_end?;
    if element[..start_end].ends_with('/') {
        return None;
    }
    let end_start = element.rfind("</")?;
    (end_start > start_end).then(|| &element[start_end + 1..end_start])
}

/// The `<!DOCTYPE ...>` in `prolog` when it carries an internal subset.
fn internal_subset_doctype(prolog: &str) -> Option<String> {
    let start = prolog.find("<!DOCTYPE")?;
    let end = prolog.rfind('>')?;
    let doctype = &prolog[start..=end];
    doctype.contains('[').then(|| doctype.to_owned())
}

fn parse_view_box(value: &str) -> Option<Size> {
    let mut parts = value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse::<f64>);
    let (_, _, w, h) = (parts.next()?, parts.next()?, parts.next()?.ok()?, parts.next()?.ok()?);
    (w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite()).then(|| Size::new(w, h))
}

fn parse_length(value: &str) -> Option<f64> {
    let value = value.trim();
    let value = value.strip_suffix("px").unwrap_or(value);
    let v = value.trim().parse::<f64>().ok()?;
    (v > 0.0 && v.is_finite()).then_some(v)
}
