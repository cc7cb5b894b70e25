// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use campusmap_draw::{MapCanvas, MarkId};
use campusmap_draw_svg::{MapDocument, SvgCanvas};
use campusmap_route::{CampusData, RenderOutcome, RouteError, RouteRenderer, RouteTheme};
use campusmap_view::{ViewportController, ViewportState};
use kurbo::{Point, Size};

use crate::{AssetLoadFailure, MapConfig};

/// One interactive map: image, viewport, selections, route and live marker.
///
/// Every command runs to completion before the next; the session is the
/// only owner of its state.
#[derive(Debug)]
pub struct MapSession<C: MapCanvas> {
    config: MapConfig,
    data: CampusData,
    document: MapDocument,
    canvas: C,
    viewport: ViewportController,
    renderer: RouteRenderer,
    origin: String,
    destination: String,
    badge: Option<String>,
}

impl<C: MapCanvas> MapSession<C> {
    /// Finishes startup once the map asset has loaded or failed to.
    ///
    /// A failed load is replaced by a placeholder image of the configured
    /// native size; either way the overlay layers and the live marker are
    /// set up and the viewport is fitted. The configured size is also used
    /// when the document has neither a viewBox nor unitless/`px` width and
    /// height.
    pub fn initialize(
        config: MapConfig,
        data: CampusData,
        mut canvas: C,
        container: Size,
        asset: Result<MapDocument, AssetLoadFailure>,
    ) -> Self {
        let document = match asset {
            Ok(document) => document,
            Err(err) => {
                tracing::warn!(error = %err, "map asset unavailable, showing placeholder");
                MapDocument::placeholder(config.native_size())
            }
        };
        let native = document.native_size().unwrap_or_else(|| {
            tracing::warn!(
                width = config.native_size().width,
                height = config.native_size().height,
                "map asset declares no usable size, using configured native size"
            );
            config.native_size()
        });
        let viewport = ViewportController::new(container, native, config.viewport_config());

        let mut renderer = RouteRenderer::new(RouteTheme::default());
        if let Some(at) = config.live_marker() {
            renderer.update_live_marker(&mut canvas, at);
        }

        tracing::info!(
            scale = viewport.state().scale,
            placeholder = document.is_placeholder(),
            width = native.width,
            height = native.height,
            "map session ready"
        );
        Self {
            config,
            data,
            document,
            canvas,
            viewport,
            renderer,
            origin: String::new(),
            destination: String::new(),
            badge: None,
        }
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Campus tables in use.
    #[must_use]
    pub fn data(&self) -> &CampusData {
        &self.data
    }

    /// The map image.
    #[must_use]
    pub fn document(&self) -> &MapDocument {
        &self.document
    }

    /// The overlay canvas.
    #[must_use]
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// The route renderer, for inspecting the drawn route.
    #[must_use]
    pub fn renderer(&self) -> &RouteRenderer {
        &self.renderer
    }

    /// `(value, label)` pairs for both selectors.
    #[must_use]
    pub fn selector_options(&self) -> Vec<(&str, &str)> {
        self.data.selector_options()
    }

    /// Sets the origin selector; an empty id means unselected.
    pub fn select_origin(&mut self, id: impl Into<String>) {
        self.origin = id.into();
    }

    /// Sets the destination selector; an empty id means unselected.
    pub fn select_destination(&mut self, id: impl Into<String>) {
        self.destination = id.into();
    }

    /// Current origin selection.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Current destination selection.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Distance/time badge text while visible.
    #[must_use]
    pub fn badge(&self) -> Option<&str> {
        self.badge.as_deref()
    }

    /// Looks up and draws the route between the two selections.
    ///
    /// On error nothing changes: the previous route and badge stay as they
    /// were. A route whose points cannot be resolved clears the route layer
    /// and hides the badge.
    pub fn calculate_route(&mut self) -> Result<RenderOutcome, RouteError> {
        let matched = match self.data.find_route(&self.origin, &self.destination) {
            Ok(matched) => matched,
            Err(err) => {
                tracing::info!(
                    origin = %self.origin,
                    destination = %self.destination,
                    error = %err,
                    "route not calculated"
                );
                return Err(err);
            }
        };
        let outcome = self
            .renderer
            .render(&mut self.canvas, &self.data, &matched);
        self.badge = match outcome {
            RenderOutcome::Drawn { .. } => Some(matched.route.badge_text()),
            RenderOutcome::Skipped { .. } => None,
        };
        tracing::info!(
            origin = %self.origin,
            destination = %self.destination,
            reversed = matched.reversed,
            ?outcome,
            "route calculated"
        );
        Ok(outcome)
    }

    /// Resets both selections, removes the route and hides the badge.
    pub fn clear(&mut self) {
        self.origin.clear();
        self.destination.clear();
        self.badge = None;
        self.renderer.clear(&mut self.canvas);
    }

    /// Zooms in about the container center by the configured factor.
    pub fn zoom_in(&mut self) -> ViewportState {
        self.viewport.zoom_by(self.config.zoom_in_factor)
    }

    /// Zooms out about the container center by the configured factor.
    pub fn zoom_out(&mut self) -> ViewportState {
        self.viewport.zoom_by(self.config.zoom_out_factor)
    }

    /// Refits the image and clears the route.
    pub fn reset_view(&mut self) -> ViewportState {
        let state = self.viewport.reset_to_fit();
        self.clear();
        state
    }

    /// Places or moves the live-position marker. Safe to call at any time.
    pub fn update_live_marker(&mut self, x: f64, y: f64) -> MarkId {
        self.renderer
            .update_live_marker(&mut self.canvas, Point::new(x, y))
    }

    /// The pan/zoom controller, for feeding pointer and touch input.
    pub fn viewport_mut(&mut self) -> &mut ViewportController {
        &mut self.viewport
    }

    /// The current viewport state.
    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.viewport.state()
    }

    /// Updates the container size. The current transform is kept until the
    /// next reset.
    pub fn resize(&mut self, container: Size) {
        self.viewport.set_container(container);
    }
}

impl MapSession<SvgCanvas> {
    /// The map image with the overlay layers appended, as SVG text.
    #[must_use]
    pub fn to_svg(&self) -> String {
        self.document.compose(&self.canvas)
    }
}
