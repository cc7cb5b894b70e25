// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::{Path, PathBuf};

use campusmap_view::{PinchAnchor, ViewportConfig, ZoomLimits};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Failure reading a [`MapConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config {path}: {source}")]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The text is not a valid config document.
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "PinchAnchor", rename_all = "snake_case")]
enum PinchAnchorDef {
    Midpoint,
    None,
}

/// Everything tunable about a map session.
///
/// Missing keys take their default, so a config file only needs to name
/// what it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    /// Native size of the map image, used when the document declares none.
    pub native_size: [f64; 2],
    /// Fraction of the container the fitted image may occupy.
    pub fit_margin: f64,
    /// Smallest allowed scale.
    pub min_scale: f64,
    /// Largest allowed scale.
    pub max_scale: f64,
    /// Zoom-in button factor.
    pub zoom_in_factor: f64,
    /// Zoom-out button factor.
    pub zoom_out_factor: f64,
    /// Wheel factor when scrolling towards the user.
    pub wheel_in_factor: f64,
    /// Wheel factor when scrolling away from the user.
    pub wheel_out_factor: f64,
    /// Pinch translation policy.
    #[serde(with = "PinchAnchorDef")]
    pub pinch_anchor: PinchAnchor,
    /// Relative path (or URL path) of the map image.
    pub asset_path: String,
    /// Where the live marker starts, or `None` for no marker at startup.
    pub live_marker: Option<[f64; 2]>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            native_size: [1056.0, 816.0],
            fit_margin: 0.9,
            min_scale: ZoomLimits::DEFAULT_MIN,
            max_scale: ZoomLimits::DEFAULT_MAX,
            zoom_in_factor: 1.3,
            zoom_out_factor: 0.77,
            wheel_in_factor: 1.1,
            wheel_out_factor: 0.9,
            pinch_anchor: PinchAnchor::Midpoint,
            asset_path: "assets/MapUVNew.svg".to_owned(),
            live_marker: Some([382.0, 409.0]),
        }
    }
}

impl MapConfig {
    /// Parses a JSON config document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// [`MapConfig::native_size`] as a [`Size`].
    #[must_use]
    pub fn native_size(&self) -> Size {
        Size::new(self.native_size[0], self.native_size[1])
    }

    /// [`MapConfig::live_marker`] as a [`Point`].
    #[must_use]
    pub fn live_marker(&self) -> Option<Point> {
        self.live_marker.map(|[x, y]| Point::new(x, y))
    }

    /// Viewport tunables derived from this config.
    #[must_use]
    pub fn viewport_config(&self) -> ViewportConfig {
        ViewportConfig {
            limits: ZoomLimits::new(self.min_scale, self.max_scale),
            fit_margin: self.fit_margin,
            pinch_anchor: self.pinch_anchor,
            wheel_in_factor: self.wheel_in_factor,
            wheel_out_factor: self.wheel_out_factor,
        }
    }
}
