// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Campusmap View: the pan/zoom viewport of the campus map.
//!
//! This crate is a small, headless model of the transform applied to the
//! map image inside its container. It focuses on:
//! - Fitting the native image into the container with a safety margin.
//! - Anchor‑preserving zoom with clamped scale bounds.
//! - Mouse drag, wheel zoom and two‑finger pinch gestures.
//!
//! It does **not** draw. Callers apply the returned transform to whatever
//! holds the image, for example with [`ViewportState::css_transform`] or
//! [`ViewportState::to_affine`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use campusmap_view::{ViewportConfig, ViewportController};
//!
//! let mut view = ViewportController::new(
//!     Size::new(800.0, 600.0),
//!     Size::new(1056.0, 816.0),
//!     ViewportConfig::default(),
//! );
//!
//! // Zoom in about the container center.
//! let state = view.zoom_by(1.3);
//! assert!(state.scale > 0.6618);
//!
//! // Pan with the mouse.
//! view.pointer_down(Point::new(100.0, 100.0));
//! view.pointer_move(Point::new(140.0, 90.0));
//! view.pointer_up();
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod limits;
pub mod pinch;
mod state;

pub use controller::{ViewportConfig, ViewportController};
pub use limits::{PinchAnchor, ZoomLimits};
pub use state::{CssTransform, ViewportState};
