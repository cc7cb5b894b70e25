// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt::Write as _;

/// The user's endpoint selection cannot be looked up at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    /// Origin or destination is empty.
    #[error("origin and destination must both be selected")]
    MissingSelection,
    /// Origin and destination are the same location.
    #[error("origin and destination must be different")]
    SameEndpoints,
}

/// Why [`CampusData::find_route`](crate::CampusData::find_route) failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The selection itself is invalid.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// Both endpoints are valid and distinct, but nobody authored a route
    /// between them.
    #[error("no route available between {origin} and {destination}")]
    NotAvailable {
        /// Requested origin id.
        origin: String,
        /// Requested destination id.
        destination: String,
        /// `"A ↔ B"` label of every route that does exist.
        available: Vec<String>,
    },
}

impl RouteError {
    /// Returns `true` for input problems, as opposed to missing data.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Text to show the user.
    #[must_use]
    pub fn guidance(&self) -> String {
        match self {
            Self::Validation(ValidationFailure::MissingSelection) => {
                "Please select an origin and a destination.".to_owned()
            }
            Self::Validation(ValidationFailure::SameEndpoints) => {
                "Origin and destination must be different.".to_owned()
            }
            Self::NotAvailable { available, .. } => {
                let mut text = String::from("No route available.\n\nAvailable routes:");
                for label in available {
                    let _ = write!(text, "\n• {label}");
                }
                text
            }
        }
    }
}

/// Campus tables that cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The JSON document is malformed or has the wrong shape.
    #[error("campus data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An id names both a location and a waypoint.
    #[error("id `{id}` is used by both a location and a waypoint")]
    DuplicateId {
        /// The shared id.
        id: String,
    },

    /// A route starts or ends at something that is not a location.
    #[error("route endpoint `{id}` is not a known location")]
    UnknownEndpoint {
        /// The unknown id.
        id: String,
    },

    /// A route's point list does not run from its origin to its destination.
    #[error("points of route {origin} -> {destination} do not start and end at its endpoints")]
    EndpointMismatch {
        /// Declared origin.
        origin: String,
        /// Declared destination.
        destination: String,
    },

    /// A route leads nowhere.
    #[error("route from `{id}` to itself")]
    SameEndpoints {
        /// The repeated endpoint.
        id: String,
    },

    /// The same pair was authored twice, in either direction.
    #[error("route between {origin} and {destination} is defined more than once")]
    DuplicateRoute {
        /// Origin of the second definition.
        origin: String,
        /// Destination of the second definition.
        destination: String,
    },
}
