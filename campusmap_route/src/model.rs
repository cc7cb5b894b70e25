// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use indexmap::{Equivalent, IndexMap};
use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::DataError;

const BUILTIN: &str = include_str!("../data/campus.json");

/// A named, selectable endpoint on the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Label shown in the selectors.
    #[serde(rename = "name")]
    pub display_name: String,
    /// Horizontal position in the image's native coordinates.
    pub x: f64,
    /// Vertical position in the image's native coordinates.
    pub y: f64,
}

impl Location {
    /// Position in native coordinates.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// An intermediate vertex that shapes a route.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Horizontal position in the image's native coordinates.
    pub x: f64,
    /// Vertical position in the image's native coordinates.
    pub y: f64,
}

impl Waypoint {
    /// Position in native coordinates.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// An authored route between two locations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Location id the point list starts at.
    pub origin: String,
    /// Location id the point list ends at.
    pub destination: String,
    /// Location and waypoint ids, origin first.
    pub points: Vec<String>,
    /// Display distance, e.g. `"450m"`.
    pub distance: String,
    /// Display walking time, e.g. `"5-6 min"`.
    pub duration: String,
}

impl Route {
    /// Text of the distance/time badge.
    #[must_use]
    pub fn badge_text(&self) -> String {
        format!("{} (~{})", self.distance, self.duration)
    }
}

/// Ordered `(origin, destination)` key of an authored route.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct RouteKey {
    origin: String,
    destination: String,
}

/// Borrowed form of [`RouteKey`]: hashes identically, so lookups do not allocate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct PairRef<'a>(pub(crate) &'a str, pub(crate) &'a str);

impl Equivalent<RouteKey> for PairRef<'_> {
    fn equivalent(&self, key: &RouteKey) -> bool {
        self.0 == key.origin && self.1 == key.destination
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCampusData {
    locations: IndexMap<String, Location>,
    #[serde(default)]
    waypoints: IndexMap<String, Waypoint>,
    #[serde(default)]
    routes: Vec<Route>,
}

/// The static tables the map works from: locations, waypoints and routes.
///
/// Read-only once built. Iteration follows authoring order.
#[derive(Clone, Debug)]
pub struct CampusData {
    locations: IndexMap<String, Location>,
    waypoints: IndexMap<String, Waypoint>,
    pub(crate) routes: IndexMap<RouteKey, Route>,
}

impl CampusData {
    /// Builds and validates the tables.
    pub fn new(
        locations: IndexMap<String, Location>,
        waypoints: IndexMap<String, Waypoint>,
        routes: impl IntoIterator<Item = Route>,
    ) -> Result<Self, DataError> {
        if let Some(id) = waypoints.keys().find(|id| locations.contains_key(*id)) {
            return Err(DataError::DuplicateId { id: id.clone() });
        }

        let mut table = IndexMap::new();
        for route in routes {
            if route.origin == route.destination {
                return Err(DataError::SameEndpoints {
                    id: route.origin.clone(),
                });
            }
            for endpoint in [&route.origin, &route.destination] {
                if !locations.contains_key(endpoint) {
                    return Err(DataError::UnknownEndpoint {
                        id: endpoint.clone(),
                    });
                }
            }
            let first = route.points.first().map(String::as_str);
            let last = route.points.last().map(String::as_str);
            if first != Some(route.origin.as_str()) || last != Some(route.destination.as_str()) {
                return Err(DataError::EndpointMismatch {
                    origin: route.origin.clone(),
                    destination: route.destination.clone(),
                });
            }
            let reverse = PairRef(&route.destination, &route.origin);
            let key = RouteKey {
                origin: route.origin.clone(),
                destination: route.destination.clone(),
            };
            if table.contains_key(&reverse) || table.contains_key(&key) {
                return Err(DataError::DuplicateRoute {
                    origin: route.origin.clone(),
                    destination: route.destination.clone(),
                });
            }
            table.insert(key, route);
        }

        Ok(Self {
            locations,
            waypoints,
            routes: table,
        })
    }

    /// Parses and validates a JSON document of the form
    /// `{ "locations": {..}, "waypoints": {..}, "routes": [..] }`.
    pub fn from_json(text: &str) -> Result<Self, DataError> {
        let raw: RawCampusData = serde_json::from_str(text)?;
        Self::new(raw.locations, raw.waypoints, raw.routes)
    }

    /// The calibrated campus tables shipped with the crate.
    pub fn builtin() -> Result<Self, DataError> {
        Self::from_json(BUILTIN)
    }

    /// Looks up a location.
    #[must_use]
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }

    /// Locations in authoring order.
    pub fn locations(&self) -> impl ExactSizeIterator<Item = (&str, &Location)> + '_ {
        self.locations.iter().map(|(id, loc)| (id.as_str(), loc))
    }

    /// Waypoints in authoring order.
    pub fn waypoints(&self) -> impl ExactSizeIterator<Item = (&str, &Waypoint)> + '_ {
        self.waypoints.iter().map(|(id, wp)| (id.as_str(), wp))
    }

    /// Routes in authoring order.
    pub fn routes(&self) -> impl ExactSizeIterator<Item = &Route> + '_ {
        self.routes.values()
    }

    /// `(value, label)` pairs for an origin or destination selector.
    #[must_use]
    pub fn selector_options(&self) -> Vec<(&str, &str)> {
        self.locations
            .iter()
            .map(|(id, loc)| (id.as_str(), loc.display_name.as_str()))
            .collect()
    }

    /// Position of a location or, failing that, a waypoint.
    #[must_use]
    pub fn coordinates(&self, id: &str) -> Option<Point> {
        self.locations
            .get(id)
            .map(Location::position)
            .or_else(|| self.waypoints.get(id).map(Waypoint::position))
    }

    /// Maps ids to positions, dropping ids that name nothing.
    pub fn resolve_coordinates<'a, I>(&self, ids: I) -> Vec<Point>
    where
        I: IntoIterator<Item = &'a str>,
    {
        ids.into_iter()
            .filter_map(|id| {
                let point = self.coordinates(id);
                if point.is_none() {
                    tracing::warn!(id, "dropping unresolvable route point");
                }
                point
            })
            .collect()
    }

    /// Display label of a location, falling back to its id.
    pub(crate) fn label<'a>(&'a self, id: &'a str) -> &'a str {
        self.locations
            .get(id)
            .map_or(id, |loc| loc.display_name.as_str())
    }

    /// `"A ↔ B"` labels for every authored route.
    #[must_use]
    pub fn route_labels(&self) -> Vec<String> {
        self.routes
            .values()
            .map(|route| {
                format!(
                    "{} ↔ {}",
                    self.label(&route.origin),
                    self.label(&route.destination)
                )
            })
            .collect()
    }
}
