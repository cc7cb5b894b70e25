// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::model::PairRef;
use crate::{CampusData, Route, RouteError, ValidationFailure};

/// A route found for a requested pair, and the direction to walk it in.
#[derive(Copy, Clone, Debug)]
pub struct RouteMatch<'a> {
    /// The authored route.
    pub route: &'a Route,
    /// `true` when the request runs destination-to-origin of `route`.
    pub reversed: bool,
}

impl<'a> RouteMatch<'a> {
    /// Point ids in travel order.
    pub fn point_ids(&self) -> impl Iterator<Item = &'a str> + 'a {
        let points = self.route.points.iter().map(String::as_str);
        let (forward, backward) = if self.reversed {
            (None, Some(points.rev()))
        } else {
            (Some(points), None)
        };
        forward
            .into_iter()
            .flatten()
            .chain(backward.into_iter().flatten())
    }

    /// Id the traveller starts at.
    #[must_use]
    pub fn origin(&self) -> &'a str {
        if self.reversed {
            &self.route.destination
        } else {
            &self.route.origin
        }
    }

    /// Id the traveller ends at.
    #[must_use]
    pub fn destination(&self) -> &'a str {
        if self.reversed {
            &self.route.origin
        } else {
            &self.route.destination
        }
    }
}

impl CampusData {
    /// Finds the authored route between two location ids.
    ///
    /// Empty ids and identical ids are [`ValidationFailure`]s. Otherwise the
    /// exact `(origin, destination)` key is tried first, then the reverse
    /// key; a reverse hit comes back with [`RouteMatch::reversed`] set.
    pub fn find_route(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<RouteMatch<'_>, RouteError> {
        if origin.is_empty() || destination.is_empty() {
            return Err(ValidationFailure::MissingSelection.into());
        }
        if origin == destination {
            return Err(ValidationFailure::SameEndpoints.into());
        }

        if let Some(route) = self.routes.get(&PairRef(origin, destination)) {
            tracing::debug!(origin, destination, "route found");
            return Ok(RouteMatch {
                route,
                reversed: false,
            });
        }
        if let Some(route) = self.routes.get(&PairRef(destination, origin)) {
            tracing::debug!(origin, destination, "route found in reverse");
            return Ok(RouteMatch {
                route,
                reversed: true,
            });
        }
        Err(RouteError::NotAvailable {
            origin: origin.to_owned(),
            destination: destination.to_owned(),
            available: self.route_labels(),
        })
    }

    /// Positions along a matched route, in travel order.
    #[must_use]
    pub fn route_coordinates(&self, matched: &RouteMatch<'_>) -> Vec<Point> {
        self.resolve_coordinates(matched.point_ids())
    }
}

#[cfg(test)]
mod tests {
    use crate::{CampusData, RouteError, ValidationFailure};

    #[test]
    fn exact_key_is_forward() {
        let data = CampusData::builtin().unwrap();
        let m = data.find_route("cafeteria", "edificio_p").unwrap();
        assert!(!m.reversed);
        assert_eq!(m.origin(), "cafeteria");
        assert_eq!(m.point_ids().next(), Some("cafeteria"));
        assert_eq!(m.point_ids().count(), 9);
    }

    #[test]
    fn reverse_key_walks_backwards() {
        let data = CampusData::builtin().unwrap();
        let m = data.find_route("edificio_p", "cafeteria").unwrap();
        assert!(m.reversed);
        assert_eq!(m.origin(), "edificio_p");
        assert_eq!(m.destination(), "cafeteria");
        let ids: Vec<_> = m.point_ids().collect();
        assert_eq!(ids.first(), Some(&"edificio_p"));
        assert_eq!(ids.last(), Some(&"cafeteria"));
        assert_eq!(ids[1], "wp12");
    }

    #[test]
    fn empty_selection_is_checked_before_equality() {
        let data = CampusData::builtin().unwrap();
        assert_eq!(
            data.find_route("", "").unwrap_err(),
            RouteError::Validation(ValidationFailure::MissingSelection)
        );
        assert_eq!(
            data.find_route("cafeteria", "").unwrap_err(),
            RouteError::Validation(ValidationFailure::MissingSelection)
        );
    }

    #[test]
    fn unknown_id_is_not_available() {
        let data = CampusData::builtin().unwrap();
        let err = data.find_route("cafeteria", "library").unwrap_err();
        assert!(matches!(err, RouteError::NotAvailable { .. }));
    }
}
