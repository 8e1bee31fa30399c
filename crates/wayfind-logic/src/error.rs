//! Error types for route planning and catalog loading.
//!
//! Route planning never panics on bad input: anything the planner cannot
//! honestly turn into a route surfaces here so the caller can show a
//! fallback instead of a broken itinerary.

use thiserror::Error;

use crate::facility::Point;

/// Errors raised while planning or stepping through a route.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    /// The point lies outside the modeled campus.
    #[error("point {point} is outside the campus: {reason}")]
    InvalidPoint {
        /// The offending point.
        point: Point,
        /// Which bound it violates.
        reason: &'static str,
    },

    /// The x coordinate cannot be mapped onto any wing.
    #[error("cannot classify x = {x} into a campus zone")]
    UnknownZone {
        /// The unclassifiable coordinate.
        x: f32,
    },

    /// The planner was handed a facility layout that failed validation.
    #[error("invalid facility layout: {0}")]
    InvalidFacility(String),

    /// A cursor needs at least one step to point at.
    #[error("route has no steps")]
    EmptyRoute,

    /// Steps and waypoints disagree, so the route cannot be stepped through.
    #[error("malformed route: {}", .0.join("; "))]
    MalformedRoute(Vec<String>),
}

/// Errors raised while loading or querying the POI catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to parse POI catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate POI id {0:?}")]
    DuplicateId(String),

    #[error("POI {id:?} lists floor {floor} but its location is on floor {location_floor}")]
    FloorMismatch {
        id: String,
        floor: i32,
        location_floor: i32,
    },

    #[error("unknown POI id {0:?}")]
    UnknownPoi(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_point_message_names_the_point() {
        let err = RouteError::InvalidPoint {
            point: Point::new(500.0, 10.0, 0),
            reason: "x beyond plan width",
        };
        let msg = err.to_string();
        assert!(msg.contains("(500, 10) on floor 0"), "{msg}");
        assert!(msg.contains("x beyond plan width"));
    }

    #[test]
    fn malformed_route_lists_every_problem() {
        let err = RouteError::MalformedRoute(vec!["first".into(), "second".into()]);
        assert_eq!(err.to_string(), "malformed route: first; second");
    }

    #[test]
    fn catalog_parse_error_converts() {
        let parse_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: CatalogError = parse_err.into();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
