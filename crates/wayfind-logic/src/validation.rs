//! Layout and catalog validation.
//!
//! Pure functions that take the facility config and POI list and return
//! findings. Nothing here is fatal; callers decide what an `Error` means.

use std::collections::HashSet;

use crate::catalog::Poi;
use crate::facility::{FacilityConfig, Zone};

/// A single validation finding.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub category: &'static str,
    pub severity: Severity,
    pub message: String,
}

/// Finding severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Error,
    Warning,
}

// ── A. Facility layout ──────────────────────────────────────────────────

/// Zone boundaries must be ordered and inside the plan.
pub fn check_zone_boundaries(facility: &FacilityConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let (west, east) = (facility.west_boundary, facility.east_boundary);
    if !west.is_finite() || !east.is_finite() || west >= east {
        errors.push(ValidationError {
            category: "zone_layout",
            severity: Severity::Error,
            message: format!("Zone boundaries out of order: west={west} east={east}"),
        });
    } else if west <= 0.0 || east >= facility.plan_width {
        errors.push(ValidationError {
            category: "zone_layout",
            severity: Severity::Error,
            message: format!(
                "Zone boundaries {west}..{east} leave an empty wing on a {}-wide plan",
                facility.plan_width
            ),
        });
    }
    errors
}

/// Each elevator must classify into the wing it serves.
pub fn check_elevators_in_zone(facility: &FacilityConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for zone in Zone::ALL {
        let elv = facility.elevator_of(zone);
        match facility.zone_of_x(elv.x) {
            Ok(found) if found == zone => {}
            Ok(found) => errors.push(ValidationError {
                category: "elevators",
                severity: Severity::Error,
                message: format!("{zone} elevator at x={} lies in {found}", elv.x),
            }),
            Err(e) => errors.push(ValidationError {
                category: "elevators",
                severity: Severity::Error,
                message: format!("{zone} elevator: {e}"),
            }),
        }
        if elv.y != facility.corridor_y {
            errors.push(ValidationError {
                category: "elevators",
                severity: Severity::Warning,
                message: format!(
                    "{zone} elevator at y={} is off the corridor line y={}",
                    elv.y, facility.corridor_y
                ),
            });
        }
    }
    errors
}

/// The floor range must be non-empty and contain the connector floor.
pub fn check_floors(facility: &FacilityConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if facility.lowest_floor > facility.highest_floor {
        errors.push(ValidationError {
            category: "floors",
            severity: Severity::Error,
            message: format!(
                "Empty floor range {}..={}",
                facility.lowest_floor, facility.highest_floor
            ),
        });
    } else if !facility.floors().contains(&facility.connector_floor) {
        errors.push(ValidationError {
            category: "floors",
            severity: Severity::Error,
            message: format!(
                "Connector floor {} outside floor range {}..={}",
                facility.connector_floor, facility.lowest_floor, facility.highest_floor
            ),
        });
    }
    errors
}

/// Corridor line and entrance must sit on the plan.
pub fn check_corridor_and_entrance(facility: &FacilityConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if !(0.0..=facility.plan_height).contains(&facility.corridor_y) {
        errors.push(ValidationError {
            category: "corridor",
            severity: Severity::Error,
            message: format!(
                "Corridor y={} outside plan height {}",
                facility.corridor_y, facility.plan_height
            ),
        });
    }
    if let Err(e) = facility.check_point(&facility.entrance) {
        errors.push(ValidationError {
            category: "entrance",
            severity: Severity::Error,
            message: format!("Entrance: {e}"),
        });
    }
    errors
}

// ── B. Catalog ──────────────────────────────────────────────────────────

/// POI ids must be unique.
pub fn check_poi_ids_unique(pois: &[Poi]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    for p in pois {
        if !seen.insert(p.id.as_str()) {
            errors.push(ValidationError {
                category: "catalog",
                severity: Severity::Error,
                message: format!("Duplicate POI id {:?}", p.id),
            });
        }
    }
    errors
}

/// A POI's floor must agree with its location's floor.
pub fn check_poi_floors(pois: &[Poi]) -> Vec<ValidationError> {
    pois.iter()
        .filter(|p| p.floor != p.location.floor)
        .map(|p| ValidationError {
            category: "catalog",
            severity: Severity::Error,
            message: format!(
                "POI {} lists floor {} but is located on floor {}",
                p.id, p.floor, p.location.floor
            ),
        })
        .collect()
}

/// Every POI must be reachable: on the plan and on a modeled floor.
pub fn check_pois_within_campus(pois: &[Poi], facility: &FacilityConfig) -> Vec<ValidationError> {
    pois.iter()
        .filter_map(|p| {
            facility
                .check_point(&p.location)
                .err()
                .map(|e| ValidationError {
                    category: "catalog",
                    severity: Severity::Error,
                    message: format!("POI {}: {e}", p.id),
                })
        })
        .collect()
}

/// Building names that name a wing should match the wing the location is in.
/// Buildings that name no wing (e.g. "Underground") are not checked.
pub fn check_poi_buildings(pois: &[Poi], facility: &FacilityConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for p in pois {
        let Some(named) = Zone::from_building(&p.building) else {
            continue;
        };
        if let Ok(actual) = facility.zone_of(&p.location) {
            if actual != named {
                errors.push(ValidationError {
                    category: "catalog",
                    severity: Severity::Warning,
                    message: format!(
                        "POI {} is listed in {:?} but located in {actual}",
                        p.id, p.building
                    ),
                });
            }
        }
    }
    errors
}

// ── Aggregates ──────────────────────────────────────────────────────────

/// All facility layout checks.
pub fn validate_facility(facility: &FacilityConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    errors.extend(check_zone_boundaries(facility));
    errors.extend(check_elevators_in_zone(facility));
    errors.extend(check_floors(facility));
    errors.extend(check_corridor_and_entrance(facility));
    errors
}

/// Facility checks plus every catalog check against that facility.
pub fn validate_campus(facility: &FacilityConfig, pois: &[Poi]) -> Vec<ValidationError> {
    let mut errors = validate_facility(facility);
    errors.extend(check_poi_ids_unique(pois));
    errors.extend(check_poi_floors(pois));
    errors.extend(check_pois_within_campus(pois, facility));
    errors.extend(check_poi_buildings(pois, facility));
    for e in &errors {
        log::warn!("[{}] {}", e.category, e.message);
    }
    errors
}

pub fn has_errors(findings: &[ValidationError]) -> bool {
    findings.iter().any(|f| f.severity == Severity::Error)
}
