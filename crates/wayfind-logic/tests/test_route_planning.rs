//! Integration tests for the full wayfinding pipeline.
//!
//! Exercises: PoiCatalog → RoutePlanner → RouteData → StepCursor → views
//!
//! All tests are pure logic — no rendering, no network.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wayfind_logic::catalog::{Poi, PoiCatalog, PoiCategory};
use wayfind_logic::cursor::StepCursor;
use wayfind_logic::facility::{FacilityConfig, Point};
use wayfind_logic::planner::{compute_route, RoutePlanner};
use wayfind_logic::route::{RouteData, StepAction};
use wayfind_logic::view::{FloorPlanView, StepOverlay};

// ── Helpers ────────────────────────────────────────────────────────────

fn catalog() -> PoiCatalog {
    PoiCatalog::builtin().expect("bundled catalog parses")
}

fn entrance() -> Point {
    Point::new(200.0, 350.0, 0)
}

fn route_to(id: &str, origin: Point) -> RouteData {
    let catalog = catalog();
    let poi = catalog.require(id).unwrap();
    compute_route(origin, poi).unwrap()
}

fn actions(route: &RouteData) -> Vec<&'static str> {
    route.steps.iter().map(|s| s.action.kind()).collect()
}

/// Every origin worth sweeping: the entrance plus every catalog location.
fn origins(catalog: &PoiCatalog) -> Vec<Point> {
    std::iter::once(entrance())
        .chain(catalog.iter().map(|p| p.location))
        .collect()
}

fn random_point(rng: &mut StdRng, facility: &FacilityConfig) -> Point {
    Point::new(
        rng.gen_range(0.0..=facility.plan_width),
        rng.gen_range(0.0..=facility.plan_height),
        rng.gen_range(facility.lowest_floor..=facility.highest_floor),
    )
}

fn random_poi(rng: &mut StdRng, facility: &FacilityConfig) -> Poi {
    let location = random_point(rng, facility);
    Poi {
        id: "RANDOM".to_string(),
        name: "Somewhere".to_string(),
        category: PoiCategory::Service,
        building: "Main".to_string(),
        floor: location.floor,
        location,
    }
}

// ── Reference scenarios ────────────────────────────────────────────────

#[test]
fn scenario_same_floor_same_wing() {
    let route = route_to("RECEPTION", entrance());
    assert_eq!(actions(&route), vec!["straight", "arrive"]);
    assert_eq!(route.steps[0].instruction, "Walk to Main Reception");
    assert_eq!(route.waypoints.first(), Some(&entrance()));
    assert_eq!(route.waypoints.last(), Some(&Point::new(200.0, 280.0, 0)));
}

#[test]
fn scenario_same_wing_other_floor() {
    let route = route_to("CAFETERIA", entrance());
    assert_eq!(
        actions(&route),
        vec!["straight", "elevator", "straight", "arrive"]
    );
    assert_eq!(route.steps[0].instruction, "Go to Main Bldg Elevator");
    assert_eq!(route.steps[1].action, StepAction::Elevator { arrival_floor: 1 });
    assert_eq!(route.steps[2].instruction, "Walk to Cafeteria");
}

#[test]
fn scenario_cross_wing_to_connector_floor() {
    let route = route_to("RADIOLOGY", entrance());
    assert_eq!(
        actions(&route),
        vec!["straight", "elevator", "straight", "arrive"]
    );
    assert_eq!(route.steps[0].instruction, "Walk to Main Bldg Elevator");
    assert_eq!(route.steps[1].action.arrival_floor(), Some(1));
    assert_eq!(route.steps[2].instruction, "Walk West towards West Wing");
    assert_eq!(route.steps[3].instruction, "Arrive at Radiology / X-Ray");
    assert_eq!(route.elevator_rides(), 1);
}

#[test]
fn scenario_cross_wing_from_connector_floor() {
    let route = route_to("ONCOLOGY", Point::new(200.0, 200.0, 1));
    assert_eq!(
        actions(&route),
        vec!["straight", "straight", "elevator", "arrive"]
    );
    assert_eq!(route.steps[0].instruction, "Walk to main corridor");
    assert_eq!(route.steps[1].instruction, "Walk East towards East Wing");
    assert_eq!(route.steps[2].action, StepAction::Elevator { arrival_floor: 2 });
    assert_eq!(route.steps[3].instruction, "Arrive at Oncology Center");
}

// ── Properties over the whole catalog ──────────────────────────────────

#[test]
fn every_catalog_route_is_well_formed() {
    let catalog = catalog();
    for origin in origins(&catalog) {
        for poi in catalog.iter() {
            let route = compute_route(origin, poi).unwrap();
            let problems = route.invariant_violations();
            assert!(
                problems.is_empty(),
                "{origin} -> {}: {problems:?}",
                poi.id
            );
            assert_eq!(route.waypoints[0], origin);
            assert_eq!(*route.waypoints.last().unwrap(), poi.location);
        }
    }
}

#[test]
fn paths_have_no_zero_length_segments() {
    let catalog = catalog();
    for origin in origins(&catalog) {
        for poi in catalog.iter() {
            if origin == poi.location {
                continue;
            }
            let route = compute_route(origin, poi).unwrap();
            assert!(
                route.waypoints.windows(2).all(|w| w[0] != w[1]),
                "{origin} -> {}: {:?}",
                poi.id,
                route.waypoints
            );
        }
    }
}

#[test]
fn routes_end_in_exactly_one_arrival() {
    let catalog = catalog();
    for origin in origins(&catalog) {
        for poi in catalog.iter() {
            let route = compute_route(origin, poi).unwrap();
            let arrivals = route.steps.iter().filter(|s| s.action.is_arrive()).count();
            assert_eq!(arrivals, 1, "{origin} -> {}", poi.id);
            assert!(route.last_step().unwrap().action.is_arrive());
        }
    }
}

#[test]
fn planning_is_idempotent() {
    let catalog = catalog();
    for origin in origins(&catalog) {
        for poi in catalog.iter() {
            assert_eq!(compute_route(origin, poi).unwrap(), compute_route(origin, poi).unwrap());
        }
    }
}

#[test]
fn no_ride_when_starting_on_connector_floor() {
    let catalog = catalog();
    let facility = FacilityConfig::default();
    for origin in origins(&catalog)
        .into_iter()
        .filter(|o| o.floor == facility.connector_floor)
    {
        let start = facility.zone_of(&origin).unwrap();
        for poi in catalog.iter() {
            if facility.zone_of(&poi.location).unwrap() == start {
                continue;
            }
            let route = compute_route(origin, poi).unwrap();
            assert_eq!(route.steps[0].action, StepAction::Straight);
            assert_eq!(route.steps[0].instruction, "Walk to main corridor");
            assert!(!route.steps[1].action.is_elevator(), "{origin} -> {}", poi.id);
        }
    }
}

#[test]
fn cross_wing_routes_use_the_bridge_floor() {
    let catalog = catalog();
    let facility = FacilityConfig::default();
    for origin in origins(&catalog) {
        for poi in catalog.iter() {
            if facility.zone_of(&origin) == facility.zone_of(&poi.location) {
                continue;
            }
            let route = compute_route(origin, poi).unwrap();
            let crossing = route
                .steps
                .iter()
                .find(|s| s.distance_units == 100)
                .expect("cross-wing route has a bridge leg");
            assert_eq!(
                route.waypoints[crossing.waypoint_end].floor,
                facility.connector_floor
            );
        }
    }
}

#[test]
fn random_points_always_route() {
    let facility = FacilityConfig::default();
    let planner = RoutePlanner::new(facility.clone()).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..2_000 {
        let origin = random_point(&mut rng, &facility);
        let poi = random_poi(&mut rng, &facility);
        let route = planner.plan(origin, &poi).unwrap();
        let problems = route.invariant_violations();
        assert!(problems.is_empty(), "{origin} -> {}: {problems:?}", poi.location);
        assert!(StepCursor::new(route).is_ok());
    }
}

#[test]
fn zone_boundaries_route_as_main() {
    let catalog = catalog();
    let cafeteria = catalog.get("CAFETERIA").unwrap();
    for x in [130.0, 270.0] {
        let route = compute_route(Point::new(x, 300.0, 0), cafeteria).unwrap();
        // Same wing as the cafeteria, so no bridge crossing.
        assert_eq!(route.steps[0].instruction, "Go to Main Bldg Elevator");
    }
}

#[test]
fn reported_totals_are_fixed_not_summed() {
    let cross = route_to("ONCOLOGY", entrance());
    let local = route_to("RECEPTION", entrance());
    assert_eq!(cross.total_distance_units, local.total_distance_units);
    assert_eq!(cross.estimated_minutes, local.estimated_minutes);
    assert_ne!(cross.step_distance_sum(), local.step_distance_sum());
}

// ── Cursor and views end to end ────────────────────────────────────────

#[test]
fn walking_a_route_end_to_end() {
    let facility = FacilityConfig::default();
    let route = route_to("PEDIATRICS", entrance());
    let mut cursor = StepCursor::new(route).unwrap();

    let mut seen_floors = Vec::new();
    loop {
        let plan = FloorPlanView::for_cursor(&cursor, &facility);
        let overlay = StepOverlay::for_cursor(&cursor);
        assert_eq!(plan.floor, cursor.current_floor());
        assert_eq!(overlay.index, cursor.index());
        assert!(plan.path.iter().all(|p| p.floor == plan.floor));
        seen_floors.push(plan.floor);
        if !cursor.advance() {
            break;
        }
    }
    assert_eq!(seen_floors.first(), Some(&0));
    assert_eq!(seen_floors.last(), Some(&2));
    assert!(cursor.is_last());
}

#[test]
fn route_serializes_for_renderers() {
    let route = route_to("CAFETERIA", entrance());
    let json = serde_json_roundtrip(&route);
    assert_eq!(json, route);
}

fn serde_json_roundtrip(route: &RouteData) -> RouteData {
    let text = serde_json::to_string(route).unwrap();
    assert!(text.contains(r#""kind":"elevator","arrival_floor":1"#));
    serde_json::from_str(&text).unwrap()
}
