//! Route-step generation over the hand-authored campus topology.
//!
//! Algorithm: "connector floor or bust"
//! 1. Classify origin and destination into wings
//! 2. Same wing, same floor: walk the corridor to the destination
//! 3. Same wing, other floor: walk to the wing elevator, ride, walk out
//! 4. Other wing: get to the connector floor, cross on it to the
//!    destination wing's elevator, ride to the destination floor if needed,
//!    arrive
//! 5. Close with an `arrive` step unless the itinerary already ends in one
//!
//! Step distances and route totals are fixed constants, not measurements.
//!
//! ```
//! use wayfind_logic::catalog::PoiCatalog;
//! use wayfind_logic::facility::Point;
//! use wayfind_logic::planner::compute_route;
//! use wayfind_logic::route::StepAction;
//!
//! let catalog = PoiCatalog::builtin().unwrap();
//! let cafeteria = catalog.get("CAFETERIA").unwrap();
//! let route = compute_route(Point::new(200.0, 350.0, 0), cafeteria).unwrap();
//! assert_eq!(route.steps[1].action, StepAction::Elevator { arrival_floor: 1 });
//! assert!(route.steps.last().unwrap().action.is_arrive());
//! ```

use crate::catalog::Poi;
use crate::constants::{route_totals, step_distance};
use crate::error::RouteError;
use crate::facility::{FacilityConfig, Point, Zone};
use crate::route::{RouteData, RouteStep, StepAction};
use crate::validation::Severity;

/// Plans routes over one validated facility layout.
#[derive(Debug, Clone, Default)]
pub struct RoutePlanner {
    facility: FacilityConfig,
}

impl RoutePlanner {
    /// Build a planner, rejecting layouts with error-level findings.
    pub fn new(facility: FacilityConfig) -> Result<Self, RouteError> {
        if let Some(problem) = facility
            .validate()
            .into_iter()
            .find(|f| f.severity == Severity::Error)
        {
            return Err(RouteError::InvalidFacility(problem.message));
        }
        Ok(Self { facility })
    }

    pub fn facility(&self) -> &FacilityConfig {
        &self.facility
    }

    /// Compute the itinerary from `origin` to `destination`.
    ///
    /// Deterministic and side-effect free. `origin == destination.location`
    /// yields a single `arrive` step rather than an error.
    pub fn plan(&self, origin: Point, destination: &Poi) -> Result<RouteData, RouteError> {
        let facility = &self.facility;
        let target = destination.location;
        facility.check_point(&origin)?;
        facility.check_point(&target)?;

        let start = facility.zone_of(&origin)?;
        let end = facility.zone_of(&target)?;

        if origin == target {
            log::debug!("Route to {}: already there", destination.id);
            let mut route = RouteBuilder::stationary(origin);
            route.step("You have arrived".to_string(), step_distance::ARRIVED, StepAction::Arrive);
            return Ok(route.finish(destination));
        }

        let mut route = RouteBuilder::new(origin);
        if start == end && origin.floor == target.floor {
            log::debug!("Route to {}: same floor in {start}", destination.id);
            self.same_floor(&mut route, origin, destination);
        } else if start == end {
            log::debug!(
                "Route to {}: {start}, floor {} -> {}",
                destination.id,
                origin.floor,
                target.floor
            );
            self.same_zone(&mut route, start, origin, destination);
        } else {
            log::debug!(
                "Route to {}: {start} floor {} -> {end} floor {}",
                destination.id,
                origin.floor,
                target.floor
            );
            self.cross_zone(&mut route, start, end, origin, destination);
        }

        Ok(route.finish(destination))
    }

    fn same_floor(&self, route: &mut RouteBuilder, origin: Point, destination: &Poi) {
        let target = destination.location;
        route
            .through(self.facility.corridor_point(origin.x, origin.floor))
            .through(self.facility.corridor_point(target.x, target.floor))
            .through(target);
        route.step(
            format!("Walk to {}", destination.name),
            step_distance::WALK_TO_DESTINATION,
            StepAction::Straight,
        );
    }

    fn same_zone(&self, route: &mut RouteBuilder, zone: Zone, origin: Point, destination: &Poi) {
        let target = destination.location;
        let elevator = self.facility.elevator_of(zone);

        route
            .through(self.facility.corridor_point(origin.x, origin.floor))
            .through(elevator.at(origin.floor));
        route.step(
            format!("Go to {zone} Elevator"),
            step_distance::WALK_TO_ELEVATOR,
            StepAction::Straight,
        );

        route.through(elevator.at(target.floor));
        route.step(
            format!("Take elevator to Level {}", target.floor),
            step_distance::ELEVATOR_RIDE,
            StepAction::Elevator {
                arrival_floor: target.floor,
            },
        );

        route
            .through(self.facility.corridor_point(target.x, target.floor))
            .through(target);
        route.step(
            format!("Walk to {}", destination.name),
            step_distance::WALK_FROM_ELEVATOR,
            StepAction::Straight,
        );
    }

    fn cross_zone(
        &self,
        route: &mut RouteBuilder,
        start: Zone,
        end: Zone,
        origin: Point,
        destination: &Poi,
    ) {
        let target = destination.location;
        let connector = self.facility.connector_floor;
        let start_elevator = self.facility.elevator_of(start);
        let end_elevator = self.facility.elevator_of(end);

        // Leg 1: reach the connector floor in the start wing.
        if origin.floor != connector {
            route
                .through(self.facility.corridor_point(origin.x, origin.floor))
                .through(start_elevator.at(origin.floor));
            route.step(
                format!("Walk to {start} Elevator"),
                step_distance::WALK_TO_START_ELEVATOR,
                StepAction::Straight,
            );
            route.through(start_elevator.at(connector));
            route.step(
                format!("Take elevator to Level {connector} (Bridge Level)"),
                step_distance::ELEVATOR_RIDE,
                StepAction::Elevator {
                    arrival_floor: connector,
                },
            );
        } else {
            route.through(start_elevator.at(connector));
            route.step(
                "Walk to main corridor".to_string(),
                step_distance::WALK_TO_CORRIDOR,
                StepAction::Straight,
            );
        }

        // Leg 2: cross to the destination wing's elevator.
        let direction = if end_elevator.x > start_elevator.x {
            "East"
        } else {
            "West"
        };
        let midpoint = (start_elevator.x + end_elevator.x) / 2.0;
        route
            .through(self.facility.corridor_point(midpoint, connector))
            .through(end_elevator.at(connector));
        route.step(
            format!("Walk {direction} towards {end}"),
            step_distance::CROSS_CAMPUS,
            StepAction::Straight,
        );

        // Leg 3: ride to the destination floor unless it is the connector.
        if target.floor != connector {
            route.through(end_elevator.at(target.floor));
            route.step(
                format!("Take {end} elevator to Level {}", target.floor),
                step_distance::ELEVATOR_RIDE,
                StepAction::Elevator {
                    arrival_floor: target.floor,
                },
            );
        }

        // Leg 4: walk in.
        route
            .through(self.facility.corridor_point(target.x, target.floor))
            .through(target);
        route.step(
            format!("Arrive at {}", destination.name),
            step_distance::ARRIVE_WALK,
            StepAction::Arrive,
        );
    }
}

/// Compute a route over the default campus layout.
pub fn compute_route(origin: Point, destination: &Poi) -> Result<RouteData, RouteError> {
    RoutePlanner::default().plan(origin, destination)
}

/// Accumulates waypoints and closes steps against them.
struct RouteBuilder {
    steps: Vec<RouteStep>,
    waypoints: Vec<Point>,
}

impl RouteBuilder {
    fn new(origin: Point) -> Self {
        Self {
            steps: Vec::new(),
            waypoints: vec![origin],
        }
    }

    /// A degenerate route: one zero-length segment from the spot to itself.
    fn stationary(here: Point) -> Self {
        Self {
            steps: Vec::new(),
            waypoints: vec![here, here],
        }
    }

    /// Extend the path. A point equal to the current end is skipped so the
    /// renderers never get zero-length segments.
    fn through(&mut self, point: Point) -> &mut Self {
        if self.waypoints.last() != Some(&point) {
            self.waypoints.push(point);
        }
        self
    }

    /// Close a step at the most recent waypoint.
    fn step(&mut self, instruction: String, distance_units: u32, action: StepAction) {
        self.steps.push(RouteStep {
            instruction,
            distance_units,
            action,
            waypoint_end: self.waypoints.len() - 1,
        });
    }

    fn finish(mut self, destination: &Poi) -> RouteData {
        let ends_in_arrival = self.steps.last().is_some_and(|s| s.action.is_arrive());
        if !ends_in_arrival {
            self.step(
                "You have arrived".to_string(),
                step_distance::ARRIVED,
                StepAction::Arrive,
            );
        }
        RouteData {
            steps: self.steps,
            waypoints: self.waypoints,
            destination: destination.clone(),
            total_distance_units: route_totals::TOTAL_DISTANCE_UNITS,
            estimated_minutes: route_totals::ESTIMATED_MINUTES,
        }
    }
}
