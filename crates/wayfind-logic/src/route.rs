//! Route data shared by the planner, the step cursor and the renderers.

use serde::{Deserialize, Serialize};

use crate::catalog::Poi;
use crate::facility::Point;

/// What the visitor does during a step.
///
/// Both renderer adapters key off this taxonomy, so adding or renaming a
/// variant is a breaking change for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StepAction {
    Straight,
    /// Ride an elevator; the floor is carried explicitly, never read from
    /// the instruction text.
    Elevator { arrival_floor: i32 },
    Arrive,
}

impl StepAction {
    pub fn kind(&self) -> &'static str {
        match self {
            StepAction::Straight => "straight",
            StepAction::Elevator { .. } => "elevator",
            StepAction::Arrive => "arrive",
        }
    }

    pub fn is_elevator(&self) -> bool {
        matches!(self, StepAction::Elevator { .. })
    }

    pub fn is_arrive(&self) -> bool {
        matches!(self, StepAction::Arrive)
    }

    pub fn arrival_floor(&self) -> Option<i32> {
        match self {
            StepAction::Elevator { arrival_floor } => Some(*arrival_floor),
            _ => None,
        }
    }
}

/// One instruction in an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub instruction: String,
    pub distance_units: u32,
    pub action: StepAction,
    /// Index into [`RouteData::waypoints`] where this step ends.
    pub waypoint_end: usize,
}

/// A computed route: steps to read, waypoints to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteData {
    pub steps: Vec<RouteStep>,
    pub waypoints: Vec<Point>,
    pub destination: Poi,
    /// Fixed headline figure; see [`step_distance_sum`](Self::step_distance_sum).
    pub total_distance_units: u32,
    pub estimated_minutes: u32,
}

impl RouteData {
    pub fn origin(&self) -> Option<&Point> {
        self.waypoints.first()
    }

    pub fn last_step(&self) -> Option<&RouteStep> {
        self.steps.last()
    }

    /// Sum of the per-step distances. Differs from `total_distance_units`,
    /// which is a fixed figure.
    pub fn step_distance_sum(&self) -> u32 {
        self.steps.iter().map(|s| s.distance_units).sum()
    }

    pub fn elevator_rides(&self) -> usize {
        self.steps.iter().filter(|s| s.action.is_elevator()).count()
    }

    /// Waypoints to draw on one floor plan, in path order.
    pub fn waypoints_on_floor(&self, floor: i32) -> Vec<Point> {
        self.waypoints
            .iter()
            .filter(|p| p.floor == floor)
            .copied()
            .collect()
    }

    /// Floors in the order the path visits them, without repeats in a row.
    pub fn floors_visited(&self) -> Vec<i32> {
        let mut floors: Vec<i32> = self.waypoints.iter().map(|p| p.floor).collect();
        floors.dedup();
        floors
    }

    /// Check the structural guarantees every planned route carries.
    /// Returns a description of each violation; empty means well-formed.
    pub fn invariant_violations(&self) -> Vec<String> {
        let mut problems = Vec::new();

        match self.steps.last() {
            None => problems.push("route has no steps".to_string()),
            Some(last) if !last.action.is_arrive() => {
                problems.push(format!("last step is {:?}, not arrive", last.action.kind()))
            }
            Some(_) => {}
        }

        let Some(last_index) = self.waypoints.len().checked_sub(1) else {
            problems.push("route has no waypoints".to_string());
            return problems;
        };
        if self.waypoints[last_index] != self.destination.location {
            problems.push(format!(
                "path ends at {} instead of the destination {}",
                self.waypoints[last_index], self.destination.location
            ));
        }

        let mut previous_end = 0;
        for (i, step) in self.steps.iter().enumerate() {
            if step.waypoint_end > last_index {
                problems.push(format!("step {i} ends past the last waypoint"));
                continue;
            }
            if step.waypoint_end < previous_end {
                problems.push(format!("step {i} ends before the previous step"));
            }
            previous_end = step.waypoint_end;

            if let StepAction::Elevator { arrival_floor } = step.action {
                let Some(before) = step
                    .waypoint_end
                    .checked_sub(1)
                    .map(|b| self.waypoints[b])
                else {
                    problems.push(format!("elevator step {i} has no boarding waypoint"));
                    continue;
                };
                let after = self.waypoints[step.waypoint_end];
                if !before.same_spot(&after) || before.floor == after.floor {
                    problems.push(format!(
                        "elevator step {i} moves {before} -> {after}, not a pure floor change"
                    ));
                }
                if after.floor != arrival_floor {
                    problems.push(format!(
                        "elevator step {i} claims floor {arrival_floor} but lands on {}",
                        after.floor
                    ));
                }
            }
        }
        if let Some(last) = self.steps.last() {
            if last.waypoint_end != last_index {
                problems.push("last step does not end at the destination".to_string());
            }
        }

        for (i, pair) in self.waypoints.windows(2).enumerate() {
            if pair[0].floor == pair[1].floor {
                continue;
            }
            let bracketed = self
                .steps
                .iter()
                .any(|s| s.action.is_elevator() && s.waypoint_end == i + 1);
            if !bracketed {
                problems.push(format!(
                    "floor change {} -> {} at waypoint {} without an elevator step",
                    pair[0].floor,
                    pair[1].floor,
                    i + 1
                ));
            }
        }

        problems
    }
}
