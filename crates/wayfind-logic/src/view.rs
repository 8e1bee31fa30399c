//! Inputs for the two renderer adapters.
//!
//! Neither adapter lives in this crate. These records are the whole of what
//! they get: the floor-plan canvas draws a [`FloorPlanView`], the camera
//! overlay draws a [`StepOverlay`]. Both are rebuilt on every step change.

use serde::{Deserialize, Serialize};

use crate::catalog::{Poi, PoiCategory};
use crate::constants::display::ELEVATOR_HIGHLIGHT_RADIUS;
use crate::cursor::StepCursor;
use crate::facility::{FacilityConfig, Point, Zone};
use crate::route::StepAction;

/// What the floor-plan canvas draws for one floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPlanView {
    pub floor: i32,
    /// Visitor marker, only when the visitor is on this floor.
    pub origin: Option<Point>,
    /// Route polyline restricted to this floor.
    pub path: Vec<Point>,
    /// Destination marker, only when the destination is on this floor.
    pub destination: Option<Poi>,
    /// Elevator the route uses on this floor.
    pub active_elevator: Option<Zone>,
    /// The current step is an elevator ride.
    pub elevator_highlight: bool,
}

impl FloorPlanView {
    /// A plan with no route, e.g. while browsing before a destination is set.
    pub fn idle(floor: i32, visitor: Option<Point>) -> Self {
        Self {
            floor,
            origin: visitor.filter(|p| p.floor == floor),
            path: Vec::new(),
            destination: None,
            active_elevator: None,
            elevator_highlight: false,
        }
    }

    /// The plan for the cursor's current step, on the floor it implies.
    pub fn for_cursor(cursor: &StepCursor, facility: &FacilityConfig) -> Self {
        Self::for_floor(cursor, facility, cursor.current_floor())
    }

    /// The plan for the cursor's route on an explicitly chosen floor.
    pub fn for_floor(cursor: &StepCursor, facility: &FacilityConfig, floor: i32) -> Self {
        let route = cursor.route();
        let path = route.waypoints_on_floor(floor);
        let active_elevator = Zone::ALL.into_iter().find(|&zone| {
            let elv = facility.elevator_of(zone);
            path.iter().any(|p| {
                (p.x - elv.x).abs() < ELEVATOR_HIGHLIGHT_RADIUS
                    && (p.y - elv.y).abs() < ELEVATOR_HIGHLIGHT_RADIUS
            })
        });
        Self {
            floor,
            origin: route.origin().copied().filter(|p| p.floor == floor),
            path,
            destination: Some(route.destination.clone())
                .filter(|d| d.location.floor == floor),
            active_elevator,
            elevator_highlight: cursor.current_step().action.is_elevator(),
        }
    }

    /// Whether there is a line to draw (two or more points).
    pub fn has_path(&self) -> bool {
        self.path.len() >= 2
    }
}

/// What the camera overlay draws for the current step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepOverlay {
    /// Zero-based step index.
    pub index: usize,
    pub total: usize,
    pub action: StepAction,
    pub instruction: String,
    pub upcoming_instruction: Option<String>,
    pub destination_name: String,
    pub category: PoiCategory,
}

impl StepOverlay {
    pub fn for_cursor(cursor: &StepCursor) -> Self {
        let step = cursor.current_step();
        let destination = &cursor.route().destination;
        Self {
            index: cursor.index(),
            total: cursor.step_count(),
            action: step.action,
            instruction: step.instruction.clone(),
            upcoming_instruction: cursor.upcoming_step().map(|s| s.instruction.clone()),
            destination_name: destination.name.clone(),
            category: destination.category,
        }
    }
}
