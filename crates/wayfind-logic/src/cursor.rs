//! Step cursor — one navigation session's position within a route.
//!
//! The cursor owns its [`RouteData`] and a step index that always points at
//! a real step. Stepping past either end is a no-op.
//!
//! Floor display rule: during an elevator step the visitor has not ridden
//! yet, so the plan shows the boarding floor. Once they advance past the
//! ride, the next step ends on the arrival floor and the plan follows.
//!
//! ```
//! use wayfind_logic::catalog::PoiCatalog;
//! use wayfind_logic::cursor::StepCursor;
//! use wayfind_logic::facility::Point;
//! use wayfind_logic::planner::compute_route;
//!
//! let catalog = PoiCatalog::builtin().unwrap();
//! let route = compute_route(Point::new(200.0, 350.0, 0), catalog.get("CAFETERIA").unwrap()).unwrap();
//! let mut cursor = StepCursor::new(route).unwrap();
//! assert_eq!(cursor.current_floor(), 0);
//! cursor.advance(); // at the elevator, not yet ridden
//! assert_eq!(cursor.current_floor(), 0);
//! cursor.advance(); // rode up
//! assert_eq!(cursor.current_floor(), 1);
//! ```

use crate::error::RouteError;
use crate::route::{RouteData, RouteStep};

#[derive(Debug, Clone)]
pub struct StepCursor {
    route: RouteData,
    index: usize,
}

impl StepCursor {
    /// Start a session at the first step.
    ///
    /// Routes whose step indices don't line up with their waypoints are
    /// rejected here, so every later floor lookup is in bounds.
    pub fn new(route: RouteData) -> Result<Self, RouteError> {
        if route.steps.is_empty() {
            return Err(RouteError::EmptyRoute);
        }
        let problems = route.invariant_violations();
        if !problems.is_empty() {
            return Err(RouteError::MalformedRoute(problems));
        }
        Ok(Self { route, index: 0 })
    }

    pub fn route(&self) -> &RouteData {
        &self.route
    }

    pub fn into_route(self) -> RouteData {
        self.route
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn step_count(&self) -> usize {
        self.route.steps.len()
    }

    pub fn current_step(&self) -> &RouteStep {
        &self.route.steps[self.index]
    }

    /// The step after the current one, for a "then…" preview.
    pub fn upcoming_step(&self) -> Option<&RouteStep> {
        self.route.steps.get(self.index + 1)
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.route.steps.len()
    }

    /// Move to the next step. Returns `false` if already on the last one.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Move to the previous step. Returns `false` if already on the first.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// One-based position and step count, e.g. `(2, 4)` for "Step 2/4".
    pub fn progress(&self) -> (usize, usize) {
        (self.index + 1, self.route.steps.len())
    }

    /// The floor the plan should show for the current step.
    pub fn current_floor(&self) -> i32 {
        let step = self.current_step();
        // Validated in `new`: elevator steps always have a boarding waypoint.
        let shown = if step.action.is_elevator() {
            step.waypoint_end - 1
        } else {
            step.waypoint_end
        };
        self.route.waypoints[shown].floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PoiCatalog;
    use crate::facility::Point;
    use crate::planner::compute_route;
    use crate::route::StepAction;

    fn cursor_to(id: &str, origin: Point) -> StepCursor {
        let catalog = PoiCatalog::builtin().unwrap();
        let route = compute_route(origin, catalog.get(id).unwrap()).unwrap();
        StepCursor::new(route).unwrap()
    }

    #[test]
    fn empty_route_rejected() {
        let mut route = cursor_to("RECEPTION", Point::new(200.0, 350.0, 0)).into_route();
        route.steps.clear();
        assert!(matches!(StepCursor::new(route), Err(RouteError::EmptyRoute)));
    }

    #[test]
    fn stepping_is_bounded() {
        let mut cursor = cursor_to("RECEPTION", Point::new(200.0, 350.0, 0));
        assert_eq!(cursor.step_count(), 2);
        assert!(!cursor.retreat());
        assert_eq!(cursor.index(), 0);

        assert!(cursor.advance());
        assert!(cursor.is_last());
        assert!(!cursor.advance());
        assert_eq!(cursor.index(), 1);

        assert!(cursor.retreat());
        assert!(cursor.is_first());
    }

    #[test]
    fn progress_and_preview() {
        let mut cursor = cursor_to("CAFETERIA", Point::new(200.0, 350.0, 0));
        assert_eq!(cursor.progress(), (1, 4));
        assert_eq!(
            cursor.upcoming_step().map(|s| s.action),
            Some(StepAction::Elevator { arrival_floor: 1 })
        );
        while cursor.advance() {}
        assert_eq!(cursor.progress(), (4, 4));
        assert!(cursor.upcoming_step().is_none());
        cursor.reset();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn floor_follows_rides_in_both_directions() {
        // Entrance (floor 0) -> Oncology (East Wing, floor 2).
        let mut cursor = cursor_to("ONCOLOGY", Point::new(200.0, 350.0, 0));
        let mut floors = vec![cursor.current_floor()];
        while cursor.advance() {
            floors.push(cursor.current_floor());
        }
        // walk, ride to 1 (shown from 0), bridge on 1, ride to 2 (shown from 1), arrive on 2
        assert_eq!(floors, vec![0, 0, 1, 1, 2]);

        cursor.retreat();
        assert_eq!(cursor.current_floor(), 1);
        cursor.retreat();
        assert_eq!(cursor.current_floor(), 1);
        cursor.retreat();
        assert_eq!(cursor.current_floor(), 0);
    }

    #[test]
    fn floor_ignores_instruction_text() {
        let mut cursor = cursor_to("CAFETERIA", Point::new(200.0, 350.0, 0));
        cursor.route.steps[1].instruction = "Prenez l'ascenseur".to_string();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.current_floor(), 1);
    }

    #[test]
    fn out_of_range_step_index_rejected() {
        let mut route = cursor_to("CAFETERIA", Point::new(200.0, 350.0, 0)).into_route();
        route.steps[1].waypoint_end = 999;
        match StepCursor::new(route) {
            Err(RouteError::MalformedRoute(problems)) => {
                assert!(
                    problems.iter().any(|p| p.contains("ends past the last waypoint")),
                    "{problems:?}"
                );
            }
            other => panic!("expected MalformedRoute, got {other:?}"),
        }
    }

    #[test]
    fn elevator_step_without_boarding_waypoint_rejected() {
        let mut route = cursor_to("CAFETERIA", Point::new(200.0, 350.0, 0)).into_route();
        route.steps[1].waypoint_end = 0;
        assert!(matches!(
            StepCursor::new(route),
            Err(RouteError::MalformedRoute(_))
        ));
    }
}
