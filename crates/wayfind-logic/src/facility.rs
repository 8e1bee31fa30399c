//! Campus facility model — zones, elevators, the connector floor.
//!
//! The campus is three wings laid out west to east on a shared floor plan.
//! Every wing has one elevator shaft, and wings are only connected by a
//! walkway on a single connector ("bridge") floor.
//!
//! ```text
//!   x:  0        130            270        400
//!       │  West   │     Main     │   East   │
//!       │   [W]   │     [M]      │   [E]    │   ← elevators on the corridor
//!       └─────────┴──────────────┴──────────┘
//! ```
//!
//! All layout literals live in [`FacilityConfig`]; its `Default` is the
//! shipped campus.
//!
//! ```
//! use wayfind_logic::facility::{FacilityConfig, Point, Zone};
//!
//! let campus = FacilityConfig::default();
//! assert_eq!(campus.zone_of(&Point::new(70.0, 120.0, 1)), Ok(Zone::West));
//! assert_eq!(campus.elevator_of(Zone::East).x, 330.0);
//! ```

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::validation::{self, ValidationError};

/// A position on one floor's plan, in abstract plan units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub floor: i32,
}

impl Point {
    pub fn new(x: f32, y: f32, floor: i32) -> Self {
        Self { x, y, floor }
    }

    /// Same plan position, ignoring the floor.
    pub fn same_spot(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) on floor {}", self.x, self.y, self.floor)
    }
}

/// One of the three building wings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    West,
    Main,
    East,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::West, Zone::Main, Zone::East];

    /// Display name used in step instructions.
    pub fn label(self) -> &'static str {
        match self {
            Zone::West => "West Wing",
            Zone::Main => "Main Bldg",
            Zone::East => "East Wing",
        }
    }

    /// Map a catalog building name onto a wing, if it names one.
    pub fn from_building(building: &str) -> Option<Zone> {
        let lower = building.to_lowercase();
        if lower.contains("west") {
            Some(Zone::West)
        } else if lower.contains("east") {
            Some(Zone::East)
        } else if lower.contains("main") {
            Some(Zone::Main)
        } else {
            None
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Plan position of an elevator shaft; the same on every floor of its wing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevatorNode {
    pub x: f32,
    pub y: f32,
}

impl ElevatorNode {
    /// The shaft's landing on `floor`.
    pub fn at(&self, floor: i32) -> Point {
        Point::new(self.x, self.y, floor)
    }
}

/// One elevator per wing. A field per zone keeps the lookup total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevatorNodes {
    pub west: ElevatorNode,
    pub main: ElevatorNode,
    pub east: ElevatorNode,
}

/// Campus layout configuration, injected into the route planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityConfig {
    /// Points with `x` strictly below this belong to the West wing.
    pub west_boundary: f32,
    /// Points with `x` strictly above this belong to the East wing.
    pub east_boundary: f32,
    pub elevators: ElevatorNodes,
    /// The only floor on which wings are connected.
    pub connector_floor: i32,
    /// y coordinate of the central east-west corridor on every floor.
    pub corridor_y: f32,
    pub plan_width: f32,
    pub plan_height: f32,
    pub lowest_floor: i32,
    pub highest_floor: i32,
    /// Main entrance; the default starting point for visitors.
    pub entrance: Point,
}

impl Default for FacilityConfig {
    fn default() -> Self {
        Self {
            west_boundary: 130.0,
            east_boundary: 270.0,
            elevators: ElevatorNodes {
                west: ElevatorNode { x: 70.0, y: 200.0 },
                main: ElevatorNode { x: 200.0, y: 200.0 },
                east: ElevatorNode { x: 330.0, y: 200.0 },
            },
            connector_floor: 1,
            corridor_y: 200.0,
            plan_width: 400.0,
            plan_height: 400.0,
            lowest_floor: 0,
            highest_floor: 2,
            entrance: Point::new(200.0, 350.0, 0),
        }
    }
}

impl FacilityConfig {
    /// Classify an x coordinate. Boundary values belong to the Main wing.
    pub fn zone_of_x(&self, x: f32) -> Result<Zone, RouteError> {
        if !x.is_finite() {
            return Err(RouteError::UnknownZone { x });
        }
        Ok(if x < self.west_boundary {
            Zone::West
        } else if x > self.east_boundary {
            Zone::East
        } else {
            Zone::Main
        })
    }

    /// Classify a point into the wing that contains it.
    pub fn zone_of(&self, point: &Point) -> Result<Zone, RouteError> {
        self.zone_of_x(point.x)
    }

    pub fn elevator_of(&self, zone: Zone) -> ElevatorNode {
        match zone {
            Zone::West => self.elevators.west,
            Zone::Main => self.elevators.main,
            Zone::East => self.elevators.east,
        }
    }

    pub fn floors(&self) -> RangeInclusive<i32> {
        self.lowest_floor..=self.highest_floor
    }

    /// The corridor line at `x` on `floor`.
    pub fn corridor_point(&self, x: f32, floor: i32) -> Point {
        Point::new(x, self.corridor_y, floor)
    }

    /// Check that a point is finite, on the plan, and on a modeled floor.
    pub fn check_point(&self, point: &Point) -> Result<(), RouteError> {
        let reason = if !point.is_finite() {
            Some("coordinates are not finite")
        } else if point.x < 0.0 || point.x > self.plan_width {
            Some("x beyond plan width")
        } else if point.y < 0.0 || point.y > self.plan_height {
            Some("y beyond plan height")
        } else if !self.floors().contains(&point.floor) {
            Some("floor not modeled")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(RouteError::InvalidPoint {
                point: *point,
                reason,
            }),
            None => Ok(()),
        }
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.check_point(point).is_ok()
    }

    /// Run every layout check and return all findings.
    pub fn validate(&self) -> Vec<ValidationError> {
        validation::validate_facility(self)
    }
}
