//! Fixed route constants — step distances, route totals, display radii.
//!
//! Distances are illustrative plan units, not meters. They are attached to
//! steps as-is and never derived from waypoint coordinates.

pub mod step_distance {
    /// Same zone, same floor: straight walk to the destination.
    pub const WALK_TO_DESTINATION: u32 = 30;
    /// Same zone, different floor: walk to the zone elevator.
    pub const WALK_TO_ELEVATOR: u32 = 20;
    /// Same zone, different floor: walk from the elevator to the destination.
    pub const WALK_FROM_ELEVATOR: u32 = 20;
    /// Cross-zone: walk to the start zone elevator before going up/down.
    pub const WALK_TO_START_ELEVATOR: u32 = 30;
    /// Cross-zone, already on the connector floor.
    pub const WALK_TO_CORRIDOR: u32 = 10;
    /// Cross-zone: the bridge walk between wings on the connector floor.
    pub const CROSS_CAMPUS: u32 = 100;
    /// Cross-zone: final walk from the end elevator into the destination.
    pub const ARRIVE_WALK: u32 = 20;
    pub const ELEVATOR_RIDE: u32 = 0;
    pub const ARRIVED: u32 = 0;
}

pub mod route_totals {
    // Reported as-is for every route; not the sum of the step distances.
    pub const TOTAL_DISTANCE_UNITS: u32 = 200;
    pub const ESTIMATED_MINUTES: u32 = 5;
}

pub mod display {
    /// A path point closer than this (on both axes) to an elevator marks that
    /// elevator as active on the floor plan.
    pub const ELEVATOR_HIGHLIGHT_RADIUS: f32 = 15.0;
}
