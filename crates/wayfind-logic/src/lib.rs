//! Pure route-step generation for campus wayfinding.
//!
//! This crate turns a visitor's position and a chosen point of interest
//! into an ordered list of navigation steps plus the waypoints a floor plan
//! needs to draw the path. Functions take plain data and return results;
//! there is no rendering, storage or network access, so the same routes
//! feed the map view, the camera overlay, and the headless harness.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Static POI catalog: lookup, category filter, text search |
//! | [`constants`] | Fixed step distances, route totals, display radii |
//! | [`cursor`] | Step cursor: bounded next/previous, displayed floor |
//! | [`error`] | Route and catalog error types |
//! | [`facility`] | Campus layout: zones, elevators, connector floor, bounds |
//! | [`planner`] | Route planner over the facility topology |
//! | [`route`] | Route data shared by planner, cursor and renderers |
//! | [`validation`] | Layout and catalog checks (errors and warnings) |
//! | [`view`] | Inputs for the floor-plan and camera-overlay renderers |

pub mod catalog;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod facility;
pub mod planner;
pub mod route;
pub mod validation;
pub mod view;
