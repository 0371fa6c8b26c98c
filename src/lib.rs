pub mod config;
pub mod error;
pub mod geometry;
pub mod planner_query;
pub mod session;
pub mod utils;
pub mod waypoint;
