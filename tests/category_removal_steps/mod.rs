//! Step definitions for category removal scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
