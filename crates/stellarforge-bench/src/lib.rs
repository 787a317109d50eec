//! Headless benchmark harness for the swarm simulation and mesher.

pub mod report;
pub mod runner;
pub mod scenes;
