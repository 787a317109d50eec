//! Drone swarm simulation: task assignment, steering, work
//! resolution, and the resource economy that feeds back into it.

pub mod config;
pub mod drone;
pub mod economy;
pub mod events;
pub mod passes;
pub mod pipeline;
pub mod reservation;

pub use config::SimConfig;
pub use drone::{Drone, DroneTask};
pub use economy::Ledger;
pub use events::{EventKind, EventQueue, SimEvent};
pub use pipeline::SimPipeline;
pub use reservation::ReservationSet;
