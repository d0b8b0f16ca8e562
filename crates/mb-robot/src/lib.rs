//! `mb-robot` — the robot delivery state machine.
//!
//! # Crate layout
//!
//! | Module     | Contents                                        |
//! |------------|-------------------------------------------------|
//! | [`state`]  | `RobotState` (Waiting / Delivering / Returning) |
//! | [`robot`]  | `Robot` — one machine's state and step logic    |
//! | [`effect`] | `RobotEffect` — what a step asks the driver to do |
//! | [`fleet`]  | `RobotFleet`, `FleetConfig`                     |
//!
//! # Step model
//!
//! A robot consumes exactly one tick per [`step`][fleet::RobotFleet::step]:
//! it either moves one floor, or performs one transition (start a trip, drop
//! off, register idle).  Steps never touch the pool or the scheduler
//! directly — they return [`RobotEffect`]s and the driver applies them,
//! mirroring the produce/apply split of the tick loop.

pub mod effect;
pub mod error;
pub mod fleet;
pub mod robot;
pub mod state;

#[cfg(test)]
mod tests;

pub use effect::RobotEffect;
pub use error::{RobotError, RobotResult};
pub use fleet::{FleetConfig, RobotFleet};
pub use robot::Robot;
pub use state::RobotState;
