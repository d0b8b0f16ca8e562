//! `mb-sim` — tick loop driver for the mailbot simulation.
//!
//! # Tick order
//!
//! ```text
//! for each tick:
//!   ① Arrivals   — drain the MailSource; insert items into the pool
//!                  (overweight mail is rejected and reported, run continues).
//!   ② Dispatch   — one scheduler matching pass; apply each Assignment to
//!                  the fleet (carrier, escorts, tube, dispatch signals).
//!   ③ Robots     — step every robot in ascending RobotId; apply effects:
//!                    Delivered       → observer (the delivery sink)
//!                    ReturnedToPool  → scheduler.insert
//!                    BecameIdle      → scheduler.register_idle
//! ```
//!
//! The order is fixed and every sub-step is sequential, so runs are fully
//! deterministic — "waiting" only ever exists as robot state across ticks,
//! never as suspended control flow.
//!
//! # Crate layout
//!
//! | Module       | Contents                              |
//! |--------------|---------------------------------------|
//! | [`sim`]      | `Sim<A>` and the tick loop            |
//! | [`builder`]  | `SimBuilder` (config validation)      |
//! | [`observer`] | `SimObserver` trait, `NoopObserver`   |
//! | [`error`]    | `SimError`, `SimResult<T>`            |

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
