//! `mb-core` — foundational types for the `mailbot` delivery simulation.
//!
//! This crate is a dependency of every other `mb-*` crate.  It intentionally
//! has no `mb-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                           |
//! |----------|----------------------------------------------------|
//! | [`ids`]  | `RobotId`, `MailId`                                |
//! | [`time`] | `Tick`, `SimConfig`                                |
//! | [`item`] | `MailItem`, `CarryClass`, the pool ordering `Rank` |
//! | [`rng`]  | `SimRng` (deterministic, seedable)                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod item;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{MailId, RobotId};
pub use item::{CarryClass, MailItem, Rank};
pub use rng::SimRng;
pub use time::{SimConfig, Tick};
