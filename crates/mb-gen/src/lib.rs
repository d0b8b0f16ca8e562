//! `mb-gen` — mail arrival sources.
//!
//! # Crate layout
//!
//! | Module        | Contents                                        |
//! |---------------|-------------------------------------------------|
//! | [`source`]    | `MailSource` trait, `NoArrivals`                |
//! | [`generator`] | `RandomMailGenerator`, `GeneratorConfig`        |
//! | [`manifest`]  | `ManifestSource` — CSV-scripted arrivals        |
//! | [`error`]     | `GenError`, `GenResult<T>`                      |
//!
//! The driver in `mb-sim` owns one [`MailSource`] and drains it at the start
//! of every tick.  Random generation is fully deterministic by seed; the
//! manifest source replays a fixed arrival script, which is what the
//! timing-sensitive scenario tests use.

pub mod error;
pub mod generator;
pub mod manifest;
pub mod source;

#[cfg(test)]
mod tests;

pub use error::{GenError, GenResult};
pub use generator::{GeneratorConfig, RandomMailGenerator};
pub use manifest::ManifestSource;
pub use source::{MailSource, NoArrivals};
