//! `mb-report` — the delivery sink made concrete.
//!
//! # Crate layout
//!
//! | Module    | Contents                                      |
//! |-----------|-----------------------------------------------|
//! | [`stats`] | `DeliveryStats` — in-memory run summary       |
//! | [`csv`]   | `CsvDeliveryLog` — one CSV row per drop-off   |
//! | [`error`] | `ReportError`, `ReportResult<T>`              |
//!
//! Both types are [`SimObserver`][mb_sim::SimObserver]s: plug one into
//! `Sim::run` and every drop-off in the building flows through it.  Observer
//! methods return nothing, so the CSV log stores its first write error
//! internally; check [`CsvDeliveryLog::take_error`] after the run.

pub mod csv;
pub mod error;
pub mod stats;

#[cfg(test)]
mod tests;

pub use error::{ReportError, ReportResult};
pub use stats::DeliveryStats;
pub use self::csv::CsvDeliveryLog;
