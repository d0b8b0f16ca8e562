//! `mb-pool` — weight-classed, priority-ordered mail storage.
//!
//! # Crate layout
//!
//! | Module    | Contents                        |
//! |-----------|---------------------------------|
//! | [`pool`]  | `MailPool` (three class queues) |
//! | [`error`] | `PoolError`, `PoolResult<T>`    |
//!
//! # Ordering model (summary)
//!
//! Each [`CarryClass`][mb_core::CarryClass] has its own queue, kept sorted by
//! [`MailItem::rank`][mb_core::MailItem::rank]:
//!
//! ```text
//! higher priority  →  lower destination floor  →  earlier arrival (MailId)
//! ```
//!
//! Insertion is an ordered merge (`partition_point` + insert), so arrival
//! order among equal-priority, equal-destination items is preserved exactly.

pub mod error;
pub mod pool;


pub use error::{PoolError, PoolResult};
pub use pool::MailPool;
