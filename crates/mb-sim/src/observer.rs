//! Simulation observer trait for progress reporting and data collection.

use mb_core::{MailItem, RobotId, Tick};
use mb_pool::PoolError;
use mb_robot::RobotState;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at every externally
/// observable transition.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  `on_delivery` is the delivery sink:
/// every drop-off in the building flows through it exactly once.
///
/// # Example — delivery printer
///
/// ```rust,ignore
/// struct DeliveryPrinter;
///
/// impl SimObserver for DeliveryPrinter {
///     fn on_delivery(&mut self, tick: Tick, item: &MailItem, team_size: usize) {
///         println!("{tick}: delivered [{item}] by a team of {team_size}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// A new item reached the mail room this tick (before classification).
    fn on_item_arrived(&mut self, _tick: Tick, _item: &MailItem) {}

    /// An arriving item was rejected as overweight.  The run continues.
    fn on_item_rejected(&mut self, _tick: Tick, _error: &PoolError) {}

    /// A robot received the dispatch signal as part of a team of
    /// `team_size` (1 for solo trips).
    fn on_dispatch(&mut self, _tick: Tick, _robot: RobotId, _team_size: usize) {}

    /// A robot's state machine transitioned this tick.
    fn on_state_change(&mut self, _tick: Tick, _robot: RobotId, _from: RobotState, _to: RobotState) {
    }

    /// A drop-off was reported — this is the delivery sink.
    fn on_delivery(&mut self, _tick: Tick, _item: &MailItem, _team_size: usize) {}

    /// A leftover tube item was handed back into the pool at the depot.
    fn on_item_returned(&mut self, _tick: Tick, _item: &MailItem) {}

    /// A robot registered as idle with the scheduler.
    fn on_register_idle(&mut self, _tick: Tick, _robot: RobotId) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _tick: Tick) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
