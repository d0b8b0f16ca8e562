//! Step effects — what a robot asks the driver to do on its behalf.

use mb_core::MailItem;

/// An action requested by a robot's step ([`RobotFleet::step`][crate::RobotFleet::step]).
///
/// Effects are produced by the state machine and consumed by the driver,
/// which owns the pool, the scheduler, and the delivery sink.  The robot
/// itself never reaches into those structures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RobotEffect {
    /// The robot dropped `item` off at its destination floor.  The driver
    /// reports it to the delivery sink.
    Delivered {
        item: MailItem,
        /// Committed team size for the trip — 1 for solo, 2 or 3 for teams.
        team_size: usize,
    },

    /// A leftover tube item is being handed back at the depot.  The driver
    /// re-inserts it into the pool.  Should not occur in normal operation
    /// (a solo robot delivers its tube before returning); the hand-back
    /// keeps the item from being lost if scheduling ever goes wrong.
    ReturnedToPool { item: MailItem },

    /// The robot reached the depot with empty slots.  The driver registers
    /// it with the scheduler's idle registry.  Emitted exactly once per
    /// Returning → Waiting transition.
    BecameIdle,
}
