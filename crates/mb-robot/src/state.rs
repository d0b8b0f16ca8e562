//! The three delivery states.

use std::fmt;

/// Where a robot is in its delivery cycle.
///
/// ```text
/// Waiting ──dispatch──▶ Delivering ──last drop-off──▶ Returning ──depot──▶ Waiting
///                           │  ▲
///                           └──┘  tube promotion (solo only)
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RobotState {
    /// Idle at the depot, registered with the scheduler.
    Waiting,
    /// Carrying (or escorting) toward a destination floor.
    Delivering,
    /// Heading back to the depot.
    Returning,
}

impl fmt::Display for RobotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RobotState::Waiting => "WAITING",
            RobotState::Delivering => "DELIVERING",
            RobotState::Returning => "RETURNING",
        };
        write!(f, "{name}")
    }
}
