use mb_core::RobotId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RobotError {
    /// The robot attempted more drop-offs in one trip than its two carry
    /// slots permit.  Signals a scheduling bug — fatal, the run aborts.
    #[error("{robot} attempted {count} drop-offs in one trip (two carry slots max)")]
    ExcessiveDeliveries { robot: RobotId, count: u32 },
}

pub type RobotResult<T> = Result<T, RobotError>;
