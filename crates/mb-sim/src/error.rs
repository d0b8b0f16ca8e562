use mb_dispatch::DispatchError;
use mb_pool::PoolError;
use mb_robot::RobotError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    /// Fatal fleet-size mismatch surfaced by the scheduler.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// Fatal state-machine fault surfaced by a robot.
    #[error(transparent)]
    Robot(#[from] RobotError),

    /// Pool rejection on a path where it cannot be reported-and-skipped
    /// (seeding the pool through the builder).
    #[error(transparent)]
    Pool(#[from] PoolError),
}

pub type SimResult<T> = Result<T, SimError>;
