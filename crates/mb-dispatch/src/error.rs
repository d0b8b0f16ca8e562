use mb_core::MailId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// The item needs a bigger team than the fleet will ever have.  This is
    /// a configuration mismatch between fleet size and item weights — fatal,
    /// never retried.
    #[error("mail {id} needs a team of {required}, but the fleet only has {fleet_size} robots")]
    UnassignableItem {
        id: MailId,
        required: usize,
        fleet_size: usize,
    },
}

pub type DispatchResult<T> = Result<T, DispatchError>;
