use mb_core::item::TRIPLE_MAX_WEIGHT;
use mb_core::MailId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoolError {
    /// The item exceeds the triple-carry ceiling and can never be scheduled.
    /// Reported to the caller at insertion; the pool is left unchanged and
    /// the simulation continues.
    #[error("mail {id} weighs {weight} g, above the {TRIPLE_MAX_WEIGHT} g triple-carry ceiling")]
    Overweight { id: MailId, weight: u32 },
}

pub type PoolResult<T> = Result<T, PoolError>;
