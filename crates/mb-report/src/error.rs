use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("delivery log write failed: {0}")]
    Csv(#[from] csv::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;
