pub mod summary_service;
pub mod transaction_service;

pub use summary_service::{Overview, SummaryService};
pub use transaction_service::{TransactionInput, TransactionService};

use crate::errors::{CashError, ValidationError};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Cash(#[from] CashError),
    #[error("{0}")]
    Invalid(#[from] ValidationError),
}

impl ServiceError {
    /// True when the failure came from user input rather than the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ServiceError::Invalid(_) | ServiceError::Cash(CashError::Validation(_))
        )
    }
}
