use crate::shared::core::validation::ValidationError;
use crate::shared::infrastructure::record_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("audit log write failed: {0}")]
    Audit(StoreError),

    #[error("not signed in")]
    Unauthenticated,
}
