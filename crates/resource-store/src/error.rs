//! # Store Errors
//!
//! Every outcome other than success is reported as a `StoreError`, from the synchronous store
//! and from the actor client alike, so callers match on one type.

use crate::id::RecordId;
use crate::validate::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: RecordId },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The generator repeated an identifier this store has already issued.
    #[error("identifier {0} was already issued")]
    DuplicateId(RecordId),
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
