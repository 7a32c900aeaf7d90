//! # Store Messages
//!
//! Requests sent from a [`StoreClient`](crate::StoreClient) to a [`StoreActor`](crate::StoreActor).

use crate::entity::{Payload, Resource};
use crate::error::StoreError;
use crate::id::RecordId;
use tokio::sync::oneshot;

/// One-shot reply channel carried by every request.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// One variant per store operation.
///
/// Payloads travel unvalidated; the actor runs validation inside its own task so that check and
/// write happen in the same step.
#[derive(Debug)]
pub enum StoreRequest<T: Resource> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: RecordId,
        respond_to: Response<T>,
    },
    Create {
        payload: Payload,
        respond_to: Response<T>,
    },
    Update {
        id: RecordId,
        payload: Payload,
        respond_to: Response<T>,
    },
    Delete {
        id: RecordId,
        respond_to: Response<T>,
    },
}
