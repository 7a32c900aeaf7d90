//! # Store Client
//!
//! Async handle for talking to a [`StoreActor`](crate::StoreActor).

use crate::entity::{Payload, Resource};
use crate::error::StoreError;
use crate::id::RecordId;
use crate::message::StoreRequest;
use tokio::sync::{mpsc, oneshot};

/// Cloneable sender half of a store actor.
///
/// Every method fails with [`StoreError::ActorClosed`] once the actor has stopped, and with
/// [`StoreError::ActorDropped`] if the actor went away before answering.
pub struct StoreClient<T: Resource> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: Resource> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Resource> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::List { respond_to })
            .await
    }

    pub async fn get(&self, id: RecordId) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    pub async fn create(&self, payload: Payload) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Create {
            payload,
            respond_to,
        })
        .await
    }

    pub async fn update(&self, id: RecordId, payload: Payload) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Update {
            id,
            payload,
            respond_to,
        })
        .await
    }

    /// Returns the removed record.
    pub async fn delete(&self, id: RecordId) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Delete { id, respond_to })
            .await
    }
}
