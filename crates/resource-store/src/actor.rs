//! # Store Actor
//!
//! The `StoreActor` owns one [`ResourceStore`] and serves [`StoreRequest`]s one at a time, so the
//! store itself never needs a lock.

use crate::client::StoreClient;
use crate::entity::Resource;
use crate::message::StoreRequest;
use crate::store::ResourceStore;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The server half of a store.
///
/// # Concurrency Model
/// Every handler shares clones of one [`StoreClient`]; all of them feed a single channel drained
/// by [`StoreActor::run`]. A create or update therefore validates and writes without another
/// request observing a half-applied change, and a create is visible to every request that arrives
/// after it.
///
/// # Usage Pattern
/// 1. **Create**: build a store, then call `StoreActor::new(buffer, store)`.
/// 2. **Run**: spawn `actor.run()` on the runtime.
/// 3. **Use**: clone the client into whatever needs it.
///
/// The loop ends once every client has been dropped.
pub struct StoreActor<T: Resource> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: ResourceStore<T>,
}

impl<T: Resource> StoreActor<T> {
    /// Creates the actor and its client.
    ///
    /// `buffer_size` is the channel capacity; callers wait for space when it is full. A capacity
    /// of 0 is raised to 1.
    pub fn new(buffer_size: usize, store: ResourceStore<T>) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self { receiver, store };
        (actor, StoreClient::new(sender))
    }

    pub async fn run(mut self) {
        let entity_type = T::NAME;
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::List { respond_to } => {
                    let items = self.store.list().to_vec();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                StoreRequest::Get { id, respond_to } => {
                    let result = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = result.is_ok(), "Get");
                    let _ = respond_to.send(result);
                }
                StoreRequest::Create {
                    payload,
                    respond_to,
                } => {
                    debug!(entity_type, ?payload, "Create");
                    let result = self.store.create(&payload).cloned();
                    match &result {
                        Ok(item) => {
                            info!(entity_type, id = %item.id(), size = self.store.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Update {
                    id,
                    payload,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?payload, "Update");
                    let result = self.store.update(&id, &payload).cloned();
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.store.delete(&id);
                    match &result {
                        Ok(_) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
