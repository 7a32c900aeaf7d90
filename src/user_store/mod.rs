//! User store: resource implementation, seed users and actor factory.

pub mod entity;

use crate::model::{payload, User};
use resource_store::{Payload, Resource, StoreActor, StoreClient, StoreError, StoreOptions};
use serde_json::json;
use tracing::debug;

pub fn seed_payloads() -> Vec<Payload> {
    vec![
        payload([("name", json!("Peter")), ("age", json!(16))]),
        payload([("name", json!("Ivan")), ("age", json!(18))]),
    ]
}

/// Creates the User actor and its client, optionally seeded.
pub fn new(
    options: StoreOptions,
    buffer_size: usize,
    seed: bool,
) -> Result<(StoreActor<User>, StoreClient<User>), StoreError> {
    let mut store = options.build::<User>();
    if seed {
        let count = store.seed(seed_payloads())?;
        debug!(entity_type = User::NAME, count, "Seeded");
    }
    Ok(StoreActor::new(buffer_size, store))
}
