//! Product store: resource implementation, seed catalogue and actor factory.

pub mod entity;

use crate::model::{payload, Product};
use resource_store::{Payload, Resource, StoreActor, StoreClient, StoreError, StoreOptions};
use serde_json::json;
use tracing::debug;

/// The two items every fresh catalogue starts with.
pub fn seed_payloads() -> Vec<Payload> {
    vec![
        payload([
            ("name", json!("Razer gaming mouse")),
            ("category", json!("Mice")),
            ("description", json!("High-precision gaming mouse with RGB lighting")),
            ("price", json!(79)),
            ("stock", json!(15)),
            ("rating", json!(4.8)),
        ]),
        payload([
            ("name", json!("Logitech mechanical keyboard")),
            ("category", json!("Keyboards")),
            ("description", json!("Mechanical keyboard with blue switches")),
            ("price", json!(120)),
            ("stock", json!(8)),
            ("rating", json!(4.7)),
        ]),
    ]
}

/// Creates the Product actor and its client, optionally seeded.
pub fn new(
    options: StoreOptions,
    buffer_size: usize,
    seed: bool,
) -> Result<(StoreActor<Product>, StoreClient<Product>), StoreError> {
    let mut store = options.build::<Product>();
    if seed {
        let count = store.seed(seed_payloads())?;
        debug!(entity_type = Product::NAME, count, "Seeded");
    }
    Ok(StoreActor::new(buffer_size, store))
}
