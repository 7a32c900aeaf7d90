//! # Resource Store
//!
//! Generic building blocks for an in-memory resource catalog: an ordered,
//! identifier-keyed collection of records with create / list / get /
//! merge-patch / delete semantics, plus the single-writer actor that owns a
//! store when it is shared across request handlers.
//!
//! ## Layers
//!
//! 1. **Entity Layer** ([`Resource`]) - the record type, its validation rules and
//!    how a merge-patch is applied to it.
//! 2. **Store Layer** ([`ResourceStore`]) - synchronous bookkeeping: identifier
//!    assignment, lookup, insertion order, uniqueness.
//! 3. **Runtime Layer** ([`StoreActor`]) - one task owning one store, serving
//!    requests sequentially.
//! 4. **Interface Layer** ([`StoreClient`]) - cheap, cloneable async handle.
//!
//! ## Example
//!
//! ```rust
//! use resource_store::validate::FieldReader;
//! use resource_store::{
//!     Coercion, IdStrategy, Payload, RecordId, Resource, StoreActor, StoreOptions,
//!     ValidationError,
//! };
//!
//! #[derive(Clone, Debug)]
//! struct Note {
//!     id: RecordId,
//!     text: String,
//! }
//!
//! impl Resource for Note {
//!     type Fields = String;
//!     type Patch = Option<String>;
//!     const NAME: &'static str = "Note";
//!
//!     fn id(&self) -> &RecordId { &self.id }
//!
//!     fn validate_create(payload: &Payload, coercion: Coercion) -> Result<String, ValidationError> {
//!         let mut reader = FieldReader::new(payload, coercion);
//!         let text = reader.required_text("text");
//!         reader.finish(text)
//!     }
//!
//!     fn validate_update(payload: &Payload, coercion: Coercion) -> Result<Option<String>, ValidationError> {
//!         let mut reader = FieldReader::new(payload, coercion);
//!         let text = reader.required_text_patch("text");
//!         reader.finish(text)
//!     }
//!
//!     fn from_fields(id: RecordId, text: String) -> Self { Self { id, text } }
//!
//!     fn apply_patch(&mut self, patch: Option<String>) {
//!         if let Some(text) = patch { self.text = text; }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let options = StoreOptions { ids: IdStrategy::Sequential { start: 1 }, ..Default::default() };
//!     let (actor, client) = StoreActor::<Note>::new(10, options.build());
//!     tokio::spawn(actor.run());
//!
//!     let payload = serde_json::json!({ "text": "  hello  " });
//!     let note = client.create(payload.as_object().unwrap().clone()).await.unwrap();
//!     assert_eq!(note.text, "hello");
//!     assert_eq!(note.id, RecordId::Number(1));
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`MockClient`](mock::MockClient) that answers
//! requests from scripted expectations instead of a real store.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod id;
pub mod message;
pub mod mock;
pub mod store;
pub mod validate;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use entity::{Payload, Resource};
pub use error::StoreError;
pub use id::{IdGenerator, IdKind, IdMatch, IdStrategy, RecordId};
pub use message::{Response, StoreRequest};
pub use store::{ResourceStore, StoreOptions};
pub use validate::{Coercion, FieldError, Problem, ValidationError};
