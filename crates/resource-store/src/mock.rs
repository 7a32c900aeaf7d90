//! # Mock Client & Testing Guide
//!
//! `MockClient<T>` hands out a real [`StoreClient<T>`], but requests are answered from scripted
//! expectations instead of a running store. Code that only talks to a store through its client
//! (HTTP handlers, for instance) can then be tested against failures that a real store never
//! produces on demand.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, answers are scripted | Real records |
//! | **Determinism** | Fully deterministic | Real identifiers (random or clock based) |
//! | **Error Injection** | Easy (`return_err`) | Only validation and not-found |
//! | **Use Case** | Logic *around* the client | The store itself or the whole service |
//!
//! ## Example
//!
//! ```rust
//! use resource_store::mock::MockClient;
//! use resource_store::validate::FieldReader;
//! use resource_store::{Coercion, Payload, RecordId, Resource, StoreError, ValidationError};
//!
//! #[derive(Clone, Debug)]
//! struct Note { id: RecordId }
//!
//! impl Resource for Note {
//!     type Fields = ();
//!     type Patch = ();
//!     const NAME: &'static str = "Note";
//!     fn id(&self) -> &RecordId { &self.id }
//!     fn validate_create(p: &Payload, c: Coercion) -> Result<(), ValidationError> {
//!         FieldReader::new(p, c).finish(())
//!     }
//!     fn validate_update(p: &Payload, c: Coercion) -> Result<(), ValidationError> {
//!         FieldReader::new(p, c).finish(())
//!     }
//!     fn from_fields(id: RecordId, _: ()) -> Self { Self { id } }
//!     fn apply_patch(&mut self, _: ()) {}
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Note>::new();
//!     let client = mock.client();
//!
//!     // Simulate a store that has gone away
//!     mock.expect_get(RecordId::from("abc123"))
//!         .return_err(StoreError::ActorClosed);
//!
//!     let result = client.get(RecordId::from("abc123")).await;
//!     assert!(matches!(result, Err(StoreError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client plus the raw request receiver, or the fluent
//! [`MockClient`] API.

use crate::client::StoreClient;
use crate::entity::{Payload, Resource};
use crate::error::StoreError;
use crate::id::RecordId;
use crate::message::{Response, StoreRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted answer for the next request, optionally pinned to an identifier.
enum Expectation<T: Resource> {
    List {
        response: Result<Vec<T>, StoreError>,
    },
    Get {
        id: RecordId,
        response: Result<T, StoreError>,
    },
    Create {
        response: Result<T, StoreError>,
    },
    Update {
        id: RecordId,
        response: Result<T, StoreError>,
    },
    Delete {
        id: RecordId,
        response: Result<T, StoreError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn push<T: Resource>(expectations: &Expectations<T>, expectation: Expectation<T>) {
    let mut exps = expectations.lock().unwrap();
    exps.push_back(expectation);
}

/// A mock client with expectation tracking.
///
/// Expectations are consumed in order. A request that does not match the next expectation (wrong
/// operation or wrong identifier) panics the mock's task, which the caller observes as
/// [`StoreError::ActorDropped`].
pub struct MockClient<T: Resource> {
    client: StoreClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Resource> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> MockClient<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (StoreRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: expected, response }),
                    )
                    | (
                        StoreRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: expected, response }),
                    )
                    | (
                        StoreRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "request for an unexpected identifier");
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_get(&mut self, id: RecordId) -> RecordExpectationBuilder<T> {
        RecordExpectationBuilder {
            kind: Kind::Get(id),
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_create(&mut self) -> RecordExpectationBuilder<T> {
        RecordExpectationBuilder {
            kind: Kind::Create,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_update(&mut self, id: RecordId) -> RecordExpectationBuilder<T> {
        RecordExpectationBuilder {
            kind: Kind::Update(id),
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_delete(&mut self, id: RecordId) -> RecordExpectationBuilder<T> {
        RecordExpectationBuilder {
            kind: Kind::Delete(id),
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if any expectation is still pending.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: Resource> {
    expectations: Expectations<T>,
}

impl<T: Resource> ListExpectationBuilder<T> {
    pub fn return_ok(self, items: Vec<T>) {
        push(&self.expectations, Expectation::List { response: Ok(items) });
    }

    pub fn return_err(self, error: StoreError) {
        push(&self.expectations, Expectation::List { response: Err(error) });
    }
}

enum Kind {
    Get(RecordId),
    Create,
    Update(RecordId),
    Delete(RecordId),
}

/// Builder for operations that answer with a single record.
pub struct RecordExpectationBuilder<T: Resource> {
    kind: Kind,
    expectations: Expectations<T>,
}

impl<T: Resource> RecordExpectationBuilder<T> {
    fn answer(self, response: Result<T, StoreError>) {
        let expectation = match self.kind {
            Kind::Get(id) => Expectation::Get { id, response },
            Kind::Create => Expectation::Create { response },
            Kind::Update(id) => Expectation::Update { id, response },
            Kind::Delete(id) => Expectation::Delete { id, response },
        };
        push(&self.expectations, expectation);
    }

    pub fn return_ok(self, record: T) {
        self.answer(Ok(record));
    }

    pub fn return_err(self, error: StoreError) {
        self.answer(Err(error));
    }
}

// =============================================================================
// RAW RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Useful when a test wants to inspect the payload a caller sent, or to answer late.
pub fn create_mock_client<T: Resource>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Next message, if it is a Create request.
pub async fn expect_create<T: Resource>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(Payload, Response<T>)> {
    match receiver.recv().await {
        Some(StoreRequest::Create {
            payload,
            respond_to,
        }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an Update request.
pub async fn expect_update<T: Resource>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(RecordId, Payload, Response<T>)> {
    match receiver.recv().await {
        Some(StoreRequest::Update {
            id,
            payload,
            respond_to,
        }) => Some((id, payload, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{Coercion, FieldReader, ValidationError};
    use serde_json::json;

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        id: RecordId,
        label: String,
    }

    impl Resource for Tag {
        type Fields = String;
        type Patch = Option<String>;
        const NAME: &'static str = "Tag";

        fn id(&self) -> &RecordId {
            &self.id
        }

        fn validate_create(payload: &Payload, coercion: Coercion) -> Result<String, ValidationError> {
            let mut reader = FieldReader::new(payload, coercion);
            let label = reader.required_text("label");
            reader.finish(label)
        }

        fn validate_update(
            payload: &Payload,
            coercion: Coercion,
        ) -> Result<Option<String>, ValidationError> {
            let mut reader = FieldReader::new(payload, coercion);
            let label = reader.required_text_patch("label");
            reader.finish(label)
        }

        fn from_fields(id: RecordId, label: String) -> Self {
            Self { id, label }
        }

        fn apply_patch(&mut self, patch: Option<String>) {
            if let Some(label) = patch {
                self.label = label;
            }
        }
    }

    fn tag(id: &str, label: &str) -> Tag {
        Tag {
            id: RecordId::from(id),
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_raw_receiver_sees_payload() {
        let (client, mut receiver) = create_mock_client::<Tag>(10);

        let create_task = tokio::spawn(async move {
            let payload = json!({ "label": "rust" }).as_object().cloned().unwrap();
            client.create(payload).await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload["label"], "rust");
        responder.send(Ok(tag("t1", "rust"))).unwrap();

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created.id, RecordId::from("t1"));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Tag>::new();
        mock.expect_create().return_ok(tag("t1", "rust"));
        mock.expect_list().return_ok(vec![tag("t1", "rust")]);
        mock.expect_update(RecordId::from("t1"))
            .return_ok(tag("t1", "tokio"));
        mock.expect_delete(RecordId::from("t1"))
            .return_err(StoreError::NotFound {
                resource: "Tag",
                id: RecordId::from("t1"),
            });

        let client = mock.client();
        client.create(Payload::new()).await.unwrap();
        assert_eq!(client.list().await.unwrap().len(), 1);
        let updated = client
            .update(RecordId::from("t1"), Payload::new())
            .await
            .unwrap();
        assert_eq!(updated.label, "tokio");
        let err = client.delete(RecordId::from("t1")).await.unwrap_err();
        assert!(err.is_not_found());

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_drops_reply() {
        let mut mock = MockClient::<Tag>::new();
        mock.expect_get(RecordId::from("t1")).return_ok(tag("t1", "rust"));

        let client = mock.client();
        let result = client.delete(RecordId::from("t1")).await;
        assert!(matches!(result, Err(StoreError::ActorDropped)));
    }
}
