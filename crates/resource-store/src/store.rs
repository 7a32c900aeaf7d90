//! # Resource Store
//!
//! The synchronous core: an insertion-ordered collection of records of one type, keyed by
//! identifier. Nothing here suspends or locks; when a store is shared between request handlers it
//! is owned by a [`StoreActor`](crate::StoreActor), which serializes every call.

use crate::entity::{Payload, Resource};
use crate::error::StoreError;
use crate::id::{IdGenerator, IdMatch, IdStrategy, RecordId};
use crate::validate::Coercion;
use std::collections::HashSet;

/// Per-store policy choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreOptions {
    pub ids: IdStrategy,
    pub id_match: IdMatch,
    pub coercion: Coercion,
}

impl StoreOptions {
    pub fn build<T: Resource>(self) -> ResourceStore<T> {
        ResourceStore::with_generator(self.ids.generator(), self.id_match, self.coercion)
    }
}

/// An ordered collection of records of one type.
///
/// # Identifier uniqueness
/// Every identifier the store has ever held is remembered, including deleted ones. A generated
/// identifier that repeats one of them is refused with [`StoreError::DuplicateId`], so live
/// identifiers are unique and deleted ones are never handed out again.
///
/// Lookup is a linear scan under the configured [`IdMatch`] policy.
pub struct ResourceStore<T: Resource> {
    records: Vec<T>,
    issued: HashSet<String>,
    ids: Box<dyn IdGenerator>,
    id_match: IdMatch,
    coercion: Coercion,
}

impl<T: Resource> ResourceStore<T> {
    pub fn new(options: StoreOptions) -> Self {
        options.build()
    }

    pub fn with_generator(ids: Box<dyn IdGenerator>, id_match: IdMatch, coercion: Coercion) -> Self {
        Self {
            records: Vec::new(),
            issued: HashSet::new(),
            ids,
            id_match,
            coercion,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All live records in insertion order.
    pub fn list(&self) -> &[T] {
        &self.records
    }

    fn position(&self, id: &RecordId) -> Result<usize, StoreError> {
        self.records
            .iter()
            .position(|record| self.id_match.matches(record.id(), id))
            .ok_or_else(|| StoreError::NotFound {
                resource: T::NAME,
                id: id.clone(),
            })
    }

    pub fn get(&self, id: &RecordId) -> Result<&T, StoreError> {
        let index = self.position(id)?;
        Ok(&self.records[index])
    }

    /// Validates `payload`, assigns a fresh identifier and appends the new record.
    ///
    /// On any error the collection is unchanged.
    pub fn create(&mut self, payload: &Payload) -> Result<&T, StoreError> {
        self.insert(payload, None)
    }

    fn insert(&mut self, payload: &Payload, seed_position: Option<usize>) -> Result<&T, StoreError> {
        let fields = T::validate_create(payload, self.coercion)?;
        let id = match seed_position {
            Some(position) => self.ids.seed_id(position),
            None => self.ids.next_id(),
        };
        if !self.issued.insert(id.to_string()) {
            return Err(StoreError::DuplicateId(id));
        }
        self.records.push(T::from_fields(id, fields));
        Ok(&self.records[self.records.len() - 1])
    }

    /// Merge-patch: only fields present in `payload` change.
    ///
    /// A missing record is reported before the payload is looked at; an invalid payload leaves
    /// the record untouched.
    pub fn update(&mut self, id: &RecordId, payload: &Payload) -> Result<&T, StoreError> {
        let index = self.position(id)?;
        let patch = T::validate_update(payload, self.coercion)?;
        self.records[index].apply_patch(patch);
        Ok(&self.records[index])
    }

    /// Removes the matching record and hands it back.
    pub fn delete(&mut self, id: &RecordId) -> Result<T, StoreError> {
        let index = self.position(id)?;
        Ok(self.records.remove(index))
    }

    /// Creates each seed payload in order, stopping at the first failure.
    ///
    /// Identifiers come from [`IdGenerator::seed_id`], so a clock-based generator does not
    /// collide with itself while seeding.
    pub fn seed(&mut self, payloads: impl IntoIterator<Item = Payload>) -> Result<usize, StoreError> {
        let mut created = 0;
        for payload in payloads {
            self.insert(&payload, Some(created))?;
            created += 1;
        }
        Ok(created)
    }
}

impl<T: Resource> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new(StoreOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{SequentialIds, TimestampIds};
    use crate::validate::{FieldReader, Problem, ValidationError};
    use serde_json::{json, Value};

    #[derive(Clone, Debug, PartialEq)]
    struct Gadget {
        id: RecordId,
        name: String,
        price: f64,
    }

    #[derive(Debug, Default)]
    struct GadgetPatch {
        name: Option<String>,
        price: Option<f64>,
    }

    impl Resource for Gadget {
        type Fields = (String, f64);
        type Patch = GadgetPatch;
        const NAME: &'static str = "Gadget";

        fn id(&self) -> &RecordId {
            &self.id
        }

        fn validate_create(
            payload: &Payload,
            coercion: Coercion,
        ) -> Result<Self::Fields, ValidationError> {
            let mut reader = FieldReader::new(payload, coercion);
            let name = reader.required_text("name");
            let price = reader.optional_number("price");
            reader.finish((name, price))
        }

        fn validate_update(
            payload: &Payload,
            coercion: Coercion,
        ) -> Result<Self::Patch, ValidationError> {
            let mut reader = FieldReader::new(payload, coercion);
            let patch = GadgetPatch {
                name: reader.required_text_patch("name"),
                price: reader.number_patch("price"),
            };
            reader.finish(patch)
        }

        fn from_fields(id: RecordId, (name, price): Self::Fields) -> Self {
            Self { id, name, price }
        }

        fn apply_patch(&mut self, patch: GadgetPatch) {
            if let Some(name) = patch.name {
                self.name = name;
            }
            if let Some(price) = patch.price {
                self.price = price;
            }
        }
    }

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            other => panic!("test payload must be an object, got {other}"),
        }
    }

    fn sequential(id_match: IdMatch) -> ResourceStore<Gadget> {
        ResourceStore::with_generator(
            Box::new(SequentialIds::starting_at(1)),
            id_match,
            Coercion::Lenient,
        )
    }

    /// Always returns the same identifier.
    struct StuckClock;

    impl IdGenerator for StuckClock {
        fn next_id(&mut self) -> RecordId {
            RecordId::Number(1_700_000_000_000)
        }
    }

    #[test]
    fn create_then_get_round_trips() {
        let mut store = sequential(IdMatch::Exact);
        let created = store
            .create(&payload(json!({ "name": "Phone", "price": 30000 })))
            .unwrap()
            .clone();
        assert_eq!(store.get(created.id()).unwrap(), &created);
    }

    #[test]
    fn create_trims_and_coerces() {
        let mut store = sequential(IdMatch::Exact);
        let mouse = store
            .create(&payload(json!({ "name": "  Mouse  ", "price": "79" })))
            .unwrap();
        assert_eq!(mouse.name, "Mouse");
        assert_eq!(mouse.price, 79.0);
    }

    #[test]
    fn empty_create_is_rejected_without_side_effects() {
        let mut store = sequential(IdMatch::Exact);
        store.create(&payload(json!({ "name": "Phone" }))).unwrap();

        let err = store.create(&Payload::new()).unwrap_err();
        match err {
            StoreError::Validation(e) => assert!(e.has("name", Problem::Missing)),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn identifiers_are_unique_across_creates() {
        let mut store: ResourceStore<Gadget> = StoreOptions::default().build();
        for i in 0..200 {
            store
                .create(&payload(json!({ "name": format!("gadget {i}") })))
                .unwrap();
        }
        let distinct: HashSet<String> = store.list().iter().map(|g| g.id.to_string()).collect();
        assert_eq!(distinct.len(), store.len());
    }

    #[test]
    fn repeated_identifier_is_refused() {
        let mut store: ResourceStore<Gadget> =
            ResourceStore::with_generator(Box::new(StuckClock), IdMatch::Exact, Coercion::Lenient);
        store.create(&payload(json!({ "name": "first" }))).unwrap();

        let err = store.create(&payload(json!({ "name": "second" }))).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(RecordId::Number(1_700_000_000_000))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn deleted_identifiers_are_not_reissued() {
        let mut store: ResourceStore<Gadget> =
            ResourceStore::with_generator(Box::new(StuckClock), IdMatch::Exact, Coercion::Lenient);
        let id = store
            .create(&payload(json!({ "name": "first" })))
            .unwrap()
            .id
            .clone();
        store.delete(&id).unwrap();

        let err = store.create(&payload(json!({ "name": "again" }))).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn clock_ids_seed_without_colliding() {
        let mut store: ResourceStore<Gadget> =
            ResourceStore::with_generator(Box::new(TimestampIds), IdMatch::Exact, Coercion::Lenient);
        let seeded = store
            .seed(["a", "b", "c"].map(|name| payload(json!({ "name": name }))))
            .unwrap();
        assert_eq!(seeded, 3);
        let ids: Vec<&RecordId> = store.list().iter().map(|g| &g.id).collect();
        assert_eq!(ids, [&RecordId::Number(1), &RecordId::Number(2), &RecordId::Number(3)]);

        let later = store.create(&payload(json!({ "name": "d" }))).unwrap();
        assert!(matches!(later.id, RecordId::Number(ms) if ms > 3));
    }

    #[test]
    fn seeding_a_repeated_id_is_refused() {
        let mut store: ResourceStore<Gadget> =
            ResourceStore::with_generator(Box::new(StuckClock), IdMatch::Exact, Coercion::Lenient);
        let err = store
            .seed(["a", "b"].map(|name| payload(json!({ "name": name }))))
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_changes_only_present_fields() {
        let mut store = sequential(IdMatch::Exact);
        let id = store
            .create(&payload(json!({ "name": "Phone", "price": 30000 })))
            .unwrap()
            .id
            .clone();

        let updated = store.update(&id, &payload(json!({ "price": 25000 }))).unwrap();
        assert_eq!(updated.name, "Phone");
        assert_eq!(updated.price, 25000.0);

        let renamed = store.update(&id, &payload(json!({ "name": " Smartphone " }))).unwrap();
        assert_eq!(renamed.name, "Smartphone");
        assert_eq!(renamed.price, 25000.0);
    }

    #[test]
    fn invalid_update_leaves_record_untouched() {
        let mut store = sequential(IdMatch::Exact);
        let id = store
            .create(&payload(json!({ "name": "Phone", "price": 10 })))
            .unwrap()
            .id
            .clone();

        let err = store
            .update(&id, &payload(json!({ "name": "", "price": 99 })))
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        let unchanged = store.get(&id).unwrap();
        assert_eq!(unchanged.name, "Phone");
        assert_eq!(unchanged.price, 10.0);
    }

    #[test]
    fn update_of_missing_record_is_not_found() {
        let mut store = sequential(IdMatch::Exact);
        let err = store
            .update(&RecordId::Number(9), &payload(json!({ "name": "x" })))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(store.is_empty());
    }

    #[test]
    fn second_delete_is_not_found() {
        let mut store = sequential(IdMatch::Exact);
        let id = store
            .create(&payload(json!({ "name": "Phone" })))
            .unwrap()
            .id
            .clone();

        assert_eq!(store.delete(&id).unwrap().name, "Phone");
        assert!(store.delete(&id).unwrap_err().is_not_found());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut store = sequential(IdMatch::Exact);
        store
            .seed(["a", "b", "c"].map(|name| payload(json!({ "name": name }))))
            .unwrap();
        let names: Vec<&str> = store.list().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn phone_scenario_with_exact_ids() {
        let mut store = sequential(IdMatch::Exact);
        store
            .create(&payload(json!({ "name": "Phone", "price": 30000 })))
            .unwrap();

        // text "1" does not alias integer 1
        assert!(store.get(&RecordId::from("1")).unwrap_err().is_not_found());
        assert!(store.delete(&RecordId::from("1")).unwrap_err().is_not_found());

        store.delete(&RecordId::Number(1)).unwrap();
        assert!(store.list().iter().all(|g| g.id != RecordId::Number(1)));
        assert!(store.get(&RecordId::Number(1)).unwrap_err().is_not_found());
    }

    #[test]
    fn phone_scenario_with_coercing_ids() {
        let mut store = sequential(IdMatch::Coercing);
        store
            .create(&payload(json!({ "name": "Phone", "price": 30000 })))
            .unwrap();

        let phone = store.get(&RecordId::from("1")).unwrap();
        assert_eq!(phone.name, "Phone");
        assert_eq!(phone.price, 30000.0);
        assert!(store.get(&RecordId::from("01")).is_ok());

        store.delete(&RecordId::from("1")).unwrap();
        assert!(store.list().iter().all(|g| g.id != RecordId::Number(1)));
        assert!(store.get(&RecordId::from("1")).unwrap_err().is_not_found());
    }
}
