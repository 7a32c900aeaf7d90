//! # Resource Trait
//!
//! The `Resource` trait is the contract every record type (Product, User, …) implements to be
//! held by a [`ResourceStore`](crate::ResourceStore). It names the normalized creation fields and
//! the merge-patch type, and supplies the validation that turns a parsed JSON object into either.
//!
//! Validation and patching live on the record type, so the store's bookkeeping (identifiers,
//! lookup, ordering) is written once and reused for every resource.

use crate::id::RecordId;
use crate::validate::{Coercion, ValidationError};
use std::fmt::Debug;

/// An already-parsed JSON request body.
///
/// Field presence is meaningful: a key that is absent is different from a key holding `null`.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Trait that any record type must implement to be managed by a [`ResourceStore`](crate::ResourceStore).
///
/// # Associated Types
/// `Fields` is the fully normalized content of a new record (everything except its identifier).
/// `Patch` is the normalized subset of fields present in an update payload; fields absent from the
/// payload must be represented so that [`Resource::apply_patch`] leaves them untouched.
pub trait Resource: Clone + Debug + Send + Sync + 'static {
    /// Normalized creation fields.
    type Fields: Debug + Send;

    /// Normalized merge-patch.
    type Patch: Debug + Send;

    /// Singular display name, used in logs and "not found" messages.
    const NAME: &'static str;

    fn id(&self) -> &RecordId;

    /// Checks a creation payload and derives the stored field values.
    ///
    /// Every failing field is reported, not just the first.
    fn validate_create(payload: &Payload, coercion: Coercion)
        -> Result<Self::Fields, ValidationError>;

    /// Checks an update payload field by field. Absent fields are not errors.
    fn validate_update(payload: &Payload, coercion: Coercion)
        -> Result<Self::Patch, ValidationError>;

    /// Builds the record once an identifier has been assigned.
    fn from_fields(id: RecordId, fields: Self::Fields) -> Self;

    /// Overwrites exactly the fields carried by `patch`.
    fn apply_patch(&mut self, patch: Self::Patch);
}
