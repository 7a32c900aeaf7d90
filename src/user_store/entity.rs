//! [`Resource`] implementation for [`User`]. Both fields are required, on creation and whenever
//! an update carries them.

use crate::model::{User, UserFields, UserPatch};
use resource_store::validate::FieldReader;
use resource_store::{Coercion, Payload, RecordId, Resource, ValidationError};

impl Resource for User {
    type Fields = UserFields;
    type Patch = UserPatch;
    const NAME: &'static str = "User";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn validate_create(payload: &Payload, coercion: Coercion) -> Result<UserFields, ValidationError> {
        let mut reader = FieldReader::new(payload, coercion);
        let fields = UserFields {
            name: reader.required_text("name"),
            age: reader.required_number("age"),
        };
        reader.finish(fields)
    }

    fn validate_update(payload: &Payload, coercion: Coercion) -> Result<UserPatch, ValidationError> {
        let mut reader = FieldReader::new(payload, coercion);
        let patch = UserPatch {
            name: reader.required_text_patch("name"),
            age: reader.required_number_patch("age"),
        };
        reader.finish(patch)
    }

    fn from_fields(id: RecordId, fields: UserFields) -> Self {
        Self {
            id,
            name: fields.name,
            age: fields.age,
        }
    }

    fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_store::Problem;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> Payload {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn age_is_required_and_coerced() {
        let fields =
            User::validate_create(&payload(json!({ "name": " Ann ", "age": "31" })), Coercion::Lenient)
                .unwrap();
        assert_eq!(
            fields,
            UserFields {
                name: "Ann".into(),
                age: 31.0
            }
        );

        let err = User::validate_create(&payload(json!({ "name": "Ann" })), Coercion::Lenient)
            .unwrap_err();
        assert!(err.has("age", Problem::Missing));
    }

    #[test]
    fn null_age_patch_is_rejected() {
        let err = User::validate_update(&payload(json!({ "age": null })), Coercion::Lenient)
            .unwrap_err();
        assert!(err.has("age", Problem::Missing));
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let patch = User::validate_update(&Payload::new(), Coercion::Strict).unwrap();
        assert_eq!(patch, UserPatch::default());
    }
}
