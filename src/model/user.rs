use resource_store::RecordId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    #[serde(serialize_with = "super::serialize_number")]
    pub age: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserFields {
    pub name: String,
    pub age: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub age: Option<f64>,
}
