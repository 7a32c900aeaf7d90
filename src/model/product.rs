use resource_store::RecordId;
use serde::Serialize;

/// A catalogue item.
///
/// `name` and `category` are never blank. Every numeric field is stored as a JSON number, whatever
/// spelling the client used.
///
/// See [`impl Resource for Product`](crate::product_store::entity) for validation rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(serialize_with = "super::serialize_number")]
    pub price: f64,
    #[serde(serialize_with = "super::serialize_number")]
    pub stock: f64,
    #[serde(serialize_with = "super::serialize_number")]
    pub rating: f64,
}

/// Normalized content of a new product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub stock: f64,
    pub rating: f64,
}

/// Fields carried by an update; `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<f64>,
    pub rating: Option<f64>,
}
