//! Record types served by the catalog, with their creation fields and merge-patches.

pub mod product;
pub mod user;

pub use product::*;
pub use user::*;

use resource_store::Payload;
use serde::Serializer;
use serde_json::Value;

/// Magnitude below which an integral `f64` converts to `i64` without loss.
const EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Writes whole numbers as JSON integers (`79`, not `79.0`) and everything else as a float.
pub(crate) fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Builds a payload from literal fields, for seed data.
pub(crate) fn payload<const N: usize>(fields: [(&str, Value); N]) -> Payload {
    fields
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
