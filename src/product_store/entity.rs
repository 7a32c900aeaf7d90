//! [`Resource`] implementation for [`Product`].
//!
//! Creation requires `name` and `category`; `description` defaults to `""` and the numeric
//! fields to `0`. Updates are merge-patches: a field absent from the payload is left alone, a
//! `null` description clears it, and `name`/`category` may not be blanked.

use crate::model::{Product, ProductFields, ProductPatch};
use resource_store::validate::FieldReader;
use resource_store::{Coercion, Payload, RecordId, Resource, ValidationError};

impl Resource for Product {
    type Fields = ProductFields;
    type Patch = ProductPatch;
    const NAME: &'static str = "Product";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn validate_create(payload: &Payload, coercion: Coercion) -> Result<ProductFields, ValidationError> {
        let mut reader = FieldReader::new(payload, coercion);
        let fields = ProductFields {
            name: reader.required_text("name"),
            category: reader.required_text("category"),
            description: reader.optional_text("description"),
            price: reader.optional_number("price"),
            stock: reader.optional_number("stock"),
            rating: reader.optional_number("rating"),
        };
        reader.finish(fields)
    }

    fn validate_update(payload: &Payload, coercion: Coercion) -> Result<ProductPatch, ValidationError> {
        let mut reader = FieldReader::new(payload, coercion);
        let patch = ProductPatch {
            name: reader.required_text_patch("name"),
            category: reader.required_text_patch("category"),
            description: reader.optional_text_patch("description"),
            price: reader.number_patch("price"),
            stock: reader.number_patch("stock"),
            rating: reader.number_patch("rating"),
        };
        reader.finish(patch)
    }

    fn from_fields(id: RecordId, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            category: fields.category,
            description: fields.description,
            price: fields.price,
            stock: fields.stock,
            rating: fields.rating,
        }
    }

    fn apply_patch(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
    }
}
