//! Product records and the payload used to create or replace them.

use crate::ProductId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Maximum product name length accepted by the form.
pub const MAX_NAME_LENGTH: u64 = 255;

/// Maximum description length accepted by the form.
pub const MAX_DESCRIPTION_LENGTH: u64 = 2000;

/// Field names owned by the product schema.
pub const SCHEMA_FIELDS: [&str; 4] = ["id", "name", "description", "price"];

/// Whether `key` names a schema field rather than a backend-specific one.
#[must_use]
pub fn is_schema_field(key: &str) -> bool {
    SCHEMA_FIELDS.contains(&key)
}

/// A product as stored by the backend.
///
/// Fields the schema does not name are kept in `extra` so that a record read
/// from the backend can be edited and written back without losing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Unit price.
    pub price: f64,

    /// Backend fields outside the schema.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Returns the editable part of this product.
    #[must_use]
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            extra: self.extra.clone(),
        }
    }

    /// Checks whether this record carries exactly the fields of `draft`.
    #[must_use]
    pub fn matches_draft(&self, draft: &ProductDraft) -> bool {
        self.name == draft.name
            && self.description == draft.description
            && self.price == draft.price
            && draft
                .extra
                .iter()
                .all(|(key, value)| self.extra.get(key) == Some(value))
    }
}

/// Product fields sent on create and update; the backend assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductDraft {
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "crate::validation::rules::not_blank")
    )]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000, message = "Description cannot exceed 2000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProductDraft {
    /// Creates a draft with a name and price.
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            extra: Map::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a backend-specific field outside the schema.
    ///
    /// Keys listed in [`SCHEMA_FIELDS`] are ignored; set those through the
    /// typed fields instead.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        if !is_schema_field(&key) {
            self.extra.insert(key, value);
        }
        self
    }
}
