use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Upper bound on `name`, counted in characters rather than bytes.
pub const MAX_NAME_CHARS: usize = 40;

/// A catalog entry. `id` is assigned by the service on create and doubles as
/// the storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub tags: Vec<String>,
}

/// An untrusted create payload as it arrives off the wire.
///
/// Every field is optional so that presence checks live in the validator
/// instead of the deserializer. A caller-supplied `id` is parsed only so it
/// can be discarded; ids are assigned, never accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub tags: Option<Vec<String>>,
}

/// A draft that passed validation. Still unkeyed; the service turns it into
/// a [`Product`] by assigning an id.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub name: String,
    pub price: f64,
    pub tags: Vec<String>,
}

impl ValidDraft {
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            tags: self.tags,
        }
    }
}

/// Checks a draft against the catalog constraints.
///
/// Presence failures are reported before constraint violations, and tag
/// checking stops at the first empty element. An empty `name` is accepted;
/// only the upper bound is enforced.
pub fn validate_draft(draft: ProductDraft) -> Result<ValidDraft, ValidationError> {
    let Some(name) = draft.name else {
        return Err(ValidationError::MissingField("name"));
    };
    let Some(price) = draft.price else {
        return Err(ValidationError::MissingField("price"));
    };
    let Some(tags) = draft.tags else {
        return Err(ValidationError::MissingField("tags"));
    };

    let length = name.chars().count();
    if length > MAX_NAME_CHARS {
        return Err(ValidationError::NameTooLong { length });
    }

    // NaN is rejected alongside zero and negatives.
    if price.is_nan() || price <= 0.0 {
        return Err(ValidationError::NonPositivePrice { price });
    }

    for (index, tag) in tags.iter().enumerate() {
        if tag.is_empty() {
            return Err(ValidationError::EmptyTag { index });
        }
    }

    Ok(ValidDraft { name, price, tags })
}

/// Assigns a fresh storage key: a random 128-bit id in hyphenated form.
/// Calls are independent of each other and of the payload being created.
pub fn new_product_id() -> String {
    Uuid::new_v4().to_string()
}
