use thiserror::Error;

use crate::product::MAX_NAME_CHARS;

/// Rejections produced by the payload validator.
///
/// `MissingField` covers shape problems (a required field absent from the
/// payload); the remaining variants are constraint violations on fields that
/// were present.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    #[error("name must be at most {} characters, got {length}", MAX_NAME_CHARS)]
    NameTooLong { length: usize },
    #[error("price must be greater than zero, got {price}")]
    NonPositivePrice { price: f64 },
    #[error("tags[{index}] must be a non-empty string")]
    EmptyTag { index: usize },
}

/// Rejections produced by the tag query compiler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("missing tags in query string")]
    MissingTags,
    #[error("invalid query")]
    NoUsableTags,
}

/// Outcome taxonomy shared by every service operation.
///
/// Transport layers map these onto wire codes. `Storage` wraps the
/// collaborator's error text so it can be logged; that text must never be
/// serialized into a response body.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error("null productId in path")]
    MissingId,
    #[error("product not found")]
    NotFound,
    #[error("storage operation failed: {0}")]
    Storage(String),
}
