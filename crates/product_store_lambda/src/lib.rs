//! AWS-oriented adapters and handlers for the product catalog API.
//!
//! This crate owns runtime integration details (Lambda handlers, response
//! shaping for API Gateway proxy integration, and the DynamoDB storage
//! adapter) on top of the domain logic in `product_store_core`.

pub mod adapters;
pub mod handlers;
