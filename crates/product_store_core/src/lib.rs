//! Shared product catalog domain primitives.
//!
//! This crate owns payload validation, id assignment, tag query compilation,
//! and the service orchestration contract. It intentionally excludes AWS SDK
//! and Lambda runtime concerns: storage is reached only through the
//! [`store::ProductStore`] trait, implemented by adapter crates.

pub mod error;
pub mod product;
pub mod query;
pub mod service;
pub mod store;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;
