use crate::error::ServiceError;
use crate::product::{new_product_id, validate_draft, Product, ProductDraft};
use crate::query::compile_tag_filter;
use crate::store::ProductStore;

/// Orchestrates validation, id assignment, query compilation, and the
/// storage collaborator.
///
/// The service keeps no state between calls, and every operation makes at
/// most one storage call. Rejections are decided before storage is touched.
pub struct ProductService<S> {
    store: S,
}

impl<S: ProductStore> ProductService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates the draft, assigns a fresh id (dropping any caller-supplied
    /// one), and persists the product. Returns the stored entity, id
    /// included.
    pub fn create(&self, draft: ProductDraft) -> Result<Product, ServiceError> {
        let valid = validate_draft(draft)?;
        let product = valid.into_product(new_product_id());
        self.store.put_item(&product).map_err(ServiceError::Storage)?;
        Ok(product)
    }

    /// Point lookup by id.
    pub fn get(&self, id: &str) -> Result<Product, ServiceError> {
        if id.is_empty() {
            return Err(ServiceError::MissingId);
        }
        self.store
            .get_item(id)
            .map_err(ServiceError::Storage)?
            .ok_or(ServiceError::NotFound)
    }

    /// Conditional delete: removing an absent id reports `NotFound`, and
    /// repeating the call reports it again.
    pub fn delete(&self, id: &str) -> Result<(), ServiceError> {
        if id.is_empty() {
            return Err(ServiceError::MissingId);
        }
        let existed = self.store.delete_item(id).map_err(ServiceError::Storage)?;
        if existed {
            Ok(())
        } else {
            Err(ServiceError::NotFound)
        }
    }

    /// Compiles the raw tag parameters into a filter and scans with it. A
    /// filter that matches nothing is a successful, empty result.
    pub fn search_by_tags(
        &self,
        raw_tags: Option<&str>,
        mode: Option<&str>,
    ) -> Result<Vec<Product>, ServiceError> {
        let filter = compile_tag_filter(raw_tags, mode)?;
        self.store.scan(&filter).map_err(ServiceError::Storage)
    }
}
