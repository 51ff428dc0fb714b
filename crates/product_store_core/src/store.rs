use crate::product::Product;
use crate::query::TagFilter;

/// Narrow interface to the storage engine holding the catalog.
///
/// Implementations look synchronous to callers; adapters over async SDKs
/// bridge internally. Errors carry engine-specific text that the service
/// layer wraps for logging; it is never shown to API callers.
pub trait ProductStore {
    /// Writes or replaces the item keyed by `product.id`.
    fn put_item(&self, product: &Product) -> Result<(), String>;

    /// Point lookup. `Ok(None)` means the key is absent, as distinct from
    /// the engine failing.
    fn get_item(&self, id: &str) -> Result<Option<Product>, String>;

    /// Removes the item and reports whether it existed.
    fn delete_item(&self, id: &str) -> Result<bool, String>;

    /// Full scan returning every item the filter accepts, in no particular
    /// order.
    fn scan(&self, filter: &TagFilter) -> Result<Vec<Product>, String>;
}

impl<T: ProductStore + ?Sized> ProductStore for &T {
    fn put_item(&self, product: &Product) -> Result<(), String> {
        (**self).put_item(product)
    }

    fn get_item(&self, id: &str) -> Result<Option<Product>, String> {
        (**self).get_item(id)
    }

    fn delete_item(&self, id: &str) -> Result<bool, String> {
        (**self).delete_item(id)
    }

    fn scan(&self, filter: &TagFilter) -> Result<Vec<Product>, String> {
        (**self).scan(filter)
    }
}
