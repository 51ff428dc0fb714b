//! Shared test doubles for exercising the service and transport layers
//! without a real storage engine.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::product::Product;
use crate::query::TagFilter;
use crate::store::ProductStore;

/// In-memory [`ProductStore`] over a `Mutex<HashMap>`. Scan results are
/// sorted by id so assertions stay deterministic.
#[derive(Default)]
pub struct MemoryProductStore {
    items: Mutex<HashMap<String, Product>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an item directly, bypassing validation and id assignment.
    pub fn seed(&self, product: Product) {
        self.items
            .lock()
            .expect("poisoned mutex")
            .insert(product.id.clone(), product);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.lock().expect("poisoned mutex").contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.lock().expect("poisoned mutex").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProductStore for MemoryProductStore {
    fn put_item(&self, product: &Product) -> Result<(), String> {
        self.items
            .lock()
            .expect("poisoned mutex")
            .insert(product.id.clone(), product.clone());
        Ok(())
    }

    fn get_item(&self, id: &str) -> Result<Option<Product>, String> {
        Ok(self.items.lock().expect("poisoned mutex").get(id).cloned())
    }

    fn delete_item(&self, id: &str) -> Result<bool, String> {
        Ok(self.items.lock().expect("poisoned mutex").remove(id).is_some())
    }

    fn scan(&self, filter: &TagFilter) -> Result<Vec<Product>, String> {
        let items = self.items.lock().expect("poisoned mutex");
        let mut matched: Vec<Product> = items
            .values()
            .filter(|product| filter.matches(&product.tags))
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(matched)
    }
}

/// Store whose every operation fails, for driving the storage-failure
/// outcome through service and transport code.
pub struct FailingProductStore;

impl ProductStore for FailingProductStore {
    fn put_item(&self, _product: &Product) -> Result<(), String> {
        Err("simulated put_item failure".to_string())
    }

    fn get_item(&self, _id: &str) -> Result<Option<Product>, String> {
        Err("simulated get_item failure".to_string())
    }

    fn delete_item(&self, _id: &str) -> Result<bool, String> {
        Err("simulated delete_item failure".to_string())
    }

    fn scan(&self, _filter: &TagFilter) -> Result<Vec<Product>, String> {
        Err("simulated scan failure".to_string())
    }
}
