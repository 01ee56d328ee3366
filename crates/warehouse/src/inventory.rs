//! Registries and the context that owns them.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use stockroom_core::{DomainResult, canonicalize};

use crate::category::{Category, CategoryRegistry};
use crate::warehouse::Warehouse;

/// Named warehouses, one per canonical name.
///
/// Anonymous warehouses are never stored here.
#[derive(Debug, Default)]
pub struct WarehouseRegistry {
    warehouses: Mutex<HashMap<String, Arc<Warehouse>>>,
}

impl WarehouseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The warehouse registered under `name`'s canonical form, created on first use.
    pub fn get_instance(&self, name: &str) -> Arc<Warehouse> {
        let canonical = canonicalize(name);
        let mut warehouses = self.warehouses.lock().unwrap_or_else(PoisonError::into_inner);
        warehouses
            .entry(canonical)
            .or_insert_with_key(|key| {
                tracing::debug!(warehouse = %key, "registered warehouse");
                Arc::new(Warehouse::named(key.clone()))
            })
            .clone()
    }

    /// Registered canonical names, sorted.
    pub fn names(&self) -> Vec<String> {
        let warehouses = self.warehouses.lock().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = warehouses.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.warehouses.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Application context owning the category and warehouse registries.
///
/// Everything created through one `Inventory` lives as long as it does.
#[derive(Debug, Default)]
pub struct Inventory {
    categories: CategoryRegistry,
    warehouses: WarehouseRegistry,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    pub fn warehouses(&self) -> &WarehouseRegistry {
        &self.warehouses
    }

    pub fn category(&self, name: &str) -> DomainResult<Category> {
        self.categories.of(name)
    }

    pub fn warehouse(&self, name: &str) -> Arc<Warehouse> {
        self.warehouses.get_instance(name)
    }

    /// A brand-new warehouse that is not registered and cannot be looked up later.
    pub fn anonymous_warehouse(&self) -> Warehouse {
        Warehouse::anonymous()
    }
}
