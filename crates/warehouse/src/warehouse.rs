use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use stockroom_core::{DomainError, DomainResult, ProductId};

use crate::category::Category;
use crate::product::{Price, ProductRecord, same_price};

/// Mutable part of a warehouse, guarded as one unit.
#[derive(Debug, Default)]
struct Stock {
    products: Vec<ProductRecord>,
    changed_products: Vec<ProductRecord>,
}

impl Stock {
    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id() == id)
    }
}

/// A named (or anonymous) container of products.
///
/// Product identifiers are unique within a warehouse. Every price change that
/// alters the value appends the pre-change record to an audit log.
#[derive(Debug)]
pub struct Warehouse {
    name: Option<String>,
    stock: Mutex<Stock>,
}

/// Point-in-time copy of a warehouse's contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarehouseSnapshot {
    pub name: Option<String>,
    pub products: Vec<ProductRecord>,
    pub changed_products: Vec<ProductRecord>,
}

impl Warehouse {
    /// A fresh warehouse that belongs to no registry.
    pub fn anonymous() -> Self {
        Self::with_name(None)
    }

    pub(crate) fn named(name: String) -> Self {
        Self::with_name(Some(name))
    }

    fn with_name(name: Option<String>) -> Self {
        Self {
            name,
            stock: Mutex::new(Stock::default()),
        }
    }

    /// Canonical name, or `None` for an anonymous warehouse.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    // Every mutation validates before touching the vectors and cannot panic
    // halfway, so state behind a poisoned lock is still consistent.
    fn stock(&self) -> MutexGuard<'_, Stock> {
        self.stock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a product.
    ///
    /// A missing `id` is generated; a missing `price` becomes zero. Negative
    /// prices are accepted.
    pub fn add_product(
        &self,
        id: Option<ProductId>,
        name: &str,
        category: &Category,
        price: Option<Price>,
    ) -> DomainResult<ProductRecord> {
        if name.is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }

        let mut stock = self.stock();
        let id = match id {
            Some(id) if stock.position(id).is_some() => {
                return Err(DomainError::duplicate_product(id));
            }
            Some(id) => id,
            None => ProductId::new(),
        };

        let record = ProductRecord::new(
            id,
            name.to_string(),
            category.clone(),
            price.unwrap_or(Price::ZERO),
        );
        stock.products.push(record.clone());

        tracing::debug!(
            warehouse = self.name().unwrap_or("<anonymous>"),
            product_id = %id,
            product = name,
            category = %category,
            price = %record.price(),
            "added product"
        );
        Ok(record)
    }

    /// Current products in sequence order.
    pub fn products(&self) -> Vec<ProductRecord> {
        self.stock().products.clone()
    }

    pub fn product_by_id(&self, id: ProductId) -> Option<ProductRecord> {
        let stock = self.stock();
        stock.position(id).map(|idx| stock.products[idx].clone())
    }

    /// Change a product's price.
    ///
    /// Setting exactly the price it already has (value and scale) is a no-op.
    /// Otherwise the old record is
    /// logged in [`Warehouse::changed_products`] and the repriced record moves
    /// to the end of the product sequence.
    pub fn update_product_price(&self, id: ProductId, new_price: Price) -> DomainResult<()> {
        let mut stock = self.stock();
        let idx = stock
            .position(id)
            .ok_or_else(|| DomainError::product_not_found(id))?;

        let old_price = stock.products[idx].price();
        if same_price(old_price, new_price) {
            tracing::debug!(product_id = %id, price = %old_price, "price unchanged");
            return Ok(());
        }

        let previous = stock.products.remove(idx);
        let updated = previous.with_price(new_price);
        stock.changed_products.push(previous);
        stock.products.push(updated);

        tracing::info!(
            warehouse = self.name().unwrap_or("<anonymous>"),
            product_id = %id,
            old_price = %old_price,
            new_price = %new_price,
            "price changed"
        );
        Ok(())
    }

    /// Pre-change records, oldest change first.
    pub fn changed_products(&self) -> Vec<ProductRecord> {
        self.stock().changed_products.clone()
    }

    /// Products partitioned by category, each group in sequence order.
    pub fn products_grouped_by_categories(&self) -> BTreeMap<Category, Vec<ProductRecord>> {
        let stock = self.stock();
        let mut groups: BTreeMap<Category, Vec<ProductRecord>> = BTreeMap::new();
        for product in &stock.products {
            groups
                .entry(product.category().clone())
                .or_default()
                .push(product.clone());
        }
        groups
    }

    /// Products in `category`; empty if there are none.
    pub fn products_by(&self, category: &Category) -> Vec<ProductRecord> {
        self.stock()
            .products
            .iter()
            .filter(|p| p.category() == category)
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.stock().products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stock().products.len()
    }

    pub fn snapshot(&self) -> WarehouseSnapshot {
        let stock = self.stock();
        WarehouseSnapshot {
            name: self.name.clone(),
            products: stock.products.clone(),
            changed_products: stock.changed_products.clone(),
        }
    }
}
