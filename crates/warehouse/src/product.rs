use serde::Serialize;

use stockroom_core::ProductId;

use crate::category::Category;

/// Exact decimal amount used for product prices.
pub type Price = rust_decimal::Decimal;

/// Exact equality: same numeric value and same scale, so `5.00` and `5` differ.
pub fn same_price(a: Price, b: Price) -> bool {
    a == b && a.scale() == b.scale()
}

/// A product held by a warehouse.
///
/// Records are immutable: a price change builds a replacement via
/// [`ProductRecord::with_price`] and the warehouse swaps it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    id: ProductId,
    name: String,
    category: Category,
    price: Price,
}

impl ProductRecord {
    pub(crate) fn new(id: ProductId, name: String, category: Category, price: Price) -> Self {
        Self {
            id,
            name,
            category,
            price,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Same product (id, name, category) at a different price.
    pub fn with_price(&self, price: Price) -> Self {
        Self {
            price,
            ..self.clone()
        }
    }
}
