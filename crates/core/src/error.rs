//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is an invalid-argument failure raised synchronously by the
/// operation that detected it. Nothing is retried internally, and an operation
/// that returns an error has not changed any state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required value was missing or empty.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A product with this identifier is already stored in the warehouse.
    #[error("product {0} already exists, use update_product_price for updates")]
    DuplicateProduct(ProductId),

    /// No product with this identifier is stored in the warehouse.
    #[error("product {0} does not exist")]
    ProductNotFound(ProductId),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn duplicate_product(id: ProductId) -> Self {
        Self::DuplicateProduct(id)
    }

    pub fn product_not_found(id: ProductId) -> Self {
        Self::ProductNotFound(id)
    }

    /// All domain errors are caller mistakes; callers that only care about the
    /// class of failure can branch on this.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::DuplicateProduct(_)
                | Self::ProductNotFound(_)
                | Self::InvalidId(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_message_points_to_update() {
        let id = ProductId::new();
        let msg = DomainError::duplicate_product(id).to_string();
        assert!(msg.contains(&id.to_string()));
        assert!(msg.contains("update_product_price"));
    }

    #[test]
    fn every_variant_is_invalid_argument() {
        let id = ProductId::new();
        for err in [
            DomainError::validation("name cannot be empty"),
            DomainError::duplicate_product(id),
            DomainError::product_not_found(id),
            DomainError::invalid_id("ProductId: bad"),
        ] {
            assert!(err.is_invalid_argument(), "{err}");
        }
    }
}
