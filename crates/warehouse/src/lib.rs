//! Warehouse domain module.
//!
//! Categories, warehouses and the products they hold, implemented as in-memory
//! domain logic (no IO, no HTTP, no storage). Registries are owned by an
//! explicit [`Inventory`] context rather than process-wide globals, so each
//! caller (and each test) controls their lifetime.

pub mod category;
pub mod inventory;
pub mod product;
pub mod warehouse;

pub use category::{Category, CategoryRegistry};
pub use inventory::{Inventory, WarehouseRegistry};
pub use product::{Price, ProductRecord, same_price};
pub use warehouse::{Warehouse, WarehouseSnapshot};

pub use stockroom_core::{DomainError, DomainResult, ProductId};
