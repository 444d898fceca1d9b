//! `stockroom-registry`: the in-memory inventory.
//!
//! [`Inventory`] owns every part and product, answers id and name lookups, and
//! guards the product→part association rules:
//!
//! - a product with associated parts cannot be deleted
//! - a part that some product still references cannot be deleted
//!
//! Every successful mutation is announced as an [`InventoryEvent`] to
//! subscribers obtained from [`Inventory::subscribe`].

pub mod changes;
pub mod collection;
pub mod inventory;
pub mod seed;

pub use changes::InventoryEvent;
pub use collection::Collection;
pub use inventory::Inventory;
