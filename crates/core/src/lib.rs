//! `stockroom-core`: shared domain building blocks.
//!
//! This crate contains **pure domain** primitives used by the part and product
//! modules and by the registry (no IO, no logging setup, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod stock;
pub mod value_object;

pub use entity::{Entity, NamedEntity};
pub use error::{DomainError, DomainResult};
pub use id::EntityId;
pub use stock::StockLevels;
pub use value_object::{Price, ValueObject};
