//! Products domain module.
//!
//! A product is a sellable item assembled from zero or more parts. It refers
//! to its parts by id; the parts themselves live in the registry.

pub mod product;

pub use product::{Product, ProductId};
