//! Parts domain module.
//!
//! A part is a purchasable unit of stock, either built on an in-house machine
//! or bought from an outside supplier. Plain data, no IO.

pub mod part;

pub use part::{Part, PartId, PartSource};
