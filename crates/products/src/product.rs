use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, EntityId, NamedEntity, Price, StockLevels};
use stockroom_inventory::{Part, PartId};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub EntityId);

impl ProductId {
    pub const fn new(value: u32) -> Self {
        Self(EntityId::new(value))
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for ProductId {
    type Err = stockroom_core::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A sellable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    stock: StockLevels,
    /// Ids of the parts this product is built from, in the order they were
    /// associated. Duplicates are allowed.
    associated_parts: Vec<PartId>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Price, stock: StockLevels) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
            associated_parts: Vec::new(),
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock(&self) -> StockLevels {
        self.stock
    }

    pub fn set_id(&mut self, id: ProductId) {
        self.id = id;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: Price) {
        self.price = price;
    }

    pub fn set_stock(&mut self, stock: StockLevels) {
        self.stock = stock;
    }

    /// Append a part to the association list (no duplicate check).
    pub fn add_associated_part(&mut self, part: &Part) {
        self.associated_parts.push(part.id_typed());
    }

    /// Append a part by id. Used when the part record is not at hand.
    pub fn add_associated_part_id(&mut self, part_id: PartId) {
        self.associated_parts.push(part_id);
    }

    /// Remove the first association with `part_id`. Returns whether one was
    /// removed.
    pub fn remove_associated_part(&mut self, part_id: PartId) -> bool {
        match self.associated_parts.iter().position(|id| *id == part_id) {
            Some(pos) => {
                self.associated_parts.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn associated_part_ids(&self) -> &[PartId] {
        &self.associated_parts
    }

    pub fn has_associated_parts(&self) -> bool {
        !self.associated_parts.is_empty()
    }

    pub fn references_part(&self, part_id: PartId) -> bool {
        self.associated_parts.contains(&part_id)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

impl NamedEntity for Product {
    fn name(&self) -> &str {
        &self.name
    }
}
