use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, EntityId, NamedEntity, Price, StockLevels};

/// Part identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(pub EntityId);

impl PartId {
    pub const fn new(value: u32) -> Self {
        Self(EntityId::new(value))
    }
}

impl core::fmt::Display for PartId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for PartId {
    type Err = stockroom_core::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Where a part comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PartSource {
    /// Manufactured on one of our own machines.
    InHouse { machine_id: u32 },
    /// Bought from an outside supplier.
    Outsourced { company_name: String },
}

/// A part in stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    id: PartId,
    name: String,
    price: Price,
    stock: StockLevels,
    source: PartSource,
}

impl Part {
    pub fn new(
        id: PartId,
        name: impl Into<String>,
        price: Price,
        stock: StockLevels,
        source: PartSource,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
            source,
        }
    }

    pub fn in_house(
        id: PartId,
        name: impl Into<String>,
        price: Price,
        stock: StockLevels,
        machine_id: u32,
    ) -> Self {
        Self::new(id, name, price, stock, PartSource::InHouse { machine_id })
    }

    pub fn outsourced(
        id: PartId,
        name: impl Into<String>,
        price: Price,
        stock: StockLevels,
        company_name: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            name,
            price,
            stock,
            PartSource::Outsourced {
                company_name: company_name.into(),
            },
        )
    }

    pub fn id_typed(&self) -> PartId {
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

    pub fn source(&self) -> &PartSource {
        &self.source
    }

    /// Machine id for in-house parts.
    pub fn machine_id(&self) -> Option<u32> {
        match self.source {
            PartSource::InHouse { machine_id } => Some(machine_id),
            PartSource::Outsourced { .. } => None,
        }
    }

    /// Supplier for outsourced parts.
    pub fn company_name(&self) -> Option<&str> {
        match &self.source {
            PartSource::Outsourced { company_name } => Some(company_name),
            PartSource::InHouse { .. } => None,
        }
    }

    pub fn set_id(&mut self, id: PartId) {
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

    /// Switch variant or update the variant payload.
    pub fn set_source(&mut self, source: PartSource) {
        self.source = source;
    }
}

impl Entity for Part {
    type Id = PartId;

    fn id(&self) -> PartId {
        self.id
    }
}

impl NamedEntity for Part {
    fn name(&self) -> &str {
        &self.name
    }
}
