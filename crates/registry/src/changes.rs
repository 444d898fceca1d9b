//! Change notifications published by the registry.

use chrono::{DateTime, Utc};

use stockroom_events::Event;
use stockroom_inventory::PartId;
use stockroom_products::ProductId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryEvent {
    PartAdded {
        part_id: PartId,
        occurred_at: DateTime<Utc>,
    },
    PartUpdated {
        index: usize,
        part_id: PartId,
        occurred_at: DateTime<Utc>,
    },
    PartDeleted {
        part_id: PartId,
        occurred_at: DateTime<Utc>,
    },
    ProductAdded {
        product_id: ProductId,
        occurred_at: DateTime<Utc>,
    },
    ProductUpdated {
        index: usize,
        product_id: ProductId,
        occurred_at: DateTime<Utc>,
    },
    ProductDeleted {
        product_id: ProductId,
        occurred_at: DateTime<Utc>,
    },
    /// A stored product's association list was edited in place.
    AssociationsChanged {
        product_id: ProductId,
        occurred_at: DateTime<Utc>,
    },
}

impl InventoryEvent {
    /// True for events that change what a parts table shows.
    pub fn touches_parts(&self) -> bool {
        matches!(
            self,
            InventoryEvent::PartAdded { .. }
                | InventoryEvent::PartUpdated { .. }
                | InventoryEvent::PartDeleted { .. }
        )
    }

    /// True for events that change what a products table shows.
    pub fn touches_products(&self) -> bool {
        !self.touches_parts()
    }
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::PartAdded { .. } => "inventory.part.added",
            InventoryEvent::PartUpdated { .. } => "inventory.part.updated",
            InventoryEvent::PartDeleted { .. } => "inventory.part.deleted",
            InventoryEvent::ProductAdded { .. } => "inventory.product.added",
            InventoryEvent::ProductUpdated { .. } => "inventory.product.updated",
            InventoryEvent::ProductDeleted { .. } => "inventory.product.deleted",
            InventoryEvent::AssociationsChanged { .. } => "inventory.product.associations_changed",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::PartAdded { occurred_at, .. }
            | InventoryEvent::PartUpdated { occurred_at, .. }
            | InventoryEvent::PartDeleted { occurred_at, .. }
            | InventoryEvent::ProductAdded { occurred_at, .. }
            | InventoryEvent::ProductUpdated { occurred_at, .. }
            | InventoryEvent::ProductDeleted { occurred_at, .. }
            | InventoryEvent::AssociationsChanged { occurred_at, .. } => *occurred_at,
        }
    }
}
