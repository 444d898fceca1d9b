use chrono::Utc;

use stockroom_core::{DomainError, DomainResult, EntityId};
use stockroom_events::{EventBus, InMemoryEventBus, Subscription};
use stockroom_inventory::{Part, PartId};
use stockroom_products::{Product, ProductId};

use crate::changes::InventoryEvent;
use crate::collection::Collection;

/// All parts and products, in insertion order.
///
/// The registry is an ordinary owned value: front ends hold it (or a `&mut` to
/// it) and call into it on every user action. Reads hand out borrowed slices,
/// so a caller that needs to hear about later changes subscribes instead of
/// keeping a view around.
#[derive(Debug, Default)]
pub struct Inventory {
    parts: Collection<Part>,
    products: Collection<Product>,
    changes: InMemoryEventBus<InventoryEvent>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive an [`InventoryEvent`] for every successful mutation made after
    /// this call.
    pub fn subscribe(&self) -> Subscription<InventoryEvent> {
        self.changes.subscribe()
    }

    fn publish(&self, event: InventoryEvent) {
        if let Err(err) = self.changes.publish(event) {
            tracing::warn!(?err, "inventory change notification dropped");
        }
    }

    // ---------------------------------------------------------------------
    // Parts
    // ---------------------------------------------------------------------

    /// Append a part. Duplicate ids are accepted.
    pub fn add_part(&mut self, part: Part) {
        let part_id = part.id_typed();
        if self.parts.position(part_id).is_some() {
            tracing::debug!(%part_id, "adding part whose id is already in use");
        }
        self.parts.push(part);
        tracing::debug!(%part_id, total = self.parts.len(), "part added");
        self.publish(InventoryEvent::PartAdded {
            part_id,
            occurred_at: Utc::now(),
        });
    }

    /// Replace the part at `index` (as returned by [`Self::position_of_part`]),
    /// returning the part that was there.
    ///
    /// Changing the id of a part some product references is refused, like
    /// deleting it would be.
    pub fn update_part(&mut self, index: usize, part: Part) -> DomainResult<Part> {
        let part_id = part.id_typed();
        if let Some(current) = self.parts.as_slice().get(index) {
            let current_id = current.id_typed();
            if current_id != part_id {
                if let Some(product) = self.products.iter().find(|p| p.references_part(current_id)) {
                    let product_id = product.id_typed();
                    tracing::warn!(%current_id, %part_id, %product_id, "refusing to change id of associated part");
                    return Err(DomainError::invariant(format!(
                        "part {current_id} is associated with product {product_id}"
                    )));
                }
            }
        }
        let previous = self.parts.replace(index, part)?;
        tracing::debug!(index, %part_id, replaced = %previous.id_typed(), "part updated");
        self.publish(InventoryEvent::PartUpdated {
            index,
            part_id,
            occurred_at: Utc::now(),
        });
        Ok(previous)
    }

    /// Remove the first part with `part_id` and return it.
    ///
    /// Refused while any product still lists the part among its associated
    /// parts; dissociate it first.
    pub fn delete_part(&mut self, part_id: PartId) -> DomainResult<Part> {
        let index = self.parts.position(part_id).ok_or_else(DomainError::not_found)?;

        if let Some(product) = self.products.iter().find(|p| p.references_part(part_id)) {
            let product_id = product.id_typed();
            tracing::warn!(%part_id, %product_id, "refusing to delete part still associated with a product");
            return Err(DomainError::invariant(format!(
                "part {part_id} is associated with product {product_id}"
            )));
        }

        let removed = self.parts.remove_at(index);
        tracing::debug!(%part_id, total = self.parts.len(), "part deleted");
        self.publish(InventoryEvent::PartDeleted {
            part_id,
            occurred_at: Utc::now(),
        });
        Ok(removed)
    }

    pub fn lookup_part(&self, part_id: PartId) -> Option<&Part> {
        self.parts.get(part_id)
    }

    /// Parts whose name contains `query`, ignoring case. Empty when nothing
    /// matches, including when there are no parts at all.
    pub fn lookup_parts_by_name(&self, query: &str) -> Vec<&Part> {
        self.parts.search_name(query)
    }

    pub fn position_of_part(&self, part_id: PartId) -> Option<usize> {
        self.parts.position(part_id)
    }

    pub fn all_parts(&self) -> &[Part] {
        self.parts.as_slice()
    }

    /// One past the highest part id in use (1 for an empty registry).
    pub fn next_part_id(&self) -> PartId {
        self.parts
            .max_id()
            .map(|id| PartId(id.0.next()))
            .unwrap_or(PartId(EntityId::new(1)))
    }

    // ---------------------------------------------------------------------
    // Products
    // ---------------------------------------------------------------------

    /// Append a product. Duplicate ids are accepted, and associated part ids
    /// are taken as given.
    pub fn add_product(&mut self, product: Product) {
        let product_id = product.id_typed();
        if self.products.position(product_id).is_some() {
            tracing::debug!(%product_id, "adding product whose id is already in use");
        }
        self.products.push(product);
        tracing::debug!(%product_id, total = self.products.len(), "product added");
        self.publish(InventoryEvent::ProductAdded {
            product_id,
            occurred_at: Utc::now(),
        });
    }

    /// Replace the product at `index`, returning the product that was there.
    pub fn update_product(&mut self, index: usize, product: Product) -> DomainResult<Product> {
        let product_id = product.id_typed();
        let previous = self.products.replace(index, product)?;
        tracing::debug!(index, %product_id, replaced = %previous.id_typed(), "product updated");
        self.publish(InventoryEvent::ProductUpdated {
            index,
            product_id,
            occurred_at: Utc::now(),
        });
        Ok(previous)
    }

    /// Remove the first product with `product_id` and return it.
    ///
    /// Refused while the product still has associated parts; the product is
    /// left exactly as it was.
    pub fn delete_product(&mut self, product_id: ProductId) -> DomainResult<Product> {
        let index = self
            .products
            .position(product_id)
            .ok_or_else(DomainError::not_found)?;

        let product = &self.products.as_slice()[index];
        if product.has_associated_parts() {
            let associated = product.associated_part_ids().len();
            tracing::warn!(%product_id, associated, "refusing to delete product with associated parts");
            return Err(DomainError::invariant(format!(
                "product {product_id} still has {associated} associated part(s)"
            )));
        }

        let removed = self.products.remove_at(index);
        tracing::debug!(%product_id, total = self.products.len(), "product deleted");
        self.publish(InventoryEvent::ProductDeleted {
            product_id,
            occurred_at: Utc::now(),
        });
        Ok(removed)
    }

    pub fn lookup_product(&self, product_id: ProductId) -> Option<&Product> {
        self.products.get(product_id)
    }

    /// Products whose name contains `query`, ignoring case.
    pub fn lookup_products_by_name(&self, query: &str) -> Vec<&Product> {
        self.products.search_name(query)
    }

    pub fn position_of_product(&self, product_id: ProductId) -> Option<usize> {
        self.products.position(product_id)
    }

    pub fn all_products(&self) -> &[Product] {
        self.products.as_slice()
    }

    /// One past the highest product id in use (1 for an empty registry).
    pub fn next_product_id(&self) -> ProductId {
        self.products
            .max_id()
            .map(|id| ProductId(id.0.next()))
            .unwrap_or(ProductId(EntityId::new(1)))
    }

    // ---------------------------------------------------------------------
    // Associations
    // ---------------------------------------------------------------------

    /// Add `part_id` to the stored product's association list.
    pub fn associate_part(&mut self, product_id: ProductId, part_id: PartId) -> DomainResult<()> {
        if self.parts.get(part_id).is_none() {
            return Err(DomainError::not_found());
        }
        let product = self
            .products
            .get_mut(product_id)
            .ok_or_else(DomainError::not_found)?;
        product.add_associated_part_id(part_id);
        tracing::debug!(%product_id, %part_id, "part associated");
        self.publish(InventoryEvent::AssociationsChanged {
            product_id,
            occurred_at: Utc::now(),
        });
        Ok(())
    }

    /// Remove the first occurrence of `part_id` from the stored product's
    /// association list.
    pub fn dissociate_part(&mut self, product_id: ProductId, part_id: PartId) -> DomainResult<()> {
        let product = self
            .products
            .get_mut(product_id)
            .ok_or_else(DomainError::not_found)?;
        if !product.remove_associated_part(part_id) {
            return Err(DomainError::not_found());
        }
        tracing::debug!(%product_id, %part_id, "part dissociated");
        self.publish(InventoryEvent::AssociationsChanged {
            product_id,
            occurred_at: Utc::now(),
        });
        Ok(())
    }

    /// The parts a product is built from, in association order. Ids with no
    /// matching part are skipped. `None` when the product does not exist.
    pub fn associated_parts(&self, product_id: ProductId) -> Option<Vec<&Part>> {
        let product = self.products.get(product_id)?;
        Some(
            product
                .associated_part_ids()
                .iter()
                .filter_map(|id| self.parts.get(*id))
                .collect(),
        )
    }
}
