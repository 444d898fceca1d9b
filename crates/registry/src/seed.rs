//! Sample records for demos and manual testing.

use stockroom_core::{DomainResult, Price, StockLevels};
use stockroom_inventory::{Part, PartId};
use stockroom_products::{Product, ProductId};

use crate::inventory::Inventory;

impl Inventory {
    /// A registry pre-filled by [`Inventory::load_demo_data`].
    pub fn with_demo_data() -> DomainResult<Self> {
        let mut inventory = Self::new();
        inventory.load_demo_data()?;
        Ok(inventory)
    }

    /// Append four parts (two in-house, two outsourced) and two products that
    /// each use one part of each kind.
    pub fn load_demo_data(&mut self) -> DomainResult<()> {
        let in_part1 = Part::in_house(
            PartId::new(1),
            "inPart1",
            Price::from_cents(999),
            StockLevels::new(5, 1, 2)?,
            97,
        );
        let in_part2 = Part::in_house(
            PartId::new(2),
            "inPart2",
            Price::from_cents(1099),
            StockLevels::new(3, 6, 37)?,
            91,
        );
        let out_part1 = Part::outsourced(
            PartId::new(4),
            "outPart1",
            Price::from_cents(999),
            StockLevels::new(2, 5, 11)?,
            "Wowz",
        );
        let out_part2 = Part::outsourced(
            PartId::new(5),
            "outPart2",
            Price::from_cents(1999),
            StockLevels::new(1, 2, 19)?,
            "Nowz",
        );

        let mut product1 = Product::new(
            ProductId::new(1),
            "Product1",
            Price::from_cents(999),
            StockLevels::new(3, 1, 5)?,
        );
        product1.add_associated_part(&in_part1);
        product1.add_associated_part(&out_part1);

        let mut product2 = Product::new(
            ProductId::new(2),
            "Product2",
            Price::from_cents(999),
            StockLevels::new(3, 1, 5)?,
        );
        product2.add_associated_part(&in_part2);
        product2.add_associated_part(&out_part2);

        for part in [in_part1, in_part2, out_part1, out_part2] {
            self.add_part(part);
        }
        self.add_product(product1);
        self.add_product(product2);

        tracing::info!(
            parts = self.all_parts().len(),
            products = self.all_products().len(),
            "demo data loaded"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_data_links_every_part_to_a_product() {
        let inventory = Inventory::with_demo_data().unwrap();
        assert_eq!(inventory.all_parts().len(), 4);
        assert_eq!(inventory.all_products().len(), 2);

        for part in inventory.all_parts() {
            assert!(
                inventory
                    .all_products()
                    .iter()
                    .any(|p| p.references_part(part.id_typed())),
                "part {} is not used by any product",
                part.id_typed()
            );
        }
        assert_eq!(
            inventory.lookup_part(PartId::new(4)).unwrap().company_name(),
            Some("Wowz")
        );
    }

    #[test]
    fn demo_products_cannot_be_deleted_until_emptied() {
        let mut inventory = Inventory::with_demo_data().unwrap();
        assert!(inventory.delete_product(ProductId::new(1)).is_err());
        assert_eq!(inventory.next_part_id(), PartId::new(6));
    }
}
