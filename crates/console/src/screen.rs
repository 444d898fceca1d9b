//! Main-screen controller: the parts and products tables and their buttons.
//!
//! Each handler takes the dialogs to use for that interaction and returns
//! whether the action went through. Tables show either the full registry
//! lists or a snapshot of the last search; any change to a table's collection
//! drops the snapshot and the table shows the full list again.

use stockroom_core::{DomainError, EntityId};
use stockroom_events::Subscription;
use stockroom_inventory::{Part, PartId};
use stockroom_products::{Product, ProductId};
use stockroom_registry::{Inventory, InventoryEvent};

use crate::dialogs::Dialogs;

const NO_RESULTS_TITLE: &str = "No Results";
const NO_RESULTS_MESSAGE: &str = "No results were found matching input.";
const CONFIRM_HEADER: &str = "Are You Sure?";

#[derive(Debug)]
pub struct MainScreen {
    inventory: Inventory,
    changes: Subscription<InventoryEvent>,
    part_results: Option<Vec<Part>>,
    product_results: Option<Vec<Product>>,
}

impl MainScreen {
    pub fn new(inventory: Inventory) -> Self {
        let changes = inventory.subscribe();
        Self {
            inventory,
            changes,
            part_results: None,
            product_results: None,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Rows of the parts table.
    pub fn visible_parts(&self) -> &[Part] {
        match &self.part_results {
            Some(results) => results,
            None => self.inventory.all_parts(),
        }
    }

    /// Rows of the products table.
    pub fn visible_products(&self) -> &[Product] {
        match &self.product_results {
            Some(results) => results,
            None => self.inventory.all_products(),
        }
    }

    pub fn is_part_search_active(&self) -> bool {
        self.part_results.is_some()
    }

    pub fn is_product_search_active(&self) -> bool {
        self.product_results.is_some()
    }

    /// Apply pending change notifications to the tables.
    pub fn refresh(&mut self) {
        for event in self.changes.drain() {
            if event.touches_parts() {
                self.part_results = None;
            }
            if event.touches_products() {
                self.product_results = None;
            }
        }
    }

    pub fn clear_searches(&mut self) {
        self.part_results = None;
        self.product_results = None;
    }

    // ---------------------------------------------------------------------
    // Search
    // ---------------------------------------------------------------------

    /// An integer query is an id lookup, anything else a name search. An empty
    /// query or an empty result warns and restores the full list.
    pub fn search_parts(&mut self, dialogs: &mut dyn Dialogs, query: &str) -> bool {
        let query = query.trim();
        let results: Vec<Part> = match query.parse::<u32>() {
            Ok(id) => self
                .inventory
                .lookup_part(PartId::new(id))
                .into_iter()
                .cloned()
                .collect(),
            Err(_) => self
                .inventory
                .lookup_parts_by_name(query)
                .into_iter()
                .cloned()
                .collect(),
        };

        if query.is_empty() || results.is_empty() {
            self.part_results = None;
            dialogs.warn(NO_RESULTS_TITLE, NO_RESULTS_MESSAGE);
            return false;
        }
        tracing::debug!(query, matches = results.len(), "part search");
        self.part_results = Some(results);
        true
    }

    pub fn search_products(&mut self, dialogs: &mut dyn Dialogs, query: &str) -> bool {
        let query = query.trim();
        let results: Vec<Product> = match query.parse::<u32>() {
            Ok(id) => self
                .inventory
                .lookup_product(ProductId::new(id))
                .into_iter()
                .cloned()
                .collect(),
            Err(_) => self
                .inventory
                .lookup_products_by_name(query)
                .into_iter()
                .cloned()
                .collect(),
        };

        if query.is_empty() || results.is_empty() {
            self.product_results = None;
            dialogs.warn(NO_RESULTS_TITLE, NO_RESULTS_MESSAGE);
            return false;
        }
        tracing::debug!(query, matches = results.len(), "product search");
        self.product_results = Some(results);
        true
    }

    // ---------------------------------------------------------------------
    // Parts
    // ---------------------------------------------------------------------

    /// Id the add-part form pre-fills.
    pub fn next_part_id(&self) -> PartId {
        self.inventory.next_part_id()
    }

    pub fn add_part(&mut self, dialogs: &mut dyn Dialogs, part: Part) -> bool {
        if let Err(err) = part.stock().ensure_within_bounds() {
            dialogs.warn("Invalid Part", &err.to_string());
            return false;
        }
        self.inventory.add_part(part);
        self.refresh();
        true
    }

    /// Save the modify-part form: `selected` is the row being edited.
    pub fn modify_part(&mut self, dialogs: &mut dyn Dialogs, selected: PartId, part: Part) -> bool {
        let Some(index) = self.inventory.position_of_part(selected) else {
            dialogs.warn("No Part Selected", "Please select a part to modify.");
            return false;
        };
        if let Err(err) = part.stock().ensure_within_bounds() {
            dialogs.warn("Invalid Part", &err.to_string());
            return false;
        }
        match self.inventory.update_part(index, part) {
            Ok(_) => {
                self.refresh();
                true
            }
            Err(err) => {
                dialogs.warn("Part Not Modified", &err.to_string());
                false
            }
        }
    }

    pub fn delete_part(&mut self, dialogs: &mut dyn Dialogs, selected: Option<PartId>) -> bool {
        let Some(part_id) = selected else {
            dialogs.warn("No Part Selected", "Please select a part to delete.");
            return false;
        };
        if !dialogs.confirm(CONFIRM_HEADER, "Part will be permanently deleted from Inventory.") {
            return false;
        }
        match self.inventory.delete_part(part_id) {
            Ok(_) => {
                self.refresh();
                true
            }
            Err(err) => {
                dialogs.warn("Part Not Deleted", &describe(&err, "part", part_id.0));
                false
            }
        }
    }

    // ---------------------------------------------------------------------
    // Products
    // ---------------------------------------------------------------------

    pub fn next_product_id(&self) -> ProductId {
        self.inventory.next_product_id()
    }

    pub fn add_product(&mut self, dialogs: &mut dyn Dialogs, product: Product) -> bool {
        if let Err(err) = product.stock().ensure_within_bounds() {
            dialogs.warn("Invalid Product", &err.to_string());
            return false;
        }
        self.inventory.add_product(product);
        self.refresh();
        true
    }

    pub fn modify_product(
        &mut self,
        dialogs: &mut dyn Dialogs,
        selected: ProductId,
        product: Product,
    ) -> bool {
        let Some(index) = self.inventory.position_of_product(selected) else {
            dialogs.warn("No Product Selected", "Please select a product to modify.");
            return false;
        };
        if let Err(err) = product.stock().ensure_within_bounds() {
            dialogs.warn("Invalid Product", &err.to_string());
            return false;
        }
        match self.inventory.update_product(index, product) {
            Ok(_) => {
                self.refresh();
                true
            }
            Err(err) => {
                dialogs.warn("Product Not Modified", &err.to_string());
                false
            }
        }
    }

    pub fn delete_product(&mut self, dialogs: &mut dyn Dialogs, selected: Option<ProductId>) -> bool {
        let Some(product_id) = selected else {
            dialogs.warn("No Product Selected", "Please select a product to delete.");
            return false;
        };
        if !dialogs.confirm(
            CONFIRM_HEADER,
            "Product will be permanently deleted from Inventory.",
        ) {
            return false;
        }
        match self.inventory.delete_product(product_id) {
            Ok(_) => {
                self.refresh();
                true
            }
            Err(err) => {
                dialogs.warn("Product Not Deleted", &describe(&err, "product", product_id.0));
                false
            }
        }
    }

    pub fn associate_part(
        &mut self,
        dialogs: &mut dyn Dialogs,
        product_id: ProductId,
        part_id: PartId,
    ) -> bool {
        match self.inventory.associate_part(product_id, part_id) {
            Ok(()) => {
                self.refresh();
                true
            }
            Err(err) => {
                dialogs.warn(
                    "Part Not Associated",
                    &format!("Could not add part {part_id} to product {product_id}: {err}."),
                );
                false
            }
        }
    }

    pub fn dissociate_part(
        &mut self,
        dialogs: &mut dyn Dialogs,
        product_id: ProductId,
        part_id: PartId,
    ) -> bool {
        if !dialogs.confirm(CONFIRM_HEADER, "Part will be removed from this product.") {
            return false;
        }
        match self.inventory.dissociate_part(product_id, part_id) {
            Ok(()) => {
                self.refresh();
                true
            }
            Err(err) => {
                dialogs.warn(
                    "Part Not Removed",
                    &format!("Could not remove part {part_id} from product {product_id}: {err}."),
                );
                false
            }
        }
    }
}

fn describe(err: &DomainError, kind: &str, id: EntityId) -> String {
    match err {
        DomainError::NotFound => format!("No {kind} with id {id} exists."),
        DomainError::InvariantViolation(reason) => format!("Cannot delete {kind} {id}: {reason}."),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use stockroom_core::{Price, StockLevels};

    /// Records warnings and answers confirmations from a script.
    #[derive(Default)]
    struct ScriptedDialogs {
        warnings: Vec<(String, String)>,
        answers: VecDeque<bool>,
        confirmations: usize,
    }

    impl ScriptedDialogs {
        fn answering(answers: &[bool]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                ..Self::default()
            }
        }

        fn titles(&self) -> Vec<&str> {
            self.warnings.iter().map(|(t, _)| t.as_str()).collect()
        }
    }

    impl Dialogs for ScriptedDialogs {
        fn warn(&mut self, title: &str, message: &str) {
            self.warnings.push((title.to_string(), message.to_string()));
        }

        fn confirm(&mut self, _header: &str, _content: &str) -> bool {
            self.confirmations += 1;
            self.answers.pop_front().unwrap_or(false)
        }
    }

    fn screen() -> MainScreen {
        MainScreen::new(Inventory::with_demo_data().unwrap())
    }

    fn part(id: u32, name: &str, stock: u32) -> Part {
        Part::in_house(
            PartId::new(id),
            name,
            Price::from_cents(100),
            StockLevels::new(stock, 1, 10).unwrap(),
            7,
        )
    }

    #[test]
    fn numeric_search_looks_up_by_id() {
        let mut screen = screen();
        let mut dialogs = ScriptedDialogs::default();

        assert!(screen.search_parts(&mut dialogs, " 4 "));
        let ids: Vec<PartId> = screen.visible_parts().iter().map(Part::id_typed).collect();
        assert_eq!(ids, vec![PartId::new(4)]);
        assert!(dialogs.warnings.is_empty());
    }

    #[test]
    fn text_search_matches_names_case_insensitively() {
        let mut screen = screen();
        let mut dialogs = ScriptedDialogs::default();

        assert!(screen.search_parts(&mut dialogs, "INPART"));
        assert_eq!(screen.visible_parts().len(), 2);
        assert!(screen.is_part_search_active());
    }

    #[test]
    fn empty_or_fruitless_search_warns_and_restores_full_list() {
        let mut screen = screen();
        let mut dialogs = ScriptedDialogs::default();

        assert!(screen.search_parts(&mut dialogs, "outPart1"));
        assert!(!screen.search_parts(&mut dialogs, "nothing like this"));
        assert_eq!(screen.visible_parts().len(), 4);

        assert!(!screen.search_products(&mut dialogs, "   "));
        assert!(!screen.search_products(&mut dialogs, "99"));
        assert_eq!(dialogs.titles(), vec!["No Results"; 3]);
        assert!(!screen.is_product_search_active());
    }

    #[test]
    fn changes_drop_the_search_snapshot() {
        let mut screen = screen();
        let mut dialogs = ScriptedDialogs::default();

        assert!(screen.search_parts(&mut dialogs, "outPart"));
        assert!(screen.search_products(&mut dialogs, "Product2"));
        assert!(screen.add_part(&mut dialogs, part(6, "outPart3", 5)));

        assert!(!screen.is_part_search_active());
        assert!(screen.is_product_search_active());
        assert_eq!(screen.visible_parts().len(), 5);
    }

    #[test]
    fn add_part_rejects_stock_outside_bounds() {
        let mut screen = screen();
        let mut dialogs = ScriptedDialogs::default();

        assert!(!screen.add_part(&mut dialogs, part(6, "Overstock", 11)));
        assert_eq!(dialogs.titles(), vec!["Invalid Part"]);
        assert_eq!(screen.inventory().all_parts().len(), 4);
    }

    #[test]
    fn modify_part_replaces_selected_row() {
        let mut screen = screen();
        let mut dialogs = ScriptedDialogs::default();

        assert!(screen.modify_part(&mut dialogs, PartId::new(2), part(2, "inPart2b", 6)));
        assert_eq!(screen.inventory().all_parts()[1].name(), "inPart2b");

        assert!(!screen.modify_part(&mut dialogs, PartId::new(42), part(42, "ghost", 6)));
        assert_eq!(dialogs.titles(), vec!["No Part Selected"]);
    }

    #[test]
    fn delete_requires_selection_and_confirmation() {
        let mut screen = screen();
        let mut dialogs = ScriptedDialogs::answering(&[false]);

        assert!(!screen.delete_part(&mut dialogs, None));
        assert_eq!(dialogs.titles(), vec!["No Part Selected"]);
        assert_eq!(dialogs.confirmations, 0);

        // cancelled
        assert!(!screen.delete_part(&mut dialogs, Some(PartId::new(1))));
        assert_eq!(dialogs.confirmations, 1);
        assert_eq!(dialogs.warnings.len(), 1);
    }

    #[test]
    fn refused_deletes_explain_why() {
        let mut screen = screen();
        let mut dialogs = ScriptedDialogs::answering(&[true, true]);

        assert!(!screen.delete_product(&mut dialogs, Some(ProductId::new(1))));
        assert!(!screen.delete_part(&mut dialogs, Some(PartId::new(1))));

        assert_eq!(dialogs.titles(), vec!["Product Not Deleted", "Part Not Deleted"]);
        assert!(dialogs.warnings[0].1.contains("associated part"));
        assert!(dialogs.warnings[1].1.contains("product 1"));
        assert_eq!(screen.inventory().all_products().len(), 2);
    }

    #[test]
    fn emptied_product_can_be_deleted() {
        let mut screen = screen();
        let mut dialogs = ScriptedDialogs::answering(&[true, true, true, true]);

        assert!(screen.dissociate_part(&mut dialogs, ProductId::new(1), PartId::new(1)));
        assert!(screen.dissociate_part(&mut dialogs, ProductId::new(1), PartId::new(4)));
        assert!(screen.delete_product(&mut dialogs, Some(ProductId::new(1))));
        assert!(screen.delete_part(&mut dialogs, Some(PartId::new(1))));

        assert!(dialogs.warnings.is_empty());
        assert!(screen.inventory().lookup_product(ProductId::new(1)).is_none());
        assert!(screen.inventory().lookup_part(PartId::new(1)).is_none());
    }

    #[test]
    fn missing_delete_target_is_reported() {
        let mut screen = screen();
        let mut dialogs = ScriptedDialogs::answering(&[true]);

        assert!(!screen.delete_part(&mut dialogs, Some(PartId::new(99))));
        assert_eq!(dialogs.warnings[0].1, "No part with id 99 exists.");
    }
}
