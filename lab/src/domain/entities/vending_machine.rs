//! Vending machine entity

use std::fmt;

use super::entity::{entity_any, put, Entity, EntityHeader, EntityKind, EntitySnapshot};

#[derive(Debug, Clone)]
pub struct VendingMachine {
    header: EntityHeader,
    inventory: u32,
}

impl VendingMachine {
    pub fn new(name: impl Into<String>, initial_inventory: u32) -> Self {
        let machine = Self {
            header: EntityHeader::new(name),
            inventory: initial_inventory,
        };
        tracing::debug!(entity = %machine.name(), inventory = initial_inventory, "Created vending machine");
        machine
    }

    pub fn inventory(&self) -> u32 {
        self.inventory
    }

    /// Take `quantity` items. Zero or more than what is stocked is refused.
    pub fn purchase(&mut self, quantity: u32) -> bool {
        if quantity == 0 {
            tracing::warn!(entity = %self.name(), "Cannot purchase non-positive quantity");
            return false;
        }

        if self.inventory < quantity {
            tracing::warn!(
                entity = %self.name(),
                requested = quantity,
                available = self.inventory,
                "Purchase failed"
            );
            return false;
        }

        self.inventory -= quantity;
        tracing::info!(entity = %self.name(), quantity = quantity, remaining = self.inventory, "Purchased");
        true
    }

    /// Add exactly `quantity` items. Zero, or an amount the counter cannot
    /// hold, is refused. Returns whether stock changed.
    pub fn restock(&mut self, quantity: u32) -> bool {
        if quantity == 0 {
            tracing::warn!(entity = %self.name(), "Cannot restock with non-positive quantity");
            return false;
        }

        let Some(total) = self.inventory.checked_add(quantity) else {
            tracing::warn!(
                entity = %self.name(),
                quantity = quantity,
                inventory = self.inventory,
                "Restock would overflow inventory"
            );
            return false;
        };

        self.inventory = total;
        tracing::info!(entity = %self.name(), quantity = quantity, total = self.inventory, "Restocked");
        true
    }
}

impl Entity for VendingMachine {
    fn header(&self) -> &EntityHeader {
        &self.header
    }

    fn kind(&self) -> EntityKind {
        EntityKind::VendingMachine
    }

    fn write_fields(&self, out: &mut EntitySnapshot) {
        put(out, "inventory", self.inventory);
    }

    entity_any!();
}

impl fmt::Display for VendingMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VendingMachine(name={}, inventory={}, id={})",
            self.name(),
            self.inventory,
            self.id()
        )
    }
}
