use crate::domain::money::Cents;
use crate::domain::vault::CHANGE_DENOMINATIONS;
use crate::error::{Result, VendingError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One product line as stocked in the machine.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct InventoryItem {
    /// Name shown on the selection button; unique within a machine.
    pub display_name: String,
    pub price_cents: Cents,
    pub stock: u32,
}

impl InventoryItem {
    pub fn new(display_name: impl Into<String>, price_cents: u64, stock: u32) -> Self {
        Self {
            display_name: display_name.into(),
            price_cents: Cents::new(price_cents),
            stock,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryCatalog {
    items: BTreeMap<String, InventoryItem>,
}

impl InventoryCatalog {
    /// Builds a catalog, rejecting duplicate names and prices the change
    /// mechanism could not settle an overpayment against.
    pub fn new(items: Vec<InventoryItem>) -> Result<Self> {
        let unit = smallest_change_unit();
        let mut catalog = BTreeMap::new();

        for item in items {
            if item.price_cents.value() % unit.value() != 0 {
                return Err(VendingError::InvalidInventory(format!(
                    "price of {} ({}) is not a multiple of {}",
                    item.display_name, item.price_cents, unit
                )));
            }
            if catalog.contains_key(&item.display_name) {
                return Err(VendingError::InvalidInventory(format!(
                    "duplicate product {}",
                    item.display_name
                )));
            }
            catalog.insert(item.display_name.clone(), item);
        }

        Ok(Self { items: catalog })
    }

    pub fn get(&self, name: &str) -> Result<&InventoryItem> {
        self.items
            .get(name)
            .ok_or_else(|| VendingError::UnknownProduct(name.to_string()))
    }

    pub fn price_of(&self, name: &str) -> Result<Cents> {
        self.get(name).map(|item| item.price_cents)
    }

    pub fn stock_of(&self, name: &str) -> Result<u32> {
        self.get(name).map(|item| item.stock)
    }

    /// Removes one unit after a completed sale.
    pub fn decrement_stock(&mut self, name: &str) -> Result<()> {
        let item = self
            .items
            .get_mut(name)
            .ok_or_else(|| VendingError::UnknownProduct(name.to_string()))?;

        if item.stock == 0 {
            return Err(VendingError::InvalidInventory(format!(
                "{} is already sold out",
                name
            )));
        }
        item.stock -= 1;
        Ok(())
    }

    /// Items ordered by display name.
    pub fn items(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.values()
    }
}

fn smallest_change_unit() -> Cents {
    CHANGE_DENOMINATIONS
        .iter()
        .map(|coin| coin.value)
        .min()
        .unwrap_or(Cents::new(1))
}
