use crate::domain::inventory::InventoryItem;
use crate::domain::vault::ChangeSlot;
use serde::{Deserialize, Serialize};

/// How a machine is stocked when it is switched on.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct MachineConfig {
    pub inventory: Vec<InventoryItem>,
    /// Starting vault counts. Denominations left out start at zero.
    #[serde(default)]
    pub change: Vec<ChangeSlot>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            inventory: vec![
                InventoryItem::new("cola", 100, 10),
                InventoryItem::new("chips", 50, 10),
                InventoryItem::new("candy", 65, 10),
            ],
            change: Vec::new(),
        }
    }
}
