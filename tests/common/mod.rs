#![allow(dead_code)]

use coinvend::domain::coin::RECOGNIZED_DENOMINATIONS;
use coinvend::domain::inventory::InventoryItem;
use coinvend::domain::vault::{ChangeSlot, VAULT_DENOMINATIONS};
use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new("cola", 100, 10),
        InventoryItem::new("chips", 50, 10),
        InventoryItem::new("candy", 65, 10),
    ]
}

pub fn vault_with(count: u32) -> Vec<ChangeSlot> {
    VAULT_DENOMINATIONS
        .iter()
        .map(|coin| ChangeSlot::new(coin.id, count))
        .collect()
}

pub fn write_config(path: &Path, inventory: &[InventoryItem], change: &[ChangeSlot]) -> Result<(), Error> {
    let file = File::create(path)?;
    let config = serde_json::json!({
        "inventory": inventory,
        "change": change,
    });
    serde_json::to_writer_pretty(file, &config)?;
    Ok(())
}

pub fn write_events(path: &Path, rows: &[[&str; 5]]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["action", "coin", "weight", "size", "product"])?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes `rows` random customer events: mostly coin inserts, with selections
/// and returns mixed in.
pub fn generate_events(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(["action", "coin", "weight", "size", "product"])?;

    let products = ["cola", "chips", "candy"];
    let mut rng = rand::thread_rng();

    for _ in 0..rows {
        match rng.gen_range(0..10) {
            0..=5 => {
                let coin = RECOGNIZED_DENOMINATIONS[rng.gen_range(0..RECOGNIZED_DENOMINATIONS.len())];
                let id = serde_json::to_value(coin.id)?;
                wtr.write_record(["insert", id.as_str().unwrap_or_default(), "", "", ""])?;
            }
            6 => {
                wtr.write_record(["insert", "", "2.5", "19.05", ""])?;
            }
            7 | 8 => {
                let product = products[rng.gen_range(0..products.len())];
                wtr.write_record(["select", "", "", "", product])?;
            }
            _ => {
                wtr.write_record(["return", "", "", "", ""])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
