use crate::domain::coin::DenominationId;
use crate::domain::money::Cents;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VendingError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] serde_json::Error),
    #[error("Unknown product: {0}")]
    UnknownProduct(String),
    #[error("Invalid inventory: {0}")]
    InvalidInventory(String),
    #[error("Invalid event: {0}")]
    InvalidEvent(String),
    #[error("Change vault holds {available} x {denomination}, {requested} required")]
    VaultShortfall {
        denomination: DenominationId,
        requested: u32,
        available: u32,
    },
    #[error("{remaining} cannot be paid out with change denominations")]
    IndivisibleChange { remaining: Cents },
}

pub type Result<T> = std::result::Result<T, VendingError>;
