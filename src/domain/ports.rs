use super::coin::Token;
use super::state::{MachineState, Screen};
use crate::error::Result;
use async_trait::async_trait;

/// A vending machine reachable by more than one caller at a time.
///
/// Implementations must run each call as one atomic step against the machine.
#[async_trait]
pub trait VendingPort: Send + Sync {
    async fn check_display(&self) -> Screen;
    async fn insert_coin(&self, token: Token) -> MachineState;
    async fn return_coins(&self) -> MachineState;
    async fn select_product(&self, name: &str) -> Result<MachineState>;
}

pub type VendingPortBox = Box<dyn VendingPort>;
