use crate::application::machine::VendingMachine;
use crate::domain::coin::Token;
use crate::domain::ports::VendingPort;
use crate::domain::state::{MachineState, Screen};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A vending machine that can be handed to several tasks.
///
/// Uses `Arc<Mutex<VendingMachine>>` so that each operation holds the one lock
/// for its whole duration; an insert from one caller can never land between
/// another caller's balance check and stock update. Clones share the machine.
#[derive(Clone)]
pub struct SharedMachine {
    machine: Arc<Mutex<VendingMachine>>,
}

impl SharedMachine {
    pub fn new(machine: VendingMachine) -> Self {
        Self {
            machine: Arc::new(Mutex::new(machine)),
        }
    }

    /// Returns a copy of the machine as it is right now.
    pub async fn snapshot(&self) -> VendingMachine {
        self.machine.lock().await.clone()
    }
}

#[async_trait]
impl VendingPort for SharedMachine {
    async fn check_display(&self) -> Screen {
        self.machine.lock().await.check_display()
    }

    async fn insert_coin(&self, token: Token) -> MachineState {
        self.machine.lock().await.insert_coin(token)
    }

    async fn return_coins(&self) -> MachineState {
        self.machine.lock().await.return_coins()
    }

    async fn select_product(&self, name: &str) -> Result<MachineState> {
        self.machine.lock().await.select_product(name)
    }
}
