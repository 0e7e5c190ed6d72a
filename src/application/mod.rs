//! Application layer containing the transaction controller.
//!
//! `VendingMachine` owns the session balance, the pending coin return, the
//! change vault and the inventory, and turns customer actions into
//! `MachineState` results.

pub mod config;
pub mod machine;
