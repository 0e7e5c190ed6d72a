//! Domain layer: coins, money, the change vault, inventory and the observable
//! machine state. Nothing here performs I/O.

pub mod coin;
pub mod inventory;
pub mod money;
pub mod ports;
pub mod state;
pub mod validator;
pub mod vault;
