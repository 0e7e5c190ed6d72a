use crate::application::config::MachineConfig;
use crate::domain::coin::Token;
use crate::domain::inventory::{InventoryCatalog, InventoryItem};
use crate::domain::money::Cents;
use crate::domain::state::{MachineState, Screen};
use crate::domain::validator::CoinValidator;
use crate::domain::vault::{ChangeSlot, ChangeVault};
use crate::error::{Result, VendingError};
use tracing::{debug, info, warn};

/// The transaction controller of a single vending machine.
///
/// Each method runs to completion against `&mut self`; callers sharing a
/// machine across tasks go through [`crate::infrastructure::in_memory::SharedMachine`].
#[derive(Debug, Clone)]
pub struct VendingMachine {
    validator: CoinValidator,
    vault: ChangeVault,
    catalog: InventoryCatalog,
    balance: Cents,
    pending_return: Vec<Token>,
}

impl VendingMachine {
    /// Creates a machine stocked with `inventory` and an optional change loadout.
    ///
    /// # Arguments
    ///
    /// * `inventory` - Products, keyed by display name.
    /// * `change` - Starting vault counts; an empty slice leaves the vault empty.
    pub fn new(inventory: Vec<InventoryItem>, change: &[ChangeSlot]) -> Result<Self> {
        Ok(Self::with_parts(
            CoinValidator::default(),
            ChangeVault::load(change),
            InventoryCatalog::new(inventory)?,
        ))
    }

    pub fn from_config(config: MachineConfig) -> Result<Self> {
        Self::new(config.inventory, &config.change)
    }

    pub fn with_parts(
        validator: CoinValidator,
        vault: ChangeVault,
        catalog: InventoryCatalog,
    ) -> Self {
        Self {
            validator,
            vault,
            catalog,
            balance: Cents::ZERO,
            pending_return: Vec::new(),
        }
    }

    pub fn balance(&self) -> Cents {
        self.balance
    }

    pub fn pending_return(&self) -> &[Token] {
        &self.pending_return
    }

    pub fn vault(&self) -> &ChangeVault {
        &self.vault
    }

    pub fn catalog(&self) -> &InventoryCatalog {
        &self.catalog
    }

    pub fn validator(&self) -> &CoinValidator {
        &self.validator
    }

    pub fn check_display(&self) -> Screen {
        if !self.vault.can_make_change() {
            Screen::ExactChangeOnly
        } else if self.balance.is_zero() {
            Screen::InsertCoin
        } else {
            Screen::Balance(self.balance)
        }
    }

    /// Credits a recognized coin, or hands an unrecognized token straight back.
    pub fn insert_coin(&mut self, token: Token) -> MachineState {
        let credited = self.validator.validate(&token).map(|coin| coin.value);

        let coin_return = match credited {
            Some(value) => {
                self.balance += value;
                self.pending_return.push(token);
                None
            }
            None => Some(vec![token]),
        };

        MachineState {
            display: self.check_display(),
            product_return: None,
            coin_return,
        }
    }

    /// Gives back every coin inserted since the last sale and clears the balance.
    pub fn return_coins(&mut self) -> MachineState {
        let returned = std::mem::take(&mut self.pending_return);
        info!(coins = returned.len(), balance = %self.balance, "returning coins");
        self.balance = Cents::ZERO;

        MachineState {
            display: Screen::InsertCoin,
            product_return: None,
            coin_return: Some(returned),
        }
    }

    /// Attempts to vend `name` against the current balance.
    ///
    /// Only an unknown product name is an error; sold out, underpayment and a
    /// vault too thin to pay change are reported on the display.
    pub fn select_product(&mut self, name: &str) -> Result<MachineState> {
        let item = self.catalog.get(name)?;
        let price = item.price_cents;

        if item.stock == 0 {
            debug!(product = name, "sold out");
            return Ok(MachineState::display_only(Screen::SoldOut));
        }

        let Some(change) = self.balance.checked_sub(price) else {
            debug!(product = name, %price, balance = %self.balance, "insufficient balance");
            return Ok(MachineState::display_only(Screen::Price(price)));
        };

        let coin_return = if change.is_zero() {
            None
        } else {
            match self.vault.disburse(change) {
                Ok(coins) => Some(coins.iter().map(|coin| coin.token()).collect()),
                Err(VendingError::VaultShortfall {
                    denomination,
                    requested,
                    available,
                }) => {
                    warn!(
                        product = name,
                        %change,
                        %denomination,
                        requested,
                        available,
                        "cannot pay out change"
                    );
                    return Ok(MachineState::display_only(Screen::ExactChangeOnly));
                }
                Err(e) => return Err(e),
            }
        };

        self.catalog.decrement_stock(name)?;
        self.balance = Cents::ZERO;
        self.pending_return.clear();
        info!(product = name, %price, %change, "vended");

        Ok(MachineState {
            display: Screen::ThankYou,
            product_return: Some(name.to_string()),
            coin_return,
        })
    }
}
