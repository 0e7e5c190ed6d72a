use crate::domain::coin::{
    DIME, Denomination, DenominationId, HALF_DOLLAR, NICKEL, QUARTER, SACAGAWEA_DOLLAR,
};
use crate::domain::money::Cents;
use crate::error::{Result, VendingError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Minimum coins every slot must hold before the machine will promise change.
pub const CHANGE_THRESHOLD: u32 = 5;

/// Denominations the vault keeps a slot for.
pub const VAULT_DENOMINATIONS: [Denomination; 5] =
    [NICKEL, DIME, QUARTER, HALF_DOLLAR, SACAGAWEA_DOLLAR];

/// Denominations paid out as change, largest first.
pub const CHANGE_DENOMINATIONS: [Denomination; 3] = [QUARTER, DIME, NICKEL];

/// Starting count for one vault slot.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct ChangeSlot {
    pub id: DenominationId,
    pub count: u32,
}

impl ChangeSlot {
    pub fn new(id: DenominationId, count: u32) -> Self {
        Self { id, count }
    }
}

/// The machine's reserve of coins for paying out change.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeVault {
    slots: BTreeMap<DenominationId, u32>,
}

impl Default for ChangeVault {
    fn default() -> Self {
        Self {
            slots: VAULT_DENOMINATIONS.iter().map(|coin| (coin.id, 0)).collect(),
        }
    }
}

impl ChangeVault {
    /// Creates an empty vault.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a vault stocked from `loadout`. Slots not listed start empty.
    pub fn load(loadout: &[ChangeSlot]) -> Self {
        let mut vault = Self::new();
        for slot in loadout {
            match vault.slots.get_mut(&slot.id) {
                Some(count) => *count = slot.count,
                None => warn!(denomination = %slot.id, "ignoring change slot the vault does not track"),
            }
        }
        vault
    }

    pub fn count(&self, id: DenominationId) -> u32 {
        self.slots.get(&id).copied().unwrap_or(0)
    }

    pub fn slots(&self) -> Vec<ChangeSlot> {
        self.slots
            .iter()
            .map(|(id, count)| ChangeSlot::new(*id, *count))
            .collect()
    }

    /// Whether the machine can safely accept overpayment.
    ///
    /// An entirely empty vault cannot. Otherwise every slot must be at or above
    /// [`CHANGE_THRESHOLD`]; one low slot is enough to refuse.
    pub fn can_make_change(&self) -> bool {
        if self.slots.values().all(|count| *count == 0) {
            return false;
        }
        self.slots.values().all(|count| *count >= CHANGE_THRESHOLD)
    }

    /// Pays out `amount` greedily using quarters, dimes and nickels.
    ///
    /// The full payout is planned before any slot is touched, so on error the
    /// vault is unchanged.
    pub fn disburse(&mut self, amount: Cents) -> Result<Vec<Denomination>> {
        let plan = self.plan(amount)?;

        let mut coins = Vec::new();
        for (coin, units) in plan {
            if let Some(count) = self.slots.get_mut(&coin.id) {
                *count -= units;
            }
            coins.extend(std::iter::repeat_n(coin, units as usize));
        }
        Ok(coins)
    }

    fn plan(&self, amount: Cents) -> Result<Vec<(Denomination, u32)>> {
        let mut remaining = amount.value();
        let mut plan = Vec::with_capacity(CHANGE_DENOMINATIONS.len());

        for coin in CHANGE_DENOMINATIONS {
            let units = u32::try_from(remaining / coin.value.value()).unwrap_or(u32::MAX);
            if units == 0 {
                continue;
            }
            let available = self.count(coin.id);
            if units > available {
                return Err(VendingError::VaultShortfall {
                    denomination: coin.id,
                    requested: units,
                    available,
                });
            }
            remaining -= u64::from(units) * coin.value.value();
            plan.push((coin, units));
        }

        if remaining != 0 {
            return Err(VendingError::IndivisibleChange {
                remaining: Cents::new(remaining),
            });
        }
        Ok(plan)
    }
}
