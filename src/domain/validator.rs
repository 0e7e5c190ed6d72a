use crate::domain::coin::{Denomination, RECOGNIZED_DENOMINATIONS, Token};
use tracing::debug;

/// Matches inserted tokens against the set of coins the machine accepts.
#[derive(Debug, Clone)]
pub struct CoinValidator {
    recognized: Vec<Denomination>,
}

impl Default for CoinValidator {
    fn default() -> Self {
        Self::new(RECOGNIZED_DENOMINATIONS.to_vec())
    }
}

impl CoinValidator {
    pub fn new(recognized: Vec<Denomination>) -> Self {
        Self { recognized }
    }

    pub fn recognized(&self) -> &[Denomination] {
        &self.recognized
    }

    /// Returns the denomination whose weight *and* size both match the token exactly.
    pub fn validate(&self, token: &Token) -> Option<&Denomination> {
        let found = self
            .recognized
            .iter()
            .find(|coin| coin.weight == token.weight && coin.size == token.size);

        match found {
            Some(coin) => debug!(coin = coin.name, "token recognized"),
            None => debug!(%token, "token rejected"),
        }
        found
    }
}
