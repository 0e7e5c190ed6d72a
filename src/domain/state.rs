use crate::domain::coin::Token;
use crate::domain::money::Cents;
use serde::{Serialize, Serializer};
use std::fmt;

/// What the machine's display reads.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Screen {
    InsertCoin,
    Balance(Cents),
    ExactChangeOnly,
    Price(Cents),
    SoldOut,
    ThankYou,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::InsertCoin => f.write_str("INSERT COIN"),
            Screen::Balance(balance) => write!(f, "{}", balance),
            Screen::ExactChangeOnly => f.write_str("EXACT CHANGE ONLY"),
            Screen::Price(price) => write!(f, "PRICE {}", price),
            Screen::SoldOut => f.write_str("SOLD OUT"),
            Screen::ThankYou => f.write_str("THANK YOU"),
        }
    }
}

impl Serialize for Screen {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Everything a customer can observe after one interaction: the display, the
/// product tray and the coin return tray.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct MachineState {
    pub display: Screen,
    pub product_return: Option<String>,
    pub coin_return: Option<Vec<Token>>,
}

impl MachineState {
    pub fn display_only(display: Screen) -> Self {
        Self {
            display,
            product_return: None,
            coin_return: None,
        }
    }
}
