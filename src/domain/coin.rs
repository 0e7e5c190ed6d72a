use crate::domain::money::Cents;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum DenominationId {
    Penny,
    Nickel,
    Dime,
    Quarter,
    HalfDollar,
    SacagaweaDollar,
}

impl DenominationId {
    pub fn denomination(&self) -> &'static Denomination {
        match self {
            DenominationId::Penny => &PENNY,
            DenominationId::Nickel => &NICKEL,
            DenominationId::Dime => &DIME,
            DenominationId::Quarter => &QUARTER,
            DenominationId::HalfDollar => &HALF_DOLLAR,
            DenominationId::SacagaweaDollar => &SACAGAWEA_DOLLAR,
        }
    }
}

impl fmt::Display for DenominationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.denomination().name)
    }
}

/// A coin type the machine knows about.
///
/// Two coins are the same denomination when their physical weight and size
/// match; the face value is never read off the coin itself.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Denomination {
    pub id: DenominationId,
    pub name: &'static str,
    /// Grams.
    pub weight: Decimal,
    /// Diameter in millimetres.
    pub size: Decimal,
    pub value: Cents,
}

impl Denomination {
    /// The physical token a genuine coin of this denomination presents.
    pub fn token(&self) -> Token {
        Token::new(self.weight, self.size)
    }
}

pub const PENNY: Denomination = Denomination {
    id: DenominationId::Penny,
    name: "penny",
    weight: dec!(2.5),
    size: dec!(19.05),
    value: Cents::new(1),
};

pub const NICKEL: Denomination = Denomination {
    id: DenominationId::Nickel,
    name: "nickel",
    weight: dec!(5),
    size: dec!(21.21),
    value: Cents::new(5),
};

pub const DIME: Denomination = Denomination {
    id: DenominationId::Dime,
    name: "dime",
    weight: dec!(2.268),
    size: dec!(17.91),
    value: Cents::new(10),
};

pub const QUARTER: Denomination = Denomination {
    id: DenominationId::Quarter,
    name: "quarter",
    weight: dec!(5.67),
    size: dec!(24.26),
    value: Cents::new(25),
};

pub const HALF_DOLLAR: Denomination = Denomination {
    id: DenominationId::HalfDollar,
    name: "half dollar",
    weight: dec!(11.34),
    size: dec!(30.61),
    value: Cents::new(50),
};

pub const SACAGAWEA_DOLLAR: Denomination = Denomination {
    id: DenominationId::SacagaweaDollar,
    name: "sacagawea dollar",
    weight: dec!(8.1),
    size: dec!(24.69),
    value: Cents::new(100),
};

/// Every coin the machine can physically tell apart, smallest first.
pub const ALL_DENOMINATIONS: [Denomination; 6] =
    [PENNY, NICKEL, DIME, QUARTER, HALF_DOLLAR, SACAGAWEA_DOLLAR];

/// Coins accepted as legal tender. Pennies are refused.
pub const RECOGNIZED_DENOMINATIONS: [Denomination; 5] =
    [NICKEL, DIME, QUARTER, HALF_DOLLAR, SACAGAWEA_DOLLAR];

/// Anything dropped into the coin slot, described only by what the machine can measure.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct Token {
    pub weight: Decimal,
    pub size: Decimal,
}

impl Token {
    pub fn new(weight: Decimal, size: Decimal) -> Self {
        Self { weight, size }
    }
}

impl From<&Denomination> for Token {
    fn from(denomination: &Denomination) -> Self {
        denomination.token()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}g/{}mm", self.weight, self.size)
    }
}
