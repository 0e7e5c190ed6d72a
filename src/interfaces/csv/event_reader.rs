use crate::domain::coin::{DenominationId, Token};
use crate::error::{Result, VendingError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::Read;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Insert,
    Select,
    Return,
    Display,
}

/// One raw row of an event script: `action,coin,weight,size,product`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct EventRecord {
    pub action: Action,
    #[serde(default)]
    pub coin: Option<DenominationId>,
    #[serde(default)]
    pub weight: Option<Decimal>,
    #[serde(default)]
    pub size: Option<Decimal>,
    #[serde(default)]
    pub product: Option<String>,
}

/// A customer interaction, checked for the fields its action needs.
#[derive(Debug, PartialEq, Clone)]
pub enum Event {
    Insert(Token),
    Select(String),
    Return,
    Display,
}

impl Event {
    pub fn action(&self) -> Action {
        match self {
            Event::Insert(_) => Action::Insert,
            Event::Select(_) => Action::Select,
            Event::Return => Action::Return,
            Event::Display => Action::Display,
        }
    }
}

impl TryFrom<EventRecord> for Event {
    type Error = VendingError;

    fn try_from(record: EventRecord) -> Result<Self> {
        match record.action {
            Action::Insert => match (record.coin, record.weight, record.size) {
                (Some(id), None, None) => Ok(Event::Insert(id.denomination().token())),
                (None, Some(weight), Some(size)) => Ok(Event::Insert(Token::new(weight, size))),
                _ => Err(VendingError::InvalidEvent(
                    "insert needs either a coin or both weight and size".to_string(),
                )),
            },
            Action::Select => record
                .product
                .filter(|name| !name.is_empty())
                .map(Event::Select)
                .ok_or_else(|| VendingError::InvalidEvent("select needs a product".to_string())),
            Action::Return => Ok(Event::Return),
            Action::Display => Ok(Event::Display),
        }
    }
}

/// Reads customer events from a CSV source.
///
/// Rows are trimmed and may omit trailing empty columns.
pub struct EventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EventReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes and checks each row.
    pub fn events(self) -> impl Iterator<Item = Result<Event>> {
        self.reader
            .into_deserialize::<EventRecord>()
            .map(|result| result.map_err(VendingError::from).and_then(Event::try_from))
    }
}
