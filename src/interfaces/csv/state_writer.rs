use crate::domain::coin::{ALL_DENOMINATIONS, Token};
use crate::domain::state::{MachineState, Screen};
use crate::error::Result;
use crate::interfaces::csv::event_reader::Action;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct StateRecord<'a> {
    step: usize,
    action: Action,
    display: Screen,
    product: Option<&'a str>,
    coins: String,
}

/// Writes one CSV row per observed machine state.
pub struct StateWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> StateWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_state(&mut self, step: usize, action: Action, state: &MachineState) -> Result<()> {
        let coins = state
            .coin_return
            .as_deref()
            .map(|tokens| tokens.iter().map(coin_label).collect::<Vec<_>>().join(";"))
            .unwrap_or_default();

        self.writer.serialize(StateRecord {
            step,
            action,
            display: state.display,
            product: state.product_return.as_deref(),
            coins,
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Names a returned token by the coin it physically is, if any.
fn coin_label(token: &Token) -> String {
    ALL_DENOMINATIONS
        .iter()
        .find(|coin| coin.token() == *token)
        .map(|coin| coin.name.to_string())
        .unwrap_or_else(|| token.to_string())
}
