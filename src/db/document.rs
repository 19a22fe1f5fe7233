use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::event::Event;

pub const DEFAULT_CURRENCY: &str = "$";

/// The whole content of a tithe file.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct LedgerDocument {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub events: Vec<Event>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl LedgerDocument {
    pub fn new() -> Self {
        Self {
            currency: default_currency(),
            events: vec![],
        }
    }

    pub fn pay_all(&mut self) {
        for event in &mut self.events {
            event.paid = true;
        }
    }

    pub fn query(&self, filter: EventFilter) -> LedgerData {
        let events: Vec<Event> = self
            .events
            .iter()
            .filter(|event| filter.paid || !event.paid)
            .cloned()
            .collect();
        let total = events.iter().map(|event| event.val).sum::<Decimal>();
        LedgerData {
            currency: self.currency.clone(),
            events,
            total,
        }
    }
}

impl Default for LedgerDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Which events a read returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Also return events that were already paid.
    pub paid: bool,
}

impl EventFilter {
    pub fn unpaid() -> Self {
        Self { paid: false }
    }

    pub fn all() -> Self {
        Self { paid: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerData {
    pub currency: String,
    /// In insertion order.
    pub events: Vec<Event>,
    pub total: Decimal,
}

impl LedgerData {
    pub fn sorted_by_date(mut self) -> Self {
        self.events.sort_by_key(|event| event.date);
        self
    }
}
