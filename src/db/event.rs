use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::input::{parse_amount, parse_date, validate_amount};

/// Fraction of a tithe source that is owed.
pub const TITHE_DIVISOR: Decimal = Decimal::TEN;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub desc: String,
    #[serde(with = "date_format")]
    pub date: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::float")]
    pub val: Decimal,
    #[serde(default)]
    pub paid: bool,
}

/// An event as supplied by the user, before the tithe is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub desc: String,
    /// Defaults to the time of insertion.
    pub date: Option<DateTime<Utc>>,
    pub paid: bool,
    /// Brute income, or the amount itself if `tithe` is not set.
    pub val: Decimal,
    pub tithe: bool,
}

impl NewEvent {
    pub fn new(desc: impl Into<String>, val: Decimal, tithe: bool) -> Self {
        Self {
            desc: desc.into(),
            date: None,
            paid: false,
            val,
            tithe,
        }
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn parse(
        description: &str,
        brute_income: &str,
        date: Option<&str>,
        tithe: bool,
    ) -> Result<Self, ValidationError> {
        let val = parse_amount(brute_income)?;
        let date = date.map(parse_date).transpose()?;
        let event = Self {
            date,
            ..Self::new(description, val, tithe)
        };
        event.validate()?;
        Ok(event)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.desc.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        validate_amount(self.val)?;
        let stored = self.stored_val();
        if !survives_storage(stored) {
            return Err(ValidationError::ImpreciseAmount { amount: stored });
        }
        Ok(())
    }

    /// The value written to the tithe file.
    pub fn stored_val(&self) -> Decimal {
        if self.tithe {
            self.val / TITHE_DIVISOR
        } else {
            self.val
        }
    }

    /// Turns this into the stored event. `now` fills in a missing date.
    pub fn into_event(self, now: DateTime<Utc>) -> Event {
        let val = self.stored_val();
        Event {
            desc: self.desc,
            date: self.date.unwrap_or(now),
            val,
            paid: self.paid,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct StoredAmount(#[serde(with = "rust_decimal::serde::float")] Decimal);

// `val` is a JSON number, so it must come back from its f64 form unchanged
fn survives_storage(amount: Decimal) -> bool {
    serde_json::to_string(&StoredAmount(amount))
        .ok()
        .and_then(|encoded| serde_json::from_str::<StoredAmount>(&encoded).ok())
        .is_some_and(|decoded| decoded.0 == amount)
}

mod date_format {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::db::input::parse_date;

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    // Older files may hold any string the date parser understands
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(de::Error::custom)
    }
}
