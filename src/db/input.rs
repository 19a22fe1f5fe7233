//! Parsing of user supplied amounts and dates.
//!
//! Both the command line and the document deserializer go through these
//! functions, so a value that was accepted once will also load again.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone as _, Utc};
use rust_decimal::Decimal;

use super::error::ValidationError;

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    // "Tue Mar 05 2024"
    "%a %b %d %Y",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%A, %B %d, %Y",
];

pub fn parse_amount(input: &str) -> Result<Decimal, ValidationError> {
    let amount =
        Decimal::from_str_exact(input.trim()).map_err(|_| ValidationError::InvalidAmount {
            input: input.to_string(),
        })?;
    validate_amount(amount)
}

pub fn validate_amount(amount: Decimal) -> Result<Decimal, ValidationError> {
    if amount < Decimal::ZERO {
        return Err(ValidationError::NegativeAmount { amount });
    }
    Ok(amount)
}

/// Parses a date or timestamp. Values without an offset are taken as local
/// time and plain dates as local midnight.
pub fn parse_date(input: &str) -> Result<DateTime<Utc>, ValidationError> {
    let trimmed = input.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(date.with_timezone(&Utc));
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .and_then(local_to_utc)
        .ok_or_else(|| ValidationError::InvalidDate {
            input: input.to_string(),
        })
}

/// Local midnight of the current day.
pub fn start_of_today() -> DateTime<Utc> {
    let today = Local::now().date_naive();
    local_to_utc(today.and_time(NaiveTime::MIN)).unwrap_or_else(Utc::now)
}

// None if the local time doesn't exist, e.g. inside a DST gap
fn local_to_utc(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|date| date.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("100", Decimal::new(100, 0))]
    #[case("12.50", Decimal::new(1250, 2))]
    #[case(" 7 ", Decimal::new(7, 0))]
    #[case("0", Decimal::ZERO)]
    fn valid_amounts(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(Ok(expected), parse_amount(input));
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("NaN")]
    #[case("12.3.4")]
    #[case("$100")]
    fn invalid_amounts(#[case] input: &str) {
        assert_eq!(
            Err(ValidationError::InvalidAmount {
                input: input.to_string()
            }),
            parse_amount(input)
        );
    }

    #[test]
    fn negative_amount() {
        assert_eq!(
            Err(ValidationError::NegativeAmount {
                amount: Decimal::new(-5, 0)
            }),
            parse_amount("-5")
        );
    }

    #[rstest]
    #[case("2024-03-05")]
    #[case("Tue Mar 05 2024")]
    #[case("03/05/2024")]
    #[case("March 5, 2024")]
    #[case("Tuesday, March 5, 2024")]
    #[case("2024-03-05 00:00:00")]
    fn valid_local_dates(#[case] input: &str) {
        let expected = Local
            .with_ymd_and_hms(2024, 3, 5, 0, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(Ok(expected), parse_date(input));
    }

    #[rstest]
    #[case("2024-03-05T00:00:00Z")]
    #[case("2024-03-05T00:00:00.000Z")]
    #[case("2024-03-05T01:00:00+01:00")]
    fn offset_overrides_local_time(#[case] input: &str) {
        let expected = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        assert_eq!(Ok(expected), parse_date(input));
    }

    #[test]
    fn keeps_time_of_day() {
        let expected = Local
            .with_ymd_and_hms(2024, 3, 5, 10, 30, 15)
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(Ok(expected), parse_date("2024-03-05T10:30:15"));
    }

    #[test]
    fn today_starts_at_local_midnight() {
        let start = start_of_today().with_timezone(&Local);
        assert_eq!(Local::now().date_naive(), start.date_naive());
        assert_eq!(NaiveTime::MIN, start.time());
    }

    #[rstest]
    #[case("")]
    #[case("yesterday")]
    #[case("2024-02-30")]
    #[case("Mon Mar 05 2024")]
    fn invalid_dates(#[case] input: &str) {
        assert_eq!(
            Err(ValidationError::InvalidDate {
                input: input.to_string()
            }),
            parse_date(input)
        );
    }
}
