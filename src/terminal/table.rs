use chrono::{DateTime, Local, Utc};
use console::{style, StyledObject};
use prettytable::{format, Cell, Row, Table};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::{ColorChoice, TableConfig};
use crate::db::LedgerData;

/// Renders the events in the order given, followed by a total row.
pub fn events_table(data: &LedgerData, config: &TableConfig) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(Row::new(vec![
        Cell::new("#"),
        Cell::new("Date"),
        Cell::new("Description"),
        Cell::new("Paid"),
        Cell::new(&format!("Value ({})", data.currency)),
    ]));

    for (index, event) in data.events.iter().enumerate() {
        table.add_row(Row::new(vec![
            Cell::new(&(index + 1).to_string()).style_spec("r"),
            Cell::new(&format_date(&event.date)),
            Cell::new(&event.desc),
            Cell::new(&style_paid(event.paid, config.color)),
            Cell::new(&format_amount(event.val)).style_spec("r"),
        ]));
    }

    let total = format!("{} {}", format_amount(data.total), data.currency);
    table.add_row(Row::new(vec![
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(&paint(style("TOTAL:").bold(), config.color).to_string()),
        Cell::new(&paint(style(total).bold(), config.color).to_string()).style_spec("r"),
    ]));

    table
}

/// The local calendar day of `date`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%A, %B %-d, %Y").to_string()
}

/// Two decimals, rounding half away from zero.
pub fn format_amount(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

fn style_paid(paid: bool, color: ColorChoice) -> String {
    if paid {
        format!("{} Yes", paint(style("●").green(), color))
    } else {
        format!("{} No", paint(style("●").red(), color))
    }
}

fn paint<D>(styled: StyledObject<D>, color: ColorChoice) -> StyledObject<D> {
    match color {
        ColorChoice::Auto => styled,
        ColorChoice::Always => styled.force_styling(true),
        ColorChoice::Never => styled.force_styling(false),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;
    use rstest::rstest;

    use crate::db::Event;

    use super::*;

    const NO_COLOR: TableConfig = TableConfig {
        color: ColorChoice::Never,
    };

    fn local(month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(2024, month, day, hour, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn some_data() -> LedgerData {
        LedgerData {
            currency: "€".to_string(),
            events: vec![
                Event {
                    desc: "Consulting".to_string(),
                    date: local(3, 5, 0),
                    val: Decimal::new(10, 0),
                    paid: true,
                },
                Event {
                    desc: "Bounty".to_string(),
                    date: local(3, 9, 0),
                    val: Decimal::new(2005, 2),
                    paid: false,
                },
            ],
            total: Decimal::new(3005, 2),
        }
    }

    #[test]
    fn renders_header_rows_and_total() {
        let rendered = events_table(&some_data(), &NO_COLOR).to_string();

        assert!(rendered.contains("Value (€)"), "{rendered}");
        assert!(rendered.contains("Tuesday, March 5, 2024"), "{rendered}");
        assert!(rendered.contains("Saturday, March 9, 2024"), "{rendered}");
        assert!(rendered.contains("● Yes"), "{rendered}");
        assert!(rendered.contains("● No"), "{rendered}");
        assert!(rendered.contains("10.00"), "{rendered}");
        assert!(rendered.contains("20.05"), "{rendered}");
        assert!(rendered.contains("TOTAL:"), "{rendered}");
        assert!(rendered.contains("30.05 €"), "{rendered}");
        assert!(rendered.contains('┌'), "{rendered}");
    }

    #[test]
    fn keeps_given_order() {
        let rendered = events_table(&some_data(), &NO_COLOR).to_string();
        let consulting = rendered.find("Consulting").unwrap();
        let bounty = rendered.find("Bounty").unwrap();
        let total = rendered.find("TOTAL:").unwrap();
        assert!(consulting < bounty);
        assert!(bounty < total);
    }

    #[test]
    fn never_color_has_no_escape_codes() {
        let rendered = events_table(&some_data(), &NO_COLOR).to_string();
        assert!(!rendered.contains('\u{1b}'), "{rendered}");
    }

    #[test]
    fn always_color_styles_total() {
        let config = TableConfig {
            color: ColorChoice::Always,
        };
        let rendered = events_table(&some_data(), &config).to_string();
        assert!(rendered.contains('\u{1b}'), "{rendered}");
    }

    #[rstest]
    #[case(Decimal::new(10, 0), "10.00")]
    #[case(Decimal::new(125, 1), "12.50")]
    #[case(Decimal::new(12345, 3), "12.35")]
    #[case(Decimal::new(12344, 3), "12.34")]
    #[case(Decimal::ZERO, "0.00")]
    fn amounts(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(expected, format_amount(amount));
    }

    #[test]
    fn dates() {
        assert_eq!("Monday, December 23, 2024", format_date(&local(12, 23, 18)));
        assert_eq!("Friday, March 1, 2024", format_date(&local(3, 1, 0)));
    }
}
