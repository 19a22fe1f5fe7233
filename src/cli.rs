use anyhow::{Context as _, Result};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::args::{Args, Command};
use crate::config::{Config, TableConfig};
use crate::db::input::start_of_today;
use crate::db::{EventFilter, LedgerData, NewEvent, TitheStore, TITHE_DIVISOR};
use crate::terminal::{self, LineWriter, StdoutLineWriter};

pub async fn main(args: Args, config: Config) -> Result<()> {
    run(args, config, StdoutLineWriter).await
}

pub async fn run(args: Args, config: Config, writer: impl LineWriter) -> Result<()> {
    let cli = Cli::new(&config, writer);
    match args.command {
        Some(Command::Insert {
            description,
            brute_income,
            date,
            tithe,
        }) => {
            let event = NewEvent::parse(&description, &brute_income, date.as_deref(), tithe)
                .context("Invalid event")?;
            cli.main_insert(event).await
        }
        Some(Command::Currency { currency }) => cli.main_currency(currency).await,
        Some(Command::Pay) => cli.main_pay().await,
        Some(Command::Calculate) => cli.main_calculate().await,
        None => match (&args.amount, &args.description) {
            (Some(amount), Some(description)) => {
                let mut event =
                    NewEvent::parse(description, amount, args.date.as_deref(), args.tithe)
                        .context("Invalid event")?;
                // Quick inserts without a date are booked on the current day
                event.date.get_or_insert_with(start_of_today);
                cli.main_insert(event).await
            }
            _ => cli.main_list(EventFilter { paid: args.all }).await,
        },
    }
}

pub struct Cli<W: LineWriter> {
    store: TitheStore,
    table: TableConfig,
    writer: W,
}

impl<W: LineWriter> Cli<W> {
    pub fn new(config: &Config, writer: W) -> Self {
        Self {
            store: TitheStore::open(&config.tithe_path),
            table: config.table,
            writer,
        }
    }

    pub async fn main_insert(&self, event: NewEvent) -> Result<()> {
        self.store
            .insert(event)
            .await
            .context("Failed to insert event")?;
        log::info!("Inserted successfully.");
        Ok(())
    }

    pub async fn main_currency(&self, currency: String) -> Result<()> {
        self.store
            .set_currency(currency)
            .await
            .context("Failed to set currency")?;
        log::info!("Currency set successfully.");
        Ok(())
    }

    pub async fn main_pay(&self) -> Result<()> {
        self.store
            .pay()
            .await
            .context("Failed to mark events as paid")?;
        log::info!("Everything was marked as paid.");
        Ok(())
    }

    pub async fn main_calculate(&self) -> Result<()> {
        let data = self
            .store
            .get_data(EventFilter::unpaid())
            .await
            .context("Failed to read events")?;
        log::info!("{}", calculate_message(&data));
        Ok(())
    }

    pub async fn main_list(&self, filter: EventFilter) -> Result<()> {
        let data = self
            .store
            .get_data(filter)
            .await
            .context("Failed to read events")?
            .sorted_by_date();
        if data.events.is_empty() {
            log::info!("Everything is paid.");
            return Ok(());
        }
        let table = terminal::events_table(&data, &self.table);
        self.writer.write_lines(&table.to_string());
        Ok(())
    }
}

/// The tenth part of `total`, rounded to cents.
pub fn tithe_due(total: Decimal) -> Decimal {
    (total / TITHE_DIVISOR).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn calculate_message(data: &LedgerData) -> String {
    format!(
        "Tithe is {} {}",
        terminal::format_amount(tithe_due(data.total)),
        data.currency
    )
}
