use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ColorChoice;

const EXAMPLES: &str = "Examples:
  tithe -p 100 -d 'Some work for someone'
  tithe -a                  # displays all the payments
  tithe -p 500 -t -d 'GitHub Bounty reward.'
  tithe currency '$'        # sets the USD currency";

/// Keep track of the tithe you owe on your income.
///
/// Without a subcommand, lists the unpaid events.
#[derive(Parser, Debug)]
#[clap(version, after_help = EXAMPLES)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Option<Command>,

    /// Use a different tithe json file path
    #[clap(short = 'P', long = "tithe-path", global = true, env = "TITHE_PATH")]
    pub tithe_path: Option<PathBuf>,

    /// When to use terminal colors
    #[clap(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Print debug output
    #[clap(short, long, global = true)]
    pub verbose: bool,

    /// Display all events, including paid ones
    #[clap(short, long)]
    pub all: bool,

    /// Insert an event with this brute income instead of listing
    #[clap(short = 'p', value_name = "AMOUNT", requires = "description")]
    pub amount: Option<String>,

    /// Description of the event inserted with -p
    #[clap(short = 'd', requires = "amount")]
    pub description: Option<String>,

    /// Compute the tenth part of the amount given with -p
    #[clap(short = 't', requires = "amount")]
    pub tithe: bool,

    /// Date of the event inserted with -p [default: now]
    #[clap(short = 'D', long, requires = "amount")]
    pub date: Option<String>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Insert a new event
    Insert {
        description: String,

        #[clap(value_name = "BRUTE-INCOME")]
        brute_income: String,

        /// Date of the event [default: now]
        date: Option<String>,

        /// Compute the tenth part of the brute value
        #[clap(short, long)]
        tithe: bool,
    },

    /// Set the currency
    Currency { currency: String },

    /// Mark everything as paid
    Pay,

    /// Calculate 10% of the unpaid total
    Calculate,
}

pub fn parse() -> Args {
    Args::parse()
}
