use std::path::{Path, PathBuf};

use clap::ValueEnum;
use env_logger::WriteStyle;
use log::LevelFilter;

use crate::args::Args;
use crate::db;

/// Everything the presentation layer needs, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tithe_path: PathBuf,
    pub log: LogConfig,
    pub table: TableConfig,
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        let tithe_path = args
            .tithe_path
            .as_deref()
            .map(expand_home)
            .unwrap_or_else(db::default_path);
        let level = if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        Self {
            tithe_path,
            log: LogConfig {
                level,
                display_date: false,
                color: args.color,
            },
            table: TableConfig { color: args.color },
        }
    }
}

/// Expands a leading `~`. Paths that aren't valid UTF-8 are kept as given.
fn expand_home(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(text) if text.starts_with('~') => {
            PathBuf::from(shellexpand::tilde(text).into_owned())
        }
        _ => path.to_path_buf(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub display_date: bool,
    pub color: ColorChoice,
}

impl LogConfig {
    /// Installs the global logger. `RUST_LOG` still overrides the level.
    pub fn init(&self) {
        let mut builder = env_logger::Builder::new();
        builder
            .filter_level(self.level)
            .parse_env("RUST_LOG")
            .format_target(false)
            .write_style(self.color.write_style());
        if !self.display_date {
            builder.format_timestamp(None);
        }
        if let Err(err) = builder.try_init() {
            eprintln!("Logger was already initialized: {err}");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    pub color: ColorChoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Color when writing to a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn write_style(self) -> WriteStyle {
        match self {
            ColorChoice::Auto => WriteStyle::Auto,
            ColorChoice::Always => WriteStyle::Always,
            ColorChoice::Never => WriteStyle::Never,
        }
    }
}
