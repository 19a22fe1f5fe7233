use std::path::{Path, PathBuf};

use chrono::Utc;

use super::document::{EventFilter, LedgerData, LedgerDocument};
use super::error::Result;
use super::event::NewEvent;
use super::file;

pub const DEFAULT_TITHE_PATH: &str = "~/.tithe.json";

/// Access to a tithe file.
///
/// Every operation loads the whole document, creating it with defaults if the
/// file doesn't exist yet, and mutations write the whole document back.
/// Nothing is cached between operations.
#[derive(Debug, Clone)]
pub struct TitheStore {
    path: PathBuf,
}

impl TitheStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn insert(&self, event: NewEvent) -> Result<()> {
        event.validate()?;
        let mut document = self.load().await?;
        document.events.push(event.into_event(Utc::now()));
        self.save(&document).await
    }

    pub async fn set_currency(&self, symbol: impl Into<String>) -> Result<()> {
        let mut document = self.load().await?;
        document.currency = symbol.into();
        self.save(&document).await
    }

    pub async fn pay(&self) -> Result<()> {
        let mut document = self.load().await?;
        document.pay_all();
        self.save(&document).await
    }

    pub async fn get_data(&self, filter: EventFilter) -> Result<LedgerData> {
        Ok(self.load().await?.query(filter))
    }

    async fn load(&self) -> Result<LedgerDocument> {
        file::load_or_create(&self.path).await
    }

    async fn save(&self, document: &LedgerDocument) -> Result<()> {
        file::save(document, &self.path).await
    }
}

pub fn default_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(DEFAULT_TITHE_PATH).into_owned())
}
