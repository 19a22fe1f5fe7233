mod document;
mod error;
mod event;
mod file;
pub mod input;
mod store;

pub use document::{EventFilter, LedgerData, LedgerDocument, DEFAULT_CURRENCY};
pub use error::{LedgerError, Result, ValidationError};
pub use event::{Event, NewEvent, TITHE_DIVISOR};
pub use file::{load, load_or_create, save};
pub use store::{default_path, TitheStore, DEFAULT_TITHE_PATH};
