use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Input rejected at the insert boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid amount: {input:?}")]
    InvalidAmount { input: String },
    #[error("amount must not be negative, got {amount}")]
    NegativeAmount { amount: Decimal },
    #[error("amount {amount} has more digits than the tithe file can store")]
    ImpreciseAmount { amount: Decimal },
    #[error("invalid date: {input:?}")]
    InvalidDate { input: String },
    #[error("description must not be empty")]
    EmptyDescription,
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("tithe file {path} is not a valid ledger document: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode ledger document: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("path has no usable file name: {path}")]
    InvalidPath { path: PathBuf },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl LedgerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
