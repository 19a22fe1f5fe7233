use std::path::{Path, PathBuf};

use super::document::LedgerDocument;
use super::error::{LedgerError, Result};

/// Returns Ok(None) if the tithe file doesn't exist yet
pub async fn load(path: &Path) -> Result<Option<LedgerDocument>> {
    log::debug!("Loading tithe file {}...", path.display());
    if !tokio::fs::try_exists(path)
        .await
        .map_err(|err| LedgerError::io(path, err))?
    {
        return Ok(None);
    }

    let content = tokio::fs::read(path)
        .await
        .map_err(|err| LedgerError::io(path, err))?;
    let document = serde_json::from_slice(&content).map_err(|source| LedgerError::Corrupt {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Loading tithe file...done");

    Ok(Some(document))
}

pub async fn load_or_create(path: &Path) -> Result<LedgerDocument> {
    match load(path).await? {
        Some(document) => Ok(document),
        None => {
            log::debug!("No tithe file at {}, creating one", path.display());
            let document = LedgerDocument::new();
            save(&document, path).await?;
            Ok(document)
        }
    }
}

pub async fn save(document: &LedgerDocument, path: &Path) -> Result<()> {
    log::debug!("Saving tithe file {}...", path.display());

    let content = serde_json::to_vec_pretty(document).map_err(LedgerError::Serialize)?;

    // Write to a sibling file first so a failed write never truncates the real one
    let tmppath = temp_path(path)?;
    tokio::fs::write(&tmppath, content)
        .await
        .map_err(|err| LedgerError::io(&tmppath, err))?;
    tokio::fs::rename(&tmppath, path)
        .await
        .map_err(|err| LedgerError::io(path, err))?;

    log::debug!("Saving tithe file...done");

    Ok(())
}

fn temp_path(path: &Path) -> Result<PathBuf> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LedgerError::InvalidPath {
            path: path.to_path_buf(),
        })?;
    Ok(path.with_file_name(format!("{}.temp", filename)))
}
