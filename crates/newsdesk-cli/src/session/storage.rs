//! Location of the persisted session tokens.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use newsdesk_core::FileTokenStore;

/// Resolve the session file path, preferring an explicit override.
pub fn session_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let dirs =
        ProjectDirs::from("", "", "newsdesk").context("Could not determine data directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("session.json"))
}

/// Open the token store backing the CLI session.
pub fn open_store(explicit: Option<&Path>) -> Result<FileTokenStore> {
    Ok(FileTokenStore::new(session_path(explicit)?))
}
