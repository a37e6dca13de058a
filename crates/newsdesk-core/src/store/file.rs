//! File-backed token store.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::Result;
use crate::error::StorageError;
use crate::tokens::{AccessToken, CredentialPair, RefreshToken};

use super::TokenStore;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// On-disk layout, keyed by the fixed names `access` and `refresh`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredTokens {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    access: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refresh: Option<String>,
}

/// Token store persisted as a small JSON file.
///
/// The file is re-read on every access, so a login from another process is
/// picked up by the next call. A missing or unreadable file means no
/// credentials. On Unix the file is written with mode `0600`.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StoredTokens {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return StoredTokens::default(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read token file");
                return StoredTokens::default();
            }
        };

        serde_json::from_str(&json).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "Ignoring malformed token file");
            StoredTokens::default()
        })
    }

    fn save(&self, stored: &StoredTokens) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;

        let json = serde_json::to_string_pretty(stored).map_err(|e| StorageError::Encode {
            message: e.to_string(),
        })?;

        // Readers only ever see the old file or the complete new one.
        let mut staged = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        staged
            .write_all(json.as_bytes())
            .map_err(|e| self.io_error(e))?;

        #[cfg(unix)]
        staged
            .as_file()
            .set_permissions(fs::Permissions::from_mode(0o600))
            .map_err(|e| self.io_error(e))?;

        staged
            .persist(&self.path)
            .map_err(|e| self.io_error(e.error))?;

        debug!(path = %self.path.display(), "Token file written");
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl TokenStore for FileTokenStore {
    fn access_token(&self) -> Option<AccessToken> {
        self.load().access.map(AccessToken::new)
    }

    fn refresh_token(&self) -> Option<RefreshToken> {
        self.load().refresh.map(RefreshToken::new)
    }

    fn store_pair(&self, pair: CredentialPair) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        self.save(&StoredTokens {
            access: Some(pair.access.as_str().to_string()),
            refresh: Some(pair.refresh.as_str().to_string()),
        })
    }

    fn store_access(&self, access: AccessToken) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut stored = self.load();
        stored.access = Some(access.as_str().to_string());
        self.save(&stored)
    }

    fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e).into()),
        }
    }
}
