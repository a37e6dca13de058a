//! Credential storage.
//!
//! The [`TokenStore`] is the only mutable state shared between calls. It is
//! handed to the client at construction instead of living in a global, so
//! tests can inspect it and several sessions can coexist in one process.
//!
//! Writers are limited to the login/logout flows and the renewal path.

mod file;

use std::fmt;
use std::sync::RwLock;

use crate::Result;
use crate::tokens::{AccessToken, CredentialPair, RefreshToken};

pub use file::FileTokenStore;

/// Holder of the access/refresh pair.
pub trait TokenStore: Send + Sync + fmt::Debug {
    /// Returns the current access token, if any.
    fn access_token(&self) -> Option<AccessToken>;

    /// Returns the current refresh token, if any.
    fn refresh_token(&self) -> Option<RefreshToken>;

    /// Replace both halves of the pair.
    fn store_pair(&self, pair: CredentialPair) -> Result<()>;

    /// Replace the access token in place, keeping the refresh token.
    fn store_access(&self, access: AccessToken) -> Result<()>;

    /// Remove both halves of the pair.
    fn clear(&self) -> Result<()>;
}

#[derive(Default)]
struct Slots {
    access: Option<AccessToken>,
    refresh: Option<RefreshToken>,
}

/// Process-local token store.
#[derive(Default)]
pub struct MemoryTokenStore {
    slots: RwLock<Slots>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding a pair.
    pub fn with_pair(pair: CredentialPair) -> Self {
        Self {
            slots: RwLock::new(Slots {
                access: Some(pair.access),
                refresh: Some(pair.refresh),
            }),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<AccessToken> {
        let slots = self.slots.read().unwrap_or_else(|e| e.into_inner());
        slots.access.clone()
    }

    fn refresh_token(&self) -> Option<RefreshToken> {
        let slots = self.slots.read().unwrap_or_else(|e| e.into_inner());
        slots.refresh.clone()
    }

    fn store_pair(&self, pair: CredentialPair) -> Result<()> {
        let mut slots = self.slots.write().unwrap_or_else(|e| e.into_inner());
        slots.access = Some(pair.access);
        slots.refresh = Some(pair.refresh);
        Ok(())
    }

    fn store_access(&self, access: AccessToken) -> Result<()> {
        let mut slots = self.slots.write().unwrap_or_else(|e| e.into_inner());
        slots.access = Some(access);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut slots = self.slots.write().unwrap_or_else(|e| e.into_inner());
        slots.access = None;
        slots.refresh = None;
        Ok(())
    }
}

impl fmt::Debug for MemoryTokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = self.slots.read().unwrap_or_else(|e| e.into_inner());
        f.debug_struct("MemoryTokenStore")
            .field("has_access", &slots.access.is_some())
            .field("has_refresh", &slots.refresh.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_has_no_tokens() {
        let store = MemoryTokenStore::new();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }

    #[test]
    fn store_access_keeps_refresh() {
        let store = MemoryTokenStore::with_pair(CredentialPair::new("a1", "r1"));
        store.store_access(AccessToken::new("a2")).unwrap();

        assert_eq!(store.access_token(), Some(AccessToken::new("a2")));
        assert_eq!(store.refresh_token(), Some(RefreshToken::new("r1")));
    }

    #[test]
    fn clear_removes_both_halves() {
        let store = MemoryTokenStore::with_pair(CredentialPair::new("a1", "r1"));
        store.clear().unwrap();

        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }

    #[test]
    fn debug_does_not_leak_tokens() {
        let store = MemoryTokenStore::with_pair(CredentialPair::new("secret-a", "secret-r"));
        let debug = format!("{:?}", store);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("has_access: true"));
    }
}
