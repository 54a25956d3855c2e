//! Key-value persistence behind the session.
//!
//! The session stores small string-serialized JSON values: the favourite
//! id sets, the auth token and the profile. The [`Vault`] trait keeps the
//! backing store abstract: a mobile shell would put a secure store
//! behind it, tests and the CLI use [`MemoryVault`].

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

/// Vault keys the session uses. Key names are part of the persisted
/// contract; changing them orphans existing installs.
pub mod keys {
    /// Auth token and role, as a JSON object.
    pub const AUTH: &str = "auth";
    /// Profile fields, as a JSON object.
    pub const PROFILE: &str = "profile";
    /// Favourite route ids, as a JSON string array.
    pub const FAVORITE_ROUTES: &str = "favoriteRoutes";
    /// Favourite attraction ids, as a JSON string array.
    pub const FAVORITE_ATTRACTIONS: &str = "favoriteAttractions";
}

/// Errors from a vault backend.
#[derive(Debug, Error)]
pub enum VaultError {
    /// The backend failed to read or write.
    #[error("vault backend failed: {0}")]
    Backend(String),
}

/// String key-value persistence.
///
/// Values are opaque to the vault; the session serializes them as JSON.
/// Implementations must be cheap to call (writes happen on favourite
/// toggles) and thread-safe, as writes run on detached tasks.
pub trait Vault: Send + Sync {
    /// Read a value.
    ///
    /// # Errors
    /// [`VaultError::Backend`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, VaultError>;

    /// Write a value.
    ///
    /// # Errors
    /// [`VaultError::Backend`] when the backend cannot be written.
    fn put(&self, key: &str, value: &str) -> Result<(), VaultError>;

    /// Delete a value, if present.
    ///
    /// # Errors
    /// [`VaultError::Backend`] when the backend cannot be written.
    fn delete(&self, key: &str) -> Result<(), VaultError>;
}

/// In-memory [`Vault`] for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryVault {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryVault {
    /// Create an empty vault.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Vault for MemoryVault {
    fn get(&self, key: &str) -> Result<Option<String>, VaultError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), VaultError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), VaultError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}
