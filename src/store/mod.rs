// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-local key-value store holding serialized snapshots.
//!
//! Every write is a full-snapshot overwrite of one key. Reads fail closed:
//! a missing, unreadable, or corrupt snapshot yields the caller's default.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::{de::DeserializeOwned, Serialize};

/// Store keys as constants.
pub mod keys {
    pub const PROFILE: &str = "profile";
    pub const WORKOUTS: &str = "workouts";
    pub const GOALS: &str = "goals";
}

/// Byte-oriented key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Read the bytes stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Overwrite the bytes stored under `key`.
    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;
}

/// Load and deserialize a snapshot, falling back to `default` on any failure.
pub fn load_snapshot<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str, default: T) -> T {
    let bytes = match store.load(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            tracing::debug!(key, "No stored snapshot, using default");
            return default;
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "Snapshot load failed, using default");
            return default;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => {
            tracing::debug!(key, bytes = bytes.len(), "Loaded snapshot");
            value
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "Corrupt snapshot, using default");
            default
        }
    }
}

/// Serialize `value` and overwrite `key`. Failures are logged, never returned.
pub fn save_snapshot<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) {
    let bytes = match serde_json::to_vec(value) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(key, error = %StoreError::Serialize(e.to_string()), "Snapshot not written");
            return;
        }
    };

    if let Err(e) = store.save(key, &bytes) {
        tracing::error!(key, error = %e, "Snapshot not written");
    }
}

/// Errors from store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid store key: {0:?}")]
    InvalidKey(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to serialize snapshot: {0}")]
    Serialize(String),
}

/// Keys are used as file names, so only a conservative alphabet is allowed.
pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}
