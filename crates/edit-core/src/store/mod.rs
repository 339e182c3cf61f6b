//! # Store Module
//!
//! The shared in-memory mapping from structure identifiers to immutable
//! coordinate text, and the seam to the external retrieval collaborator.
//!
//! ## Overview
//!
//! The [`StructureStore`] is an explicit object passed by reference into every
//! operation; it is never ambient global state. Entries are immutable once
//! written: every mutation mints a new identifier instead of editing in place,
//! so readers of distinct identifiers never contend. The store is volatile by
//! design; nothing survives a restart, and entries are only ever removed by an
//! explicit administrative [`StructureStore::clear`].
//!
//! Cache misses on external accessions are filled through the
//! [`StructureFetcher`] seam ([`loader`]), with concurrent misses on the same
//! key serialized so the collaborator is hit at most once per accession.

pub mod loader;

pub use loader::{FetchError, StructureFetcher};

use crate::core::ids;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid structure identifier: '{id}'")]
    InvalidIdentifier { id: String },

    #[error("structure '{id}' is not resident and cannot be loaded")]
    NotFound { id: String },

    #[error("failed to fetch structure '{id}': {source}")]
    Fetch { id: String, source: FetchError },
}

/// Shared, thread-safe mapping from identifier to structure text.
///
/// Lookups fall back from the exact key to its upper-cased form: externally
/// supplied accessions are canonicalized to upper case at insertion, while
/// derived suffixes may retain mixed case in caller hands.
#[derive(Debug, Default)]
pub struct StructureStore {
    entries: RwLock<HashMap<String, Arc<str>>>,
    fetch_gates: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl StructureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-key lookup with one upper-cased retry. The returned blob is
    /// immutable and cheap to clone.
    pub fn get(&self, id: &str) -> Option<Arc<str>> {
        let entries = read(&self.entries);
        if let Some(text) = entries.get(id) {
            return Some(Arc::clone(text));
        }
        entries.get(ids::canonical_key(id).as_str()).cloned()
    }

    /// Unconditional overwrite. There is no merge and no versioning beyond
    /// the identifier itself.
    pub fn put(&self, id: impl Into<String>, text: impl Into<Arc<str>>) {
        write(&self.entries).insert(id.into(), text.into());
    }

    pub fn contains(&self, id: &str) -> bool {
        read(&self.entries).contains_key(id)
    }

    pub fn len(&self) -> usize {
        read(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        read(&self.entries).is_empty()
    }

    /// All resident identifiers, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = read(&self.entries).keys().cloned().collect();
        ids.sort_unstable();
        ids
    }

    /// Administrative wipe. The only way entries are ever removed.
    pub fn clear(&self) {
        write(&self.entries).clear();
        lock(&self.fetch_gates).clear();
    }

    /// Ensures an accession is resident, fetching it on a miss.
    ///
    /// Returns the canonical (upper-cased) key the text is stored under.
    /// Concurrent misses on the same accession are serialized through a
    /// per-key gate so the collaborator sees at most one fetch.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidIdentifier`] when a four-character miss fails
    ///   the accession shape check.
    /// - [`StoreError::NotFound`] when the miss is not accession-shaped at
    ///   all (a derived identifier that was never stored).
    /// - [`StoreError::Fetch`] when the collaborator fails; the store is left
    ///   unmodified.
    pub fn ensure_loaded(
        &self,
        fetcher: &dyn StructureFetcher,
        accession: &str,
    ) -> Result<String, StoreError> {
        let key = ids::canonical_key(accession);
        if self.contains(&key) {
            return Ok(key);
        }
        if !ids::is_valid_accession(&key) {
            // A four-character miss is a malformed accession; anything else
            // is a derived identifier that was never stored.
            return Err(if key.len() == 4 {
                StoreError::InvalidIdentifier {
                    id: accession.to_string(),
                }
            } else {
                StoreError::NotFound {
                    id: accession.to_string(),
                }
            });
        }

        let gate = self.fetch_gate(&key);
        let _guard = lock(&gate);
        if self.contains(&key) {
            debug!(id = %key, "fetch race resolved by another caller");
            return Ok(key);
        }
        let text = fetcher.fetch(&key).map_err(|source| StoreError::Fetch {
            id: key.clone(),
            source,
        })?;
        info!(id = %key, bytes = text.len(), "structure fetched and stored");
        self.put(key.clone(), text);
        Ok(key)
    }

    fn fetch_gate(&self, key: &str) -> Arc<Mutex<()>> {
        Arc::clone(
            lock(&self.fetch_gates)
                .entry(key.to_string())
                .or_default(),
        )
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
