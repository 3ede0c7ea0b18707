//! Per-type memo table for encoded signature sets.
//!
//! Entries are keyed by [`TypeKey`], so every interface name backed by the same
//! concrete type shares one entry. Entries are never invalidated: a type moves
//! from unresolved to resolved exactly once.
//!
//! # Concurrency
//!
//! The resolver closure runs outside the lock. Two threads missing on the same
//! type may both enumerate, but insertion is first-writer-wins and every caller
//! returns the stored `Arc<str>`, so no thread ever sees a partial value and all
//! of them see the same one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use nativebridge_core::TypeKey;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Cached resolution result. `None` records "nothing exposed".
type Entry = Option<Arc<str>>;

/// Counters describing cache behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the table.
    pub hits: u64,
    /// Lookups that ran the resolver (one method-table enumeration each).
    pub misses: u64,
    /// Resolved types.
    pub entries: usize,
}

/// Memo table from native type to its encoded signature set.
#[derive(Default)]
pub struct SignatureCache {
    entries: RwLock<FxHashMap<TypeKey, Entry>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SignatureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the entry for `key`, running `resolve` on a miss.
    pub fn get_or_resolve<F>(&self, key: TypeKey, resolve: F) -> Entry
    where
        F: FnOnce() -> Entry,
    {
        let cached = self.entries.read().get(&key).cloned();
        if let Some(entry) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(native_type = ?key, "signature cache hit");
            return entry;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let computed = resolve();

        let mut entries = self.entries.write();
        entries.entry(key).or_insert(computed).clone()
    }

    /// Cached entry without resolving. The outer `None` means unresolved.
    pub fn peek(&self, key: &TypeKey) -> Option<Entry> {
        self.entries.read().get(key).cloned()
    }

    pub fn contains(&self, key: &TypeKey) -> bool {
        self.entries.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

impl std::fmt::Debug for SignatureCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureCache")
            .field("stats", &self.stats())
            .finish()
    }
}
