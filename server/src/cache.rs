//! In-process TTL cache with sliding-expiry reads.
//!
//! Entries remember the lifetime they were inserted with, so a sliding read
//! pushes an entry's expiry out by its own configured duration rather than a
//! cache-wide one. Expired entries are invisible to readers immediately and
//! reclaimed by a periodic [`TtlCache::evict_expired`] sweep.

use std::collections::{HashMap, hash_map};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;

struct Entry {
    value: String,
    ttl: TimeDelta,
    expires_at: DateTime<Utc>,
}

impl Entry {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// String-keyed TTL cache.
///
/// The clock is injected so tests can advance time without sleeping.
pub struct TtlCache {
    clock: Arc<dyn Clock>,
    entries: RwLock<HashMap<String, Entry>>,
}

impl TtlCache {
    /// Create an empty cache reading time from `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Insert or replace `key`, expiring `ttl` from now.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>, ttl: TimeDelta) {
        let now = self.clock.utc();
        let mut entries = self.write_entries();
        entries.insert(
            key.into(),
            Entry {
                value: value.into(),
                ttl,
                expires_at: now + ttl,
            },
        );
    }

    /// Insert `key` only when it is absent or expired, returning the value
    /// that survives. Concurrent writers racing on one key all end up
    /// serving the first writer's value.
    pub fn insert_if_absent(
        &self,
        key: impl Into<String>,
        value: impl Into<String>,
        ttl: TimeDelta,
    ) -> String {
        let now = self.clock.utc();
        let value = value.into();
        let mut entries = self.write_entries();
        match entries.entry(key.into()) {
            hash_map::Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                if existing.is_expired(now) {
                    *existing = Entry {
                        value: value.clone(),
                        ttl,
                        expires_at: now + ttl,
                    };
                    value
                } else {
                    existing.value.clone()
                }
            }
            hash_map::Entry::Vacant(slot) => {
                slot.insert(Entry {
                    value: value.clone(),
                    ttl,
                    expires_at: now + ttl,
                });
                value
            }
        }
    }

    /// Read `key` without touching its expiry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let now = self.clock.utc();
        let entries = self.read_entries();
        entries
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.value.clone())
    }

    /// Read `key` and push its expiry out to now plus its own lifetime.
    #[must_use]
    pub fn get_sliding(&self, key: &str) -> Option<String> {
        let now = self.clock.utc();
        let mut entries = self.write_entries();
        let entry = entries.get_mut(key).filter(|entry| !entry.is_expired(now))?;
        entry.expires_at = now + entry.ttl;
        Some(entry.value.clone())
    }

    /// Drop every expired entry, returning how many were reclaimed.
    pub fn evict_expired(&self) -> usize {
        let now = self.clock.utc();
        let mut entries = self.write_entries();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        before - entries.len()
    }

    /// Number of entries held, expired ones included until the next sweep.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    /// Whether the cache holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    fn read_entries(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, Entry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entries(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, Entry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}
