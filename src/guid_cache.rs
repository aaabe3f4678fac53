//! # GUID Lookup Table
//!
//! Memoizes GUID key → integer id mappings for hosts that can only fetch by
//! integer id. Finding the id for a GUID on such hosts means an expensive
//! fallback query, so each successful answer is remembered for the lifetime
//! of the table.
//!
//! The table is an explicit object: construct one per entity kind at
//! application start and hand it to the resolver that serves that kind.
//! Entries are never evicted by age or size. Concurrent readers and writers
//! are safe; two threads resolving the same GUID at once both write the same
//! mapping.

use crate::constants::EntityId;
use dashmap::DashMap;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;
use uuid::Uuid;

/// Point-in-time counters for a lookup table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LookupTableStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub inserts: u64,
    pub evictions: u64,
}

#[derive(Debug, Default)]
pub struct GuidLookupTable {
    entries: DashMap<Uuid, EntityId>,
    hits: AtomicU64,
    misses: AtomicU64,
    inserts: AtomicU64,
    evictions: AtomicU64,
}

impl GuidLookupTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Look up the id remembered for `guid`
    pub fn resolve(&self, guid: &Uuid) -> Option<EntityId> {
        match self.entries.get(guid) {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(*entry.value())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Remember `guid` → `id`, overwriting any earlier mapping
    pub fn remember(&self, guid: Uuid, id: EntityId) {
        trace!(guid = %guid, id = id, "Remembering GUID mapping");
        self.entries.insert(guid, id);
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    /// Drop the mapping for `guid`, but only while it still points at `id`.
    ///
    /// A concurrent `remember` with a fresh id is left in place.
    pub fn forget_if(&self, guid: &Uuid, id: EntityId) -> bool {
        let removed = self
            .entries
            .remove_if(guid, |_, current| *current == id)
            .is_some();
        if removed {
            self.evictions.fetch_add(1, Ordering::Relaxed);
        }
        removed
    }

    pub fn contains(&self, guid: &Uuid) -> bool {
        self.entries.contains_key(guid)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> LookupTableStats {
        LookupTableStats {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }
}
