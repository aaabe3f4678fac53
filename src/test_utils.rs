//! # Test Utilities
//!
//! In-memory stand-ins for the host published cache. Unit tests, integration
//! tests and benchmarks all resolve against these instead of a real CMS.

use crate::constants::EntityId;
use crate::host::PublishedCache;
use crate::properties::PropertySource;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use uuid::Uuid;

/// Minimal published item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestEntity {
    pub id: EntityId,
    pub key: Uuid,
    pub name: String,
}

impl TestEntity {
    /// Create an entity with a random key
    pub fn new(id: EntityId, name: &str) -> Self {
        Self::with_key(id, name, Uuid::new_v4())
    }

    pub fn with_key(id: EntityId, name: &str, key: Uuid) -> Self {
        Self {
            id,
            key,
            name: name.to_string(),
        }
    }
}

/// Published cache backed by a `HashMap`, with call counters.
///
/// Defaults to an available host without a key index, so GUID lookups take
/// the fallback path and [`InMemoryPublishedCache::fallback_calls`] counts them.
#[derive(Debug)]
pub struct InMemoryPublishedCache {
    items: RwLock<HashMap<EntityId, TestEntity>>,
    available: AtomicBool,
    key_lookup: bool,
    id_calls: AtomicUsize,
    key_calls: AtomicUsize,
    fallback_calls: AtomicUsize,
}

impl Default for InMemoryPublishedCache {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPublishedCache {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
            available: AtomicBool::new(true),
            key_lookup: false,
            id_calls: AtomicUsize::new(0),
            key_calls: AtomicUsize::new(0),
            fallback_calls: AtomicUsize::new(0),
        }
    }

    /// Behave like a host that indexes items by GUID key
    pub fn with_key_lookup(mut self) -> Self {
        self.key_lookup = true;
        self
    }

    /// Seed the cache from `(id, name)` pairs
    pub fn with_entities<'a>(self, entities: impl IntoIterator<Item = (EntityId, &'a str)>) -> Self {
        for (id, name) in entities {
            self.insert(TestEntity::new(id, name));
        }
        self
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Insert or replace an entity, returning a copy of it
    pub fn insert(&self, entity: TestEntity) -> TestEntity {
        self.items.write().insert(entity.id, entity.clone());
        entity
    }

    pub fn remove(&self, id: EntityId) -> Option<TestEntity> {
        self.items.write().remove(&id)
    }

    pub fn entity(&self, id: EntityId) -> Option<TestEntity> {
        self.items.read().get(&id).cloned()
    }

    pub fn id_calls(&self) -> usize {
        self.id_calls.load(Ordering::SeqCst)
    }

    pub fn key_calls(&self) -> usize {
        self.key_calls.load(Ordering::SeqCst)
    }

    pub fn fallback_calls(&self) -> usize {
        self.fallback_calls.load(Ordering::SeqCst)
    }

    fn find(&self, key: Uuid) -> Option<TestEntity> {
        self.items
            .read()
            .values()
            .find(|entity| entity.key == key)
            .cloned()
    }
}

impl PublishedCache for InMemoryPublishedCache {
    type Entity = TestEntity;

    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    fn get_by_id(&self, id: EntityId) -> Option<TestEntity> {
        self.id_calls.fetch_add(1, Ordering::SeqCst);
        self.entity(id)
    }

    fn supports_key_lookup(&self) -> bool {
        self.key_lookup
    }

    fn get_by_key(&self, key: Uuid) -> Option<TestEntity> {
        if !self.key_lookup {
            return None;
        }
        self.key_calls.fetch_add(1, Ordering::SeqCst);
        self.find(key)
    }

    fn find_by_key(&self, key: Uuid) -> Option<(TestEntity, EntityId)> {
        self.fallback_calls.fetch_add(1, Ordering::SeqCst);
        self.find(key).map(|entity| {
            let id = entity.id;
            (entity, id)
        })
    }

    fn key_of(&self, id: EntityId) -> Option<Uuid> {
        self.items.read().get(&id).map(|entity| entity.key)
    }
}

/// Item carrying string properties, with an optional parent for recursive lookups
#[derive(Debug, Clone, Default)]
pub struct TestPropertyItem {
    properties: HashMap<String, String>,
    parent: Option<Box<TestPropertyItem>>,
}

impl TestPropertyItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property(mut self, alias: &str, value: &str) -> Self {
        self.properties.insert(alias.to_string(), value.to_string());
        self
    }

    pub fn with_parent(mut self, parent: TestPropertyItem) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }
}

impl PropertySource for TestPropertyItem {
    fn property_text(&self, alias: &str, recursive: bool) -> Option<String> {
        match self.properties.get(alias) {
            Some(value) if !value.trim().is_empty() => Some(value.clone()),
            _ if recursive => self
                .parent
                .as_ref()
                .and_then(|parent| parent.property_text(alias, true)),
            _ => None,
        }
    }
}
