//! # Host Published Cache
//!
//! The published-content cache belongs to the host CMS. This trait is the
//! whole of what the resolvers need from it. A host exposes one
//! implementation for content and one for media.
//!
//! Hosts fall into two groups. Newer ones can fetch an item by its GUID key
//! directly and report [`PublishedCache::supports_key_lookup`]. Older ones
//! only index by integer id, so a GUID has to be found with
//! [`PublishedCache::find_by_key`], a slow scan of the cache. The fetcher
//! memoizes the answers from that scan.

use crate::constants::EntityId;
use std::sync::Arc;
use uuid::Uuid;

pub trait PublishedCache: Send + Sync {
    /// Opaque published item handed back to callers
    type Entity: Clone;

    /// Whether the host runtime has set up its cache yet. Background jobs and
    /// tests commonly run before it has.
    fn is_available(&self) -> bool;

    fn get_by_id(&self, id: EntityId) -> Option<Self::Entity>;

    /// Whether [`PublishedCache::get_by_key`] is backed by a real index
    fn supports_key_lookup(&self) -> bool {
        false
    }

    fn get_by_key(&self, _key: Uuid) -> Option<Self::Entity> {
        None
    }

    /// Slow path: scan for the item whose key attribute equals `key` and
    /// return it together with its integer id.
    fn find_by_key(&self, key: Uuid) -> Option<(Self::Entity, EntityId)>;

    /// GUID key of the item with the given id, for hosts that expose it
    fn key_of(&self, _id: EntityId) -> Option<Uuid> {
        None
    }
}

impl<T: PublishedCache + ?Sized> PublishedCache for Arc<T> {
    type Entity = T::Entity;

    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn get_by_id(&self, id: EntityId) -> Option<Self::Entity> {
        (**self).get_by_id(id)
    }

    fn supports_key_lookup(&self) -> bool {
        (**self).supports_key_lookup()
    }

    fn get_by_key(&self, key: Uuid) -> Option<Self::Entity> {
        (**self).get_by_key(key)
    }

    fn find_by_key(&self, key: Uuid) -> Option<(Self::Entity, EntityId)> {
        (**self).find_by_key(key)
    }

    fn key_of(&self, id: EntityId) -> Option<Uuid> {
        (**self).key_of(id)
    }
}
