//! # Entity Fetcher
//!
//! Turns a single token into a published item. Integer ids go straight to the
//! host cache. GUIDs use the host's key index when it has one; otherwise the
//! memoized id is tried first and the fallback scan runs only on a miss.
//!
//! A lookup that finds nothing is an ordinary outcome and is returned as `None`.

use crate::config::GuidCacheConfig;
use crate::constants::{EntityId, EntityKind};
use crate::guid_cache::GuidLookupTable;
use crate::host::PublishedCache;
use crate::logging::log_resolution;
use crate::token::Token;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

pub struct EntityFetcher<H: PublishedCache> {
    kind: EntityKind,
    host: H,
    lookup: Arc<GuidLookupTable>,
    memoize: bool,
    evict_stale_entries: bool,
}

impl<H: PublishedCache> EntityFetcher<H> {
    pub fn new(
        kind: EntityKind,
        host: H,
        lookup: Arc<GuidLookupTable>,
        config: &GuidCacheConfig,
    ) -> Self {
        Self {
            kind,
            host,
            lookup,
            memoize: config.enabled,
            evict_stale_entries: config.evict_stale_entries,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn lookup_table(&self) -> &Arc<GuidLookupTable> {
        &self.lookup
    }

    pub fn is_available(&self) -> bool {
        self.host.is_available()
    }

    pub fn fetch(&self, token: Token) -> Option<H::Entity> {
        match token {
            Token::Integer(id) => self.fetch_by_id(id),
            Token::Guid(guid) => self.fetch_by_guid(guid),
        }
    }

    pub fn fetch_by_id(&self, id: EntityId) -> Option<H::Entity> {
        self.host.get_by_id(id)
    }

    pub fn fetch_by_guid(&self, guid: Uuid) -> Option<H::Entity> {
        if self.host.supports_key_lookup() {
            return self.host.get_by_key(guid);
        }

        if self.memoize {
            if let Some(id) = self.lookup.resolve(&guid) {
                let entity = self.host.get_by_id(id);
                if entity.is_some() || !self.evict_stale_entries {
                    return entity;
                }

                // The remembered id no longer fetches; the item may have been re-keyed
                if self.lookup.forget_if(&guid, id) {
                    debug!(
                        kind = %self.kind,
                        guid = %guid,
                        stale_id = id,
                        "Evicted stale GUID mapping"
                    );
                }
            }
        }

        self.fetch_by_guid_fallback(guid)
    }

    fn fetch_by_guid_fallback(&self, guid: Uuid) -> Option<H::Entity> {
        let reference = guid.to_string();

        let Some((entity, id)) = self.host.find_by_key(guid) else {
            log_resolution("fallback_query", self.kind, &reference, None, Some("not found"));
            return None;
        };

        log_resolution("fallback_query", self.kind, &reference, Some(id), None);

        if self.memoize {
            self.lookup.remember(guid, id);
        }

        Some(entity)
    }
}
