//! # Resolver Facade
//!
//! Resolves property values into published items through one host cache.
//! Every entry point comes in four shapes:
//!
//! | | raw | transformed |
//! |---|---|---|
//! | single | [`Resolver::single`] | [`Resolver::single_with`] |
//! | collection | [`Resolver::many`] | [`Resolver::many_with`] |
//!
//! with `_value`, `_at` (JSON) and `_property` counterparts for typed values,
//! JSON documents and item properties.
//!
//! When the host cache is not available yet, every lookup returns nothing or
//! an empty collection instead of failing. Transformed shapes still reject a
//! missing transform first.
//!
//! ## Usage
//!
//! ```rust
//! use content_resolver::test_utils::InMemoryPublishedCache;
//! use content_resolver::Resolver;
//! use std::sync::Arc;
//!
//! let host = Arc::new(InMemoryPublishedCache::new().with_entities([(1, "Home"), (3, "About")]));
//! let resolver = Resolver::content(Arc::clone(&host));
//!
//! let names = resolver
//!     .many_with("1,2,x,3", Some(|item: content_resolver::test_utils::TestEntity| item.name))
//!     .unwrap();
//! assert_eq!(names, vec!["Home".to_string(), "About".to_string()]);
//! ```

use crate::config::ResolverConfig;
use crate::constants::EntityKind;
use crate::error::{ResolverError, Result};
use crate::fetcher::EntityFetcher;
use crate::guid_cache::GuidLookupTable;
use crate::host::PublishedCache;
use crate::token;
use crate::udi::Udi;
use crate::value::PropertyValue;
use std::sync::Arc;
use tracing::{debug, trace};

/// Resolves references against a single published cache
pub struct Resolver<H: PublishedCache> {
    fetcher: EntityFetcher<H>,
}

impl<H: PublishedCache> Resolver<H> {
    /// Build a resolver around an existing lookup table.
    ///
    /// Resolvers that share a table must serve the same kind from the same host.
    pub fn new(
        kind: EntityKind,
        host: H,
        lookup: Arc<GuidLookupTable>,
        config: &ResolverConfig,
    ) -> Self {
        Self {
            fetcher: EntityFetcher::new(kind, host, lookup, &config.guid_cache),
        }
    }

    /// Build a resolver that owns a fresh lookup table
    pub fn with_config(kind: EntityKind, host: H, config: &ResolverConfig) -> Self {
        let lookup = Arc::new(config.guid_cache.build_table());
        Self::new(kind, host, lookup, config)
    }

    pub fn content(host: H) -> Self {
        Self::with_config(EntityKind::Content, host, &ResolverConfig::default())
    }

    pub fn media(host: H) -> Self {
        Self::with_config(EntityKind::Media, host, &ResolverConfig::default())
    }

    pub fn kind(&self) -> EntityKind {
        self.fetcher.kind()
    }

    pub fn host(&self) -> &H {
        self.fetcher.host()
    }

    pub fn lookup_table(&self) -> &Arc<GuidLookupTable> {
        self.fetcher.lookup_table()
    }

    pub fn fetcher(&self) -> &EntityFetcher<H> {
        &self.fetcher
    }

    /// First item in `raw` that resolves, trying tokens in order
    pub fn single(&self, raw: &str) -> Option<H::Entity> {
        if !self.ensure_available("single") {
            return None;
        }
        self.first_resolved(raw)
    }

    pub fn single_with<T, F>(&self, raw: &str, transform: Option<F>) -> Result<Option<T>>
    where
        F: FnOnce(H::Entity) -> T,
    {
        let transform = require_transform(transform)?;
        Ok(self.single(raw).map(transform))
    }

    /// Every item in `raw` that resolves, in input order
    pub fn many(&self, raw: &str) -> Vec<H::Entity> {
        if !self.ensure_available("many") {
            return Vec::new();
        }
        self.all_resolved(raw)
    }

    pub fn many_with<T, F>(&self, raw: &str, transform: Option<F>) -> Result<Vec<T>>
    where
        F: FnMut(H::Entity) -> T,
    {
        let transform = require_transform(transform)?;
        Ok(self.many(raw).into_iter().map(transform).collect())
    }

    /// Single-item resolution of an already typed property value
    pub fn single_value(&self, value: &PropertyValue<H::Entity>) -> Option<H::Entity> {
        if !self.ensure_available("single_value") {
            return None;
        }
        if value.is_empty() {
            trace!(
                kind = %self.kind(),
                shape = value.shape(),
                "Property value holds no reference"
            );
            return None;
        }

        match value {
            PropertyValue::Id(id) => self.fetcher.fetch_by_id(*id),
            PropertyValue::Entity(entity) => Some(entity.clone()),
            PropertyValue::Entities(entities) => entities.first().cloned(),
            PropertyValue::Text(text) => self.first_resolved(text),
            PropertyValue::Udi(udi) => self.fetch_udi(udi),
            PropertyValue::Udis(udis) => udis.iter().find_map(|udi| self.fetch_udi(udi)),
            PropertyValue::Unsupported => None,
        }
    }

    pub fn single_value_with<T, F>(
        &self,
        value: &PropertyValue<H::Entity>,
        transform: Option<F>,
    ) -> Result<Option<T>>
    where
        F: FnOnce(H::Entity) -> T,
    {
        let transform = require_transform(transform)?;
        Ok(self.single_value(value).map(transform))
    }

    /// Collection resolution of an already typed property value
    pub fn many_value(&self, value: &PropertyValue<H::Entity>) -> Vec<H::Entity> {
        if !self.ensure_available("many_value") {
            return Vec::new();
        }
        if value.is_empty() {
            trace!(
                kind = %self.kind(),
                shape = value.shape(),
                "Property value holds no reference"
            );
            return Vec::new();
        }

        match value {
            PropertyValue::Id(id) => self.fetcher.fetch_by_id(*id).into_iter().collect(),
            PropertyValue::Entity(entity) => vec![entity.clone()],
            PropertyValue::Entities(entities) => entities.clone(),
            PropertyValue::Text(text) => self.all_resolved(text),
            PropertyValue::Udi(udi) => self.fetch_udi(udi).into_iter().collect(),
            PropertyValue::Udis(udis) => udis.iter().filter_map(|udi| self.fetch_udi(udi)).collect(),
            PropertyValue::Unsupported => Vec::new(),
        }
    }

    pub fn many_value_with<T, F>(
        &self,
        value: &PropertyValue<H::Entity>,
        transform: Option<F>,
    ) -> Result<Vec<T>>
    where
        F: FnMut(H::Entity) -> T,
    {
        let transform = require_transform(transform)?;
        Ok(self.many_value(value).into_iter().map(transform).collect())
    }

    pub(crate) fn ensure_available(&self, operation: &str) -> bool {
        let available = self.fetcher.is_available();
        if !available {
            trace!(
                kind = %self.kind(),
                operation = operation,
                "Published cache unavailable - resolving to nothing"
            );
        }
        available
    }

    pub(crate) fn first_resolved(&self, raw: &str) -> Option<H::Entity> {
        token::tokens(raw).find_map(|token| self.fetcher.fetch(token))
    }

    pub(crate) fn all_resolved(&self, raw: &str) -> Vec<H::Entity> {
        token::tokens(raw)
            .filter_map(|token| self.fetcher.fetch(token))
            .collect()
    }

    fn fetch_udi(&self, udi: &Udi) -> Option<H::Entity> {
        if udi.kind() != Some(self.kind()) {
            debug!(
                kind = %self.kind(),
                udi = %udi,
                "Ignoring UDI for a different entity type"
            );
            return None;
        }
        self.fetcher.fetch_by_guid(udi.guid())
    }
}

pub(crate) fn require_transform<F>(transform: Option<F>) -> Result<F> {
    transform.ok_or_else(ResolverError::missing_transform)
}

/// Content and media resolvers for one host, built once at startup
pub struct PublishedResolvers<C: PublishedCache, M: PublishedCache> {
    pub content: Resolver<C>,
    pub media: Resolver<M>,
}

impl<C: PublishedCache, M: PublishedCache> PublishedResolvers<C, M> {
    pub fn new(content_host: C, media_host: M, config: &ResolverConfig) -> Self {
        Self {
            content: Resolver::with_config(EntityKind::Content, content_host, config),
            media: Resolver::with_config(EntityKind::Media, media_host, config),
        }
    }
}
