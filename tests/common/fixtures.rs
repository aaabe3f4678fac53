//! Shared fixtures for integration tests

use content_resolver::test_utils::{InMemoryPublishedCache, TestEntity};
use content_resolver::{EntityKind, Resolver, ResolverConfig};
use std::sync::Arc;

pub type TestHost = Arc<InMemoryPublishedCache>;

/// Content host seeded with a small site tree
pub fn site_host() -> TestHost {
    Arc::new(InMemoryPublishedCache::new().with_entities([
        (1, "Home"),
        (3, "About"),
        (5, "Contact"),
        (8, "News"),
    ]))
}

pub fn site_resolver(host: &TestHost) -> Resolver<TestHost> {
    Resolver::with_config(EntityKind::Content, Arc::clone(host), &ResolverConfig::default())
}

pub fn ids(items: &[TestEntity]) -> Vec<i32> {
    items.iter().map(|item| item.id).collect()
}
