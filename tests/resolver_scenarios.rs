//! Resolver Scenario Tests
//!
//! End-to-end resolution against the in-memory host: picker values with
//! missing and malformed ids, GUID memoization, host availability, and
//! transforms.

mod common;

use common::*;
use content_resolver::test_utils::{InMemoryPublishedCache, TestEntity};
use content_resolver::{
    EntityKind, GuidLookupTable, PropertyValue, Resolver, ResolverConfig, ResolverError, Udi,
};
use std::sync::Arc;
use uuid::Uuid;

#[test]
fn collection_keeps_order_and_drops_unresolved() {
    let host = Arc::new(InMemoryPublishedCache::new().with_entities([(1, "One"), (3, "Three")]));
    let resolver = site_resolver(&host);

    let items = resolver.many("1,2,x,3");

    assert_eq!(ids(&items), vec![1, 3]);
}

#[test]
fn guid_resolution_runs_fallback_once() {
    let host = site_host();
    let resolver = site_resolver(&host);
    let about = host.entity(3).unwrap();
    let raw = about.key.to_string();

    let first = resolver.single(&raw);
    assert_eq!(first, Some(about.clone()));
    assert_eq!(host.fallback_calls(), 1);
    assert_eq!(resolver.lookup_table().resolve(&about.key), Some(3));

    let second = resolver.single(&raw);
    assert_eq!(second, first);
    assert_eq!(host.fallback_calls(), 1);
}

#[test]
fn udi_and_plain_guid_share_memoized_mapping() {
    let host = site_host();
    let resolver = site_resolver(&host);
    let news = host.entity(8).unwrap();

    let by_udi = resolver.single(&Udi::document(news.key).to_string());
    let by_guid = resolver.single(&news.key.simple().to_string());

    assert_eq!(by_udi, Some(news.clone()));
    assert_eq!(by_guid, Some(news));
    assert_eq!(host.fallback_calls(), 1);
}

#[test]
fn mixed_picker_value_with_udis_and_ids() {
    let host = site_host();
    let resolver = site_resolver(&host);
    let contact = host.entity(5).unwrap();
    let raw = format!("8\n{}\numb://document/{}\n1", Udi::document(contact.key), Uuid::new_v4().simple());

    assert_eq!(ids(&resolver.many(&raw)), vec![8, 5, 1]);
}

#[test]
fn unavailable_host_returns_nothing_for_every_shape() {
    let host = site_host();
    let resolver = site_resolver(&host);
    let home = host.entity(1).unwrap();
    host.set_available(false);

    assert_eq!(resolver.single("1"), None);
    assert!(resolver.many("1,3,5").is_empty());
    assert_eq!(resolver.single_with("1", Some(|e: TestEntity| e.id)).unwrap(), None);
    assert!(resolver.many_with("1,3", Some(|e: TestEntity| e.id)).unwrap().is_empty());
    assert_eq!(resolver.single_value(&PropertyValue::Entity(home.clone())), None);
    assert!(resolver.many_value(&PropertyValue::Udi(Udi::document(home.key))).is_empty());
    assert_eq!(resolver.single(&home.key.to_string()), None);

    assert_eq!(host.id_calls(), 0);
    assert_eq!(host.fallback_calls(), 0);
}

#[test]
fn host_becoming_available_resolves_again() {
    let host = site_host();
    let resolver = site_resolver(&host);

    host.set_available(false);
    assert_eq!(resolver.single("1"), None);

    host.set_available(true);
    assert_eq!(resolver.single("1").map(|e| e.name), Some("Home".to_string()));
}

#[test]
fn missing_transform_fails_with_invalid_argument() {
    let host = site_host();
    let resolver = site_resolver(&host);

    let err = resolver
        .single_with("1", None::<fn(TestEntity) -> String>)
        .unwrap_err();

    assert!(matches!(err, ResolverError::InvalidArgument { .. }));
}

#[test]
fn stale_mapping_resolves_to_nothing_by_default() {
    let host = site_host();
    let resolver = site_resolver(&host);
    let about = host.entity(3).unwrap();

    assert!(resolver.single(&about.key.to_string()).is_some());
    host.remove(3);

    assert_eq!(resolver.single(&about.key.to_string()), None);
    assert_eq!(resolver.lookup_table().resolve(&about.key), Some(3));
}

#[test]
fn stale_mapping_eviction_follows_rekeyed_item() {
    let host = site_host();
    let mut config = ResolverConfig::default();
    config.guid_cache.evict_stale_entries = true;
    let resolver = Resolver::with_config(EntityKind::Content, Arc::clone(&host), &config);
    let about = host.entity(3).unwrap();

    assert!(resolver.single(&about.key.to_string()).is_some());
    host.remove(3);
    host.insert(TestEntity::with_key(30, "About (moved)", about.key));

    let moved = resolver.single(&about.key.to_string());
    assert_eq!(moved.map(|e| e.id), Some(30));
    assert_eq!(resolver.lookup_table().resolve(&about.key), Some(30));
}

#[test]
fn resolvers_sharing_a_table_share_memoized_ids() {
    let host = site_host();
    let table = Arc::new(GuidLookupTable::new());
    let config = ResolverConfig::default();
    let first = Resolver::new(EntityKind::Content, Arc::clone(&host), Arc::clone(&table), &config);
    let second = Resolver::new(EntityKind::Content, Arc::clone(&host), Arc::clone(&table), &config);
    let home = host.entity(1).unwrap();

    assert!(first.single(&home.key.to_string()).is_some());
    assert!(second.single(&home.key.to_string()).is_some());

    assert_eq!(host.fallback_calls(), 1);
    assert_eq!(table.stats().hits, 1);
}

#[test]
fn media_resolver_ignores_document_udis() {
    let media = Arc::new(InMemoryPublishedCache::new().with_entities([(20, "Logo")]));
    let resolver = Resolver::media(Arc::clone(&media));
    let logo = media.entity(20).unwrap();

    assert_eq!(resolver.single_value(&PropertyValue::Udi(Udi::document(logo.key))), None);
    assert_eq!(
        resolver.single_value(&PropertyValue::Udi(Udi::media(logo.key))),
        Some(logo)
    );
}

#[test]
fn concurrent_resolution_of_the_same_guid() {
    let host = site_host();
    let resolver = Arc::new(site_resolver(&host));
    let news = host.entity(8).unwrap();
    let raw = news.key.to_string();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let resolver = Arc::clone(&resolver);
            let raw = raw.clone();
            std::thread::spawn(move || {
                (0..50)
                    .map(|_| resolver.single(&raw).map(|e| e.id))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        let results = handle.join().unwrap();
        assert!(results.iter().all(|id| *id == Some(8)));
    }

    // Racing first lookups may each scan, but never more than once per thread
    assert!(host.fallback_calls() >= 1);
    assert!(host.fallback_calls() <= 8);
    assert_eq!(resolver.lookup_table().len(), 1);
}
