//! # JSON Path Resolution
//!
//! Grid editors and nested content store references inside JSON documents.
//! These helpers pick a value out of a `serde_json::Value` by a dotted path
//! (`items.0.link`, numeric segments index arrays) and resolve it like any
//! other property value.

use crate::constants::EntityId;
use crate::error::{ResolverError, Result};
use crate::host::PublishedCache;
use crate::resolver::{require_transform, Resolver};
use crate::value::PropertyValue;
use serde_json::Value;

/// Walk `path` from `root`
pub fn select<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(root, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index)),
            _ => None,
        })
}

/// Read the reference stored at `path` as a property value
pub fn value_at<E>(root: &Value, path: &str) -> Result<PropertyValue<E>> {
    if path.trim().is_empty() {
        return Err(ResolverError::invalid_argument(
            "path",
            "a JSON path must be specified",
        ));
    }

    let value = match select(root, path) {
        Some(Value::String(text)) => PropertyValue::Text(text.clone()),
        Some(Value::Number(number)) => number
            .as_i64()
            .filter(|id| *id >= 0)
            .and_then(|id| EntityId::try_from(id).ok())
            .map_or(PropertyValue::Unsupported, PropertyValue::Id),
        _ => PropertyValue::Unsupported,
    };

    Ok(value)
}

impl<H: PublishedCache> Resolver<H> {
    pub fn single_at(&self, root: &Value, path: &str) -> Result<Option<H::Entity>> {
        let value = value_at(root, path)?;
        Ok(self.single_value(&value))
    }

    pub fn single_at_with<T, F>(
        &self,
        root: &Value,
        path: &str,
        transform: Option<F>,
    ) -> Result<Option<T>>
    where
        F: FnOnce(H::Entity) -> T,
    {
        let value = value_at(root, path)?;
        let transform = require_transform(transform)?;
        Ok(self.single_value(&value).map(transform))
    }

    pub fn many_at(&self, root: &Value, path: &str) -> Result<Vec<H::Entity>> {
        let value = value_at(root, path)?;
        Ok(self.many_value(&value))
    }

    pub fn many_at_with<T, F>(&self, root: &Value, path: &str, transform: Option<F>) -> Result<Vec<T>>
    where
        F: FnMut(H::Entity) -> T,
    {
        let value = value_at(root, path)?;
        let transform = require_transform(transform)?;
        Ok(self.many_value(&value).into_iter().map(transform).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{InMemoryPublishedCache, TestEntity};
    use serde_json::json;
    use std::sync::Arc;

    fn document() -> Value {
        json!({
            "title": "Landing",
            "hero": { "image": "1" },
            "links": "3,2,1",
            "featured": 3,
            "items": [
                { "link": "x" },
                { "link": "1" }
            ],
            "flag": true
        })
    }

    #[test]
    fn test_select_paths() {
        let doc = document();
        assert_eq!(select(&doc, "hero.image"), Some(&json!("1")));
        assert_eq!(select(&doc, "items.1.link"), Some(&json!("1")));
        assert_eq!(select(&doc, "items.5.link"), None);
        assert_eq!(select(&doc, "title.nested"), None);
    }

    #[test]
    fn test_value_at_shapes() {
        let doc = document();
        assert_eq!(value_at::<()>(&doc, "featured").unwrap(), PropertyValue::Id(3));
        assert_eq!(
            value_at::<()>(&doc, "links").unwrap(),
            PropertyValue::Text("3,2,1".to_string())
        );
        assert_eq!(value_at::<()>(&doc, "flag").unwrap(), PropertyValue::Unsupported);
        assert_eq!(value_at::<()>(&doc, "missing").unwrap(), PropertyValue::Unsupported);
        assert_eq!(
            value_at::<()>(&json!({ "id": -1 }), "id").unwrap(),
            PropertyValue::Unsupported
        );
    }

    #[test]
    fn test_empty_path_is_invalid_argument() {
        let result = value_at::<()>(&document(), "  ");
        assert!(matches!(result, Err(ResolverError::InvalidArgument { ref name, .. }) if name == "path"));
    }

    #[test]
    fn test_resolves_from_json() {
        let host = Arc::new(InMemoryPublishedCache::new().with_entities([(1, "Home"), (3, "About")]));
        let resolver = Resolver::content(Arc::clone(&host));
        let doc = document();

        assert_eq!(resolver.single_at(&doc, "hero.image").unwrap().map(|e| e.id), Some(1));
        assert_eq!(resolver.single_at(&doc, "featured").unwrap().map(|e| e.id), Some(3));

        let ids: Vec<_> = resolver
            .many_at(&doc, "links")
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![3, 1]);

        let names = resolver
            .many_at_with(&doc, "links", Some(|e: TestEntity| e.name))
            .unwrap();
        assert_eq!(names, vec!["About".to_string(), "Home".to_string()]);

        assert!(resolver.many_at(&doc, "missing").unwrap().is_empty());
    }

    #[test]
    fn test_json_transform_checks() {
        let host = Arc::new(InMemoryPublishedCache::new());
        let resolver = Resolver::content(host);
        let doc = document();

        let missing = resolver.single_at_with(&doc, "featured", None::<fn(TestEntity) -> i32>);
        assert!(matches!(missing, Err(ResolverError::InvalidArgument { ref name, .. }) if name == "transform"));

        let empty_path = resolver.many_at_with(&doc, "", Some(|e: TestEntity| e.id));
        assert!(matches!(empty_path, Err(ResolverError::InvalidArgument { ref name, .. }) if name == "path"));
    }
}
