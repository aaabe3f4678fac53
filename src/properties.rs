//! # Property Resolution
//!
//! Resolve the references held in a named property of a published item,
//! e.g. a content picker on a page. Reading properties stays with the host;
//! items expose their raw text through [`PropertySource`].

use crate::error::Result;
use crate::host::PublishedCache;
use crate::resolver::{require_transform, Resolver};

pub trait PropertySource {
    /// Raw text of the property `alias`.
    ///
    /// With `recursive`, an empty value is looked up on ancestors instead.
    fn property_text(&self, alias: &str, recursive: bool) -> Option<String>;
}

impl<H: PublishedCache> Resolver<H> {
    pub fn single_property<S>(&self, item: &S, alias: &str, recursive: bool) -> Option<H::Entity>
    where
        S: PropertySource + ?Sized,
    {
        let text = item.property_text(alias, recursive).unwrap_or_default();
        self.single(&text)
    }

    pub fn single_property_with<S, T, F>(
        &self,
        item: &S,
        alias: &str,
        recursive: bool,
        transform: Option<F>,
    ) -> Result<Option<T>>
    where
        S: PropertySource + ?Sized,
        F: FnOnce(H::Entity) -> T,
    {
        let transform = require_transform(transform)?;
        Ok(self.single_property(item, alias, recursive).map(transform))
    }

    pub fn many_property<S>(&self, item: &S, alias: &str, recursive: bool) -> Vec<H::Entity>
    where
        S: PropertySource + ?Sized,
    {
        let text = item.property_text(alias, recursive).unwrap_or_default();
        self.many(&text)
    }

    pub fn many_property_with<S, T, F>(
        &self,
        item: &S,
        alias: &str,
        recursive: bool,
        transform: Option<F>,
    ) -> Result<Vec<T>>
    where
        S: PropertySource + ?Sized,
        F: FnMut(H::Entity) -> T,
    {
        let transform = require_transform(transform)?;
        Ok(self
            .many_property(item, alias, recursive)
            .into_iter()
            .map(transform)
            .collect())
    }
}
