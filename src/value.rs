//! # Property Values
//!
//! Property converters may already have turned a stored reference into
//! something typed before it reaches a resolver. [`PropertyValue`] lists the
//! shapes a resolver accepts. Anything else arrives as
//! [`PropertyValue::Unsupported`] and resolves to nothing.

use crate::constants::EntityId;
use crate::token;
use crate::udi::Udi;

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue<E> {
    /// A bare integer id
    Id(EntityId),
    /// An item the converter already fetched
    Entity(E),
    /// Items the converter already fetched, in picker order
    Entities(Vec<E>),
    /// Unconverted text: ids, GUIDs or UDIs separated by delimiters
    Text(String),
    Udi(Udi),
    Udis(Vec<Udi>),
    Unsupported,
}

impl<E> PropertyValue<E> {
    /// Short name of the variant, for logging
    pub fn shape(&self) -> &'static str {
        match self {
            PropertyValue::Id(_) => "id",
            PropertyValue::Entity(_) => "entity",
            PropertyValue::Entities(_) => "entities",
            PropertyValue::Text(_) => "text",
            PropertyValue::Udi(_) => "udi",
            PropertyValue::Udis(_) => "udis",
            PropertyValue::Unsupported => "unsupported",
        }
    }

    /// Whether the value holds no reference at all. Text counts as empty when
    /// the parser finds no well-formed token in it.
    pub fn is_empty(&self) -> bool {
        match self {
            PropertyValue::Id(_) | PropertyValue::Entity(_) | PropertyValue::Udi(_) => false,
            PropertyValue::Entities(items) => items.is_empty(),
            PropertyValue::Text(text) => token::tokens(text).next().is_none(),
            PropertyValue::Udis(udis) => udis.is_empty(),
            PropertyValue::Unsupported => true,
        }
    }
}

impl<E> From<EntityId> for PropertyValue<E> {
    fn from(id: EntityId) -> Self {
        PropertyValue::Id(id)
    }
}

impl<E> From<&str> for PropertyValue<E> {
    fn from(text: &str) -> Self {
        PropertyValue::Text(text.to_string())
    }
}

impl<E> From<String> for PropertyValue<E> {
    fn from(text: String) -> Self {
        PropertyValue::Text(text)
    }
}

impl<E> From<Udi> for PropertyValue<E> {
    fn from(udi: Udi) -> Self {
        PropertyValue::Udi(udi)
    }
}

impl<E> From<Vec<Udi>> for PropertyValue<E> {
    fn from(udis: Vec<Udi>) -> Self {
        PropertyValue::Udis(udis)
    }
}

impl<E> From<Option<PropertyValue<E>>> for PropertyValue<E> {
    fn from(value: Option<PropertyValue<E>>) -> Self {
        value.unwrap_or(PropertyValue::Unsupported)
    }
}
