//! # Resolver Constants
//!
//! Delimiters, identifier schemes, and the entity kinds a resolver can serve.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer identifier assigned to a published item by the host.
pub type EntityId = i32;

/// Characters that separate individual references inside a property value
pub const TOKEN_DELIMITERS: [char; 5] = [',', ' ', '\r', '\n', '\t'];

/// Separator between the scheme and the rest of a reference URI
pub const URI_SCHEME_SEPARATOR: &str = "://";

/// Identifier schemes understood by the host
pub mod udi {
    /// Scheme used by host-issued entity identifiers (`umb://document/<guid>`)
    pub const SCHEME: &str = "umb";

    /// Entity type segment for content items
    pub const DOCUMENT: &str = "document";

    /// Entity type segment for media items
    pub const MEDIA: &str = "media";
}

/// Which of the host's two published caches a resolver talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Content,
    Media,
}

impl EntityKind {
    /// Entity type segment this kind uses in a UDI
    pub fn udi_entity_type(&self) -> &'static str {
        match self {
            EntityKind::Content => udi::DOCUMENT,
            EntityKind::Media => udi::MEDIA,
        }
    }

    /// Map a UDI entity type segment back to a kind
    pub fn from_udi_entity_type(entity_type: &str) -> Option<Self> {
        match entity_type {
            udi::DOCUMENT => Some(EntityKind::Content),
            udi::MEDIA => Some(EntityKind::Media),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Content => "content",
            EntityKind::Media => "media",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
