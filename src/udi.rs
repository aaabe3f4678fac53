//! # Entity UDIs
//!
//! A UDI names a host entity by type and GUID key, e.g.
//! `umb://document/4fad7e74c8f04c33b2b3d2e4e0d9b6c1`. Property editors that
//! store references as UDIs produce these, alone or as lists.

use crate::constants::{udi, EntityKind, URI_SCHEME_SEPARATOR};
use crate::error::{ResolverError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Udi {
    entity_type: String,
    guid: Uuid,
}

impl Udi {
    pub fn new(kind: EntityKind, guid: Uuid) -> Self {
        Self {
            entity_type: kind.udi_entity_type().to_string(),
            guid,
        }
    }

    pub fn document(guid: Uuid) -> Self {
        Self::new(EntityKind::Content, guid)
    }

    pub fn media(guid: Uuid) -> Self {
        Self::new(EntityKind::Media, guid)
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    pub fn guid(&self) -> Uuid {
        self.guid
    }

    /// The resolver kind this UDI addresses, if it is one the resolvers serve
    pub fn kind(&self) -> Option<EntityKind> {
        EntityKind::from_udi_entity_type(&self.entity_type)
    }

    /// Parse `umb://<entity-type>/<guid>`
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();

        let (scheme, rest) = trimmed
            .split_once(URI_SCHEME_SEPARATOR)
            .ok_or_else(|| ResolverError::invalid_udi(value, "missing scheme separator"))?;

        if scheme != udi::SCHEME {
            return Err(ResolverError::invalid_udi(
                value,
                format!("unsupported scheme '{scheme}'"),
            ));
        }

        let (entity_type, id) = rest
            .split_once('/')
            .ok_or_else(|| ResolverError::invalid_udi(value, "missing entity type"))?;

        if entity_type.is_empty()
            || !entity_type
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(ResolverError::invalid_udi(value, "malformed entity type"));
        }

        let guid = Uuid::try_parse(id)
            .map_err(|e| ResolverError::invalid_udi(value, format!("invalid guid: {e}")))?;

        Ok(Self {
            entity_type: entity_type.to_string(),
            guid,
        })
    }
}

impl fmt::Display for Udi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}/{}",
            udi::SCHEME,
            URI_SCHEME_SEPARATOR,
            self.entity_type,
            self.guid.simple()
        )
    }
}

impl FromStr for Udi {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Udi {
    type Error = ResolverError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Udi> for String {
    fn from(value: Udi) -> Self {
        value.to_string()
    }
}
