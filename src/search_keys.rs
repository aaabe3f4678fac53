//! # Search Index Keys
//!
//! Search indexes store item keys as bare hex GUIDs (no hyphens) so that
//! analyzers keep them as single terms. These helpers map integer ids to that
//! form through the host cache.

use crate::constants::EntityId;
use crate::host::PublishedCache;
use crate::resolver::Resolver;
use crate::token;
use uuid::Uuid;

impl<H: PublishedCache> Resolver<H> {
    /// GUID key of the item with `id`
    pub fn key_of(&self, id: EntityId) -> Option<Uuid> {
        if !self.ensure_available("key_of") {
            return None;
        }
        self.host().key_of(id)
    }

    /// Hex key of the item with `id`, or an empty string when it is unknown
    pub fn search_key(&self, id: EntityId) -> String {
        self.key_of(id)
            .map(|key| key.simple().to_string())
            .unwrap_or_default()
    }

    /// Space separated hex keys of the known items among `ids`
    pub fn search_keys(&self, ids: &[EntityId]) -> String {
        ids.iter()
            .filter_map(|id| self.key_of(*id))
            .map(|key| key.simple().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// [`Resolver::search_keys`] for the integer ids found in `raw`
    pub fn search_keys_from_str(&self, raw: &str) -> String {
        let ids: Vec<EntityId> = token::tokens(raw)
            .filter_map(|token| token.as_integer())
            .collect();
        self.search_keys(&ids)
    }
}
