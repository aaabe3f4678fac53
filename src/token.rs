//! # Reference Token Parser
//!
//! Splits a raw property value into reference tokens. A property may hold a
//! single id, a comma separated picker value, or one UDI per line; all of them
//! reduce to an ordered sequence of GUIDs and integer ids.
//!
//! Fragments that are neither are skipped without error. Input order is kept
//! because single-item lookups take the first token that resolves.

use crate::constants::{EntityId, TOKEN_DELIMITERS, URI_SCHEME_SEPARATOR};
use std::fmt;
use uuid::Uuid;

/// One parsed reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Guid(Uuid),
    Integer(EntityId),
}

impl Token {
    pub fn as_integer(&self) -> Option<EntityId> {
        match self {
            Token::Integer(id) => Some(*id),
            Token::Guid(_) => None,
        }
    }

    pub fn as_guid(&self) -> Option<Uuid> {
        match self {
            Token::Guid(guid) => Some(*guid),
            Token::Integer(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Guid(guid) => write!(f, "{guid}"),
            Token::Integer(id) => write!(f, "{id}"),
        }
    }
}

/// Parse every recognizable reference in `raw`, in input order
pub fn parse(raw: &str) -> Vec<Token> {
    tokens(raw).collect()
}

/// Lazy form of [`parse`], used where only the first match matters
pub fn tokens(raw: &str) -> impl Iterator<Item = Token> + '_ {
    raw.split(TOKEN_DELIMITERS)
        .filter(|fragment| !fragment.is_empty())
        .filter_map(classify)
}

/// Classify a single delimiter-free fragment
pub fn classify(fragment: &str) -> Option<Token> {
    let value = strip_uri_prefix(fragment);

    if let Ok(guid) = Uuid::try_parse(value) {
        return Some(Token::Guid(guid));
    }

    match value.parse::<EntityId>() {
        Ok(id) if id >= 0 => Some(Token::Integer(id)),
        _ => None,
    }
}

/// Remove a leading `scheme://kind/` from `fragment`, if present
pub fn strip_uri_prefix(fragment: &str) -> &str {
    let Some((scheme, rest)) = fragment.split_once(URI_SCHEME_SEPARATOR) else {
        return fragment;
    };

    if !is_segment(scheme) {
        return fragment;
    }

    match rest.split_once('/') {
        Some((kind, value)) if is_segment(kind) => value,
        _ => fragment,
    }
}

fn is_segment(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
