#![allow(clippy::doc_markdown)] // Allow technical terms like GUID, UDI in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Content Resolver
//!
//! Resolves the references stored in CMS properties into published items.
//!
//! ## Overview
//!
//! Content and media pickers store their selection as text: a numeric id, a
//! comma separated list of ids, GUID keys, or `umb://document/<guid>` UDIs.
//! This crate parses those values and fetches the referenced items from the
//! host's published cache, optionally mapping each item through a caller
//! supplied transform.
//!
//! ## Architecture
//!
//! ```text
//! raw text ─► token parser ─► entity fetcher ─► host PublishedCache
//!                                  │
//!                                  └─► GUID lookup table (memoized fallback ids)
//! ```
//!
//! The host cache is an explicit dependency of each [`Resolver`]. The GUID
//! lookup table is owned by the resolver (or shared through an `Arc`) and
//! lives as long as the application does.
//!
//! ## Module Organization
//!
//! - [`token`] - Reference token parsing
//! - [`guid_cache`] - GUID → id memoization
//! - [`host`] - Host cache contract
//! - [`fetcher`] - Single-token fetching
//! - [`resolver`] - Public single/collection resolution
//! - [`value`] - Typed property values
//! - [`json`], [`properties`], [`search_keys`] - Resolution helpers
//! - [`config`] - Configuration management
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use content_resolver::test_utils::InMemoryPublishedCache;
//! use content_resolver::{Resolver, ResolverConfig};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ResolverConfig::default();
//! let host = Arc::new(InMemoryPublishedCache::new().with_entities([(1, "Home"), (3, "About")]));
//! let resolver = Resolver::with_config(content_resolver::EntityKind::Content, host, &config);
//!
//! let items = resolver.many("1,2,x,3");
//! assert_eq!(items.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod fetcher;
pub mod guid_cache;
pub mod host;
pub mod json;
pub mod logging;
pub mod properties;
pub mod resolver;
pub mod search_keys;
pub mod test_utils;
pub mod token;
pub mod udi;
pub mod value;

pub use crate::config::{GuidCacheConfig, ResolverConfig};
pub use crate::constants::{EntityId, EntityKind};
pub use crate::error::{ResolverError, Result};
pub use crate::fetcher::EntityFetcher;
pub use crate::guid_cache::{GuidLookupTable, LookupTableStats};
pub use crate::host::PublishedCache;
pub use crate::properties::PropertySource;
pub use crate::resolver::{PublishedResolvers, Resolver};
pub use crate::token::Token;
pub use crate::udi::Udi;
pub use crate::value::PropertyValue;
