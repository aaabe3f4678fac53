//! # Resolver Configuration
//!
//! Layered configuration: built-in defaults, then an optional file (YAML,
//! TOML or JSON, picked by extension), then environment variables prefixed
//! with `CONTENT_RESOLVER`, nested with `__`:
//!
//! ```text
//! CONTENT_RESOLVER__GUID_CACHE__ENABLED=false
//! CONTENT_RESOLVER__GUID_CACHE__EVICT_STALE_ENTRIES=true
//! ```

use crate::error::{ResolverError, Result};
use crate::guid_cache::GuidLookupTable;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "CONTENT_RESOLVER";

/// Upper bound on the capacity a lookup table may pre-allocate
pub const MAX_INITIAL_CAPACITY: usize = 1 << 20;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub guid_cache: GuidCacheConfig,
}

/// Behavior of the GUID → id memoization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuidCacheConfig {
    /// Remember GUID → id answers from the fallback query
    pub enabled: bool,
    /// Capacity to pre-allocate for each lookup table
    pub initial_capacity: usize,
    /// Remove a remembered mapping when its id no longer fetches
    pub evict_stale_entries: bool,
}

impl Default for GuidCacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            initial_capacity: 64,
            evict_stale_entries: false,
        }
    }
}

impl GuidCacheConfig {
    /// Build an empty lookup table sized by this configuration
    pub fn build_table(&self) -> GuidLookupTable {
        GuidLookupTable::with_capacity(self.initial_capacity)
    }
}

impl ResolverConfig {
    /// Load from defaults and `CONTENT_RESOLVER__*` environment variables
    pub fn from_environment() -> Result<Self> {
        Self::load(None)
    }

    /// Load from defaults, an optional file, and environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = GuidCacheConfig::default();

        let mut builder = config::Config::builder()
            .set_default("guid_cache.enabled", defaults.enabled)?
            .set_default("guid_cache.initial_capacity", defaults.initial_capacity as i64)?
            .set_default("guid_cache.evict_stale_entries", defaults.evict_stale_entries)?;

        if let Some(path) = path {
            info!("Loading resolver configuration from: {}", path.display());
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config: ResolverConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.guid_cache.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ResolverError::Configuration(format!(
                "guid_cache.initial_capacity {} exceeds limit of {}",
                self.guid_cache.initial_capacity, MAX_INITIAL_CAPACITY
            )));
        }

        if !self.guid_cache.enabled && self.guid_cache.evict_stale_entries {
            warn!("GUID cache is disabled - evict_stale_entries has no effect");
        }

        if !self.guid_cache.enabled && self.guid_cache.initial_capacity > 0 {
            warn!("GUID cache is disabled - initial_capacity only reserves unused memory");
        }

        Ok(())
    }

    /// Log current configuration for debugging
    pub fn log_configuration(&self) {
        info!("Resolver Configuration:");
        info!("  GUID Cache Enabled: {}", self.guid_cache.enabled);
        info!(
            "  GUID Cache Initial Capacity: {}",
            self.guid_cache.initial_capacity
        );
        info!(
            "  GUID Cache Evict Stale Entries: {}",
            self.guid_cache.evict_stale_entries
        );
    }
}
