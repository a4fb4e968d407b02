//! Storefront configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use storefront_cache::StorageConfig;

use crate::error::CommerceError;
use crate::recently_viewed::DEFAULT_LIMIT;

/// Storefront configuration file.
///
/// ```toml
/// [storage]
/// backend = "file"
/// dir = ".storefront"
///
/// [catalog]
/// api_url = "https://shop.example.kg/api"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Where client-side state is kept.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Catalog service settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl StorefrontConfig {
    /// Load config from a file. `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CommerceError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| {
                CommerceError::ConfigError(format!("failed to parse {}: {e}", path.display()))
            })
        } else {
            Self::from_toml(&content)
        }
    }

    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, CommerceError> {
        toml::from_str(content).map_err(|e| CommerceError::ConfigError(e.to_string()))
    }
}

/// Catalog service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the catalog API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// How many recently viewed products to remember.
    #[serde(default = "default_recently_viewed_limit")]
    pub recently_viewed_limit: usize,
}

fn default_api_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_recently_viewed_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            recently_viewed_limit: default_recently_viewed_limit(),
        }
    }
}
