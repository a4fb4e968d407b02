//! Storage configuration and capability-checked store construction.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{FileStore, KeyValueStore, MemoryStore, NoopStore};

/// Which adapter backs the storefront's persisted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Durable files on disk, falling back to memory if unavailable.
    #[default]
    File,
    /// Process-local memory only.
    Memory,
    /// Keep nothing.
    None,
}

/// Storage section of the storefront configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Adapter to use.
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for the file backend.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Key holding the cart snapshot.
    #[serde(default = "default_cart_key")]
    pub cart_key: String,

    /// Key holding the recently viewed products.
    #[serde(default = "default_recently_viewed_key")]
    pub recently_viewed_key: String,
}

fn default_dir() -> PathBuf {
    PathBuf::from(".storefront")
}

fn default_cart_key() -> String {
    "cart-storage".to_string()
}

fn default_recently_viewed_key() -> String {
    "recently-viewed-products".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            dir: default_dir(),
            cart_key: default_cart_key(),
            recently_viewed_key: default_recently_viewed_key(),
        }
    }
}

impl StorageConfig {
    /// Configuration for a process-local store.
    pub fn in_memory() -> Self {
        Self {
            backend: StorageBackend::Memory,
            ..Self::default()
        }
    }

    /// Set the file backend directory.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.backend = StorageBackend::File;
        self.dir = dir.into();
        self
    }
}

/// Build the store described by `config`.
///
/// The file backend is probed once here. If the directory cannot be used
/// the store degrades to [`MemoryStore`]: state then lives for the process
/// only, but every caller still gets a working store.
pub fn open_store(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
    match config.backend {
        StorageBackend::File => match FileStore::open(&config.dir) {
            Ok(store) => {
                tracing::debug!(dir = %config.dir.display(), "opened durable storage");
                Arc::new(store)
            }
            Err(error) => {
                tracing::warn!(
                    dir = %config.dir.display(),
                    %error,
                    "durable storage unavailable, falling back to memory"
                );
                Arc::new(MemoryStore::new())
            }
        },
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::None => Arc::new(NoopStore),
    }
}
