//! Synchronous key-value storage for the storefront.
//!
//! Provides the string store contract used to persist client-side state,
//! three adapters for it, and a typed `Cache` with automatic JSON
//! serialization.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_cache::{open_store, Cache, StorageConfig};
//!
//! let cache = Cache::new(open_store(&StorageConfig::default()));
//!
//! cache.set("cart-storage", &snapshot)?;
//! let snapshot: Option<Snapshot> = cache.get("cart-storage")?;
//! cache.delete("cart-storage")?;
//! ```

mod backend;
mod error;
mod file;
mod kv;
mod store;

pub use backend::{open_store, StorageBackend, StorageConfig};
pub use error::CacheError;
pub use file::FileStore;
pub use kv::Cache;
pub use store::{KeyValueStore, MemoryStore, NoopStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{open_store, Cache, CacheError, KeyValueStore, StorageConfig};
}
