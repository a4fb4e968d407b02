//! Recently viewed products.

use storefront_cache::Cache;

use crate::catalog::Product;

/// Default number of products remembered.
pub const DEFAULT_LIMIT: usize = 10;

/// Products the customer opened, newest first.
///
/// Persisted like the cart: the whole list under one key, rewritten on
/// every change, dropped if it cannot be read back.
#[derive(Debug)]
pub struct RecentlyViewed {
    products: Vec<Product>,
    cache: Cache,
    key: String,
    limit: usize,
}

impl RecentlyViewed {
    /// Load the list stored under `key`.
    pub fn open(cache: Cache, key: impl Into<String>, limit: usize) -> Self {
        let key = key.into();
        let mut products = match cache.get::<Vec<Product>>(&key) {
            Ok(products) => products.unwrap_or_default(),
            Err(error) => {
                tracing::warn!(key = %key, %error, "discarding unreadable recently viewed list");
                Vec::new()
            }
        };
        products.truncate(limit);

        Self {
            products,
            cache,
            key,
            limit,
        }
    }

    /// Products, most recent first.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Check if nothing has been viewed.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Record a view. The product moves to the front, replacing any older
    /// entry with the same SKU; the oldest entries fall off past the limit.
    pub fn record(&mut self, product: Product) {
        self.products.retain(|p| p.sku != product.sku);
        self.products.insert(0, product);
        self.products.truncate(self.limit);

        if let Err(error) = self.cache.set(&self.key, &self.products) {
            tracing::warn!(key = %self.key, %error, "failed to persist recently viewed list");
        }
    }

    /// Forget everything, including the stored list.
    pub fn clear(&mut self) {
        self.products.clear();

        if let Err(error) = self.cache.delete(&self.key) {
            tracing::warn!(key = %self.key, %error, "failed to erase recently viewed list");
        }
    }
}
