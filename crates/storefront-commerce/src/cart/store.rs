//! The persisted cart container.

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use storefront_cache::Cache;

use crate::cart::{Cart, LineItem};
use crate::catalog::Product;

/// Version written into every snapshot.
pub const SNAPSHOT_VERSION: u32 = 0;

/// Persisted form of the cart: `{"state":{"items":[...]},"version":0}`.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot<I> {
    state: SnapshotState<I>,
    #[serde(default)]
    version: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotState<I> {
    items: I,
}

/// A cart that saves itself after every change.
///
/// One `CartStore` owns one storage key. It is rehydrated from that key
/// when opened and written back after each mutation, so a fresh store
/// opened on the same storage sees exactly what the last one held.
///
/// Storage failures never reach the caller: they are logged and the
/// in-memory cart stays authoritative for the rest of the session.
///
/// Read access to the cart (quantities, totals) is available through
/// `Deref<Target = Cart>`; all changes go through the methods here.
///
/// # Example
///
/// ```rust,ignore
/// let mut cart = CartStore::open(cache, "cart-storage");
/// cart.add_item(product, 2);
/// println!("Total: {}", cart.total_price());
/// ```
#[derive(Debug)]
pub struct CartStore {
    cart: Cart,
    cache: Cache,
    key: String,
}

impl CartStore {
    /// Open the cart stored under `key`, or an empty one.
    ///
    /// A snapshot that cannot be read or parsed is treated as absent.
    pub fn open(cache: Cache, key: impl Into<String>) -> Self {
        let key = key.into();
        let cart = rehydrate(&cache, &key);

        Self { cart, cache, key }
    }

    /// The storage key this cart owns.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add `quantity` units of a product and persist.
    pub fn add_item(&mut self, product: Product, quantity: u32) {
        let sku = product.sku.clone();
        if self.cart.add_item(product, quantity) {
            tracing::debug!(%sku, quantity, "added to cart");
        }
        self.persist();
    }

    /// Add a single unit of a product and persist.
    pub fn add_one(&mut self, product: Product) {
        self.add_item(product, 1);
    }

    /// Remove the line item with this SKU and persist.
    pub fn remove_item(&mut self, sku: &str) {
        if self.cart.remove_item(sku) {
            tracing::debug!(sku, "removed from cart");
        }
        self.persist();
    }

    /// Set a line item's quantity, removing it at 0 or below, and persist.
    pub fn update_quantity(&mut self, sku: &str, quantity: i64) {
        if self.cart.update_quantity(sku, quantity) {
            tracing::debug!(sku, quantity, "cart quantity updated");
        }
        self.persist();
    }

    /// Empty the cart and erase its stored snapshot.
    ///
    /// If the snapshot cannot be removed, an empty one is written over it so
    /// the cleared items do not come back on the next open.
    pub fn clear_cart(&mut self) {
        self.cart.clear();

        if let Err(error) = self.cache.delete(&self.key) {
            tracing::warn!(key = %self.key, %error, "failed to erase stored cart, overwriting");
            self.persist();
        }
    }

    fn persist(&self) {
        let snapshot = Snapshot {
            state: SnapshotState {
                items: self.cart.items(),
            },
            version: SNAPSHOT_VERSION,
        };

        if let Err(error) = self.cache.set(&self.key, &snapshot) {
            tracing::warn!(key = %self.key, %error, "failed to persist cart");
        }
    }
}

impl Deref for CartStore {
    type Target = Cart;

    fn deref(&self) -> &Cart {
        &self.cart
    }
}

fn rehydrate(cache: &Cache, key: &str) -> Cart {
    match cache.get::<Snapshot<Vec<LineItem>>>(key) {
        Ok(Some(snapshot)) => {
            let cart = Cart::from_items(snapshot.state.items);
            tracing::debug!(key, items = cart.unique_items_count(), "cart rehydrated");
            cart
        }
        Ok(None) => Cart::new(),
        Err(error) => {
            tracing::warn!(key, %error, "discarding unreadable cart snapshot");
            Cart::new()
        }
    }
}
