//! Per-session storefront state.

use storefront_cache::{open_store, Cache};

use crate::cart::CartStore;
use crate::catalog::Product;
use crate::config::StorefrontConfig;
use crate::recently_viewed::RecentlyViewed;

/// Everything one client session keeps: its cart and its recently viewed
/// products, both backed by the same store.
///
/// Construct one per session and pass it to whatever needs the cart; there
/// is no global instance.
#[derive(Debug)]
pub struct Storefront {
    config: StorefrontConfig,
    cart: CartStore,
    recently_viewed: RecentlyViewed,
}

impl Storefront {
    /// Open the store described by `config` and rehydrate the session.
    pub fn open(config: StorefrontConfig) -> Self {
        let cache = Cache::new(open_store(&config.storage));
        Self::with_cache(config, cache)
    }

    /// Rehydrate the session from an already opened cache.
    pub fn with_cache(config: StorefrontConfig, cache: Cache) -> Self {
        if !cache.is_durable() {
            tracing::info!("storefront state will not survive a restart");
        }

        let cart = CartStore::open(cache.clone(), config.storage.cart_key.clone());
        let recently_viewed = RecentlyViewed::open(
            cache,
            config.storage.recently_viewed_key.clone(),
            config.catalog.recently_viewed_limit,
        );

        Self {
            config,
            cart,
            recently_viewed,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// The cart.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The cart, for changes.
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// Recently viewed products.
    pub fn recently_viewed(&self) -> &RecentlyViewed {
        &self.recently_viewed
    }

    /// Record that a product page was opened.
    pub fn view_product(&mut self, product: Product) {
        self.recently_viewed.record(product);
    }

    /// Cover image URL of a product under the configured catalog API.
    pub fn image_url(&self, product: &Product) -> Option<String> {
        product.image_url(&self.config.catalog.api_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductImage;
    use crate::money::Money;

    #[test]
    fn test_cart_and_recently_viewed_share_cache() {
        let cache = Cache::in_memory();
        let config = StorefrontConfig::default();

        let mut session = Storefront::with_cache(config.clone(), cache.clone());
        let product = Product::new("A", "Kettle", Money::new(1000));
        session.view_product(product.clone());
        session.cart_mut().add_one(product);

        let restored = Storefront::with_cache(config, cache);
        assert_eq!(restored.cart().item_quantity("A"), 1);
        assert_eq!(restored.recently_viewed().products().len(), 1);
    }

    #[test]
    fn test_image_url_uses_configured_api() {
        let mut config = StorefrontConfig::default();
        config.catalog.api_url = "https://shop.example/api".to_string();
        let session = Storefront::with_cache(config, Cache::in_memory());

        let product =
            Product::new("A", "Kettle", Money::new(1)).with_image(ProductImage::new("img"));
        assert_eq!(
            session.image_url(&product).as_deref(),
            Some("https://shop.example/api/storage/product/images/img")
        );
    }
}
