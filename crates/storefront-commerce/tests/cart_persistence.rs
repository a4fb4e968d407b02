//! Cart behaviour across simulated restarts.

use std::sync::Arc;

use storefront_cache::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore, StorageConfig};
use storefront_commerce::prelude::*;

const KEY: &str = "cart-storage";

fn product_a() -> Product {
    Product::new("A", "Kettle", Money::new(1000)).with_discount(Money::new(800), 20)
}

fn product_b() -> Product {
    Product::new("B", "Mug", Money::new(500))
}

fn memory_cache() -> Cache {
    Cache::new(Arc::new(MemoryStore::new()))
}

#[test]
fn concrete_scenario_totals() {
    let mut cart = CartStore::open(memory_cache(), KEY);
    cart.add_item(product_a(), 1);
    cart.add_item(product_b(), 2);

    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.unique_items_count(), 2);
    assert_eq!(cart.total_price(), Money::new(1800));
    assert_eq!(cart.total_original_price(), Money::new(2000));
    assert_eq!(cart.total_discount(), Money::new(200));
    assert_eq!(cart.total_discount_percent(), 10);
}

#[test]
fn merge_by_sku_survives_restart() {
    let cache = memory_cache();
    let mut cart = CartStore::open(cache.clone(), KEY);
    cart.add_item(product_a(), 2);
    cart.add_item(product_a(), 3);

    let restored = CartStore::open(cache, KEY);
    assert_eq!(restored.unique_items_count(), 1);
    assert_eq!(restored.item_quantity("A"), 5);
}

#[test]
fn order_survives_restart() {
    let cache = memory_cache();
    let mut cart = CartStore::open(cache.clone(), KEY);
    cart.add_item(product_b(), 1);
    cart.add_item(product_a(), 1);

    let restored = CartStore::open(cache, KEY);
    let skus: Vec<&str> = restored.items().iter().map(|i| i.sku().as_str()).collect();
    assert_eq!(skus, ["B", "A"]);
}

#[test]
fn clear_cart_erases_durable_snapshot() {
    let cache = memory_cache();
    let mut cart = CartStore::open(cache.clone(), KEY);
    cart.add_item(product_a(), 1);
    cart.add_item(product_b(), 2);
    cart.clear_cart();

    let restored = CartStore::open(cache.clone(), KEY);
    assert!(restored.items().is_empty());
    assert!(!cache.exists(KEY).unwrap());
}

#[test]
fn stored_snapshot_keeps_old_prices() {
    let cache = memory_cache();
    let mut cart = CartStore::open(cache.clone(), KEY);
    cart.add_item(product_b(), 1);

    // The catalog raising the price later does not touch the stored line.
    cart.add_item(Product::new("B", "Mug", Money::new(700)), 1);

    let restored = CartStore::open(cache, KEY);
    assert_eq!(restored.total_price(), Money::new(1000));
}

#[test]
fn fractional_prices_survive_restart() {
    let product: Product = serde_json::from_str(
        r#"{"sku":"T","name":"Tea","price":999,"discountPrecent":15,"discountedPrice":849.15}"#,
    )
    .unwrap();

    let cache = memory_cache();
    let mut cart = CartStore::open(cache.clone(), KEY);
    cart.add_item(product, 2);

    let restored = CartStore::open(cache, KEY);
    assert_eq!(restored.total_price(), Money::from_cents(169830));
    assert_eq!(restored.total_discount(), Money::from_cents(29970));
    assert_eq!(restored.total_discount_percent(), 15);
    assert_eq!(restored.total_price().to_string(), "1 698,30");
}

#[test]
fn clear_after_failed_delete_stays_cleared() {
    #[derive(Debug)]
    struct NoRemove(MemoryStore);

    impl KeyValueStore for NoRemove {
        fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
            self.0.set(key, value)
        }

        fn remove(&self, _key: &str) -> Result<(), CacheError> {
            Err(CacheError::StoreError("read-only".to_string()))
        }
    }

    let cache = Cache::new(Arc::new(NoRemove(MemoryStore::new())));
    let mut cart = CartStore::open(cache.clone(), KEY);
    cart.add_item(product_a(), 2);
    cart.clear_cart();

    assert!(CartStore::open(cache, KEY).is_empty());
}

#[test]
fn file_store_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = FileStore::open(dir.path()).unwrap();
        let mut cart = CartStore::open(Cache::new(Arc::new(store)), KEY);
        cart.add_item(product_a(), 1);
        cart.add_item(product_b(), 2);
        cart.update_quantity("B", 4);
    }

    let store = FileStore::open(dir.path()).unwrap();
    let mut cart = CartStore::open(Cache::new(Arc::new(store)), KEY);
    assert_eq!(cart.item_quantity("A"), 1);
    assert_eq!(cart.item_quantity("B"), 4);
    assert_eq!(cart.total_price(), Money::new(2800));

    cart.clear_cart();
    assert!(!dir.path().join("cart-storage.json").exists());
}

#[test]
fn storefront_session_restart_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorefrontConfig {
        storage: StorageConfig::default().with_dir(dir.path()),
        ..StorefrontConfig::default()
    };

    let mut session = Storefront::open(config.clone());
    session.cart_mut().add_item(product_a(), 2);
    session.view_product(product_b());
    drop(session);

    let session = Storefront::open(config);
    assert_eq!(session.cart().item_quantity("A"), 2);
    assert_eq!(session.recently_viewed().products()[0].sku.as_str(), "B");
}

#[test]
fn checkout_clears_persisted_cart() {
    struct Accepting;

    impl OrderSubmitter for Accepting {
        fn create_order(
            &self,
            request: &CreateOrderRequest,
        ) -> Result<CreateOrderResponse, CommerceError> {
            assert_eq!(request.products.len(), 2);
            Ok(CreateOrderResponse {
                order_id: Some(OrderId::new("A-100")),
                ..CreateOrderResponse::default()
            })
        }
    }

    let cache = memory_cache();
    let mut cart = CartStore::open(cache.clone(), KEY);
    cart.add_item(product_a(), 1);
    cart.add_item(product_b(), 1);

    let contact = ContactDetails {
        first_name: "Aibek".to_string(),
        phone_number: "+996 (555) 12-34-56".to_string(),
        delivery_address: "Bishkek".to_string(),
        ..ContactDetails::default()
    };

    let order_id = checkout(&mut cart, contact, None, &Accepting).unwrap();

    assert_eq!(order_id.as_str(), "A-100");
    assert!(CartStore::open(cache, KEY).is_empty());
}
