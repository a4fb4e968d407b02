//! Client-side commerce logic for the storefront.
//!
//! This crate provides:
//!
//! - **Catalog**: product and category records with display price resolution
//! - **Cart**: line items keyed by SKU, derived totals, and a persisted
//!   `CartStore` that rehydrates on start
//! - **Checkout**: contact validation and the order hand-off
//! - **Recently viewed**: a persisted, capped history of opened products
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_commerce::prelude::*;
//!
//! let mut session = Storefront::open(StorefrontConfig::load("storefront.toml")?);
//!
//! let kettle = Product::new("KETTLE-01", "Kettle", Money::new(1000))
//!     .with_discount(Money::new(800), 20);
//! session.cart_mut().add_item(kettle, 2);
//!
//! let cart = session.cart();
//! println!("Total: {} (saved {}%)", cart.total_price(), cart.total_discount_percent());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod recently_viewed;
mod storefront;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CommerceError, FieldError};
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Category, DisplayPrice, Product, ProductImage};

    // Cart
    pub use crate::cart::{Cart, CartStore, CartTotals, LineItem};

    // Checkout
    pub use crate::checkout::{
        checkout, ContactDetails, CreateOrderRequest, CreateOrderResponse, OrderProduct,
        OrderSubmitter,
    };

    pub use crate::config::StorefrontConfig;
    pub use crate::recently_viewed::RecentlyViewed;
    pub use crate::Storefront;
}
