//! Shopping cart module.
//!
//! `Cart` is the plain state and its derived totals; `CartStore` wraps it
//! with persistence.

mod cart;
pub mod pricing;
mod store;

pub use cart::{Cart, LineItem};
pub use pricing::CartTotals;
pub use store::{CartStore, SNAPSHOT_VERSION};
