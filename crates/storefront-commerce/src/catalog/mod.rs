//! Product catalog module.
//!
//! Read-only records supplied by the catalog service. The cart stores
//! snapshots of these and reads their pricing fields on demand.

mod category;
mod product;

pub use category::Category;
pub use product::{DisplayPrice, Product, ProductImage};
