//! Cart and line item types.

use serde::{Deserialize, Serialize};

use crate::cart::pricing::{self, CartTotals};
use crate::catalog::{DisplayPrice, Product};
use crate::ids::Sku;
use crate::money::Money;

/// A line item in the cart.
///
/// Holds a snapshot of the product taken when it was first added, so later
/// catalog changes do not alter what the cart shows. `quantity` is at least
/// 1 for as long as the item is in a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    product: Product,
    quantity: u32,
}

impl LineItem {
    pub(crate) fn new(product: Product, quantity: u32) -> Self {
        debug_assert!(quantity > 0, "line items hold at least one unit");
        Self { product, quantity }
    }

    /// The stored product snapshot.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The product's SKU.
    pub fn sku(&self) -> &Sku {
        &self.product.sku
    }

    /// Number of units.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price resolved from the stored snapshot.
    pub fn display_price(&self) -> DisplayPrice {
        self.product.display_price()
    }

    /// Effective unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.display_price().price * self.quantity
    }

    /// Undiscounted unit price times quantity.
    pub fn original_subtotal(&self) -> Money {
        self.display_price().original_or_price() * self.quantity
    }
}

/// A shopping cart.
///
/// An ordered list of line items, unique by SKU, in the order they were
/// first added. This type holds no storage; see
/// [`CartStore`](crate::cart::CartStore) for the persisted container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from loaded line items.
    ///
    /// Items with zero quantity are dropped and repeated SKUs are merged
    /// into the first occurrence, so the result upholds the cart invariants
    /// whatever the input looked like.
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            cart.add_item(item.product, item.quantity);
        }
        cart
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Add `quantity` units of a product.
    ///
    /// An existing line with the same SKU is incremented in place; its
    /// stored product snapshot is kept. Otherwise a new line is appended.
    /// A quantity of 0 changes nothing. Returns whether the cart changed.
    pub fn add_item(&mut self, product: Product, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }

        if let Some(existing) = self.find_mut(product.sku.as_str()) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return true;
        }

        self.items.push(LineItem::new(product, quantity));
        true
    }

    /// Remove the line item with this SKU. Returns whether one was removed.
    pub fn remove_item(&mut self, sku: &str) -> bool {
        let len_before = self.items.len();
        self.items.retain(|item| item.sku().as_str() != sku);
        self.items.len() < len_before
    }

    /// Set a line item's quantity to exactly `quantity`.
    ///
    /// A quantity of 0 or less removes the item. Unknown SKUs are ignored.
    /// Returns whether the cart changed.
    pub fn update_quantity(&mut self, sku: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(sku);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.find_mut(sku) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Remove all items. Returns whether there was anything to remove.
    pub fn clear(&mut self) -> bool {
        let had_items = !self.items.is_empty();
        self.items.clear();
        had_items
    }

    /// Quantity held for this SKU, or 0.
    pub fn item_quantity(&self, sku: &str) -> u32 {
        self.get_item(sku).map_or(0, LineItem::quantity)
    }

    /// Get an item by SKU.
    pub fn get_item(&self, sku: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.sku().as_str() == sku)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get total item count (sum of quantities).
    pub fn total_items(&self) -> u64 {
        pricing::total_items(&self.items)
    }

    /// Get number of unique items.
    pub fn unique_items_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of effective prices.
    pub fn total_price(&self) -> Money {
        pricing::total_price(&self.items)
    }

    /// Sum of undiscounted prices.
    pub fn total_original_price(&self) -> Money {
        pricing::total_original_price(&self.items)
    }

    /// Amount saved through discounts.
    pub fn total_discount(&self) -> Money {
        pricing::total_discount(&self.items)
    }

    /// Savings as a rounded percentage of the undiscounted total.
    pub fn total_discount_percent(&self) -> u32 {
        pricing::total_discount_percent(&self.items)
    }

    /// All totals at once.
    pub fn totals(&self) -> CartTotals {
        CartTotals::of(&self.items)
    }

    fn find_mut(&mut self, sku: &str) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.sku().as_str() == sku)
    }
}
