//! Cart pricing calculations.
//!
//! Everything here is derived from the stored line items on every call.
//! Nothing is cached, so a total always reflects the product snapshots the
//! cart currently holds.

use crate::cart::LineItem;
use crate::money::Money;

/// Sum of all quantities.
pub fn total_items(items: &[LineItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity())).sum()
}

/// Sum of effective unit price times quantity.
pub fn total_price(items: &[LineItem]) -> Money {
    items.iter().map(LineItem::subtotal).sum()
}

/// Sum of undiscounted unit price times quantity.
pub fn total_original_price(items: &[LineItem]) -> Money {
    items.iter().map(LineItem::original_subtotal).sum()
}

/// Amount saved through catalog discounts.
pub fn total_discount(items: &[LineItem]) -> Money {
    total_original_price(items) - total_price(items)
}

/// Savings as a whole percentage of the undiscounted total.
pub fn total_discount_percent(items: &[LineItem]) -> u32 {
    total_discount(items).percent_of(total_original_price(items))
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of all quantities.
    pub total_items: u64,
    /// Number of distinct line items.
    pub unique_items: usize,
    /// What the customer pays.
    pub total_price: Money,
    /// What the customer would pay without discounts.
    pub total_original_price: Money,
    /// `total_original_price - total_price`.
    pub total_discount: Money,
    /// Discount as a rounded percentage of the original total.
    pub total_discount_percent: u32,
}

impl CartTotals {
    /// Compute all totals in one pass over the items.
    pub fn of(items: &[LineItem]) -> Self {
        let (total_items, total_price, total_original_price) = items.iter().fold(
            (0u64, Money::zero(), Money::zero()),
            |(count, price, original), item| {
                (
                    count + u64::from(item.quantity()),
                    price + item.subtotal(),
                    original + item.original_subtotal(),
                )
            },
        );
        let total_discount = total_original_price - total_price;

        Self {
            total_items,
            unique_items: items.len(),
            total_price,
            total_original_price,
            total_discount,
            total_discount_percent: total_discount.percent_of(total_original_price),
        }
    }

    /// Check if any discounts are applied.
    pub fn has_discounts(&self) -> bool {
        self.total_discount.is_positive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn items() -> Vec<LineItem> {
        vec![
            LineItem::new(
                Product::new("A", "Kettle", Money::new(1000)).with_discount(Money::new(800), 20),
                1,
            ),
            LineItem::new(Product::new("B", "Mug", Money::new(500)), 2),
        ]
    }

    #[test]
    fn test_totals() {
        let items = items();

        assert_eq!(total_items(&items), 3);
        assert_eq!(total_price(&items), Money::new(1800));
        assert_eq!(total_original_price(&items), Money::new(2000));
        assert_eq!(total_discount(&items), Money::new(200));
        assert_eq!(total_discount_percent(&items), 10);
    }

    #[test]
    fn test_cart_totals_matches_individual_functions() {
        let items = items();
        let totals = CartTotals::of(&items);

        assert_eq!(totals.total_items, total_items(&items));
        assert_eq!(totals.unique_items, 2);
        assert_eq!(totals.total_price, total_price(&items));
        assert_eq!(totals.total_original_price, total_original_price(&items));
        assert_eq!(totals.total_discount, total_discount(&items));
        assert_eq!(totals.total_discount_percent, total_discount_percent(&items));
        assert!(totals.has_discounts());
    }

    #[test]
    fn test_empty_totals() {
        let totals = CartTotals::of(&[]);

        assert_eq!(totals.total_items, 0);
        assert_eq!(totals.total_price, Money::zero());
        assert_eq!(totals.total_discount_percent, 0);
        assert!(!totals.has_discounts());
    }

    #[test]
    fn test_no_discount_means_zero_percent() {
        let items = vec![LineItem::new(Product::new("B", "Mug", Money::new(500)), 4)];

        assert_eq!(total_discount(&items), Money::zero());
        assert_eq!(total_discount_percent(&items), 0);
    }
}
