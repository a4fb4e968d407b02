//! Product records and price resolution.

use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::ids::{ImageId, Sku};
use crate::money::Money;

/// An image attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    /// Storage id of the image.
    pub id: ImageId,
    /// Name of the uploaded file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    /// MIME type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

impl ProductImage {
    /// Create an image reference from its id.
    pub fn new(id: impl Into<ImageId>) -> Self {
        Self {
            id: id.into(),
            original_name: None,
            mime_type: None,
            file_size: None,
        }
    }
}

/// A product in the catalog.
///
/// Field names follow the catalog service's JSON, including its
/// `discountPrecent` spelling. Fields the storefront does not interpret are
/// kept in `attributes` so a stored snapshot round-trips unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stock keeping unit (unique).
    pub sku: Sku,
    /// Product name.
    pub name: String,
    /// URL-friendly slug (unique).
    #[serde(default)]
    pub slug: String,
    /// Base unit price.
    pub price: Money,
    /// Price after the catalog discount, if any.
    #[serde(default)]
    pub discounted_price: Option<Money>,
    /// Discount percentage, 0-100.
    #[serde(default, rename = "discountPrecent")]
    pub discount_percent: Option<u8>,
    /// Product images, first one is the cover.
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Whether the product can currently be bought.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Category the product is listed under.
    #[serde(default)]
    pub category: Category,
    /// Descriptive fields passed through untouched.
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

fn default_in_stock() -> bool {
    true
}

/// The price a customer sees for one unit of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPrice {
    /// Effective unit price.
    pub price: Money,
    /// Undiscounted price, present only when a discount applies.
    pub original_price: Option<Money>,
    /// Discount percentage, present only when a discount applies.
    pub discount_percent: Option<u8>,
}

impl DisplayPrice {
    /// The undiscounted unit price.
    pub fn original_or_price(&self) -> Money {
        self.original_price.unwrap_or(self.price)
    }

    /// Check if a discount applies.
    pub fn is_discounted(&self) -> bool {
        self.original_price.is_some()
    }
}

impl Product {
    /// Create an in-stock product with no discount.
    pub fn new(sku: impl Into<Sku>, name: impl Into<String>, price: Money) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            slug: String::new(),
            price,
            discounted_price: None,
            discount_percent: None,
            images: Vec::new(),
            in_stock: true,
            category: Category::default(),
            attributes: serde_json::Map::new(),
        }
    }

    /// Set the catalog discount.
    pub fn with_discount(mut self, discounted_price: Money, percent: u8) -> Self {
        self.discounted_price = Some(discounted_price);
        self.discount_percent = Some(percent);
        self
    }

    /// Set the slug.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Append an image.
    pub fn with_image(mut self, image: ProductImage) -> Self {
        self.images.push(image);
        self
    }

    /// Resolve the price shown to the customer.
    ///
    /// The discounted price applies only when the percentage is positive and
    /// the discounted price is positive and not above the base price. Any
    /// other combination falls back to the base price with no discount pair.
    pub fn display_price(&self) -> DisplayPrice {
        match (self.discounted_price, self.discount_percent) {
            (Some(discounted), Some(percent))
                if percent > 0 && discounted.is_positive() && discounted <= self.price =>
            {
                DisplayPrice {
                    price: discounted,
                    original_price: Some(self.price),
                    discount_percent: Some(percent),
                }
            }
            _ => DisplayPrice {
                price: self.price,
                original_price: None,
                discount_percent: None,
            },
        }
    }

    /// Id of the cover image.
    pub fn first_image_id(&self) -> Option<&ImageId> {
        self.images.first().map(|image| &image.id)
    }

    /// URL of the cover image under the catalog API.
    pub fn image_url(&self, api_url: &str) -> Option<String> {
        self.first_image_id().map(|id| {
            format!(
                "{}/storage/product/images/{}",
                api_url.trim_end_matches('/'),
                id
            )
        })
    }
}
