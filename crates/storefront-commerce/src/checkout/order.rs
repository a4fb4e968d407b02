//! Order submission.

use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartStore};
use crate::checkout::ContactDetails;
use crate::error::CommerceError;
use crate::ids::{OrderId, Sku};

/// One ordered product: the cart's SKU and quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderProduct {
    /// Product SKU.
    pub sku: Sku,
    /// Units ordered.
    pub count: u32,
}

/// Body of the order-creation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Customer first name.
    pub first_name: String,
    /// Customer last name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Phone in `+996 (XXX) XX-XX-XX` form.
    pub phone_number: String,
    /// Customer email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Where to deliver.
    pub delivery_address: String,
    /// Snapshot of the cart.
    pub products: Vec<OrderProduct>,
    /// Free-form note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl CreateOrderRequest {
    /// Build a request from contact details and the cart's current items.
    ///
    /// Blank optional fields are left out rather than sent empty.
    pub fn new(contact: ContactDetails, cart: &Cart, comment: Option<String>) -> Self {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        Self {
            first_name: contact.first_name.trim().to_string(),
            last_name: non_blank(contact.last_name),
            phone_number: contact.phone_number,
            email: non_blank(contact.email),
            delivery_address: contact.delivery_address.trim().to_string(),
            products: order_products(cart),
            comment: non_blank(comment),
        }
    }
}

/// The cart as `{ sku, count }` pairs, in cart order.
pub fn order_products(cart: &Cart) -> Vec<OrderProduct> {
    cart.items()
        .iter()
        .map(|item| OrderProduct {
            sku: item.sku().clone(),
            count: item.quantity(),
        })
        .collect()
}

/// Reply of the order-creation call.
///
/// An order exists only if `order_id` is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    /// Id of the created order.
    #[serde(default)]
    pub order_id: Option<OrderId>,
    /// Products the service recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<OrderProduct>>,
    /// Explicit success flag, when the service sends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Server message, usually explaining a failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The external order-creation service.
pub trait OrderSubmitter {
    /// Send the order.
    ///
    /// A reply without an order id means the order was refused; transport
    /// failures should be reported as [`CommerceError::OrderService`].
    fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse, CommerceError>;
}

/// Place an order for everything in the cart.
///
/// Validates the contact details, submits the cart snapshot, and clears the
/// cart (including its stored snapshot) only once the service returns an
/// order id. On any failure the cart is left untouched.
pub fn checkout<S: OrderSubmitter + ?Sized>(
    cart: &mut CartStore,
    contact: ContactDetails,
    comment: Option<String>,
    submitter: &S,
) -> Result<OrderId, CommerceError> {
    if cart.is_empty() {
        return Err(CommerceError::EmptyCart);
    }

    contact.validate()?;

    let request = CreateOrderRequest::new(contact, cart.cart(), comment);
    tracing::info!(
        products = request.products.len(),
        total = %cart.total_price(),
        "submitting order"
    );

    let response = submitter.create_order(&request)?;

    match response.order_id {
        Some(order_id) => {
            tracing::info!(%order_id, "order created");
            cart.clear_cart();
            Ok(order_id)
        }
        None => {
            let message = response
                .message
                .unwrap_or_else(|| "order service returned no order id".to_string());
            tracing::warn!(%message, "order rejected");
            Err(CommerceError::OrderRejected(message))
        }
    }
}
