//! Checkout module.
//!
//! Turns the cart into an order request, hands it to the order service and
//! clears the cart once the order exists.

mod contact;
mod order;

pub use contact::{
    format_phone_number, is_valid_email, is_valid_phone, ContactDetails, PHONE_PREFIX,
};
pub use order::{
    checkout, order_products, CreateOrderRequest, CreateOrderResponse, OrderProduct, OrderSubmitter,
};
