//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing an order id where a SKU is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Stock keeping unit. The sole identity of a product in the cart.
    Sku
);
define_id!(
    /// Order id assigned by the order service.
    OrderId
);
define_id!(
    /// Catalog image id.
    ImageId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = Sku::new("SKU-123");
        assert_eq!(id.as_str(), "SKU-123");
    }

    #[test]
    fn test_id_from_string() {
        let id: Sku = "SKU-456".into();
        assert_eq!(id.as_str(), "SKU-456");
    }

    #[test]
    fn test_id_display() {
        let id = OrderId::new("order-789");
        assert_eq!(format!("{}", id), "order-789");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = Sku::new("A-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""A-1""#);

        let back: Sku = serde_json::from_str(r#""A-1""#).unwrap();
        assert_eq!(back, id);
    }
}
