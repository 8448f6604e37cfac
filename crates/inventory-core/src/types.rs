//! # Domain Types
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌─────────────────────┐  │
//! │  │    Product      │   │   Notification   │   │  NotificationKind   │  │
//! │  │  ─────────────  │   │  ──────────────  │   │  ─────────────────  │  │
//! │  │  id (UUID)      │   │  text            │   │  Success            │  │
//! │  │  name           │   │  kind            │   │  Failure            │  │
//! │  │  quantity       │   └──────────────────┘   └─────────────────────┘  │
//! │  │  price          │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Shape
//! Products travel as `{ "id", "productname", "quantity", "price" }`. The
//! legacy `"product name"` key is not accepted.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// =============================================================================
// Product
// =============================================================================

/// A product held by the inventory backend.
///
/// The backend owns products; clients only hold copies fetched per page load
/// or returned from a mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier, generated by the client at creation (UUID v4).
    pub id: String,

    /// Display name.
    #[serde(rename = "productname")]
    pub name: String,

    /// Units in stock.
    pub quantity: u32,

    /// Unit price, at most two fractional digits.
    pub price: f64,
}

impl Product {
    /// Creates a product with a freshly generated ID.
    pub fn new(name: impl Into<String>, quantity: u32, price: f64) -> Self {
        Product {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Price as shown in the inventory table, e.g. `$9.99`.
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

// =============================================================================
// Notification
// =============================================================================

/// Whether a notification reports a success or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Failure,
}

/// A transient message shown after an operation completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
}

impl Notification {
    /// Creates a success notification.
    pub fn success(text: impl Into<String>) -> Self {
        Notification {
            text: text.into(),
            kind: NotificationKind::Success,
        }
    }

    /// Creates a failure notification.
    pub fn failure(text: impl Into<String>) -> Self {
        Notification {
            text: text.into(),
            kind: NotificationKind::Failure,
        }
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        self.kind == NotificationKind::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_shape() {
        let product = Product {
            id: "abc".to_string(),
            name: "Widget".to_string(),
            quantity: 5,
            price: 9.99,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "abc",
                "productname": "Widget",
                "quantity": 5,
                "price": 9.99
            })
        );
    }

    #[test]
    fn test_legacy_product_name_key_rejected() {
        let body = r#"{"id":"1","product name":"Widget","quantity":1,"price":2.0}"#;
        assert!(serde_json::from_str::<Product>(body).is_err());
    }

    #[test]
    fn test_new_product_gets_uuid() {
        let product = Product::new("Widget", 5, 9.99);
        assert!(Uuid::parse_str(&product.id).is_ok());
        assert_ne!(product.id, Product::new("Widget", 5, 9.99).id);
    }

    #[test]
    fn test_display_price() {
        assert_eq!(Product::new("A", 1, 9.5).display_price(), "$9.50");
        assert_eq!(Product::new("A", 1, 12.0).display_price(), "$12.00");
    }

    #[test]
    fn test_notification_kind() {
        assert!(Notification::failure("Failed to add product").is_failure());
        assert!(!Notification::success("Product added successfully").is_failure());
    }
}
