//! # Form Draft
//!
//! Raw-text staging area for an open product form.
//!
//! Fields are kept as strings so partially typed values ("", "9.") can live in
//! the form. Quantity and price edits go through the keystroke masks; an edit
//! that fails its mask is dropped and the previous value stays.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;
use crate::validation::{is_valid_price_input, is_valid_quantity_input};

/// Editable fields of a product, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormDraft {
    pub name: String,
    pub quantity: String,
    pub price: String,
}

impl FormDraft {
    /// Creates an empty draft (add form).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a draft pre-filled from an existing product (edit form).
    pub fn from_product(product: &Product) -> Self {
        FormDraft {
            name: product.name.clone(),
            quantity: product.quantity.to_string(),
            price: product.price.to_string(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replaces the quantity text if it passes the quantity mask.
    ///
    /// Returns whether the edit was accepted.
    pub fn set_quantity(&mut self, text: &str) -> bool {
        if !is_valid_quantity_input(text) {
            return false;
        }
        self.quantity = text.to_string();
        true
    }

    /// Replaces the price text if it passes the price mask.
    ///
    /// Returns whether the edit was accepted.
    pub fn set_price(&mut self, text: &str) -> bool {
        if !is_valid_price_input(text) {
            return false;
        }
        self.price = text.to_string();
        true
    }

    /// Resets every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.quantity.is_empty() && self.price.is_empty()
    }
}
