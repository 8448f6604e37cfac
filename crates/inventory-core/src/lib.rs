//! # inventory-core: Pure Domain Logic for the Inventory Client
//!
//! Types and validation rules shared by every inventory front end. Nothing in
//! this crate performs I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Inventory Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Front End (CLI, web page)                      │   │
//! │  │    Inventory list ──► Add form ──► Edit form ──► Delete confirm │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 inventory-client                                │   │
//! │  │   ProductApi (HTTP) • NotificationController • FormController  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ inventory-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌──────────────┐  ┌─────────┐  │   │
//! │  │   │   types   │  │   draft   │  │  validation  │  │  error  │  │   │
//! │  │   │  Product  │  │ FormDraft │  │  masks and   │  │         │  │   │
//! │  │   │  Notice   │  │           │  │  submission  │  │         │  │   │
//! │  │   └───────────┘  └───────────┘  └──────────────┘  └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO TIMERS • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product and Notification
//! - [`draft`] - FormDraft, the raw-text staging area of an open form
//! - [`validation`] - Keystroke masks and submission validation
//! - [`error`] - Validation error type
//!
//! ## Example Usage
//!
//! ```rust
//! use inventory_core::validation::{is_valid_price_input, validate_submission};
//!
//! assert!(is_valid_price_input("9.9"));
//! assert!(!is_valid_price_input("9.999"));
//!
//! let submission = validate_submission("3", "2.50").unwrap();
//! assert_eq!(submission.quantity, 3.0);
//! assert_eq!(submission.price, 2.5);
//! ```

pub mod draft;
pub mod error;
pub mod types;
pub mod validation;

pub use draft::FormDraft;
pub use error::ValidationError;
pub use types::*;

/// Message shown when quantity or price fail submission validation.
pub const INVALID_NUMBERS_MESSAGE: &str = "Please enter valid numbers for quantity and price.";
