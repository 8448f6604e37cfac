//! # inventory-client: REST Client and Form Controllers
//!
//! The I/O half of the inventory front end: the HTTP client for the
//! `/products` resource, the transient notification slot, and the product form
//! state machine tying them together.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Product Form Submission                             │
//! │                                                                         │
//! │   submit()                                                              │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  ┌──────────┐  invalid   ┌────────────────────────┐                     │
//! │  │Validating│──────────► │ NotificationController │ ◄──────────┐        │
//! │  └────┬─────┘            │  show(text, kind)      │            │        │
//! │       │ valid            │  clear after 1500ms    │            │        │
//! │       ▼                  └────────────────────────┘            │        │
//! │  ┌──────────┐  one call  ┌────────────────────────┐  result    │        │
//! │  │Submitting│──────────► │  ProductApi            │ ───────────┘        │
//! │  └────┬─────┘            │  list/create/update/   │                     │
//! │       │                  │  delete over HTTP      │                     │
//! │       ▼                  └────────────────────────┘                     │
//! │  Succeeded ──► RefreshHook::refresh() ──► page re-fetches the list      │
//! │  Failed    ──► draft kept for retry                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`api`] - `ProductApi` trait and its `reqwest` implementation
//! - [`config`] - Client configuration (base URL, notification duration)
//! - [`error`] - Client and form error types
//! - [`form`] - Product form controller (add / edit / delete)
//! - [`notification`] - Single-slot transient notification controller
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use inventory_client::{ClientConfig, HttpProductApi, ProductFormController};
//!
//! let config = ClientConfig::load_or_default(None);
//! let api = Arc::new(HttpProductApi::new(&config)?);
//!
//! let form = ProductFormController::for_add(api.clone(), &config);
//! form.open()?;
//! form.set_name("Widget");
//! form.set_quantity("5");
//! form.set_price("9.99");
//! form.submit().await?;
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod notification;

pub use api::{HttpProductApi, MockProductApi, ProductApi};
pub use config::{ApiSettings, ClientConfig, NotificationSettings};
pub use error::{ClientError, ClientResult, FormError, FormResult};
pub use form::{FormIntent, FormState, NoOpRefresh, ProductFormController, RefreshHook};
pub use notification::{NotificationController, NotificationId};
