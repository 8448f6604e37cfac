//! # Error Types
//!
//! Domain-specific error types for inventory-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  inventory-core errors (this file)                                     │
//! │  └── ValidationError  - Input validation failures (never hits network) │
//! │                                                                         │
//! │  inventory-client errors (separate crate)                              │
//! │  ├── ClientError      - Config, transport, HTTP status, decode         │
//! │  └── FormError        - What a form submission reports                 │
//! │                                                                         │
//! │  Flow: ValidationError ─┐                                              │
//! │        ClientError ─────┴─► FormError ─► Notification text             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::INVALID_NUMBERS_MESSAGE;

/// Input validation errors.
///
/// Raised before any network call; a submission failing validation is
/// reported locally and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Quantity or price did not parse, or is not strictly positive.
    #[error("{}", INVALID_NUMBERS_MESSAGE)]
    InvalidNumber,
}
