//! # Client Error Types
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Client Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌──────────────────────────────────────────────┐ │
//! │  │  Configuration  │  │  API (one per /products exchange)            │ │
//! │  │                 │  │                                              │ │
//! │  │  InvalidConfig  │  │  Network   - no response (connect, reset)    │ │
//! │  │  InvalidUrl     │  │  Server    - non-2xx status                  │ │
//! │  │  ConfigLoad...  │  │  NotFound  - 404 on update/delete            │ │
//! │  │  ConfigSave...  │  │  Decode    - body is not the expected JSON   │ │
//! │  └─────────────────┘  └──────────────────────────────────────────────┘ │
//! │                                                                         │
//! │  FormError wraps ValidationError and ClientError so a form submission  │
//! │  has exactly one failure path.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use inventory_core::ValidationError;
use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for form operations.
pub type FormResult<T> = Result<T, FormError>;

/// Client error type covering configuration and API failures.
///
/// Transport exceptions and HTTP-level failures land in the same enum, so
/// callers of [`ProductApi`](crate::api::ProductApi) handle one error type.
#[derive(Debug, Error)]
pub enum ClientError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid client configuration.
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    /// Base URL is malformed or cannot address the products resource.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // API Errors
    // =========================================================================
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("Server returned {status}: {body}")]
    Server { status: u16, body: String },

    /// The addressed product does not exist on the server.
    #[error("Product not found: {id}")]
    NotFound { id: String },

    /// The response body was not the expected JSON.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if err.is_builder() {
            ClientError::InvalidUrl(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ClientError {
    fn from(err: toml::ser::Error) -> Self {
        ClientError::ConfigSaveFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl ClientError {
    /// Returns true if this error came from a `/products` exchange.
    pub fn is_api_error(&self) -> bool {
        matches!(
            self,
            ClientError::Network(_)
                | ClientError::Server { .. }
                | ClientError::NotFound { .. }
                | ClientError::Decode(_)
        )
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ClientError::InvalidConfig(_)
                | ClientError::InvalidUrl(_)
                | ClientError::ConfigLoadFailed(_)
                | ClientError::ConfigSaveFailed(_)
        )
    }

    /// HTTP status carried by the error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            ClientError::NotFound { .. } => Some(404),
            _ => None,
        }
    }
}

// =============================================================================
// Form Error
// =============================================================================

/// Why a form operation did not complete.
#[derive(Debug, Error)]
pub enum FormError {
    /// The draft failed local validation; no request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The API call failed.
    #[error(transparent)]
    Api(#[from] ClientError),

    /// A mutation for this form is already in flight.
    #[error("A submission is already in progress")]
    Busy,

    /// The operation is not allowed in the current form state.
    #[error("Cannot {operation} while form is {state}")]
    InvalidTransition { operation: String, state: String },

    /// The form was torn down before the operation finished.
    #[error("Form has been unmounted")]
    Unmounted,
}
