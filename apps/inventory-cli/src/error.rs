//! # CLI Error Type
//!
//! ## Exit Codes
//! ```text
//! ┌──────┬───────────────────────────────────────────────────────────────┐
//! │ Code │ Meaning                                                       │
//! ├──────┼───────────────────────────────────────────────────────────────┤
//! │ 0    │ Success (including a declined delete confirmation)            │
//! │ 1    │ API failure: network, server status, undecodable response     │
//! │ 2    │ Invalid input: rejected by a mask or by submission validation │
//! │ 3    │ Configuration problem                                         │
//! │ 4    │ Product not found                                             │
//! └──────┴───────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

use inventory_client::{ClientError, FormError};
use inventory_core::ValidationError;
use thiserror::Error;

/// Result type alias for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Error returned by a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(ClientError),

    /// A `/products` request failed outside a form.
    #[error(transparent)]
    Api(ClientError),

    /// A form submission failed.
    #[error(transparent)]
    Form(#[from] FormError),

    /// A command argument failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No product with this ID exists.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// A flag value was rejected by its input mask.
    #[error("Invalid {field}: {value:?}")]
    InvalidInput { field: &'static str, value: String },

    /// Writing to the terminal failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        if err.is_config_error() {
            CliError::Config(err)
        } else {
            CliError::Api(err)
        }
    }
}

impl CliError {
    /// Numeric exit status for this error.
    pub fn code(&self) -> u8 {
        match self {
            CliError::Config(_) => 3,
            CliError::NotFound(_) => 4,
            CliError::InvalidInput { .. } | CliError::Validation(_) => 2,
            CliError::Api(e) => api_code(e),
            CliError::Form(FormError::Validation(_)) => 2,
            CliError::Form(FormError::Api(e)) => api_code(e),
            CliError::Form(_) | CliError::Io(_) => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

fn api_code(err: &ClientError) -> u8 {
    match err {
        ClientError::NotFound { .. } => 4,
        e if e.is_config_error() => 3,
        _ => 1,
    }
}
