//! # Validation Module
//!
//! Input validation for the product forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Keystroke masks                                              │
//! │  ├── is_valid_quantity_input: digits only                              │
//! │  └── is_valid_price_input: digits, optional '.', up to two decimals    │
//! │      Rejected keystrokes never reach the draft.                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Submission                                                   │
//! │  ├── validate_product_name: required field, checked first              │
//! │  └── validate_submission: both numbers parse and are > 0               │
//! │      The single gate before any network call.                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend                                                      │
//! │  └── Whatever the server enforces (reported as ServerError)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Masks allow the empty string so a user can clear a field while typing.

use crate::draft::FormDraft;
use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Quantity and price that passed submission validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Submission {
    pub quantity: f64,
    pub price: f64,
}

// =============================================================================
// Keystroke Masks
// =============================================================================

/// Returns true if `text` is an acceptable in-progress quantity.
///
/// Zero or more ASCII digits; the empty string is allowed.
///
/// ## Example
/// ```rust
/// use inventory_core::validation::is_valid_quantity_input;
///
/// assert!(is_valid_quantity_input(""));
/// assert!(is_valid_quantity_input("042"));
/// assert!(!is_valid_quantity_input("4.2"));
/// assert!(!is_valid_quantity_input("-1"));
/// ```
pub fn is_valid_quantity_input(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit())
}

/// Returns true if `text` is an acceptable in-progress price.
///
/// Digits, optionally followed by a single `.` and at most two digits. The
/// empty string and a lone `.` are allowed as intermediate states.
///
/// ## Example
/// ```rust
/// use inventory_core::validation::is_valid_price_input;
///
/// assert!(is_valid_price_input("9.99"));
/// assert!(is_valid_price_input("9."));
/// assert!(is_valid_price_input(".5"));
/// assert!(!is_valid_price_input("9.999"));
/// assert!(!is_valid_price_input("1.2.3"));
/// ```
pub fn is_valid_price_input(text: &str) -> bool {
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());

    match text.split_once('.') {
        Some((whole, fraction)) => all_digits(whole) && all_digits(fraction) && fraction.len() <= 2,
        None => all_digits(text),
    }
}

// =============================================================================
// Submission Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be blank after trimming
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a product ID used to address an existing product.
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    Ok(())
}

/// Parses quantity and price text and enforces the business rule that both
/// are strictly positive.
///
/// ## Rules
/// - Both must parse as finite floating-point numbers
/// - Both must be > 0
///
/// Any violation is reported as [`ValidationError::InvalidNumber`].
///
/// ## Example
/// ```rust
/// use inventory_core::validation::validate_submission;
/// use inventory_core::ValidationError;
///
/// let ok = validate_submission("3", "2.50").unwrap();
/// assert_eq!((ok.quantity, ok.price), (3.0, 2.5));
///
/// assert_eq!(validate_submission("0", "2.50"), Err(ValidationError::InvalidNumber));
/// assert_eq!(validate_submission("abc", "2.50"), Err(ValidationError::InvalidNumber));
/// ```
pub fn validate_submission(quantity_text: &str, price_text: &str) -> ValidationResult<Submission> {
    let quantity = parse_positive(quantity_text).ok_or(ValidationError::InvalidNumber)?;
    let price = parse_positive(price_text).ok_or(ValidationError::InvalidNumber)?;

    Ok(Submission { quantity, price })
}

/// Validates a whole draft: name first, then the numeric fields.
///
/// Quantity must additionally be a whole number that fits the wire type.
pub fn validate_draft(draft: &FormDraft) -> ValidationResult<Submission> {
    validate_product_name(&draft.name)?;

    let submission = validate_submission(&draft.quantity, &draft.price)?;

    if submission.quantity.fract() != 0.0 || submission.quantity > f64::from(u32::MAX) {
        return Err(ValidationError::InvalidNumber);
    }

    Ok(submission)
}

fn parse_positive(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

// =============================================================================
// Unit Tests
// =============================================================================
