//! # Validation Module
//!
//! Form validation for product drafts.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field        Rule                                Message               │
//! │  ──────────   ─────────────────────────────────   ────────────────────  │
//! │  name         required                            Name is required      │
//! │  price        required, numeric (any sign)        Valid price required  │
//! │  category     required                            Category is required  │
//! │  stock        optional; numeric                   Stock must be a number│
//! │               and whole                           Stock must be a whole │
//! │                                                   number                │
//! │  description  free text                           -                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every rule runs, so the form can show all failing fields at once.
//!
//! ## Usage
//! ```rust
//! use catalog_core::validation::validate_draft;
//! use catalog_core::{FormField, ProductDraft};
//!
//! let mut draft = ProductDraft::empty();
//! draft.set(FormField::Price, "abc");
//!
//! let errors = validate_draft(&draft);
//! assert_eq!(errors.len(), 3); // name, price, category
//! ```

use crate::draft::{FormField, ProductDraft};
use crate::error::{FormErrors, ValidationError};

/// Result type for single-field validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Numbers extracted from a draft that passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoercedNumbers {
    pub price: f64,
    /// Blank stock coerces to zero.
    pub stock: i64,
}

// =============================================================================
// Number Parsing
// =============================================================================

/// Parses user-typed text as a finite number.
///
/// Surrounding whitespace is ignored. Decimal and exponent forms are
/// accepted; blank input, `NaN` and infinities are not.
///
/// ## Example
/// ```rust
/// use catalog_core::validation::parse_number;
///
/// assert_eq!(parse_number(" 12.5 "), Some(12.5));
/// assert_eq!(parse_number("1e3"), Some(1000.0));
/// assert_eq!(parse_number("NaN"), None);
/// assert_eq!(parse_number(""), None);
/// ```
pub fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses user-typed text as an integer-valued number (`"1e2"` is 100).
///
/// Failures are reported against `field`.
pub fn parse_whole_number(field: FormField, input: &str) -> ValidationResult<i64> {
    let value = parse_number(input).ok_or(ValidationError::NotANumber(field))?;

    // i64::MAX is not representable as f64; stay strictly inside the range.
    if value.fract() != 0.0 || value.abs() >= 9.2e18 {
        return Err(ValidationError::NotAWholeNumber(field));
    }

    Ok(value as i64)
}

// =============================================================================
// Field Validators
// =============================================================================

/// Checks that a required text field is not empty. Text is kept as typed,
/// so a field holding only spaces counts as filled in.
pub fn validate_required(field: FormField, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }

    Ok(())
}

/// Validates the price text and returns its value.
///
/// No range check: zero and negative prices are accepted.
pub fn validate_price(value: &str) -> ValidationResult<f64> {
    parse_number(value).ok_or(ValidationError::InvalidPrice)
}

/// Validates the stock text and returns its value (blank means zero).
pub fn validate_stock(value: &str) -> ValidationResult<i64> {
    if value.trim().is_empty() {
        return Ok(0);
    }

    parse_whole_number(FormField::Stock, value)
}

// =============================================================================
// Draft Validation
// =============================================================================

/// Validates every field and returns the coerced numbers, or all failures.
pub fn coerce_draft(draft: &ProductDraft) -> Result<CoercedNumbers, FormErrors> {
    let mut errors = FormErrors::new();

    if let Err(e) = validate_required(FormField::Name, &draft.name) {
        errors.insert(FormField::Name, e);
    }

    let price = validate_price(&draft.price)
        .map_err(|e| errors.insert(FormField::Price, e))
        .ok();

    if let Err(e) = validate_required(FormField::Category, &draft.category) {
        errors.insert(FormField::Category, e);
    }

    let stock = validate_stock(&draft.stock)
        .map_err(|e| errors.insert(FormField::Stock, e))
        .ok();

    match (price, stock) {
        (Some(price), Some(stock)) if errors.is_empty() => Ok(CoercedNumbers { price, stock }),
        _ => Err(errors),
    }
}

/// Returns the field → message mapping for a draft.
///
/// Empty iff the draft may be saved.
pub fn validate_draft(draft: &ProductDraft) -> FormErrors {
    coerce_draft(draft).err().unwrap_or_default()
}

// =============================================================================
// Unit Tests
// =============================================================================
