//! # Error Types
//!
//! Domain-specific error types for catalog-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  catalog-core errors (this file)                                       │
//! │  ├── CoreError        - Store and seed failures                        │
//! │  ├── FormErrors       - Every failing field of one draft               │
//! │  └── ValidationError  - A single field failure                         │
//! │                                                                         │
//! │  catalog-console errors (app crate)                                    │
//! │  ├── ConfigError      - Config file / environment problems             │
//! │  └── AppError         - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError → FormErrors → CoreError → AppError → Screen     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product ID, field name)
//! 3. Field errors carry the exact text shown under the form input

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::draft::FormField;
use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with this ID is in the store.
    ///
    /// ## When This Occurs
    /// - Edit/delete of a row that was removed in the meantime
    /// - A typo in a console `edit <id>` / `delete <id>` command
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Two products share an ID when building a store.
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(ProductId),

    /// The draft failed validation; nothing was written.
    #[error("Validation failed: {0}")]
    Validation(#[from] FormErrors),

    /// The embedded sample data could not be decoded.
    #[error("Invalid seed data: {0}")]
    SeedData(#[from] serde_json::Error),
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single form field failure.
///
/// The `Display` output is the inline message rendered under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("{0} is required")]
    Required(FormField),

    /// Price is missing or not numeric.
    #[error("Valid price required")]
    InvalidPrice,

    /// An optional numeric field holds something that is not a number.
    #[error("{0} must be a number")]
    NotANumber(FormField),

    /// A numeric field that must be integral has a fractional part.
    #[error("{0} must be a whole number")]
    NotAWholeNumber(FormField),
}

// =============================================================================
// Form Errors
// =============================================================================

/// Field → error mapping produced by validating a draft.
///
/// Empty means the draft can be saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, ValidationError>);

impl FormErrors {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        FormErrors(BTreeMap::new())
    }

    /// Records an error for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: FormField, error: ValidationError) {
        self.0.insert(field, error);
    }

    /// Returns the error for `field`, if any.
    pub fn get(&self, field: FormField) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    /// True when no field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates failures in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &ValidationError)> {
        self.0.iter().map(|(field, err)| (*field, err))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, err) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.key(), err)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::Required(FormField::Name).to_string(),
            "Name is required"
        );
        assert_eq!(
            ValidationError::Required(FormField::Category).to_string(),
            "Category is required"
        );
        assert_eq!(ValidationError::InvalidPrice.to_string(), "Valid price required");
        assert_eq!(
            ValidationError::NotANumber(FormField::Stock).to_string(),
            "Stock must be a number"
        );
    }

    #[test]
    fn test_form_errors_display_in_form_order() {
        let mut errors = FormErrors::new();
        errors.insert(FormField::Category, ValidationError::Required(FormField::Category));
        errors.insert(FormField::Name, ValidationError::Required(FormField::Name));

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.to_string(),
            "name: Name is required; category: Category is required"
        );
    }

    #[test]
    fn test_form_errors_convert_to_core_error() {
        let mut errors = FormErrors::new();
        errors.insert(FormField::Price, ValidationError::InvalidPrice);

        let core_err: CoreError = errors.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(
            core_err.to_string(),
            "Validation failed: price: Valid price required"
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            CoreError::ProductNotFound(42).to_string(),
            "Product not found: 42"
        );
    }
}
