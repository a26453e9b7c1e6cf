//! # Error Types
//!
//! Field-keyed validation errors for kiraya-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Flow                                      │
//! │                                                                         │
//! │  Form input (raw text)                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  resolver / validation                                                  │
//! │       │                                                                 │
//! │       ├── ok ──────────► ResolvedQuantity / validated draft             │
//! │       │                                                                 │
//! │       └── invalid ─────► FieldErrors                                    │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                     messages() map, keyed by wire field name,           │
//! │                     rendered next to each offending input               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Every error is keyed to the field that caused it — never one opaque
//!    error for a whole form
//! 4. ALL simultaneous violations are reported, not just the first

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Field Names
// =============================================================================

/// Stable identifiers for the form fields this crate validates.
///
/// ## Why an enum instead of strings?
/// The frontend renders each error adjacent to its input, so the key has to
/// match the wire field name exactly. An enum makes a typo a compile error
/// instead of a silently-unrendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    /// Directly entered quantity (single/bulk) — also the resolver's output.
    Quantity,
    /// Amount contained in one container/packet.
    QuantityPerUnit,
    /// Count of containers/packets in stock.
    UnitsInStock,
    Name,
    Price,
    Category,
    Supplier,
    BatchNumber,
    HsnNumber,
    ReorderLevel,
    /// Product UUID, for update requests.
    Id,
}

impl FieldName {
    /// Returns the wire field name (camelCase, matching the REST body).
    pub const fn as_str(&self) -> &'static str {
        match self {
            FieldName::Quantity => "quantity",
            FieldName::QuantityPerUnit => "quantityPerUnit",
            FieldName::UnitsInStock => "unitsInStock",
            FieldName::Name => "name",
            FieldName::Price => "price",
            FieldName::Category => "category",
            FieldName::Supplier => "supplier",
            FieldName::BatchNumber => "batchNumber",
            FieldName::HsnNumber => "hsnNumber",
            FieldName::ReorderLevel => "reorderLevel",
            FieldName::Id => "id",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single field-scoped validation failure.
///
/// These errors occur when user input doesn't meet requirements. They are
/// recovered locally — collected into [`FieldErrors`] — and never propagate
/// as panics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: FieldName },

    /// Input present but not parseable as a number (includes NaN/infinity).
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: FieldName, value: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be greater than zero")]
    MustBePositive { field: FieldName },

    /// Value must be zero or greater.
    #[error("{field} cannot be negative")]
    MustBeNonNegative { field: FieldName },

    /// Value must be an integer (e.g., a count of containers).
    #[error("{field} must be a whole number")]
    MustBeWholeNumber { field: FieldName },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: FieldName,
        min: i64,
        max: i64,
    },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: FieldName, max: usize },

    /// Invalid format (e.g., invalid UUID, non-numeric HSN code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: FieldName, reason: String },
}

impl ValidationError {
    /// The field this error is keyed to.
    pub const fn field(&self) -> FieldName {
        match self {
            ValidationError::Required { field }
            | ValidationError::InvalidNumber { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::MustBeNonNegative { field }
            | ValidationError::MustBeWholeNumber { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidFormat { field, .. } => *field,
        }
    }
}

/// Convenience type alias for single-field validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Errors
// =============================================================================

/// An ordered collection of validation failures across a form.
///
/// ## Why a collection?
/// A container config with both `quantityPerUnit` and `unitsInStock` invalid
/// must surface BOTH errors so the user fixes the form in one pass, not one
/// error per submit attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: Vec<ValidationError>,
}

impl FieldErrors {
    /// Creates an empty error set.
    pub fn new() -> Self {
        FieldErrors::default()
    }

    /// Records a validation failure. Insertion order is preserved.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// True when no violations were recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of recorded violations.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when at least one error is keyed to `field`.
    pub fn contains(&self, field: FieldName) -> bool {
        self.errors.iter().any(|e| e.field() == field)
    }

    /// Iterates over the recorded violations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// Converts the set into `Ok(())` when empty, `Err(self)` otherwise.
    ///
    /// ## Usage
    /// ```rust
    /// use kiraya_core::error::{FieldErrors, FieldName, ValidationError};
    ///
    /// let mut errors = FieldErrors::new();
    /// assert!(errors.clone().into_result().is_ok());
    ///
    /// errors.push(ValidationError::Required { field: FieldName::Name });
    /// assert!(errors.into_result().is_err());
    /// ```
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Renders the set as a wire-field-name → messages map for the frontend.
    ///
    /// ## Example
    /// ```rust
    /// use kiraya_core::error::{FieldErrors, FieldName, ValidationError};
    ///
    /// let mut errors = FieldErrors::new();
    /// errors.push(ValidationError::MustBePositive {
    ///     field: FieldName::QuantityPerUnit,
    /// });
    ///
    /// let map = errors.messages();
    /// assert_eq!(
    ///     map["quantityPerUnit"],
    ///     vec!["quantityPerUnit must be greater than zero".to_string()]
    /// );
    /// ```
    pub fn messages(&self) -> BTreeMap<&'static str, Vec<String>> {
        let mut map: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
        for error in &self.errors {
            map.entry(error.field().as_str())
                .or_default()
                .push(error.to_string());
        }
        map
    }
}

impl From<ValidationError> for FieldErrors {
    fn from(error: ValidationError) -> Self {
        FieldErrors {
            errors: vec![error],
        }
    }
}

impl IntoIterator for FieldErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("no validation errors");
        }
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

// =============================================================================
// Unit Tests
// =============================================================================
