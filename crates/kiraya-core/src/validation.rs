//! # Validation Module
//!
//! Field validation for the product form (everything except the quantity
//! cluster, which belongs to [`crate::resolver`]).
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form inputs (browser)                                        │
//! │  ├── Basic format checks, immediate feedback per keystroke             │
//! │  └── THIS MODULE + resolver, called by the form orchestrator           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: External REST API                                            │
//! │  └── Server-side business rules (out of scope for this crate)          │
//! │                                                                         │
//! │  Defense in depth: a failed validation here blocks the request from    │
//! │  ever being sent                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kiraya_core::validation::{validate_batch_number, validate_price_cents};
//!
//! validate_batch_number("EO-2024-07").unwrap();
//! validate_price_cents(125_000).unwrap();
//! ```

use crate::error::{FieldErrors, FieldName, ValidationError, ValidationResult};
use crate::types::ProductDraft;
use crate::{MAX_BATCH_NUMBER_LENGTH, MAX_CATEGORY_LENGTH, MAX_NAME_LENGTH, MAX_SUPPLIER_LENGTH};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use kiraya_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Engine oil 20W-50").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_required_text(FieldName::Name, name, MAX_NAME_LENGTH)
}

/// Validates a category name. Same shape as the product name, shorter bound.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    validate_required_text(FieldName::Category, category, MAX_CATEGORY_LENGTH)
}

/// Validates a supplier name.
pub fn validate_supplier(supplier: &str) -> ValidationResult<()> {
    validate_required_text(FieldName::Supplier, supplier, MAX_SUPPLIER_LENGTH)
}

fn validate_required_text(field: FieldName, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }

    if value.len() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(())
}

/// Validates a batch number.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
/// - Only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use kiraya_core::validation::validate_batch_number;
///
/// assert!(validate_batch_number("EO-2024-07").is_ok());
/// assert!(validate_batch_number("batch 7").is_err()); // no spaces
/// ```
pub fn validate_batch_number(batch: &str) -> ValidationResult<()> {
    let batch = batch.trim();

    if batch.is_empty() {
        return Err(ValidationError::Required {
            field: FieldName::BatchNumber,
        });
    }

    if batch.len() > MAX_BATCH_NUMBER_LENGTH {
        return Err(ValidationError::TooLong {
            field: FieldName::BatchNumber,
            max: MAX_BATCH_NUMBER_LENGTH,
        });
    }

    if !batch
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: FieldName::BatchNumber,
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates an HSN commodity code.
///
/// ## Rules
/// - Must not be empty
/// - Digits only, 4 to 8 of them (HSN codes come in 4/6/8-digit forms)
///
/// ## Example
/// ```rust
/// use kiraya_core::validation::validate_hsn_number;
///
/// assert!(validate_hsn_number("271019").is_ok());
/// assert!(validate_hsn_number("27-10").is_err());
/// ```
pub fn validate_hsn_number(hsn: &str) -> ValidationResult<()> {
    let hsn = hsn.trim();

    if hsn.is_empty() {
        return Err(ValidationError::Required {
            field: FieldName::HsnNumber,
        });
    }

    if !hsn.chars().all(|c| c.is_ascii_digit()) || !(4..=8).contains(&hsn.len()) {
        return Err(ValidationError::InvalidFormat {
            field: FieldName::HsnNumber,
            reason: "must be a 4 to 8 digit code".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in the smallest currency unit.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use kiraya_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(125_000).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: FieldName::Price,
        });
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a product id for `PUT /products/:id`.
///
/// ## Rules
/// - Must be a valid UUID: 36 characters with hyphens
///
/// ## Example
/// ```rust
/// use kiraya_core::validation::validate_product_id;
///
/// assert!(validate_product_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_product_id("not-a-uuid").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: FieldName::Id,
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: FieldName::Id,
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Draft Validator
// =============================================================================

/// Validates every non-quantity field of a product draft at once.
///
/// Collects ALL violations into a [`FieldErrors`] so the form can highlight
/// every offending input in a single pass. The quantity cluster is validated
/// separately by [`crate::resolver::resolve`]; a submit is allowed only when
/// both succeed.
pub fn validate_draft(draft: &ProductDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    collect(&mut errors, validate_product_name(&draft.name));
    collect(&mut errors, validate_price_cents(draft.price_cents));
    collect(&mut errors, validate_category(&draft.category));
    collect(&mut errors, validate_supplier(&draft.supplier));
    collect(&mut errors, validate_batch_number(&draft.batch_number));
    collect(&mut errors, validate_hsn_number(&draft.hsn_number));

    errors.into_result()
}

fn collect(errors: &mut FieldErrors, result: ValidationResult<()>) {
    if let Err(error) = result {
        errors.push(error);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Engine oil 20W-50").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_batch_number() {
        assert!(validate_batch_number("EO-2024-07").is_ok());
        assert!(validate_batch_number("batch_7").is_ok());

        assert!(validate_batch_number("").is_err());
        assert!(validate_batch_number("has space").is_err());
        assert!(validate_batch_number(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_hsn_number() {
        assert!(validate_hsn_number("2710").is_ok());
        assert!(validate_hsn_number("271019").is_ok());
        assert!(validate_hsn_number("27101990").is_ok());

        assert!(validate_hsn_number("").is_err());
        assert!(validate_hsn_number("271").is_err()); // too short
        assert!(validate_hsn_number("271019901").is_err()); // too long
        assert!(validate_hsn_number("27-10").is_err()); // non-digit
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(125_000).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("not-a-uuid").is_err());
        assert!(validate_product_id("123").is_err());
    }

    #[test]
    fn test_validate_draft_reports_every_violation() {
        let draft = ProductDraft {
            name: "".to_string(),
            price_cents: -1,
            category: "Lubricants".to_string(),
            supplier: "Acme Traders".to_string(),
            batch_number: "bad batch!".to_string(),
            hsn_number: "27".to_string(),
            manufacturing_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            description: None,
            reorder_level: 4,
        };

        let errors = validate_draft(&draft).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(FieldName::Name));
        assert!(errors.contains(FieldName::Price));
        assert!(errors.contains(FieldName::BatchNumber));
        assert!(errors.contains(FieldName::HsnNumber));
    }

    #[test]
    fn test_validate_draft_ok() {
        let draft = ProductDraft {
            name: "Engine oil".to_string(),
            price_cents: 125_000,
            category: "Lubricants".to_string(),
            supplier: "Acme Traders".to_string(),
            batch_number: "EO-2024-07".to_string(),
            hsn_number: "271019".to_string(),
            manufacturing_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            description: Some("20W-50".to_string()),
            reorder_level: 4,
        };
        assert!(validate_draft(&draft).is_ok());
    }
}
