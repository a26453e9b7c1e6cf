//! # Unit-Quantity Resolver
//!
//! Pure transformation from a [`UnitConfiguration`] to a validated,
//! storage-ready [`ResolvedQuantity`].
//!
//! ## Resolution Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      resolve(config)                                    │
//! │                                                                         │
//! │  branch on unitType                                                     │
//! │  ├── single     rawQuantity ≥ 0        display = rawQuantity           │
//! │  ├── bulk       rawQuantity > 0        display = rawQuantity           │
//! │  └── container  quantityPerUnit > 0                                     │
//! │      / packet   unitsInStock  ≥ 0 int  display = perUnit × stock       │
//! │                                                                         │
//! │  then scale:                                                            │
//! │  ├── liter/kilogram  storage = round(display × 1000)   (ml / g)        │
//! │  └── none            storage = display                 (unrounded)     │
//! │                                                                         │
//! │  any invalid field → FieldErrors (ALL violations, field-keyed)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Purity
//! No I/O, no mutation of the input, no shared state. The form orchestrator
//! calls this on every keystroke and once more on submit; identical input
//! always yields bit-identical output, so re-invocation needs no
//! coordination or debouncing for correctness.
//!
//! ## Usage
//! ```rust
//! use kiraya_core::resolver::resolve;
//! use kiraya_core::types::UnitConfiguration;
//! use kiraya_core::units::{Unit, UnitType};
//!
//! let config = UnitConfiguration::packaged(UnitType::Container, Unit::Liter, "2", "10");
//! let resolved = resolve(&config).unwrap();
//!
//! assert_eq!(resolved.display_quantity, 20.0);   // 10 × 2 L
//! assert_eq!(resolved.storage_quantity, 20_000.0); // millilitres
//! ```

use crate::error::{FieldErrors, FieldName, ValidationError};
use crate::types::{ResolvedQuantity, UnitConfiguration};
use crate::units::{Unit, UnitType};

/// Resolves a selling-unit configuration into a storage-ready quantity.
///
/// ## Branch Rules
/// - `single`: `rawQuantity` required, ≥ 0. Non-integral piece counts are
///   accepted and not rounded. Resolves with `unit = none` — pieces are
///   never scaled, whatever the form's unit selector held.
/// - `container`/`packet`: `quantityPerUnit` required, > 0; `unitsInStock`
///   required, a whole number ≥ 0. Zero stock is valid (display quantity 0).
/// - `bulk`: `rawQuantity` required, > 0.
///
/// ## Errors
/// Every invalid field produces its own entry in the returned
/// [`FieldErrors`], keyed to the offending field. Nothing is silently
/// defaulted: a missing or malformed field aborts resolution rather than
/// contributing a `0`.
pub fn resolve(config: &UnitConfiguration) -> Result<ResolvedQuantity, FieldErrors> {
    let mut errors = FieldErrors::new();

    let outcome = match config.unit_type {
        UnitType::Single => {
            resolve_direct(config, UnitType::Single, &mut errors).map(|d| (d, None, None))
        }
        UnitType::Bulk => {
            resolve_direct(config, UnitType::Bulk, &mut errors).map(|d| (d, None, None))
        }
        UnitType::Container | UnitType::Packet => resolve_packaged(config, &mut errors),
    };

    match outcome {
        Some((display_quantity, quantity_per_unit, units_in_stock)) if errors.is_empty() => {
            // Invariant: single ⇒ unit = none. Piece counts never scale.
            let unit = if config.unit_type == UnitType::Single {
                Unit::None
            } else {
                config.unit
            };
            Ok(ResolvedQuantity {
                storage_quantity: unit.to_base(display_quantity),
                display_quantity,
                unit,
                unit_type: config.unit_type,
                quantity_per_unit,
                units_in_stock,
            })
        }
        _ => {
            debug_assert!(!errors.is_empty());
            Err(errors)
        }
    }
}

/// Resolves the direct-entry types (`single`, `bulk`) from `rawQuantity`.
///
/// `single` allows zero (an out-of-stock piece product); `bulk` requires a
/// strictly positive quantity.
fn resolve_direct(
    config: &UnitConfiguration,
    unit_type: UnitType,
    errors: &mut FieldErrors,
) -> Option<f64> {
    let value = parse_required(FieldName::Quantity, config.raw_quantity.as_deref(), errors)?;

    match unit_type {
        UnitType::Single if value < 0.0 => {
            errors.push(ValidationError::MustBeNonNegative {
                field: FieldName::Quantity,
            });
            None
        }
        UnitType::Bulk if value <= 0.0 => {
            errors.push(ValidationError::MustBePositive {
                field: FieldName::Quantity,
            });
            None
        }
        _ => Some(value),
    }
}

/// Resolves the packaged types (`container`, `packet`) from
/// `quantityPerUnit × unitsInStock`.
///
/// Both fields are checked independently so the caller sees every violation
/// at once, not one per submit attempt.
fn resolve_packaged(
    config: &UnitConfiguration,
    errors: &mut FieldErrors,
) -> Option<(f64, Option<f64>, Option<u32>)> {
    let per_unit = parse_required(
        FieldName::QuantityPerUnit,
        config.quantity_per_unit.as_deref(),
        errors,
    )
    .and_then(|value| {
        if value <= 0.0 {
            errors.push(ValidationError::MustBePositive {
                field: FieldName::QuantityPerUnit,
            });
            None
        } else {
            Some(value)
        }
    });

    let stock = parse_required(
        FieldName::UnitsInStock,
        config.units_in_stock.as_deref(),
        errors,
    )
    .and_then(|value| {
        if value < 0.0 {
            errors.push(ValidationError::MustBeNonNegative {
                field: FieldName::UnitsInStock,
            });
            None
        } else if value.fract() != 0.0 {
            errors.push(ValidationError::MustBeWholeNumber {
                field: FieldName::UnitsInStock,
            });
            None
        } else if value > f64::from(u32::MAX) {
            errors.push(ValidationError::OutOfRange {
                field: FieldName::UnitsInStock,
                min: 0,
                max: i64::from(u32::MAX),
            });
            None
        } else {
            Some(value as u32)
        }
    });

    match (per_unit, stock) {
        (Some(per_unit), Some(stock)) => {
            Some((per_unit * f64::from(stock), Some(per_unit), Some(stock)))
        }
        _ => None,
    }
}

/// Parses a required numeric field from raw form text.
///
/// Missing/blank text and unparseable text are distinct failures
/// (`Required` vs `InvalidNumber`); `NaN` and infinities count as
/// unparseable. On failure the error is recorded and `None` returned so the
/// caller can keep checking the remaining fields.
fn parse_required(
    field: FieldName,
    raw: Option<&str>,
    errors: &mut FieldErrors,
) -> Option<f64> {
    let text = raw.map(str::trim).unwrap_or("");

    if text.is_empty() {
        errors.push(ValidationError::Required { field });
        return None;
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            errors.push(ValidationError::InvalidNumber {
                field,
                value: text.to_string(),
            });
            None
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Happy paths
    // -------------------------------------------------------------------------

    #[test]
    fn test_container_of_liters() {
        // 10 containers × 2 L = 20 L displayed, 20,000 ml stored
        let config = UnitConfiguration::packaged(UnitType::Container, Unit::Liter, "2", "10");
        let resolved = resolve(&config).unwrap();

        assert_eq!(resolved.display_quantity, 20.0);
        assert_eq!(resolved.storage_quantity, 20_000.0);
        assert_eq!(resolved.unit, Unit::Liter);
        assert_eq!(resolved.unit_type, UnitType::Container);
        assert_eq!(resolved.quantity_per_unit, Some(2.0));
        assert_eq!(resolved.units_in_stock, Some(10));
    }

    #[test]
    fn test_single_pieces() {
        let resolved = resolve(&UnitConfiguration::single("5")).unwrap();

        assert_eq!(resolved.display_quantity, 5.0);
        assert_eq!(resolved.storage_quantity, 5.0);
        assert_eq!(resolved.unit, Unit::None);
        assert_eq!(resolved.quantity_per_unit, None);
        assert_eq!(resolved.units_in_stock, None);
    }

    #[test]
    fn test_bulk_kilograms() {
        let resolved = resolve(&UnitConfiguration::bulk(Unit::Kilogram, "3.25")).unwrap();

        assert_eq!(resolved.display_quantity, 3.25);
        assert_eq!(resolved.storage_quantity, 3250.0);
    }

    #[test]
    fn test_packet_display_quantity_is_exact_product() {
        // No hidden rounding before unit scaling
        let config = UnitConfiguration::packaged(UnitType::Packet, Unit::Kilogram, "0.5", "24");
        let resolved = resolve(&config).unwrap();

        assert_eq!(resolved.display_quantity, 0.5 * 24.0);
        assert_eq!(resolved.storage_quantity, 12_000.0);
    }

    #[test]
    fn test_unscaled_unit_passes_through() {
        let config = UnitConfiguration::packaged(UnitType::Packet, Unit::None, "6", "4");
        let resolved = resolve(&config).unwrap();

        assert_eq!(resolved.display_quantity, 24.0);
        assert_eq!(resolved.storage_quantity, 24.0);
    }

    #[test]
    fn test_single_accepts_fractional_pieces_unrounded() {
        // Non-integral is accepted but never rounded (e.g. 2.5 m of cable
        // sold as a "piece")
        let resolved = resolve(&UnitConfiguration::single("2.5")).unwrap();
        assert_eq!(resolved.display_quantity, 2.5);
        assert_eq!(resolved.storage_quantity, 2.5);
    }

    #[test]
    fn test_single_ignores_stray_unit_selection() {
        // Invariant: single ⇒ unit = none, pieces are never scaled even if
        // the form's unit selector was left on a measure
        let config = UnitConfiguration {
            unit: Unit::Liter,
            ..UnitConfiguration::single("5")
        };
        let resolved = resolve(&config).unwrap();
        assert_eq!(resolved.unit, Unit::None);
        assert_eq!(resolved.storage_quantity, 5.0);
    }

    #[test]
    fn test_zero_stock_is_valid() {
        let config = UnitConfiguration::packaged(UnitType::Container, Unit::Liter, "2", "0");
        let resolved = resolve(&config).unwrap();

        assert_eq!(resolved.display_quantity, 0.0);
        assert_eq!(resolved.storage_quantity, 0.0);
        assert_eq!(resolved.units_in_stock, Some(0));
    }

    #[test]
    fn test_single_zero_is_valid() {
        let resolved = resolve(&UnitConfiguration::single("0")).unwrap();
        assert_eq!(resolved.display_quantity, 0.0);
    }

    #[test]
    fn test_input_is_trimmed() {
        let config = UnitConfiguration::packaged(UnitType::Container, Unit::Liter, " 2 ", " 10 ");
        assert!(resolve(&config).is_ok());
    }

    #[test]
    fn test_idempotent() {
        let config = UnitConfiguration::packaged(UnitType::Packet, Unit::Kilogram, "0.75", "8");
        let first = resolve(&config).unwrap();
        let second = resolve(&config).unwrap();
        assert_eq!(first, second);
    }

    // -------------------------------------------------------------------------
    // Error paths
    // -------------------------------------------------------------------------

    #[test]
    fn test_negative_per_unit_rejected() {
        let config = UnitConfiguration::packaged(UnitType::Container, Unit::None, "-1", "5");
        let errors = resolve(&config).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert!(errors.contains(FieldName::QuantityPerUnit));
        assert!(matches!(
            errors.iter().next().unwrap(),
            ValidationError::MustBePositive {
                field: FieldName::QuantityPerUnit
            }
        ));
    }

    #[test]
    fn test_zero_per_unit_is_invalid() {
        let config = UnitConfiguration::packaged(UnitType::Container, Unit::Liter, "0", "10");
        let errors = resolve(&config).unwrap_err();
        assert!(errors.contains(FieldName::QuantityPerUnit));
    }

    #[test]
    fn test_both_packaging_fields_reported() {
        // Error completeness: both violations surface, not just the first
        let config = UnitConfiguration::packaged(UnitType::Container, Unit::Liter, "abc", "-3");
        let errors = resolve(&config).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(errors.contains(FieldName::QuantityPerUnit));
        assert!(errors.contains(FieldName::UnitsInStock));
    }

    #[test]
    fn test_missing_fields_reported_per_field() {
        let config = UnitConfiguration {
            unit_type: UnitType::Packet,
            unit: Unit::Kilogram,
            quantity_per_unit: None,
            units_in_stock: None,
            raw_quantity: None,
        };
        let errors = resolve(&config).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(matches!(
            errors.iter().next().unwrap(),
            ValidationError::Required {
                field: FieldName::QuantityPerUnit
            }
        ));
    }

    #[test]
    fn test_blank_counts_as_missing_not_invalid() {
        let errors = resolve(&UnitConfiguration::single("   ")).unwrap_err();
        assert!(matches!(
            errors.iter().next().unwrap(),
            ValidationError::Required {
                field: FieldName::Quantity
            }
        ));
    }

    #[test]
    fn test_non_numeric_quantity() {
        let errors = resolve(&UnitConfiguration::bulk(Unit::Liter, "12,5")).unwrap_err();
        assert!(matches!(
            errors.iter().next().unwrap(),
            ValidationError::InvalidNumber {
                field: FieldName::Quantity,
                ..
            }
        ));
    }

    #[test]
    fn test_nan_and_infinity_rejected() {
        assert!(resolve(&UnitConfiguration::single("NaN")).is_err());
        assert!(resolve(&UnitConfiguration::single("inf")).is_err());
    }

    #[test]
    fn test_fractional_stock_count_rejected() {
        let config = UnitConfiguration::packaged(UnitType::Packet, Unit::Kilogram, "0.5", "2.5");
        let errors = resolve(&config).unwrap_err();

        assert!(matches!(
            errors.iter().next().unwrap(),
            ValidationError::MustBeWholeNumber {
                field: FieldName::UnitsInStock
            }
        ));
    }

    #[test]
    fn test_bulk_zero_is_invalid() {
        let errors = resolve(&UnitConfiguration::bulk(Unit::Kilogram, "0")).unwrap_err();
        assert!(errors.contains(FieldName::Quantity));
    }

    #[test]
    fn test_negative_single_quantity_rejected() {
        let errors = resolve(&UnitConfiguration::single("-2")).unwrap_err();
        assert!(matches!(
            errors.iter().next().unwrap(),
            ValidationError::MustBeNonNegative {
                field: FieldName::Quantity
            }
        ));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let config = UnitConfiguration::packaged(UnitType::Container, Unit::Liter, "2", "10");
        let before = config.clone();
        let _ = resolve(&config);
        assert_eq!(config, before);
    }
}
