//! # Domain Types
//!
//! Core domain types for the product form and catalog.
//!
//! ## Type Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Type Flow                                        │
//! │                                                                         │
//! │  Form (browser)                                                         │
//! │    │  raw text fields                                                   │
//! │    ▼                                                                    │
//! │  UnitConfiguration ──resolver──► ResolvedQuantity                       │
//! │                                        │                                │
//! │  ProductDraft ─────────────────────────┤                                │
//! │    (everything except quantity)        ▼                                │
//! │                               ProductPayload                            │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                          POST /products | PUT /products/:id             │
//! │                                                                         │
//! │  GET /products ──► Vec<ProductRecord> ──► catalog::query_products       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Products carry a backend-assigned UUID `id` plus human-facing business
//! fields (name, batch number, HSN code). The client never mints ids.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::units::{Unit, UnitType};

// =============================================================================
// Unit Configuration
// =============================================================================

/// A selling-unit configuration as the form holds it: raw text.
///
/// ## Why `Option<String>` and not numbers?
/// The resolver has to distinguish *missing* from *non-numeric* from
/// *out-of-range* input (three different field errors). Once a field is an
/// `f64` those distinctions are gone, so the configuration carries exactly
/// what the user typed and parsing happens inside the resolver.
///
/// A configuration is built transiently from form state on every edit; it is
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UnitConfiguration {
    /// How stock is counted (single/container/packet/bulk).
    pub unit_type: UnitType,

    /// Physical measure, applicable when `unit_type` is not `single`.
    #[serde(default)]
    pub unit: Unit,

    /// Raw text for the amount contained in one container/packet.
    #[serde(default)]
    pub quantity_per_unit: Option<String>,

    /// Raw text for the count of containers/packets in stock.
    #[serde(default)]
    pub units_in_stock: Option<String>,

    /// Raw text for a directly entered quantity (single/bulk).
    #[serde(default)]
    pub raw_quantity: Option<String>,
}

impl UnitConfiguration {
    /// Configuration for discrete pieces entered directly.
    pub fn single(raw_quantity: &str) -> Self {
        UnitConfiguration {
            unit_type: UnitType::Single,
            unit: Unit::None,
            quantity_per_unit: None,
            units_in_stock: None,
            raw_quantity: Some(raw_quantity.to_string()),
        }
    }

    /// Configuration for container/packet stock.
    pub fn packaged(
        unit_type: UnitType,
        unit: Unit,
        quantity_per_unit: &str,
        units_in_stock: &str,
    ) -> Self {
        debug_assert!(unit_type.uses_packaging());
        UnitConfiguration {
            unit_type,
            unit,
            quantity_per_unit: Some(quantity_per_unit.to_string()),
            units_in_stock: Some(units_in_stock.to_string()),
            raw_quantity: None,
        }
    }

    /// Configuration for loose bulk stock entered directly.
    pub fn bulk(unit: Unit, raw_quantity: &str) -> Self {
        UnitConfiguration {
            unit_type: UnitType::Bulk,
            unit,
            quantity_per_unit: None,
            units_in_stock: None,
            raw_quantity: Some(raw_quantity.to_string()),
        }
    }
}

// =============================================================================
// Resolved Quantity
// =============================================================================

/// The validated, storage-ready output of the resolver.
///
/// `storage_quantity` is what the backend persists (ml/g for measured units,
/// raw count for pieces); `display_quantity` stays in the unit the user
/// picked. The packaging fields are present only for container/packet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedQuantity {
    /// Canonical base-unit quantity (see [`Unit::to_base`]).
    pub storage_quantity: f64,

    /// Human-facing quantity in the selected measure.
    pub display_quantity: f64,

    /// Resolved physical measure. Always `none` for `single`.
    pub unit: Unit,

    /// The selling-unit type the quantity was resolved for.
    pub unit_type: UnitType,

    /// Amount per container/packet (container/packet only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_per_unit: Option<f64>,

    /// Count of containers/packets (container/packet only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units_in_stock: Option<u32>,
}

// =============================================================================
// Product Draft
// =============================================================================

/// The non-quantity product form fields.
///
/// The quantity cluster lives in [`UnitConfiguration`] and goes through the
/// resolver; everything else is carried here and validated by
/// [`crate::validation::validate_draft`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,

    /// Price in the smallest currency unit. Integer, never a float —
    /// the UI converts for display.
    #[serde(rename = "price")]
    pub price_cents: i64,

    pub category: String,

    pub supplier: String,

    pub batch_number: String,

    /// HSN commodity code (4–8 digits).
    pub hsn_number: String,

    #[ts(as = "String")]
    pub manufacturing_date: NaiveDate,

    pub description: Option<String>,

    /// Stock level (in the display measure) at which reordering is due.
    pub reorder_level: u32,
}

// =============================================================================
// Product Payload
// =============================================================================

/// The body of `POST /products` / `PUT /products/:id`.
///
/// Assembled from a validated draft plus a [`ResolvedQuantity`]; the resolver
/// output is forwarded unmodified (`quantity` = storage quantity,
/// `unitQuantity` = display quantity). The packaging fields are omitted from
/// the wire entirely unless the product is container/packet.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    #[serde(rename = "price")]
    pub price_cents: i64,
    pub category: String,
    pub supplier: String,
    pub batch_number: String,
    pub unit: Unit,
    pub hsn_number: String,
    #[ts(as = "String")]
    pub manufacturing_date: NaiveDate,
    pub description: Option<String>,
    pub reorder_level: u32,
    pub unit_type: UnitType,
    /// Canonical storage quantity from the resolver.
    pub quantity: f64,
    /// Human-facing display quantity from the resolver.
    pub unit_quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_per_unit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units_in_stock: Option<u32>,
}

impl ProductPayload {
    /// Assembles the wire body from a draft and a resolved quantity.
    ///
    /// ## Example
    /// ```rust
    /// use kiraya_core::resolver::resolve;
    /// use kiraya_core::types::{ProductDraft, ProductPayload, UnitConfiguration};
    /// use kiraya_core::units::{Unit, UnitType};
    ///
    /// let config = UnitConfiguration::packaged(UnitType::Container, Unit::Liter, "2", "10");
    /// let resolved = resolve(&config).unwrap();
    ///
    /// let draft = ProductDraft {
    ///     name: "Engine oil".to_string(),
    ///     price_cents: 125_000,
    ///     category: "Lubricants".to_string(),
    ///     supplier: "Acme Traders".to_string(),
    ///     batch_number: "EO-2024-07".to_string(),
    ///     hsn_number: "271019".to_string(),
    ///     manufacturing_date: chrono::NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
    ///     description: None,
    ///     reorder_level: 4,
    /// };
    ///
    /// let payload = ProductPayload::assemble(draft, resolved);
    /// assert_eq!(payload.quantity, 20_000.0);
    /// assert_eq!(payload.unit_quantity, 20.0);
    /// ```
    pub fn assemble(draft: ProductDraft, resolved: ResolvedQuantity) -> Self {
        ProductPayload {
            name: draft.name,
            price_cents: draft.price_cents,
            category: draft.category,
            supplier: draft.supplier,
            batch_number: draft.batch_number,
            unit: resolved.unit,
            hsn_number: draft.hsn_number,
            manufacturing_date: draft.manufacturing_date,
            description: draft.description,
            reorder_level: draft.reorder_level,
            unit_type: resolved.unit_type,
            quantity: resolved.storage_quantity,
            unit_quantity: resolved.display_quantity,
            quantity_per_unit: resolved.quantity_per_unit,
            units_in_stock: resolved.units_in_stock,
        }
    }
}

// =============================================================================
// Product Record
// =============================================================================

/// A catalog row as returned by the backend list endpoint.
///
/// Input to [`crate::catalog::query_products`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Backend-assigned UUID.
    pub id: String,
    pub name: String,
    pub category: String,
    pub supplier: String,
    #[serde(rename = "price")]
    pub price_cents: i64,
    /// Persisted storage quantity (base units).
    pub quantity: f64,
    pub unit: Unit,
    pub unit_type: UnitType,
    /// Reorder threshold in the display measure.
    pub reorder_level: u32,
}

impl ProductRecord {
    /// The quantity in the display measure (liters/kilograms/pieces).
    #[inline]
    pub fn display_quantity(&self) -> f64 {
        self.unit.from_base(self.quantity)
    }

    /// True when stock has fallen to or below the reorder threshold.
    ///
    /// The threshold is expressed in the display measure, so the stored
    /// base-unit quantity is converted back before comparing.
    pub fn needs_reorder(&self) -> bool {
        self.display_quantity() <= f64::from(self.reorder_level)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Engine oil".to_string(),
            price_cents: 125_000,
            category: "Lubricants".to_string(),
            supplier: "Acme Traders".to_string(),
            batch_number: "EO-2024-07".to_string(),
            hsn_number: "271019".to_string(),
            manufacturing_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            description: Some("20W-50 mineral oil".to_string()),
            reorder_level: 4,
        }
    }

    #[test]
    fn test_payload_forwards_resolver_output_unmodified() {
        let config = UnitConfiguration::packaged(UnitType::Container, Unit::Liter, "2", "10");
        let resolved = resolve(&config).unwrap();
        let payload = ProductPayload::assemble(draft(), resolved);

        assert_eq!(payload.quantity, resolved.storage_quantity);
        assert_eq!(payload.unit_quantity, resolved.display_quantity);
        assert_eq!(payload.unit, Unit::Liter);
        assert_eq!(payload.unit_type, UnitType::Container);
        assert_eq!(payload.quantity_per_unit, Some(2.0));
        assert_eq!(payload.units_in_stock, Some(10));
    }

    #[test]
    fn test_payload_wire_field_names() {
        let config = UnitConfiguration::packaged(UnitType::Container, Unit::Liter, "2", "10");
        let payload = ProductPayload::assemble(draft(), resolve(&config).unwrap());

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["price"], 125_000);
        assert_eq!(json["batchNumber"], "EO-2024-07");
        assert_eq!(json["hsnNumber"], "271019");
        assert_eq!(json["manufacturingDate"], "2024-07-01");
        assert_eq!(json["reorderLevel"], 4);
        assert_eq!(json["unitType"], "container");
        assert_eq!(json["quantity"], 20_000.0);
        assert_eq!(json["unitQuantity"], 20.0);
        assert_eq!(json["quantityPerUnit"], 2.0);
        assert_eq!(json["unitsInStock"], 10);
    }

    #[test]
    fn test_payload_omits_packaging_fields_for_direct_entry() {
        let config = UnitConfiguration::single("5");
        let payload = ProductPayload::assemble(draft(), resolve(&config).unwrap());

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("quantityPerUnit").is_none());
        assert!(json.get("unitsInStock").is_none());
        assert_eq!(json["unit"], "none");
    }

    #[test]
    fn test_unit_configuration_deserializes_from_form_json() {
        let config: UnitConfiguration = serde_json::from_str(
            r#"{"unitType":"packet","unit":"kilogram","quantityPerUnit":"0.5","unitsInStock":"24"}"#,
        )
        .unwrap();
        assert_eq!(config.unit_type, UnitType::Packet);
        assert_eq!(config.unit, Unit::Kilogram);
        assert_eq!(config.quantity_per_unit.as_deref(), Some("0.5"));
        assert_eq!(config.raw_quantity, None);
    }

    #[test]
    fn test_record_reorder_threshold_in_display_measure() {
        let record = ProductRecord {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            name: "Engine oil".to_string(),
            category: "Lubricants".to_string(),
            supplier: "Acme Traders".to_string(),
            price_cents: 125_000,
            quantity: 4000.0, // 4 L stored as ml
            unit: Unit::Liter,
            unit_type: UnitType::Container,
            reorder_level: 4,
        };
        assert_eq!(record.display_quantity(), 4.0);
        assert!(record.needs_reorder());

        let stocked = ProductRecord {
            quantity: 20_000.0,
            ..record
        };
        assert!(!stocked.needs_reorder());
    }
}
