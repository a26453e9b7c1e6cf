//! # Units Module
//!
//! Selling-unit and physical-measure types, plus the base-unit conversion
//! every stored quantity flows through.
//!
//! ## Why Base Units?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FRACTIONAL QUANTITY PROBLEM                                         │
//! │                                                                         │
//! │  Storing "0.33 L" invites float drift across create/update round trips │
//! │  and makes stock arithmetic on the backend fragile.                     │
//! │                                                                         │
//! │  OUR SOLUTION: store integral base units                                │
//! │    liters    → millilitres  (× 1000, rounded half-up)                  │
//! │    kilograms → grams        (× 1000, rounded half-up)                  │
//! │    pieces    → raw count    (never scaled, never rounded)              │
//! │                                                                         │
//! │  The human-facing quantity stays in the unit the user picked; only     │
//! │  the persisted quantity is canonicalized.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kiraya_core::units::Unit;
//!
//! // 20 liters persist as 20,000 millilitres
//! assert_eq!(Unit::Liter.to_base(20.0), 20_000.0);
//!
//! // Piece counts pass through untouched
//! assert_eq!(Unit::None.to_base(5.0), 5.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Base units per physical measure: 1 liter = 1000 ml, 1 kilogram = 1000 g.
pub const BASE_UNITS_PER_MEASURE: f64 = 1000.0;

// =============================================================================
// Unit Type
// =============================================================================

/// How a product's stock is counted at the point of entry.
///
/// ## The Four Selling Units
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  single     discrete pieces, entered directly ("5 chairs")             │
/// │  container  N containers × amount each ("10 × 2 L bottles")            │
/// │  packet     N packets × amount each ("24 × 0.5 kg bags")               │
/// │  bulk       loose quantity, entered directly ("3.25 kg of grain")      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    /// Discrete pieces counted directly.
    Single,
    /// Fixed-amount containers (bottles, drums, cans).
    Container,
    /// Pre-packaged fixed amounts (bags, sachets, boxes).
    Packet,
    /// Loose quantity measured directly.
    Bulk,
}

impl UnitType {
    /// True for the packaged types that derive quantity from
    /// `quantityPerUnit × unitsInStock`.
    pub const fn uses_packaging(&self) -> bool {
        matches!(self, UnitType::Container | UnitType::Packet)
    }

    /// Wire name (lowercase, matching the REST body).
    pub const fn as_str(&self) -> &'static str {
        match self {
            UnitType::Single => "single",
            UnitType::Container => "container",
            UnitType::Packet => "packet",
            UnitType::Bulk => "bulk",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit
// =============================================================================

/// The physical measure a quantity is expressed in.
///
/// `None` means discrete pieces. Additional physical measures (e.g. meters)
/// would be added here — this enum is the single extension point for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// No physical measure: stock is a count of pieces.
    #[default]
    None,
    Liter,
    Kilogram,
}

impl Unit {
    /// True for measures that scale to a smaller base unit for storage.
    pub const fn is_measured(&self) -> bool {
        matches!(self, Unit::Liter | Unit::Kilogram)
    }

    /// Converts a display quantity to the canonical storage quantity.
    ///
    /// Measured units scale by [`BASE_UNITS_PER_MEASURE`] and round to the
    /// nearest integral base unit so the backend never stores fractional
    /// millilitres or grams. Quantities are non-negative, so `f64::round`
    /// (half away from zero) is exactly round-half-up here. Piece counts
    /// pass through unrounded.
    ///
    /// ## Example
    /// ```rust
    /// use kiraya_core::units::Unit;
    ///
    /// assert_eq!(Unit::Kilogram.to_base(3.25), 3250.0);
    /// assert_eq!(Unit::Liter.to_base(0.0), 0.0);
    /// assert_eq!(Unit::None.to_base(2.5), 2.5); // not rounded
    /// ```
    pub fn to_base(&self, display_quantity: f64) -> f64 {
        if self.is_measured() {
            (display_quantity * BASE_UNITS_PER_MEASURE).round()
        } else {
            display_quantity
        }
    }

    /// Converts a storage quantity back to the display measure.
    pub fn from_base(&self, storage_quantity: f64) -> f64 {
        if self.is_measured() {
            storage_quantity / BASE_UNITS_PER_MEASURE
        } else {
            storage_quantity
        }
    }

    /// Symbol for the display measure (`pcs`, `L`, `kg`).
    pub const fn symbol(&self) -> &'static str {
        match self {
            Unit::None => "pcs",
            Unit::Liter => "L",
            Unit::Kilogram => "kg",
        }
    }

    /// Symbol for the storage base unit (`pcs`, `ml`, `g`).
    pub const fn base_symbol(&self) -> &'static str {
        match self {
            Unit::None => "pcs",
            Unit::Liter => "ml",
            Unit::Kilogram => "g",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
