//! # kiraya-core: Pure Domain Logic for the Kiraya Admin Console
//!
//! This crate is the **heart** of the Kiraya rental/inventory console. It
//! contains the domain logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Kiraya Architecture                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Admin Console (browser)                        │   │
//! │  │    Product form ──► Catalog table ──► Service/Report pages      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ form orchestrator (out of repo)        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kiraya-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   units   │  │ resolver  │  │ validation│  │  catalog  │  │   │
//! │  │   │ Unit      │  │ resolve() │  │   rules   │  │  query    │  │   │
//! │  │   │ UnitType  │  │ quantity  │  │  checks   │  │ sort/page │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP client layer (out of repo)        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    External REST API                            │   │
//! │  │         POST /products, PUT /products/:id, GET /products        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`units`] - Selling-unit types and base-unit conversion (no floats stored!)
//! - [`resolver`] - The unit-quantity resolver: raw form text → storage-ready quantity
//! - [`types`] - Domain types (UnitConfiguration, ProductPayload, ProductRecord)
//! - [`error`] - Field-keyed validation errors
//! - [`validation`] - Product form field validation
//! - [`catalog`] - In-memory filtering/sorting/pagination of the product list
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, database, file system access is FORBIDDEN here
//! 3. **Canonical Quantities**: Measured stock persists as integral base units
//!    (millilitres/grams); piece counts pass through unscaled
//! 4. **Explicit Errors**: Invalid input yields field-keyed error sets, never
//!    silent defaults, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use kiraya_core::resolver::resolve;
//! use kiraya_core::types::UnitConfiguration;
//! use kiraya_core::units::{Unit, UnitType};
//!
//! // 10 containers of 2 liters each
//! let config = UnitConfiguration::packaged(UnitType::Container, Unit::Liter, "2", "10");
//! let resolved = resolve(&config).unwrap();
//!
//! assert_eq!(resolved.display_quantity, 20.0);     // what the user sees
//! assert_eq!(resolved.storage_quantity, 20_000.0); // what the backend stores (ml)
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod resolver;
pub mod types;
pub mod units;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kiraya_core::Unit` instead of
// `use kiraya_core::units::Unit`

pub use error::{FieldErrors, FieldName, ValidationError};
pub use resolver::resolve;
pub use types::*;
pub use units::{Unit, UnitType, BASE_UNITS_PER_MEASURE};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum product name length.
///
/// ## Business Reason
/// Keeps names renderable in the catalog table and on printed labels.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum category name length.
pub const MAX_CATEGORY_LENGTH: usize = 100;

/// Maximum supplier name length.
pub const MAX_SUPPLIER_LENGTH: usize = 100;

/// Maximum batch number length.
///
/// ## Business Reason
/// Batch numbers are operator-assigned codes, the same shape as SKUs;
/// anything longer is a paste error.
pub const MAX_BATCH_NUMBER_LENGTH: usize = 50;

/// Default catalog page size.
///
/// ## Business Reason
/// Matches the list page's default rows-per-page selector. The query type
/// accepts any size; this is only the starting value.
pub const DEFAULT_PAGE_SIZE: usize = 20;
