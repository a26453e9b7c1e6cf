//! # Catalog Module
//!
//! Pure in-memory querying over the product list the console fetches from
//! the backend: text search, category filter, low-stock filter, sorting,
//! pagination.
//!
//! ## How a Query Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET /products ──► Vec<ProductRecord> (held by the page)               │
//! │                                                                         │
//! │  User types "oil", picks category, clicks a column header              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  query_products(records, query)  ← THIS MODULE                         │
//! │       │                                                                 │
//! │       ├── filter: search (name/category/supplier, case-insensitive)    │
//! │       │          category match, low-stock-only                        │
//! │       ├── sort:   name | price | quantity | category, asc/desc         │
//! │       └── page:   1-based, Page { items, total, page, page_count }     │
//! │                                                                         │
//! │  No network round trip per keystroke — the array is already here       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use ts_rs::TS;

use crate::types::ProductRecord;
use crate::DEFAULT_PAGE_SIZE;

// =============================================================================
// Query Types
// =============================================================================

/// Column to sort the catalog by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Price,
    Quantity,
    Category,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A catalog query as driven by the list page's controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    /// Case-insensitive substring match over name, category, and supplier.
    /// Empty or whitespace-only search matches everything.
    #[serde(default)]
    pub search: Option<String>,

    /// Exact category filter (case-insensitive).
    #[serde(default)]
    pub category: Option<String>,

    /// Keep only products at or below their reorder threshold.
    #[serde(default)]
    pub low_stock_only: bool,

    pub sort_key: SortKey,

    pub sort_direction: SortDirection,

    /// 1-based page number.
    pub page: usize,

    pub page_size: usize,
}

impl Default for ProductQuery {
    fn default() -> Self {
        ProductQuery {
            search: None,
            category: None,
            low_stock_only: false,
            sort_key: SortKey::Name,
            sort_direction: SortDirection::Ascending,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,

    /// Total matches across all pages (for the "N products" header).
    pub total: usize,

    /// The 1-based page these items belong to.
    pub page: usize,

    /// Number of pages the matches span. Zero when nothing matched.
    pub page_count: usize,
}

// =============================================================================
// Query Execution
// =============================================================================

/// Filters, sorts, and paginates a fetched product list.
///
/// Pure: the input slice is untouched; matching records are cloned into the
/// returned page. A page number past the end yields an empty `items` with
/// `total`/`page_count` still reported, never an error. A `page_size` of 0
/// is clamped to 1 and a `page` of 0 to 1.
///
/// ## Example
/// ```rust
/// use kiraya_core::catalog::{query_products, ProductQuery};
///
/// let page = query_products(&[], &ProductQuery::default());
/// assert_eq!(page.total, 0);
/// assert!(page.items.is_empty());
/// ```
pub fn query_products(products: &[ProductRecord], query: &ProductQuery) -> Page<ProductRecord> {
    let search = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut matches: Vec<ProductRecord> = products
        .iter()
        .filter(|p| {
            if let Some(needle) = &search {
                if !matches_search(p, needle) {
                    return false;
                }
            }
            if let Some(category) = &query.category {
                if !p.category.eq_ignore_ascii_case(category.trim()) {
                    return false;
                }
            }
            if query.low_stock_only && !p.needs_reorder() {
                return false;
            }
            true
        })
        .cloned()
        .collect();

    // Stable sort keeps the backend's order for ties
    matches.sort_by(|a, b| {
        let ordering = compare(a, b, query.sort_key);
        match query.sort_direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    paginate(matches, query.page, query.page_size)
}

fn matches_search(product: &ProductRecord, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
        || product.supplier.to_lowercase().contains(needle)
}

fn compare(a: &ProductRecord, b: &ProductRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Price => a.price_cents.cmp(&b.price_cents),
        SortKey::Quantity => a.quantity.total_cmp(&b.quantity),
        SortKey::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
    }
}

fn paginate(matches: Vec<ProductRecord>, page: usize, page_size: usize) -> Page<ProductRecord> {
    let page_size = page_size.max(1);
    let page = page.max(1);
    let total = matches.len();
    let page_count = total.div_ceil(page_size);

    let start = (page - 1).saturating_mul(page_size);
    let items = if start < total {
        matches[start..total.min(start + page_size)].to_vec()
    } else {
        Vec::new()
    };

    Page {
        items,
        total,
        page,
        page_count,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
