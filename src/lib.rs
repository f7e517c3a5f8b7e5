//! **Cross-store grocery price matching and basket comparison.**
//!
//! `basket-compare` is the computation core of a grocery price-comparison
//! application: given a shopping list and a snapshot of per-store catalog
//! records, it determines which catalog entries represent the same product
//! across store chains, aggregates matched items into one priced basket per
//! store, and reports cheapest/most-expensive totals with savings figures.
//!
//! Ingestion (price-list dumps, receipts), storage, and presentation are
//! external collaborators: the crate performs no I/O and holds no state.
//! Every comparison run is a pure computation over in-memory inputs, safe to
//! repeat and to invoke concurrently without coordination.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the boundary types — [`ProductRecord`] catalog entries,
//!   [`ShoppingListLine`]s, and the derived [`StoreBasket`] /
//!   [`ComparisonSummary`] outputs.
//! - **[`matching`]**: name normalization, the layered [`similarity`]
//!   scorer, and the [`CatalogMatcher`] that joins records across stores by
//!   item code.
//! - **[`basket`]**: [`aggregate`], the reducer that folds a shopping list
//!   into per-store baskets.
//! - **[`comparison`]**: the [`ChainRegistry`] display-identity lookup,
//!   [`enhance`] for savings computation, and the [`compare`] entry point.
//!
//! ## Getting Started
//!
//! ```
//! use basket_compare::{compare, ChainRegistry, MatchConfig, ShoppingListLine};
//! use basket_compare::model::ProductRecord;
//!
//! fn main() -> basket_compare::Result<()> {
//!     let catalog: Vec<ProductRecord> = serde_json::from_str(
//!         r#"[
//!             {"storeChain": "shufersal", "itemCode": "A1",
//!              "itemName": "Milk 3% 1L", "itemPrice": "6.90"},
//!             {"storeChain": "victory", "itemCode": "A1",
//!              "itemName": "Milk 3% 1L", "itemPrice": "7.20"}
//!         ]"#,
//!     ).expect("catalog snapshot");
//!
//!     let list = vec![ShoppingListLine::new("Milk 3% 1L").with_quantity(2)];
//!
//!     let summary = compare(&list, &catalog, &ChainRegistry::new(), &MatchConfig::default())?;
//!     assert_eq!(summary.comparisons.len(), 2);
//!     assert_eq!(summary.savings_percentage, "4.17");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The core favors silent degradation: unmatched items, empty catalogs,
//! empty lists, and missing chain metadata resolve to empty or zero results,
//! because a partial comparison is a valid outcome for the end user. Only
//! shape violations that would corrupt a total — a zero quantity, a negative
//! price, a record without its item code — fail fast with a
//! [`CompareError`].

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Similarity math casts word counts and edit distances to f64; all
    // values are bounded by name lengths in practice
    clippy::cast_precision_loss
)]

pub mod basket;
pub mod comparison;
pub mod error;
pub mod matching;
pub mod model;

// Re-export main types for convenience
pub use basket::aggregate;
pub use comparison::{compare, enhance, store_name_key, ChainRegistry, StoreAliasTable};
pub use error::{CompareError, InputErrorKind, Result};
pub use matching::{normalize, similarity, CatalogMatcher, MatchConfig};
pub use model::{
    BranchInfo, ChainInfo, ComparisonSummary, MatchedItem, ProductRecord, ShoppingListLine,
    StoreBasket, StoreComparison, StoreKey,
};
