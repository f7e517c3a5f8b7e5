//! Cross-store product matching.
//!
//! Matching is seeded by the item code: the requested name is resolved to a
//! catalog record, and every record sharing that record's `item_code` is
//! treated as the same product at another store. Name similarity
//! ([`similarity`]) serves live search and, when enabled, fuzzy seeding for
//! lines with no exact catalog hit.
//!
//! # Example
//!
//! ```
//! use basket_compare::matching::{CatalogMatcher, MatchConfig};
//! use basket_compare::model::ProductRecord;
//!
//! let matcher = CatalogMatcher::new(MatchConfig::default());
//! let catalog: Vec<ProductRecord> = Vec::new();
//! let matches = matcher.match_item("Milk 3% 1L", 2, &catalog);
//! assert!(matches.is_empty());
//! ```

mod config;
mod normalize;
mod similarity;

pub use config::MatchConfig;
pub use normalize::normalize;
pub use similarity::similarity;

use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::model::{MatchedItem, ProductRecord, StoreKey};

/// Resolves a shopping-list line to one priced match per store.
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct CatalogMatcher {
    config: MatchConfig,
}

impl CatalogMatcher {
    /// Create a matcher with the given configuration.
    pub const fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration.
    #[must_use]
    pub const fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Match one requested item against the full catalog.
    ///
    /// Returns one [`MatchedItem`] per store that carries the product, keyed
    /// by chain and branch, in catalog order. An unmatched name yields an
    /// empty map: a silent miss, not an error.
    pub fn match_item(
        &self,
        name: &str,
        quantity: u32,
        catalog: &[ProductRecord],
    ) -> IndexMap<StoreKey, MatchedItem> {
        let Some(seed) = self.find_seed(name, catalog) else {
            tracing::debug!(item = name, "no catalog seed found, line dropped");
            return IndexMap::new();
        };

        // Pick one representative record per store before pricing anything:
        // a store can carry several rows for one item code (historical price
        // snapshots), and the most recently updated row wins.
        let mut representatives: IndexMap<StoreKey, &ProductRecord> = IndexMap::new();
        for record in catalog.iter().filter(|r| r.item_code == seed.item_code) {
            let key = StoreKey::new(&record.store_chain, record.store_id.as_deref());
            representatives
                .entry(key)
                .and_modify(|held| {
                    if record.price_update_date > held.price_update_date {
                        *held = record;
                    }
                })
                .or_insert(record);
        }

        representatives
            .into_iter()
            .map(|(key, record)| (key, self.matched_item(name, quantity, record)))
            .collect()
    }

    /// Find the record that seeds the shared item code.
    ///
    /// An exact raw-name hit always wins; with `fuzzy_seed_threshold` set,
    /// the best-scoring name at or above the threshold is used instead.
    fn find_seed<'a>(&self, name: &str, catalog: &'a [ProductRecord]) -> Option<&'a ProductRecord> {
        if let Some(exact) = catalog.iter().find(|r| r.item_name == name) {
            return Some(exact);
        }

        let threshold = self.config.fuzzy_seed_threshold?;
        let (best, score) = catalog
            .iter()
            .map(|r| (r, similarity(name, &r.item_name, &self.config)))
            .max_by(|(_, a), (_, b)| a.total_cmp(b))?;

        if score >= threshold {
            tracing::debug!(
                item = name,
                matched = %best.item_name,
                score,
                "fuzzy seed fallback"
            );
            Some(best)
        } else {
            None
        }
    }

    fn matched_item(&self, name: &str, quantity: u32, record: &ProductRecord) -> MatchedItem {
        MatchedItem {
            requested_name: name.to_string(),
            matched_product_name: record.item_name.clone(),
            unit_price: record.item_price,
            quantity,
            line_total: record.item_price * Decimal::from(quantity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(chain: &str, store: Option<&str>, code: &str, name: &str, price: &str) -> ProductRecord {
        ProductRecord {
            store_chain: chain.to_string(),
            store_id: store.map(str::to_string),
            item_code: code.to_string(),
            item_name: name.to_string(),
            item_price: price.parse().expect("test price"),
            price_update_date: None,
        }
    }

    fn matcher() -> CatalogMatcher {
        CatalogMatcher::new(MatchConfig::default())
    }

    #[test]
    fn test_exact_seed_matches_across_stores() {
        let catalog = vec![
            record("shufersal", Some("012"), "A1", "Milk", "10"),
            record("victory", Some("3"), "A1", "Milk 3% fresh", "12"),
        ];

        let matches = matcher().match_item("Milk", 2, &catalog);
        assert_eq!(matches.len(), 2);

        let shufersal = &matches[&StoreKey::new("shufersal", Some("012"))];
        assert_eq!(shufersal.line_total, Decimal::from(20));

        let victory = &matches[&StoreKey::new("victory", Some("3"))];
        assert_eq!(victory.matched_product_name, "Milk 3% fresh");
        assert_eq!(victory.line_total, Decimal::from(24));
    }

    #[test]
    fn test_no_seed_is_silent_miss() {
        let catalog = vec![record("shufersal", None, "A1", "Milk", "10")];
        assert!(matcher().match_item("Oat drink", 1, &catalog).is_empty());
    }

    #[test]
    fn test_missing_store_id_groups_under_main() {
        let catalog = vec![record("shufersal", None, "A1", "Milk", "10")];
        let matches = matcher().match_item("Milk", 1, &catalog);
        assert!(matches.contains_key(&StoreKey::new("shufersal", None)));
    }

    #[test]
    fn test_duplicate_code_prefers_most_recent_price() {
        let old = Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap();
        let new = Utc.with_ymd_and_hms(2026, 3, 5, 0, 0, 0).unwrap();

        let mut stale = record("shufersal", Some("012"), "A1", "Milk", "11");
        stale.price_update_date = Some(old);
        let mut fresh = record("shufersal", Some("012"), "A1", "Milk", "10");
        fresh.price_update_date = Some(new);

        let catalog = vec![stale, fresh];
        let matches = matcher().match_item("Milk", 1, &catalog);
        assert_eq!(matches.len(), 1);
        assert_eq!(
            matches[&StoreKey::new("shufersal", Some("012"))].unit_price,
            Decimal::from(10)
        );
    }

    #[test]
    fn test_undated_row_never_displaces_dated() {
        let dated = Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap();

        let mut first = record("shufersal", Some("012"), "A1", "Milk", "10");
        first.price_update_date = Some(dated);
        let undated = record("shufersal", Some("012"), "A1", "Milk", "9");

        let matches = matcher().match_item("Milk", 1, &[first, undated]);
        assert_eq!(
            matches[&StoreKey::new("shufersal", Some("012"))].unit_price,
            Decimal::from(10)
        );
    }

    #[test]
    fn test_full_tie_keeps_catalog_order() {
        let catalog = vec![
            record("shufersal", Some("012"), "A1", "Milk", "10"),
            record("shufersal", Some("012"), "A1", "Milk", "11"),
        ];
        let matches = matcher().match_item("Milk", 1, &catalog);
        assert_eq!(
            matches[&StoreKey::new("shufersal", Some("012"))].unit_price,
            Decimal::from(10)
        );
    }

    #[test]
    fn test_fuzzy_seed_disabled_by_default() {
        let catalog = vec![record("shufersal", None, "A1", "Whole Milk 3%", "10")];
        assert!(matcher().match_item("whole milk", 1, &catalog).is_empty());
    }

    #[test]
    fn test_fuzzy_seed_fallback_when_enabled() {
        let catalog = vec![
            record("shufersal", None, "A1", "Whole Milk 3%", "10"),
            record("victory", None, "A1", "Milk whole", "12"),
        ];

        let lenient = CatalogMatcher::new(MatchConfig::lenient());
        let matches = lenient.match_item("whole milk", 1, &catalog);
        assert_eq!(matches.len(), 2, "fuzzy seed should join both stores");
    }
}
