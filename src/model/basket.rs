//! Per-store basket structures produced by aggregation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Grouping key for one physical store: chain plus branch.
///
/// Records without a branch identifier fall into the chain's `"main"` group
/// so that branchless catalogs still produce one basket per chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreKey {
    pub chain: String,
    pub store_id: String,
}

impl StoreKey {
    /// Fallback branch id used when a record carries no `store_id`.
    pub const MAIN_BRANCH: &'static str = "main";

    /// Build the key for a chain/branch pair.
    #[must_use]
    pub fn new(chain: &str, store_id: Option<&str>) -> Self {
        Self {
            chain: chain.to_string(),
            store_id: store_id.unwrap_or(Self::MAIN_BRANCH).to_string(),
        }
    }
}

/// One matched shopping-list line priced at one store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedItem {
    /// The shopping-list name as the user wrote it
    pub requested_name: String,
    /// The catalog name of the record that priced this line
    pub matched_product_name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    /// `unit_price * quantity`
    pub line_total: Decimal,
}

/// All matched items and their combined cost for one store.
///
/// Only found matches are recorded; a missing item is implicit, never a
/// placeholder entry. `total` always equals the sum of line totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreBasket {
    pub store_name: String,
    pub store_id: String,
    pub items: Vec<MatchedItem>,
    pub total: Decimal,
}

impl StoreBasket {
    /// Create an empty basket for a store.
    #[must_use]
    pub fn new(key: &StoreKey) -> Self {
        Self {
            store_name: key.chain.clone(),
            store_id: key.store_id.clone(),
            items: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    /// Append a matched item, keeping `total` in sync.
    pub fn push_item(&mut self, item: MatchedItem) {
        self.total += item.line_total;
        self.items.push(item);
    }

    /// Number of requested lines this store could price.
    #[must_use]
    pub fn available_items(&self) -> usize {
        self.items.len()
    }
}
