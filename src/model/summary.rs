//! Presentation-enriched comparison results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::StoreBasket;

/// Chain-level display identity, looked up by canonicalized store name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Branch-level display identity, looked up by store id.
///
/// Branch data wins over chain data when both resolve, since it carries the
/// street-level name and address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchInfo {
    pub chain_name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub branch_name: Option<String>,
    #[serde(default)]
    pub branch_address: Option<String>,
}

/// A store basket annotated with resolved display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreComparison {
    #[serde(flatten)]
    pub basket: StoreBasket,
    /// Resolved chain display name; falls back to the raw store name
    pub chain_name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub branch_name: Option<String>,
    #[serde(default)]
    pub branch_address: Option<String>,
}

/// Final output of a comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    /// Every store that priced at least one requested item
    pub comparisons: Vec<StoreComparison>,
    /// Stores that priced every distinct requested item
    pub complete: Vec<StoreComparison>,
    pub cheapest_total: Decimal,
    pub most_expensive_total: Decimal,
    /// `most_expensive_total - cheapest_total`
    pub potential_savings: Decimal,
    /// Savings as a percentage of the most expensive basket, trimmed decimal
    /// text ("37.5", "0"); a string so the zero-basket case never renders NaN
    pub savings_percentage: String,
    /// True when the savings figures had to be computed over incomplete
    /// baskets because no store priced every item
    pub partial: bool,
}

impl ComparisonSummary {
    /// The all-zero summary used when no store matched anything.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            comparisons: Vec::new(),
            complete: Vec::new(),
            cheapest_total: Decimal::ZERO,
            most_expensive_total: Decimal::ZERO,
            potential_savings: Decimal::ZERO,
            savings_percentage: "0".to_string(),
            partial: false,
        }
    }
}
