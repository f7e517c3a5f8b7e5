//! Comparison enhancement, savings computation, and the pipeline entry point.
//!
//! [`enhance`] annotates aggregated baskets with display identity resolved
//! from a [`ChainRegistry`], splits out the complete baskets, and computes
//! cheapest/most-expensive/savings figures. [`compare`] wires the whole run
//! together: validate, aggregate, enhance.

mod aliases;

pub use aliases::{store_name_key, StoreAliasTable};

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::basket::{aggregate, requested_quantities};
use crate::error::Result;
use crate::matching::{CatalogMatcher, MatchConfig};
use crate::model::{
    BranchInfo, ChainInfo, ComparisonSummary, ProductRecord, ShoppingListLine, StoreBasket,
    StoreComparison,
};

/// External chain/branch display metadata, plus the alias table used to
/// canonicalize raw store names for chain-level lookups.
#[derive(Debug, Clone, Default)]
pub struct ChainRegistry {
    /// Chain metadata keyed by canonical chain name
    pub chain_info: HashMap<String, ChainInfo>,
    /// Branch metadata keyed by store id
    pub branch_info: HashMap<String, BranchInfo>,
    /// Brand-variant mappings applied before chain_info lookups
    pub aliases: StoreAliasTable,
}

impl ChainRegistry {
    /// Create an empty registry; baskets then render under their raw names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve display identity for one basket, branch data first.
    fn resolve(&self, basket: &StoreBasket) -> StoreComparison {
        if let Some(branch) = self.branch_info.get(&basket.store_id) {
            return StoreComparison {
                basket: basket.clone(),
                chain_name: branch.chain_name.clone(),
                logo_url: branch.logo_url.clone(),
                branch_name: branch.branch_name.clone(),
                branch_address: branch.branch_address.clone(),
            };
        }

        let canonical = self.aliases.canonical(&basket.store_name);
        if let Some(chain) = self.chain_info.get(&canonical) {
            return StoreComparison {
                basket: basket.clone(),
                chain_name: chain.name.clone(),
                logo_url: chain.logo_url.clone(),
                branch_name: None,
                branch_address: None,
            };
        }

        tracing::warn!(
            store = %basket.store_name,
            store_id = %basket.store_id,
            "no chain metadata resolved, rendering raw store name"
        );
        StoreComparison {
            basket: basket.clone(),
            chain_name: basket.store_name.clone(),
            logo_url: None,
            branch_name: None,
            branch_address: None,
        }
    }
}

/// Annotate baskets with display identity and compute savings figures.
///
/// `requested_count` is the number of distinct open shopping-list names this
/// run asked for; a basket matching all of them is complete. Savings are
/// computed over the complete baskets when any exist, otherwise over all
/// baskets with the summary flagged `partial`. Zero baskets produce the
/// all-zero summary, never a division by zero.
#[must_use]
pub fn enhance(
    baskets: &[StoreBasket],
    registry: &ChainRegistry,
    requested_count: usize,
) -> ComparisonSummary {
    if baskets.is_empty() {
        return ComparisonSummary::empty();
    }

    let comparisons: Vec<StoreComparison> = baskets.iter().map(|b| registry.resolve(b)).collect();
    let complete: Vec<StoreComparison> = comparisons
        .iter()
        .filter(|c| c.basket.available_items() == requested_count)
        .cloned()
        .collect();

    let partial = complete.is_empty();
    let scored: &[StoreComparison] = if partial { &comparisons } else { &complete };

    // Baskets arrive sorted ascending by total, but scoring over the
    // complete subset re-derives both ends instead of trusting position.
    let cheapest = scored.iter().map(|c| c.basket.total).min().unwrap_or_default();
    let most_expensive = scored.iter().map(|c| c.basket.total).max().unwrap_or_default();
    let savings = most_expensive - cheapest;

    ComparisonSummary {
        comparisons,
        complete,
        cheapest_total: cheapest,
        most_expensive_total: most_expensive,
        potential_savings: savings,
        savings_percentage: savings_percentage(savings, most_expensive),
        partial,
    }
}

/// Render savings as a percentage of the most expensive basket.
///
/// Trimmed decimal text: 30 of 80 renders as "37.5", a zero denominator as
/// "0".
fn savings_percentage(savings: Decimal, most_expensive: Decimal) -> String {
    if most_expensive.is_zero() {
        return "0".to_string();
    }
    let pct = savings / most_expensive * Decimal::ONE_HUNDRED;
    pct.round_dp(2).normalize().to_string()
}

/// Run a full comparison: validate and aggregate the list, then enhance.
///
/// # Errors
///
/// Propagates the aggregator's fail-fast shape errors (see [`aggregate`]);
/// additionally rejects an invalid [`MatchConfig`].
pub fn compare(
    lines: &[ShoppingListLine],
    catalog: &[ProductRecord],
    registry: &ChainRegistry,
    config: &MatchConfig,
) -> Result<ComparisonSummary> {
    config.validate()?;
    let matcher = CatalogMatcher::new(config.clone());

    let baskets = aggregate(lines, catalog, &matcher)?;

    let open: Vec<&ShoppingListLine> = lines.iter().filter(|l| !l.is_completed).collect();
    let requested_count = requested_quantities(&open).len();

    Ok(enhance(&baskets, registry, requested_count))
}
