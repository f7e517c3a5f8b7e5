//! Shopping-list aggregation into per-store baskets.
//!
//! Aggregation is a pure reducer: every call builds its result from fresh
//! accumulator state and never mutates caller-supplied structures, so
//! identical inputs always reproduce identical output.

use indexmap::IndexMap;

use crate::error::Result;
use crate::matching::CatalogMatcher;
use crate::model::{ProductRecord, ShoppingListLine, StoreBasket, StoreKey};

/// Build one basket per store for the open lines of a shopping list.
///
/// Completed lines are filtered out first; duplicate manual entries of the
/// same name accumulate into a single request (two lines of "Bread" become
/// one request of quantity 2). Each distinct name is matched once against the
/// full catalog. Only stores with at least one matched item are kept, sorted
/// ascending by total; the sort is stable, so equal totals keep the order
/// stores first appeared in.
///
/// # Errors
///
/// Fails fast on shape violations: a zero quantity on an open line, a
/// negative price, or a catalog record with no item code. Absence of data
/// (empty list, empty catalog, unmatched names) is normal control flow and
/// produces an empty or partial result instead.
pub fn aggregate(
    lines: &[ShoppingListLine],
    catalog: &[ProductRecord],
    matcher: &CatalogMatcher,
) -> Result<Vec<StoreBasket>> {
    let open: Vec<&ShoppingListLine> = lines.iter().filter(|l| !l.is_completed).collect();
    if open.is_empty() {
        return Ok(Vec::new());
    }

    for line in &open {
        line.validate()?;
    }
    for record in catalog {
        record.validate()?;
    }

    let requested = requested_quantities(&open);

    let mut baskets: IndexMap<StoreKey, StoreBasket> = IndexMap::new();
    for (name, quantity) in &requested {
        for (key, item) in matcher.match_item(name, *quantity, catalog) {
            baskets
                .entry(key.clone())
                .or_insert_with(|| StoreBasket::new(&key))
                .push_item(item);
        }
    }

    let mut sorted: Vec<StoreBasket> = baskets.into_values().collect();
    sorted.sort_by(|a, b| a.total.cmp(&b.total));
    Ok(sorted)
}

/// Sum requested quantities per distinct name, in first-seen order.
pub(crate) fn requested_quantities(open: &[&ShoppingListLine]) -> IndexMap<String, u32> {
    let mut requested: IndexMap<String, u32> = IndexMap::new();
    for line in open {
        *requested.entry(line.name.clone()).or_insert(0) += line.quantity;
    }
    requested
}
