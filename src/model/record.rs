//! Catalog records and shopping-list lines.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CompareError, Result};

/// One store's catalog entry for a single product.
///
/// Records are immutable once ingested; the core only reads snapshots.
/// `item_code` is the catalog-wide join key assumed to denote "the same
/// product" across store chains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductRecord {
    /// Store chain identifier (e.g. "shufersal")
    pub store_chain: String,
    /// Branch identifier within the chain, if known
    #[serde(default)]
    pub store_id: Option<String>,
    /// Cross-store join key
    pub item_code: String,
    /// Display name as published by the chain
    pub item_name: String,
    /// Unit price, non-negative
    pub item_price: Decimal,
    /// When the chain last updated this price
    #[serde(default)]
    pub price_update_date: Option<DateTime<Utc>>,
}

impl ProductRecord {
    /// Check the shape invariants a record must satisfy before matching.
    ///
    /// A negative price or a missing join key would produce a silently wrong
    /// total downstream, so both fail fast instead.
    pub fn validate(&self) -> Result<()> {
        if self.item_code.trim().is_empty() {
            return Err(CompareError::missing_item_code(
                &self.store_chain,
                &self.item_name,
            ));
        }
        if self.item_price.is_sign_negative() {
            return Err(CompareError::negative_price(
                &self.store_chain,
                &self.item_name,
                self.item_price,
            ));
        }
        Ok(())
    }
}

/// One line of a user's shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListLine {
    /// Free text, matched against catalog item names
    pub name: String,
    /// Requested quantity
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Completed lines are excluded from comparison
    #[serde(default)]
    pub is_completed: bool,
}

const fn default_quantity() -> u32 {
    1
}

impl ShoppingListLine {
    /// Create an open line with the default quantity of 1.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: 1,
            is_completed: false,
        }
    }

    /// Set the requested quantity.
    #[must_use]
    pub const fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Mark the line completed.
    #[must_use]
    pub const fn completed(mut self) -> Self {
        self.is_completed = true;
        self
    }

    /// Check the shape invariants a line must satisfy before aggregation.
    pub fn validate(&self) -> Result<()> {
        if self.quantity == 0 {
            return Err(CompareError::non_positive_quantity(
                &self.name,
                self.quantity,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(price: &str, code: &str) -> ProductRecord {
        ProductRecord {
            store_chain: "shufersal".to_string(),
            store_id: Some("012".to_string()),
            item_code: code.to_string(),
            item_name: "Milk 3% 1L".to_string(),
            item_price: price.parse().expect("test price"),
            price_update_date: None,
        }
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(record("6.90", "7290000042").validate().is_ok());
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = record("-1.00", "7290000042").validate().unwrap_err();
        assert!(err.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_blank_item_code_rejected() {
        assert!(record("6.90", "  ").validate().is_err());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let line = ShoppingListLine::new("Milk").with_quantity(0);
        assert!(line.validate().is_err());
    }

    #[test]
    fn test_line_defaults_from_json() {
        let line: ShoppingListLine = serde_json::from_str(r#"{"name":"Bread"}"#).expect("parse");
        assert_eq!(line.quantity, 1);
        assert!(!line.is_completed);
    }

    #[test]
    fn test_unknown_catalog_field_rejected() {
        let json = r#"{
            "storeChain": "shufersal",
            "itemCode": "7290000042",
            "itemName": "Milk 3% 1L",
            "itemPrice": "6.90",
            "promoFlag": true
        }"#;
        let parsed: std::result::Result<ProductRecord, _> = serde_json::from_str(json);
        assert!(parsed.is_err(), "extra fields must be rejected, not dropped");
    }
}
