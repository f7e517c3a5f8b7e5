//! Unified error types for basket-compare.
//!
//! The comparison core favors silent degradation: unmatched items, empty
//! catalogs, empty lists, and missing chain metadata all resolve to empty or
//! zero results, because a partial comparison is a valid, displayable outcome.
//! The only hard failures are malformed inputs that would otherwise produce a
//! silently wrong total.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for basket-compare operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CompareError {
    /// Input shape violations detected before any matching runs
    #[error("Invalid input: {context}")]
    Input {
        context: String,
        #[source]
        source: InputErrorKind,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific input error kinds.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InputErrorKind {
    #[error("Quantity must be at least 1, got {quantity} for line '{name}'")]
    NonPositiveQuantity { name: String, quantity: u32 },

    #[error("Negative price {price} for item '{item_name}' at {store_chain}")]
    NegativePrice {
        store_chain: String,
        item_name: String,
        price: Decimal,
    },

    #[error("Catalog record '{item_name}' at {store_chain} is missing its item code")]
    MissingItemCode {
        store_chain: String,
        item_name: String,
    },
}

/// Convenient Result type for basket-compare operations.
pub type Result<T> = std::result::Result<T, CompareError>;

impl CompareError {
    /// Create an input error with context
    pub fn input(context: impl Into<String>, source: InputErrorKind) -> Self {
        Self::Input {
            context: context.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an input error for a non-positive line quantity
    pub fn non_positive_quantity(name: impl Into<String>, quantity: u32) -> Self {
        Self::input(
            "shopping list line",
            InputErrorKind::NonPositiveQuantity {
                name: name.into(),
                quantity,
            },
        )
    }

    /// Create an input error for a negative catalog price
    pub fn negative_price(
        store_chain: impl Into<String>,
        item_name: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self::input(
            "catalog record",
            InputErrorKind::NegativePrice {
                store_chain: store_chain.into(),
                item_name: item_name.into(),
                price,
            },
        )
    }

    /// Create an input error for a catalog record without a join key
    pub fn missing_item_code(
        store_chain: impl Into<String>,
        item_name: impl Into<String>,
    ) -> Self {
        Self::input(
            "catalog record",
            InputErrorKind::MissingItemCode {
                store_chain: store_chain.into(),
                item_name: item_name.into(),
            },
        )
    }
}
