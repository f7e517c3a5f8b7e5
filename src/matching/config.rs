//! Matching configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CompareError, Result};

/// Configuration for name scoring and catalog matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Score awarded when one normalized name fully contains the other
    pub containment_score: f64,
    /// Score awarded when one word contains the other (both >= 3 chars)
    pub word_containment_score: f64,
    /// Minimum normalized edit-distance score a word pair must exceed
    pub edit_accept_threshold: f64,
    /// When set, a shopping-list line with no exact catalog hit falls back
    /// to the best fuzzy match at or above this score. `None` keeps the
    /// exact-seed-only behavior.
    #[serde(default)]
    pub fuzzy_seed_threshold: Option<f64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            containment_score: 0.9,
            word_containment_score: 0.8,
            edit_accept_threshold: 0.6,
            fuzzy_seed_threshold: None,
        }
    }
}

impl MatchConfig {
    /// Exact-seed-only matching with the default scoring constants.
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Default scoring constants plus fuzzy seeding at 0.75, so lines with
    /// no exact catalog hit still land in baskets.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            fuzzy_seed_threshold: Some(0.75),
            ..Self::default()
        }
    }

    /// Validate that every score and threshold lies in 0.0..=1.0.
    pub fn validate(&self) -> Result<()> {
        let unit_range = |name: &str, value: f64| -> Result<()> {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(CompareError::config(format!(
                    "{name} must be within 0.0..=1.0, got {value}"
                )))
            }
        };

        unit_range("containment_score", self.containment_score)?;
        unit_range("word_containment_score", self.word_containment_score)?;
        unit_range("edit_accept_threshold", self.edit_accept_threshold)?;
        if let Some(threshold) = self.fuzzy_seed_threshold {
            unit_range("fuzzy_seed_threshold", threshold)?;
        }
        Ok(())
    }
}
