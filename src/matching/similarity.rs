//! Name similarity scoring for shopping-list search and fuzzy seeding.
//!
//! Scores are layered: exact normalized equality, then full containment,
//! then per-word best-candidate scoring with an edit-distance fallback.

use strsim::levenshtein;

use super::config::MatchConfig;
use super::normalize::normalize;

/// Words shorter than this never qualify for containment or edit-distance
/// scoring; two-letter fragments match too much.
const MIN_WORD_LEN: usize = 3;

/// Compute a 0..1 similarity between two product names.
///
/// Asymmetric: the per-word average in the final layer is measured against
/// the first argument's word list, so callers pass the requested name first
/// and the catalog name second.
#[must_use]
pub fn similarity(requested: &str, candidate: &str, config: &MatchConfig) -> f64 {
    let a = normalize(requested);
    let b = normalize(candidate);

    if a == b {
        return 1.0;
    }

    // Full containment, e.g. "milk" inside "whole milk"
    if !a.is_empty() && !b.is_empty() && (a.contains(b.as_str()) || b.contains(a.as_str())) {
        return config.containment_score;
    }

    let words_a: Vec<&str> = a.split_whitespace().collect();
    let words_b: Vec<&str> = b.split_whitespace().collect();

    let total: f64 = words_a
        .iter()
        .map(|wa| best_word_score(wa, &words_b, config))
        .sum();

    total / words_a.len().max(1) as f64
}

/// Best score for one requested word against every candidate word.
fn best_word_score(word: &str, candidates: &[&str], config: &MatchConfig) -> f64 {
    candidates
        .iter()
        .map(|other| word_pair_score(word, other, config))
        .fold(0.0, f64::max)
}

/// Score a single word pair: exact, containment, then gated edit distance.
fn word_pair_score(w1: &str, w2: &str, config: &MatchConfig) -> f64 {
    if w1 == w2 {
        return 1.0;
    }

    let len1 = w1.chars().count();
    let len2 = w2.chars().count();

    if len1 >= MIN_WORD_LEN && len2 >= MIN_WORD_LEN && (w1.contains(w2) || w2.contains(w1)) {
        return config.word_containment_score;
    }

    if len1 > 2 && len2 > 2 {
        let edit_score = 1.0 - levenshtein(w1, w2) as f64 / len1.max(len2) as f64;
        if edit_score > config.edit_accept_threshold {
            return edit_score;
        }
    }

    0.0
}
