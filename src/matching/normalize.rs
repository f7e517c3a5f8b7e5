//! Product-name normalization for comparison.

/// Punctuation stripped before names are compared.
const PUNCTUATION: &[char] = &[
    '\'', '"', '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-',
    '_', '`', '~', '(', ')',
];

/// Normalize a product name for comparison.
///
/// Lower-cases, trims, strips a fixed punctuation set, and collapses internal
/// whitespace runs to single spaces. Total and idempotent; empty input yields
/// empty output.
#[must_use]
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_case() {
        assert_eq!(normalize("  A,B  "), "ab");
        assert_eq!(normalize("Milk 3% (1L)"), "milk 3 1l");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("whole\t  wheat   bread"), "whole wheat bread");
    }

    #[test]
    fn test_normalize_idempotent() {
        for s in ["  A,B  ", "Milk 3% (1L)", "", "cottage-cheese 5%"] {
            assert_eq!(normalize(&normalize(s)), normalize(s));
        }
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("-.,()"), "");
    }
}
