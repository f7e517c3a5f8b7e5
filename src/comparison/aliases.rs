//! Store-brand alias table for chain identity resolution.
//!
//! Chains publish their name in several variants ("Shufersal Deal",
//! "shufersal-express", a Hebrew brand name); the registry keys chain
//! metadata by one canonical form. The table is injectable data, not
//! hard-coded logic: callers load their own mappings from JSON.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Canonicalization key for a raw store name: lowercase alphanumerics only.
///
/// Distinct from the product-name normalizer; brand labels differ in spacing
/// and punctuation ("Rami-Levy" vs "rami levy"), none of which identifies the
/// chain.
#[must_use]
pub fn store_name_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

/// Alias table mapping store-brand variants to one canonical chain name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreAliasTable {
    /// Mapping from alias key to canonical chain name
    alias_to_canonical: HashMap<String, String>,
    /// Mapping from canonical chain name to all alias keys
    canonical_to_aliases: HashMap<String, HashSet<String>>,
}

impl StoreAliasTable {
    /// Create a new empty alias table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register brand variants for a canonical chain name.
    ///
    /// The canonical name is registered as its own alias, so a registry
    /// keyed by canonical names resolves without extra entries.
    pub fn add_aliases(&mut self, canonical: &str, aliases: &[&str]) {
        let canonical_key = store_name_key(canonical);

        self.alias_to_canonical
            .insert(canonical_key.clone(), canonical.to_string());

        let alias_set = self
            .canonical_to_aliases
            .entry(canonical.to_string())
            .or_default();
        alias_set.insert(canonical_key);

        for alias in aliases {
            let alias_key = store_name_key(alias);
            self.alias_to_canonical
                .insert(alias_key.clone(), canonical.to_string());
            if let Some(set) = self.canonical_to_aliases.get_mut(canonical) {
                set.insert(alias_key);
            }
        }
    }

    /// Resolve a raw store name to its canonical chain name.
    ///
    /// Unknown names resolve to themselves so lookups degrade to the raw
    /// label instead of failing.
    #[must_use]
    pub fn canonical(&self, raw: &str) -> String {
        self.alias_to_canonical
            .get(&store_name_key(raw))
            .cloned()
            .unwrap_or_else(|| raw.to_string())
    }

    /// Check whether a raw name is a registered variant of a canonical name.
    #[must_use]
    pub fn is_alias(&self, canonical: &str, raw: &str) -> bool {
        self.canonical_to_aliases
            .get(canonical)
            .is_some_and(|aliases| aliases.contains(&store_name_key(raw)))
    }

    /// Load alias mappings from JSON.
    pub fn load_json(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let entries: Vec<AliasEntry> = serde_json::from_str(json)?;
        for entry in entries {
            let aliases: Vec<&str> = entry.aliases.iter().map(String::as_str).collect();
            self.add_aliases(&entry.canonical, &aliases);
        }
        Ok(())
    }

    /// Export alias mappings to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let entries: Vec<AliasEntry> = self
            .canonical_to_aliases
            .iter()
            .map(|(canonical, aliases)| AliasEntry {
                canonical: canonical.clone(),
                aliases: aliases.iter().cloned().collect(),
            })
            .collect();
        serde_json::to_string_pretty(&entries)
    }
}

/// Entry in the alias table JSON format.
#[derive(Debug, Serialize, Deserialize)]
struct AliasEntry {
    canonical: String,
    aliases: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> StoreAliasTable {
        let mut table = StoreAliasTable::new();
        table.add_aliases("Shufersal", &["Shufersal Deal", "shufersal-express"]);
        table.add_aliases("Rami Levy", &["rami-levy", "Rami Levi Shivuk Hashikma"]);
        table
    }

    #[test]
    fn test_variant_resolves_to_canonical() {
        let table = table();
        assert_eq!(table.canonical("SHUFERSAL DEAL"), "Shufersal");
        assert_eq!(table.canonical("rami-levy"), "Rami Levy");
    }

    #[test]
    fn test_canonical_resolves_to_itself() {
        assert_eq!(table().canonical("Shufersal"), "Shufersal");
    }

    #[test]
    fn test_unknown_name_passes_through() {
        assert_eq!(table().canonical("Tiv Taam"), "Tiv Taam");
    }

    #[test]
    fn test_is_alias() {
        let table = table();
        assert!(table.is_alias("Shufersal", "shufersal express"));
        assert!(!table.is_alias("Shufersal", "rami-levy"));
    }

    #[test]
    fn test_json_round_trip() {
        let json = table().to_json().expect("export");
        let mut restored = StoreAliasTable::new();
        restored.load_json(&json).expect("import");
        assert_eq!(restored.canonical("shufersal deal"), "Shufersal");
    }

    #[test]
    fn test_store_name_key() {
        assert_eq!(store_name_key("Rami-Levy "), "ramilevy");
        // Non-ASCII brand names keep their letters
        assert_eq!(store_name_key("שופרסל"), "שופרסל");
    }
}
