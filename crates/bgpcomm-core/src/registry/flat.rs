//! Single-level registry keyed by the full joined community string.

use std::collections::HashMap;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::community::well_known;

use super::tree::CommunityTree;
use super::well_known::WELL_KNOWN_COMMUNITIES;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatRegistry {
    entries: HashMap<String, String>,
}

impl FlatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the IANA well-known communities, keyed `65535:<value>`.
    pub fn well_known() -> Self {
        WELL_KNOWN_COMMUNITIES
            .iter()
            .map(|(value, label)| (well_known(value).to_string(), label.to_string()))
            .collect()
    }

    /// Returns a new registry with every entry of `self` followed by every
    /// entry of `other`; `other` wins on collision. Neither input changes.
    pub fn merge(&self, other: &Self) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(
            other
                .entries
                .iter()
                .map(|(community, label)| (community.clone(), label.clone())),
        );
        Self { entries }
    }

    pub fn get(&self, community: &str) -> Option<&str> {
        self.entries.get(community).map(String::as_str)
    }

    /// Insert or overwrite a label, returning the previous one.
    pub fn insert(
        &mut self,
        community: impl Into<String>,
        label: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(community.into(), label.into())
    }

    pub fn contains(&self, community: &str) -> bool {
        self.entries.contains_key(community)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by community string.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(community, label)| (community.as_str(), label.as_str()))
            .collect();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        entries.into_iter()
    }

    /// Build a hierarchical registry holding the same entries, splitting
    /// each key on `:`.
    pub fn to_tree(&self) -> CommunityTree {
        let mut tree = CommunityTree::new();
        for (community, label) in self.iter() {
            tree.set(community, label);
        }
        tree
    }
}

impl Index<&str> for FlatRegistry {
    type Output = str;

    /// Panics if `community` is absent, like `HashMap`'s `Index`.
    fn index(&self, community: &str) -> &str {
        &self.entries[community]
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlatRegistry {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for FlatRegistry {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom() -> FlatRegistry {
        FlatRegistry::from_iter([
            ("65535:666", "rtbh"),
            ("64512:100", "customer"),
        ])
    }

    #[test]
    fn well_known_seed() {
        let seed = FlatRegistry::well_known();
        assert_eq!(seed.len(), WELL_KNOWN_COMMUNITIES.len());
        assert_eq!(&seed["65535:1048321"], "no export");
        assert_eq!(seed.get("65535:0"), Some("graceful shutdown"));
        assert_eq!(seed.get("65535:666"), Some("blackhole"));
        assert_eq!(seed.get("65535:9999"), None);
    }

    #[test]
    fn merge_leaves_inputs_untouched() {
        let a = FlatRegistry::well_known();
        let b = custom();
        let a_before = a.clone();
        let b_before = b.clone();

        let _merged = a.merge(&b);

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn merge_right_hand_side_wins() {
        let a = FlatRegistry::well_known();
        let b = custom();
        let merged = a.merge(&b);

        for (community, label) in b.iter() {
            assert_eq!(merged.get(community), Some(label));
        }
        assert_eq!(merged.get("65535:666"), Some("rtbh"));
    }

    #[test]
    fn merge_keeps_left_only_keys() {
        let a = FlatRegistry::well_known();
        let b = custom();
        let merged = a.merge(&b);

        for (community, label) in a.iter().filter(|(c, _)| !b.contains(c)) {
            assert_eq!(merged.get(community), Some(label));
        }
        assert_eq!(merged.len(), a.len() + 1);
    }

    #[test]
    fn merged_registry_is_independent() {
        let a = FlatRegistry::well_known();
        let mut merged = a.merge(&FlatRegistry::new());
        merged.insert("65535:0", "changed");
        assert_eq!(a.get("65535:0"), Some("graceful shutdown"));
    }

    #[test]
    fn insert_returns_previous_label() {
        let mut registry = FlatRegistry::new();
        assert_eq!(registry.insert("64512:1", "first"), None);
        assert_eq!(registry.insert("64512:1", "second"), Some("first".into()));
        assert_eq!(registry.get("64512:1"), Some("second"));
    }

    #[test]
    fn iter_is_sorted_by_community() {
        let keys: Vec<_> = custom().iter().map(|(c, _)| c.to_string()).collect();
        assert_eq!(keys, ["64512:100", "65535:666"]);
    }

    #[test]
    fn to_tree_resolves_every_key() {
        let flat = FlatRegistry::well_known().merge(&custom());
        let tree = flat.to_tree();
        for (community, label) in flat.iter() {
            assert_eq!(tree.lookup(community), Ok(label));
        }
    }
}
