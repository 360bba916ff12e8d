//! Hierarchical registry: one map level per community path segment.
//!
//! Each level maps a segment to a [`Node`], either a label (leaf) or a
//! nested [`CommunityTree`]. Branches may end at different depths, so
//! `65535:666` can be a leaf while `64512:100:7` sits three levels down.
//!
//! Resolution at every level tries the exact segment first and falls back
//! to the `*` key only when the exact key is absent. A walk never
//! backtracks into a sibling branch once a level has been resolved.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::community::{split_segments, CommunityPath, DELIMITER, WELL_KNOWN_ASN, WILDCARD};
use crate::error::NotFound;

use super::flat::FlatRegistry;
use super::well_known::WELL_KNOWN_COMMUNITIES;

// ==============================================================================
// Nodes
// ==============================================================================

/// A registry entry. In JSON a label is a string and a sub-registry is an
/// object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Label(String),
    Registry(CommunityTree),
}

impl Node {
    pub fn as_label(&self) -> Option<&str> {
        match self {
            Self::Label(label) => Some(label),
            Self::Registry(_) => None,
        }
    }

    pub fn as_registry(&self) -> Option<&CommunityTree> {
        match self {
            Self::Label(_) => None,
            Self::Registry(tree) => Some(tree),
        }
    }

    /// Turn this node into an interior node, discarding a label if one is
    /// here, and return the sub-registry.
    fn registry_mut(&mut self) -> &mut CommunityTree {
        if let Self::Label(label) = self {
            tracing::debug!(%label, "replacing label with sub-registry");
            *self = Self::Registry(CommunityTree::new());
        }
        match self {
            Self::Registry(tree) => tree,
            Self::Label(_) => unreachable!("label replaced above"),
        }
    }
}

// ==============================================================================
// Community Tree
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommunityTree {
    children: BTreeMap<String, Node>,
}

impl CommunityTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tree whose only top-level key is `65535`, holding the IANA
    /// well-known values.
    pub fn well_known() -> Self {
        let well_known = WELL_KNOWN_COMMUNITIES
            .iter()
            .map(|(value, label)| (value.to_string(), Node::Label(label.to_string())))
            .collect();

        Self {
            children: BTreeMap::from([(
                WELL_KNOWN_ASN.to_string(),
                Node::Registry(Self {
                    children: well_known,
                }),
            )]),
        }
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Resolve `community` to a label.
    ///
    /// The walk consumes one segment per level and stops early when a
    /// level has neither the segment nor `*`, or when it reaches a label.
    /// A label reached before the path runs out is the result, so
    /// `65535:0:x` resolves like `65535:0`. Ending on a sub-registry, or
    /// stopping on a miss, is [`NotFound`].
    pub fn lookup(&self, community: &str) -> Result<&str, NotFound> {
        let mut registry = self;
        for segment in split_segments(community) {
            match registry.resolve_segment(segment) {
                Some(Node::Label(label)) => return Ok(label),
                Some(Node::Registry(next)) => registry = next,
                None => break,
            }
        }
        Err(NotFound::new(community))
    }

    pub fn lookup_path(&self, path: &CommunityPath) -> Result<&str, NotFound> {
        self.lookup(&path.to_string())
    }

    /// Mutable access to whichever label [`lookup`](Self::lookup) would
    /// return, including labels reached through a wildcard.
    pub fn lookup_mut(&mut self, community: &str) -> Result<&mut String, NotFound> {
        let mut registry = self;
        for segment in split_segments(community) {
            let Some(key) = registry.step_key(segment) else {
                break;
            };
            registry = match registry.children.get_mut(key) {
                Some(Node::Label(label)) => return Ok(label),
                Some(Node::Registry(next)) => next,
                None => break,
            };
        }
        Err(NotFound::new(community))
    }

    /// Exact-only access to one entry at this level; never consults `*`.
    pub fn get_node(&self, segment: &str) -> Option<&Node> {
        self.children.get(segment)
    }

    /// The key a segment resolves through at this level: the segment itself
    /// when present, otherwise `*` when present. `lookup` and `lookup_mut`
    /// both step through here so they agree on resolution order.
    fn step_key<'k>(&self, segment: &'k str) -> Option<&'k str> {
        if self.children.contains_key(segment) {
            return Some(segment);
        }
        if self.children.contains_key(WILDCARD) {
            tracing::trace!(segment, "falling back to wildcard");
            return Some(WILDCARD);
        }
        None
    }

    fn resolve_segment(&self, segment: &str) -> Option<&Node> {
        self.step_key(segment).and_then(|key| self.children.get(key))
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Place `label` at exactly `community`, creating missing levels.
    ///
    /// Intermediate segments are matched literally, so a `*` entry on the
    /// way is never written through. Whatever sat at the final segment is
    /// overwritten; a label sitting where an intermediate level is needed
    /// is replaced by a sub-registry.
    pub fn set(&mut self, community: &str, label: impl Into<String>) {
        let (parents, last) = match community.rsplit_once(DELIMITER) {
            Some((parents, last)) => (Some(parents), last),
            None => (None, community),
        };

        let mut registry = self;
        for segment in parents.into_iter().flat_map(split_segments) {
            registry = registry
                .children
                .entry(segment.to_string())
                .or_insert_with(|| Node::Registry(Self::new()))
                .registry_mut();
        }
        registry
            .children
            .insert(last.to_string(), Node::Label(label.into()));
    }

    pub fn set_path(&mut self, path: &CommunityPath, label: impl Into<String>) {
        self.set(&path.to_string(), label);
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Number of labels anywhere in the tree.
    pub fn len(&self) -> usize {
        self.children
            .values()
            .map(|node| match node {
                Node::Label(_) => 1,
                Node::Registry(tree) => tree.len(),
            })
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Every label with its full path, depth first in key order. Wildcard
    /// keys appear literally as `*` segments.
    pub fn entries(&self) -> Vec<(CommunityPath, &str)> {
        let mut out = Vec::new();
        self.collect_entries(&CommunityPath::from_segments(Vec::<String>::new()), &mut out);
        out
    }

    fn collect_entries<'a>(
        &'a self,
        prefix: &CommunityPath,
        out: &mut Vec<(CommunityPath, &'a str)>,
    ) {
        for (segment, node) in &self.children {
            let path = prefix.child(segment.as_str());
            match node {
                Node::Label(label) => out.push((path, label.as_str())),
                Node::Registry(tree) => tree.collect_entries(&path, out),
            }
        }
    }

    /// Flat view keyed by joined path.
    pub fn flatten(&self) -> FlatRegistry {
        self.entries()
            .into_iter()
            .map(|(path, label)| (path.to_string(), label))
            .collect()
    }
}
