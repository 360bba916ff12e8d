//! Community label registries.
//!
//! Two shapes of the same mapping:
//! - [`FlatRegistry`] keys labels by the full joined community string and
//!   combines registries with a non-mutating [`FlatRegistry::merge`].
//! - [`CommunityTree`] keys each level by one path segment, resolving
//!   lookups segment by segment with `*` as a per-level fallback.
//!
//! Both are seeded from the same IANA well-known table.

mod flat;
mod tree;
mod well_known;

pub use flat::FlatRegistry;
pub use tree::{CommunityTree, Node};
pub use well_known::WELL_KNOWN_COMMUNITIES;
