//! Custom community labels stored as JSONL files.
//!
//! One record per line, e.g. `{"community":"64512:*","label":"customer routes"}`.
//! A directory of such files is loaded recursively in path order; each
//! file becomes a [`LabelSet`] that can be layered over the well-known
//! registries.

mod dir;
mod jsonl;
mod types;

pub use dir::load_label_dir;
pub use jsonl::{export_jsonl, parse_jsonl_records};
pub use types::{CommunityRecord, LabelSet};

use crate::registry::FlatRegistry;

/// Combine label sets in order; later sets win on collision.
pub fn merge_label_sets<'a>(sets: impl IntoIterator<Item = &'a LabelSet>) -> FlatRegistry {
    sets.into_iter()
        .fold(FlatRegistry::new(), |merged, set| merged.merge(&set.registry()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CommunityTree;

    fn set(id: &str, content: &str) -> LabelSet {
        LabelSet::from_jsonl(id, content).expect("valid label set")
    }

    #[test]
    fn later_sets_win() {
        let first = set(
            "first",
            concat!(
                r#"{"community":"64512:1","label":"first"}"#,
                "\n",
                r#"{"community":"64512:2","label":"only first"}"#,
            ),
        );
        let second = set("second", r#"{"community":"64512:1","label":"second"}"#);

        let merged = merge_label_sets([&first, &second]);
        assert_eq!(merged.get("64512:1"), Some("second"));
        assert_eq!(merged.get("64512:2"), Some("only first"));
    }

    #[test]
    fn apply_to_layers_over_well_known() {
        let custom = set(
            "custom",
            concat!(
                r#"{"community":"64512:*","label":"customer routes"}"#,
                "\n",
                r#"{"community":"65535:666","label":"rtbh"}"#,
            ),
        );
        let mut tree = CommunityTree::well_known();
        custom.apply_to(&mut tree);

        assert_eq!(tree.lookup("64512:42"), Ok("customer routes"));
        assert_eq!(tree.lookup("65535:666"), Ok("rtbh"));
        assert_eq!(tree.lookup("65535:0"), Ok("graceful shutdown"));
    }

    #[test]
    fn registry_round_trips_through_export() {
        let custom = set("custom", r#"{"community":"64512:7","label":"seven","origin":"noc"}"#);
        let exported = export_jsonl(&custom.registry());
        let reparsed = set("reparsed", &exported);
        assert_eq!(reparsed.registry(), custom.registry());
        assert_eq!(reparsed.records().next().and_then(|r| r.origin.as_deref()), None);
    }
}
