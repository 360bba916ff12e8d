//! Label record and label set types.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::registry::{CommunityTree, FlatRegistry};

use super::jsonl::parse_jsonl_records;

/// A single custom label line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommunityRecord {
    pub community: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

/// The records of one label file, keyed by community string.
#[derive(Debug, Clone)]
pub struct LabelSet {
    pub id: String,
    pub source_path: Option<PathBuf>,
    pub(super) records: BTreeMap<String, CommunityRecord>,
}

impl LabelSet {
    /// Parse JSONL content that did not come from disk.
    pub fn from_jsonl(id: impl Into<String>, content: &str) -> Result<Self, CoreError> {
        Ok(Self {
            id: id.into(),
            source_path: None,
            records: parse_jsonl_records(content)?,
        })
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Records in community order.
    pub fn records(&self) -> impl Iterator<Item = &CommunityRecord> {
        self.records.values()
    }

    pub fn registry(&self) -> FlatRegistry {
        self.records()
            .map(|record| (record.community.as_str(), record.label.as_str()))
            .collect()
    }

    /// Set every record into `tree`, overwriting existing paths.
    pub fn apply_to(&self, tree: &mut CommunityTree) {
        for record in self.records() {
            tree.set(&record.community, record.label.as_str());
        }
        tracing::debug!(
            id = %self.id,
            records = self.records.len(),
            "applied label set"
        );
    }
}
