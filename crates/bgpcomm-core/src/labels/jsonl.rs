//! JSONL serialization and deserialization for community label records.

use std::collections::BTreeMap;

use crate::error::CoreError;
use crate::registry::FlatRegistry;

use super::types::CommunityRecord;

/// Parse JSONL content into records keyed by community, skipping empty
/// lines. Duplicate communities are accepted; the later line wins and a
/// warning is logged.
pub fn parse_jsonl_records(
    content: &str,
) -> Result<BTreeMap<String, CommunityRecord>, CoreError> {
    content
        .lines()
        .enumerate()
        .try_fold(BTreeMap::new(), |mut map, (line_num, line)| {
            let line = line.trim();
            if line.is_empty() {
                return Ok(map);
            }

            let parse_error = |message: String| CoreError::LabelParse {
                line: line_num + 1,
                message,
            };

            let record: CommunityRecord =
                serde_json::from_str(line).map_err(|e| parse_error(e.to_string()))?;
            if record.community.trim().is_empty() {
                return Err(parse_error("community must not be empty".into()));
            }
            if record.label.trim().is_empty() {
                return Err(parse_error("label must not be empty".into()));
            }

            if map.contains_key(&record.community) {
                tracing::warn!(
                    line = line_num + 1,
                    community = %record.community,
                    "duplicate JSONL entry overwrites previous value"
                );
            }
            map.insert(record.community.clone(), record);
            Ok(map)
        })
}

/// Export a registry to JSONL, one record per line in community order.
pub fn export_jsonl(registry: &FlatRegistry) -> String {
    registry
        .iter()
        .map(|(community, label)| CommunityRecord {
            community: community.to_string(),
            label: label.to_string(),
            origin: None,
        })
        .map(|record| serde_json::to_string(&record).expect("valid JSON"))
        .map(|line| format!("{line}\n"))
        .collect()
}
