//! Directory walking: recursively discovers and loads `.jsonl` label
//! files from a directory tree.

use std::collections::HashSet;
use std::path::Path;

use crate::error::CoreError;

use super::jsonl::parse_jsonl_records;
use super::types::LabelSet;

/// Load every `.jsonl` file under `dir`, sorted by path. Later sets are
/// meant to override earlier ones when layered.
pub fn load_label_dir(dir: &Path) -> Result<Vec<LabelSet>, CoreError> {
    if !dir.is_dir() {
        return Err(CoreError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("label directory not found: {}", dir.display()),
        )));
    }

    let mut sets = Vec::new();
    let mut seen_ids = HashSet::new();
    walk_label_dir(dir, dir, &mut sets, &mut seen_ids)?;
    tracing::debug!(path = %dir.display(), files = sets.len(), "loaded label directory");
    Ok(sets)
}

fn walk_label_dir(
    base: &Path,
    current: &Path,
    sets: &mut Vec<LabelSet>,
    seen_ids: &mut HashSet<String>,
) -> Result<(), CoreError> {
    // Sort directory entries by path for deterministic load order across
    // platforms and filesystems.
    let mut entries: Vec<_> = std::fs::read_dir(current)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|e| e.path());

    entries.into_iter().try_for_each(|entry| {
        let path = entry.path();
        if path.is_dir() {
            return walk_label_dir(base, &path, sets, seen_ids);
        }

        if path.extension().is_none_or(|ext| ext != "jsonl") {
            return Ok(());
        }

        load_single_label_file(base, &path, sets, seen_ids)
    })
}

/// The set ID is the path relative to `base` without the `.jsonl`
/// extension, with `\` normalized to `/`.
fn load_single_label_file(
    base: &Path,
    path: &Path,
    sets: &mut Vec<LabelSet>,
    seen_ids: &mut HashSet<String>,
) -> Result<(), CoreError> {
    let relative = path.strip_prefix(base).unwrap_or(path);
    let id = relative
        .with_extension("")
        .to_string_lossy()
        .replace('\\', "/");

    if id.is_empty() {
        return Ok(());
    }

    if !seen_ids.insert(id.clone()) {
        return Err(CoreError::DuplicateLabelFile(id));
    }

    let content = std::fs::read_to_string(path)?;
    let records = parse_jsonl_records(&content)?;
    tracing::debug!(%id, records = records.len(), "loaded label file");

    sets.push(LabelSet {
        id,
        source_path: Some(path.to_path_buf()),
        records,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::unique_test_dir;

    #[test]
    fn nested_label_file_id_preserves_folder_segments() {
        let base = unique_test_dir("label-dir-test");
        let nested = base.join("customers");
        std::fs::create_dir_all(&nested).expect("create nested test dir");
        std::fs::write(
            nested.join("transit.jsonl"),
            r#"{"community":"64512:*","label":"transit customer"}"#,
        )
        .expect("write test label file");
        std::fs::write(base.join("notes.txt"), "ignored").expect("write non-jsonl file");

        let sets = load_label_dir(&base).expect("load label dir");

        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].id, "customers/transit");
        assert_eq!(sets[0].record_count(), 1);
        assert!(sets[0].source_path.is_some());

        std::fs::remove_dir_all(&base).expect("cleanup test dir");
    }

    #[test]
    fn files_load_in_path_order() {
        let base = unique_test_dir("label-order-test");
        std::fs::create_dir_all(base.join("a")).expect("create test dir");
        std::fs::write(
            base.join("b.jsonl"),
            r#"{"community":"64512:1","label":"from b"}"#,
        )
        .expect("write b");
        std::fs::write(
            base.join("a").join("z.jsonl"),
            r#"{"community":"64512:1","label":"from a/z"}"#,
        )
        .expect("write a/z");

        let sets = load_label_dir(&base).expect("load label dir");
        let ids: Vec<_> = sets.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a/z", "b"]);

        std::fs::remove_dir_all(&base).expect("cleanup test dir");
    }

    #[test]
    fn parse_error_aborts_loading() {
        let base = unique_test_dir("label-bad-test");
        std::fs::create_dir_all(&base).expect("create test dir");
        std::fs::write(base.join("bad.jsonl"), "{").expect("write bad file");

        let err = load_label_dir(&base).expect_err("must fail");
        assert!(matches!(err, CoreError::LabelParse { line: 1, .. }));

        std::fs::remove_dir_all(&base).expect("cleanup test dir");
    }

    #[test]
    fn missing_directory_is_not_found() {
        let base = unique_test_dir("label-missing-test");
        let err = load_label_dir(&base).expect_err("must fail");
        assert!(matches!(err, CoreError::Io(e) if e.kind() == std::io::ErrorKind::NotFound));
    }
}
