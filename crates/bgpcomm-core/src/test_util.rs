//! Shared test helpers for `bgpcomm-core` unit tests.

use std::path::PathBuf;

/// A fresh, not-yet-created directory path under the system temp dir,
/// unique per process and call.
pub fn unique_test_dir(prefix: &str) -> PathBuf {
    let unique = format!(
        "{prefix}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos()
    );
    std::env::temp_dir().join(unique)
}
