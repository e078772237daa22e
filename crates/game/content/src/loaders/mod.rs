//! Content loaders for reading game data from files.
//!
//! Catalogs are RON lists of `(id, record)` pairs; game rules are TOML.

pub mod config;
pub mod factory;
pub mod skills;
pub mod units;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use skills::SkillLoader;
pub use units::UnitLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Rejects catalogs that define the same id twice.
pub(crate) fn ensure_unique_ids<T>(kind: &str, entries: &[(String, T)]) -> LoadResult<()> {
    let mut seen = std::collections::HashSet::new();
    for (id, _) in entries {
        if !seen.insert(id.as_str()) {
            anyhow::bail!("Duplicate {} id '{}'", kind, id);
        }
    }
    Ok(())
}
