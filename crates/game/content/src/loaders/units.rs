//! Unit catalog loader.

use std::path::Path;

use crate::catalog::UnitTemplate;
use crate::loaders::{LoadResult, ensure_unique_ids, read_file};

/// Loader for unit templates from RON files.
pub struct UnitLoader;

impl UnitLoader {
    /// Load unit templates from a RON file.
    ///
    /// RON format: `Vec<(String, UnitTemplate)>`
    pub fn load(path: &Path) -> LoadResult<Vec<(String, UnitTemplate)>> {
        let content = read_file(path)?;
        let units = Self::parse(&content)?;
        tracing::debug!("Loaded {} unit templates from {}", units.len(), path.display());
        Ok(units)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<(String, UnitTemplate)>> {
        let units: Vec<(String, UnitTemplate)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse unit catalog RON: {}", e))?;

        ensure_unique_ids("unit", &units)?;
        for (id, template) in &units {
            if template.stats.max_hp <= 0 {
                anyhow::bail!("Unit '{}' must have positive max_hp", id);
            }
            if template.stats.atk < 0 {
                anyhow::bail!("Unit '{}' must not have negative atk", id);
            }
        }
        Ok(units)
    }
}
