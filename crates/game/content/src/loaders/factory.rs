//! Content factory for loading a whole data directory.

use std::path::{Path, PathBuf};

use game_core::GameConfig;

use crate::catalog::Catalog;
use crate::loaders::{ConfigLoader, LoadResult, SkillLoader, UnitLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── skills.ron
/// └── units.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load units and skills, rejecting units that reference unknown skills.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let units = UnitLoader::load(&self.data_dir.join("units.ron"))?;
        let skills = SkillLoader::load(&self.data_dir.join("skills.ron"))?;
        let catalog = Catalog {
            units: units.into_iter().collect(),
            skills: skills.into_iter().collect(),
        };

        if let Some((unit, skill)) = catalog.dangling_skill() {
            anyhow::bail!("Unit '{}' references unknown skill '{}'", unit, skill);
        }
        Ok(catalog)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
