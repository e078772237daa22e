//! Skill catalog loader.

use std::path::Path;

use game_core::SkillSpec;

use crate::loaders::{LoadResult, ensure_unique_ids, read_file};

/// Loader for skill records from RON files.
pub struct SkillLoader;

impl SkillLoader {
    /// Load skill records from a RON file.
    ///
    /// RON format: `Vec<(String, SkillSpec)>`
    pub fn load(path: &Path) -> LoadResult<Vec<(String, SkillSpec)>> {
        let content = read_file(path)?;
        let skills = Self::parse(&content)?;
        tracing::debug!("Loaded {} skills from {}", skills.len(), path.display());
        Ok(skills)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<(String, SkillSpec)>> {
        let skills: Vec<(String, SkillSpec)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill catalog RON: {}", e))?;

        ensure_unique_ids("skill", &skills)?;
        Ok(skills)
    }
}
