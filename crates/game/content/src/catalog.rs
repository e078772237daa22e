//! Unit and skill catalogs keyed by content id.

use std::collections::BTreeMap;

use game_core::{Allegiance, SkillSpec, UnitSpec, UnitStats};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, SkillLoader, UnitLoader};

/// Unit record without an allegiance; scenarios pick the side at placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitTemplate {
    pub unit_type: String,
    /// Display name, defaults to the unit type.
    #[serde(default)]
    pub name: Option<String>,
    pub stats: UnitStats,
    /// Skill catalog ids in slot order.
    #[serde(default)]
    pub skills: Vec<String>,
}

impl UnitTemplate {
    /// Builds a placement record for `allegiance` with already resolved skills.
    pub fn to_spec(&self, allegiance: Allegiance, skills: Vec<SkillSpec>) -> UnitSpec {
        let mut spec = UnitSpec::new(self.unit_type.clone(), self.stats, allegiance);
        if let Some(name) = &self.name {
            spec = spec.named(name.clone());
        }
        skills.into_iter().fold(spec, UnitSpec::with_skill)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillCatalog {
    skills: BTreeMap<String, SkillSpec>,
}

impl SkillCatalog {
    pub fn get(&self, id: &str) -> Option<&SkillSpec> {
        self.skills.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.skills.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl FromIterator<(String, SkillSpec)> for SkillCatalog {
    fn from_iter<I: IntoIterator<Item = (String, SkillSpec)>>(iter: I) -> Self {
        Self {
            skills: iter.into_iter().collect(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitCatalog {
    units: BTreeMap<String, UnitTemplate>,
}

impl UnitCatalog {
    pub fn get(&self, id: &str) -> Option<&UnitTemplate> {
        self.units.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl FromIterator<(String, UnitTemplate)> for UnitCatalog {
    fn from_iter<I: IntoIterator<Item = (String, UnitTemplate)>>(iter: I) -> Self {
        Self {
            units: iter.into_iter().collect(),
        }
    }
}

/// Units and the skills they reference.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    pub units: UnitCatalog,
    pub skills: SkillCatalog,
}

impl Catalog {
    /// Parses the catalog compiled into this crate.
    pub fn builtin() -> LoadResult<Self> {
        let units = UnitLoader::parse(include_str!("../data/units.ron"))?;
        let skills = SkillLoader::parse(include_str!("../data/skills.ron"))?;
        let catalog = Self {
            units: units.into_iter().collect(),
            skills: skills.into_iter().collect(),
        };
        tracing::debug!(
            "Loaded builtin catalog: {} units, {} skills",
            catalog.units.len(),
            catalog.skills.len()
        );
        Ok(catalog)
    }

    /// Returns the first skill id referenced by a unit template but missing
    /// from the skill catalog.
    pub fn dangling_skill(&self) -> Option<(&str, &str)> {
        self.units.units.iter().find_map(|(unit_id, template)| {
            template
                .skills
                .iter()
                .find(|skill| self.skills.get(skill).is_none())
                .map(|skill| (unit_id.as_str(), skill.as_str()))
        })
    }
}
