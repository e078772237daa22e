//! Scenario system for unit placement and battle initialization.
//!
//! Scenarios name catalog templates and where each side's units stand. The
//! catalog supplies stats and skills, so the same layout can be replayed with
//! a different data directory.

use std::path::Path;

use game_content::Catalog;
use game_core::{Allegiance, DEFAULT_TERRITORY, GameConfig, GameEngine, Position, UnitSpec};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuntimeError};

/// Unit placement for scenario setup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Unit catalog id.
    pub template: String,
    pub allegiance: Allegiance,
    pub position: Position,
    /// Overrides the template's display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Replaces the template's skill list.
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}

impl Placement {
    pub fn new(template: impl Into<String>, allegiance: Allegiance, position: Position) -> Self {
        Self {
            template: template.into(),
            allegiance,
            position,
            name: None,
            skills: None,
        }
    }

    /// Resolves this placement into a unit record using `catalog`.
    pub fn resolve(&self, catalog: &Catalog) -> Result<UnitSpec> {
        let template = catalog
            .units
            .get(&self.template)
            .ok_or_else(|| RuntimeError::UnknownTemplate(self.template.clone()))?;

        let skill_ids = self.skills.as_ref().unwrap_or(&template.skills);
        let skills = skill_ids
            .iter()
            .map(|id| {
                catalog
                    .skills
                    .get(id)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnknownSkill {
                        template: self.template.clone(),
                        skill: id.clone(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let spec = template.to_spec(self.allegiance, skills);
        Ok(match &self.name {
            Some(name) => spec.named(name.clone()),
            None => spec,
        })
    }
}

/// Scenario configuration for battle initialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    pub rows: u32,
    pub columns: u32,
    #[serde(default = "default_territory")]
    pub territory: String,
    pub placements: Vec<Placement>,
}

fn default_territory() -> String {
    DEFAULT_TERRITORY.to_string()
}

impl Scenario {
    pub const DEFAULT_PRESET: &'static str = "basic";

    /// Names accepted by [`Scenario::preset`].
    pub const PRESETS: [&'static str; 4] = ["basic", "forest", "desert", "chapel"];

    pub fn new(rows: u32, columns: u32, placements: Vec<Placement>) -> Self {
        Self {
            name: String::new(),
            rows,
            columns,
            territory: default_territory(),
            placements,
        }
    }

    /// Loads one of the built-in layouts.
    pub fn preset(name: &str) -> Result<Self> {
        let source = match name {
            "basic" => include_str!("../../scenarios/basic.ron"),
            "forest" => include_str!("../../scenarios/forest.ron"),
            "desert" => include_str!("../../scenarios/desert.ron"),
            "chapel" => include_str!("../../scenarios/chapel.ron"),
            other => {
                return Err(RuntimeError::Scenario(format!(
                    "unknown preset '{}' (expected one of: {})",
                    other,
                    Self::PRESETS.join(", ")
                )));
            }
        };
        Self::parse(source)
    }

    /// Load scenario from a RON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RuntimeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        ron::from_str(content)
            .map_err(|e| RuntimeError::Scenario(format!("failed to parse scenario RON: {}", e)))
    }

    /// Creates an engine and places every unit in order.
    ///
    /// Placement stops at the first unit that cannot be resolved or placed.
    /// Placement events are discarded so the battle starts with an empty
    /// event queue.
    pub fn build(&self, catalog: &Catalog, config: GameConfig) -> Result<GameEngine> {
        let mut engine =
            GameEngine::with_config(self.rows, self.columns, self.territory.clone(), config);

        tracing::info!(
            "Creating battle '{}' ({}x{}, {}) with {} placements",
            self.name,
            self.rows,
            self.columns,
            self.territory,
            self.placements.len()
        );

        for placement in &self.placements {
            let spec = placement.resolve(catalog)?;
            engine
                .place_unit(spec, placement.position)
                .map_err(|source| RuntimeError::Placement {
                    template: placement.template.clone(),
                    position: placement.position,
                    source,
                })?;
        }

        if !engine.is_army_alive(Allegiance::Player) || !engine.is_army_alive(Allegiance::Enemy) {
            tracing::warn!("Scenario '{}' does not field both sides", self.name);
        }

        engine.drain_events();
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Unit;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn every_preset_builds() {
        for name in Scenario::PRESETS {
            let scenario = Scenario::preset(name).unwrap();
            assert_eq!(scenario.name, name);
            let engine = scenario.build(&catalog(), GameConfig::default()).unwrap();
            assert!(engine.is_army_alive(Allegiance::Player));
            assert!(engine.is_army_alive(Allegiance::Enemy));
            assert_eq!(engine.pending_events(), 0);
        }
    }

    #[test]
    fn desert_preset_matches_layout() {
        let scenario = Scenario::preset("desert").unwrap();
        let engine = scenario.build(&catalog(), GameConfig::default()).unwrap();

        assert_eq!(engine.grid().rows(), 8);
        assert_eq!(engine.grid().territory(), "desert");
        let raider = engine.unit_at(Position::new(3, 4)).unwrap();
        assert_eq!(raider.name(), "Raider");
        assert_eq!(raider.unit_type(), "Sand Raider");
        assert_eq!(raider.allegiance(), Allegiance::Enemy);
        let mage = engine.unit_at(Position::new(7, 0)).unwrap();
        assert_eq!(mage.skills().len(), 3);
    }

    #[test]
    fn placement_overrides_name_and_skills() {
        let engine = Scenario::preset("chapel")
            .unwrap()
            .build(&catalog(), GameConfig::default())
            .unwrap();

        let cleric = engine.unit_at(Position::new(0, 3)).unwrap();
        assert_eq!(cleric.name(), "Sister Ada");
        let goblin = engine.unit_at(Position::new(6, 4)).unwrap();
        assert_eq!(goblin.skills()[0].name(), "Slash");
        let scout = engine.unit_at(Position::new(6, 2)).map(Unit::skills);
        assert!(scout.is_some_and(<[_]>::is_empty));
    }

    #[test]
    fn unknown_preset_lists_choices() {
        let error = Scenario::preset("swamp").unwrap_err();
        assert!(error.to_string().contains("basic, forest, desert, chapel"));
    }

    #[test]
    fn unknown_template_and_skill_are_reported() {
        let scenario = Scenario::new(
            3,
            3,
            vec![Placement::new("dragon", Allegiance::Enemy, Position::ORIGIN)],
        );
        assert!(matches!(
            scenario.build(&catalog(), GameConfig::default()),
            Err(RuntimeError::UnknownTemplate(id)) if id == "dragon"
        ));

        let mut knight = Placement::new("knight", Allegiance::Player, Position::ORIGIN);
        knight.skills = Some(vec!["meteor".into()]);
        let scenario = Scenario::new(3, 3, vec![knight]);
        assert!(matches!(
            scenario.build(&catalog(), GameConfig::default()),
            Err(RuntimeError::UnknownSkill { skill, .. }) if skill == "meteor"
        ));
    }

    #[test]
    fn overlapping_placements_fail() {
        let scenario = Scenario::new(
            3,
            3,
            vec![
                Placement::new("knight", Allegiance::Player, Position::ORIGIN),
                Placement::new("goblin", Allegiance::Enemy, Position::ORIGIN),
            ],
        );
        let error = scenario
            .build(&catalog(), GameConfig::default())
            .unwrap_err();
        assert!(matches!(
            error,
            RuntimeError::Placement {
                source: game_core::ActionError::CellOccupied { .. },
                ..
            }
        ));
    }

    #[test]
    fn territory_defaults_to_plain() {
        let scenario = Scenario::parse(
            r#"(rows: 2, columns: 2, placements: [
                (template: "goblin", allegiance: enemy, position: (x: 1, y: 1)),
            ])"#,
        )
        .unwrap();
        assert_eq!(scenario.territory, "plain");
        assert!(scenario.name.is_empty());
    }
}
