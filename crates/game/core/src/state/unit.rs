use std::fmt;

use super::Position;
use super::skill::{Skill, SkillSlot, SkillSpec};

/// Identifier allocated by the grid when a unit is placed, counting up from 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Side a unit fights for.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Allegiance {
    /// Controlled by the caller during the player phase.
    Player,
    /// Controlled by the opponent controller.
    Enemy,
}

impl Allegiance {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }

    pub fn is_hostile_to(self, other: Allegiance) -> bool {
        self != other
    }
}

/// Remaining action budget of a unit within the current turn.
///
/// A unit may move and then attack, but attacking, casting, or waiting ends
/// its turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionBudget {
    /// Nothing done yet.
    #[default]
    Fresh,
    /// Moved; may still attack or cast.
    Moved,
    /// Turn consumed.
    Spent,
}

impl ActionBudget {
    pub const fn has_moved(self) -> bool {
        !matches!(self, Self::Fresh)
    }

    pub const fn has_attacked(self) -> bool {
        matches!(self, Self::Spent)
    }
}

/// Combat statistics of a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitStats {
    pub max_hp: i32,
    pub atk: i32,
    /// Manhattan movement range.
    pub movement: u32,
    /// Manhattan attack range.
    pub attack_range: u32,
    /// Reserved for line-of-sight rules; not read by the engine.
    #[cfg_attr(feature = "serde", serde(default = "UnitStats::default_vision"))]
    pub vision: u32,
}

impl UnitStats {
    pub const DEFAULT_VISION: u32 = 10;

    pub const fn new(max_hp: i32, atk: i32, movement: u32, attack_range: u32) -> Self {
        Self {
            max_hp,
            atk,
            movement,
            attack_range,
            vision: Self::DEFAULT_VISION,
        }
    }

    #[cfg(feature = "serde")]
    fn default_vision() -> u32 {
        Self::DEFAULT_VISION
    }
}

/// Plain unit record used to place a unit on the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitSpec {
    pub name: String,
    pub unit_type: String,
    pub stats: UnitStats,
    pub allegiance: Allegiance,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<SkillSpec>,
}

impl UnitSpec {
    /// Creates a record whose name equals its type.
    pub fn new(unit_type: impl Into<String>, stats: UnitStats, allegiance: Allegiance) -> Self {
        let unit_type = unit_type.into();
        Self {
            name: unit_type.clone(),
            unit_type,
            stats,
            allegiance,
            skills: Vec::new(),
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_skill(mut self, skill: SkillSpec) -> Self {
        self.skills.push(skill);
        self
    }
}

/// A unit in play. Only the grid creates and owns these.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    id: UnitId,
    name: String,
    unit_type: String,
    stats: UnitStats,
    hp: i32,
    allegiance: Allegiance,
    position: Position,
    skills: Vec<Skill>,
    budget: ActionBudget,
}

impl Unit {
    pub(crate) fn from_spec(id: UnitId, spec: UnitSpec, position: Position) -> Self {
        Self {
            id,
            name: spec.name,
            unit_type: spec.unit_type,
            hp: spec.stats.max_hp,
            stats: spec.stats,
            allegiance: spec.allegiance,
            position,
            skills: spec.skills.into_iter().map(Skill::new).collect(),
            budget: ActionBudget::Fresh,
        }
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_type(&self) -> &str {
        &self.unit_type
    }

    pub fn stats(&self) -> &UnitStats {
        &self.stats
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn max_hp(&self) -> i32 {
        self.stats.max_hp
    }

    pub fn atk(&self) -> i32 {
        self.stats.atk
    }

    pub fn movement(&self) -> u32 {
        self.stats.movement
    }

    pub fn attack_range(&self) -> u32 {
        self.stats.attack_range
    }

    pub fn allegiance(&self) -> Allegiance {
        self.allegiance
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn skill(&self, slot: SkillSlot) -> Option<&Skill> {
        self.skills.get(slot.0)
    }

    pub fn budget(&self) -> ActionBudget {
        self.budget
    }

    pub fn has_moved(&self) -> bool {
        self.budget.has_moved()
    }

    pub fn has_attacked(&self) -> bool {
        self.budget.has_attacked()
    }

    pub fn is_full_health(&self) -> bool {
        self.hp >= self.stats.max_hp
    }

    /// Death triggers at `hp <= 0`, negative values included.
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Subtracts `amount` HP, saturating at `i32::MIN`. Negative amounts deal
    /// no damage. Returns true if the unit is now defeated.
    pub(crate) fn take_damage(&mut self, amount: i32) -> bool {
        self.hp = self.hp.saturating_sub(amount.max(0));
        self.is_defeated()
    }

    /// Restores up to `amount` HP without exceeding `max_hp`. Returns the HP restored.
    pub(crate) fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = self.stats.max_hp.min(self.hp.saturating_add(amount));
        self.hp - before
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub(crate) fn mark_moved(&mut self) {
        if self.budget == ActionBudget::Fresh {
            self.budget = ActionBudget::Moved;
        }
    }

    pub(crate) fn spend(&mut self) {
        self.budget = ActionBudget::Spent;
    }

    pub(crate) fn refresh(&mut self) {
        self.budget = ActionBudget::Fresh;
    }

    pub(crate) fn skill_mut(&mut self, slot: SkillSlot) -> Option<&mut Skill> {
        self.skills.get_mut(slot.0)
    }

    pub(crate) fn skills_mut(&mut self) -> impl Iterator<Item = &mut Skill> {
        self.skills.iter_mut()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Type: {}", self.unit_type)?;
        writeln!(f, "HP: {}/{}", self.hp, self.stats.max_hp)?;
        writeln!(f, "Attack: {}", self.stats.atk)?;
        writeln!(f, "Movement: {}", self.stats.movement)?;
        writeln!(f, "Attack Range: {}", self.stats.attack_range)?;
        write!(f, "Allegiance: {}", self.allegiance)?;
        if !self.skills.is_empty() {
            write!(f, "\nSkills:")?;
            for (index, skill) in self.skills.iter().enumerate() {
                write!(
                    f,
                    "\n  [{}] {} ({}, range {}, cooldown {}, ready in {})",
                    index,
                    skill.name(),
                    skill.effect_type(),
                    skill.range(),
                    skill.cooldown(),
                    skill.turns_until_ready()
                )?;
            }
        }
        Ok(())
    }
}
