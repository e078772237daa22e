//! Entity model and the occupancy grid.
//!
//! This module owns the data structures that describe units, skills, and the
//! board. Runtime layers query this state but mutate it exclusively through
//! the engine.
pub mod grid;
pub mod position;
pub mod skill;
pub mod unit;

pub use grid::{DEFAULT_TERRITORY, Grid};
pub use position::Position;
pub use skill::{EffectType, Skill, SkillSlot, SkillSpec};
pub use unit::{ActionBudget, Allegiance, Unit, UnitId, UnitSpec, UnitStats};
