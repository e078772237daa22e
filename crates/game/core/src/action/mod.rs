//! Unit actions and their validation.
//!
//! # Module Structure
//!
//! - `validate`: pure legality checks (range, bounds, occupancy, path, targets)
//! - `movement`: [`MoveAction`]
//! - `combat`: [`AttackAction`] and [`CastAction`]
//! - `wait`: [`WaitAction`]
//!
//! Each action implements [`ActionTransition`]. The engine runs
//! `pre_validate` against the untouched grid and only calls `apply` when it
//! passes, so a rejected action never leaves a partial mutation behind.
//! Defeat removal and army-wipe detection happen in the engine after `apply`.

pub mod combat;
pub mod movement;
pub mod validate;
pub mod wait;

pub use combat::{AttackAction, CastAction};
pub use movement::MoveAction;
pub use validate::{can_attack, can_cast_skill, can_move, is_path_clear};
pub use wait::WaitAction;

use crate::error::ActionError;
use crate::state::{EffectType, Grid, Position, SkillSlot, UnitId};

/// Defines how a concrete action variant mutates the grid.
pub trait ActionTransition {
    /// Returns the unit performing this action.
    fn actor(&self) -> UnitId;

    /// Validates pre-conditions using the grid **before** mutation.
    fn pre_validate(&self, grid: &Grid) -> Result<(), ActionError>;

    /// Applies the action. Only called after `pre_validate` succeeded.
    fn apply(&self, grid: &mut Grid) -> Result<ActionOutcome, ActionError>;
}

/// Any action a unit can take during its side's phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(MoveAction),
    Attack(AttackAction),
    Cast(CastAction),
    Wait(WaitAction),
}

impl Action {
    pub fn actor(&self) -> UnitId {
        self.as_transition().actor()
    }

    pub fn as_transition(&self) -> &dyn ActionTransition {
        match self {
            Action::Move(action) => action,
            Action::Attack(action) => action,
            Action::Cast(action) => action,
            Action::Wait(action) => action,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Move(_) => "move",
            Action::Attack(_) => "attack",
            Action::Cast(_) => "cast",
            Action::Wait(_) => "wait",
        }
    }
}

impl From<MoveAction> for Action {
    fn from(action: MoveAction) -> Self {
        Action::Move(action)
    }
}

impl From<AttackAction> for Action {
    fn from(action: AttackAction) -> Self {
        Action::Attack(action)
    }
}

impl From<CastAction> for Action {
    fn from(action: CastAction) -> Self {
        Action::Cast(action)
    }
}

impl From<WaitAction> for Action {
    fn from(action: WaitAction) -> Self {
        Action::Wait(action)
    }
}

/// What an applied action changed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionOutcome {
    Moved {
        unit: UnitId,
        from: Position,
        to: Position,
    },
    Attacked {
        attacker: UnitId,
        target: UnitId,
        damage: i32,
        remaining_hp: i32,
    },
    SkillCast {
        caster: UnitId,
        slot: SkillSlot,
        target: UnitId,
        effect: EffectType,
        /// HP removed for attacks, HP restored for heals, zero otherwise.
        amount: i32,
        remaining_hp: i32,
    },
    Waited {
        unit: UnitId,
    },
}

impl ActionOutcome {
    /// Unit whose HP dropped to zero or below as a result of this action, if any.
    pub fn defeated_target(&self) -> Option<UnitId> {
        match self {
            ActionOutcome::Attacked {
                target,
                remaining_hp,
                ..
            } if *remaining_hp <= 0 => Some(*target),
            ActionOutcome::SkillCast {
                target,
                effect: EffectType::Attack,
                remaining_hp,
                ..
            } if *remaining_hp <= 0 => Some(*target),
            _ => None,
        }
    }
}
