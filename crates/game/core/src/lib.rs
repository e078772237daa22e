//! Deterministic rules for turn-based tactical skirmishes.
//!
//! `game-core` owns the canonical battle model (units, skills, the grid),
//! the validator that decides which actions are legal, and the engine that
//! applies them and runs the opponent phase. It performs no I/O; loaders and
//! front-ends live in sibling crates and depend on the types re-exported here.
//! All state mutation flows through [`engine::GameEngine`].
pub mod action;
pub mod ai;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;

pub use action::{
    Action, ActionOutcome, ActionTransition, AttackAction, CastAction, MoveAction, WaitAction,
};
pub use ai::{AiDecision, OpponentController, OpponentMove, Snapshot};
pub use config::GameConfig;
pub use engine::{GameEngine, GameEvent, Phase, TurnSummary};
pub use error::ActionError;
pub use state::{
    ActionBudget, Allegiance, DEFAULT_TERRITORY, EffectType, Grid, Position, Skill, SkillSlot,
    SkillSpec, Unit, UnitId, UnitSpec, UnitStats,
};
