//! Events the engine produces for its presentation collaborator.
//!
//! The engine pushes into an owned [`EventQueue`]; callers drain it after each
//! operation. Nothing in the engine waits on a consumer.

use std::collections::VecDeque;

use crate::state::{Allegiance, EffectType, Position, SkillSlot, UnitId};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// Board state changed; re-render.
    Updated,

    /// The named side has no units left. Emitted at most once per game.
    GameOver { loser: Allegiance },

    /// User-facing message, such as the reason an action was rejected.
    Notification { message: String },

    UnitPlaced {
        unit: UnitId,
        position: Position,
    },

    UnitMoved {
        unit: UnitId,
        from: Position,
        to: Position,
    },

    UnitAttacked {
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
        amount: i32,
        remaining_hp: i32,
    },

    UnitWaited { unit: UnitId },

    UnitDefeated {
        unit: UnitId,
        name: String,
        position: Position,
    },

    /// The opponent phase finished and the turn counter advanced to `turn`.
    TurnEnded { turn: u32 },
}

impl GameEvent {
    pub fn is_game_over(&self) -> bool {
        matches!(self, GameEvent::GameOver { .. })
    }
}

/// FIFO buffer of pending events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventQueue {
    pending: VecDeque<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.pending.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns every pending event in emission order.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.pending.drain(..).collect()
    }
}
