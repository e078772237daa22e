//! Opponent controller.
//!
//! Each opposing unit picks a target from a [`Snapshot`] taken when the
//! phase begins, plans with [`plan`], and then issues its actions through
//! [`GameEngine::execute`] like any other caller. Plans that turn out to be
//! illegal are rejected by the validator and simply logged.

mod search;
mod snapshot;
mod targeting;

pub use search::{AiDecision, plan};
pub use snapshot::{Snapshot, SnapshotEntry};
pub use targeting::select_target;

use crate::action::{AttackAction, MoveAction};
use crate::engine::GameEngine;
use crate::error::ActionError;
use crate::state::{Allegiance, UnitId};

/// Record of one opponent unit's phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpponentMove {
    pub unit: UnitId,
    pub decision: AiDecision,
    /// First action the engine refused, if any.
    pub rejection: Option<ActionError>,
}

/// Drives every unit of one allegiance during the opponent phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpponentController {
    allegiance: Allegiance,
}

impl OpponentController {
    pub fn new(allegiance: Allegiance) -> Self {
        Self { allegiance }
    }

    pub fn allegiance(&self) -> Allegiance {
        self.allegiance
    }

    /// Lets every unit of this side act once, in row-major snapshot order.
    ///
    /// Units removed earlier in the phase are skipped.
    pub fn take_turn(&self, engine: &mut GameEngine) -> Vec<OpponentMove> {
        let snapshot = Snapshot::capture(engine.grid());
        let actors: Vec<UnitId> = snapshot
            .units_of(self.allegiance)
            .map(|entry| entry.unit)
            .collect();

        let mut moves = Vec::with_capacity(actors.len());
        for id in actors {
            let Some(unit) = engine.unit(id) else {
                tracing::debug!("Unit {} left the field before acting", id);
                continue;
            };
            let decision = plan(engine.grid(), &snapshot, unit);
            tracing::debug!("{} {} at {}: {:?}", unit.name(), id, unit.position(), decision);

            let rejection = Self::carry_out(engine, id, decision).err();
            if let Some(error) = &rejection {
                tracing::debug!("Opponent unit {} could not follow its plan: {}", id, error);
            }
            moves.push(OpponentMove {
                unit: id,
                decision,
                rejection,
            });
        }
        moves
    }

    fn carry_out(
        engine: &mut GameEngine,
        unit: UnitId,
        decision: AiDecision,
    ) -> Result<(), ActionError> {
        match decision {
            AiDecision::Idle => {}
            AiDecision::Attack { target } => {
                engine.execute(AttackAction::new(unit, target))?;
            }
            AiDecision::AdvanceAndAttack { to, target } => {
                engine.execute(MoveAction::new(unit, to))?;
                engine.execute(AttackAction::new(unit, target))?;
            }
            AiDecision::Advance { to, .. } => {
                engine.execute(MoveAction::new(unit, to))?;
            }
        }
        Ok(())
    }
}
