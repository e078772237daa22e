//! Action execution, defeat resolution, and turn orchestration.
//!
//! The [`GameEngine`] is the single owner of the [`Grid`], the event queue,
//! and the opponent controller. Every state change flows through
//! [`GameEngine::execute`] or [`GameEngine::end_turn`]; callers only get
//! shared references back.

mod events;
mod transition;
mod turns;

pub use events::{EventQueue, GameEvent};
pub use turns::{Phase, TurnSummary};

use crate::action::{Action, ActionOutcome, AttackAction, CastAction, MoveAction, WaitAction};
use crate::ai::OpponentController;
use crate::config::GameConfig;
use crate::error::ActionError;
use crate::state::{Allegiance, Grid, Position, SkillSlot, Unit, UnitId, UnitSpec};

/// Turn-based combat engine for one battle.
#[derive(Clone, Debug)]
pub struct GameEngine {
    grid: Grid,
    config: GameConfig,
    events: EventQueue,
    phase: Phase,
    /// Side that lost, once an army wipe has been detected.
    loser: Option<Allegiance>,
    opponent: OpponentController,
}

impl GameEngine {
    /// Creates an empty battle with the default configuration.
    pub fn new(rows: u32, columns: u32, territory: impl Into<String>) -> Self {
        Self::with_config(rows, columns, territory, GameConfig::default())
    }

    pub fn with_config(
        rows: u32,
        columns: u32,
        territory: impl Into<String>,
        config: GameConfig,
    ) -> Self {
        let (rows, columns) = GameConfig::clamp_dimensions(rows, columns);
        Self {
            grid: Grid::with_turn(rows, columns, territory, config.first_turn),
            config,
            events: EventQueue::new(),
            phase: Phase::Player,
            loser: None,
            opponent: OpponentController::new(Allegiance::Enemy),
        }
    }

    // ===== queries =====

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, position: Position) -> Option<UnitId> {
        self.grid.cell(position)
    }

    pub fn unit_at(&self, position: Position) -> Option<&Unit> {
        self.grid.unit_at(position)
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.grid.unit(id)
    }

    pub fn is_army_alive(&self, allegiance: Allegiance) -> bool {
        self.grid.is_army_alive(allegiance)
    }

    pub fn turn(&self) -> u32 {
        self.grid.turn()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Side that lost the battle, if it is over.
    pub fn outcome(&self) -> Option<Allegiance> {
        self.loser
    }

    pub fn is_over(&self) -> bool {
        self.loser.is_some()
    }

    pub fn opponent(&self) -> &OpponentController {
        &self.opponent
    }

    /// Side driven by the caller.
    pub fn player_side(&self) -> Allegiance {
        self.opponent.allegiance().opponent()
    }

    // ===== events =====

    /// Removes and returns every event emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    // ===== mutators =====

    /// Places a new unit on the grid.
    pub fn place_unit(
        &mut self,
        spec: UnitSpec,
        position: Position,
    ) -> Result<UnitId, ActionError> {
        match self.grid.place(spec, position) {
            Ok(unit) => {
                tracing::debug!("Placed unit {} at {}", unit, position);
                self.events.push(GameEvent::UnitPlaced { unit, position });
                self.events.push(GameEvent::Updated);
                Ok(unit)
            }
            Err(error) => {
                self.reject("place", &error);
                Err(error)
            }
        }
    }

    pub fn move_unit(&mut self, unit: UnitId, to: Position) -> Result<ActionOutcome, ActionError> {
        self.execute(MoveAction::new(unit, to))
    }

    pub fn attack_unit(
        &mut self,
        unit: UnitId,
        target: Position,
    ) -> Result<ActionOutcome, ActionError> {
        self.execute(AttackAction::new(unit, target))
    }

    pub fn cast_skill(
        &mut self,
        unit: UnitId,
        slot: SkillSlot,
        target: Position,
    ) -> Result<ActionOutcome, ActionError> {
        self.execute(CastAction::new(unit, slot, target))
    }

    /// Ends the unit's turn without acting.
    pub fn wait_unit(&mut self, unit: UnitId) -> Result<ActionOutcome, ActionError> {
        self.execute(WaitAction::new(unit))
    }

    /// Validates and applies an action.
    ///
    /// On success the outcome is recorded as events, defeated units are
    /// removed, and an army wipe ends the game. On failure the grid is
    /// untouched and the rejection reason is returned.
    pub fn execute(&mut self, action: impl Into<Action>) -> Result<ActionOutcome, ActionError> {
        let action = action.into();
        match transition::drive(action.as_transition(), &mut self.grid) {
            Ok(outcome) => {
                self.record(&outcome);
                self.resolve_defeat(&outcome);
                self.events.push(GameEvent::Updated);
                Ok(outcome)
            }
            Err(error) => {
                self.reject(action.as_str(), &error);
                Err(error)
            }
        }
    }

    fn reject(&mut self, action: &str, error: &ActionError) {
        tracing::debug!("{} rejected ({}): {}", action, error.code(), error);
        if self.config.notify_rejections && self.phase == Phase::Player {
            self.events.push(GameEvent::Notification {
                message: format!("Cannot {}: {}", action, error),
            });
        }
    }

    fn record(&mut self, outcome: &ActionOutcome) {
        let event = match *outcome {
            ActionOutcome::Moved { unit, from, to } => GameEvent::UnitMoved { unit, from, to },
            ActionOutcome::Attacked {
                attacker,
                target,
                damage,
                remaining_hp,
            } => GameEvent::UnitAttacked {
                attacker,
                target,
                damage,
                remaining_hp,
            },
            ActionOutcome::SkillCast {
                caster,
                slot,
                target,
                effect,
                amount,
                remaining_hp,
            } => GameEvent::SkillCast {
                caster,
                slot,
                target,
                effect,
                amount,
                remaining_hp,
            },
            ActionOutcome::Waited { unit } => GameEvent::UnitWaited { unit },
        };
        self.events.push(event);
    }

    /// Removes a unit whose HP dropped to zero and checks its army.
    fn resolve_defeat(&mut self, outcome: &ActionOutcome) {
        let Some(target) = outcome.defeated_target() else {
            return;
        };
        if matches!(outcome, ActionOutcome::SkillCast { .. }) && !self.config.skill_defeats {
            return;
        }
        let Some(unit) = self.grid.remove(target) else {
            return;
        };

        tracing::info!("{} defeated at {}", unit.name(), unit.position());
        self.events.push(GameEvent::UnitDefeated {
            unit: target,
            name: unit.name().to_string(),
            position: unit.position(),
        });

        if !self.grid.is_army_alive(unit.allegiance()) {
            self.declare_game_over(unit.allegiance());
        }
    }

    /// Records the losing side once; later wipes are ignored.
    fn declare_game_over(&mut self, loser: Allegiance) {
        if self.loser.is_some() {
            return;
        }
        tracing::info!("{} lost all units", loser);
        self.loser = Some(loser);
        self.events.push(GameEvent::GameOver { loser });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EffectType, SkillSpec, UnitStats};

    fn knight() -> UnitSpec {
        UnitSpec::new("Knight", UnitStats::new(100, 20, 2, 1), Allegiance::Player)
    }

    fn goblin() -> UnitSpec {
        UnitSpec::new("Goblin", UnitStats::new(50, 10, 2, 1), Allegiance::Enemy)
    }

    #[test]
    fn rejected_action_leaves_state_and_notifies() {
        let mut engine = GameEngine::new(5, 5, "plain");
        let knight = engine.place_unit(knight(), Position::ORIGIN).unwrap();
        engine.place_unit(goblin(), Position::new(2, 2)).unwrap();
        engine.drain_events();
        let before = engine.grid().clone();

        let error = engine.move_unit(knight, Position::new(2, 1)).unwrap_err();
        assert_eq!(
            error,
            ActionError::OutOfRange {
                distance: 3,
                range: 2
            }
        );
        assert_eq!(engine.grid(), &before);

        let events = engine.drain_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GameEvent::Notification { .. }));
    }

    #[test]
    fn silent_rejections_when_notifications_disabled() {
        let config = GameConfig::default().with_notify_rejections(false);
        let mut engine = GameEngine::with_config(5, 5, "plain", config);
        let knight = engine.place_unit(knight(), Position::ORIGIN).unwrap();
        engine.drain_events();

        assert!(engine.attack_unit(knight, Position::new(0, 1)).is_err());
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn lethal_attack_removes_target_and_ends_game_once() {
        let mut engine = GameEngine::new(5, 5, "plain");
        let orc = engine
            .place_unit(
                UnitSpec::new("Orc", UnitStats::new(120, 60, 2, 1), Allegiance::Player),
                Position::new(2, 1),
            )
            .unwrap();
        let goblin = engine.place_unit(goblin(), Position::new(2, 2)).unwrap();
        engine.drain_events();

        engine.attack_unit(orc, Position::new(2, 2)).unwrap();
        assert!(engine.unit(goblin).is_none());
        assert_eq!(engine.cell(Position::new(2, 2)), None);
        assert!(!engine.is_army_alive(Allegiance::Enemy));
        assert_eq!(engine.outcome(), Some(Allegiance::Enemy));

        let game_overs = engine
            .drain_events()
            .into_iter()
            .filter(GameEvent::is_game_over)
            .count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn unit_survives_until_hp_reaches_zero() {
        let mut engine = GameEngine::new(5, 5, "plain");
        let a = engine.place_unit(knight(), Position::new(0, 0)).unwrap();
        let b = engine.place_unit(knight(), Position::new(0, 2)).unwrap();
        let goblin = engine
            .place_unit(
                UnitSpec::new("Goblin", UnitStats::new(40, 10, 2, 1), Allegiance::Enemy),
                Position::new(0, 1),
            )
            .unwrap();

        engine.attack_unit(a, Position::new(0, 1)).unwrap();
        assert_eq!(engine.unit(goblin).map(Unit::hp), Some(20));

        engine.attack_unit(b, Position::new(0, 1)).unwrap();
        assert!(engine.unit(goblin).is_none());
    }

    #[test]
    fn lethal_skill_follows_skill_defeats_setting() {
        let fireball = SkillSpec::new("Fire Ball", 50, 3, EffectType::Attack, 3);

        let mut engine = GameEngine::new(5, 5, "plain");
        let mage = engine
            .place_unit(knight().named("Mage").with_skill(fireball.clone()), Position::ORIGIN)
            .unwrap();
        let goblin_id = engine.place_unit(goblin(), Position::new(1, 1)).unwrap();
        engine.cast_skill(mage, SkillSlot(0), Position::new(1, 1)).unwrap();
        assert!(engine.unit(goblin_id).is_none());
        assert_eq!(engine.outcome(), Some(Allegiance::Enemy));

        let legacy = GameConfig::default().with_skill_defeats(false);
        let mut engine = GameEngine::with_config(5, 5, "plain", legacy);
        let mage = engine
            .place_unit(knight().named("Mage").with_skill(fireball), Position::ORIGIN)
            .unwrap();
        let goblin_id = engine.place_unit(goblin(), Position::new(1, 1)).unwrap();
        engine.cast_skill(mage, SkillSlot(0), Position::new(1, 1)).unwrap();
        assert_eq!(engine.unit(goblin_id).map(Unit::hp), Some(0));
        assert_eq!(engine.outcome(), None);
    }

    #[test]
    fn wait_spends_the_unit() {
        let mut engine = GameEngine::new(3, 3, "plain");
        let knight = engine.place_unit(knight(), Position::ORIGIN).unwrap();
        engine.wait_unit(knight).unwrap();
        assert_eq!(
            engine.move_unit(knight, Position::new(0, 1)),
            Err(ActionError::AlreadyActed { unit: knight })
        );
        assert_eq!(
            engine.wait_unit(knight),
            Err(ActionError::AlreadyActed { unit: knight })
        );
    }

    #[test]
    fn unknown_unit_is_rejected() {
        let mut engine = GameEngine::new(3, 3, "plain");
        assert_eq!(
            engine.move_unit(UnitId(9), Position::ORIGIN),
            Err(ActionError::UnknownUnit(UnitId(9)))
        );
    }
}
