//! One battle wired to the event bus.

use game_core::{
    ActionError, ActionOutcome, GameEngine, GameEvent, Position, SkillSlot, TurnSummary, UnitId,
};
use tokio::sync::broadcast;

use crate::config::RuntimeConfig;
use crate::error::Result;
use crate::events::{Event, EventBus, Topic};

/// Owns a [`GameEngine`] and forwards its events to an [`EventBus`].
///
/// Every mutator drains the engine's queue before returning, so subscribers
/// see the events of a call as soon as it completes.
pub struct Session {
    engine: GameEngine,
    bus: EventBus,
    next_seq: u64,
}

impl Session {
    pub fn new(engine: GameEngine, bus: EventBus) -> Self {
        Self {
            engine,
            bus,
            next_seq: 0,
        }
    }

    /// Loads content and the scenario named by `config` and builds a battle.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let game_config = config.load_game_config()?;
        let catalog = config.load_catalog()?;
        let scenario = config.scenario.load()?;
        let engine = scenario.build(&catalog, game_config)?;
        Ok(Self::new(
            engine,
            EventBus::with_capacity(config.event_buffer_size),
        ))
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn subscribe(&self, topic: Topic) -> Option<broadcast::Receiver<Event>> {
        self.bus.subscribe(topic)
    }

    pub fn move_unit(&mut self, unit: UnitId, to: Position) -> Result<ActionOutcome, ActionError> {
        let result = self.engine.move_unit(unit, to);
        self.flush(self.engine.turn());
        result
    }

    pub fn attack_unit(
        &mut self,
        unit: UnitId,
        target: Position,
    ) -> Result<ActionOutcome, ActionError> {
        let result = self.engine.attack_unit(unit, target);
        self.flush(self.engine.turn());
        result
    }

    pub fn cast_skill(
        &mut self,
        unit: UnitId,
        slot: SkillSlot,
        target: Position,
    ) -> Result<ActionOutcome, ActionError> {
        let result = self.engine.cast_skill(unit, slot, target);
        self.flush(self.engine.turn());
        result
    }

    pub fn wait_unit(&mut self, unit: UnitId) -> Result<ActionOutcome, ActionError> {
        let result = self.engine.wait_unit(unit);
        self.flush(self.engine.turn());
        result
    }

    /// Runs the opponent phase. Its events, including `TurnEnded`, are
    /// stamped with the turn that just ended.
    pub fn end_turn(&mut self) -> TurnSummary {
        let ended = self.engine.turn();
        let summary = self.engine.end_turn();
        for decision in &summary.opponent_moves {
            tracing::debug!(
                "Opponent {} chose {:?} (rejected: {:?})",
                decision.unit,
                decision.decision,
                decision.rejection
            );
        }
        self.flush(ended);
        summary
    }

    /// Publishes every pending engine event stamped with `turn` and returns
    /// how many were sent.
    fn flush(&mut self, turn: u32) -> usize {
        let events = self.engine.drain_events();
        let count = events.len();

        for event in events {
            log_event(&event);
            let seq = self.next_seq;
            self.next_seq += 1;
            self.bus.publish(Event { seq, turn, event });
        }
        count
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::Updated => {}
        GameEvent::Notification { message } => tracing::warn!("{}", message),
        GameEvent::GameOver { loser } => tracing::info!("Game over: {} side defeated", loser),
        GameEvent::TurnEnded { turn } => tracing::info!("Turn {} begins", turn),
        GameEvent::UnitDefeated { name, position, .. } => {
            tracing::info!("{} defeated at {}", name, position)
        }
        other => tracing::debug!("{:?}", other),
    }
}
