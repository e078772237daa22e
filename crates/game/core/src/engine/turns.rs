use crate::ai::OpponentMove;
use crate::state::Allegiance;

use super::{GameEngine, GameEvent};

/// Which side is acting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// The caller issues actions.
    #[default]
    Player,
    /// The opponent controller is acting inside `end_turn`.
    Opponent,
}

/// Result of one `end_turn` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnSummary {
    /// Turn number after the increment.
    pub turn: u32,
    /// What each opponent unit decided, in the order they acted.
    pub opponent_moves: Vec<OpponentMove>,
    /// Losing side if the battle is over.
    pub outcome: Option<Allegiance>,
}

/// Turn orchestration methods for GameEngine.
impl GameEngine {
    /// Ends the player phase, runs the opponent phase, and starts the next turn.
    ///
    /// Order:
    /// 1. reset the player side's budgets
    /// 2. let the opponent controller act with every opposing unit
    /// 3. check whether the player side was wiped out
    /// 4. reset the opposing side's budgets
    /// 5. advance the turn counter
    /// 6. tick every skill cooldown on the grid
    pub fn end_turn(&mut self) -> TurnSummary {
        let player = self.player_side();
        let opponent = self.opponent.allegiance();
        tracing::info!("Ending turn {}", self.turn());

        self.reset_budgets(player);

        self.phase = Phase::Opponent;
        let controller = self.opponent;
        let opponent_moves = controller.take_turn(self);

        if !self.grid.is_army_alive(player) {
            self.declare_game_over(player);
        }

        self.reset_budgets(opponent);
        let turn = self.grid.advance_turn();
        self.tick_cooldowns();
        self.phase = Phase::Player;

        self.events.push(GameEvent::TurnEnded { turn });
        self.events.push(GameEvent::Updated);
        tracing::info!("Turn {}: player phase starts", turn);

        TurnSummary {
            turn,
            opponent_moves,
            outcome: self.loser,
        }
    }

    fn reset_budgets(&mut self, allegiance: Allegiance) {
        for unit in self.grid.units_mut() {
            if unit.allegiance() == allegiance {
                unit.refresh();
            }
        }
    }

    fn tick_cooldowns(&mut self) {
        for unit in self.grid.units_mut() {
            let name = unit.name().to_string();
            for skill in unit.skills_mut() {
                if skill.tick_cooldown() {
                    tracing::debug!(
                        "Skill '{}' on '{}' ready in {}",
                        skill.name(),
                        name,
                        skill.turns_until_ready()
                    );
                }
            }
        }
    }
}
