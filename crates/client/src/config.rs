//! Display settings for the text client.
use std::env;

/// Controls which event lines the client prints and when the board is redrawn.
#[derive(Clone, Debug)]
pub struct DisplayConfig {
    /// Print a line for every move (the board shows moves too).
    pub show_movement: bool,
    /// Print a line when a unit waits.
    pub show_waits: bool,
    /// Redraw the board after every `end`.
    pub board_after_turn: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_movement: true,
            show_waits: false,
            board_after_turn: true,
        }
    }
}

impl DisplayConfig {
    /// Construct display configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SKIRMISH_SHOW_MOVES` - Print movement lines (default: true)
    /// - `SKIRMISH_SHOW_WAITS` - Print wait lines (default: false)
    /// - `SKIRMISH_BOARD_AFTER_TURN` - Redraw the board after each turn (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(value) = read_env_bool("SKIRMISH_SHOW_MOVES") {
            config.show_movement = value;
        }
        if let Some(value) = read_env_bool("SKIRMISH_SHOW_WAITS") {
            config.show_waits = value;
        }
        if let Some(value) = read_env_bool("SKIRMISH_BOARD_AFTER_TURN") {
            config.board_after_turn = value;
        }

        config
    }
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
