//! Line commands understood by the text client.
//!
//! Coordinates are `x y`, with `x` the row and `y` the column. Units are
//! addressed by id, with or without the leading `#`.

use game_core::{Position, SkillSlot, UnitId};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Show,
    Info(UnitId),
    Move { unit: UnitId, to: Position },
    Attack { unit: UnitId, target: Position },
    Cast { unit: UnitId, slot: SkillSlot, target: Position },
    Wait(UnitId),
    End,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("'{0}' is not a number")]
    NotANumber(String),
}

pub const HELP: &str = "\
commands:
  show                       print the board
  info <unit>                print a unit's stats and skills
  move <unit> <x> <y>        move a unit
  attack <unit> <x> <y>      attack the unit at (x, y)
  cast <unit> <slot> <x> <y> cast the skill in a slot on (x, y)
  wait <unit>                end a unit's turn without acting
  end                        end the turn; the enemy acts
  help                       print this text
  quit                       leave the game";

/// Parses one input line. Blank lines and `//` comments yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with("//") {
        return Ok(None);
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    let (verb, args) = match words.split_first() {
        Some((verb, args)) => (verb.to_ascii_lowercase(), args),
        None => return Ok(None),
    };

    let command = match (verb.as_str(), args) {
        ("show" | "board", []) => Command::Show,
        ("info", [unit]) => Command::Info(unit_id(unit)?),
        ("info", _) => return Err(CommandError::Usage("info <unit>")),
        ("move", [unit, x, y]) => Command::Move {
            unit: unit_id(unit)?,
            to: position(x, y)?,
        },
        ("move", _) => return Err(CommandError::Usage("move <unit> <x> <y>")),
        ("attack", [unit, x, y]) => Command::Attack {
            unit: unit_id(unit)?,
            target: position(x, y)?,
        },
        ("attack", _) => return Err(CommandError::Usage("attack <unit> <x> <y>")),
        ("cast", [unit, slot, x, y]) => Command::Cast {
            unit: unit_id(unit)?,
            slot: SkillSlot(number(slot)?),
            target: position(x, y)?,
        },
        ("cast", _) => return Err(CommandError::Usage("cast <unit> <slot> <x> <y>")),
        ("wait", [unit]) => Command::Wait(unit_id(unit)?),
        ("wait", _) => return Err(CommandError::Usage("wait <unit>")),
        ("end", []) => Command::End,
        ("help" | "?", _) => Command::Help,
        ("quit" | "exit", _) => Command::Quit,
        (other, _) => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn number<T: std::str::FromStr>(word: &str) -> Result<T, CommandError> {
    word.parse()
        .map_err(|_| CommandError::NotANumber(word.to_string()))
}

fn unit_id(word: &str) -> Result<UnitId, CommandError> {
    number(word.trim_start_matches('#')).map(UnitId)
}

fn position(x: &str, y: &str) -> Result<Position, CommandError> {
    Ok(Position::new(number(x)?, number(y)?))
}
