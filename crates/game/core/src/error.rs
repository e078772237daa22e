//! Rejection reasons for engine actions.
//!
//! Every variant is a recoverable, local condition: the attempted action is
//! rejected, state is left unchanged, and the reason is returned to the
//! caller. Game-over is an outcome, not an error, and never appears here.

use crate::state::{Position, SkillSlot, UnitId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ActionError {
    #[error("position {position} is out of bounds")]
    OutOfBounds { position: Position },

    #[error("cell {position} is already occupied")]
    CellOccupied { position: Position },

    #[error("unit {unit} has already acted this turn")]
    AlreadyActed { unit: UnitId },

    #[error("target is {distance} away but range is {range}")]
    OutOfRange { distance: u32, range: u32 },

    #[error("no valid target at {position}")]
    InvalidTarget { position: Position },

    #[error("skill is on cooldown for {turns} more turn(s)")]
    OnCooldown { turns: u32 },

    #[error("unit {target} is already at full health")]
    TargetFullHealth { target: UnitId },

    #[error("path is blocked by an opposing unit at {position}")]
    PathBlocked { position: Position },

    #[error("unit {0} not found")]
    UnknownUnit(UnitId),

    #[error("unit {unit} has no skill in {slot}")]
    UnknownSkill { unit: UnitId, slot: SkillSlot },
}

impl ActionError {
    /// Stable snake_case identifier for this rejection reason.
    pub fn code(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_snake_case_variant_names() {
        assert_eq!(
            ActionError::OutOfRange {
                distance: 2,
                range: 1
            }
            .code(),
            "out_of_range"
        );
        assert_eq!(ActionError::OnCooldown { turns: 3 }.code(), "on_cooldown");
        assert_eq!(ActionError::UnknownUnit(UnitId(4)).code(), "unknown_unit");
    }

    #[test]
    fn messages_name_the_offending_cell() {
        let error = ActionError::CellOccupied {
            position: Position::new(1, 2),
        };
        assert_eq!(error.to_string(), "cell (1, 2) is already occupied");
    }
}
