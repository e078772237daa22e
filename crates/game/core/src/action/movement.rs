use crate::action::{ActionOutcome, ActionTransition, validate};
use crate::error::ActionError;
use crate::state::{Grid, Position, UnitId};

/// Moves a unit from its current cell to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub unit: UnitId,
    pub to: Position,
}

impl MoveAction {
    pub fn new(unit: UnitId, to: Position) -> Self {
        Self { unit, to }
    }
}

impl ActionTransition for MoveAction {
    fn actor(&self) -> UnitId {
        self.unit
    }

    fn pre_validate(&self, grid: &Grid) -> Result<(), ActionError> {
        let unit = grid
            .unit(self.unit)
            .ok_or(ActionError::UnknownUnit(self.unit))?;
        validate::can_move(grid, unit, unit.position(), self.to)
    }

    fn apply(&self, grid: &mut Grid) -> Result<ActionOutcome, ActionError> {
        let from = grid.relocate(self.unit, self.to)?;
        if let Some(unit) = grid.unit_mut(self.unit) {
            unit.mark_moved();
        }
        Ok(ActionOutcome::Moved {
            unit: self.unit,
            from,
            to: self.to,
        })
    }
}
