use crate::action::{ActionOutcome, ActionTransition};
use crate::error::ActionError;
use crate::state::{Grid, UnitId};

/// Wait action - the unit ends its turn without acting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitAction {
    pub unit: UnitId,
}

impl WaitAction {
    pub fn new(unit: UnitId) -> Self {
        Self { unit }
    }
}

impl ActionTransition for WaitAction {
    fn actor(&self) -> UnitId {
        self.unit
    }

    fn pre_validate(&self, grid: &Grid) -> Result<(), ActionError> {
        let unit = grid
            .unit(self.unit)
            .ok_or(ActionError::UnknownUnit(self.unit))?;
        if unit.has_attacked() {
            return Err(ActionError::AlreadyActed { unit: self.unit });
        }
        Ok(())
    }

    fn apply(&self, grid: &mut Grid) -> Result<ActionOutcome, ActionError> {
        grid.unit_mut(self.unit)
            .ok_or(ActionError::UnknownUnit(self.unit))?
            .spend();
        Ok(ActionOutcome::Waited { unit: self.unit })
    }
}
