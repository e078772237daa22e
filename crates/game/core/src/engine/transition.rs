//! Action transition driver.

use crate::action::{ActionOutcome, ActionTransition};
use crate::error::ActionError;
use crate::state::Grid;

/// Runs a transition through validation and application.
///
/// `pre_validate` sees the untouched grid. `apply` only runs after it passes,
/// so a rejected action never mutates anything.
#[inline]
pub(super) fn drive(
    transition: &dyn ActionTransition,
    grid: &mut Grid,
) -> Result<ActionOutcome, ActionError> {
    transition.pre_validate(grid)?;
    transition.apply(grid)
}
