//! Side-effect-free legality checks shared by player-issued and AI-issued actions.
//!
//! Each check takes the acting unit and an explicit origin so the opponent
//! controller can ask "could this unit attack from there?" without moving it.

use crate::error::ActionError;
use crate::state::{Allegiance, Grid, Position, SkillSlot, Unit};

/// Checks whether `unit` may move from `from` to `to` this turn.
pub fn can_move(grid: &Grid, unit: &Unit, from: Position, to: Position) -> Result<(), ActionError> {
    if unit.has_moved() {
        return Err(ActionError::AlreadyActed { unit: unit.id() });
    }

    let distance = from.distance(to);
    if distance > unit.movement() {
        return Err(ActionError::OutOfRange {
            distance,
            range: unit.movement(),
        });
    }

    if !grid.contains(to) {
        return Err(ActionError::OutOfBounds { position: to });
    }

    if grid.is_occupied(to) {
        return Err(ActionError::CellOccupied { position: to });
    }

    is_path_clear(grid, from, to, unit.allegiance())
}

/// Walks the diagonal-greedy trace from `from` to `to`.
///
/// Each step advances x toward the target if not aligned and y toward the
/// target if not aligned. Any intermediate cell holding a unit of another
/// allegiance blocks the path. The destination itself is not inspected and
/// friendly units never block.
pub fn is_path_clear(
    grid: &Grid,
    from: Position,
    to: Position,
    allegiance: Allegiance,
) -> Result<(), ActionError> {
    let mut current = from;
    while current != to {
        current = current.step_toward(to);
        if current == to {
            break;
        }
        if let Some(blocker) = grid.unit_at(current)
            && blocker.allegiance().is_hostile_to(allegiance)
        {
            return Err(ActionError::PathBlocked { position: current });
        }
    }
    Ok(())
}

/// Checks whether `unit` standing at `from` may attack the unit at `target`.
pub fn can_attack(
    grid: &Grid,
    unit: &Unit,
    from: Position,
    target: Position,
) -> Result<(), ActionError> {
    if unit.has_attacked() {
        return Err(ActionError::AlreadyActed { unit: unit.id() });
    }

    if !grid.contains(target) {
        return Err(ActionError::OutOfBounds { position: target });
    }

    let defender = grid
        .unit_at(target)
        .ok_or(ActionError::InvalidTarget { position: target })?;
    if !defender.allegiance().is_hostile_to(unit.allegiance()) {
        return Err(ActionError::InvalidTarget { position: target });
    }

    within_range(from, target, unit.attack_range())
}

/// Checks whether `unit` standing at `from` may cast the skill in `slot` on `target`.
pub fn can_cast_skill(
    grid: &Grid,
    unit: &Unit,
    slot: SkillSlot,
    from: Position,
    target: Position,
) -> Result<(), ActionError> {
    let skill = unit.skill(slot).ok_or(ActionError::UnknownSkill {
        unit: unit.id(),
        slot,
    })?;

    if !grid.contains(target) {
        return Err(ActionError::OutOfBounds { position: target });
    }

    let recipient = grid
        .unit_at(target)
        .ok_or(ActionError::InvalidTarget { position: target })?;

    let hostile = recipient.allegiance().is_hostile_to(unit.allegiance());
    let effect = skill.effect_type();
    if (effect.is_offensive() && !hostile) || (effect.is_supportive() && hostile) {
        return Err(ActionError::InvalidTarget { position: target });
    }

    if !skill.is_ready() {
        return Err(ActionError::OnCooldown {
            turns: skill.turns_until_ready(),
        });
    }

    if unit.has_attacked() {
        return Err(ActionError::AlreadyActed { unit: unit.id() });
    }

    if effect == crate::state::EffectType::Heal && recipient.is_full_health() {
        return Err(ActionError::TargetFullHealth {
            target: recipient.id(),
        });
    }

    within_range(from, target, skill.range())
}

fn within_range(from: Position, target: Position, range: u32) -> Result<(), ActionError> {
    let distance = from.distance(target);
    if distance > range {
        return Err(ActionError::OutOfRange { distance, range });
    }
    Ok(())
}
