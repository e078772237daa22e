use std::collections::{HashSet, VecDeque};

use crate::action::can_attack;
use crate::state::{Grid, Position, Unit};

use super::{Snapshot, select_target};

/// What an opponent unit intends to do this phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AiDecision {
    /// No opposing unit left, or no cell improves on the current one.
    Idle,
    /// Target already in range.
    Attack { target: Position },
    /// Move to `to`, which brings `target` into range, then attack.
    AdvanceAndAttack { to: Position, target: Position },
    /// Move to the reachable cell closest to `target`.
    Advance { to: Position, target: Position },
}

impl AiDecision {
    pub fn destination(&self) -> Option<Position> {
        match self {
            Self::AdvanceAndAttack { to, .. } | Self::Advance { to, .. } => Some(*to),
            Self::Idle | Self::Attack { .. } => None,
        }
    }

    pub fn target(&self) -> Option<Position> {
        match self {
            Self::Idle => None,
            Self::Attack { target }
            | Self::AdvanceAndAttack { target, .. }
            | Self::Advance { target, .. } => Some(*target),
        }
    }
}

/// Decides what `unit` should do, without touching the grid.
///
/// Cells occupied in the snapshot or on the live grid are never entered.
/// The search is a breadth-first walk over the four neighbors, bounded by the
/// unit's movement. The first enqueued cell that puts the target in attack
/// range wins. Failing that, the first cell with the strictly smallest
/// distance to the target is chosen, provided it beats the starting cell.
pub fn plan(grid: &Grid, snapshot: &Snapshot, unit: &Unit) -> AiDecision {
    let start = unit.position();
    let Some(target) = select_target(snapshot, unit, start) else {
        return AiDecision::Idle;
    };

    if can_attack(grid, unit, start, target).is_ok() {
        return AiDecision::Attack { target };
    }

    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([(start, 0u32)]);
    let mut best: Option<Position> = None;
    let mut best_distance = start.distance(target);

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= unit.movement() {
            continue;
        }
        for next in current.neighbors() {
            if !grid.contains(next)
                || visited.contains(&next)
                || snapshot.is_occupied(next)
                || grid.is_occupied(next)
            {
                continue;
            }
            visited.insert(next);

            let distance = next.distance(target);
            if distance <= unit.attack_range() {
                return AiDecision::AdvanceAndAttack { to: next, target };
            }
            if distance < best_distance {
                best_distance = distance;
                best = Some(next);
            }
            queue.push_back((next, depth + 1));
        }
    }

    match best {
        Some(to) => AiDecision::Advance { to, target },
        None => AiDecision::Idle,
    }
}
