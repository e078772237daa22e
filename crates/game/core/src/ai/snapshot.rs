use std::collections::HashSet;

use crate::state::{Allegiance, Grid, Position, UnitId};

/// One occupied cell as seen at the start of the opponent phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnapshotEntry {
    pub position: Position,
    pub unit: UnitId,
    pub allegiance: Allegiance,
}

/// Occupied cells captured once per opponent phase, in row-major order.
///
/// The snapshot is not refreshed while the phase runs: target candidates and
/// obstacle cells keep reflecting the board as it was when the phase began.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<SnapshotEntry>,
    occupied: HashSet<Position>,
}

impl Snapshot {
    pub fn capture(grid: &Grid) -> Self {
        let entries: Vec<SnapshotEntry> = grid
            .occupied_cells()
            .into_iter()
            .filter_map(|(position, unit)| {
                grid.unit(unit).map(|u| SnapshotEntry {
                    position,
                    unit,
                    allegiance: u.allegiance(),
                })
            })
            .collect();
        let occupied = entries.iter().map(|entry| entry.position).collect();
        Self { entries, occupied }
    }

    pub fn entries(&self) -> &[SnapshotEntry] {
        &self.entries
    }

    pub fn units_of(&self, allegiance: Allegiance) -> impl Iterator<Item = &SnapshotEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.allegiance == allegiance)
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.occupied.contains(&position)
    }
}
