//! Fixed-size occupancy grid owning every unit in play.
//!
//! Each occupied cell stores exactly one [`UnitId`] and each unit records its
//! own [`Position`]. Both sides are updated together by [`Grid::place`],
//! [`Grid::relocate`], and [`Grid::remove`], so a unit is never in two cells
//! and a cell never holds two units.

use std::collections::BTreeMap;

use crate::config::GameConfig;
use crate::error::ActionError;

use super::{Allegiance, Position, Unit, UnitId, UnitSpec};

/// Territory tag used for presentation only.
pub const DEFAULT_TERRITORY: &str = "plain";

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: u32,
    columns: u32,
    cells: Vec<Option<UnitId>>,
    units: BTreeMap<UnitId, Unit>,
    next_unit_id: u32,
    turn: u32,
    territory: String,
}

impl Grid {
    /// Creates an empty grid. Dimensions are clamped to `1..=64`.
    pub fn new(rows: u32, columns: u32, territory: impl Into<String>) -> Self {
        Self::with_turn(rows, columns, territory, 1)
    }

    pub(crate) fn with_turn(
        rows: u32,
        columns: u32,
        territory: impl Into<String>,
        turn: u32,
    ) -> Self {
        let (rows, columns) = GameConfig::clamp_dimensions(rows, columns);
        Self {
            rows,
            columns,
            cells: vec![None; rows as usize * columns as usize],
            units: BTreeMap::new(),
            next_unit_id: 0,
            turn,
            territory: territory.into(),
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn territory(&self) -> &str {
        &self.territory
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.rows
            && (position.y as u32) < self.columns
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.x as usize * self.columns as usize + position.y as usize)
    }

    /// Unit id stored at `position`, `None` for empty or out-of-bounds cells.
    pub fn cell(&self, position: Position) -> Option<UnitId> {
        self.index(position).and_then(|index| self.cells[index])
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.cell(position).is_some()
    }

    pub fn unit_at(&self, position: Position) -> Option<&Unit> {
        self.cell(position).and_then(|id| self.units.get(&id))
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }

    pub(crate) fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.get_mut(&id)
    }

    /// All units in id order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    pub fn units_of(&self, allegiance: Allegiance) -> impl Iterator<Item = &Unit> {
        self.units
            .values()
            .filter(move |unit| unit.allegiance() == allegiance)
    }

    pub fn is_army_alive(&self, allegiance: Allegiance) -> bool {
        self.units_of(allegiance).next().is_some()
    }

    /// Row-major list of occupied cells.
    pub fn occupied_cells(&self) -> Vec<(Position, UnitId)> {
        let columns = self.columns as usize;
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| {
                cell.map(|id| {
                    let position = Position::new((index / columns) as i32, (index % columns) as i32);
                    (position, id)
                })
            })
            .collect()
    }

    /// Places a new unit built from `spec` at `position`.
    pub fn place(&mut self, spec: UnitSpec, position: Position) -> Result<UnitId, ActionError> {
        let index = self
            .index(position)
            .ok_or(ActionError::OutOfBounds { position })?;
        if self.cells[index].is_some() {
            return Err(ActionError::CellOccupied { position });
        }

        let id = UnitId(self.next_unit_id);
        self.next_unit_id += 1;
        self.cells[index] = Some(id);
        self.units.insert(id, Unit::from_spec(id, spec, position));
        Ok(id)
    }

    /// Moves a unit to an empty in-bounds cell, clearing its previous cell.
    pub(crate) fn relocate(&mut self, id: UnitId, to: Position) -> Result<Position, ActionError> {
        let to_index = self
            .index(to)
            .ok_or(ActionError::OutOfBounds { position: to })?;
        if self.cells[to_index].is_some() {
            return Err(ActionError::CellOccupied { position: to });
        }
        let from = self
            .units
            .get(&id)
            .map(Unit::position)
            .ok_or(ActionError::UnknownUnit(id))?;
        if let Some(from_index) = self.index(from) {
            self.cells[from_index] = None;
        }
        self.cells[to_index] = Some(id);
        if let Some(unit) = self.units.get_mut(&id) {
            unit.set_position(to);
        }
        Ok(from)
    }

    /// Removes a unit from play, returning it.
    pub(crate) fn remove(&mut self, id: UnitId) -> Option<Unit> {
        let unit = self.units.remove(&id)?;
        if let Some(index) = self.index(unit.position())
            && self.cells[index] == Some(id)
        {
            self.cells[index] = None;
        }
        Some(unit)
    }

    pub(crate) fn units_mut(&mut self) -> impl Iterator<Item = &mut Unit> {
        self.units.values_mut()
    }

    pub(crate) fn advance_turn(&mut self) -> u32 {
        self.turn += 1;
        self.turn
    }
}
