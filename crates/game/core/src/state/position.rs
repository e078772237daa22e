use std::fmt;

/// Grid coordinate. `x` indexes rows and `y` indexes columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance `|Δx| + |Δy|`.
    pub const fn distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Orthogonal neighbours in a fixed order: north, south, west, east.
    pub const fn neighbors(self) -> [Position; 4] {
        [
            Position::new(self.x - 1, self.y),
            Position::new(self.x + 1, self.y),
            Position::new(self.x, self.y - 1),
            Position::new(self.x, self.y + 1),
        ]
    }

    /// One step of the diagonal-greedy walk toward `target`.
    ///
    /// Both axes advance in the same step when neither is aligned yet.
    pub fn step_toward(self, target: Position) -> Position {
        Position::new(
            self.x + (target.x - self.x).signum(),
            self.y + (target.y - self.y).signum(),
        )
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_manhattan() {
        assert_eq!(Position::new(0, 0).distance(Position::new(2, 2)), 4);
        assert_eq!(Position::new(3, 1).distance(Position::new(1, 4)), 5);
        assert_eq!(Position::new(2, 2).distance(Position::new(2, 2)), 0);
    }

    #[test]
    fn step_toward_moves_diagonally_until_aligned() {
        let target = Position::new(3, 1);
        let first = Position::ORIGIN.step_toward(target);
        assert_eq!(first, Position::new(1, 1));
        let second = first.step_toward(target);
        assert_eq!(second, Position::new(2, 1));
        assert_eq!(second.step_toward(target), target);
    }
}
