use std::fmt;

/// A coordinate on the map. Coordinates are signed so that callers can express
/// positions off the edge of the board; bounds are checked against the live
/// [`Board`][crate::board::Board] where it matters.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Position {
    /// Horizontal position of the tile.
    pub x: i32,
    /// Vertical position of the tile.
    pub y: i32,
}

impl Position {
    /// Construct a [`Position`] from the given `x` and `y`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Get the position shifted by `dx` and `dy`. Saturates rather than wrapping so an
    /// extreme offset stays out of range instead of landing back on the board.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl From<(i32, i32)> for Position {
    /// Construct a [`Position`] from the given `(x, y)` pair.
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Position> for (i32, i32) {
    /// Convert the [`Position`] into an `(x, y)` pair.
    fn from(pos: Position) -> Self {
        (pos.x, pos.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
