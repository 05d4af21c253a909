//! Square tile storage backing the [`Board`][crate::board::Board].

use std::ops::{Index, IndexMut};

use crate::board::{Position, Tile};

/// A `size` x `size` grid of tiles stored row-major.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    /// Length of one side of the grid.
    size: usize,
    /// Tiles that make up this grid.
    cells: Box<[Tile]>,
}

impl Grid {
    /// Build a grid of the given side length filled with [`Tile::Grass`]. The caller
    /// must have already checked that `size * size` does not overflow.
    pub(super) fn new(size: usize) -> Self {
        let cells = vec![Tile::default(); size * size].into_boxed_slice();
        Self { size, cells }
    }

    /// Length of one side of the grid.
    pub(super) fn size(&self) -> usize {
        self.size
    }

    /// Total number of tiles.
    pub(super) fn total_size(&self) -> usize {
        self.cells.len()
    }

    /// Reset every tile back to grass.
    pub(super) fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = Tile::default();
        }
    }

    /// Convert a position to an index into `cells`, or `None` if it is off the grid.
    #[inline]
    pub(super) fn try_linearize(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x < self.size && y < self.size {
            Some(y * self.size + x)
        } else {
            None
        }
    }

    /// Get the tile at the given position.
    pub(super) fn get(&self, pos: Position) -> Option<Tile> {
        self.try_linearize(pos).map(|i| self.cells[i])
    }

    /// Count the tiles of the given kind.
    pub(super) fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&cell| cell == tile).count()
    }

    /// Iterate the rows of the grid. Each row yields its positions and tiles left to right.
    pub(super) fn iter_rows(
        &self,
    ) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = (Position, Tile)>> {
        self.cells
            .chunks(self.size.max(1))
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    // Sizes are capped by MAX_TILES when set, so both components fit.
                    .map(move |(x, &tile)| (Position::new(x as i32, y as i32), tile))
            })
    }
}

impl Index<Position> for Grid {
    type Output = Tile;

    fn index(&self, pos: Position) -> &Self::Output {
        match self.try_linearize(pos) {
            Some(i) => &self.cells[i],
            None => panic!("{} is out of bounds for a {}x{} grid", pos, self.size, self.size),
        }
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        match self.try_linearize(pos) {
            Some(i) => &mut self.cells[i],
            None => panic!("{} is out of bounds for a {}x{} grid", pos, self.size, self.size),
        }
    }
}
