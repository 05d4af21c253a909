//! The treasure map board.
//!
//! Only one [`Board`] may be live in a process at a time. [`Board::new`] registers the
//! board and fails with [`AlreadyInitialized`] while another one is registered. The
//! registration is released by [`Board::teardown`], or when the board is dropped.

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, warn};
use rand::Rng;

use self::grid::Grid;
pub use self::{
    errors::{AlreadyInitialized, GenerateError, InvalidSizeReason, OutOfRange, SizeError},
    policy::{AnySize, FnPolicy, PlayerLimits, SizePolicy},
    position::Position,
    strategy::{water_target, Generated, Strategy, WaterRange},
    tile::Tile,
};

mod errors;
mod grid;
pub mod policy;
mod position;
mod strategy;
mod tile;

/// Largest number of tiles a board may hold, a 4096x4096 map.
pub const MAX_TILES: usize = 1 << 24;

/// Set while a [`Board`] is registered.
static LIVE: AtomicBool = AtomicBool::new(false);

/// The single map of the game.
#[derive(Debug)]
pub struct Board {
    /// Strategy used to pick how much water to generate.
    strategy: Strategy,

    /// House rule limiting sizes by number of players.
    policy: Box<dyn SizePolicy>,

    /// Tiles of the map. `None` until a size has been set.
    grid: Option<Grid>,
}

impl Board {
    /// Create and register a new board which accepts any square size.
    /// Fails if another board is already live.
    pub fn new(strategy: Strategy) -> Result<Self, AlreadyInitialized> {
        Self::with_policy(strategy, AnySize)
    }

    /// Create and register a new board that checks sizes against `policy`.
    /// Fails if another board is already live.
    pub fn with_policy<P: SizePolicy + 'static>(
        strategy: Strategy,
        policy: P,
    ) -> Result<Self, AlreadyInitialized> {
        LIVE.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AlreadyInitialized)?;
        debug!("registered {} board", strategy);
        Ok(Self {
            strategy,
            policy: Box::new(policy),
            grid: None,
        })
    }

    /// Create a board with 25-35% water.
    pub fn hazardous() -> Result<Self, AlreadyInitialized> {
        Self::new(Strategy::Hazardous)
    }

    /// Create a board with 10% water.
    pub fn safe() -> Result<Self, AlreadyInitialized> {
        Self::new(Strategy::Safe)
    }

    /// Returns true if a board is currently registered.
    pub fn is_live() -> bool {
        LIVE.load(Ordering::Acquire)
    }

    /// Release this board's registration so another board may be created.
    pub fn teardown(self) {
        debug!("tearing down {} board", self.strategy);
        drop(self);
    }

    /// Get the strategy used to generate this board.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Get the side length of the board, or 0 if no size has been set.
    pub fn size(&self) -> usize {
        self.grid.as_ref().map_or(0, Grid::size)
    }

    /// Try to set the size of the board. Returns `false` and leaves the board untouched
    /// if the size is not valid for the number of players.
    pub fn set_size(&mut self, width: usize, height: usize, players: usize) -> bool {
        match self.try_set_size(width, height, players) {
            Ok(()) => true,
            Err(err) => {
                debug!("{}", err);
                false
            }
        }
    }

    /// Set the size of the board, or return why the size was refused. Setting a new
    /// size discards any previously generated tiles.
    pub fn try_set_size(
        &mut self,
        width: usize,
        height: usize,
        players: usize,
    ) -> Result<(), SizeError> {
        let fail = |reason| Err(SizeError::new(reason, width, height, players));
        if width == 0 || height == 0 {
            return fail(InvalidSizeReason::Zero);
        }
        if width != height {
            return fail(InvalidSizeReason::NotSquare);
        }
        match width.checked_mul(width) {
            Some(tiles) if tiles <= MAX_TILES => {}
            _ => return fail(InvalidSizeReason::TooLarge),
        }
        if !self.policy.allows(width, players) {
            return fail(InvalidSizeReason::RejectedByPolicy);
        }
        debug!("board size set to {}x{} for {} players", width, width, players);
        self.grid = Some(Grid::new(width));
        Ok(())
    }

    /// Generate a fresh map using the thread-local RNG.
    pub fn generate(&mut self) -> Result<Generated, GenerateError> {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generate a fresh map using the given RNG. Each call discards the previous layout.
    /// On failure the map is left all grass.
    pub fn generate_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Generated, GenerateError> {
        let range = self.strategy.water_range();
        let grid = self.grid.as_mut().ok_or(GenerateError::SizeNotSet)?;
        match strategy::fill(grid, range, rng) {
            Ok(generated) => {
                debug!(
                    "generated {0}x{0} {1} map: treasure at {2}, {3} water tiles ({4}%)",
                    grid.size(),
                    self.strategy,
                    generated.treasure,
                    generated.water_tiles,
                    generated.water_pct,
                );
                Ok(generated)
            }
            Err(err) => {
                warn!("map generation failed: {}", err);
                grid.clear();
                Err(err)
            }
        }
    }

    /// Returns true if `(x, y)` is on the board.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.grid
            .as_ref()
            .and_then(|grid| grid.try_linearize(Position::new(x, y)))
            .is_some()
    }

    /// Check that `(x, y)` lies in `[0, size)` on both axes.
    pub fn check_bounds(&self, x: i32, y: i32) -> Result<(), OutOfRange> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(OutOfRange::new(Position::new(x, y), self.size()))
        }
    }

    /// Get the tile at `(x, y)`.
    pub fn get_tile(&self, x: i32, y: i32) -> Result<Tile, OutOfRange> {
        let pos = Position::new(x, y);
        self.grid
            .as_ref()
            .and_then(|grid| grid.get(pos))
            .ok_or_else(|| OutOfRange::new(pos, self.size()))
    }

    /// Count how many tiles of the given kind are on the board.
    pub fn count(&self, tile: Tile) -> usize {
        self.grid.as_ref().map_or(0, |grid| grid.count(tile))
    }

    /// Get an iterator over the rows of the board, top to bottom. Each row is an
    /// iterator over its positions and tiles. Empty if no size has been set.
    pub fn iter_rows(
        &self,
    ) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = (Position, Tile)>> {
        self.grid.iter().flat_map(|grid| grid.iter_rows())
    }
}

impl Drop for Board {
    fn drop(&mut self) {
        LIVE.store(false, Ordering::Release);
    }
}
