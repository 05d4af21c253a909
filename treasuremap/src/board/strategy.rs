//! Map generation strategies.
//!
//! Every strategy runs the same algorithm: clear the grid to grass, drop the treasure
//! on a random tile, then scatter water by rejection sampling until the strategy's
//! share of the map is covered. Strategies differ only in the [`WaterRange`] they
//! draw that share from.

use std::fmt;

use log::trace;
use rand::Rng;

use crate::board::{grid::Grid, GenerateError, Position, Tile};

/// Upper bound on random draws per tile before the water fill gives up.
const DRAWS_PER_TILE: usize = 1000;

/// Inclusive range of water coverage, in whole percent of the map.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct WaterRange {
    min: u32,
    max: u32,
}

impl WaterRange {
    /// Coverage used by [`Strategy::Hazardous`].
    pub const HAZARDOUS: WaterRange = WaterRange { min: 25, max: 35 };
    /// Coverage used by [`Strategy::Safe`].
    pub const SAFE: WaterRange = WaterRange { min: 10, max: 10 };

    /// Create a range covering `min..=max` percent.
    /// Returns `None` if `min > max` or if `max` is 100 or more, since the treasure
    /// always needs a tile of its own.
    pub fn new(min: u32, max: u32) -> Option<Self> {
        if min <= max && max < 100 {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Create a range that always yields `pct` percent.
    pub fn fixed(pct: u32) -> Option<Self> {
        Self::new(pct, pct)
    }

    /// Lowest percentage this range can draw.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Highest percentage this range can draw.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Draw a percentage uniformly from the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.min, self.max + 1)
    }
}

impl fmt::Display for WaterRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}%", self.min)
        } else {
            write!(f, "{}-{}%", self.min, self.max)
        }
    }
}

/// Which kind of map to generate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Strategy {
    /// Between 25% and 35% of the map is water, redrawn on every generation.
    Hazardous,
    /// Exactly 10% of the map is water.
    Safe,
    /// Water coverage drawn from a caller-supplied range.
    Custom(WaterRange),
}

impl Strategy {
    /// Get the range of water coverage this strategy draws from.
    pub fn water_range(&self) -> WaterRange {
        match *self {
            Strategy::Hazardous => WaterRange::HAZARDOUS,
            Strategy::Safe => WaterRange::SAFE,
            Strategy::Custom(range) => range,
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Safe
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::Hazardous => f.pad("hazardous"),
            Strategy::Safe => f.pad("safe"),
            Strategy::Custom(range) => write!(f, "custom ({})", range),
        }
    }
}

/// Summary of a successful generation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Generated {
    /// Where the treasure was placed.
    pub treasure: Position,
    /// Percentage of the map that was drawn to be water.
    pub water_pct: u32,
    /// Number of water tiles placed.
    pub water_tiles: usize,
}

/// Number of water tiles for `pct` percent of `total` tiles, rounded up.
pub fn water_target(total: usize, pct: u32) -> usize {
    let pct = pct as usize;
    // Split so that `total * pct` cannot overflow.
    let (whole, rest) = (total / 100, total % 100);
    whole * pct + (rest * pct + 99) / 100
}

/// Pick a uniformly random position on a grid of the given size.
fn random_position<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Position {
    let x = rng.gen_range(0, size);
    let y = rng.gen_range(0, size);
    Position::new(x as i32, y as i32)
}

/// Regenerate `grid` from scratch: grass everywhere, one treasure, and water covering
/// a share of the map drawn from `range`.
pub(super) fn fill<R: Rng + ?Sized>(
    grid: &mut Grid,
    range: WaterRange,
    rng: &mut R,
) -> Result<Generated, GenerateError> {
    grid.clear();
    let treasure = random_position(grid.size(), rng);
    grid[treasure] = Tile::Treasure;

    let water_pct = range.sample(rng);
    let target = water_target(grid.total_size(), water_pct);
    let available = grid.total_size() - 1;
    if target > available {
        return Err(GenerateError::TooMuchWater { target, available });
    }

    let max_draws = grid.total_size().saturating_mul(DRAWS_PER_TILE);
    let mut placed = 0;
    let mut draws = 0;
    while placed < target {
        if draws == max_draws {
            return Err(GenerateError::DrawLimitExceeded { placed, target });
        }
        draws += 1;
        let pos = random_position(grid.size(), rng);
        match grid[pos] {
            // Occupied draws do not count towards the target.
            Tile::Water | Tile::Treasure => trace!("rejected water draw at {}", pos),
            Tile::Grass => {
                grid[pos] = Tile::Water;
                placed += 1;
            }
        }
    }

    Ok(Generated {
        treasure,
        water_pct,
        water_tiles: placed,
    })
}
