use std::fmt;

/// Terrain of a single tile on the map.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Tile {
    /// Walkable ground. Every tile starts as grass.
    Grass,
    /// Hazard. A player who walks into water is sent back to their start.
    Water,
    /// The single tile the players are looking for.
    Treasure,
}

impl Default for Tile {
    fn default() -> Self {
        Tile::Grass
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Tile::Grass => "grass",
            Tile::Water => "water",
            Tile::Treasure => "treasure",
        })
    }
}
