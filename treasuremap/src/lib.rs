//! Procedurally generated treasure maps.
//!
//! A [`Board`] is a square map of [`Tile`]s holding exactly one treasure and a share of
//! water decided by its [`Strategy`]. Only one board may be live at a time. [`Player`]s
//! track every position they have occupied and answer visitation queries against the
//! board passed to them.
//!
//! ```
//! use treasuremap::{Board, Player, Position, Tile};
//!
//! let mut board = Board::safe()?;
//! assert!(board.set_size(10, 10, 2));
//! board.generate()?;
//! assert_eq!(board.count(Tile::Treasure), 1);
//! assert_eq!(board.count(Tile::Water), 10);
//!
//! let mut player = Player::new(1);
//! player.set_position(Some(Position::new(5, 5)));
//! assert!(player.was_visited(&board, 5, 5)?);
//!
//! board.teardown();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod player;
pub mod team;

pub use crate::{
    board::{
        AlreadyInitialized, Board, GenerateError, Generated, OutOfRange, Position, SizeError,
        Strategy, Tile, WaterRange, MAX_TILES,
    },
    player::{HistoryError, Player},
    team::Team,
};
