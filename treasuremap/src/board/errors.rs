//! Errors used by the [`Board`][crate::board::Board].

use thiserror::Error;

use crate::board::Position;

/// Error returned when constructing a board while another one is still live.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("a board was already initialized; tear it down before creating another")]
pub struct AlreadyInitialized;

/// Reason why a board size was refused.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum InvalidSizeReason {
    /// Width or height was zero.
    #[error("the board must be at least 1x1")]
    Zero,
    /// Width and height differ.
    #[error("the board must be square")]
    NotSquare,
    /// The board would hold more than [`MAX_TILES`][crate::board::MAX_TILES] tiles.
    #[error("the board is too large")]
    TooLarge,
    /// The configured size policy refused this size for the number of players.
    #[error("the size is not allowed for this number of players")]
    RejectedByPolicy,
}

/// Error returned when trying to set the size of the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("cannot use a {width}x{height} board for {players} players: {reason}")]
pub struct SizeError {
    #[source]
    reason: InvalidSizeReason,
    width: usize,
    height: usize,
    players: usize,
}

impl SizeError {
    /// Construct a size error from the reason and the rejected request.
    pub(super) fn new(
        reason: InvalidSizeReason,
        width: usize,
        height: usize,
        players: usize,
    ) -> Self {
        Self {
            reason,
            width,
            height,
            players,
        }
    }

    /// Get the reason the size was refused.
    pub fn reason(&self) -> InvalidSizeReason {
        self.reason
    }

    /// The requested `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The number of players the size was requested for.
    pub fn players(&self) -> usize {
        self.players
    }
}

/// Error returned when generating the map fails.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum GenerateError {
    /// `generate` was called before a size was set.
    #[error("the size of the map was not set")]
    SizeNotSet,

    /// The drawn percentage asks for more water than there are free tiles.
    #[error("cannot place {target} water tiles, only {available} tiles are free")]
    TooMuchWater { target: usize, available: usize },

    /// The rejection loop ran out of draws before placing every water tile.
    #[error("gave up after placing {placed} of {target} water tiles")]
    DrawLimitExceeded { placed: usize, target: usize },
}

/// Error returned when a coordinate falls outside the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("{pos} is out of range for a board of size {size}")]
pub struct OutOfRange {
    /// The coordinate that was queried.
    pos: Position,
    /// Side length of the board at the time of the query.
    size: usize,
}

impl OutOfRange {
    /// Construct an out of range error for the given position.
    pub(crate) fn new(pos: Position, size: usize) -> Self {
        Self { pos, size }
    }

    /// Get the position that was out of range.
    pub fn pos(&self) -> Position {
        self.pos
    }

    /// Get the board size the position was checked against.
    pub fn size(&self) -> usize {
        self.size
    }
}
