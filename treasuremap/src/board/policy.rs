//! Rules deciding which board sizes are allowed for a given number of players.
//!
//! The board itself only insists that it is square and non-empty. Anything beyond
//! that is a house rule and is supplied as a [`SizePolicy`] when the board is built.

use std::{fmt::Debug, ops::RangeInclusive};

/// Decides whether a square board of `size` is allowed for `players` players.
pub trait SizePolicy: Debug + Send + Sync {
    /// Returns true if the size is acceptable.
    fn allows(&self, size: usize, players: usize) -> bool;
}

/// Policy that accepts every size. Only the hard constraints of the board apply.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct AnySize;

impl SizePolicy for AnySize {
    fn allows(&self, _size: usize, _players: usize) -> bool {
        true
    }
}

/// Policy bounding both the number of players and the side length of the board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlayerLimits {
    /// Allowed number of players.
    players: RangeInclusive<usize>,
    /// Allowed side lengths.
    sizes: RangeInclusive<usize>,
}

impl PlayerLimits {
    /// Create limits allowing the given player counts and board sizes.
    pub fn new(players: RangeInclusive<usize>, sizes: RangeInclusive<usize>) -> Self {
        Self { players, sizes }
    }
}

impl SizePolicy for PlayerLimits {
    fn allows(&self, size: usize, players: usize) -> bool {
        self.players.contains(&players) && self.sizes.contains(&size)
    }
}

/// Wraps a closure so it can be used as a [`SizePolicy`].
pub struct FnPolicy<F>(pub F);

impl<F> Debug for FnPolicy<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("FnPolicy(..)")
    }
}

impl<F: Fn(usize, usize) -> bool + Send + Sync> SizePolicy for FnPolicy<F> {
    fn allows(&self, size: usize, players: usize) -> bool {
        (self.0)(size, players)
    }
}
