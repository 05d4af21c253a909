//! Players and the history of positions they have occupied.

use std::rc::Rc;

use log::trace;

use crate::{
    board::{Board, OutOfRange, Position},
    team::Team,
};

pub use self::errors::HistoryError;

mod errors;

/// A player on the map.
///
/// The player keeps every position it has occupied, in order. The first entry is the
/// start position and the last entry is the current position. Entries are only ever
/// appended, except by [`Player::reset_initial_position`], which swaps the first and
/// last entries.
#[derive(Debug, Clone)]
pub struct Player {
    /// ID of this player.
    id: u32,

    /// Team the player belongs to, if any.
    team: Option<Rc<Team>>,

    /// Every position this player has occupied, oldest first.
    history: Vec<Position>,
}

impl Player {
    /// Construct a player without a team.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            team: None,
            history: Vec::new(),
        }
    }

    /// Construct a player that belongs to the given team.
    pub fn with_team(id: u32, team: Rc<Team>) -> Self {
        Self {
            team: Some(team),
            ..Self::new(id)
        }
    }

    /// Get the ID of this player.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Get the team of this player, if it has one.
    pub fn team(&self) -> Option<&Team> {
        self.team.as_deref()
    }

    /// Move the player to `pos`. Returns `false` without changing anything if no
    /// position was given.
    pub fn set_position(&mut self, pos: Option<Position>) -> bool {
        match pos {
            Some(pos) => {
                trace!("player {} moved to {}", self.id, pos);
                self.history.push(pos);
                true
            }
            None => false,
        }
    }

    /// Record `pos` as the player's latest position. Same as [`Player::set_position`].
    pub fn add_position(&mut self, pos: Option<Position>) -> bool {
        self.set_position(pos)
    }

    /// Get the current position of the player.
    pub fn position(&self) -> Result<Position, HistoryError> {
        self.history
            .last()
            .copied()
            .ok_or(HistoryError::InitialPositionNotSet)
    }

    /// Get the start position of the player, if it has one.
    pub fn start_position(&self) -> Option<Position> {
        self.history.first().copied()
    }

    /// Every position this player has occupied, oldest first.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Make the current position the new start position. The old start position takes
    /// its place as the current position.
    pub fn reset_initial_position(&mut self) -> Result<(), HistoryError> {
        if self.history.is_empty() {
            return Err(HistoryError::NoPositionsYet);
        }
        let last = self.history.len() - 1;
        self.history.swap(0, last);
        trace!("player {} now starts at {}", self.id, self.history[0]);
        Ok(())
    }

    /// Send the player back to its start position. The move is appended to the history.
    pub fn back_to_start_position(&mut self) -> Result<(), HistoryError> {
        let start = self
            .start_position()
            .ok_or(HistoryError::InitialPositionNotSet)?;
        self.set_position(Some(start));
        Ok(())
    }

    /// Returns true if the player has ever occupied `(x, y)`. Fails if `(x, y)` is not
    /// on `board`.
    pub fn was_visited(&self, board: &Board, x: i32, y: i32) -> Result<bool, OutOfRange> {
        board.check_bounds(x, y)?;
        let pos = Position::new(x, y);
        Ok(self.history.contains(&pos))
    }
}
