use thiserror::Error;

/// Error returned when a player's position history cannot answer a request.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum HistoryError {
    /// Resetting the initial position needs at least one position.
    #[error("the player does not have any positions yet")]
    NoPositionsYet,
    /// The player has not been given a starting position.
    #[error("the initial position of the player was not set")]
    InitialPositionNotSet,
}
