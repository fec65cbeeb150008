//! Error types for deck and game operations.

use thiserror::Error;

/// Errors that can occur while manipulating a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Growing the deck could not obtain memory.
    #[error("deck allocation failed")]
    AllocationFailure,
    /// Pop on an empty deck.
    #[error("deck is empty")]
    EmptyDeck,
    /// Index outside the valid range for the operation.
    #[error("index {index} out of range for deck of {len} cards")]
    InvalidIndex {
        /// The rejected index.
        index: usize,
        /// Deck size at the time of the call.
        len: usize,
    },
    /// Pack count below one.
    #[error("pack count must be at least 1")]
    InvalidPackCount,
}

/// Errors that can occur while running a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Pack count below one.
    #[error("pack count must be at least 1")]
    InvalidPackCount,
    /// A deck could not grow.
    #[error("deck allocation failed")]
    AllocationFailure,
    /// Invalid game state for this operation.
    #[error("invalid game state for this operation")]
    InvalidState,
    /// A deck operation was called outside its contract.
    #[error("deck contract violated: {0}")]
    Deck(DeckError),
}

impl From<DeckError> for GameError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::AllocationFailure => Self::AllocationFailure,
            DeckError::InvalidPackCount => Self::InvalidPackCount,
            other => Self::Deck(other),
        }
    }
}
