//! Game state types.

use core::fmt;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Hidden deck built, hands not yet dealt.
    Dealing,
    /// Players are taking turns.
    Playing,
    /// Player one emptied their hand.
    PlayerOneWins,
    /// Player two emptied their hand.
    PlayerTwoWins,
    /// No cards were left to draw.
    Stalled,
}

impl GameState {
    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(
            self,
            Self::PlayerOneWins | Self::PlayerTwoWins | Self::Stalled
        )
    }
}

/// One of the two seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// First player; takes the first turn.
    One,
    /// Second player.
    Two,
}

impl Player {
    /// Returns the seat index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    /// Returns the opponent.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.write_str("Player 1"),
            Self::Two => f.write_str("Player 2"),
        }
    }
}
