//! Game configuration options.

use crate::error::GameError;

/// Cards dealt to each player before the first turn.
pub const HAND_SIZE: usize = 8;

/// Configuration options for a game.
///
/// ```
/// use suitmatch::GameOptions;
///
/// let options = GameOptions::default().with_packs(3);
/// assert_eq!(options.packs, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of 52-card packs in the hidden deck.
    pub packs: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self { packs: 1 }
    }
}

impl GameOptions {
    /// Sets the number of packs.
    #[must_use]
    pub const fn with_packs(mut self, packs: usize) -> Self {
        self.packs = packs;
        self
    }

    /// Checks that the options describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPackCount`] if `packs` is zero.
    pub const fn validate(&self) -> Result<(), GameError> {
        if self.packs < 1 {
            return Err(GameError::InvalidPackCount);
        }
        Ok(())
    }

    /// Parses a line of user input holding the pack count.
    ///
    /// Returns `None` unless the trimmed input is a positive integer.
    ///
    /// ```
    /// use suitmatch::GameOptions;
    ///
    /// assert_eq!(GameOptions::parse_input("2").map(|o| o.packs), Some(2));
    /// assert_eq!(GameOptions::parse_input("0"), None);
    /// ```
    #[must_use]
    pub fn parse_input(input: &str) -> Option<Self> {
        input
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|&packs| packs >= 1)
            .map(|packs| Self { packs })
    }

    /// Builds options from a line of user input holding the pack count.
    ///
    /// Anything [`parse_input`](Self::parse_input) rejects falls back to one pack.
    ///
    /// ```
    /// use suitmatch::GameOptions;
    ///
    /// assert_eq!(GameOptions::from_input(" 4\n").packs, 4);
    /// assert_eq!(GameOptions::from_input("zero").packs, 1);
    /// assert_eq!(GameOptions::from_input("0").packs, 1);
    /// ```
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        Self::parse_input(input).unwrap_or_default()
    }
}
