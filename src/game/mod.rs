//! Game engine and state management.

extern crate alloc;

use alloc::vec::Vec;
use rand::Rng;

use crate::card::Card;
use crate::deck::CardDeck;
use crate::error::GameError;
use crate::options::{GameOptions, HAND_SIZE};
use crate::result::{GameEvent, GameOutcome, GameReport};

pub mod state;
mod turn;

pub use state::{GameState, Player};

/// A two-player matching game.
///
/// The game owns all four decks. Every card of the configured packs sits in
/// exactly one of them at any time, so [`card_count`](Self::card_count) never
/// changes.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Face-down deck players draw from.
    pub hidden: CardDeck,
    /// Face-up pile; its top is the card to match.
    pub played: CardDeck,
    /// Hands of player one and player two.
    pub hands: [CardDeck; 2],
    /// Current game state.
    state: GameState,
    /// Player whose turn it is.
    turn: Player,
    /// Whether each player drew instead of playing on their last turn.
    just_drew: [bool; 2],
    /// Turns taken since the deal.
    turns: usize,
    /// Turn log.
    events: Vec<GameEvent>,
}

impl Game {
    /// Creates a game with an ordered, unshuffled hidden deck.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPackCount`] if `options.packs` is zero, or
    /// [`GameError::AllocationFailure`] if the deck cannot be built.
    ///
    /// # Example
    ///
    /// ```
    /// use suitmatch::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default()).unwrap();
    /// assert_eq!(game.state(), GameState::Dealing);
    /// assert_eq!(game.hidden.len(), 52);
    /// ```
    pub fn new(options: GameOptions) -> Result<Self, GameError> {
        options.validate()?;

        let mut hidden = CardDeck::new();
        hidden.init_standard_packs(options.packs)?;

        Ok(Self {
            options,
            hidden,
            played: CardDeck::new(),
            hands: [CardDeck::new(), CardDeck::new()],
            state: GameState::Dealing,
            turn: Player::One,
            just_drew: [false; 2],
            turns: 0,
            events: Vec::new(),
        })
    }

    /// Shuffles the hidden deck, deals both hands, and turns up the starting card.
    ///
    /// Cards go to player one and player two alternately until each holds
    /// [`HAND_SIZE`]; both hands are then sorted.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] if the game is not in `Dealing`, or
    /// [`GameError::AllocationFailure`] if a deck cannot grow.
    pub fn deal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.state != GameState::Dealing {
            return Err(GameError::InvalidState);
        }

        self.hidden.shuffle(rng)?;

        for _ in 0..HAND_SIZE {
            for hand in &mut self.hands {
                let card = self.hidden.pop()?;
                hand.push(card)?;
            }
        }
        for hand in &mut self.hands {
            hand.sort();
        }

        let start = self.hidden.pop()?;
        self.played.push(start)?;

        self.events.push(GameEvent::Dealt {
            hands: [
                self.hands[0].cards().to_vec(),
                self.hands[1].cards().to_vec(),
            ],
            start,
        });
        self.state = GameState::Playing;

        Ok(())
    }

    /// Deals if needed, then takes turns until the game ends.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] if the game has already ended, or
    /// [`GameError::AllocationFailure`] if a deck cannot grow.
    pub fn play<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<GameReport, GameError> {
        if self.state == GameState::Dealing {
            self.deal(rng)?;
        }

        let outcome = loop {
            if let Some(outcome) = self.step(rng)? {
                break outcome;
            }
        };

        Ok(self.report(outcome))
    }

    fn report(&self, outcome: GameOutcome) -> GameReport {
        GameReport {
            outcome,
            hands: self.hands.clone(),
            played: self.played.clone(),
            hidden: self.hidden.clone(),
            turns: self.turns,
            events: self.events.clone(),
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> Player {
        self.turn
    }

    /// Returns whether `player` drew instead of playing on their last turn.
    #[must_use]
    pub const fn just_drew(&self, player: Player) -> bool {
        self.just_drew[player.index()]
    }

    /// Returns the number of turns taken since the deal.
    #[must_use]
    pub const fn turns_taken(&self) -> usize {
        self.turns
    }

    /// Returns the top of the played pile.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.played.top().copied()
    }

    /// Returns the total number of cards across all four decks.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hidden.len() + self.played.len() + self.hands[0].len() + self.hands[1].len()
    }

    /// Returns the turn log so far.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}

/// Plays a full game with `packs` packs, drawing randomness from `rng`.
///
/// # Errors
///
/// Returns [`GameError::InvalidPackCount`] if `packs` is zero, or
/// [`GameError::AllocationFailure`] if a deck cannot grow.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let report = suitmatch::play_game(1, &mut rng).unwrap();
/// assert!(report.turns > 0);
/// ```
pub fn play_game<R: Rng + ?Sized>(packs: usize, rng: &mut R) -> Result<GameReport, GameError> {
    Game::new(GameOptions::default().with_packs(packs))?.play(rng)
}

/// Plays a full game with `packs` packs using the process-wide random source.
///
/// # Errors
///
/// Returns [`GameError::InvalidPackCount`] if `packs` is zero, or
/// [`GameError::AllocationFailure`] if a deck cannot grow.
#[cfg(feature = "std")]
pub fn play_game_shared(packs: usize) -> Result<GameReport, GameError> {
    play_game(packs, &mut crate::rng::shared())
}
