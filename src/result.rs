//! Game outcome, turn log, and final report types.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::deck::CardDeck;
use crate::game::Player;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    /// Player one emptied their hand.
    PlayerOneWins,
    /// Player two emptied their hand.
    PlayerTwoWins,
    /// A draw was required with no cards left to draw.
    Stalled,
}

impl GameOutcome {
    /// Returns the winning player, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::PlayerOneWins => Some(Player::One),
            Self::PlayerTwoWins => Some(Player::Two),
            Self::Stalled => None,
        }
    }

    pub(crate) const fn won_by(player: Player) -> Self {
        match player {
            Player::One => Self::PlayerOneWins,
            Player::Two => Self::PlayerTwoWins,
        }
    }
}

/// One entry of the turn-by-turn game log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Hands were dealt and sorted and the starting card was turned up.
    Dealt {
        /// Sorted hands of player one and player two.
        hands: [Vec<Card>; 2],
        /// First card of the played pile.
        start: Card,
    },
    /// A player matched the played pile.
    Played {
        /// Player who played.
        player: Player,
        /// Card played.
        card: Card,
    },
    /// The played pile, minus its top, was shuffled back into the hidden deck.
    Recycled {
        /// Number of cards moved.
        cards: usize,
    },
    /// A player drew from the hidden deck.
    Drew {
        /// Player who drew.
        player: Player,
        /// Card drawn.
        card: Card,
    },
    /// A player's hand at the end of their turn.
    Hand {
        /// Owner of the hand.
        player: Player,
        /// Cards held.
        cards: Vec<Card>,
    },
    /// A draw was required but no cards were left anywhere.
    OutOfCards,
    /// A player emptied their hand.
    Won {
        /// The winner.
        player: Player,
    },
}

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{card}")?;
    }
    Ok(())
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dealt { hands, start } => {
                for (player, cards) in [Player::One, Player::Two].iter().zip(hands) {
                    write!(f, "{player}: ")?;
                    write_cards(f, cards)?;
                    f.write_str("\n")?;
                }
                write!(f, "Start card: {start}")
            }
            Self::Played { player, card } => write!(f, "{player} plays {card}"),
            Self::Recycled { .. } => f.write_str("Hidden deck empty, reshuffled played pile."),
            Self::Drew { player, card } => write!(f, "{player} draws {card}"),
            Self::Hand { player, cards } => {
                write!(f, "{player}: ")?;
                write_cards(f, cards)
            }
            Self::OutOfCards => f.write_str("No cards left to draw."),
            Self::Won { player } => write!(f, "Game over, {player} wins!"),
        }
    }
}

/// Terminal state of a finished game.
#[derive(Debug, Clone)]
pub struct GameReport {
    /// How the game ended.
    pub outcome: GameOutcome,
    /// Final hands of player one and player two.
    pub hands: [CardDeck; 2],
    /// Final played pile.
    pub played: CardDeck,
    /// Final hidden deck.
    pub hidden: CardDeck,
    /// Number of turns taken after the deal.
    pub turns: usize,
    /// Full turn log.
    pub events: Vec<GameEvent>,
}
