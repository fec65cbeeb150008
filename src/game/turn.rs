use rand::Rng;

use crate::error::GameError;
use crate::result::{GameEvent, GameOutcome};

use super::{Game, GameState, Player};

impl Game {
    /// Index of the first card in `player`'s hand that matches the played top.
    fn first_match(&self, player: Player) -> Option<usize> {
        let top = self.played.top()?;
        self.hands[player.index()]
            .cards()
            .iter()
            .position(|card| card.matches(top))
    }

    /// Shuffles every played card except the top back into the hidden deck.
    ///
    /// Returns the number of cards moved.
    fn recycle_played<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize, GameError> {
        let top = self.played.pop()?;
        let mut pile = core::mem::take(&mut self.played);
        self.played.push(top)?;

        let moved = pile.len();
        pile.shuffle(rng)?;
        self.hidden.append(&mut pile)?;

        Ok(moved)
    }

    /// Draws one card into `player`'s hand, recycling the played pile if the
    /// hidden deck is empty.
    ///
    /// Returns `false` without drawing when there is nothing left to draw.
    fn draw_for<R: Rng + ?Sized>(&mut self, player: Player, rng: &mut R) -> Result<bool, GameError> {
        if self.hidden.is_empty() {
            if self.played.len() <= 1 {
                return Ok(false);
            }
            let cards = self.recycle_played(rng)?;
            self.events.push(GameEvent::Recycled { cards });
        }

        let card = self.hidden.pop()?;
        let hand = &mut self.hands[player.index()];
        hand.push(card)?;
        hand.sort();
        self.just_drew[player.index()] = true;
        self.events.push(GameEvent::Drew { player, card });

        Ok(true)
    }

    /// Takes one turn for the active player.
    ///
    /// The player plays the first card in their sorted hand that shares a suit
    /// or rank with the played top. A player whose last turn was a draw, or who
    /// holds no match, draws instead. Returns the outcome once the game ends.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] if the game is not in `Playing`, or
    /// [`GameError::AllocationFailure`] if a deck cannot grow.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Option<GameOutcome>, GameError> {
        if self.state != GameState::Playing {
            return Err(GameError::InvalidState);
        }

        let player = self.turn;
        let seat = player.index();

        let playable = if self.just_drew[seat] {
            None
        } else {
            self.first_match(player)
        };

        if let Some(index) = playable {
            let card = self.hands[seat].remove_at(index)?;
            self.played.push(card)?;
            self.just_drew[seat] = false;
            self.events.push(GameEvent::Played { player, card });
        } else if !self.draw_for(player, rng)? {
            self.events.push(GameEvent::OutOfCards);
            self.state = GameState::Stalled;
            self.turns += 1;
            return Ok(Some(GameOutcome::Stalled));
        }

        self.turns += 1;
        self.events.push(GameEvent::Hand {
            player,
            cards: self.hands[seat].cards().to_vec(),
        });

        if self.hands[seat].is_empty() {
            let outcome = GameOutcome::won_by(player);
            self.state = match player {
                Player::One => GameState::PlayerOneWins,
                Player::Two => GameState::PlayerTwoWins,
            };
            self.events.push(GameEvent::Won { player });
            return Ok(Some(outcome));
        }

        self.turn = player.other();
        Ok(None)
    }
}
