//! Growable card container with index addressing, shuffling, and sorting.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, PACK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// Smallest capacity allocated when an empty deck first grows.
const MIN_CAPACITY: usize = 16;

/// An ordered sequence of cards.
///
/// Index 0 is the top for [`remove_at`](Self::remove_at) and
/// [`insert_at`](Self::insert_at); [`push`](Self::push) and [`pop`](Self::pop)
/// work on the end of the sequence, so the most recently pushed card is
/// [`top`](Self::top).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDeck {
    cards: Vec<Card>,
}

impl CardDeck {
    /// Creates an empty deck without allocating.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates an empty deck with room for at least `capacity` cards.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::AllocationFailure`] if the storage cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, DeckError> {
        let mut cards = Vec::new();
        cards
            .try_reserve_exact(capacity)
            .map_err(|_| DeckError::AllocationFailure)?;
        Ok(Self { cards })
    }

    /// Creates a deck holding `cards` in the given order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards the deck can hold without growing.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cards.capacity()
    }

    /// Returns the cards in the deck.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the most recently pushed card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns how many copies of `card` the deck holds.
    #[must_use]
    pub fn count_of(&self, card: Card) -> usize {
        self.cards.iter().filter(|&&c| c == card).count()
    }

    /// Removes every card, keeping the allocation.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Ensures the deck can hold at least `needed` cards.
    ///
    /// Capacity doubles from a baseline of 16 until it covers `needed`.
    /// Existing cards keep their order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::AllocationFailure`] if the new capacity overflows or
    /// cannot be allocated.
    pub fn reserve(&mut self, needed: usize) -> Result<(), DeckError> {
        let capacity = self.cards.capacity();
        if capacity >= needed {
            return Ok(());
        }

        let mut target = if capacity == 0 { MIN_CAPACITY } else { capacity };
        while target < needed {
            target = target
                .checked_mul(2)
                .ok_or(DeckError::AllocationFailure)?;
        }

        self.cards
            .try_reserve_exact(target - self.cards.len())
            .map_err(|_| DeckError::AllocationFailure)
    }

    fn grow_for_one(&mut self) -> Result<(), DeckError> {
        if self.cards.len() == self.cards.capacity() {
            let needed = self
                .cards
                .len()
                .checked_add(1)
                .ok_or(DeckError::AllocationFailure)?;
            self.reserve(needed)?;
        }
        Ok(())
    }

    /// Pushes a card onto the end of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::AllocationFailure`] if the deck cannot grow.
    pub fn push(&mut self, card: Card) -> Result<(), DeckError> {
        self.grow_for_one()?;
        self.cards.push(card);
        Ok(())
    }

    /// Removes and returns the last card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if there are no cards.
    pub fn pop(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::EmptyDeck)
    }

    /// Removes the card at `index`, shifting later cards down by one.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidIndex`] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<Card, DeckError> {
        if index >= self.cards.len() {
            return Err(DeckError::InvalidIndex {
                index,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(index))
    }

    /// Inserts `card` at `index`, shifting the cards at and after it up by one.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidIndex`] if `index > len`, or
    /// [`DeckError::AllocationFailure`] if the deck cannot grow.
    pub fn insert_at(&mut self, index: usize, card: Card) -> Result<(), DeckError> {
        if index > self.cards.len() {
            return Err(DeckError::InvalidIndex {
                index,
                len: self.cards.len(),
            });
        }
        self.grow_for_one()?;
        self.cards.insert(index, card);
        Ok(())
    }

    /// Moves every card of `other` onto the end of this deck, leaving `other` empty.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::AllocationFailure`] if the deck cannot grow.
    pub fn append(&mut self, other: &mut Self) -> Result<(), DeckError> {
        let needed = self
            .cards
            .len()
            .checked_add(other.len())
            .ok_or(DeckError::AllocationFailure)?;
        self.reserve(needed)?;
        self.cards.append(&mut other.cards);
        Ok(())
    }

    /// Replaces the contents with `packs` ordered packs.
    ///
    /// Each pack runs clubs, spades, hearts, diamonds, and within a suit from
    /// two up to ace.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidPackCount`] if `packs` is zero, or
    /// [`DeckError::AllocationFailure`] if the cards cannot be stored.
    ///
    /// # Example
    ///
    /// ```
    /// use suitmatch::CardDeck;
    ///
    /// let mut deck = CardDeck::new();
    /// deck.init_standard_packs(2).unwrap();
    /// assert_eq!(deck.len(), 104);
    /// ```
    pub fn init_standard_packs(&mut self, packs: usize) -> Result<(), DeckError> {
        if packs < 1 {
            return Err(DeckError::InvalidPackCount);
        }

        self.cards.clear();
        let total = packs
            .checked_mul(PACK_SIZE)
            .ok_or(DeckError::AllocationFailure)?;
        self.reserve(total)?;

        for _ in 0..packs {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    self.push(Card::new(suit, rank))?;
                }
            }
        }

        Ok(())
    }

    /// Moves every card into `dest` in uniformly random order.
    ///
    /// Cards are drawn one at a time from a shrinking pool and inserted at the
    /// front of `dest`. Previous contents of `dest` are discarded and this deck
    /// is left empty.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::AllocationFailure`] if `dest` cannot hold the cards;
    /// this deck is left untouched in that case.
    pub fn shuffle_into<R: Rng + ?Sized>(
        &mut self,
        dest: &mut Self,
        rng: &mut R,
    ) -> Result<(), DeckError> {
        dest.cards.clear();
        dest.reserve(self.cards.len())?;

        let mut pool = core::mem::take(&mut self.cards);
        while !pool.is_empty() {
            let pick = rng.random_range(0..pool.len());
            let card = pool.remove(pick);
            dest.insert_at(0, card)?;
        }

        Ok(())
    }

    /// Shuffles the deck through a temporary buffer.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::AllocationFailure`] if the buffer cannot be allocated.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), DeckError> {
        let mut shuffled = Self::with_capacity(self.cards.len())?;
        self.shuffle_into(&mut shuffled, rng)?;
        *self = shuffled;
        Ok(())
    }

    /// Sorts by rank, then suit, with a stable insertion sort.
    pub fn sort(&mut self) {
        for i in 1..self.cards.len() {
            let key = self.cards[i];
            let mut j = i;
            while j > 0 && self.cards[j - 1] > key {
                self.cards[j] = self.cards[j - 1];
                j -= 1;
            }
            self.cards[j] = key;
        }
    }
}

impl FromIterator<Card> for CardDeck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
