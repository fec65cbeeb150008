//! Deck integration tests.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use suitmatch::{Card, CardDeck, DeckError, PACK_SIZE, Rank, Suit};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn standard(packs: usize) -> CardDeck {
    let mut deck = CardDeck::new();
    deck.init_standard_packs(packs).unwrap();
    deck
}

fn is_sorted(deck: &CardDeck) -> bool {
    deck.cards().windows(2).all(|pair| {
        pair[0].rank < pair[1].rank || (pair[0].rank == pair[1].rank && pair[0].suit <= pair[1].suit)
    })
}

fn sorted_copy(deck: &CardDeck) -> Vec<Card> {
    let mut cards = deck.cards().to_vec();
    cards.sort();
    cards
}

#[test]
fn card_tokens_and_order() {
    assert_eq!(card(Suit::Spade, Rank::Five).to_string(), "5\u{2660}");
    assert_eq!(card(Suit::Heart, Rank::Ten).to_string(), "10\u{2665}");
    assert_eq!(card(Suit::Club, Rank::Ace).to_string(), "A\u{2663}");
    assert_eq!(card(Suit::Diamond, Rank::Queen).to_string(), "Q\u{2666}");

    assert!(card(Suit::Heart, Rank::Six) > card(Suit::Heart, Rank::Five));
    assert!(card(Suit::Spade, Rank::Five) < card(Suit::Heart, Rank::Five));
    assert_ne!(card(Suit::Spade, Rank::Five), card(Suit::Heart, Rank::Five));

    assert_eq!(Rank::Two.value(), 2);
    assert_eq!(Rank::Ace.value(), 14);
    assert_eq!(Rank::try_from(11), Ok(Rank::Jack));
    assert_eq!(Rank::try_from(1), Err(1));
    assert_eq!(Rank::try_from(15), Err(15));
}

#[test]
fn card_matching_by_suit_or_rank() {
    let top = card(Suit::Diamond, Rank::Six);
    assert!(card(Suit::Heart, Rank::Six).matches(&top));
    assert!(card(Suit::Diamond, Rank::King).matches(&top));
    assert!(!card(Suit::Spade, Rank::Five).matches(&top));
}

#[test]
fn standard_packs_in_canonical_order() {
    let deck = standard(1);
    assert_eq!(deck.len(), PACK_SIZE);
    assert_eq!(deck.cards()[0], card(Suit::Club, Rank::Two));
    assert_eq!(deck.cards()[12], card(Suit::Club, Rank::Ace));
    assert_eq!(deck.cards()[13], card(Suit::Spade, Rank::Two));
    assert_eq!(deck.top(), Some(&card(Suit::Diamond, Rank::Ace)));
}

#[test]
fn standard_packs_hold_each_card_once_per_pack() {
    for packs in 1..=3 {
        let deck = standard(packs);
        assert_eq!(deck.len(), PACK_SIZE * packs);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                assert_eq!(deck.count_of(card(suit, rank)), packs);
            }
        }
    }
}

#[test]
fn standard_packs_reset_existing_contents() {
    let mut deck = CardDeck::new();
    deck.push(card(Suit::Heart, Rank::Nine)).unwrap();
    deck.init_standard_packs(1).unwrap();
    assert_eq!(deck.len(), PACK_SIZE);
    assert_eq!(deck.count_of(card(Suit::Heart, Rank::Nine)), 1);
}

#[test]
fn zero_packs_rejected() {
    let mut deck = CardDeck::new();
    assert_eq!(
        deck.init_standard_packs(0).unwrap_err(),
        DeckError::InvalidPackCount
    );
}

#[test]
fn capacity_grows_geometrically() {
    let mut deck = CardDeck::with_capacity(0).unwrap();
    assert_eq!(deck.capacity(), 0);

    deck.push(card(Suit::Club, Rank::Two)).unwrap();
    assert!(deck.capacity() >= 16);

    deck.reserve(40).unwrap();
    assert!(deck.capacity() >= 40);
    assert_eq!(deck.cards(), &[card(Suit::Club, Rank::Two)]);

    let before = deck.capacity();
    deck.reserve(10).unwrap();
    assert_eq!(deck.capacity(), before);

    let sized = CardDeck::with_capacity(20).unwrap();
    assert!(sized.capacity() >= 20);
    assert!(sized.is_empty());
}

#[test]
fn overflowing_capacity_reports_allocation_failure() {
    let mut deck = CardDeck::from_cards(vec![card(Suit::Club, Rank::Two)]);
    assert_eq!(
        deck.reserve(usize::MAX).unwrap_err(),
        DeckError::AllocationFailure
    );
    assert_eq!(deck.cards(), &[card(Suit::Club, Rank::Two)]);

    let mut packs = CardDeck::new();
    assert_eq!(
        packs.init_standard_packs(usize::MAX).unwrap_err(),
        DeckError::AllocationFailure
    );
    assert_eq!(
        packs.init_standard_packs(usize::MAX / PACK_SIZE).unwrap_err(),
        DeckError::AllocationFailure
    );
    assert!(packs.is_empty());
}

#[test]
fn collect_and_clear() {
    let deck: CardDeck = Rank::ALL
        .iter()
        .map(|&rank| card(Suit::Heart, rank))
        .collect();
    assert_eq!(deck.len(), 13);
    assert_eq!(deck.cards()[0], card(Suit::Heart, Rank::Two));
    assert_eq!(deck.top(), Some(&card(Suit::Heart, Rank::Ace)));

    let mut cleared = deck.clone();
    let capacity = cleared.capacity();
    cleared.clear();
    assert!(cleared.is_empty());
    assert_eq!(cleared.top(), None);
    assert_eq!(cleared.capacity(), capacity);
}

#[test]
fn push_and_pop_work_on_the_end() {
    let mut deck = standard(1);
    let extra = card(Suit::Spade, Rank::Ace);
    deck.push(extra).unwrap();
    assert_eq!(deck.len(), 53);
    assert_eq!(deck.pop().unwrap(), extra);
    assert_eq!(deck.len(), 52);

    let mut empty = CardDeck::new();
    assert_eq!(empty.pop().unwrap_err(), DeckError::EmptyDeck);
}

#[test]
fn remove_and_insert_at_index() {
    let mut deck = standard(1);
    let original = deck.clone();

    let removed = deck.remove_at(0).unwrap();
    assert_eq!(removed, card(Suit::Club, Rank::Two));
    assert_eq!(deck.len(), 51);
    assert_eq!(deck.cards()[0], card(Suit::Club, Rank::Three));
    deck.insert_at(0, removed).unwrap();
    assert_eq!(deck, original);

    let removed = deck.remove_at(30).unwrap();
    deck.insert_at(30, removed).unwrap();
    assert_eq!(deck, original);

    let len = deck.len();
    deck.insert_at(len, card(Suit::Heart, Rank::Four)).unwrap();
    assert_eq!(deck.top(), Some(&card(Suit::Heart, Rank::Four)));
}

#[test]
fn out_of_range_indices_rejected() {
    let mut deck = CardDeck::from_cards(vec![card(Suit::Club, Rank::Two)]);
    assert_eq!(
        deck.remove_at(1).unwrap_err(),
        DeckError::InvalidIndex { index: 1, len: 1 }
    );
    assert_eq!(
        deck.insert_at(2, card(Suit::Club, Rank::Three)).unwrap_err(),
        DeckError::InvalidIndex { index: 2, len: 1 }
    );
    assert_eq!(deck.len(), 1);

    let mut empty = CardDeck::new();
    assert_eq!(
        empty.remove_at(0).unwrap_err(),
        DeckError::InvalidIndex { index: 0, len: 0 }
    );
}

#[test]
fn append_moves_every_card() {
    let mut base = CardDeck::from_cards(vec![card(Suit::Club, Rank::Two)]);
    let mut other = CardDeck::from_cards(vec![
        card(Suit::Heart, Rank::Three),
        card(Suit::Spade, Rank::Four),
    ]);
    base.append(&mut other).unwrap();
    assert!(other.is_empty());
    assert_eq!(
        base.cards(),
        &[
            card(Suit::Club, Rank::Two),
            card(Suit::Heart, Rank::Three),
            card(Suit::Spade, Rank::Four),
        ]
    );
}

#[test]
fn sort_orders_by_rank_then_suit() {
    let mut deck = standard(1);
    deck.sort();
    assert!(is_sorted(&deck));
    assert_eq!(
        &deck.cards()[..5],
        &[
            card(Suit::Club, Rank::Two),
            card(Suit::Spade, Rank::Two),
            card(Suit::Heart, Rank::Two),
            card(Suit::Diamond, Rank::Two),
            card(Suit::Club, Rank::Three),
        ]
    );

    let once = deck.clone();
    deck.sort();
    assert_eq!(deck, once);
}

#[test]
fn shuffle_into_consumes_source() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut source = standard(2);
    let expected = sorted_copy(&source);
    let mut dest = CardDeck::from_cards(vec![card(Suit::Heart, Rank::King)]);

    source.shuffle_into(&mut dest, &mut rng).unwrap();

    assert!(source.is_empty());
    assert_eq!(dest.len(), 2 * PACK_SIZE);
    assert_eq!(sorted_copy(&dest), expected);
}

#[test]
fn shuffle_disturbs_sorted_deck() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut deck = standard(1);
    deck.sort();
    let sorted = deck.clone();

    deck.shuffle(&mut rng).unwrap();

    assert_eq!(deck.len(), PACK_SIZE);
    assert_ne!(deck, sorted);
    assert_eq!(sorted_copy(&deck), sorted_copy(&sorted));
}

#[test]
fn shuffle_is_reproducible_with_same_seed() {
    let mut first = standard(1);
    let mut second = standard(1);
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(99)).unwrap();
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(99)).unwrap();
    assert_eq!(first, second);

    let mut third = standard(1);
    third.shuffle(&mut ChaCha8Rng::seed_from_u64(100)).unwrap();
    assert_ne!(first, third);
}

#[test]
fn shuffle_empty_deck_is_empty() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut deck = CardDeck::new();
    deck.shuffle(&mut rng).unwrap();
    assert!(deck.is_empty());

    let mut dest = CardDeck::from_cards(vec![card(Suit::Club, Rank::Two)]);
    CardDeck::new().shuffle_into(&mut dest, &mut rng).unwrap();
    assert!(dest.is_empty());
}

fn any_card() -> impl Strategy<Value = Card> {
    (0..4usize, 0..13usize).prop_map(|(suit, rank)| Card::new(Suit::ALL[suit], Rank::ALL[rank]))
}

proptest! {
    #[test]
    fn sort_is_idempotent_and_ordered(cards in prop::collection::vec(any_card(), 0..40)) {
        let mut deck = CardDeck::from_cards(cards.clone());
        deck.sort();
        prop_assert!(is_sorted(&deck));
        prop_assert_eq!(deck.len(), cards.len());

        let once = deck.clone();
        deck.sort();
        prop_assert_eq!(deck, once);
    }

    #[test]
    fn shuffle_preserves_cards(cards in prop::collection::vec(any_card(), 0..60), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = CardDeck::from_cards(cards.clone());
        deck.shuffle(&mut rng).unwrap();

        let mut expected = cards;
        expected.sort();
        prop_assert_eq!(sorted_copy(&deck), expected);
    }

    #[test]
    fn remove_then_insert_restores(cards in prop::collection::vec(any_card(), 1..40), pick in any::<prop::sample::Index>()) {
        let mut deck = CardDeck::from_cards(cards);
        let original = deck.clone();
        let index = pick.index(deck.len());

        let removed = deck.remove_at(index).unwrap();
        deck.insert_at(index, removed).unwrap();
        prop_assert_eq!(deck, original);
    }
}
