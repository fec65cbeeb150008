//! A two-player suit-or-rank matching card game engine with optional `no_std` support.
//!
//! The crate provides a [`CardDeck`] container with index-addressed editing,
//! shuffling, and sorting, and a [`Game`] type that deals two hands from one or
//! more packs and plays them out turn by turn.
//!
//! Every random operation takes an explicit [`rand::Rng`], so a seeded
//! generator replays a game exactly. With the `std` feature,
//! [`rng::shared`] provides a process-wide source seeded once from the clock.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use suitmatch::{Game, GameOptions};
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut game = Game::new(GameOptions::default()).unwrap();
//! let report = game.play(&mut rng).unwrap();
//! for event in &report.events {
//!     println!("{event}");
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod result;
#[cfg(feature = "std")]
pub mod rng;

// Re-export main types
pub use card::{Card, PACK_SIZE, Rank, Suit};
pub use deck::CardDeck;
pub use error::{DeckError, GameError};
#[cfg(feature = "std")]
pub use game::play_game_shared;
pub use game::{Game, GameState, Player, play_game};
pub use options::{GameOptions, HAND_SIZE};
pub use result::{GameEvent, GameOutcome, GameReport};
