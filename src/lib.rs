//! A high-card casino game with optional `no_std` support.
//!
//! The player and the dealer each draw one card from a shuffled deck and the
//! higher value (Ace high) takes the bet. The [`Game`] type owns the deck and
//! the player's balance; the `std`-only [`Console`] runs it as a text game.
//!
//! # Example
//!
//! ```
//! use highcard::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let result = game.play_round(10).unwrap();
//! assert_eq!(game.balance() as isize, 100 + result.net());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bet;
pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod result;

// Re-export main types
pub use bet::{check_amount, max_allowed_bet, validate_bet};
pub use card::{Card, DECK_SIZE, Rank, Suit};
#[cfg(feature = "std")]
pub use console::Console;
pub use deck::{Deck, Draw};
#[cfg(feature = "std")]
pub use error::ConsoleError;
pub use error::{BetError, RoundError};
pub use game::{Game, GameState};
pub use options::{GameOptions, MAX_BET, MIN_BET, STARTING_MONEY, WIN_THRESHOLD};
pub use result::{RoundOutcome, RoundResult};
