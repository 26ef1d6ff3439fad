//! Game engine and state management.

use crate::bet::max_allowed_bet;
use crate::deck::Deck;
use crate::options::GameOptions;

mod round;
pub mod state;

pub use state::GameState;

/// A high-card game between one player and the dealer.
///
/// The game owns the deck and the player's balance. Each round the player
/// stakes a bet, both sides draw one card, and the higher value takes the
/// bet. The game ends when the balance hits zero or reaches the win
/// threshold from [`GameOptions`], or when the player quits.
#[derive(Debug, Clone)]
pub struct Game {
    deck: Deck,
    options: GameOptions,
    balance: usize,
    state: GameState,
    rounds_played: u32,
}

impl Game {
    /// Creates a new game with a deck shuffled from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.balance(), 100);
    /// assert_eq!(game.state(), GameState::Playing);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_deck(options, Deck::new(seed))
    }

    /// Creates a new game that deals from the given deck.
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Deck) -> Self {
        Self {
            deck,
            options,
            balance: options.starting_money,
            state: GameState::Playing,
            rounds_played: 0,
        }
    }

    /// Returns the player's current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the number of rounds settled so far.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns the number of cards left before the deck reshuffles.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Checks the balance against the loss and win thresholds.
    ///
    /// The game is lost once the balance can no longer cover any legal bet,
    /// which under the house rules means it hit zero. Returns the terminal
    /// state if one was reached (and records it), or `None` while the game
    /// is still on. A game that already ended keeps reporting its terminal
    /// state.
    pub fn check_game_end(&mut self) -> Option<GameState> {
        if self.state.is_terminal() {
            return Some(self.state);
        }

        let end = if max_allowed_bet(self.balance, &self.options) < self.options.min_bet {
            GameState::Lost
        } else if self.balance >= self.options.win_threshold {
            GameState::Won
        } else {
            return None;
        };

        log::info!(
            "game ended {end:?} after {} rounds with balance {}",
            self.rounds_played,
            self.balance
        );
        self.state = end;
        Some(end)
    }

    /// Ends a game that is still being played at the player's request.
    ///
    /// Has no effect once the game has already reached a terminal state.
    pub fn quit(&mut self) {
        if self.state == GameState::Playing {
            log::info!("player quit with balance {}", self.balance);
            self.state = GameState::QuitByChoice;
        }
    }
}
