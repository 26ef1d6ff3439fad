//! Error types for game operations.

use thiserror::Error;

/// Reasons a bet is rejected.
///
/// The messages are shown to the player as-is before asking again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Input was not an integer.
    #[error("Please enter a valid number!")]
    NotANumber,
    /// Bet is below the table minimum.
    #[error("Minimum bet is ${min}!")]
    BelowMinimum {
        /// The table minimum.
        min: usize,
    },
    /// Bet exceeds the player's balance.
    #[error("You don't have enough money! You only have ${balance}")]
    InsufficientFunds {
        /// The player's current balance.
        balance: usize,
    },
    /// Bet exceeds the table maximum.
    #[error("Maximum bet is ${max}!")]
    AboveMaximum {
        /// The table maximum.
        max: usize,
    },
}

/// Errors that can occur when playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The game already reached a terminal state.
    #[error("the game is already finished")]
    GameFinished,
    /// The bet amount is outside the allowed range.
    #[error("invalid bet: {0}")]
    InvalidBet(#[from] BetError),
}

/// Errors from the console front end.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading from or writing to the console failed.
    #[error("console I/O failed")]
    Io(#[from] std::io::Error),
    /// Input ended while a bet was still required.
    #[error("input closed while waiting for a bet")]
    InputClosed,
    /// The engine refused the round.
    #[error(transparent)]
    Round(#[from] RoundError),
}
