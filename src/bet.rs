//! Bet parsing and validation.
//!
//! These functions hold every betting rule and do no I/O, so the console
//! loop only has to re-prompt on error.

use crate::error::BetError;
use crate::options::GameOptions;

/// Parses and validates a raw bet entered by the player.
///
/// Rules are checked in order: the input must be an integer, at least the
/// minimum bet, no more than `balance`, and no more than the maximum bet.
///
/// # Errors
///
/// Returns the first rule the input breaks.
///
/// # Example
///
/// ```
/// use highcard::{BetError, GameOptions, validate_bet};
///
/// let options = GameOptions::default();
/// assert_eq!(validate_bet(" 25 ", 100, &options), Ok(25));
/// assert_eq!(validate_bet("abc", 100, &options), Err(BetError::NotANumber));
/// ```
pub fn validate_bet(raw: &str, balance: usize, options: &GameOptions) -> Result<usize, BetError> {
    // Bets are 32-bit; anything wider is rejected as not a number.
    let value: i32 = raw.trim().parse().map_err(|_| BetError::NotANumber)?;

    // Only negative values fail the conversion.
    let Ok(amount) = usize::try_from(value) else {
        return Err(BetError::BelowMinimum {
            min: options.min_bet,
        });
    };

    check_amount(amount, balance, options)
}

/// Checks a numeric bet against the balance and table limits.
///
/// # Errors
///
/// Returns an error if the amount is below the minimum, above the balance,
/// or above the maximum, checked in that order.
pub const fn check_amount(
    amount: usize,
    balance: usize,
    options: &GameOptions,
) -> Result<usize, BetError> {
    if amount < options.min_bet {
        return Err(BetError::BelowMinimum {
            min: options.min_bet,
        });
    }
    if amount > balance {
        return Err(BetError::InsufficientFunds { balance });
    }
    if amount > options.max_bet {
        return Err(BetError::AboveMaximum {
            max: options.max_bet,
        });
    }
    Ok(amount)
}

/// Returns the largest bet the player may place with `balance`.
#[must_use]
pub const fn max_allowed_bet(balance: usize, options: &GameOptions) -> usize {
    if balance < options.max_bet {
        balance
    } else {
        options.max_bet
    }
}
