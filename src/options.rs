//! Game configuration options.

/// Money the player starts with.
pub const STARTING_MONEY: usize = 100;
/// Balance at which the player wins the game.
pub const WIN_THRESHOLD: usize = 500;
/// Smallest bet accepted in a round.
pub const MIN_BET: usize = 1;
/// Largest bet accepted in a round.
pub const MAX_BET: usize = 100;

/// Configuration options for a high-card game.
///
/// The defaults are the house rules; the builder methods exist so that
/// tests and embedders can play with other limits:
///
/// ```
/// use highcard::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_money(50)
///     .with_max_bet(25);
/// assert!(options.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Money the player starts with.
    pub starting_money: usize,
    /// Balance at which the player wins.
    pub win_threshold: usize,
    /// Minimum bet per round.
    pub min_bet: usize,
    /// Maximum bet per round.
    pub max_bet: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_money: STARTING_MONEY,
            win_threshold: WIN_THRESHOLD,
            min_bet: MIN_BET,
            max_bet: MAX_BET,
        }
    }
}

impl GameOptions {
    /// Sets the starting money.
    #[must_use]
    pub const fn with_starting_money(mut self, starting_money: usize) -> Self {
        self.starting_money = starting_money;
        self
    }

    /// Sets the winning balance.
    #[must_use]
    pub const fn with_win_threshold(mut self, win_threshold: usize) -> Self {
        self.win_threshold = win_threshold;
        self
    }

    /// Sets the minimum bet.
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the maximum bet.
    #[must_use]
    pub const fn with_max_bet(mut self, max_bet: usize) -> Self {
        self.max_bet = max_bet;
        self
    }

    /// Returns whether the limits describe a playable game.
    ///
    /// The minimum bet must be positive and not above the maximum, and the
    /// starting money must cover the minimum bet while staying below the
    /// win threshold.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.min_bet > 0
            && self.min_bet <= self.max_bet
            && self.starting_money >= self.min_bet
            && self.starting_money < self.win_threshold
    }
}
