//! Round result types.

use core::cmp::Ordering;

use crate::card::Card;

/// Result of a single round from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player's card is higher; the bet is won.
    Win,
    /// Dealer's card is higher; the bet is lost.
    Lose,
    /// Equal values; no money changes hands.
    Tie,
}

impl RoundOutcome {
    /// Compares the player's card against the dealer's by value.
    ///
    /// Suits never break ties.
    #[must_use]
    pub fn compare(player: &Card, dealer: &Card) -> Self {
        match player.value().cmp(&dealer.value()) {
            Ordering::Greater => Self::Win,
            Ordering::Less => Self::Lose,
            Ordering::Equal => Self::Tie,
        }
    }
}

/// Everything that happened in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The player's card.
    pub player_card: Card,
    /// The dealer's card.
    pub dealer_card: Card,
    /// The amount staked.
    pub bet: usize,
    /// Who won.
    pub outcome: RoundOutcome,
    /// The player's balance after settlement.
    pub balance: usize,
    /// Whether the deck ran out and was reshuffled while dealing.
    pub reshuffled: bool,
}

impl RoundResult {
    /// Net change to the player's balance (positive = profit).
    #[must_use]
    pub const fn net(&self) -> isize {
        match self.outcome {
            RoundOutcome::Win => self.bet as isize,
            RoundOutcome::Lose => -(self.bet as isize),
            RoundOutcome::Tie => 0,
        }
    }
}
