use crate::bet::check_amount;
use crate::error::RoundError;
use crate::result::{RoundOutcome, RoundResult};

use super::Game;

impl Game {
    /// Plays one round: deals a card to the player, then one to the dealer,
    /// and settles `bet` against the balance.
    ///
    /// The higher value wins the bet; equal values leave the balance alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already finished or `bet` is outside
    /// the allowed range for the current balance.
    pub fn play_round(&mut self, bet: usize) -> Result<RoundResult, RoundError> {
        if self.state.is_terminal() {
            return Err(RoundError::GameFinished);
        }
        check_amount(bet, self.balance, &self.options)?;

        let player = self.deck.draw();
        let dealer = self.deck.draw();
        let outcome = RoundOutcome::compare(&player.card, &dealer.card);

        match outcome {
            RoundOutcome::Win => self.balance += bet,
            RoundOutcome::Lose => self.balance -= bet,
            RoundOutcome::Tie => {}
        }
        self.rounds_played += 1;

        log::debug!(
            "round {}: player {} vs dealer {}, {outcome:?} on {bet}, balance {}",
            self.rounds_played,
            player.card,
            dealer.card,
            self.balance
        );

        Ok(RoundResult {
            player_card: player.card,
            dealer_card: dealer.card,
            bet,
            outcome,
            balance: self.balance,
            reshuffled: player.reshuffled || dealer.reshuffled,
        })
    }
}
