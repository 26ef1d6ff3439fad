//! Text front end that plays a [`Game`] over any reader and writer.

use std::io::{BufRead, Write};

use crate::bet::{max_allowed_bet, validate_bet};
use crate::error::ConsoleError;
use crate::game::{Game, GameState};
use crate::result::{RoundOutcome, RoundResult};

const BANNER_RULE: &str = "========================================";

/// Drives a [`Game`] through prompts and messages.
///
/// Generic over the input and output streams so the same loop runs on
/// stdin/stdout in the binary and on in-memory buffers in tests.
pub struct Console<R, W> {
    game: Game,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console around a game and a pair of streams.
    pub fn new(game: Game, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
        }
    }

    /// Returns the game being played.
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the console and returns the game and output stream.
    pub fn into_parts(self) -> (Game, W) {
        (self.game, self.output)
    }

    /// Prints the welcome banner and the rules.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn welcome(&mut self) -> Result<(), ConsoleError> {
        let options = *self.game.options();
        let out = &mut self.output;
        writeln!(out, "{BANNER_RULE}")?;
        writeln!(out, "    WELCOME TO THE HIGH-CARD TABLE!")?;
        writeln!(out, "{BANNER_RULE}")?;
        writeln!(out, "Rules:")?;
        writeln!(out, "- You start with ${}", options.starting_money)?;
        writeln!(out, "- You and the dealer each get a card")?;
        writeln!(out, "- Higher card wins (Ace is high)")?;
        writeln!(out, "- Reach ${} to win the game!", options.win_threshold)?;
        writeln!(out, "- Lose all your money and it's game over!")?;
        writeln!(out, "{BANNER_RULE}")?;
        writeln!(out)?;
        Ok(())
    }

    /// Asks for a bet until a valid one is entered.
    ///
    /// Each rejected line is discarded and the reason is printed before the
    /// prompt is repeated. There is no retry limit.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InputClosed`] if input ends before a valid bet
    /// is entered, or an I/O error.
    pub fn get_bet(&mut self) -> Result<usize, ConsoleError> {
        let options = *self.game.options();
        let balance = self.game.balance();
        let max = max_allowed_bet(balance, &options);

        let mut line = String::new();
        loop {
            write!(
                self.output,
                "How much would you like to bet? ({}-{max}): $",
                options.min_bet
            )?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ConsoleError::InputClosed);
            }

            match validate_bet(&line, balance, &options) {
                Ok(bet) => return Ok(bet),
                Err(err) => {
                    log::debug!("rejected bet {:?}: {err:?}", line.trim());
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    /// Plays one round: shows the balance, takes a bet, deals, and reports
    /// the outcome and the new balance.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the bet or writing output fails, or if
    /// the game has already finished.
    pub fn play_round(&mut self) -> Result<RoundResult, ConsoleError> {
        writeln!(self.output, "Your money: ${}", self.game.balance())?;
        let bet = self.get_bet()?;

        writeln!(self.output)?;
        writeln!(self.output, "--- DEALING CARDS ---")?;

        let result = self.game.play_round(bet)?;
        if result.reshuffled {
            writeln!(self.output, "Deck reshuffled!")?;
        }

        let out = &mut self.output;
        writeln!(
            out,
            "Your card: {} (Value: {})",
            result.player_card,
            result.player_card.value()
        )?;
        writeln!(
            out,
            "Dealer's card: {} (Value: {})",
            result.dealer_card,
            result.dealer_card.value()
        )?;
        writeln!(out)?;

        match result.outcome {
            RoundOutcome::Win => {
                writeln!(out, "YOU WIN!")?;
                writeln!(out, "You won ${}!", result.bet)?;
            }
            RoundOutcome::Lose => {
                writeln!(out, "You lose!")?;
                writeln!(out, "You lost ${}!", result.bet)?;
            }
            RoundOutcome::Tie => writeln!(out, "It's a tie! No money changes hands.")?,
        }

        writeln!(out, "Your money: ${}", result.balance)?;
        writeln!(out)?;
        Ok(result)
    }

    /// Checks whether the game is over and prints the closing message if it
    /// is.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn check_game_end(&mut self) -> Result<bool, ConsoleError> {
        let Some(end) = self.game.check_game_end() else {
            return Ok(false);
        };

        let balance = self.game.balance();
        let out = &mut self.output;
        match end {
            GameState::Lost => {
                writeln!(out, "GAME OVER!")?;
                if balance == 0 {
                    writeln!(out, "You've lost all your money!")?;
                } else {
                    writeln!(
                        out,
                        "You can't cover the minimum bet of ${}!",
                        self.game.options().min_bet
                    )?;
                }
                writeln!(out, "Thanks for playing!")?;
            }
            GameState::Won => {
                writeln!(out, "CONGRATULATIONS! YOU WIN!")?;
                writeln!(
                    out,
                    "You've reached ${}!",
                    self.game.options().win_threshold
                )?;
            }
            GameState::QuitByChoice => {
                writeln!(out, "Thanks for playing! You're leaving with ${balance}")?;
            }
            GameState::Playing => return Ok(false),
        }
        Ok(true)
    }

    /// Asks whether to play another round.
    ///
    /// Blank lines are skipped; the first non-blank character decides, and
    /// only `y` or `Y` means yes. End of input counts as no.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn ask_play_again(&mut self) -> Result<bool, ConsoleError> {
        write!(self.output, "Would you like to play another round? (y/n): ")?;
        self.output.flush()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            if let Some(choice) = line.trim_start().chars().next() {
                return Ok(choice.eq_ignore_ascii_case(&'y'));
            }
        }
    }

    /// Runs the whole game: welcome, then rounds until the player wins,
    /// loses, or declines to continue.
    ///
    /// Returns the terminal state the game ended in.
    ///
    /// # Errors
    ///
    /// Returns an error if console I/O fails or input ends mid-bet.
    pub fn run(&mut self) -> Result<GameState, ConsoleError> {
        self.welcome()?;

        // Limits that leave no opening bet end the game before any prompt.
        if self.check_game_end()? {
            return Ok(self.game.state());
        }

        loop {
            self.play_round()?;

            if self.check_game_end()? {
                break;
            }

            if !self.ask_play_again()? {
                self.game.quit();
                self.check_game_end()?;
                break;
            }

            writeln!(self.output)?;
            writeln!(self.output, "{}", "-".repeat(50))?;
            writeln!(self.output)?;
        }

        self.output.flush()?;
        Ok(self.game.state())
    }
}
