//! A single 52-card deck that refills itself when exhausted.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A card taken from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    /// The drawn card.
    pub card: Card,
    /// Whether the deck was empty and had to be refilled and reshuffled
    /// before this card could be drawn.
    pub reshuffled: bool,
}

/// An ordered deck of cards. Cards are drawn from the end of the sequence.
///
/// The deck owns its random number generator, so two decks built from the
/// same seed deal the same cards in the same order.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full, shuffled deck seeded with `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::Deck;
    ///
    /// let deck = Deck::new(7);
    /// assert_eq!(deck.len(), highcard::DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a full deck shuffled by the given generator.
    #[must_use]
    pub fn with_rng(rng: ChaCha8Rng) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng,
        };
        deck.reset();
        deck.shuffle();
        deck
    }

    /// Creates a deck whose next draws are exactly `draws`, in order.
    ///
    /// Once those cards run out the deck refills and reshuffles as usual,
    /// using a generator seeded with `seed`. Useful for replaying a known
    /// sequence of rounds. `draws` must hold at most [`DECK_SIZE`] distinct
    /// cards.
    #[must_use]
    pub fn stacked(draws: &[Card], seed: u64) -> Self {
        debug_assert!(
            draws.len() <= DECK_SIZE,
            "stacked deck holds more than {DECK_SIZE} cards"
        );
        debug_assert!(
            draws
                .iter()
                .enumerate()
                .all(|(i, card)| !draws[i + 1..].contains(card)),
            "stacked deck repeats a card"
        );
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Replaces the contents with the 52 cards of a standard deck, unshuffled.
    pub fn reset(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(suit, rank));
            }
        }
    }

    /// Randomly reorders the remaining cards.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Draws the top card, refilling and reshuffling first if the deck is empty.
    pub fn draw(&mut self) -> Draw {
        let mut reshuffled = false;
        loop {
            if let Some(card) = self.cards.pop() {
                log::trace!("drew {card}, {} cards left", self.cards.len());
                return Draw { card, reshuffled };
            }

            self.reset();
            self.shuffle();
            reshuffled = true;
            log::debug!("deck exhausted, refilled and reshuffled");
        }
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` when no cards are left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards; the last element is drawn next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
