//! The 40-card Truco deck.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A shuffled deck of the forty playable cards.
///
/// Cards are drawn from the top. The same seed always yields the same order.
///
/// ```
/// use trucors::Deck;
///
/// let mut deck = Deck::new(7);
/// let vira = deck.draw().unwrap();
/// let hand = deck.deal(3).unwrap();
/// assert!(!vira.is_closed());
/// assert_eq!(hand.len(), 3);
/// assert_eq!(deck.remaining(), 36);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck shuffled with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = Self::ordered();
        cards.shuffle(&mut rng);
        Self { cards }
    }

    /// Returns every playable card, grouped by rank from four to three.
    #[must_use]
    pub fn ordered() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in Rank::PLAYABLE {
            for suit in Suit::PLAYABLE {
                if let Ok(card) = Card::of(rank, suit) {
                    cards.push(card);
                }
            }
        }
        cards
    }

    /// Draws the top card, or `None` once the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draws `count` cards from the top.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughCards`] if fewer than `count` cards are
    /// left. The deck is unchanged in that case.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        if count > self.cards.len() {
            return Err(DeckError::NotEnoughCards);
        }
        let split = self.cards.len() - count;
        let mut dealt = self.cards.split_off(split);
        dealt.reverse();
        Ok(dealt)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
