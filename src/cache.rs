//! Canonical card instances.

use alloc::sync::Arc;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, Rank, Suit};
use crate::error::CardError;
use crate::sync::Mutex;

/// Largest number of distinct cards the cache can hold: ten ranks by four
/// suits, plus the closed card.
pub const MAX_ENTRIES: usize = Rank::PLAYABLE.len() * Suit::PLAYABLE.len() + 1;

/// A table that hands out one shared instance per `(rank, suit)` pair.
///
/// Lookups and first insertions happen under the same lock, so concurrent
/// callers asking for the same pair always receive the same [`Arc`]. Entries
/// are never evicted.
///
/// Sharing instances is purely an allocation choice: [`Card`] compares
/// structurally, and nothing in the ranking code depends on identity.
///
/// ```
/// use std::sync::Arc;
/// use trucors::{CardCache, Rank, Suit};
///
/// let cache = CardCache::new();
/// let a = cache.get(Rank::Ace, Suit::Spades).unwrap();
/// let b = cache.get(Rank::Ace, Suit::Spades).unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
#[derive(Debug)]
pub struct CardCache {
    cards: Mutex<HashMap<(Rank, Suit), Arc<Card>>>,
}

impl CardCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Mutex::new(HashMap::with_capacity(MAX_ENTRIES)),
        }
    }

    /// Returns the shared instance for `rank` and `suit`, creating it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::HiddenMismatch`] if exactly one of `rank` and
    /// `suit` is hidden. Nothing is inserted in that case.
    pub fn get(&self, rank: Rank, suit: Suit) -> Result<Arc<Card>, CardError> {
        let card = Card::of(rank, suit)?;
        let mut cards = self.cards.lock();
        let shared = cards.entry((rank, suit)).or_insert_with(|| Arc::new(card));
        Ok(Arc::clone(shared))
    }

    /// Returns the shared closed card.
    #[must_use]
    pub fn closed(&self) -> Arc<Card> {
        let mut cards = self.cards.lock();
        let shared = cards
            .entry((Rank::Hidden, Suit::Hidden))
            .or_insert_with(|| Arc::new(Card::closed()));
        Arc::clone(shared)
    }

    /// Returns the number of distinct cards created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.lock().len()
    }

    /// Returns whether no card has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.lock().is_empty()
    }
}

impl Default for CardCache {
    fn default() -> Self {
        Self::new()
    }
}
