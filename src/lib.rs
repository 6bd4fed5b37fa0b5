//! A Truco card ranking engine with optional `no_std` support.
//!
//! The crate ranks [`Card`]s relative to a vira: it finds the manilhas of the
//! deal, computes each card's [`relative_value`](Card::relative_value) and
//! [`compares`](Card::compare_value_to) cards by strength. Around that core it
//! provides a seeded [`Deck`], the [`GameIntel`] snapshot a bot decides from,
//! and the [`Bot`] decision contract.
//!
//! # Example
//!
//! ```
//! use trucors::{Card, Rank, Suit};
//!
//! let vira = Card::of(Rank::Four, Suit::Clubs).unwrap();
//! let zap = Card::of(Rank::Five, Suit::Clubs).unwrap();
//! let three = Card::of(Rank::Three, Suit::Diamonds).unwrap();
//!
//! assert_eq!(zap.relative_value(&vira), Ok(13));
//! assert_eq!(three.relative_value(&vira), Ok(9));
//! assert!(zap.compare_value_to(&three, &vira).unwrap() > 0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bot;
pub mod cache;
pub mod card;
pub mod deck;
pub mod error;
pub mod intel;
pub mod ranking;
mod sync;

// Re-export main types
pub use bot::{Bot, CardToPlay, PassiveBot, RaiseResponse};
pub use cache::CardCache;
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{CardError, DeckError, IntelError, ParseCardError, RankingError, SymbolError};
pub use intel::{GameIntel, GameIntelBuilder, RoundResult};
pub use ranking::{Manilha, compare, relative_value, strongest};
