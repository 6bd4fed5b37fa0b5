//! Error types for card and ranking operations.

use thiserror::Error;

use crate::card::{Rank, Suit};

/// Errors that can occur when building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Exactly one of rank and suit is hidden.
    #[error("rank {rank} and suit {suit} must both be hidden or both be visible")]
    HiddenMismatch {
        /// The requested rank.
        rank: Rank,
        /// The requested suit.
        suit: Suit,
    },
}

/// Errors that can occur when ranking cards against a vira.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankingError {
    /// The vira is the closed card.
    #[error("vira must not be a closed card")]
    ClosedVira,
}

/// Errors that can occur when looking up a rank or suit by code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// No rank uses this code.
    #[error("unknown rank symbol: {0}")]
    UnknownRank(char),
    /// No suit uses this code.
    #[error("unknown suit symbol: {0}")]
    UnknownSuit(char),
}

/// Errors that can occur when parsing a card token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The token is not exactly two characters long.
    #[error("card token must be two characters")]
    Length,
    /// The token contains an unknown rank or suit code.
    #[error(transparent)]
    Symbol(#[from] SymbolError),
    /// The token names an invalid card.
    #[error(transparent)]
    Card(#[from] CardError),
}

/// Errors that can occur when building a game snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntelError {
    /// The game information step was skipped.
    #[error("game info has not been provided")]
    MissingGameInfo,
    /// The bot information step was skipped.
    #[error("bot info has not been provided")]
    MissingBotInfo,
    /// The vira is the closed card.
    #[error("vira must not be a closed card")]
    ClosedVira,
}

/// Errors that can occur when dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Not enough cards left in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}
