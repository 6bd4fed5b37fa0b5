//! Decision contract for Truco bots.

use crate::card::Card;
use crate::intel::GameIntel;

/// A card a bot chooses to put on the table, face up or as a discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardToPlay {
    content: Card,
    discard: bool,
}

impl CardToPlay {
    /// Plays `card` face up.
    #[must_use]
    pub const fn of(card: Card) -> Self {
        Self {
            content: card,
            discard: false,
        }
    }

    /// Plays `card` face down as a discard.
    #[must_use]
    pub const fn discard(card: Card) -> Self {
        Self {
            content: card,
            discard: true,
        }
    }

    /// Returns the card as the table sees it: the closed card for a discard.
    ///
    /// ```
    /// use trucors::{Card, CardToPlay, Rank, Suit};
    ///
    /// let card = Card::of(Rank::King, Suit::Hearts).unwrap();
    /// assert_eq!(CardToPlay::of(card).value(), card);
    /// assert_eq!(CardToPlay::discard(card).value(), Card::closed());
    /// ```
    #[must_use]
    pub const fn value(&self) -> Card {
        if self.discard {
            Card::closed()
        } else {
            self.content
        }
    }

    /// Returns the card that was chosen, whether or not it is discarded.
    #[must_use]
    pub const fn content(&self) -> Card {
        self.content
    }

    /// Returns whether the card is discarded.
    #[must_use]
    pub const fn is_discard(&self) -> bool {
        self.discard
    }
}

/// Answer to an opponent's raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RaiseResponse {
    /// Run from the hand and concede the current points.
    Quit,
    /// Accept the raise.
    Accept,
    /// Accept and raise again.
    Raise,
}

impl RaiseResponse {
    /// Returns the wire code: -1 to quit, 0 to accept, 1 to raise again.
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Self::Quit => -1,
            Self::Accept => 0,
            Self::Raise => 1,
        }
    }

    /// Reads a wire code. Any negative code quits and any positive one raises.
    #[must_use]
    pub const fn from_code(code: i8) -> Self {
        match code {
            i8::MIN..=-1 => Self::Quit,
            0 => Self::Accept,
            1.. => Self::Raise,
        }
    }
}

/// The decisions a Truco bot must make.
pub trait Bot {
    /// Decides whether to play a hand of eleven (mão de onze).
    fn mao_de_onze_response(&self, intel: &GameIntel) -> bool;

    /// Decides whether to ask for a raise.
    fn decide_if_raises(&self, intel: &GameIntel) -> bool;

    /// Picks the card to play, or `None` if the hand is empty.
    fn choose_card(&self, intel: &GameIntel) -> Option<CardToPlay>;

    /// Answers a raise from the opponent.
    fn raise_response(&self, intel: &GameIntel) -> RaiseResponse;

    /// Returns the bot's display name. Defaults to the type name.
    fn name(&self) -> &str {
        let path = core::any::type_name::<Self>();
        path.rsplit("::").next().unwrap_or(path)
    }
}

/// A bot that never takes initiative.
///
/// It declines the hand of eleven, never raises, plays its first card face up
/// and accepts every raise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassiveBot;

impl Bot for PassiveBot {
    fn mao_de_onze_response(&self, _intel: &GameIntel) -> bool {
        false
    }

    fn decide_if_raises(&self, _intel: &GameIntel) -> bool {
        false
    }

    fn choose_card(&self, intel: &GameIntel) -> Option<CardToPlay> {
        intel.cards().first().copied().map(CardToPlay::of)
    }

    fn raise_response(&self, _intel: &GameIntel) -> RaiseResponse {
        RaiseResponse::Accept
    }
}
