//! Rank, suit and card value types.

use core::fmt;
use core::str::FromStr;

use crate::error::{CardError, ParseCardError, SymbolError};

/// Card rank, in ascending natural strength.
///
/// The playable ranks form a cycle for the purpose of locating the manilha:
/// the rank after [`Rank::Three`] is [`Rank::Four`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[repr(u8)]
pub enum Rank {
    /// Rank of a closed card.
    Hidden = 0,
    /// Four.
    Four = 1,
    /// Five.
    Five = 2,
    /// Six.
    Six = 3,
    /// Seven.
    Seven = 4,
    /// Queen.
    Queen = 5,
    /// Jack.
    Jack = 6,
    /// King.
    King = 7,
    /// Ace.
    Ace = 8,
    /// Two.
    Two = 9,
    /// Three.
    Three = 10,
}

impl Rank {
    /// Every rank, including [`Rank::Hidden`], in ordinal order.
    pub const ALL: [Self; 11] = [
        Self::Hidden,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Queen,
        Self::Jack,
        Self::King,
        Self::Ace,
        Self::Two,
        Self::Three,
    ];

    /// The ten ranks that appear on a face-up card.
    pub const PLAYABLE: [Self; 10] = [
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Queen,
        Self::Jack,
        Self::King,
        Self::Ace,
        Self::Two,
        Self::Three,
    ];

    /// Returns the ordinal of the rank (0 for hidden, 1 for four up to 10 for three).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the single-character code of the rank.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hidden => 'X',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Queen => 'Q',
            Self::Jack => 'J',
            Self::King => 'K',
            Self::Ace => 'A',
            Self::Two => '2',
            Self::Three => '3',
        }
    }

    /// Returns the rank that becomes manilha when `self` is the vira rank.
    ///
    /// ```
    /// use trucors::Rank;
    ///
    /// assert_eq!(Rank::Seven.next(), Rank::Queen);
    /// assert_eq!(Rank::Three.next(), Rank::Four);
    /// assert_eq!(Rank::Hidden.next(), Rank::Hidden);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Hidden => Self::Hidden,
            Self::Four => Self::Five,
            Self::Five => Self::Six,
            Self::Six => Self::Seven,
            Self::Seven => Self::Queen,
            Self::Queen => Self::Jack,
            Self::Jack => Self::King,
            Self::King => Self::Ace,
            Self::Ace => Self::Two,
            Self::Two => Self::Three,
            Self::Three => Self::Four,
        }
    }

    /// Looks up a rank by its code.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::UnknownRank`] if no rank uses `symbol`.
    pub fn from_symbol(symbol: char) -> Result<Self, SymbolError> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.symbol() == symbol)
            .ok_or(SymbolError::UnknownRank(symbol))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card suit.
///
/// The declaration order is the manilha tie-break order, weakest first. It
/// carries no weight between cards that are not manilhas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[repr(u8)]
pub enum Suit {
    /// Suit of a closed card.
    Hidden = 0,
    /// Diamonds (ouros).
    Diamonds = 1,
    /// Spades (espadilha).
    Spades = 2,
    /// Hearts (copas).
    Hearts = 3,
    /// Clubs (zap).
    Clubs = 4,
}

impl Suit {
    /// Every suit, including [`Suit::Hidden`].
    pub const ALL: [Self; 5] = [
        Self::Hidden,
        Self::Diamonds,
        Self::Spades,
        Self::Hearts,
        Self::Clubs,
    ];

    /// The four suits that appear on a face-up card.
    pub const PLAYABLE: [Self; 4] = [Self::Diamonds, Self::Spades, Self::Hearts, Self::Clubs];

    /// Returns the ordinal of the suit.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the single-character code of the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hidden => 'X',
            Self::Diamonds => 'D',
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Clubs => 'C',
        }
    }

    /// Returns the relative value a manilha of this suit takes.
    ///
    /// A hidden suit is never a manilha and maps to 0.
    #[must_use]
    pub const fn manilha_strength(self) -> u8 {
        match self {
            Self::Hidden => 0,
            Self::Diamonds => 10,
            Self::Spades => 11,
            Self::Hearts => 12,
            Self::Clubs => 13,
        }
    }

    /// Looks up a suit by its code.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::UnknownSuit`] if no suit uses `symbol`.
    pub fn from_symbol(symbol: char) -> Result<Self, SymbolError> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.symbol() == symbol)
            .ok_or(SymbolError::UnknownSuit(symbol))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A Truco card.
///
/// Either a face-up card with a playable rank and suit, or the closed card
/// (hidden rank and hidden suit) that stands for a discard. Equality and
/// ordering are structural; use [`Card::compare_value_to`] to compare
/// strength under a vira.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a card from a rank and a suit.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::HiddenMismatch`] if exactly one of `rank` and
    /// `suit` is hidden. Use [`Card::closed`] for a closed card.
    ///
    /// ```
    /// use trucors::{Card, CardError, Rank, Suit};
    ///
    /// let card = Card::of(Rank::Five, Suit::Clubs).unwrap();
    /// assert_eq!(card.to_string(), "5C");
    ///
    /// assert_eq!(
    ///     Card::of(Rank::Hidden, Suit::Clubs),
    ///     Err(CardError::HiddenMismatch { rank: Rank::Hidden, suit: Suit::Clubs })
    /// );
    /// ```
    pub const fn of(rank: Rank, suit: Suit) -> Result<Self, CardError> {
        let hidden_rank = matches!(rank, Rank::Hidden);
        let hidden_suit = matches!(suit, Suit::Hidden);
        if hidden_rank != hidden_suit {
            return Err(CardError::HiddenMismatch { rank, suit });
        }
        Ok(Self { rank, suit })
    }

    /// Creates the closed card.
    #[must_use]
    pub const fn closed() -> Self {
        Self {
            rank: Rank::Hidden,
            suit: Suit::Hidden,
        }
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether this is the closed card.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self.rank, Rank::Hidden)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a two-character token such as `"5C"`, `"QH"` or `"XX"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::Length);
        };
        let rank = Rank::from_symbol(rank)?;
        let suit = Suit::from_symbol(suit)?;
        Ok(Self::of(rank, suit)?)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let token = <alloc::string::String as serde::Deserialize>::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

/// Number of cards in a Truco deck.
pub const DECK_SIZE: usize = 40;
