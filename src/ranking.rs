//! Card strength relative to a vira.
//!
//! The vira decides which rank is promoted to manilha for the deal: the rank
//! right after the vira's rank, wrapping from three back to four. Manilhas
//! outrank every other card and are ordered among themselves by suit. The
//! remaining playable ranks keep their natural order. Ranks above the vira's
//! rank move down by one to close the gap the manilha leaves, ranks at or
//! below it keep their ordinal. The closed card is worth 0.
//!
//! When the vira is a three the manilha is a four, nothing sits above the
//! vira, and the other ranks keep ordinals 2 to 10. A non-manilha three is then
//! worth 10, the same as the ouros.

use core::cmp::Ordering;

use crate::card::{Card, Suit};
use crate::error::RankingError;

/// A named manilha, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Manilha {
    /// Manilha of diamonds.
    Ouros,
    /// Manilha of spades.
    Espadilha,
    /// Manilha of hearts.
    Copas,
    /// Manilha of clubs, the strongest card of the deal.
    Zap,
}

impl Manilha {
    /// Returns the suit of this manilha.
    #[must_use]
    pub const fn suit(self) -> Suit {
        match self {
            Self::Ouros => Suit::Diamonds,
            Self::Espadilha => Suit::Spades,
            Self::Copas => Suit::Hearts,
            Self::Zap => Suit::Clubs,
        }
    }

    /// Returns the relative value of this manilha.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.suit().manilha_strength()
    }

    /// Returns the manilha of `suit`, or `None` for the hidden suit.
    #[must_use]
    pub const fn from_suit(suit: Suit) -> Option<Self> {
        match suit {
            Suit::Hidden => None,
            Suit::Diamonds => Some(Self::Ouros),
            Suit::Spades => Some(Self::Espadilha),
            Suit::Hearts => Some(Self::Copas),
            Suit::Clubs => Some(Self::Zap),
        }
    }
}

const fn check_vira(vira: &Card) -> Result<(), RankingError> {
    if vira.is_closed() {
        return Err(RankingError::ClosedVira);
    }
    Ok(())
}

impl Card {
    /// Returns whether this card is a manilha under `vira`.
    ///
    /// Only the rank matters: the card is a manilha if its rank follows the
    /// vira's rank.
    ///
    /// # Errors
    ///
    /// Returns [`RankingError::ClosedVira`] if `vira` is the closed card.
    pub const fn is_manilha(&self, vira: &Card) -> Result<bool, RankingError> {
        if let Err(err) = check_vira(vira) {
            return Err(err);
        }
        Ok(self.rank().value() == vira.rank().next().value())
    }

    /// Returns which manilha this card is under `vira`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`RankingError::ClosedVira`] if `vira` is the closed card.
    pub fn manilha(&self, vira: &Card) -> Result<Option<Manilha>, RankingError> {
        Ok(if self.is_manilha(vira)? {
            Manilha::from_suit(self.suit())
        } else {
            None
        })
    }

    /// Returns whether this card is the zap (manilha of clubs) under `vira`.
    ///
    /// ```
    /// use trucors::{Card, Rank, Suit};
    ///
    /// let vira = Card::of(Rank::Four, Suit::Clubs).unwrap();
    /// let card = Card::of(Rank::Five, Suit::Clubs).unwrap();
    /// assert_eq!(card.is_zap(&vira), Ok(true));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RankingError::ClosedVira`] if `vira` is the closed card.
    pub fn is_zap(&self, vira: &Card) -> Result<bool, RankingError> {
        Ok(self.manilha(vira)? == Some(Manilha::Zap))
    }

    /// Returns whether this card is the copas (manilha of hearts) under `vira`.
    ///
    /// # Errors
    ///
    /// Returns [`RankingError::ClosedVira`] if `vira` is the closed card.
    pub fn is_copas(&self, vira: &Card) -> Result<bool, RankingError> {
        Ok(self.manilha(vira)? == Some(Manilha::Copas))
    }

    /// Returns whether this card is the espadilha (manilha of spades) under `vira`.
    ///
    /// # Errors
    ///
    /// Returns [`RankingError::ClosedVira`] if `vira` is the closed card.
    pub fn is_espadilha(&self, vira: &Card) -> Result<bool, RankingError> {
        Ok(self.manilha(vira)? == Some(Manilha::Espadilha))
    }

    /// Returns whether this card is the ouros (manilha of diamonds) under `vira`.
    ///
    /// # Errors
    ///
    /// Returns [`RankingError::ClosedVira`] if `vira` is the closed card.
    pub fn is_ouros(&self, vira: &Card) -> Result<bool, RankingError> {
        Ok(self.manilha(vira)? == Some(Manilha::Ouros))
    }

    /// Returns the strength of this card under `vira`.
    ///
    /// The closed card is worth 0, manilhas 10 (ouros) to 13 (zap), and every
    /// other card 1 to 9, or 2 to 10 when the vira is a three.
    ///
    /// ```
    /// use trucors::{Card, Rank, Suit};
    ///
    /// let vira = Card::of(Rank::Four, Suit::Clubs).unwrap();
    /// let seven = Card::of(Rank::Seven, Suit::Clubs).unwrap();
    /// // Five is the manilha, so seven moves down into its place.
    /// assert_eq!(seven.relative_value(&vira), Ok(3));
    /// assert_eq!(Card::closed().relative_value(&vira), Ok(0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RankingError::ClosedVira`] if `vira` is the closed card.
    pub fn relative_value(&self, vira: &Card) -> Result<u8, RankingError> {
        check_vira(vira)?;
        if self.is_closed() {
            return Ok(0);
        }
        if self.is_manilha(vira)? {
            return Ok(self.suit().manilha_strength());
        }

        let rank = self.rank().value();
        if rank > vira.rank().value() {
            Ok(rank - 1)
        } else {
            Ok(rank)
        }
    }

    /// Compares the strength of this card with `other` under `vira`.
    ///
    /// The result is the difference of the two relative values: positive if
    /// this card is stronger, negative if weaker and zero if both are worth the
    /// same. Cards of the same rank and different suits are worth the same
    /// unless they are manilhas, even though they are not equal.
    ///
    /// # Errors
    ///
    /// Returns [`RankingError::ClosedVira`] if `vira` is the closed card.
    pub fn compare_value_to(&self, other: &Card, vira: &Card) -> Result<i16, RankingError> {
        let mine = i16::from(self.relative_value(vira)?);
        let theirs = i16::from(other.relative_value(vira)?);
        Ok(mine - theirs)
    }

    /// Orders this card against `other` by strength under `vira`.
    ///
    /// # Errors
    ///
    /// Returns [`RankingError::ClosedVira`] if `vira` is the closed card.
    pub fn cmp_value(&self, other: &Card, vira: &Card) -> Result<Ordering, RankingError> {
        Ok(self.compare_value_to(other, vira)?.cmp(&0))
    }
}

/// Returns the strength of `card` under `vira`.
///
/// # Errors
///
/// Returns [`RankingError::ClosedVira`] if `vira` is the closed card.
pub fn relative_value(card: &Card, vira: &Card) -> Result<u8, RankingError> {
    card.relative_value(vira)
}

/// Compares the strength of `a` and `b` under `vira`.
///
/// See [`Card::compare_value_to`].
///
/// # Errors
///
/// Returns [`RankingError::ClosedVira`] if `vira` is the closed card.
pub fn compare(a: &Card, b: &Card, vira: &Card) -> Result<i16, RankingError> {
    a.compare_value_to(b, vira)
}

/// Returns the strongest card of `cards` under `vira`.
///
/// Ties go to the card that comes first. Returns `Ok(None)` for an empty
/// slice.
///
/// # Errors
///
/// Returns [`RankingError::ClosedVira`] if `vira` is the closed card.
pub fn strongest<'a>(cards: &'a [Card], vira: &Card) -> Result<Option<&'a Card>, RankingError> {
    check_vira(vira)?;
    let mut best: Option<(&Card, u8)> = None;
    for card in cards {
        let value = card.relative_value(vira)?;
        match best {
            Some((_, best_value)) if best_value >= value => {}
            _ => best = Some((card, value)),
        }
    }
    Ok(best.map(|(card, _)| card))
}
