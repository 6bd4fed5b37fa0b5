//! Read-only game snapshot handed to a bot.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::IntelError;

/// Outcome of a finished round of the current hand, from the bot's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum RoundResult {
    /// The bot won the round.
    Won,
    /// The round was drawn.
    Drew,
    /// The bot lost the round.
    Lost,
}

/// What a bot knows when it is asked for a decision.
///
/// The snapshot is not checked for consistency: a card may appear both in the
/// hand and among the open cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameIntel {
    cards: Vec<Card>,
    open_cards: Vec<Card>,
    vira: Card,
    opponent_card: Option<Card>,
    round_results: Vec<RoundResult>,
    score: u8,
    opponent_score: u8,
    hand_points: u8,
}

impl GameIntel {
    /// Starts building a snapshot.
    ///
    /// ```
    /// use trucors::{Card, GameIntel, Rank, Suit};
    ///
    /// let vira = Card::of(Rank::Four, Suit::Clubs).unwrap();
    /// let hand = vec![Card::of(Rank::Five, Suit::Hearts).unwrap()];
    ///
    /// let intel = GameIntel::builder()
    ///     .game_info(&[], &[vira], vira, 1)
    ///     .bot_info(hand, 3)
    ///     .opponent_score(5)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(intel.vira(), vira);
    /// assert_eq!(intel.opponent_card(), None);
    /// ```
    #[must_use]
    pub const fn builder() -> GameIntelBuilder {
        GameIntelBuilder::new()
    }

    /// Returns the cards in the bot's hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the face-up cards of the hand so far, vira first.
    #[must_use]
    pub fn open_cards(&self) -> &[Card] {
        &self.open_cards
    }

    /// Returns the vira.
    #[must_use]
    pub const fn vira(&self) -> Card {
        self.vira
    }

    /// Returns the card the opponent just played, or `None` if the bot plays first.
    #[must_use]
    pub const fn opponent_card(&self) -> Option<Card> {
        self.opponent_card
    }

    /// Returns the results of the rounds played so far in this hand.
    #[must_use]
    pub fn round_results(&self) -> &[RoundResult] {
        &self.round_results
    }

    /// Returns the bot's score.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.score
    }

    /// Returns the opponent's score.
    #[must_use]
    pub const fn opponent_score(&self) -> u8 {
        self.opponent_score
    }

    /// Returns the points at stake in this hand.
    #[must_use]
    pub const fn hand_points(&self) -> u8 {
        self.hand_points
    }
}

#[derive(Debug, Clone)]
struct GameInfo {
    round_results: Vec<RoundResult>,
    open_cards: Vec<Card>,
    vira: Card,
    hand_points: u8,
}

#[derive(Debug, Clone)]
struct BotInfo {
    cards: Vec<Card>,
    score: u8,
}

/// Builder for [`GameIntel`].
#[derive(Debug, Clone, Default)]
pub struct GameIntelBuilder {
    game: Option<GameInfo>,
    bot: Option<BotInfo>,
    opponent_score: u8,
    opponent_card: Option<Card>,
}

impl GameIntelBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            game: None,
            bot: None,
            opponent_score: 0,
            opponent_card: None,
        }
    }

    /// Sets the state of the current hand. `open_cards` should start with the vira.
    #[must_use]
    pub fn game_info(
        mut self,
        round_results: &[RoundResult],
        open_cards: &[Card],
        vira: Card,
        hand_points: u8,
    ) -> Self {
        self.game = Some(GameInfo {
            round_results: round_results.to_vec(),
            open_cards: open_cards.to_vec(),
            vira,
            hand_points,
        });
        self
    }

    /// Sets the bot's hand and score.
    #[must_use]
    pub fn bot_info(mut self, cards: Vec<Card>, score: u8) -> Self {
        self.bot = Some(BotInfo { cards, score });
        self
    }

    /// Sets the opponent's score.
    #[must_use]
    pub const fn opponent_score(mut self, opponent_score: u8) -> Self {
        self.opponent_score = opponent_score;
        self
    }

    /// Sets the card the opponent played. Optional.
    #[must_use]
    pub const fn opponent_card(mut self, card: Card) -> Self {
        self.opponent_card = Some(card);
        self
    }

    /// Finishes the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`IntelError::MissingGameInfo`] or [`IntelError::MissingBotInfo`]
    /// if a required step was skipped, and [`IntelError::ClosedVira`] if the
    /// vira is the closed card.
    pub fn build(self) -> Result<GameIntel, IntelError> {
        let game = self.game.ok_or(IntelError::MissingGameInfo)?;
        let bot = self.bot.ok_or(IntelError::MissingBotInfo)?;
        if game.vira.is_closed() {
            return Err(IntelError::ClosedVira);
        }

        Ok(GameIntel {
            cards: bot.cards,
            open_cards: game.open_cards,
            vira: game.vira,
            opponent_card: self.opponent_card,
            round_results: game.round_results,
            score: bot.score,
            opponent_score: self.opponent_score,
            hand_points: game.hand_points,
        })
    }
}
