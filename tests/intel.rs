//! Snapshot, bot and deck tests.

use std::collections::HashSet;

use trucors::{
    Bot, Card, CardToPlay, DECK_SIZE, Deck, DeckError, GameIntel, IntelError, PassiveBot,
    RaiseResponse, Rank, RoundResult, Suit,
};

fn card(rank: Rank, suit: Suit) -> Card {
    Card::of(rank, suit).unwrap()
}

fn sample_intel() -> GameIntel {
    let vira = card(Rank::Jack, Suit::Diamonds);
    let opponent = card(Rank::Two, Suit::Spades);
    GameIntel::builder()
        .game_info(
            &[RoundResult::Lost],
            &[vira, card(Rank::Ace, Suit::Hearts), opponent],
            vira,
            3,
        )
        .bot_info(
            vec![card(Rank::King, Suit::Clubs), card(Rank::Four, Suit::Hearts)],
            7,
        )
        .opponent_score(9)
        .opponent_card(opponent)
        .build()
        .unwrap()
}

#[test]
fn builder_collects_every_field() {
    let intel = sample_intel();

    assert_eq!(intel.vira(), card(Rank::Jack, Suit::Diamonds));
    assert_eq!(intel.open_cards()[0], intel.vira());
    assert_eq!(intel.open_cards().len(), 3);
    assert_eq!(
        intel.cards(),
        &[card(Rank::King, Suit::Clubs), card(Rank::Four, Suit::Hearts)]
    );
    assert_eq!(intel.opponent_card(), Some(card(Rank::Two, Suit::Spades)));
    assert_eq!(intel.round_results(), &[RoundResult::Lost]);
    assert_eq!(intel.score(), 7);
    assert_eq!(intel.opponent_score(), 9);
    assert_eq!(intel.hand_points(), 3);
}

#[test]
fn builder_defaults_optional_steps() {
    let vira = card(Rank::Six, Suit::Hearts);
    let intel = GameIntel::builder()
        .game_info(&[], &[vira], vira, 1)
        .bot_info(vec![card(Rank::Three, Suit::Clubs)], 0)
        .build()
        .unwrap();

    assert_eq!(intel.opponent_card(), None);
    assert_eq!(intel.opponent_score(), 0);
    assert!(intel.round_results().is_empty());
}

#[test]
fn builder_requires_game_and_bot_info() {
    let vira = card(Rank::Six, Suit::Hearts);

    assert_eq!(
        GameIntel::builder().bot_info(vec![], 0).build(),
        Err(IntelError::MissingGameInfo)
    );
    assert_eq!(
        GameIntel::builder().game_info(&[], &[vira], vira, 1).build(),
        Err(IntelError::MissingBotInfo)
    );
    assert_eq!(
        GameIntel::builder()
            .game_info(&[], &[], Card::closed(), 1)
            .bot_info(vec![], 0)
            .build(),
        Err(IntelError::ClosedVira)
    );
}

#[test]
fn builder_does_not_check_consistency() {
    let vira = card(Rank::Queen, Suit::Spades);
    let duplicated = card(Rank::Seven, Suit::Clubs);
    let intel = GameIntel::builder()
        .game_info(&[], &[vira, duplicated], vira, 1)
        .bot_info(vec![duplicated, duplicated], 0)
        .build()
        .unwrap();
    assert_eq!(intel.cards(), &[duplicated, duplicated]);
}

#[test]
fn equal_snapshots_compare_equal() {
    assert_eq!(sample_intel(), sample_intel());
    let mut set = HashSet::new();
    set.insert(sample_intel());
    assert!(set.contains(&sample_intel()));
}

#[test]
fn card_to_play_hides_discards() {
    let king = card(Rank::King, Suit::Spades);

    let played = CardToPlay::of(king);
    assert!(!played.is_discard());
    assert_eq!(played.value(), king);
    assert_eq!(played.content(), king);

    let discarded = CardToPlay::discard(king);
    assert!(discarded.is_discard());
    assert_eq!(discarded.value(), Card::closed());
    assert_eq!(discarded.content(), king);

    assert_ne!(played, discarded);
    assert_eq!(played, CardToPlay::of(king));
}

#[test]
fn raise_response_codes() {
    for response in [RaiseResponse::Quit, RaiseResponse::Accept, RaiseResponse::Raise] {
        assert_eq!(RaiseResponse::from_code(response.code()), response);
    }
    assert_eq!(RaiseResponse::Quit.code(), -1);
    assert_eq!(RaiseResponse::Accept.code(), 0);
    assert_eq!(RaiseResponse::Raise.code(), 1);
    assert_eq!(RaiseResponse::from_code(-5), RaiseResponse::Quit);
    assert_eq!(RaiseResponse::from_code(3), RaiseResponse::Raise);
}

#[test]
fn passive_bot_answers() {
    let intel = sample_intel();
    let bot = PassiveBot;

    assert!(!bot.mao_de_onze_response(&intel));
    assert!(!bot.decide_if_raises(&intel));
    assert_eq!(
        bot.choose_card(&intel),
        Some(CardToPlay::of(card(Rank::King, Suit::Clubs)))
    );
    assert_eq!(bot.raise_response(&intel), RaiseResponse::Accept);
    assert_eq!(bot.name(), "PassiveBot");
}

#[test]
fn passive_bot_with_empty_hand_plays_nothing() {
    let vira = card(Rank::Two, Suit::Clubs);
    let intel = GameIntel::builder()
        .game_info(&[RoundResult::Won, RoundResult::Drew], &[vira], vira, 1)
        .bot_info(vec![], 11)
        .build()
        .unwrap();
    assert_eq!(PassiveBot.choose_card(&intel), None);
}

#[test]
fn bots_work_as_trait_objects() {
    struct Named;

    impl Bot for Named {
        fn mao_de_onze_response(&self, _intel: &GameIntel) -> bool {
            true
        }

        fn decide_if_raises(&self, intel: &GameIntel) -> bool {
            intel.score() < intel.opponent_score()
        }

        fn choose_card(&self, intel: &GameIntel) -> Option<CardToPlay> {
            intel.cards().last().copied().map(CardToPlay::discard)
        }

        fn raise_response(&self, _intel: &GameIntel) -> RaiseResponse {
            RaiseResponse::Quit
        }

        fn name(&self) -> &str {
            "Gustavo"
        }
    }

    let intel = sample_intel();
    let bots: Vec<Box<dyn Bot>> = vec![Box::new(PassiveBot), Box::new(Named)];
    let names: Vec<&str> = bots.iter().map(|bot| bot.name()).collect();
    assert_eq!(names, ["PassiveBot", "Gustavo"]);

    assert!(bots[1].decide_if_raises(&intel));
    assert_eq!(
        bots[1].choose_card(&intel).map(|play| play.value()),
        Some(Card::closed())
    );
}

#[test]
fn deck_holds_forty_distinct_cards() {
    let ordered = Deck::ordered();
    assert_eq!(ordered.len(), DECK_SIZE);
    let distinct: HashSet<Card> = ordered.iter().copied().collect();
    assert_eq!(distinct.len(), DECK_SIZE);
    assert!(ordered.iter().all(|card| !card.is_closed()));

    let mut deck = Deck::new(42);
    let mut drawn = HashSet::new();
    while let Some(card) = deck.draw() {
        drawn.insert(card);
    }
    assert_eq!(drawn, distinct);
    assert!(deck.is_empty());
}

#[test]
fn same_seed_same_order() {
    let mut a = Deck::new(1234);
    let mut b = Deck::new(1234);
    assert_eq!(a.deal(DECK_SIZE), b.deal(DECK_SIZE));
}

#[test]
fn deal_matches_repeated_draws() {
    let mut dealt = Deck::new(9);
    let mut drawn = Deck::new(9);

    let hand = dealt.deal(3).unwrap();
    let expected: Vec<Card> = (0..3).map(|_| drawn.draw().unwrap()).collect();
    assert_eq!(hand, expected);
    assert_eq!(dealt.remaining(), DECK_SIZE - 3);
}

#[test]
fn deal_fails_without_enough_cards() {
    let mut deck = Deck::new(5);
    deck.deal(38).unwrap();
    assert_eq!(deck.deal(3), Err(DeckError::NotEnoughCards));
    assert_eq!(deck.remaining(), 2);
    assert_eq!(deck.deal(2).map(|cards| cards.len()), Ok(2));
    assert_eq!(deck.draw(), None);
}
