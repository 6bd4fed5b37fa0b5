//! Serde interchange tests.

#![cfg(feature = "serde")]

use trucors::{
    Card, CardToPlay, GameIntel, Manilha, RaiseResponse, Rank, RoundResult, Suit,
};

#[test]
fn cards_serialize_as_tokens() {
    let card = Card::of(Rank::Queen, Suit::Diamonds).unwrap();
    assert_eq!(serde_json::to_string(&card).unwrap(), "\"QD\"");
    assert_eq!(serde_json::to_string(&Card::closed()).unwrap(), "\"XX\"");

    let decoded: Card = serde_json::from_str("\"3C\"").unwrap();
    assert_eq!(decoded, Card::of(Rank::Three, Suit::Clubs).unwrap());
}

#[test]
fn rejects_invalid_card_tokens() {
    for token in ["9H", "XC", "AX", "", "10S"] {
        let res: Result<Card, _> = serde_json::from_str(&format!("\"{token}\""));
        assert!(res.is_err(), "{token}");
    }
}

#[test]
fn enums_use_upper_case_names() {
    assert_eq!(serde_json::to_string(&Rank::Jack).unwrap(), "\"JACK\"");
    assert_eq!(serde_json::to_string(&Suit::Hearts).unwrap(), "\"HEARTS\"");
    assert_eq!(
        serde_json::to_string(&RoundResult::Drew).unwrap(),
        "\"DREW\""
    );
    assert_eq!(serde_json::to_string(&Manilha::Zap).unwrap(), "\"Zap\"");
    assert_eq!(
        serde_json::from_str::<RaiseResponse>("\"Raise\"").unwrap(),
        RaiseResponse::Raise
    );
}

#[test]
fn card_to_play_keeps_discard_flag() {
    let play = CardToPlay::discard(Card::of(Rank::Ace, Suit::Spades).unwrap());
    let json = serde_json::to_value(play).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "content": "AS", "discard": true })
    );
    let decoded: CardToPlay = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, play);
}

#[test]
fn intel_serializes_every_field() {
    let vira = Card::of(Rank::Seven, Suit::Hearts).unwrap();
    let intel = GameIntel::builder()
        .game_info(&[RoundResult::Won], &[vira], vira, 3)
        .bot_info(vec![Card::of(Rank::Queen, Suit::Clubs).unwrap()], 4)
        .opponent_score(2)
        .build()
        .unwrap();

    assert_eq!(
        serde_json::to_value(&intel).unwrap(),
        serde_json::json!({
            "cards": ["QC"],
            "open_cards": ["7H"],
            "vira": "7H",
            "opponent_card": null,
            "round_results": ["WON"],
            "score": 4,
            "opponent_score": 2,
            "hand_points": 3,
        })
    );
}
