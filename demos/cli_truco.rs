//! CLI Truco ranking example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use trucors::{Bot, Card, Deck, GameIntel, Manilha, PassiveBot, strongest};

fn main() {
    println!("Truco ranking CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = Deck::new(seed);

    let (Some(vira), Ok(hand)) = (deck.draw(), deck.deal(3)) else {
        println!("Deck ran out of cards.");
        return;
    };

    println!("Vira: {vira} (manilha rank: {})", vira.rank().next());
    println!("Your hand:");
    for card in &hand {
        print_card(card, &vira);
    }

    if let Ok(Some(best)) = strongest(&hand, &vira) {
        println!("Strongest card in hand: {best}");
    }

    let intel = GameIntel::builder()
        .game_info(&[], &[vira], vira, 1)
        .bot_info(hand, 0)
        .build();
    match intel {
        Ok(intel) => {
            let bot = PassiveBot;
            if let Some(play) = bot.choose_card(&intel) {
                println!("{} would play {}", bot.name(), play.value());
            }
        }
        Err(err) => println!("Snapshot error: {err}"),
    }

    loop {
        let line = prompt_line("Compare two cards (e.g. '7C 3D'): ");
        if line.is_empty() || line == "q" {
            println!("Goodbye.");
            break;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [a, b] = tokens.as_slice() else {
            println!("Enter exactly two cards.");
            continue;
        };

        let (a, b) = match (a.parse::<Card>(), b.parse::<Card>()) {
            (Ok(a), Ok(b)) => (a, b),
            (Err(err), _) | (_, Err(err)) => {
                println!("Card error: {err}");
                continue;
            }
        };

        print_card(&a, &vira);
        print_card(&b, &vira);
        match a.compare_value_to(&b, &vira) {
            Ok(diff) if diff > 0 => println!("{a} beats {b}"),
            Ok(diff) if diff < 0 => println!("{b} beats {a}"),
            Ok(_) => println!("{a} and {b} tie"),
            Err(err) => println!("Ranking error: {err}"),
        }
    }
}

fn print_card(card: &Card, vira: &Card) {
    let value = card.relative_value(vira).unwrap_or_default();
    match card.manilha(vira) {
        Ok(Some(manilha)) => println!("  {card}: {value} ({})", manilha_name(manilha)),
        _ => println!("  {card}: {value}"),
    }
}

const fn manilha_name(manilha: Manilha) -> &'static str {
    match manilha {
        Manilha::Ouros => "ouros",
        Manilha::Espadilha => "espadilha",
        Manilha::Copas => "copas",
        Manilha::Zap => "zap",
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}
