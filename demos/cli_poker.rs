//! CLI five-card draw example.
//!
//! Run with `RUST_LOG=debug` to watch the deck.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pokerhand::{Card, Category, Deck, ExchangeMode, Hand, HandOptions};

fn main() {
    env_logger::init();
    println!("Five-card draw CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = Deck::new(seed);
    let options = HandOptions::default().with_exchange(ExchangeMode::Atomic);
    let mut score = (0_u32, 0_u32);

    loop {
        if deck.len() < 20 {
            deck.reshuffle();
            println!("Deck reshuffled.");
        }

        let (mut player, mut dealer) = match (Hand::deal(&mut deck), Hand::deal(&mut deck)) {
            (Ok(player), Ok(dealer)) => (player, dealer),
            (player, dealer) => {
                println!("Deal error: {:?}", player.and(dealer).err());
                break;
            }
        };

        print_hand("You", &player);
        let input = prompt_line("Cards to exchange (positions 1-5, blank to stand): ");
        if input == "q" || input == "quit" {
            break;
        }

        let chosen = parse_positions(&input, &player);
        if let Err(err) = player.exchange_with(&mut deck, &chosen, &options) {
            println!("Exchange error: {err}");
        }

        let discards = dealer_discards(&dealer);
        if let Err(err) = dealer.exchange_with(&mut deck, &discards, &options) {
            println!("Dealer exchange error: {err}");
        }
        println!("Dealer exchanges {} card(s).", discards.len());

        print_hand("You", &player);
        print_hand("Dealer", &dealer);

        match player.cmp(&dealer) {
            std::cmp::Ordering::Greater => {
                score.0 += 1;
                println!("{}", colorize("You win.", "32"));
            }
            std::cmp::Ordering::Less => {
                score.1 += 1;
                println!("{}", colorize("Dealer wins.", "31"));
            }
            std::cmp::Ordering::Equal => println!("Split pot."),
        }
        println!("Score: you {} - dealer {}\n", score.0, score.1);

        for card in player.iter().chain(dealer.iter()) {
            deck.discard(*card);
        }
    }

    println!("Goodbye.");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

/// Maps 1-based positions to the cards at those positions, ignoring repeats
/// and anything out of range.
fn parse_positions(input: &str, hand: &Hand) -> Vec<Card> {
    let mut cards: Vec<Card> = Vec::new();
    for token in input.split(|c: char| c.is_whitespace() || c == ',') {
        let Ok(position) = token.parse::<usize>() else {
            continue;
        };
        let Some(card) = position.checked_sub(1).and_then(|i| hand.cards().get(i)) else {
            continue;
        };
        if !cards.iter().any(|c| c.is(card)) {
            cards.push(*card);
        }
    }
    cards
}

/// Keeps made hands and any cards that pair up; otherwise keeps the two highest.
fn dealer_discards(hand: &Hand) -> Vec<Card> {
    if hand.category() >= Category::Straight {
        return Vec::new();
    }

    let paired: Vec<&Card> = hand
        .iter()
        .filter(|card| hand.iter().filter(|other| other == card).count() > 1)
        .collect();

    if paired.is_empty() {
        hand.cards()[..3].to_vec()
    } else {
        hand.iter()
            .filter(|card| !paired.iter().any(|kept| kept.is(card)))
            .copied()
            .collect()
    }
}

fn print_hand(label: &str, hand: &Hand) {
    let glyphs: String = hand.iter().map(Card::glyph).collect();
    println!("{label:>6}: {glyphs}  {hand}");
    let positions: Vec<String> = hand
        .iter()
        .enumerate()
        .map(|(i, card)| format!("{}={card}", i + 1))
        .collect();
    println!("        {}", colorize(&positions.join(" "), "90"));
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
