//! CLI game example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use ecrs::{Card, CardKind, Game, GameOptions, GamePhase, PendingEvent, Snapshot};

fn main() {
    println!("E-Card CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    loop {
        drain_pending(&game);

        match game.phase() {
            GamePhase::Init => {
                println!("\nChips: {}", game.player_chips());
                if game.player_chips() == 0 {
                    println!("You are out of chips. Game over.");
                    return;
                }
                let input = prompt_line("Press enter to start a match (q to quit): ");
                if input == "q" || input == "quit" {
                    return;
                }
                if let Err(err) = game.start_match() {
                    println!("Start error: {err}");
                }
            }
            GamePhase::CardSelection => {
                let snapshot = game.snapshot();
                print_table(&snapshot);
                let Some(id) = prompt_card_id() else {
                    return;
                };
                if let Err(err) = game.select_card(id) {
                    println!("Select error: {err}");
                }
            }
            GamePhase::Betting => {
                let snapshot = game.snapshot();
                print_table(&snapshot);

                let outstanding = snapshot.current_bet;
                let prompt = if outstanding > 0 {
                    format!("Bet amount (0-100), 'c' to call {outstanding}, 'f' to fold: ")
                } else {
                    "Bet amount (0-100), 'f' to fold: ".to_string()
                };

                match prompt_line(&prompt).as_str() {
                    "q" | "quit" => return,
                    "f" | "fold" => {
                        if let Err(err) = game.fold() {
                            println!("Fold error: {err}");
                        }
                    }
                    "c" | "call" => {
                        if let Err(err) = game.place_bet(outstanding) {
                            println!("Bet error: {err}");
                        }
                    }
                    input => match input.parse::<usize>() {
                        Ok(amount) => {
                            if let Err(err) = game.place_bet(amount) {
                                println!("Bet error: {err}");
                            }
                        }
                        Err(_) => println!("Please enter a number, 'c', or 'f'."),
                    },
                }
            }
            // These phases always carry a pending step; the next drain
            // moves the game along.
            GamePhase::CoinFlip | GamePhase::Comparison | GamePhase::Result => {}
        }
    }
}

/// Applies queued engine steps with a little cosmetic pacing, echoing the
/// status line after each one.
fn drain_pending(game: &Game) {
    while let Some(event) = game.pending_event() {
        let pause = match event {
            PendingEvent::FinishCoinFlip => 500,
            PendingEvent::OpeningRaise | PendingEvent::OpponentResponse => 1200,
            PendingEvent::RevealCards => 900,
            PendingEvent::FinishRound => 1500,
        };
        thread::sleep(Duration::from_millis(pause));
        game.poll();
        println!("{}", game.message());

        if event == PendingEvent::RevealCards {
            print_showdown(&game.snapshot());
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_card_id() -> Option<u8> {
    loop {
        let input = prompt_line("Card id to play: ");
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u8>() {
            Ok(id) => return Some(id),
            Err(_) => println!("Please enter a card id."),
        }
    }
}

fn print_table(snapshot: &Snapshot) {
    println!(
        "\nRound {} | Chips: {} | Pot: {} | Outstanding bet: {}",
        snapshot.round, snapshot.chips, snapshot.pot, snapshot.current_bet
    );
    println!("Opponent: {} hidden card(s)", snapshot.opponent_deck_len);

    let hand = snapshot
        .player_deck
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    println!("Your hand: {hand}");
    println!("{}", snapshot.message);
}

fn print_showdown(snapshot: &Snapshot) {
    let player = snapshot.player_card.map_or_else(|| "??".to_string(), |c| format_card(&c));
    let opponent = snapshot.opponent_card.map_or_else(|| "??".to_string(), |c| format_card(&c));
    println!("Showdown: you {player} vs opponent {opponent}");
}

fn format_card(card: &Card) -> String {
    let (label, color_code) = match card.kind {
        CardKind::Emperor => ("Emperor", "33"),
        CardKind::Citizen => ("Citizen", "37"),
        CardKind::Slave => ("Slave", "31"),
    };
    format!("[{}:{}]", card.id, colorize(label, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
