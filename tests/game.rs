//! Game integration tests.

#![allow(clippy::float_cmp)]

use ecrs::{
    BetError, Card, CardKind, DECK_SIZE, Decision, FoldError, Game, GameOptions, GamePhase,
    PendingEvent, RoundWinner, SelectError, ShowdownWinner, StartError, calculate_loss,
    calculate_reward, deck, match_over, opponent, resolve,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(kind: CardKind, id: u8) -> Card {
    Card::new(kind, id)
}

/// Starts a match with a forced deck side and polls through the coin flip.
fn start_with_side(game: &Game, player_has_emperor: bool) {
    game.start_match().unwrap();
    *game.player_has_emperor.lock() = player_has_emperor;
    assert_eq!(game.poll(), Some(PendingEvent::FinishCoinFlip));
    assert_eq!(game.phase(), GamePhase::CardSelection);
}

#[test]
fn built_deck_is_one_special_and_four_citizens() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for &emperor in &[true, false] {
        let built = deck::build(emperor, &mut rng);
        assert_eq!(built.len(), DECK_SIZE);

        let mut ids: Vec<u8> = built.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);

        let expected = if emperor {
            CardKind::Emperor
        } else {
            CardKind::Slave
        };
        let specials = built.iter().filter(|c| c.kind == expected).count();
        let citizens = built.iter().filter(|c| c.kind == CardKind::Citizen).count();
        assert_eq!(specials, 1);
        assert_eq!(citizens, 4);
    }
}

#[test]
fn shuffle_spreads_the_special_evenly() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let trials = 5000;
    let mut position_counts = [0usize; DECK_SIZE];

    for _ in 0..trials {
        let built = deck::build(true, &mut rng);
        let position = built
            .iter()
            .position(|c| c.kind == CardKind::Emperor)
            .unwrap();
        position_counts[position] += 1;
    }

    // Expected 1000 per slot; the bound is far beyond binomial noise.
    for &count in &position_counts {
        assert!(
            (850..=1150).contains(&count),
            "special card landed {count} times on one position"
        );
    }
}

#[test]
fn dominance_is_a_strict_three_cycle() {
    let kinds = [CardKind::Emperor, CardKind::Citizen, CardKind::Slave];

    for &a in &kinds {
        for &b in &kinds {
            let forward = resolve(a, b);
            let backward = resolve(b, a);

            if a == b {
                assert_eq!(forward.winner, ShowdownWinner::Draw);
                assert_eq!(forward.multiplier, 1.0);
            } else {
                let a_wins = forward.winner == ShowdownWinner::Actor;
                let b_wins = backward.winner == ShowdownWinner::Actor;
                assert!(a_wins != b_wins, "{a:?} vs {b:?} must have one winner");
            }
        }
    }

    assert_eq!(resolve(CardKind::Emperor, CardKind::Citizen).multiplier, 1.44);
    assert_eq!(resolve(CardKind::Citizen, CardKind::Slave).multiplier, 1.44);
    assert_eq!(resolve(CardKind::Slave, CardKind::Emperor).multiplier, 9.0);
    // The loser's side sees the winner's multiplier, looked up symmetrically.
    assert_eq!(resolve(CardKind::Citizen, CardKind::Emperor).multiplier, 1.44);
    assert_eq!(resolve(CardKind::Emperor, CardKind::Slave).multiplier, 9.0);
    assert_eq!(resolve(CardKind::Slave, CardKind::Citizen).multiplier, 1.44);
}

#[test]
fn reward_is_floored_total_return_minus_stake() {
    assert_eq!(calculate_reward(23, 1.44, 10), 14); // floor(47.52) - 33
    assert_eq!(calculate_reward(0, 1.44, 10), 4); // floor(14.4) - 10
    assert_eq!(calculate_reward(100, 1.44, 10), 48); // floor(158.4) - 110
    assert_eq!(calculate_reward(50, 9.0, 10), 480); // 540 - 60
    assert_eq!(calculate_reward(0, 9.0, 10), 80); // 90 - 10
    assert_eq!(calculate_reward(0, 1.0, 10), 0);
    assert_eq!(calculate_reward(0, 1.0, 0), 0);

    assert_eq!(calculate_loss(23, 1.44, 10), 47);
    assert_eq!(calculate_loss(10, 9.0, 10), 180);
    assert_eq!(calculate_loss(0, 9.0, 10), 90);
}

#[test]
fn match_over_boundaries() {
    let with_special = vec![card(CardKind::Emperor, 0), card(CardKind::Citizen, 1)];
    let citizens_only = vec![card(CardKind::Citizen, 2), card(CardKind::Citizen, 3)];

    assert!(!match_over(&with_special, &citizens_only, 4, 5));
    assert!(match_over(&with_special, &citizens_only, 5, 5));
    assert!(match_over(&with_special, &citizens_only, 6, 5));

    // Both specials played out: over regardless of the round.
    assert!(match_over(&citizens_only, &citizens_only, 1, 5));
    // One special still in play keeps the match alive.
    assert!(!match_over(&citizens_only, &with_special, 1, 5));
}

#[test]
fn policy_opening_raise_is_clamped_to_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    for _ in 0..500 {
        match opponent::decide(CardKind::Slave, 0, true, &mut rng) {
            Decision::Raise(amount) => assert!((10..=50).contains(&amount)),
            other => panic!("first mover must open with a raise, got {other:?}"),
        }
    }
}

#[test]
fn policy_never_raises_once_a_bet_exists() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let kinds = [CardKind::Emperor, CardKind::Citizen, CardKind::Slave];

    for i in 0..2000 {
        let kind = kinds[i % kinds.len()];
        let first_mover = i % 2 == 0;
        for bet in [1, 30, 51, 100] {
            let decision = opponent::decide(kind, bet, first_mover, &mut rng);
            assert!(
                !matches!(decision, Decision::Raise(_)),
                "policy raised against an outstanding bet of {bet}"
            );
        }
    }
}

#[test]
fn emperor_call_win_pays_the_floored_profit() {
    let game = Game::new(GameOptions::default(), 7);
    start_with_side(&game, true);

    // Force the opponent's draw to be a Citizen.
    *game.opponent_deck.lock() = vec![card(CardKind::Citizen, 1)];
    let emperor_id = game
        .player_deck
        .lock()
        .iter()
        .find(|c| c.kind == CardKind::Emperor)
        .map(|c| c.id)
        .unwrap();

    game.select_card(emperor_id).unwrap();
    assert_eq!(game.phase(), GamePhase::Betting);
    assert_eq!(game.player_chips(), 290);
    assert_eq!(game.pot_total(), 20);
    assert!(!game.is_player_turn());

    assert_eq!(game.poll(), Some(PendingEvent::OpeningRaise));
    assert!((10..=50).contains(&game.outstanding_bet()));
    assert!(game.is_player_turn());

    // Pin the exchange to a known opening raise.
    *game.current_bet.lock() = 23;
    *game.pot.lock() = 20 + 23;

    game.place_bet(23).unwrap();
    assert_eq!(game.phase(), GamePhase::Comparison);
    assert_eq!(game.player_chips(), 267);
    assert_eq!(game.pot_total(), 66);

    assert_eq!(game.poll(), Some(PendingEvent::RevealCards));
    assert_eq!(game.phase(), GamePhase::Result);
    // Committed 33, returned floor(33 * 1.44) = 47, profit 14.
    assert_eq!(game.player_chips(), 281);

    let outcome = game.last_outcome().unwrap();
    assert_eq!(outcome.winner, RoundWinner::Player);
    assert_eq!(outcome.multiplier, 1.44);
    assert_eq!(outcome.net, 14);
    assert!(!outcome.fold);
}

#[test]
fn upset_loss_is_announced_with_the_slave_multiplier() {
    let game = Game::new(GameOptions::default(), 8);
    start_with_side(&game, true);

    *game.opponent_deck.lock() = vec![card(CardKind::Slave, 0)];
    let emperor_id = game
        .player_deck
        .lock()
        .iter()
        .find(|c| c.kind == CardKind::Emperor)
        .map(|c| c.id)
        .unwrap();

    game.select_card(emperor_id).unwrap();
    assert_eq!(game.poll(), Some(PendingEvent::OpeningRaise));

    *game.current_bet.lock() = 10;
    *game.pot.lock() = 20 + 10;

    game.place_bet(10).unwrap();
    assert_eq!(game.poll(), Some(PendingEvent::RevealCards));

    // The stake stays lost; nothing extra is debited at settlement.
    assert_eq!(game.player_chips(), 280);

    let outcome = game.last_outcome().unwrap();
    assert_eq!(outcome.winner, RoundWinner::Opponent);
    assert_eq!(outcome.multiplier, 9.0);
    assert_eq!(outcome.net, -180); // floor((10 + 10) * 9.0)
    assert!(!outcome.fold);
}

#[test]
fn draw_returns_the_players_stake() {
    let game = Game::new(GameOptions::default(), 9);
    start_with_side(&game, true);

    *game.player_deck.lock() = vec![card(CardKind::Citizen, 3)];
    *game.opponent_deck.lock() = vec![card(CardKind::Citizen, 1)];

    game.select_card(3).unwrap();
    assert_eq!(game.poll(), Some(PendingEvent::OpeningRaise));
    let opening = game.outstanding_bet();

    game.place_bet(opening).unwrap();
    assert_eq!(game.poll(), Some(PendingEvent::RevealCards));

    // Ante and call both come back on a draw.
    assert_eq!(game.player_chips(), 300);
    let outcome = game.last_outcome().unwrap();
    assert_eq!(outcome.winner, RoundWinner::Draw);
    assert_eq!(outcome.multiplier, 1.0);
    assert_eq!(outcome.net, 0);
}

#[test]
fn folding_at_zero_bet_forfeits_only_the_ante() {
    let game = Game::new(GameOptions::default(), 10);
    start_with_side(&game, false);

    // Play a Citizen so the Slave stays in the deck and the match survives.
    *game.player_deck.lock() = vec![
        card(CardKind::Citizen, 1),
        card(CardKind::Slave, 0),
        card(CardKind::Citizen, 2),
        card(CardKind::Citizen, 3),
        card(CardKind::Citizen, 4),
    ];

    game.select_card(1).unwrap();
    assert_eq!(game.phase(), GamePhase::Betting);
    assert!(game.is_player_turn());
    assert_eq!(game.outstanding_bet(), 0);
    assert_eq!(game.pot_total(), 20);

    game.fold().unwrap();
    assert_eq!(game.phase(), GamePhase::Result);
    assert_eq!(game.player_chips(), 290);

    let outcome = game.last_outcome().unwrap();
    assert_eq!(outcome.winner, RoundWinner::Opponent);
    assert_eq!(outcome.net, -10);
    assert_eq!(outcome.pot, 20);
    assert!(outcome.fold);

    assert_eq!(game.poll(), Some(PendingEvent::FinishRound));
    assert_eq!(game.phase(), GamePhase::CardSelection);
    assert_eq!(game.round_number(), 2);
}

#[test]
fn zero_bet_against_an_outstanding_bet_is_a_fold() {
    let game = Game::new(GameOptions::default(), 12);
    start_with_side(&game, true);

    let first_id = game.player_deck.lock()[0].id;
    game.select_card(first_id).unwrap();
    assert_eq!(game.poll(), Some(PendingEvent::OpeningRaise));
    let opening = game.outstanding_bet();
    assert!(opening > 0);

    game.place_bet(0).unwrap();
    assert_eq!(game.phase(), GamePhase::Result);
    assert_eq!(game.player_chips(), 290);

    let outcome = game.last_outcome().unwrap();
    assert_eq!(outcome.winner, RoundWinner::Opponent);
    assert!(outcome.fold);
    // The announced loss includes the bet the player declined to match.
    assert_eq!(outcome.net, -((opening + 10) as isize));
}

#[test]
fn opponent_response_settles_consistently_either_way() {
    for seed in 0..40 {
        let game = Game::new(GameOptions::default(), seed);
        start_with_side(&game, false);

        *game.player_deck.lock() = vec![card(CardKind::Citizen, 2)];
        *game.opponent_deck.lock() = vec![card(CardKind::Citizen, 1)];

        game.select_card(2).unwrap();
        assert!(game.is_player_turn());

        game.place_bet(60).unwrap();
        assert_eq!(game.player_chips(), 230);
        assert_eq!(game.pot_total(), 80);
        assert_eq!(game.poll(), Some(PendingEvent::OpponentResponse));

        match game.phase() {
            GamePhase::Comparison => {
                // Opponent called: its 60 joins the pot, then the draw
                // hands the player's stake back.
                assert_eq!(game.pot_total(), 140);
                assert_eq!(game.poll(), Some(PendingEvent::RevealCards));
                assert_eq!(game.player_chips(), 300);
                assert_eq!(game.last_outcome().unwrap().winner, RoundWinner::Draw);
            }
            GamePhase::Result => {
                // Opponent folded: the player collects the pot as it stood.
                assert_eq!(game.player_chips(), 310);
                let outcome = game.last_outcome().unwrap();
                assert_eq!(outcome.winner, RoundWinner::Player);
                assert!(outcome.fold);
                assert_eq!(outcome.net, 10);
            }
            other => panic!("seed {seed}: unexpected phase {other:?} after response"),
        }
    }
}

#[test]
fn auto_select_fires_when_the_countdown_expires() {
    let game = Game::new(GameOptions::default(), 14);

    // Ticks outside the selection phase do nothing.
    game.tick();
    assert_eq!(game.phase(), GamePhase::Init);

    start_with_side(&game, false);
    assert_eq!(game.time_remaining(), 15);

    for _ in 0..14 {
        game.tick();
        assert_eq!(game.phase(), GamePhase::CardSelection);
    }
    game.tick();

    assert_eq!(game.phase(), GamePhase::Betting);
    assert_eq!(game.player_cards_remaining(), 4);
    assert_eq!(game.opponent_cards_remaining(), 4);
    assert_eq!(game.pot_total(), 20);
}

#[test]
fn snapshot_hides_the_opponent_card_until_comparison() {
    let game = Game::new(GameOptions::default(), 15);
    start_with_side(&game, true);

    *game.player_deck.lock() = vec![card(CardKind::Citizen, 3)];
    *game.opponent_deck.lock() = vec![card(CardKind::Citizen, 1)];

    game.select_card(3).unwrap();

    let hidden = game.snapshot();
    assert_eq!(hidden.phase, GamePhase::Betting);
    assert!(hidden.opponent_card_chosen);
    assert_eq!(hidden.opponent_card, None);
    assert_eq!(hidden.player_card, Some(card(CardKind::Citizen, 3)));
    assert_eq!(hidden.opponent_deck_len, 0);

    game.poll();
    game.place_bet(game.outstanding_bet()).unwrap();

    let revealed = game.snapshot();
    assert_eq!(revealed.phase, GamePhase::Comparison);
    assert_eq!(revealed.opponent_card, Some(card(CardKind::Citizen, 1)));
}

#[test]
fn invalid_actions_error_and_change_nothing() {
    let game = Game::new(GameOptions::default(), 16);

    assert_eq!(game.select_card(0).unwrap_err(), SelectError::InvalidState);
    assert_eq!(game.place_bet(10).unwrap_err(), BetError::InvalidState);
    assert_eq!(game.fold().unwrap_err(), FoldError::InvalidState);
    assert_eq!(game.phase(), GamePhase::Init);
    assert_eq!(game.player_chips(), 300);

    game.start_match().unwrap();
    assert_eq!(game.start_match().unwrap_err(), StartError::InvalidState);

    *game.player_has_emperor.lock() = true;
    game.poll();

    assert_eq!(game.select_card(99).unwrap_err(), SelectError::CardNotFound);
    assert_eq!(game.player_cards_remaining(), DECK_SIZE);
    assert_eq!(game.place_bet(10).unwrap_err(), BetError::InvalidState);

    let first_id = game.player_deck.lock()[0].id;
    game.select_card(first_id).unwrap();

    // The opponent has the opening move; the player cannot act yet.
    assert_eq!(game.place_bet(10).unwrap_err(), BetError::NotYourTurn);
    assert_eq!(game.fold().unwrap_err(), FoldError::NotYourTurn);

    game.poll();
    assert_eq!(game.place_bet(101).unwrap_err(), BetError::AboveMaximum);

    let chips_before = game.player_chips();
    let pot_before = game.pot_total();
    *game.chips.lock() = 50;
    assert_eq!(game.place_bet(80).unwrap_err(), BetError::InsufficientChips);
    assert_eq!(game.pot_total(), pot_before);
    *game.chips.lock() = chips_before;
    assert_eq!(game.phase(), GamePhase::Betting);
}

#[test]
fn match_ends_at_the_round_cap_and_restarts_cleanly() {
    let game = Game::new(GameOptions::default(), 17);
    start_with_side(&game, false);

    let first_id = game.player_deck.lock()[0].id;
    game.select_card(first_id).unwrap();
    game.fold().unwrap();

    *game.round.lock() = 5;
    assert_eq!(game.poll(), Some(PendingEvent::FinishRound));
    assert_eq!(game.phase(), GamePhase::Init);
    assert_eq!(game.pending_event(), None);
    assert_eq!(game.pot_total(), 0);
    assert_eq!(game.outstanding_bet(), 0);

    // Chips carry over; the round counter starts fresh.
    let chips = game.player_chips();
    game.start_match().unwrap();
    assert_eq!(game.round_number(), 1);
    assert_eq!(game.player_chips(), chips);
    assert_eq!(game.pending_event(), Some(PendingEvent::FinishCoinFlip));
}

#[test]
fn match_ends_early_once_both_specials_are_gone() {
    let game = Game::new(GameOptions::default(), 18);
    start_with_side(&game, false);

    let first_id = game.player_deck.lock()[0].id;
    game.select_card(first_id).unwrap();
    game.fold().unwrap();

    *game.player_deck.lock() = vec![card(CardKind::Citizen, 2)];
    *game.opponent_deck.lock() = vec![card(CardKind::Citizen, 1)];
    assert_eq!(game.poll(), Some(PendingEvent::FinishRound));
    assert_eq!(game.phase(), GamePhase::Init);
}

#[test]
fn full_match_drives_to_completion_for_many_seeds() {
    for seed in 0..25 {
        let game = Game::new(GameOptions::default(), seed);
        game.start_match().unwrap();

        let mut steps = 0;
        loop {
            steps += 1;
            assert!(steps < 500, "seed {seed}: match did not terminate");

            if game.poll().is_some() {
                continue;
            }

            match game.phase() {
                GamePhase::Init => break,
                GamePhase::CardSelection => {
                    let first_id = game.player_deck.lock()[0].id;
                    game.select_card(first_id).unwrap();
                }
                GamePhase::Betting => {
                    let outstanding = game.outstanding_bet();
                    if game.place_bet(outstanding).is_err() {
                        game.fold().unwrap();
                    }
                }
                other => panic!("seed {seed}: stuck in {other:?} with nothing pending"),
            }
        }

        assert_eq!(
            game.player_cards_remaining(),
            game.opponent_cards_remaining()
        );
        assert!(game.round_number() <= game.options.max_rounds);
        assert_eq!(game.pot_total(), 0);
    }
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_initial_chips(500)
        .with_max_rounds(3)
        .with_selection_time(30)
        .with_min_bet(5)
        .with_max_bet(200)
        .with_ante(20);

    assert_eq!(options.initial_chips, 500);
    assert_eq!(options.max_rounds, 3);
    assert_eq!(options.selection_time, 30);
    assert_eq!(options.min_bet, 5);
    assert_eq!(options.max_bet, 200);
    assert_eq!(options.ante, 20);

    let game = Game::new(options, 1);
    assert_eq!(game.player_chips(), 500);
    assert_eq!(game.time_remaining(), 30);
}
