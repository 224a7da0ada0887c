use alloc::format;
use alloc::string::String;

use crate::card::Card;
use crate::deck;
use crate::opponent::{self, Decision};
use crate::result::{RoundOutcome, RoundWinner};
use crate::showdown::{self, ShowdownWinner};

use super::{Game, GamePhase, PendingEvent, SelectedCards};

/// Returns whether a match with the given decks and round counter is over.
///
/// A match ends after the final round, or early once neither deck still
/// holds its special card.
#[must_use]
pub fn match_over(
    player_deck: &[Card],
    opponent_deck: &[Card],
    round: usize,
    max_rounds: usize,
) -> bool {
    round >= max_rounds || (!deck::has_special(player_deck) && !deck::has_special(opponent_deck))
}

impl Game {
    /// Applies the queued engine step, if there is one.
    ///
    /// Returns the event that was applied. A driver calls this after its
    /// cosmetic delay (the opponent's "thinking time", the coin-flip
    /// animation, the result display) has elapsed; a test harness can call
    /// it in a loop to collapse every delay to zero.
    pub fn poll(&self) -> Option<PendingEvent> {
        let event = self.pending.lock().take()?;

        match event {
            PendingEvent::FinishCoinFlip => self.finish_coin_flip(),
            PendingEvent::OpeningRaise => self.apply_opening_raise(),
            PendingEvent::OpponentResponse => self.apply_opponent_response(),
            PendingEvent::RevealCards => self.reveal_cards(),
            PendingEvent::FinishRound => self.finish_round(),
        }

        Some(event)
    }

    /// Returns whether the current match has reached its end condition.
    #[must_use]
    pub fn is_match_over(&self) -> bool {
        let player_deck = self.player_deck.lock();
        let opponent_deck = self.opponent_deck.lock();
        match_over(
            &player_deck,
            &opponent_deck,
            *self.round.lock(),
            self.options.max_rounds,
        )
    }

    /// Builds both decks from the coin-flip result and opens selection.
    fn finish_coin_flip(&self) {
        let emperor_side = *self.player_has_emperor.lock();

        {
            let mut rng = self.rng.lock();
            *self.player_deck.lock() = deck::build(emperor_side, &mut *rng);
            *self.opponent_deck.lock() = deck::build(!emperor_side, &mut *rng);
        }

        *self.time_remaining.lock() = self.options.selection_time;
        *self.state.lock() = GamePhase::CardSelection;
        self.set_message(if emperor_side {
            String::from("You hold the Emperor deck. Choose a card.")
        } else {
            String::from("You hold the Slave deck. Choose a card; you open the betting.")
        });
    }

    /// The first-moving opponent posts its mandatory opening raise.
    fn apply_opening_raise(&self) {
        let Some(card) = self.selected.lock().opponent else {
            return;
        };

        let decision = opponent::decide(card.kind, 0, true, &mut *self.rng.lock());
        if let Decision::Raise(amount) = decision {
            *self.pot.lock() += amount;
            *self.current_bet.lock() = amount;
            *self.player_turn.lock() = true;
            self.set_message(format!("The opponent opens with {amount}. Your action."));
        }
    }

    /// The opponent answers the player's bet.
    fn apply_opponent_response(&self) {
        let Some(card) = self.selected.lock().opponent else {
            return;
        };

        let outstanding = *self.current_bet.lock();
        let first_mover = *self.player_has_emperor.lock();
        let decision = opponent::decide(card.kind, outstanding, first_mover, &mut *self.rng.lock());

        match decision {
            Decision::Fold => self.settle_opponent_fold(),
            Decision::Raise(amount) => {
                // Unreachable under the stock policy, which raises only on
                // its opening move; kept so a card-aware policy can hand
                // the action back to the player.
                *self.pot.lock() += amount;
                *self.current_bet.lock() = amount;
                *self.player_turn.lock() = true;
                self.set_message(format!("The opponent raises to {amount}. Your action."));
            }
            Decision::Call => {
                *self.pot.lock() += outstanding;
                *self.state.lock() = GamePhase::Comparison;
                *self.pending.lock() = Some(PendingEvent::RevealCards);
                self.set_message(format!(
                    "The opponent calls {outstanding}. Revealing the cards..."
                ));
            }
        }
    }

    /// Resolves the showdown and settles the round.
    #[expect(
        clippy::cast_possible_wrap,
        reason = "chip amounts fit in isize"
    )]
    fn reveal_cards(&self) {
        let selected = *self.selected.lock();
        let (Some(player_card), Some(opponent_card)) = (selected.player, selected.opponent) else {
            return;
        };

        let ante = self.options.ante;
        let bet = *self.current_bet.lock();
        let pot = *self.pot.lock();
        let result = showdown::resolve(player_card.kind, opponent_card.kind);

        let outcome = match result.winner {
            ShowdownWinner::Actor => {
                let reward = showdown::calculate_reward(bet, result.multiplier, ante);
                *self.chips.lock() += reward;
                self.set_message(format!(
                    "You win {reward} chips ({}x).",
                    result.multiplier
                ));
                RoundOutcome {
                    winner: RoundWinner::Player,
                    multiplier: result.multiplier,
                    net: reward as isize,
                    pot,
                    fold: false,
                }
            }
            ShowdownWinner::Opponent => {
                // The loss is announced with the winner's multiplier, so
                // resolve again from the opponent's side to look it up.
                let reverse = showdown::resolve(opponent_card.kind, player_card.kind);
                let loss = showdown::calculate_loss(bet, reverse.multiplier, ante);
                self.set_message(format!(
                    "You lose {loss} chips ({}x).",
                    reverse.multiplier
                ));
                RoundOutcome {
                    winner: RoundWinner::Opponent,
                    multiplier: reverse.multiplier,
                    net: -(loss as isize),
                    pot,
                    fold: false,
                }
            }
            ShowdownWinner::Draw => {
                // Only the player's balance is modeled, so only the
                // player's stake comes back.
                *self.chips.lock() += bet + ante;
                self.set_message(String::from("Draw. Stakes returned."));
                RoundOutcome {
                    winner: RoundWinner::Draw,
                    multiplier: 1.0,
                    net: 0,
                    pot,
                    fold: false,
                }
            }
        };

        *self.outcome.lock() = Some(outcome);
        *self.state.lock() = GamePhase::Result;
        *self.pending.lock() = Some(PendingEvent::FinishRound);
    }

    /// The player conceded: the opponent takes the pot unseen.
    #[expect(
        clippy::cast_possible_wrap,
        reason = "chip amounts fit in isize"
    )]
    pub(super) fn settle_player_fold(&self) {
        let ante = self.options.ante;
        let bet = *self.current_bet.lock();
        let pot = *self.pot.lock();
        let forfeited = bet + ante;

        *self.outcome.lock() = Some(RoundOutcome {
            winner: RoundWinner::Opponent,
            multiplier: 1.0,
            net: -(forfeited as isize),
            pot,
            fold: true,
        });
        *self.state.lock() = GamePhase::Result;
        *self.pending.lock() = Some(PendingEvent::FinishRound);
        self.set_message(format!("You fold and forfeit {forfeited} chips."));
    }

    /// The opponent conceded: the player collects the whole pot.
    #[expect(
        clippy::cast_possible_wrap,
        reason = "chip amounts fit in isize"
    )]
    fn settle_opponent_fold(&self) {
        let ante = self.options.ante;
        let bet = *self.current_bet.lock();
        let pot = *self.pot.lock();

        *self.chips.lock() += pot;
        let gained = pot.saturating_sub(bet + ante);

        *self.outcome.lock() = Some(RoundOutcome {
            winner: RoundWinner::Player,
            multiplier: 1.0,
            net: gained as isize,
            pot,
            fold: true,
        });
        *self.state.lock() = GamePhase::Result;
        *self.pending.lock() = Some(PendingEvent::FinishRound);
        self.set_message(format!("The opponent folds. You take the {pot} pot."));
    }

    /// Ends the match or opens the next round with the surviving decks.
    fn finish_round(&self) {
        *self.selected.lock() = SelectedCards::default();
        *self.current_bet.lock() = 0;
        *self.pot.lock() = 0;
        *self.player_turn.lock() = true;

        if self.is_match_over() {
            *self.state.lock() = GamePhase::Init;
            self.set_message(String::from("Match over. Press start to play again."));
            return;
        }

        *self.round.lock() += 1;
        *self.time_remaining.lock() = self.options.selection_time;
        *self.state.lock() = GamePhase::CardSelection;
        self.set_message(String::from("Choose a card for the next round."));
    }
}
