use alloc::format;
use alloc::string::String;

use rand::Rng;

use crate::card::Card;
use crate::deck;
use crate::error::{BetError, FoldError, SelectError, StartError};

use super::{Game, GamePhase, PendingEvent, SelectedCards};

impl Game {
    /// Starts a new match.
    ///
    /// Flips the coin that assigns the deck sides, resets the round
    /// counter, and queues deck construction behind the cosmetic flip.
    /// Whatever step was still queued from a previous match is discarded
    /// here, so a stale opponent response can never touch fresh state.
    /// Chips carry over between matches.
    ///
    /// # Errors
    ///
    /// Returns an error if a match is already in progress.
    pub fn start_match(&self) -> Result<(), StartError> {
        {
            let mut state = self.state.lock();
            if *state != GamePhase::Init {
                return Err(StartError::InvalidState);
            }
            *state = GamePhase::CoinFlip;
        }

        let emperor_side = self.rng.lock().random_bool(0.5);
        *self.player_has_emperor.lock() = emperor_side;

        *self.round.lock() = 1;
        *self.pot.lock() = 0;
        *self.current_bet.lock() = 0;
        *self.selected.lock() = SelectedCards::default();
        *self.outcome.lock() = None;
        *self.player_turn.lock() = true;

        *self.pending.lock() = Some(PendingEvent::FinishCoinFlip);
        self.set_message(String::from("Flipping a coin for the deck sides..."));
        Ok(())
    }

    /// Selects the player's card for this round.
    ///
    /// The opponent's card is drawn uniformly at random at the same
    /// moment, both cards leave their decks, and both sides pay the ante.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the card-selection phase or
    /// the card is not in the player's deck. State is untouched on error.
    pub fn select_card(&self, card_id: u8) -> Result<(), SelectError> {
        if *self.state.lock() != GamePhase::CardSelection {
            return Err(SelectError::InvalidState);
        }

        let card = {
            let mut player_deck = self.player_deck.lock();
            deck::take(&mut player_deck, card_id).ok_or(SelectError::CardNotFound)?
        };

        self.begin_betting(card);
        Ok(())
    }

    /// Advances the selection countdown by one tick.
    ///
    /// When the countdown reaches zero a card is auto-selected uniformly
    /// at random, exactly as if the player had picked it. Outside the
    /// card-selection phase this does nothing.
    pub fn tick(&self) {
        if *self.state.lock() != GamePhase::CardSelection {
            return;
        }

        let expired = {
            let mut time = self.time_remaining.lock();
            if *time == 0 {
                return;
            }
            *time -= 1;
            *time == 0
        };

        if expired {
            let card = {
                let mut player_deck = self.player_deck.lock();
                deck::draw_random(&mut player_deck, &mut *self.rng.lock())
            };
            if let Some(card) = card {
                self.begin_betting(card);
            }
        }
    }

    /// Places the player's bet.
    ///
    /// An amount equal to the outstanding bet is a call and sends the
    /// round to the showdown. Zero against an outstanding bet is treated
    /// as a fold (the UI convention for declining to match). Any other
    /// amount becomes the new outstanding bet and is handed to the
    /// opponent to answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the betting phase, it is not
    /// the player's turn, the amount exceeds the table maximum, or the
    /// player lacks the chips. State is untouched on error.
    pub fn place_bet(&self, amount: usize) -> Result<(), BetError> {
        if *self.state.lock() != GamePhase::Betting {
            return Err(BetError::InvalidState);
        }
        if !*self.player_turn.lock() {
            return Err(BetError::NotYourTurn);
        }
        if amount > self.options.max_bet {
            return Err(BetError::AboveMaximum);
        }

        let outstanding = *self.current_bet.lock();
        if outstanding > 0 && amount == 0 {
            self.settle_player_fold();
            return Ok(());
        }

        {
            let mut chips = self.chips.lock();
            if amount > *chips {
                return Err(BetError::InsufficientChips);
            }
            *chips -= amount;
        }
        *self.pot.lock() += amount;

        if outstanding > 0 && amount == outstanding {
            *self.player_turn.lock() = false;
            *self.state.lock() = GamePhase::Comparison;
            *self.pending.lock() = Some(PendingEvent::RevealCards);
            self.set_message(format!("You call {amount}. Revealing the cards..."));
        } else {
            *self.current_bet.lock() = amount;
            *self.player_turn.lock() = false;
            *self.pending.lock() = Some(PendingEvent::OpponentResponse);
            self.set_message(format!("You bet {amount}. Waiting for the opponent..."));
        }
        Ok(())
    }

    /// Concedes the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the betting phase or it is
    /// not the player's turn. State is untouched on error.
    pub fn fold(&self) -> Result<(), FoldError> {
        if *self.state.lock() != GamePhase::Betting {
            return Err(FoldError::InvalidState);
        }
        if !*self.player_turn.lock() {
            return Err(FoldError::NotYourTurn);
        }

        self.settle_player_fold();
        Ok(())
    }

    /// Removes the opponent's random card, collects the antes, and opens
    /// the betting exchange. When the opponent holds the first-mover side
    /// its mandatory opening raise is queued before the player gets the
    /// action.
    fn begin_betting(&self, card: Card) {
        let opponent_card = {
            let mut opponent_deck = self.opponent_deck.lock();
            deck::draw_random(&mut opponent_deck, &mut *self.rng.lock())
        };

        {
            let mut selected = self.selected.lock();
            selected.player = Some(card);
            selected.opponent = opponent_card;
        }

        let ante = self.options.ante;
        {
            let mut chips = self.chips.lock();
            *chips = chips.saturating_sub(ante);
        }
        *self.pot.lock() = ante * 2;
        *self.current_bet.lock() = 0;

        *self.state.lock() = GamePhase::Betting;

        if *self.player_has_emperor.lock() {
            // The Slave-deck side opens, and that is the opponent here.
            *self.player_turn.lock() = false;
            *self.pending.lock() = Some(PendingEvent::OpeningRaise);
            self.set_message(format!(
                "Both sides paid the {ante} ante. Waiting for the opponent to open..."
            ));
        } else {
            *self.player_turn.lock() = true;
            *self.pending.lock() = None;
            self.set_message(format!(
                "Both sides paid the {ante} ante. You open the betting."
            ));
        }
    }
}
