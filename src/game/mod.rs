//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::options::GameOptions;
use crate::result::RoundOutcome;

mod actions;
mod round;
pub mod state;

pub use round::match_over;
pub use state::{GamePhase, PendingEvent, Snapshot};

/// The cards selected for the current round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectedCards {
    /// The player's card.
    pub player: Option<Card>,
    /// The opponent's card, hidden from snapshots until the comparison.
    pub opponent: Option<Card>,
}

/// The card-betting game engine.
///
/// The engine owns the decks, the betting state, and the player's chip
/// balance. A presentation layer drives it with [`Game::start_match`],
/// [`Game::select_card`], [`Game::place_bet`], [`Game::fold`],
/// [`Game::tick`], and [`Game::poll`], and renders [`Game::snapshot`]
/// after every transition. All transitions run on the calling thread and
/// complete atomically; the scheduled steps a UI would run from timers are
/// queued as [`PendingEvent`]s instead.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current phase.
    pub state: Mutex<GamePhase>,
    /// The player's remaining cards.
    pub player_deck: Mutex<Vec<Card>>,
    /// The opponent's remaining cards.
    pub opponent_deck: Mutex<Vec<Card>>,
    /// Whether the coin flip gave the player the Emperor deck.
    ///
    /// The Slave-deck side is the one obligated to open the betting.
    pub player_has_emperor: Mutex<bool>,
    /// The player's chip balance.
    pub chips: Mutex<usize>,
    /// Chips committed by both sides this round.
    pub pot: Mutex<usize>,
    /// The outstanding bet (the last raise amount, not a running total).
    pub current_bet: Mutex<usize>,
    /// Current round number (1-based).
    pub round: Mutex<usize>,
    /// The cards selected for the current round.
    pub selected: Mutex<SelectedCards>,
    /// Whether the player is the side expected to act.
    player_turn: Mutex<bool>,
    /// Selection time remaining, in timer ticks.
    time_remaining: Mutex<u32>,
    /// The scheduled step waiting for the next poll.
    pending: Mutex<Option<PendingEvent>>,
    /// Outcome of the most recently settled round.
    outcome: Mutex<Option<RoundOutcome>>,
    /// Human-readable status line.
    message: Mutex<String>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given options and RNG seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ecrs::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed);

        Self {
            state: Mutex::new(GamePhase::Init),
            player_deck: Mutex::new(Vec::new()),
            opponent_deck: Mutex::new(Vec::new()),
            player_has_emperor: Mutex::new(false),
            chips: Mutex::new(options.initial_chips),
            pot: Mutex::new(0),
            current_bet: Mutex::new(0),
            round: Mutex::new(1),
            selected: Mutex::new(SelectedCards::default()),
            player_turn: Mutex::new(true),
            time_remaining: Mutex::new(options.selection_time),
            pending: Mutex::new(None),
            outcome: Mutex::new(None),
            message: Mutex::new(String::from("Press start to begin a match.")),
            rng: Mutex::new(rng),
            options,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> GamePhase {
        *self.state.lock()
    }

    /// Returns the player's chip balance.
    pub fn player_chips(&self) -> usize {
        *self.chips.lock()
    }

    /// Returns the chips committed by both sides this round.
    pub fn pot_total(&self) -> usize {
        *self.pot.lock()
    }

    /// Returns the outstanding bet.
    pub fn outstanding_bet(&self) -> usize {
        *self.current_bet.lock()
    }

    /// Returns the current round number (1-based).
    pub fn round_number(&self) -> usize {
        *self.round.lock()
    }

    /// Returns whether the player is the side expected to act.
    pub fn is_player_turn(&self) -> bool {
        *self.player_turn.lock()
    }

    /// Returns the selection time remaining, in timer ticks.
    pub fn time_remaining(&self) -> u32 {
        *self.time_remaining.lock()
    }

    /// Returns the scheduled step waiting for the next poll, if any.
    pub fn pending_event(&self) -> Option<PendingEvent> {
        *self.pending.lock()
    }

    /// Returns the outcome of the most recently settled round.
    pub fn last_outcome(&self) -> Option<RoundOutcome> {
        *self.outcome.lock()
    }

    /// Returns the number of cards left in the player's deck.
    pub fn player_cards_remaining(&self) -> usize {
        self.player_deck.lock().len()
    }

    /// Returns the number of cards left in the opponent's deck.
    pub fn opponent_cards_remaining(&self) -> usize {
        self.opponent_deck.lock().len()
    }

    /// Returns a read-only view of the engine state.
    ///
    /// The opponent's selected card is included only once the phase has
    /// revealed it (comparison or result).
    pub fn snapshot(&self) -> Snapshot {
        let phase = *self.state.lock();
        let selected = *self.selected.lock();
        let revealed = matches!(phase, GamePhase::Comparison | GamePhase::Result);

        Snapshot {
            phase,
            round: *self.round.lock(),
            chips: *self.chips.lock(),
            pot: *self.pot.lock(),
            current_bet: *self.current_bet.lock(),
            is_player_turn: *self.player_turn.lock(),
            player_deck: self.player_deck.lock().clone(),
            opponent_deck_len: self.opponent_deck.lock().len(),
            player_card: selected.player,
            opponent_card: if revealed { selected.opponent } else { None },
            opponent_card_chosen: selected.opponent.is_some(),
            time_remaining: *self.time_remaining.lock(),
            message: self.message.lock().clone(),
        }
    }

    /// Returns the current status line.
    pub fn message(&self) -> String {
        self.message.lock().clone()
    }

    fn set_message(&self, message: String) {
        *self.message.lock() = message;
    }
}
