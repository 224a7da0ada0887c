//! Engine phases, scheduled events, and state snapshots.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for a match to start.
    Init,
    /// The coin flip that assigns deck sides is showing.
    CoinFlip,
    /// The player is choosing a card; the selection countdown is running.
    CardSelection,
    /// The betting exchange is in progress.
    Betting,
    /// Both cards are revealed and being compared.
    Comparison,
    /// The round is settled and its outcome is showing.
    Result,
}

/// A scheduled engine step waiting to be applied by
/// [`Game::poll`](crate::Game::poll).
///
/// These replace the timer callbacks of a UI-driven loop: the driver
/// applies the queued step once its cosmetic delay has elapsed (or
/// immediately), and starting a new match discards whatever is queued, so
/// a stale step can never touch reset state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingEvent {
    /// Build both decks and open card selection.
    FinishCoinFlip,
    /// The first-moving opponent posts its mandatory opening raise.
    OpeningRaise,
    /// The opponent answers the player's bet.
    OpponentResponse,
    /// Reveal both cards, resolve the showdown, and settle.
    RevealCards,
    /// Advance to the next round or end the match.
    FinishRound,
}

/// Read-only view of the engine state after a transition.
///
/// The opponent's deck is exposed only as a count and its selected card
/// stays `None` until the comparison reveals it.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Current phase.
    pub phase: GamePhase,
    /// Current round number (1-based).
    pub round: usize,
    /// The player's chip balance.
    pub chips: usize,
    /// Chips committed by both sides this round.
    pub pot: usize,
    /// The outstanding bet.
    pub current_bet: usize,
    /// Whether the player is the side expected to act.
    pub is_player_turn: bool,
    /// The player's remaining cards.
    pub player_deck: Vec<Card>,
    /// How many hidden cards the opponent still holds.
    pub opponent_deck_len: usize,
    /// The player's selected card, if any.
    pub player_card: Option<Card>,
    /// The opponent's selected card once revealed.
    pub opponent_card: Option<Card>,
    /// Whether the opponent has a card (possibly still hidden) in play.
    pub opponent_card_chosen: bool,
    /// Selection time remaining, in timer ticks.
    pub time_remaining: u32,
    /// Human-readable status line.
    pub message: String,
}
