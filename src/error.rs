//! Error types for engine operations.
//!
//! Every operation leaves the engine state untouched when it returns an
//! error, so a caller that discards the `Result` gets the silent no-op
//! behavior a UI expects from an invalid click.

use thiserror::Error;

/// Errors that can occur when starting a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// A match is already in progress.
    #[error("a match is already in progress")]
    InvalidState,
}

/// Errors that can occur when selecting a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// Invalid game phase for card selection.
    #[error("invalid game phase for card selection")]
    InvalidState,
    /// The card is not in the player's deck.
    #[error("card is not in the player's deck")]
    CardNotFound,
}

/// Errors that can occur when betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game phase for betting.
    #[error("invalid game phase for betting")]
    InvalidState,
    /// It is not the player's turn to act.
    #[error("not the player's turn to act")]
    NotYourTurn,
    /// Bet amount exceeds the table maximum.
    #[error("bet amount exceeds the table maximum")]
    AboveMaximum,
    /// Insufficient chips for this bet.
    #[error("insufficient chips for this bet")]
    InsufficientChips,
}

/// Errors that can occur when folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FoldError {
    /// Invalid game phase for folding.
    #[error("invalid game phase for folding")]
    InvalidState,
    /// It is not the player's turn to act.
    #[error("not the player's turn to act")]
    NotYourTurn,
}
