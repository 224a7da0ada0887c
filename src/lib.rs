//! An Emperor/Citizen/Slave card-betting game engine with optional
//! `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full match flow:
//! the coin flip that assigns the two five-card decks, card selection with
//! a countdown, the ante-and-single-raise betting exchange against a
//! randomized opponent, showdown resolution with payout multipliers, and
//! the round/match lifecycle. A presentation layer drives the engine
//! through a handful of actions and renders [`Snapshot`]s after every
//! transition; the opponent's "thinking time" surfaces as
//! [`PendingEvent`]s the driver applies at its own pace.
//!
//! # Example
//!
//! ```no_run
//! use ecrs::{Game, GameOptions};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! let _ = game.start_match();
//! while game.poll().is_some() {}
//! let snapshot = game.snapshot();
//! let _ = snapshot;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod opponent;
pub mod options;
pub mod result;
pub mod showdown;
mod sync;

// Re-export main types
pub use card::{Card, CardKind, DECK_SIZE};
pub use error::{BetError, FoldError, SelectError, StartError};
pub use game::{Game, GamePhase, PendingEvent, SelectedCards, Snapshot, match_over};
pub use opponent::Decision;
pub use options::GameOptions;
pub use result::{RoundOutcome, RoundWinner};
pub use showdown::{Showdown, ShowdownWinner, calculate_loss, calculate_reward, resolve};
