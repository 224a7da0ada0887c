//! The automated opponent's betting policy.

use rand::Rng;

use crate::card::CardKind;

/// Smallest opening raise the first-moving side may post.
pub const MIN_OPENING_RAISE: usize = 10;

/// Largest raise the policy will draw.
pub const MAX_POLICY_RAISE: usize = 50;

/// Outstanding bets above this make the opponent fold more readily.
const PRESSURE_BET: usize = 50;

/// A betting decision by the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Match the outstanding bet and go to showdown.
    Call,
    /// Post a new outstanding bet of the given amount.
    Raise(usize),
    /// Concede the round.
    Fold,
}

/// Decides the opponent's next betting action.
///
/// `current_bet` is the outstanding bet the opponent is facing, and
/// `first_mover` is whether the opponent holds the side obligated to open
/// the betting. Every decision draws one fresh random factor; an opening
/// raise additionally draws one candidate amount in `0..=50`.
///
/// The first mover must open with a raise of at least
/// [`MIN_OPENING_RAISE`]. Once any bet exists the policy only calls or
/// folds: bets over 50 are folded to 30% of the time, a live bet faced by
/// the non-opening side is called 70% of the time, and anything else is
/// called 50% of the time. The one-sided raise rule is part of the game
/// design, not a simplification of a fuller betting round.
///
/// The policy never inspects its own card; `_hand` keeps the signature
/// uniform for card-aware strategies.
pub fn decide<R: Rng + ?Sized>(
    _hand: CardKind,
    current_bet: usize,
    first_mover: bool,
    rng: &mut R,
) -> Decision {
    let factor: f64 = rng.random();

    if first_mover && current_bet == 0 {
        let candidate = rng.random_range(0..=MAX_POLICY_RAISE);
        return Decision::Raise(candidate.max(MIN_OPENING_RAISE));
    }

    if current_bet > PRESSURE_BET && factor > 0.7 {
        return Decision::Fold;
    }

    if !first_mover && current_bet > 0 {
        return if factor > 0.3 {
            Decision::Call
        } else {
            Decision::Fold
        };
    }

    if factor > 0.5 {
        Decision::Call
    } else {
        Decision::Fold
    }
}
