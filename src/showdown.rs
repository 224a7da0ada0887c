//! Showdown resolution and reward arithmetic.

use crate::card::CardKind;

#[cfg(feature = "std")]
fn floor_amount(amount: f64) -> usize {
    amount.floor() as usize
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn floor_amount(amount: f64) -> usize {
    libm::floor(amount) as usize
}

/// Which side of a [`resolve`] call won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowdownWinner {
    /// The first (actor) card wins.
    Actor,
    /// The second (opponent) card wins.
    Opponent,
    /// Same kind on both sides.
    Draw,
}

/// Result of comparing two revealed cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Showdown {
    /// The winning side, relative to the argument order of [`resolve`].
    pub winner: ShowdownWinner,
    /// Payout multiplier of the winning kind (1.0 on a draw).
    pub multiplier: f64,
}

/// Compares two card kinds and returns the winner and its multiplier.
///
/// The kinds form a three-cycle (Emperor > Citizen > Slave > Emperor), so
/// for distinct kinds exactly one side wins. The returned multiplier always
/// belongs to the winning kind, which is why loss accounting calls this a
/// second time with the arguments swapped instead of reusing the first
/// result.
#[must_use]
pub fn resolve(actor: CardKind, opponent: CardKind) -> Showdown {
    if actor == opponent {
        return Showdown {
            winner: ShowdownWinner::Draw,
            multiplier: 1.0,
        };
    }

    if actor.beats() == opponent {
        Showdown {
            winner: ShowdownWinner::Actor,
            multiplier: actor.multiplier(),
        }
    } else {
        Showdown {
            winner: ShowdownWinner::Opponent,
            multiplier: opponent.multiplier(),
        }
    }
}

/// Computes the net profit credited for a showdown win.
///
/// The full stake (`bet + ante`) was already debited when it was paid, so
/// the winner receives only the profit: `floor((bet + ante) * multiplier)`
/// minus the stake. Flooring happens once, on the total return.
///
/// ```
/// assert_eq!(ecrs::calculate_reward(23, 1.44, 10), 14);
/// assert_eq!(ecrs::calculate_reward(0, 9.0, 10), 80);
/// ```
#[must_use]
pub fn calculate_reward(bet: usize, multiplier: f64, ante: usize) -> usize {
    let stake = bet + ante;
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for chip amounts"
    )]
    let total_return = floor_amount(stake as f64 * multiplier);
    total_return.saturating_sub(stake)
}

/// Computes the loss advertised for a showdown defeat.
///
/// The losing side's stake is scaled by the *winner's* multiplier.
#[must_use]
pub fn calculate_loss(bet: usize, multiplier: f64, ante: usize) -> usize {
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for chip amounts"
    )]
    floor_amount((bet + ante) as f64 * multiplier)
}
