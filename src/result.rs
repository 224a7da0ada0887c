//! Round outcome types.

/// Winner of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundWinner {
    /// The player won the round.
    Player,
    /// The opponent won the round.
    Opponent,
    /// Both sides revealed the same kind.
    Draw,
}

/// Settled result of one round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundOutcome {
    /// Who won the round.
    pub winner: RoundWinner,
    /// Multiplier of the winning kind (1.0 for draws and folds).
    pub multiplier: f64,
    /// Net amount announced to the player: the profit on a win, the
    /// multiplied loss on a showdown defeat, the forfeited stake on a
    /// fold, zero on a draw.
    pub net: isize,
    /// Pot size at resolution time.
    pub pot: usize,
    /// Whether the round ended by a fold rather than a showdown.
    pub fold: bool,
}
