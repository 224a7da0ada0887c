//! Card types and the dominance table.

/// Card kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    /// Emperor: beats Citizen, loses to Slave.
    Emperor,
    /// Citizen: beats Slave, loses to Emperor.
    Citizen,
    /// Slave: beats Emperor, loses to Citizen.
    Slave,
}

impl CardKind {
    /// Returns the kind this kind defeats at showdown.
    #[must_use]
    pub const fn beats(self) -> Self {
        match self {
            Self::Emperor => Self::Citizen,
            Self::Citizen => Self::Slave,
            Self::Slave => Self::Emperor,
        }
    }

    /// Returns the payout multiplier applied when this kind wins.
    ///
    /// The Slave's upset over the Emperor pays 9x; the two expected wins
    /// pay 1.44x.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Emperor | Self::Citizen => 1.44,
            Self::Slave => 9.0,
        }
    }

    /// Returns whether this kind is a deck's unique special card.
    #[must_use]
    pub const fn is_special(self) -> bool {
        !matches!(self, Self::Citizen)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The kind of the card.
    pub kind: CardKind,
    /// Identifier unique within one deck.
    pub id: u8,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(kind: CardKind, id: u8) -> Self {
        Self { kind, id }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 5;
