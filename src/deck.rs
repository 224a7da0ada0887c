//! Deck construction and queries.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, CardKind, DECK_SIZE};

/// Builds and shuffles one five-card deck.
///
/// The deck holds a single special card (Emperor when `special_is_emperor`,
/// Slave otherwise) and four Citizens, with ids `0..=4`, in uniformly
/// random order.
#[must_use]
pub fn build<R: Rng + ?Sized>(special_is_emperor: bool, rng: &mut R) -> Vec<Card> {
    let special = if special_is_emperor {
        CardKind::Emperor
    } else {
        CardKind::Slave
    };

    let mut cards = Vec::with_capacity(DECK_SIZE);
    cards.push(Card::new(special, 0));
    for id in 1..DECK_SIZE as u8 {
        cards.push(Card::new(CardKind::Citizen, id));
    }

    cards.shuffle(rng);
    cards
}

/// Returns whether the deck still holds its special card.
#[must_use]
pub fn has_special(deck: &[Card]) -> bool {
    deck.iter().any(|card| card.kind.is_special())
}

/// Removes and returns the card with the given id, if present.
pub fn take(deck: &mut Vec<Card>, id: u8) -> Option<Card> {
    let index = deck.iter().position(|card| card.id == id)?;
    Some(deck.remove(index))
}

/// Removes and returns a uniformly random card, if any remain.
pub fn draw_random<R: Rng + ?Sized>(deck: &mut Vec<Card>, rng: &mut R) -> Option<Card> {
    if deck.is_empty() {
        return None;
    }
    let index = rng.random_range(0..deck.len());
    Some(deck.remove(index))
}
