//! Hand representation and running value.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank};

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

/// A hand of cards in draw order.
///
/// The value is accumulated as cards arrive. An Ace counts 11 when that
/// keeps the running total at or below 21 and 1 otherwise, and keeps the
/// value it was given: `[10, A, 5]` is 26, not 16.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Running total.
    value: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            value: 0,
        }
    }

    /// Adds a card to the hand and returns the value it contributed.
    pub fn add_card(&mut self, card: Card) -> u8 {
        let added = self.card_value(card);
        self.cards.push(card);
        self.value = self.value.saturating_add(added);
        added
    }

    /// Value `card` would add to the current total.
    const fn card_value(&self, card: Card) -> u8 {
        match card.rank {
            Rank::Ace if self.value.saturating_add(11) > BLACKJACK => 1,
            Rank::Ace => 11,
            Rank::Jack | Rank::Queen | Rank::King => 10,
            rank => match rank.pip() {
                Some(pip) => pip,
                None => 0,
            },
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the running total.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.value > BLACKJACK
    }

    /// Returns whether the hand totals exactly 21, at any card count.
    #[must_use]
    pub const fn is_blackjack(&self) -> bool {
        self.value == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            writeln!(f, "{card}")?;
        }
        write!(f, "Value: {}", self.value)
    }
}
