//! Players and the dealer.

extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt;

use crate::card::Card;
use crate::chips::Chips;
use crate::game::state::{Finish, ParticipantState};
use crate::hand::Hand;

/// Name the dealer is shown under.
pub const DEALER_NAME: &str = "Dealer";

/// Whether a participant plays with real cash or is the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A human player with a cash balance.
    Player {
        /// Current balance. May go below zero.
        cash: Chips,
    },
    /// The dealer. Bets and winnings are tracked but there is no balance.
    Dealer,
}

/// Someone seated at the table.
#[derive(Debug, Clone)]
pub struct Participant {
    name: String,
    role: Role,
    hand: Hand,
    state: ParticipantState,
    /// Sum of every bet placed, across laps.
    total_bets: Chips,
    /// Sum of every share won, across laps.
    total_winnings: Chips,
}

impl Participant {
    /// Creates a player with a starting balance.
    pub fn player(name: impl Into<String>, cash: Chips) -> Self {
        Self::with_role(name.into(), Role::Player { cash })
    }

    /// Creates the dealer.
    #[must_use]
    pub fn dealer() -> Self {
        Self::with_role(DEALER_NAME.to_string(), Role::Dealer)
    }

    const fn with_role(name: String, role: Role) -> Self {
        Self {
            name,
            role,
            hand: Hand::new(),
            state: ParticipantState::NoHand,
            total_bets: Chips::ZERO,
            total_winnings: Chips::ZERO,
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns whether this is the dealer.
    #[must_use]
    pub const fn is_dealer(&self) -> bool {
        matches!(self.role, Role::Dealer)
    }

    /// Returns the cash balance, or `None` for the dealer.
    #[must_use]
    pub const fn cash(&self) -> Option<Chips> {
        match self.role {
            Role::Player { cash } => Some(cash),
            Role::Dealer => None,
        }
    }

    /// Returns the current hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the lap state.
    #[must_use]
    pub const fn state(&self) -> ParticipantState {
        self.state
    }

    /// Returns the total of all bets placed.
    #[must_use]
    pub const fn total_bets(&self) -> Chips {
        self.total_bets
    }

    /// Returns the total of all winnings.
    #[must_use]
    pub const fn total_winnings(&self) -> Chips {
        self.total_winnings
    }

    /// Places a bet. Players pay it from their balance.
    pub fn bet(&mut self, amount: Chips) {
        self.total_bets += amount;
        if let Role::Player { cash } = &mut self.role {
            *cash -= amount;
        }
    }

    /// Takes back a bet from a lap that did not finish.
    pub fn refund(&mut self, amount: Chips) {
        self.total_bets -= amount;
        if let Role::Player { cash } = &mut self.role {
            *cash += amount;
        }
    }

    /// Credits winnings. Players receive them into their balance.
    pub fn win(&mut self, amount: Chips) {
        self.total_winnings += amount;
        if let Role::Player { cash } = &mut self.role {
            *cash += amount;
        }
    }

    /// Adds cash outside of play and returns the new balance.
    ///
    /// Returns `None` for the dealer, which has no balance.
    pub fn add_cash(&mut self, amount: Chips) -> Option<Chips> {
        match &mut self.role {
            Role::Player { cash } => {
                *cash += amount;
                Some(*cash)
            }
            Role::Dealer => None,
        }
    }

    /// Takes the two opening cards.
    pub fn deal(&mut self, first: Card, second: Card) {
        self.hand.add_card(first);
        self.hand.add_card(second);
        self.state = ParticipantState::Dealt;
    }

    /// Starts the participant's turn.
    pub const fn begin_turn(&mut self) {
        self.state = ParticipantState::Acting;
    }

    /// Takes another card. Going over 21 ends the turn as a bust.
    pub fn hit(&mut self, card: Card) {
        self.hand.add_card(card);
        if self.hand.is_bust() {
            self.state = ParticipantState::Done(Finish::Bust);
        }
    }

    /// Ends the turn.
    pub const fn finish(&mut self, finish: Finish) {
        self.state = ParticipantState::Done(finish);
    }

    /// Marks the lap as resolved for this participant.
    pub const fn settle(&mut self) {
        self.state = ParticipantState::Settled;
    }

    /// Throws away the hand before a new lap. Cash and totals are kept.
    pub fn clear_hand(&mut self) {
        self.hand = Hand::new();
        self.state = ParticipantState::NoHand;
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            Role::Player { cash } => write!(
                f,
                "{} - {}, bets: {}, win: {}",
                self.name, cash, self.total_bets, self.total_winnings
            ),
            Role::Dealer => write!(
                f,
                "{}, bets: {}, win: {}",
                self.name, self.total_bets, self.total_winnings
            ),
        }
    }
}
