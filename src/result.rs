//! Lap result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::chips::Chips;

/// How the pot was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every player busted and no dealer sat in; the pot is void.
    NoWinner,
    /// The dealer takes the whole pot.
    DealerWins,
    /// The dealer tied the best players and shares the pot with them.
    Draw,
    /// The best players share the pot.
    PlayersWin,
}

/// Who a payout goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient {
    /// The player at this seat index.
    Player(usize),
    /// The dealer.
    Dealer,
}

/// A share of the pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payout {
    /// Who receives the share.
    pub recipient: Recipient,
    /// The share.
    pub amount: Chips,
}

/// Result of a single lap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LapResult {
    /// Lap number, starting at 1.
    pub lap: u32,
    /// Bet placed by every seat.
    pub bet: Chips,
    /// Sum of all bets.
    pub pot: Chips,
    /// Best non-busted player total, if any player stayed in.
    pub best_value: Option<u8>,
    /// Dealer's final total when the dealer played.
    pub dealer_value: Option<u8>,
    /// How the pot was resolved.
    pub outcome: Outcome,
    /// Shares paid out, players by seat and then the dealer.
    pub payouts: Vec<Payout>,
}

impl LapResult {
    /// Returns the total paid to `recipient`.
    #[must_use]
    pub fn paid_to(&self, recipient: Recipient) -> Chips {
        self.payouts
            .iter()
            .filter(|payout| payout.recipient == recipient)
            .fold(Chips::ZERO, |total, payout| total + payout.amount)
    }

    /// Returns the total paid out.
    #[must_use]
    pub fn total_paid(&self) -> Chips {
        self.payouts
            .iter()
            .fold(Chips::ZERO, |total, payout| total + payout.amount)
    }
}
