//! Winner selection and pot resolution.
//!
//! These are pure functions over hand totals so the rules can be checked
//! without dealing a single card.

use alloc::vec::Vec;

use crate::chips::Chips;
use crate::hand::BLACKJACK;
use crate::options::RemainderPolicy;
use crate::result::{Outcome, Payout, Recipient};

/// The players still in contention after every turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contenders {
    best_value: Option<u8>,
    seats: Vec<usize>,
}

impl Contenders {
    /// Picks every non-busted seat holding the best total.
    ///
    /// `totals` are the players' hand values in seating order. Ties are
    /// all kept.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::Contenders;
    ///
    /// let contenders = Contenders::select([18, 20, 20, 24]);
    /// assert_eq!(contenders.best_value(), Some(20));
    /// assert_eq!(contenders.seats(), &[1, 2]);
    /// ```
    pub fn select<I: IntoIterator<Item = u8>>(totals: I) -> Self {
        let standing: Vec<(usize, u8)> = totals
            .into_iter()
            .enumerate()
            .filter(|&(_, total)| total <= BLACKJACK)
            .collect();

        let best_value = standing.iter().map(|&(_, total)| total).max();
        let seats = standing
            .iter()
            .filter(|&&(_, total)| Some(total) == best_value)
            .map(|&(seat, _)| seat)
            .collect();

        Self { best_value, seats }
    }

    /// Returns the best non-busted total, or `None` if everyone busted.
    #[must_use]
    pub const fn best_value(&self) -> Option<u8> {
        self.best_value
    }

    /// Returns the seats holding the best total.
    #[must_use]
    pub fn seats(&self) -> &[usize] {
        &self.seats
    }

    /// Returns whether every player busted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }
}

/// How a pot is divided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Sum of every bet.
    pub pot: Chips,
    /// How the pot was resolved.
    pub outcome: Outcome,
    /// Shares, players by seat and then the dealer.
    pub payouts: Vec<Payout>,
}

/// Resolves a lap's pot.
///
/// `dealer_value` is `None` when the dealer sat out. The rules apply in
/// order: everyone busted gives the pot to the dealer (or to nobody);
/// a dealer tie splits it among the dealer and the best players; a
/// dealer at or below 21 takes it; otherwise the best players split it.
///
/// # Example
///
/// ```
/// use bjtable::{Chips, Contenders, Outcome, RemainderPolicy, resolve};
///
/// let contenders = Contenders::select([20, 17]);
/// let resolution = resolve(
///     Chips::from_units(10),
///     2,
///     Some(20),
///     &contenders,
///     RemainderPolicy::FirstSeats,
/// );
/// assert_eq!(resolution.outcome, Outcome::Draw);
/// assert_eq!(resolution.pot, Chips::from_units(30));
/// assert!(resolution.payouts.iter().all(|p| p.amount == Chips::from_units(15)));
/// ```
#[must_use]
pub fn resolve(
    bet: Chips,
    players: usize,
    dealer_value: Option<u8>,
    contenders: &Contenders,
    policy: RemainderPolicy,
) -> Resolution {
    let pot = bet * (players + usize::from(dealer_value.is_some()));

    let (outcome, recipients) = match (contenders.best_value(), dealer_value) {
        (None, None) => (Outcome::NoWinner, Vec::new()),
        (None, Some(_)) => (Outcome::DealerWins, alloc::vec![Recipient::Dealer]),
        (Some(best), Some(dealer)) if dealer == best => {
            let mut recipients = player_recipients(contenders);
            recipients.push(Recipient::Dealer);
            (Outcome::Draw, recipients)
        }
        (Some(_), Some(dealer)) if dealer <= BLACKJACK => {
            (Outcome::DealerWins, alloc::vec![Recipient::Dealer])
        }
        (Some(_), _) => (Outcome::PlayersWin, player_recipients(contenders)),
    };

    let payouts = recipients
        .iter()
        .zip(pot.split(recipients.len(), policy))
        .map(|(&recipient, amount)| Payout { recipient, amount })
        .collect();

    Resolution {
        pot,
        outcome,
        payouts,
    }
}

fn player_recipients(contenders: &Contenders) -> Vec<Recipient> {
    contenders
        .seats()
        .iter()
        .map(|&seat| Recipient::Player(seat))
        .collect()
}
