use alloc::format;

use crate::chips::Chips;
use crate::console::Console;
use crate::deck::Deck;
use crate::error::DeckExhausted;
use crate::result::{LapResult, Outcome, Recipient};

use super::payout::{Contenders, resolve};
use super::state::{Finish, ParticipantState};
use super::{CARD_RULE, GameSession};

impl GameSession {
    /// Dealer reveals the hole card and draws until reaching `target`.
    ///
    /// Only `target` is checked, so the dealer may bust on the way.
    pub(super) fn dealer_turn<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        deck: &mut Deck,
        target: u8,
    ) -> Result<(), DeckExhausted> {
        let name = self.dealer.name();
        console.display_line(&format!("{name}'s turn:"));
        console.display_line(&format!("{name}'s hand:"));
        console.display_line(&format!("{}", self.dealer.hand()));

        self.dealer.begin_turn();

        while self.dealer.hand().value() < target {
            console.display_line(&format!("{} takes a card...", self.dealer.name()));
            let card = deck.draw()?;
            log::debug!("dealer draws {card} toward {target}");
            self.dealer.hit(card);
            console.display_line(&format!("{}", self.dealer.hand()));
            console.pause(self.options.dealer_delay);
            console.display_line(CARD_RULE);
        }

        if self.dealer.state() == ParticipantState::Acting {
            let finish = if self.dealer.hand().is_blackjack() {
                Finish::Blackjack
            } else {
                Finish::Stood
            };
            self.dealer.finish(finish);
        }

        Ok(())
    }

    /// Resolves the pot, credits the winners and announces the result.
    pub(super) fn settle<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        lap: u32,
        bet: Chips,
        contenders: &Contenders,
        dealer_value: Option<u8>,
    ) -> LapResult {
        let resolution = resolve(
            bet,
            self.players.len(),
            dealer_value,
            contenders,
            self.options.remainder,
        );

        match resolution.outcome {
            Outcome::NoWinner => console.display_line("Everyone busted, nobody wins"),
            Outcome::Draw => console.display_line("Draw"),
            Outcome::PlayersWin if resolution.payouts.len() > 1 => console.display_line("Draw"),
            Outcome::DealerWins | Outcome::PlayersWin => {}
        }

        for payout in &resolution.payouts {
            let participant = match payout.recipient {
                Recipient::Player(seat) => self.players.get_mut(seat),
                Recipient::Dealer => Some(&mut self.dealer),
            };
            let Some(participant) = participant else {
                continue;
            };

            participant.win(payout.amount);
            if participant.is_dealer() {
                console.display_line(&format!("{} wins {}", participant.name(), payout.amount));
            } else {
                console.display_line(&format!(
                    "{}, you win {}",
                    participant.name(),
                    payout.amount
                ));
            }
        }

        for player in &mut self.players {
            player.settle();
        }
        if self.dealer_plays {
            self.dealer.settle();
        }

        LapResult {
            lap,
            bet,
            pot: resolution.pot,
            best_value: contenders.best_value(),
            dealer_value,
            outcome: resolution.outcome,
            payouts: resolution.payouts,
        }
    }
}
