use alloc::format;

use crate::chips::Chips;
use crate::console::{Console, prompt_until};
use crate::deck::Deck;
use crate::error::{ConsoleClosed, DeckExhausted};
use crate::input::parse_bet;

use super::GameSession;

impl GameSession {
    /// Asks for the lap's bet until a positive whole number is given.
    pub(super) fn collect_bet<C: Console + ?Sized>(
        &self,
        console: &mut C,
    ) -> Result<Chips, ConsoleClosed> {
        prompt_until(console, "Current bet: ", Some("Invalid bet value"), parse_bet)
    }

    /// Applies the same bet to every player, and to the dealer when the
    /// dealer plays.
    pub(super) fn place_bets(&mut self, amount: Chips) {
        for player in &mut self.players {
            player.bet(amount);
        }
        if self.dealer_plays {
            self.dealer.bet(amount);
        }

        log::debug!(
            "bet {amount} placed by {} players{}",
            self.players.len(),
            if self.dealer_plays { " and the dealer" } else { "" }
        );
    }

    /// Returns a bet placed by [`GameSession::place_bets`] to everyone
    /// who paid it.
    pub(super) fn refund_bets(&mut self, amount: Chips) {
        for player in &mut self.players {
            player.refund(amount);
        }
        if self.dealer_plays {
            self.dealer.refund(amount);
        }

        log::debug!("bet {amount} refunded");
    }

    /// Deals two cards to each player in seating order, then two to the
    /// dealer.
    pub(super) fn deal(&mut self, deck: &mut Deck) -> Result<(), DeckExhausted> {
        let seats = self.players.len() + usize::from(self.dealer_plays);
        if deck.len() < seats * 2 {
            return Err(DeckExhausted);
        }

        for player in &mut self.players {
            let first = deck.draw()?;
            let second = deck.draw()?;
            player.deal(first, second);
        }

        if self.dealer_plays {
            let first = deck.draw()?;
            let second = deck.draw()?;
            self.dealer.deal(first, second);
        }

        log::debug!("dealt {seats} hands, {} cards left", deck.len());
        Ok(())
    }

    /// Shows the dealer's first card and hides the hole card.
    pub(super) fn show_up_card<C: Console + ?Sized>(&self, console: &mut C) {
        console.display_line(self.dealer.name());
        if let Some(card) = self.dealer.hand().first() {
            console.display_line(&format!("{card}"));
        }
        console.display_line("[?]");
    }
}
