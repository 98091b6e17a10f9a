use alloc::format;

use crate::console::{Console, prompt_until};
use crate::deck::Deck;
use crate::error::LapError;
use crate::input::parse_yes_no;
use crate::participant::Participant;

use super::state::Finish;
use super::{CARD_RULE, GameSession};

impl GameSession {
    /// Runs one player's turn.
    ///
    /// The player is offered cards until they stand, bust, or reach 21.
    /// Nothing but the shared deck is touched.
    pub(super) fn player_turn<C: Console + ?Sized>(
        console: &mut C,
        player: &mut Participant,
        deck: &mut Deck,
    ) -> Result<(), LapError> {
        player.begin_turn();

        loop {
            console.display_line(&format!("{}, your hand:", player.name()));
            console.display_line(&format!("{}", player.hand()));

            if player.hand().is_blackjack() {
                console.display_line(&format!("{}, BLACKJACK.", player.name()));
                player.finish(Finish::Blackjack);
                return Ok(());
            }

            let hit = prompt_until(console, "Next card? (y/n) ", None, parse_yes_no)?;
            if !hit {
                player.finish(Finish::Stood);
                return Ok(());
            }

            let card = deck.draw()?;
            log::debug!("{} draws {card}", player.name());
            player.hit(card);

            if player.hand().is_bust() {
                console.display_line(&format!("{}", player.hand()));
                console.display_line(&format!("{}, BUST.", player.name()));
                return Ok(());
            }

            console.display_line(CARD_RULE);
        }
    }
}
