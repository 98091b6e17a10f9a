use alloc::format;
use alloc::string::ToString;

use crate::console::{Console, prompt_until};
use crate::error::ConsoleClosed;
use crate::input::{parse_cash, parse_player_count, parse_yes_no};
use crate::options::GameOptions;
use crate::participant::Participant;

use super::GameSession;

impl GameSession {
    /// Sets up a table by asking at the console how many players will
    /// play, whether the dealer joins, and each player's name and cash.
    ///
    /// A lone player always plays against the dealer.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleClosed`] if input ends before setup completes.
    pub fn invite<C: Console + ?Sized>(
        console: &mut C,
        options: GameOptions,
        seed: u64,
    ) -> Result<Self, ConsoleClosed> {
        let max = options.seat_limit();
        let count = prompt_until(
            console,
            &format!("How many human players will play (max {max})? "),
            None,
            |token| parse_player_count(token, max),
        )?;

        let dealer_plays = if count == 1 {
            true
        } else {
            prompt_until(console, "Play with dealer (y/n)? ", None, parse_yes_no)?
        };

        let mut session = Self::new(options, seed);
        session.set_dealer_plays(dealer_plays);

        for index in 1..=count {
            let answer = console.prompt_line(&format!("Player {index}, what's your name? "))?;
            let name = match answer.trim() {
                "" => format!("Player {index}"),
                name => name.to_string(),
            };

            let cash = prompt_until(
                console,
                &format!("{name}, input your start cash: "),
                Some("Invalid cash amount"),
                parse_cash,
            )?;

            session.players.push(Participant::player(name, cash));
        }

        log::info!(
            "table set up with {count} players, dealer {}",
            if dealer_plays { "in" } else { "out" }
        );
        Ok(session)
    }
}
