//! Table session and lap flow.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::chips::Chips;
use crate::console::Console;
use crate::deck::Deck;
use crate::error::{LapError, SeatError};
use crate::options::GameOptions;
use crate::participant::Participant;
use crate::result::LapResult;

mod actions;
mod bet;
mod dealer;
pub mod payout;
mod setup;
pub mod state;

pub use payout::{Contenders, Resolution, resolve};
pub use state::{Finish, ParticipantState};

/// Separator shown between turns.
pub(crate) const TURN_RULE: &str = "========================";
/// Separator shown between cards within a turn.
pub(crate) const CARD_RULE: &str = "------------------------";

/// A blackjack table: the seated players, the dealer, and the
/// generator that shuffles every lap's deck.
///
/// Players and their cash persist across laps; hands and the deck do
/// not.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Table options.
    options: GameOptions,
    /// Players in seating order.
    players: Vec<Participant>,
    /// The dealer, who only plays when `dealer_plays` is set.
    dealer: Participant,
    dealer_plays: bool,
    /// Laps played to the end.
    laps: u32,
    rng: ChaCha8Rng,
}

impl GameSession {
    /// Creates an empty table whose decks are shuffled from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Chips, GameOptions, GameSession};
    ///
    /// let mut session = GameSession::new(GameOptions::default(), 42);
    /// let seat = session.seat("Ann", Chips::from_units(100)).unwrap();
    /// assert_eq!(seat, 0);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            players: Vec::new(),
            dealer: Participant::dealer(),
            dealer_plays: false,
            laps: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seats a player and returns their seat index.
    ///
    /// # Errors
    ///
    /// Returns [`SeatError::TableFull`] once [`GameOptions::seat_limit`]
    /// players are seated.
    pub fn seat(&mut self, name: impl Into<String>, cash: Chips) -> Result<usize, SeatError> {
        if self.players.len() >= usize::from(self.options.seat_limit()) {
            return Err(SeatError::TableFull);
        }

        self.players.push(Participant::player(name, cash));
        Ok(self.players.len() - 1)
    }

    /// Sets whether the dealer takes part in the following laps.
    pub const fn set_dealer_plays(&mut self, plays: bool) {
        self.dealer_plays = plays;
    }

    /// Returns whether the dealer takes part.
    #[must_use]
    pub const fn dealer_plays(&self) -> bool {
        self.dealer_plays
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Participant] {
        &self.players
    }

    /// Returns the player at `seat`.
    #[must_use]
    pub fn player(&self, seat: usize) -> Option<&Participant> {
        self.players.get(seat)
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the number of laps played to the end. A lap cut short
    /// by an error is not counted.
    #[must_use]
    pub const fn laps_played(&self) -> u32 {
        self.laps
    }

    /// Adds cash to a player's balance between laps.
    ///
    /// # Errors
    ///
    /// Returns [`SeatError::NotFound`] if no player sits at `seat`.
    pub fn add_cash(&mut self, seat: usize, amount: Chips) -> Result<Chips, SeatError> {
        self.players
            .get_mut(seat)
            .and_then(|player| player.add_cash(amount))
            .ok_or(SeatError::NotFound)
    }

    /// Shows one summary line per participant.
    pub fn display_seats<C: Console + ?Sized>(&self, console: &mut C) {
        if self.players.is_empty() {
            console.display_line("No players");
            return;
        }

        for player in &self.players {
            console.display_line(&format!("{player}"));
        }
        if self.dealer_plays {
            console.display_line(&format!("{}", self.dealer));
        }
    }

    /// Plays one lap with a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns [`LapError::NoPlayers`] on an empty table,
    /// [`LapError::ConsoleClosed`] if input ends mid-lap, and
    /// [`LapError::DeckExhausted`] if the deck runs dry.
    pub fn play_lap<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<LapResult, LapError> {
        let deck = Deck::shuffled(&mut self.rng);
        self.play_lap_with_deck(console, deck)
    }

    /// Plays one lap drawing from `deck`.
    ///
    /// If the lap fails after bets are placed, every bet is refunded and
    /// the lap is not counted.
    ///
    /// # Errors
    ///
    /// See [`GameSession::play_lap`].
    pub fn play_lap_with_deck<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        mut deck: Deck,
    ) -> Result<LapResult, LapError> {
        if self.players.is_empty() {
            return Err(LapError::NoPlayers);
        }

        let lap = self.laps + 1;
        log::debug!("lap {lap}: {} cards in deck", deck.len());

        self.display_seats(console);
        self.clear_hands();

        let bet = self.collect_bet(console)?;
        self.place_bets(bet);

        match self.play_out(console, &mut deck, lap, bet) {
            Ok(result) => {
                self.laps = lap;
                Ok(result)
            }
            Err(err) => {
                log::warn!("lap {lap} abandoned: {err}");
                self.refund_bets(bet);
                self.clear_hands();
                Err(err)
            }
        }
    }

    /// Everything after the bets are in: deal, turns, and payout.
    fn play_out<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        deck: &mut Deck,
        lap: u32,
        bet: Chips,
    ) -> Result<LapResult, LapError> {
        self.display_seats(console);

        self.deal(deck)?;
        if self.dealer_plays {
            self.show_up_card(console);
        }

        for player in &mut self.players {
            Self::player_turn(console, player, deck)?;
            console.display_line(TURN_RULE);
        }

        let contenders = Contenders::select(self.players.iter().map(|p| p.hand().value()));

        let dealer_value = if self.dealer_plays {
            if let Some(target) = contenders.best_value() {
                self.dealer_turn(console, deck, target)?;
                console.display_line(TURN_RULE);
            }
            Some(self.dealer.hand().value())
        } else {
            None
        };

        let result = self.settle(console, lap, bet, &contenders, dealer_value);
        log::info!(
            "lap {lap}: {:?}, pot {}, paid {}",
            result.outcome,
            result.pot,
            result.total_paid()
        );

        Ok(result)
    }

    /// Plays laps until `limit` laps have been played or the console
    /// closes, and returns how many laps completed.
    ///
    /// # Errors
    ///
    /// Returns the first lap error other than a closed console.
    pub fn run<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        limit: Option<u32>,
    ) -> Result<u32, LapError> {
        let mut completed = 0;

        while limit.is_none_or(|limit| completed < limit) {
            match self.play_lap(console) {
                Ok(_) => completed += 1,
                Err(LapError::ConsoleClosed(_)) => {
                    log::info!("console closed after {completed} laps");
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        Ok(completed)
    }

    /// Clears every hand before a new lap.
    fn clear_hands(&mut self) {
        for player in &mut self.players {
            player.clear_hand();
        }
        self.dealer.clear_hand();
    }
}
