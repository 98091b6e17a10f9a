//! Table configuration options.

use core::time::Duration;

/// Most human players a table can seat.
pub const MAX_PLAYERS: u8 = 5;

/// What happens to cents left over when a pot does not split evenly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RemainderPolicy {
    /// One extra cent to each of the first recipients, players by seat
    /// and then the dealer.
    #[default]
    FirstSeats,
    /// Leftover cents are paid to nobody.
    Forfeit,
}

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use bjtable::{GameOptions, RemainderPolicy};
///
/// let options = GameOptions::default()
///     .with_max_players(3)
///     .with_dealer_delay(Duration::ZERO)
///     .with_remainder(RemainderPolicy::Forfeit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Maximum number of human players. Values outside
    /// `1..=`[`MAX_PLAYERS`] are clamped when the table is set up.
    pub max_players: u8,
    /// Pause after each card the dealer draws.
    pub dealer_delay: Duration,
    /// Handling of indivisible pot remainders.
    pub remainder: RemainderPolicy,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_players: MAX_PLAYERS,
            dealer_delay: Duration::from_secs(3),
            remainder: RemainderPolicy::FirstSeats,
        }
    }
}

impl GameOptions {
    /// Sets the maximum number of human players, clamped to
    /// `1..=`[`MAX_PLAYERS`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{GameOptions, MAX_PLAYERS};
    ///
    /// let options = GameOptions::default().with_max_players(2);
    /// assert_eq!(options.max_players, 2);
    ///
    /// let options = GameOptions::default().with_max_players(26);
    /// assert_eq!(options.max_players, MAX_PLAYERS);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, max_players: u8) -> Self {
        self.max_players = clamp_players(max_players);
        self
    }

    /// Returns the number of seats the table offers: `max_players`
    /// clamped to `1..=`[`MAX_PLAYERS`].
    #[must_use]
    pub const fn seat_limit(&self) -> u8 {
        clamp_players(self.max_players)
    }

    /// Sets the pause after each dealer draw.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_delay(Duration::from_millis(250));
    /// assert_eq!(options.dealer_delay, Duration::from_millis(250));
    /// ```
    #[must_use]
    pub const fn with_dealer_delay(mut self, delay: Duration) -> Self {
        self.dealer_delay = delay;
        self
    }

    /// Sets the remainder policy for split pots.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{GameOptions, RemainderPolicy};
    ///
    /// let options = GameOptions::default().with_remainder(RemainderPolicy::Forfeit);
    /// assert_eq!(options.remainder, RemainderPolicy::Forfeit);
    /// ```
    #[must_use]
    pub const fn with_remainder(mut self, policy: RemainderPolicy) -> Self {
        self.remainder = policy;
        self
    }
}

const fn clamp_players(count: u8) -> u8 {
    if count == 0 {
        1
    } else if count > MAX_PLAYERS {
        MAX_PLAYERS
    } else {
        count
    }
}
