//! Error types for table operations.

use thiserror::Error;

/// The deck ran out of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct DeckExhausted;

/// The console stopped providing input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("console input closed")]
pub struct ConsoleClosed;

/// A console token that could not be accepted.
///
/// These never leave the prompt loop; the player is asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// Not a whole number.
    #[error("not a whole number")]
    NotANumber,
    /// Zero where a positive amount is required.
    #[error("amount must be greater than zero")]
    NotPositive,
    /// A number outside the accepted range.
    #[error("expected a number from {min} to {max}")]
    OutOfRange {
        /// Lowest accepted value.
        min: u8,
        /// Highest accepted value.
        max: u8,
    },
    /// Anything other than a yes/no answer.
    #[error("expected y or n")]
    NotYesNo,
}

/// Errors that can end a lap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LapError {
    /// The deck could not supply a card.
    #[error(transparent)]
    DeckExhausted(#[from] DeckExhausted),
    /// The console closed mid-lap.
    #[error(transparent)]
    ConsoleClosed(#[from] ConsoleClosed),
    /// No players are seated.
    #[error("no players are seated")]
    NoPlayers,
}

/// Errors that can occur when managing seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeatError {
    /// Every seat is taken.
    #[error("the table is full")]
    TableFull,
    /// Seat not found.
    #[error("seat not found")]
    NotFound,
}
