//! A text-console blackjack table with optional `no_std` support.
//!
//! The crate provides a [`GameSession`] that seats players and an
//! optional dealer, then plays laps: one shared bet, two cards each,
//! player turns, a dealer turn, and a pot split among the best hands.
//! All input and output goes through the [`Console`] trait.
//!
//! # Example
//!
//! ```
//! use bjtable::{Chips, GameOptions, GameSession, ScriptedConsole};
//!
//! let mut session = GameSession::new(GameOptions::default(), 42);
//! session.seat("Ann", Chips::from_units(100)).unwrap();
//! session.set_dealer_plays(true);
//!
//! // Bet 10, then stand whenever asked.
//! let mut console = ScriptedConsole::new(["10", "n"]);
//! let result = session.play_lap(&mut console).unwrap();
//! assert_eq!(result.pot, Chips::from_units(20));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod chips;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod input;
pub mod options;
pub mod participant;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use chips::Chips;
#[cfg(feature = "std")]
pub use console::StdConsole;
pub use console::{Console, ScriptedConsole};
pub use deck::Deck;
pub use error::{ConsoleClosed, DeckExhausted, InvalidInput, LapError, SeatError};
pub use game::{Contenders, Finish, GameSession, ParticipantState, Resolution, resolve};
pub use hand::Hand;
pub use options::{GameOptions, MAX_PLAYERS, RemainderPolicy};
pub use participant::{Participant, Role};
pub use result::{LapResult, Outcome, Payout, Recipient};
