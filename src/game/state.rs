//! Per-lap participant state.

/// How a participant's turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    /// Declined another card.
    Stood,
    /// Went over 21.
    Bust,
    /// Reached exactly 21.
    Blackjack,
}

/// Where a participant is within the current lap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParticipantState {
    /// No cards yet this lap.
    #[default]
    NoHand,
    /// Holding the two dealt cards.
    Dealt,
    /// Taking their turn.
    Acting,
    /// Turn over.
    Done(Finish),
    /// Lap resolved.
    Settled,
}
