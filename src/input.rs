//! Validation of console tokens.

use crate::chips::Chips;
use crate::error::InvalidInput;

/// Parses a player count in `1..=max`.
///
/// # Errors
///
/// Returns [`InvalidInput::NotANumber`] for non-numeric tokens and
/// [`InvalidInput::OutOfRange`] for counts outside the table size.
pub fn parse_player_count(token: &str, max: u8) -> Result<u8, InvalidInput> {
    let count: u8 = token
        .trim()
        .parse()
        .map_err(|_| InvalidInput::NotANumber)?;

    if (1..=max).contains(&count) {
        Ok(count)
    } else {
        Err(InvalidInput::OutOfRange { min: 1, max })
    }
}

/// Parses a yes/no answer. Accepts `y`, `yes`, `n` and `no` in any case.
///
/// # Errors
///
/// Returns [`InvalidInput::NotYesNo`] for anything else.
pub fn parse_yes_no(token: &str) -> Result<bool, InvalidInput> {
    let token = token.trim();
    if token.eq_ignore_ascii_case("y") || token.eq_ignore_ascii_case("yes") {
        Ok(true)
    } else if token.eq_ignore_ascii_case("n") || token.eq_ignore_ascii_case("no") {
        Ok(false)
    } else {
        Err(InvalidInput::NotYesNo)
    }
}

/// Parses a bet: a positive whole number of units.
///
/// # Errors
///
/// Returns [`InvalidInput::NotANumber`] for anything that is not a
/// non-negative integer and [`InvalidInput::NotPositive`] for zero.
pub fn parse_bet(token: &str) -> Result<Chips, InvalidInput> {
    let units: u32 = token
        .trim()
        .parse()
        .map_err(|_| InvalidInput::NotANumber)?;

    if units == 0 {
        return Err(InvalidInput::NotPositive);
    }

    Ok(Chips::from_units(i64::from(units)))
}

/// Parses starting cash: a non-negative whole number of units.
///
/// # Errors
///
/// Returns [`InvalidInput::NotANumber`] for anything else.
pub fn parse_cash(token: &str) -> Result<Chips, InvalidInput> {
    token
        .trim()
        .parse::<u32>()
        .map(|units| Chips::from_units(i64::from(units)))
        .map_err(|_| InvalidInput::NotANumber)
}
