//! Minute-of-day arithmetic and "HH:MM" parsing.
//!
//! Every schedule computation in the engine runs on whole minutes since
//! midnight. [`WallClock`] keeps that number inside a single day; the only
//! arithmetic that crosses midnight is [`WallClock::minutes_until`], which
//! wraps modulo 24 hours.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A clock time as minutes since midnight, always in `0..1440`.
///
/// The canonical text form is zero-padded 24-hour `"HH:MM"`, though
/// parsing also accepts single-digit hours ("9:05").
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
pub struct WallClock(u16);

impl WallClock {
    /// Builds a clock time from minutes since midnight.
    ///
    /// Fails when `minutes` is negative or past the end of the day.
    pub fn from_minutes(minutes: i64) -> Result<Self, TimeError> {
        if (0..i64::from(MINUTES_PER_DAY)).contains(&minutes) {
            Ok(Self(minutes as u16))
        } else {
            Err(TimeError::OutOfRange { minutes })
        }
    }

    /// Reduces an arbitrary minute count into the day, wrapping across
    /// midnight in both directions.
    pub fn from_minutes_wrapped(minutes: i64) -> Self {
        Self(minutes.rem_euclid(i64::from(MINUTES_PER_DAY)) as u16)
    }

    /// Parses `"HH:MM"` into a clock time.
    ///
    /// Requires exactly two numeric fields separated by `:` with the
    /// minute field in `0..60`; anything else is a parse error.
    pub fn parse(text: &str) -> Result<Self, TimeError> {
        let parse_err = || TimeError::Parse {
            input: text.to_string(),
        };
        let (hours, minutes) = text.split_once(':').ok_or_else(parse_err)?;
        let hours = parse_field(hours).ok_or_else(parse_err)?;
        let minutes = parse_field(minutes).ok_or_else(parse_err)?;
        if minutes > 59 {
            return Err(parse_err());
        }
        Self::from_minutes(i64::from(hours) * 60 + i64::from(minutes))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Minutes from `self` forward to `other`, wrapping past midnight when
    /// `other` is earlier in the day. Equal times give zero.
    pub fn minutes_until(self, other: WallClock) -> u16 {
        (i32::from(other.0) - i32::from(self.0)).rem_euclid(i32::from(MINUTES_PER_DAY)) as u16
    }
}

fn parse_field(field: &str) -> Option<u16> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl TryFrom<u16> for WallClock {
    type Error = TimeError;

    fn try_from(minutes: u16) -> Result<Self, TimeError> {
        Self::from_minutes(i64::from(minutes))
    }
}

impl From<WallClock> for u16 {
    fn from(clock: WallClock) -> u16 {
        clock.0
    }
}

impl FromStr for WallClock {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}
