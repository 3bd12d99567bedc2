//! The day's prayer boundaries and the period classifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::clock::WallClock;
use crate::error::PrayerTimesError;

/// The six daily prayer names, in their natural chronological order.
///
/// Sunrise is not a prayer but ends the Fajr period, so it is carried as a
/// boundary like the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerName {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    /// All six names, chronological.
    pub const ALL: [PrayerName; 6] = [
        PrayerName::Fajr,
        PrayerName::Sunrise,
        PrayerName::Dhuhr,
        PrayerName::Asr,
        PrayerName::Maghrib,
        PrayerName::Isha,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Sunrise => "Sunrise",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }

    fn index(self) -> usize {
        match self {
            PrayerName::Fajr => 0,
            PrayerName::Sunrise => 1,
            PrayerName::Dhuhr => 2,
            PrayerName::Asr => 3,
            PrayerName::Maghrib => 4,
            PrayerName::Isha => 5,
        }
    }
}

impl fmt::Display for PrayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrayerName {
    type Err = PrayerTimesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fajr" => Ok(PrayerName::Fajr),
            "sunrise" => Ok(PrayerName::Sunrise),
            "dhuhr" => Ok(PrayerName::Dhuhr),
            "asr" => Ok(PrayerName::Asr),
            "maghrib" => Ok(PrayerName::Maghrib),
            "isha" => Ok(PrayerName::Isha),
            _ => Err(PrayerTimesError::MissingTiming { name: s.to_string() }),
        }
    }
}

/// One named boundary: the minute a prayer's period begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerBoundary {
    pub name: PrayerName,
    pub time: WallClock,
}

/// The day's six prayer boundaries, sorted by time.
///
/// Construction requires every prayer exactly once and sorts defensively,
/// so classification never depends on upstream iteration order. With fewer
/// than all six boundaries there is no well-defined partition of the day,
/// and construction fails instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    boundaries: [PrayerBoundary; 6],
}

impl Timetable {
    /// Validates and sorts a set of boundaries into a timetable.
    pub fn from_entries(mut entries: Vec<PrayerBoundary>) -> Result<Self, PrayerTimesError> {
        let mut seen = [false; 6];
        for entry in &entries {
            let slot = &mut seen[entry.name.index()];
            if *slot {
                return Err(PrayerTimesError::Duplicate {
                    name: entry.name.as_str().to_string(),
                });
            }
            *slot = true;
        }
        entries.sort_by_key(|b| b.time);
        let boundaries: [PrayerBoundary; 6] = entries
            .try_into()
            .map_err(|rest: Vec<PrayerBoundary>| PrayerTimesError::Incomplete {
                found: rest.len(),
            })?;
        Ok(Self { boundaries })
    }

    /// The boundaries in ascending time order.
    pub fn boundaries(&self) -> &[PrayerBoundary] {
        &self.boundaries
    }

    /// The boundary minute for a given prayer.
    pub fn time_of(&self, name: PrayerName) -> WallClock {
        // Every prayer is present exactly once, enforced at construction.
        self.boundaries
            .iter()
            .find(|b| b.name == name)
            .map(|b| b.time)
            .unwrap_or(self.boundaries[0].time)
    }

    /// The period a clock time falls in: the latest boundary at or before
    /// it.
    ///
    /// Minutes at or after the Isha boundary belong to Isha, and so do
    /// minutes before Fajr; the small hours are the tail of the previous
    /// night's Isha period. No wraparound happens here.
    pub fn classify(&self, point: WallClock) -> PrayerName {
        for pair in self.boundaries.windows(2) {
            if pair[0].time <= point && point < pair[1].time {
                return pair[0].name;
            }
        }
        self.boundaries[5].name
    }
}
