use std::{fmt::Display, str::FromStr};

use chrono::Duration;

use crate::schedule::schedule_error::ScheduleError;

/// a GTFS time of day: seconds since local midnight of the service date.
///
/// values of 24:00:00 and above are valid and denote service continuing
/// past midnight. they are never wrapped back into a single day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub fn from_seconds(seconds: u32) -> TimeOfDay {
        TimeOfDay(seconds)
    }

    /// `None` if the total does not fit in a u32 of seconds.
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Option<TimeOfDay> {
        hours
            .checked_mul(3600)
            .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
            .and_then(|hm| hm.checked_add(seconds))
            .map(TimeOfDay)
    }

    pub fn seconds(&self) -> u32 {
        self.0
    }

    /// the offset from local midnight as a signed duration for use in
    /// chrono date arithmetic.
    pub fn as_duration(&self) -> Duration {
        Duration::seconds(i64::from(self.0))
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        let seconds = self.0 % 60;
        write!(f, "{hours:02}:{minutes:02}:{seconds:02}")
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    /// parses `H:MM:SS` or `HH:MM:SS`, where hours may exceed 23.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScheduleError::InvalidData(format!("invalid time of day '{s}'"));
        let parts = s
            .trim()
            .split(':')
            .map(|p| p.parse::<u32>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;
        match parts.as_slice() {
            [h, m, sec] if *m < 60 && *sec < 60 => {
                TimeOfDay::from_hms(*h, *m, *sec).ok_or_else(invalid)
            }
            _ => Err(invalid()),
        }
    }
}
