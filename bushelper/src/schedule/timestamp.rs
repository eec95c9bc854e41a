//! anchors GTFS times of day to their service date and resolves them to
//! absolute instants.
use std::{fmt::Display, str::FromStr};

use chrono::{
    format::{self, ParseError, Parsed, StrftimeItems},
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc,
};
use serde::{de::Error, Deserialize, Deserializer};

use crate::schedule::{schedule_error::ScheduleError, TimeOfDay};

/// reference instant for numeric timestamps.
pub const UNIX_EPOCH: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

/// fixed text format for human-readable timestamps, independent of locale.
pub const HUMAN_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// how local wall-clock times in the feed map to absolute instants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LocalOffset {
    /// the host's local time zone
    #[default]
    System,
    /// a constant offset from UTC
    Fixed(FixedOffset),
}

impl LocalOffset {
    pub fn utc() -> LocalOffset {
        LocalOffset::Fixed(Utc.fix())
    }

    /// resolves a local wall-clock time in this offset, see [`resolve_in`].
    pub fn resolve(&self, local: &NaiveDateTime) -> Result<DateTime<FixedOffset>, ScheduleError> {
        match self {
            LocalOffset::System => resolve_in(&Local, local),
            LocalOffset::Fixed(offset) => resolve_in(offset, local),
        }
    }
}

/// resolves a local wall-clock time in a time zone. a time repeated by a
/// daylight saving fold resolves to its earliest instant; a time skipped
/// by a daylight saving gap is an error.
pub fn resolve_in<Tz: TimeZone>(
    zone: &Tz,
    local: &NaiveDateTime,
) -> Result<DateTime<FixedOffset>, ScheduleError> {
    zone.from_local_datetime(local)
        .earliest()
        .map(|dt| dt.fixed_offset())
        .ok_or_else(|| {
            ScheduleError::InvalidData(format!(
                "local time {} does not exist, it falls in a daylight saving gap",
                local.format("%Y-%m-%dT%H:%M:%S")
            ))
        })
}

impl Display for LocalOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocalOffset::System => write!(f, "local"),
            LocalOffset::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

impl FromStr for LocalOffset {
    type Err = ScheduleError;

    /// accepts `local`, `Z`, `UTC`, or a signed `HH:MM` / `HHMM` offset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "local" => return Ok(LocalOffset::System),
            "z" | "utc" => return Ok(LocalOffset::utc()),
            _ => {}
        }
        let invalid = |e: ParseError| {
            ScheduleError::InvalidData(format!(
                "invalid utc offset '{s}', expected 'local' or a value like '+01:00': {e}"
            ))
        };
        let mut parsed = Parsed::new();
        format::parse(&mut parsed, trimmed, StrftimeItems::new("%:z")).map_err(invalid)?;
        parsed
            .to_fixed_offset()
            .map(LocalOffset::Fixed)
            .map_err(invalid)
    }
}

/// deserializes a [`LocalOffset`] from its text form.
pub fn deserialize_local_offset<'de, D>(deserializer: D) -> Result<LocalOffset, D::Error>
where
    D: Deserializer<'de>,
{
    let offset_str: String = String::deserialize(deserializer)?;
    LocalOffset::from_str(&offset_str).map_err(|e| D::Error::custom(format!("{e}")))
}

/// the local wall-clock time reached by adding a time of day to midnight
/// of the service date. no wrapping at 24h: 25:30:00 lands on the next day.
pub fn local_service_time(
    service_date: &NaiveDate,
    time: &TimeOfDay,
) -> Result<NaiveDateTime, ScheduleError> {
    service_date
        .and_time(NaiveTime::MIN)
        .checked_add_signed(time.as_duration())
        .ok_or_else(|| {
            ScheduleError::InvalidData(format!(
                "time {time} on service date {} is out of range",
                service_date.format("%Y-%m-%d")
            ))
        })
}

/// absolute instant of a time of day on a service date.
pub fn resolve_service_time(
    service_date: &NaiveDate,
    time: &TimeOfDay,
    offset: &LocalOffset,
) -> Result<DateTime<FixedOffset>, ScheduleError> {
    let local = local_service_time(service_date, time)?;
    offset.resolve(&local)
}

/// whole seconds since [`UNIX_EPOCH`].
pub fn epoch_seconds<Tz: TimeZone>(instant: &DateTime<Tz>) -> i64 {
    instant
        .with_timezone(&Utc)
        .signed_duration_since(UNIX_EPOCH)
        .num_seconds()
}

/// renders an instant with [`HUMAN_TIMESTAMP_FORMAT`].
pub fn format_human(instant: &DateTime<FixedOffset>) -> String {
    instant.format(HUMAN_TIMESTAMP_FORMAT).to_string()
}
