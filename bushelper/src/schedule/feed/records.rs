use chrono::NaiveDate;

use crate::schedule::TimeOfDay;

/// a GTFS route as used by the itinerary report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    /// GTFS route identifier
    pub id: String,
    /// public-facing route number, empty if the feed does not provide one
    pub short_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trip {
    /// GTFS trip identifier
    pub id: String,
    /// GTFS route_id associated with this [`Trip`]
    pub route_id: String,
    /// service associated with this trip
    pub service_id: String,
    /// the terminal label shown on the vehicle, empty if not provided
    pub headsign: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stop {
    pub id: String,
    pub name: String,
}

/// a single scheduled call of a trip at a stop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StopTime {
    pub trip_id: String,
    pub stop_id: String,
    /// position of this call within the trip, ascending but not necessarily contiguous
    pub stop_sequence: u32,
    pub arrival: TimeOfDay,
    pub departure: TimeOfDay,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExceptionKind {
    Added,
    Removed,
}

/// an entry of calendar_dates.txt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceDateException {
    pub service_id: String,
    pub date: NaiveDate,
    pub kind: ExceptionKind,
}
