//! hand-built feeds shared by unit tests.
use chrono::NaiveDate;

use super::{ExceptionKind, Feed, Route, ServiceDateException, Stop, StopTime, Trip};
use crate::schedule::TimeOfDay;

pub fn route(id: &str, short_name: &str) -> Route {
    Route {
        id: id.to_string(),
        short_name: short_name.to_string(),
    }
}

pub fn trip(id: &str, route_id: &str, service_id: &str, headsign: &str) -> Trip {
    Trip {
        id: id.to_string(),
        route_id: route_id.to_string(),
        service_id: service_id.to_string(),
        headsign: headsign.to_string(),
    }
}

pub fn stop(id: &str) -> Stop {
    Stop {
        id: id.to_string(),
        name: format!("Stop {id}"),
    }
}

/// a stop time, with times written as `HH:MM:SS`.
pub fn stop_time(
    trip_id: &str,
    stop_id: &str,
    stop_sequence: u32,
    arrival: &str,
    departure: &str,
) -> StopTime {
    StopTime {
        trip_id: trip_id.to_string(),
        stop_id: stop_id.to_string(),
        stop_sequence,
        arrival: arrival.parse::<TimeOfDay>().expect("test time"),
        departure: departure.parse::<TimeOfDay>().expect("test time"),
    }
}

pub fn added(service_id: &str, year: i32, month: u32, day: u32) -> ServiceDateException {
    ServiceDateException {
        service_id: service_id.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).expect("test date"),
        kind: ExceptionKind::Added,
    }
}

/// route "12" with one trip T1 towards "Downtown" calling at A, B and C,
/// running on 2024-01-02 only.
pub fn scenario_feed() -> Feed {
    Feed {
        routes: vec![route("R12", "12")],
        trips: vec![trip("T1", "R12", "S1", "Downtown")],
        stops: vec![stop("A"), stop("B"), stop("C")],
        stop_times: vec![
            stop_time("T1", "A", 1, "08:00:00", "08:00:00"),
            stop_time("T1", "B", 2, "08:09:00", "08:10:00"),
            stop_time("T1", "C", 3, "08:20:00", "08:20:00"),
        ],
        exceptions: vec![added("S1", 2024, 1, 2)],
    }
}
