use gtfs_structures::{CalendarDate, Exception, RawGtfs, RawStopTime, RawTrip};
use itertools::Itertools;

use super::{ExceptionKind, Route, ServiceDateException, Stop, StopTime, Trip};
use crate::schedule::{
    schedule_error::{combined_read_error, ScheduleError},
    TimeOfDay,
};

/// all records of a GTFS feed needed to build itineraries, in file order.
#[derive(Clone, Debug, Default)]
pub struct Feed {
    pub routes: Vec<Route>,
    pub trips: Vec<Trip>,
    pub stops: Vec<Stop>,
    pub stop_times: Vec<StopTime>,
    pub exceptions: Vec<ServiceDateException>,
}

impl Feed {
    /// reads a GTFS feed from a directory or zip archive.
    pub fn read(path: &str) -> Result<Feed, ScheduleError> {
        let raw = RawGtfs::new(path)?;
        let feed = Feed::try_from(raw)?;
        log::info!(
            "read feed '{path}' with {} routes, {} trips, {} stops, {} stop times, {} calendar exceptions",
            feed.routes.len(),
            feed.trips.len(),
            feed.stops.len(),
            feed.stop_times.len(),
            feed.exceptions.len()
        );
        Ok(feed)
    }
}

impl TryFrom<RawGtfs> for Feed {
    type Error = ScheduleError;

    fn try_from(raw: RawGtfs) -> Result<Self, Self::Error> {
        let (routes, trips, stops, stop_times) =
            match (raw.routes, raw.trips, raw.stops, raw.stop_times) {
                (Ok(routes), Ok(trips), Ok(stops), Ok(stop_times)) => {
                    (routes, trips, stops, stop_times)
                }
                (routes, trips, stops, stop_times) => {
                    let errors = [
                        routes.err(),
                        trips.err(),
                        stops.err(),
                        stop_times.err(),
                    ]
                    .into_iter()
                    .flatten()
                    .map(ScheduleError::from)
                    .collect_vec();
                    return Err(combined_read_error(&errors));
                }
            };

        let calendar_dates = match raw.calendar_dates {
            Some(result) => result?,
            None => {
                log::warn!("feed has no calendar_dates.txt, no service dates will be active");
                vec![]
            }
        };

        Ok(Feed {
            routes: routes
                .into_iter()
                .map(|r| Route {
                    id: r.id,
                    short_name: r.short_name.unwrap_or_default(),
                })
                .collect(),
            trips: trips.into_iter().map(convert_trip).collect(),
            stops: stops
                .into_iter()
                .map(|s| Stop {
                    name: s.name.clone().unwrap_or_else(|| s.id.clone()),
                    id: s.id,
                })
                .collect(),
            stop_times: stop_times
                .into_iter()
                .map(convert_stop_time)
                .collect::<Result<Vec<_>, _>>()?,
            exceptions: calendar_dates.into_iter().map(convert_exception).collect(),
        })
    }
}

fn convert_trip(trip: RawTrip) -> Trip {
    Trip {
        id: trip.id,
        route_id: trip.route_id,
        service_id: trip.service_id,
        headsign: trip.trip_headsign.unwrap_or_default(),
    }
}

/// non-timepoint stop times may leave one of arrival/departure blank. the
/// missing side takes the value of the other.
fn convert_stop_time(stop_time: RawStopTime) -> Result<StopTime, ScheduleError> {
    let (arrival, departure) = match (stop_time.arrival_time, stop_time.departure_time) {
        (Some(arrival), Some(departure)) => (arrival, departure),
        (Some(arrival), None) => (arrival, arrival),
        (None, Some(departure)) => (departure, departure),
        (None, None) => {
            return Err(ScheduleError::MissingAllStopTimes {
                trip_id: stop_time.trip_id,
                stop_id: stop_time.stop_id,
            })
        }
    };
    Ok(StopTime {
        trip_id: stop_time.trip_id,
        stop_id: stop_time.stop_id,
        stop_sequence: stop_time.stop_sequence,
        arrival: TimeOfDay::from_seconds(arrival),
        departure: TimeOfDay::from_seconds(departure),
    })
}

fn convert_exception(calendar_date: CalendarDate) -> ServiceDateException {
    let kind = match calendar_date.exception_type {
        Exception::Added => ExceptionKind::Added,
        Exception::Deleted => ExceptionKind::Removed,
    };
    ServiceDateException {
        service_id: calendar_date.service_id,
        date: calendar_date.date,
        kind,
    }
}

#[cfg(test)]
mod test {
    use super::Feed;
    use crate::schedule::{ExceptionKind, TimeOfDay};
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn fixture(name: &str) -> String {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("test")
            .join(name);
        path.to_str()
            .unwrap_or_else(|| panic!("Failed to interpret {path:?} as string"))
            .to_string()
    }

    #[test]
    fn test_e2e_read_simple_feed() {
        let feed = Feed::read(&fixture("simple_feed")).expect("fixture feed should load");

        assert_eq!(feed.routes.len(), 1);
        assert_eq!(feed.routes[0].short_name, "12");
        assert_eq!(feed.trips.len(), 2);
        let t1 = feed
            .trips
            .iter()
            .find(|t| t.id == "T1")
            .expect("T1 should exist");
        assert_eq!(t1.headsign, "Downtown");
        assert_eq!(feed.stops.len(), 3);

        // blank arrival/departure fields borrow from the other side
        let a = feed
            .stop_times
            .iter()
            .find(|st| st.trip_id == "T1" && st.stop_id == "A")
            .expect("T1 should call at A");
        assert_eq!(a.arrival, TimeOfDay::from_seconds(8 * 3600));
        assert_eq!(a.departure, TimeOfDay::from_seconds(8 * 3600));

        let added = feed
            .exceptions
            .iter()
            .filter(|e| e.kind == ExceptionKind::Added)
            .map(|e| e.date)
            .collect::<Vec<_>>();
        assert!(added.contains(&NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()));
        assert!(feed
            .exceptions
            .iter()
            .any(|e| e.kind == ExceptionKind::Removed));
    }

    #[test]
    fn test_read_missing_feed_fails() {
        let result = Feed::read(&fixture("does_not_exist"));
        assert!(result.is_err());
    }
}
