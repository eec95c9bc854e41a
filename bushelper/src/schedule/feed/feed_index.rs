use std::collections::HashMap;

use chrono::NaiveDate;

use super::{ExceptionKind, Feed, Route, StopTime, Trip};
use crate::schedule::schedule_error::ScheduleError;

/// lookup tables over a [`Feed`], built once and read for the rest of the run.
///
/// multi-map values keep feed order, except stop times which are ordered
/// by stop_sequence.
pub struct FeedIndex<'a> {
    routes: HashMap<&'a str, &'a Route>,
    trips_by_route: HashMap<&'a str, Vec<&'a Trip>>,
    stop_names: HashMap<&'a str, &'a str>,
    stop_times_by_trip: HashMap<&'a str, Vec<&'a StopTime>>,
    added_dates_by_service: HashMap<&'a str, Vec<NaiveDate>>,
}

impl<'a> FeedIndex<'a> {
    pub fn new(feed: &'a Feed) -> FeedIndex<'a> {
        let routes = feed.routes.iter().map(|r| (r.id.as_str(), r)).collect();

        let mut trips_by_route: HashMap<&str, Vec<&Trip>> = HashMap::new();
        for trip in feed.trips.iter() {
            trips_by_route
                .entry(trip.route_id.as_str())
                .or_default()
                .push(trip);
        }

        let stop_names = feed
            .stops
            .iter()
            .map(|s| (s.id.as_str(), s.name.as_str()))
            .collect();

        let mut stop_times_by_trip: HashMap<&str, Vec<&StopTime>> = HashMap::new();
        for stop_time in feed.stop_times.iter() {
            stop_times_by_trip
                .entry(stop_time.trip_id.as_str())
                .or_default()
                .push(stop_time);
        }
        // stable, so duplicate sequence numbers keep file order
        for stop_times in stop_times_by_trip.values_mut() {
            stop_times.sort_by_key(|st| st.stop_sequence);
        }

        let mut added_dates_by_service: HashMap<&str, Vec<NaiveDate>> = HashMap::new();
        for exception in feed
            .exceptions
            .iter()
            .filter(|e| e.kind == ExceptionKind::Added)
        {
            added_dates_by_service
                .entry(exception.service_id.as_str())
                .or_default()
                .push(exception.date);
        }

        FeedIndex {
            routes,
            trips_by_route,
            stop_names,
            stop_times_by_trip,
            added_dates_by_service,
        }
    }

    /// the route operating this trip.
    pub fn route(&self, trip: &Trip) -> Result<&'a Route, ScheduleError> {
        self.routes
            .get(trip.route_id.as_str())
            .copied()
            .ok_or_else(|| ScheduleError::UnknownRoute {
                trip_id: trip.id.clone(),
                route_id: trip.route_id.clone(),
            })
    }

    pub fn trips_for_route(&self, route_id: &str) -> &[&'a Trip] {
        self.trips_by_route
            .get(route_id)
            .map(|trips| trips.as_slice())
            .unwrap_or_default()
    }

    /// display name of a stop visited by the given trip. the trip is only
    /// used to describe a failed lookup.
    pub fn stop_name(&self, trip_id: &str, stop_id: &str) -> Result<&'a str, ScheduleError> {
        self.stop_names
            .get(stop_id)
            .copied()
            .ok_or_else(|| ScheduleError::UnknownStop {
                trip_id: trip_id.to_string(),
                stop_id: stop_id.to_string(),
            })
    }

    /// stop times of a trip in ascending stop_sequence order.
    pub fn stop_times(&self, trip_id: &str) -> &[&'a StopTime] {
        self.stop_times_by_trip
            .get(trip_id)
            .map(|stop_times| stop_times.as_slice())
            .unwrap_or_default()
    }

    /// dates explicitly added for a service in calendar_dates.txt, in feed order.
    pub fn added_dates(&self, service_id: &str) -> &[NaiveDate] {
        self.added_dates_by_service
            .get(service_id)
            .map(|dates| dates.as_slice())
            .unwrap_or_default()
    }
}
