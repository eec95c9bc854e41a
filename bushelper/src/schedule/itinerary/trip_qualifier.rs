use std::sync::Arc;

use super::{ItinerarySummary, StopVisit};
use crate::schedule::{date, schedule_error::ScheduleError, FeedIndex, OdQuery, Trip};

/// progress of a single forward pass over a trip's stops.
///
/// the destination only counts once an origin has been seen on an
/// earlier visit. a stop that is both an origin and the destination
/// therefore needs two distinct visits for the trip to qualify.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisitFlags {
    pub seen_origin: bool,
    pub seen_destination: bool,
}

impl VisitFlags {
    /// folds one stop visit into the flags.
    pub fn visit(self, stop_id: &str, query: &OdQuery) -> VisitFlags {
        let seen_destination =
            self.seen_destination || (self.seen_origin && query.is_destination(stop_id));
        let seen_origin = self.seen_origin || query.is_origin(stop_id);
        VisitFlags {
            seen_origin,
            seen_destination,
        }
    }

    /// scans visits in order, left to right.
    pub fn scan(visits: &[StopVisit], query: &OdQuery) -> VisitFlags {
        visits
            .iter()
            .fold(VisitFlags::default(), |flags, v| flags.visit(&v.stop_id, query))
    }

    pub fn qualifies(&self) -> bool {
        self.seen_origin && self.seen_destination
    }
}

/// resolves the ordered stop visits of a trip. every stop must exist in
/// the feed.
pub fn trip_stop_visits(index: &FeedIndex, trip: &Trip) -> Result<Vec<StopVisit>, ScheduleError> {
    index
        .stop_times(&trip.id)
        .iter()
        .map(|st| -> Result<StopVisit, ScheduleError> {
            let stop_name = index.stop_name(&trip.id, &st.stop_id)?;
            Ok(StopVisit {
                stop_id: st.stop_id.clone(),
                stop_name: stop_name.to_string(),
                arrival: st.arrival,
                departure: st.departure,
            })
        })
        .collect()
}

/// builds one [`ItinerarySummary`] per active service date of a trip that
/// visits an origin stop and afterwards the destination stop.
///
/// route and stop references are checked for every trip, including trips
/// that end up not qualifying or have no active dates.
pub fn build_itineraries(
    index: &FeedIndex,
    trip: &Trip,
    query: &OdQuery,
) -> Result<Vec<ItinerarySummary>, ScheduleError> {
    let route = index.route(trip)?;
    let visits = trip_stop_visits(index, trip)?;

    if !VisitFlags::scan(&visits, query).qualifies() {
        return Ok(vec![]);
    }

    let stops: Arc<[StopVisit]> = visits.into();
    let itineraries = date::active_dates(index, &trip.service_id)
        .map(|service_date| ItinerarySummary {
            route_number: route.short_name.clone(),
            route_terminal: trip.headsign.clone(),
            service_date,
            stops: stops.clone(),
        })
        .collect::<Vec<_>>();
    for itinerary in itineraries.iter() {
        log::debug!("trip '{}' qualifies: {itinerary}", trip.id);
        for visit in itinerary.stops.iter() {
            log::trace!("  {visit}");
        }
    }
    Ok(itineraries)
}
