//! end-to-end itinerary extraction over an in-memory feed.
use crate::schedule::{
    itinerary, report, schedule_error::ScheduleError, Feed, FeedIndex, ItinerarySummary,
    LocalOffset, OdQuery, OutputEvent,
};

/// finds every trip that departs one of the query's origin stops and later
/// reaches its destination stop, on each date the trip's service is added,
/// and returns the resulting events ordered by departure.
///
/// any unresolvable route or stop reference aborts the run. no matches is
/// not an error and returns an empty list.
pub fn run(
    feed: &Feed,
    query: &OdQuery,
    offset: &LocalOffset,
) -> Result<Vec<OutputEvent>, ScheduleError> {
    let index = FeedIndex::new(feed);

    let routes_without_trips = feed
        .routes
        .iter()
        .filter(|r| index.trips_for_route(&r.id).is_empty())
        .count();
    if routes_without_trips > 0 {
        log::info!("{routes_without_trips} routes have no trips");
    }

    let itineraries = feed
        .trips
        .iter()
        .map(|trip| itinerary::build_itineraries(&index, trip, query))
        .collect::<Result<Vec<Vec<ItinerarySummary>>, _>>()?
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();
    log::info!(
        "{} itineraries from {:?} to '{}'",
        itineraries.len(),
        query.origins,
        query.destination
    );

    let events = itineraries
        .iter()
        .map(|itinerary| OutputEvent::from_itinerary(itinerary, query, offset))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(report::sort_events(events))
}
