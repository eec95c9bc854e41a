mod itinerary_summary;
mod stop_visit;
mod trip_qualifier;

pub use itinerary_summary::ItinerarySummary;
pub use stop_visit::StopVisit;
pub use trip_qualifier::{build_itineraries, trip_stop_visits, VisitFlags};
