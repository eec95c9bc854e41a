use std::{fmt::Display, sync::Arc};

use chrono::NaiveDate;

use super::StopVisit;
use crate::schedule::OdQuery;

/// a trip on one of its service dates, with every stop it visits in
/// stop_sequence order. trips running on several dates share their
/// stop list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItinerarySummary {
    /// the route's short name
    pub route_number: String,
    /// the trip headsign
    pub route_terminal: String,
    pub service_date: NaiveDate,
    pub stops: Arc<[StopVisit]>,
}

impl ItinerarySummary {
    /// the first visit to any of the query's origin stops.
    pub fn first_origin_visit(&self, query: &OdQuery) -> Option<&StopVisit> {
        self.stops.iter().find(|v| query.is_origin(&v.stop_id))
    }

    /// the first visit to the query's destination stop.
    pub fn first_destination_visit(&self, query: &OdQuery) -> Option<&StopVisit> {
        self.stops.iter().find(|v| query.is_destination(&v.stop_id))
    }
}

impl Display for ItinerarySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}: {}",
            self.service_date.format("%Y-%m-%d"),
            self.route_number,
            self.route_terminal
        )
    }
}
