use chrono::{DateTime, FixedOffset};

use crate::schedule::{
    schedule_error::ScheduleError, timestamp, ItinerarySummary, LocalOffset, OdQuery,
};

/// a departure from an origin stop and the matching arrival at the
/// destination, on one service date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputEvent {
    pub departure: DateTime<FixedOffset>,
    pub arrival: DateTime<FixedOffset>,
    pub origin_name: String,
    pub destination_name: String,
    pub route_number: String,
    pub route_terminal: String,
}

impl OutputEvent {
    /// resolves a qualifying itinerary into absolute times.
    ///
    /// the departure is taken from the first visit to any origin stop and
    /// the arrival from the first visit to the destination stop, each
    /// found by its own scan over the ordered stop list.
    pub fn from_itinerary(
        itinerary: &ItinerarySummary,
        query: &OdQuery,
        offset: &LocalOffset,
    ) -> Result<OutputEvent, ScheduleError> {
        let origin = itinerary.first_origin_visit(query).ok_or_else(|| {
            ScheduleError::InvalidData(format!("itinerary {itinerary} visits no origin stop"))
        })?;
        let destination = itinerary.first_destination_visit(query).ok_or_else(|| {
            ScheduleError::InvalidData(format!(
                "itinerary {itinerary} never visits destination '{}'",
                query.destination
            ))
        })?;
        let departure =
            timestamp::resolve_service_time(&itinerary.service_date, &origin.departure, offset)?;
        let arrival = timestamp::resolve_service_time(
            &itinerary.service_date,
            &destination.arrival,
            offset,
        )?;
        Ok(OutputEvent {
            departure,
            arrival,
            origin_name: origin.stop_name.clone(),
            destination_name: destination.stop_name.clone(),
            route_number: itinerary.route_number.clone(),
            route_terminal: itinerary.route_terminal.clone(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::OutputEvent;
    use crate::schedule::{ItinerarySummary, LocalOffset, OdQuery, StopVisit, TimeOfDay};
    use chrono::NaiveDate;

    fn visit(stop_id: &str, arrival: &str, departure: &str) -> StopVisit {
        StopVisit {
            stop_id: stop_id.to_string(),
            stop_name: format!("Stop {stop_id}"),
            arrival: arrival.parse::<TimeOfDay>().unwrap(),
            departure: departure.parse::<TimeOfDay>().unwrap(),
        }
    }

    fn itinerary(stops: Vec<StopVisit>) -> ItinerarySummary {
        ItinerarySummary {
            route_number: String::from("12"),
            route_terminal: String::from("Downtown"),
            service_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            stops: stops.into(),
        }
    }

    #[test]
    fn test_uses_origin_departure_and_destination_arrival() {
        let summary = itinerary(vec![
            visit("A", "07:58:00", "08:00:00"),
            visit("B", "08:09:00", "08:10:00"),
            visit("C", "08:20:00", "08:21:00"),
        ]);
        let query = OdQuery::new(["A", "B"], "C");
        let event = OutputEvent::from_itinerary(&summary, &query, &LocalOffset::utc())
            .expect("should resolve");
        assert_eq!(event.origin_name, "Stop A");
        assert_eq!(event.destination_name, "Stop C");
        assert_eq!(event.departure.to_rfc3339(), "2024-01-02T08:00:00+00:00");
        assert_eq!(event.arrival.to_rfc3339(), "2024-01-02T08:20:00+00:00");
        assert_eq!(event.route_number, "12");
        assert_eq!(event.route_terminal, "Downtown");
    }

    #[test]
    fn test_first_destination_visit_is_used() {
        // the destination scan ignores where the origin was found, so an
        // earlier pass through the destination wins.
        let summary = itinerary(vec![
            visit("C", "07:00:00", "07:00:00"),
            visit("A", "07:30:00", "07:30:00"),
            visit("C", "08:00:00", "08:00:00"),
        ]);
        let query = OdQuery::new(["A"], "C");
        let event = OutputEvent::from_itinerary(&summary, &query, &LocalOffset::utc()).unwrap();
        assert_eq!(event.departure.to_rfc3339(), "2024-01-02T07:30:00+00:00");
        assert_eq!(event.arrival.to_rfc3339(), "2024-01-02T07:00:00+00:00");
    }

    #[test]
    fn test_arrival_after_midnight() {
        let summary = itinerary(vec![
            visit("A", "23:50:00", "23:50:00"),
            visit("C", "24:10:00", "24:10:00"),
        ]);
        let query = OdQuery::new(["A"], "C");
        let event = OutputEvent::from_itinerary(&summary, &query, &LocalOffset::utc()).unwrap();
        assert_eq!(event.arrival.to_rfc3339(), "2024-01-03T00:10:00+00:00");
    }

    #[test]
    fn test_missing_destination_is_error() {
        let summary = itinerary(vec![visit("A", "08:00:00", "08:00:00")]);
        let query = OdQuery::new(["A"], "C");
        assert!(OutputEvent::from_itinerary(&summary, &query, &LocalOffset::utc()).is_err());
    }
}
