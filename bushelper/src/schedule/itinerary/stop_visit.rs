use std::fmt::Display;

use crate::schedule::TimeOfDay;

/// one call of a trip at a stop, with the stop name already resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StopVisit {
    pub stop_id: String,
    pub stop_name: String,
    pub arrival: TimeOfDay,
    pub departure: TimeOfDay,
}

impl Display for StopVisit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.departure, self.stop_name)
    }
}

#[cfg(test)]
mod test {
    use super::StopVisit;
    use crate::schedule::TimeOfDay;

    #[test]
    fn test_display_shows_departure_and_name() {
        let visit = StopVisit {
            stop_id: String::from("B"),
            stop_name: String::from("Bravo Square"),
            arrival: TimeOfDay::from_seconds(8 * 3600 + 9 * 60),
            departure: TimeOfDay::from_seconds(8 * 3600 + 10 * 60),
        };
        assert_eq!(visit.to_string(), "08:10:00 - Bravo Square");
    }
}
