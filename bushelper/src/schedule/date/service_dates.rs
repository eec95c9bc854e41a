use chrono::NaiveDate;

use crate::schedule::FeedIndex;

/// the dates on which a service runs, taken only from calendar_dates.txt
/// entries with an exception_type of "Added".
///
/// weekly patterns from calendar.txt and "Removed" exceptions are not
/// considered. dates come back in feed order, which callers must not
/// treat as sorted.
pub fn active_dates<'i>(
    index: &'i FeedIndex<'_>,
    service_id: &str,
) -> impl Iterator<Item = NaiveDate> + 'i {
    index.added_dates(service_id).iter().copied()
}

#[cfg(test)]
mod test {
    use super::active_dates;
    use crate::schedule::feed::test_feed::{added, scenario_feed};
    use crate::schedule::{ExceptionKind, FeedIndex, ServiceDateException};
    use chrono::NaiveDate;

    #[test]
    fn test_removed_exception_does_not_cancel_added_date() {
        let mut feed = scenario_feed();
        feed.exceptions.push(ServiceDateException {
            service_id: String::from("S1"),
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            kind: ExceptionKind::Removed,
        });
        let index = FeedIndex::new(&feed);
        let dates = active_dates(&index, "S1").collect::<Vec<_>>();
        assert_eq!(dates, vec![NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()]);
    }

    #[test]
    fn test_dates_keep_feed_order() {
        let mut feed = scenario_feed();
        feed.exceptions = vec![
            added("S1", 2024, 3, 10),
            added("S2", 2024, 3, 11),
            added("S1", 2024, 1, 5),
        ];
        let index = FeedIndex::new(&feed);
        let dates = active_dates(&index, "S1").collect::<Vec<_>>();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            ]
        );
    }

    #[test]
    fn test_unknown_service_has_no_dates() {
        let feed = scenario_feed();
        let index = FeedIndex::new(&feed);
        assert_eq!(active_dates(&index, "S9").count(), 0);
    }
}
