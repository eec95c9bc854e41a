pub mod date;
pub mod feed;
pub mod itinerary;
mod od_query;
mod output_event;
pub mod pipeline;
pub mod report;
mod schedule_error;
mod time_of_day;
pub mod timestamp;

pub use feed::{
    ExceptionKind, Feed, FeedIndex, Route, ServiceDateException, Stop, StopTime, Trip,
};
pub use itinerary::{ItinerarySummary, StopVisit};
pub use od_query::OdQuery;
pub use output_event::OutputEvent;
pub use report::ReportFormat;
pub use schedule_error::ScheduleError;
pub use time_of_day::TimeOfDay;
pub use timestamp::LocalOffset;
