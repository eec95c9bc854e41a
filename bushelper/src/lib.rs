//! timetable lookups over static GTFS feeds: which trips take you from a
//! set of origin stops to a destination stop, and when.
pub mod app;
pub mod schedule;
