use itertools::Itertools;

#[derive(thiserror::Error, Debug)]
pub enum ScheduleError {
    #[error("Failed to parse gtfs feed into records: {0}")]
    BundleRead(#[from] gtfs_structures::Error),
    #[error("GTFS feed is missing required file: {0}")]
    MissingFile(String),
    #[error("trip '{trip_id}' has a stop time referencing unknown stop '{stop_id}'")]
    UnknownStop { trip_id: String, stop_id: String },
    #[error("trip '{trip_id}' references unknown route '{route_id}'")]
    UnknownRoute { trip_id: String, route_id: String },
    #[error("Missing both arrival and departure times for stop '{stop_id}' on trip '{trip_id}'")]
    MissingAllStopTimes { trip_id: String, stop_id: String },
    #[error("error due to dataset contents: {0}")]
    InvalidData(String),
    #[error("{msg}: {source}")]
    Config {
        msg: String,
        source: config::ConfigError,
    },
    #[error("failure writing report: {0}")]
    Output(String),
}

/// collapses a list of errors, such as one per unreadable feed file, into
/// a single error.
pub fn combined_read_error(errors: &[ScheduleError]) -> ScheduleError {
    let concatenated = errors.iter().map(|e| e.to_string()).join("\n  ");
    ScheduleError::MissingFile(format!("[\n  {concatenated}\n]"))
}
