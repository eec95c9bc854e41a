use clap::Parser;

use super::BusHelperConfig;
use crate::schedule::{pipeline, report, Feed, ReportFormat, ScheduleError};

/// lists scheduled departures from any of a set of origin stops that later
/// reach a destination stop, on every date the feed explicitly adds service.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct BusHelperApp {
    /// TOML file providing any of feed, destination, origins, utc_offset and format
    #[arg(long)]
    pub config: Option<String>,
    /// offset used to anchor service dates: 'local' for the host time zone or a value like '+01:00'
    #[arg(long)]
    pub utc_offset: Option<String>,
    /// report format, defaults to pipe
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,
    /// GTFS directory or zip archive
    pub feed: Option<String>,
    /// stop_id of the destination stop
    pub destination: Option<String>,
    /// stop_ids of the origin stops
    pub origins: Vec<String>,
}

impl BusHelperApp {
    /// reads the feed, builds the report and writes it to stdout. nothing
    /// is written if any step fails.
    pub fn run(&self) -> Result<(), ScheduleError> {
        let conf = BusHelperConfig::from_app(self)?;
        let feed = Feed::read(&conf.feed)?;
        let events = pipeline::run(&feed, &conf.query(), &conf.utc_offset)?;
        log::info!("writing {} events as {}", events.len(), conf.format.as_str());
        let mut stdout = std::io::stdout().lock();
        report::write_report(&events, conf.format, &mut stdout)
    }
}
