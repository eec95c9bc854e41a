use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::schedule::{schedule_error::ScheduleError, timestamp, OutputEvent};

/// text rendering of the itinerary report.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// one `|`-delimited line per event, no header
    #[default]
    Pipe,
    /// comma-separated rows with a header
    Csv,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Pipe => "pipe",
            ReportFormat::Csv => "csv",
        }
    }
}

/// a rendered [`OutputEvent`]. field order matches the pipe format.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// departure from the origin, seconds since the unix epoch
    pub departure_epoch: i64,
    pub departure_time: String,
    pub origin: String,
    /// arrival at the destination, seconds since the unix epoch
    pub arrival_epoch: i64,
    pub arrival_time: String,
    pub destination: String,
    pub route_number: String,
    pub route_terminal: String,
}

impl From<&OutputEvent> for ReportRow {
    fn from(event: &OutputEvent) -> Self {
        ReportRow {
            departure_epoch: timestamp::epoch_seconds(&event.departure),
            departure_time: timestamp::format_human(&event.departure),
            origin: event.origin_name.clone(),
            arrival_epoch: timestamp::epoch_seconds(&event.arrival),
            arrival_time: timestamp::format_human(&event.arrival),
            destination: event.destination_name.clone(),
            route_number: event.route_number.clone(),
            route_terminal: event.route_terminal.clone(),
        }
    }
}

impl ReportRow {
    pub fn pipe_line(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}|{}|{}",
            self.departure_epoch,
            self.departure_time,
            self.origin,
            self.arrival_epoch,
            self.arrival_time,
            self.destination,
            self.route_number,
            self.route_terminal
        )
    }
}

/// orders events by absolute departure. the sort is stable, so events
/// departing at the same instant keep the order they were produced in.
pub fn sort_events(mut events: Vec<OutputEvent>) -> Vec<OutputEvent> {
    events.sort_by_key(|e| e.departure);
    events
}

/// renders the full report into a buffer so that nothing is written
/// unless every row renders.
pub fn render_report(events: &[OutputEvent], format: ReportFormat) -> Result<Vec<u8>, ScheduleError> {
    let rows = events.iter().map(ReportRow::from);
    match format {
        ReportFormat::Pipe => {
            let mut buffer = Vec::new();
            for row in rows {
                writeln!(buffer, "{}", row.pipe_line())
                    .map_err(|e| ScheduleError::Output(format!("{e}")))?;
            }
            Ok(buffer)
        }
        ReportFormat::Csv => {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(true)
                .from_writer(vec![]);
            for row in rows {
                writer
                    .serialize(row)
                    .map_err(|e| ScheduleError::Output(format!("failed to write csv row: {e}")))?;
            }
            writer
                .into_inner()
                .map_err(|e| ScheduleError::Output(format!("failed to flush csv report: {e}")))
        }
    }
}

/// renders the report and writes it in one piece.
pub fn write_report<W: Write>(
    events: &[OutputEvent],
    format: ReportFormat,
    out: &mut W,
) -> Result<(), ScheduleError> {
    let buffer = render_report(events, format)?;
    out.write_all(&buffer)
        .and_then(|_| out.flush())
        .map_err(|e| ScheduleError::Output(format!("{e}")))
}
