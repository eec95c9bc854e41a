use config::{builder::DefaultState, Config, ConfigBuilder, FileFormat};
use serde::Deserialize;

use super::BusHelperApp;
use crate::schedule::{
    timestamp::deserialize_local_offset, LocalOffset, OdQuery, ReportFormat, ScheduleError,
};

/// settings for a single run, merged from an optional TOML file and the
/// command line. command line values win.
#[derive(Debug, Clone, Deserialize)]
pub struct BusHelperConfig {
    /// GTFS directory or zip archive
    pub feed: String,
    pub destination: String,
    pub origins: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_local_offset")]
    pub utc_offset: LocalOffset,
    #[serde(default)]
    pub format: ReportFormat,
}

const FEED_KEY: &str = "feed";
const DESTINATION_KEY: &str = "destination";
const ORIGINS_KEY: &str = "origins";
const UTC_OFFSET_KEY: &str = "utc_offset";
const FORMAT_KEY: &str = "format";

impl BusHelperConfig {
    /// builds the run configuration from the app's `--config` file, if any,
    /// overridden by its command line arguments.
    pub fn from_app(app: &BusHelperApp) -> Result<BusHelperConfig, ScheduleError> {
        let mut builder = Config::builder();
        if let Some(filepath) = &app.config {
            builder = builder.add_source(config::File::new(filepath, FileFormat::Toml));
        }
        let conf = BusHelperConfig::from_builder(builder, app)?;
        if conf.origins.is_empty() {
            log::warn!("no origin stops configured, the report will be empty");
        }
        Ok(conf)
    }

    /// applies command line overrides on top of some base configuration
    /// sources and deserializes the result.
    pub fn from_builder(
        builder: ConfigBuilder<DefaultState>,
        app: &BusHelperApp,
    ) -> Result<BusHelperConfig, ScheduleError> {
        let override_error = |e: config::ConfigError| ScheduleError::Config {
            msg: String::from("failed applying command line arguments"),
            source: e,
        };
        let origins = if app.origins.is_empty() {
            None
        } else {
            Some(app.origins.clone())
        };
        let config = builder
            .set_override_option(FEED_KEY, app.feed.clone())
            .map_err(override_error)?
            .set_override_option(DESTINATION_KEY, app.destination.clone())
            .map_err(override_error)?
            .set_override_option(ORIGINS_KEY, origins)
            .map_err(override_error)?
            .set_override_option(UTC_OFFSET_KEY, app.utc_offset.clone())
            .map_err(override_error)?
            .set_override_option(
                FORMAT_KEY,
                app.format.map(|f| f.as_str().to_string()),
            )
            .map_err(override_error)?
            .build()
            .map_err(|e| ScheduleError::Config {
                msg: String::from("failed reading bushelper configuration"),
                source: e,
            })?;
        config
            .try_deserialize::<BusHelperConfig>()
            .map_err(|e| ScheduleError::Config {
                msg: String::from("invalid bushelper configuration"),
                source: e,
            })
    }

    pub fn query(&self) -> OdQuery {
        OdQuery::new(self.origins.iter().cloned(), &self.destination)
    }
}
