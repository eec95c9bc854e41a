mod bushelper_app;
mod bushelper_config;

pub use bushelper_app::BusHelperApp;
pub use bushelper_config::BusHelperConfig;
