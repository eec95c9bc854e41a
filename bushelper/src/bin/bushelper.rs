//! prints every scheduled trip of a GTFS feed that leaves one of the given
//! origin stops and later reaches the destination stop, ordered by departure.
use bushelper::app::BusHelperApp;
use clap::Parser;

fn main() {
    env_logger::init();
    let app = BusHelperApp::parse();
    if let Err(e) = app.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
