mod service_dates;

pub use service_dates::active_dates;
