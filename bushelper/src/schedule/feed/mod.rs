mod feed_index;
mod gtfs_feed;
mod records;

#[cfg(test)]
pub(crate) mod test_feed;

pub use feed_index::FeedIndex;
pub use gtfs_feed::Feed;
pub use records::{ExceptionKind, Route, ServiceDateException, Stop, StopTime, Trip};
