use std::collections::HashSet;

/// the stops a caller wants to travel between. stop ids are opaque tokens
/// compared by exact equality and are not checked against the feed, so an
/// unknown id simply never matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OdQuery {
    pub origins: HashSet<String>,
    pub destination: String,
}

impl OdQuery {
    pub fn new<I, S>(origins: I, destination: &str) -> OdQuery
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OdQuery {
            origins: origins.into_iter().map(Into::into).collect(),
            destination: destination.to_string(),
        }
    }

    pub fn is_origin(&self, stop_id: &str) -> bool {
        self.origins.contains(stop_id)
    }

    pub fn is_destination(&self, stop_id: &str) -> bool {
        self.destination == stop_id
    }
}
