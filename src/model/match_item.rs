use serde::Serialize;

/// One scheduled fixture between two named teams, as shown on the
/// upcoming-matches listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Numeric match id taken from the item's href.
    pub id: u32,
    /// Scheduled start as a unix timestamp (UTC). 0 means the listed
    /// date/time could not be parsed, never a real start.
    pub start_timestamp: i64,
    pub home_team: String,
    pub away_team: String,
    /// Event (tournament) display name.
    pub event: String,
    /// Stage or group within the event, e.g. "Group A".
    pub series: String,
}
