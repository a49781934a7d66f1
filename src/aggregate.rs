//! Pure grouping over the scraped match set, used to slice the one flat
//! listing into per-tournament and per-team calendars.

use std::collections::HashMap;

use itertools::Itertools;

use crate::model::Match;
use crate::regions::Tournament;

/// Group matches by event (tournament) display name.
pub fn group_by_event(matches: &[Match]) -> HashMap<String, Vec<Match>> {
    matches
        .iter()
        .cloned()
        .into_group_map_by(|m| m.event.clone())
}

/// Group matches by team display name. Every match lands in exactly two
/// buckets: its home team's and its away team's.
pub fn group_by_team(matches: &[Match]) -> HashMap<String, Vec<Match>> {
    let mut buckets: HashMap<String, Vec<Match>> = HashMap::new();
    for m in matches {
        buckets.entry(m.home_team.clone()).or_default().push(m.clone());
        buckets.entry(m.away_team.clone()).or_default().push(m.clone());
    }
    buckets
}

/// Union of the given tournaments' matches, ordered by start timestamp.
/// Tournaments without matches simply contribute nothing.
pub fn global_matches(
    by_event: &HashMap<String, Vec<Match>>,
    tournaments: &[Tournament],
) -> Vec<Match> {
    tournaments
        .iter()
        .filter_map(|t| by_event.get(&t.to_string()))
        .flatten()
        .cloned()
        .sorted_by_key(|m| m.start_timestamp)
        .collect()
}
