use ::scraper::{CaseSensitivity, ElementRef, Html, Selector};
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::error::Result;
use crate::model::Match;
use crate::scraper::{element_text, select_text};

const MATCH_DATE_FORMAT: &str = "%a, %B %e, %Y";
const MATCH_DATE_FORMAT_ALT: &str = "%a, %b %e, %Y";
const MATCH_TIME_FORMAT: &str = "%I:%M %p";

/// Marker the listing shows for matches without a scheduled time yet.
const TBD: &str = "TBD";
/// Suffix on the date label of rows scheduled for the current day.
const TODAY_SUFFIX: &str = "Today";

/// Structural classification of one direct child of the listing container.
///
/// The listing relies on sibling position rather than nesting: a `wf-label`
/// date heading is followed by the `wf-card` holding that day's matches.
/// Classifying children up front keeps the pairing walk independent of the
/// HTML library and testable against hand-built node lists.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ListingNode {
    /// A `wf-label` date heading; trimmed text content.
    DateLabel(String),
    /// A `wf-card` holding match items. Header cards (`mod-header`) are
    /// classified as [`ListingNode::Other`].
    MatchCard(Vec<MatchFields>),
    /// Any other sibling; kept so positions survive classification.
    Other,
}

/// Raw text fields pulled from one match-item anchor, before any
/// date/time interpretation. Absent sub-elements yield empty strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct MatchFields {
    pub id: Option<u32>,
    pub time: String,
    pub home_team: String,
    pub away_team: String,
    pub event: String,
    pub series: String,
}

/// Parse the HTML of one upcoming-matches listing page into [`Match`]
/// values, interpreting listed times in `tz`.
///
/// A page without the listing container produces an empty vec, not an
/// error. Items with a "TBD" time or an unparsable id are dropped; an
/// unparsable date/time yields a match with start timestamp 0.
pub fn parse_matches_page(html: &str, tz: Tz) -> Result<Vec<Match>> {
    let document = Html::parse_document(html);
    let nodes = listing_nodes(&document)?;
    let matches = pair_date_cards(&nodes)
        .into_iter()
        .filter_map(|(label, fields)| build_match(fields, &label, tz))
        .collect();
    Ok(matches)
}

/// Classify the direct children of the listing container in document order.
fn listing_nodes(document: &Html) -> Result<Vec<ListingNode>> {
    let container_selector = Selector::parse("div.col.mod-1")?;
    let Some(container) = document.select(&container_selector).next() else {
        // Listing container absent, e.g. past the last page.
        return Ok(Vec::new());
    };

    container
        .children()
        .filter_map(ElementRef::wrap)
        .map(classify)
        .collect()
}

fn classify(element: ElementRef) -> Result<ListingNode> {
    let value = element.value();
    if value.has_class("wf-label", CaseSensitivity::CaseSensitive) {
        return Ok(ListingNode::DateLabel(element_text(&element)));
    }
    if value.has_class("wf-card", CaseSensitivity::CaseSensitive)
        && !value.has_class("mod-header", CaseSensitivity::CaseSensitive)
    {
        let item_selector = Selector::parse("a.wf-module-item.match-item")?;
        let items = element
            .select(&item_selector)
            .map(|item| match_fields(&item))
            .collect::<Result<Vec<_>>>()?;
        return Ok(ListingNode::MatchCard(items));
    }
    Ok(ListingNode::Other)
}

/// Read the raw fields of one match-item anchor.
fn match_fields(element: &ElementRef) -> Result<MatchFields> {
    let id = element
        .value()
        .attr("href")
        .and_then(|href| href.strip_prefix('/'))
        .and_then(|href| href.split('/').next())
        .and_then(|s| s.parse().ok());

    let time_selector = Selector::parse("div.match-item-time")?;
    let time = select_text(element, &time_selector);

    let team_selector = Selector::parse("div.match-item-vs-team-name")?;
    let mut teams = element.select(&team_selector);
    let home_team = teams.next().map(|t| element_text(&t)).unwrap_or_default();
    let away_team = teams.next().map(|t| element_text(&t)).unwrap_or_default();

    // The event element's first text node is the nested series div; the
    // event's own name is the last one.
    let event_selector = Selector::parse("div.match-item-event.text-of")?;
    let event = element
        .select(&event_selector)
        .next()
        .and_then(|e| e.text().map(str::trim).filter(|t| !t.is_empty()).last())
        .unwrap_or_default()
        .to_string();

    let series_selector = Selector::parse("div.match-item-event-series.text-of")?;
    let series = select_text(element, &series_selector);

    Ok(MatchFields {
        id,
        time,
        home_team,
        away_team,
        event,
        series,
    })
}

/// Pair each date label with the match card that immediately follows it.
///
/// Two-element lookahead over the classified siblings: a label whose next
/// sibling is not a match card contributes nothing, and a consumed card is
/// skipped so it is never paired twice.
pub(crate) fn pair_date_cards(nodes: &[ListingNode]) -> Vec<(String, MatchFields)> {
    let mut pairs = Vec::new();
    let mut i = 0;
    while i < nodes.len() {
        if let ListingNode::DateLabel(label) = &nodes[i] {
            if let Some(ListingNode::MatchCard(items)) = nodes.get(i + 1) {
                for item in items {
                    pairs.push((label.clone(), item.clone()));
                }
                i += 1;
            }
        }
        i += 1;
    }
    pairs
}

/// Turn raw item fields plus their date label into a [`Match`].
///
/// Returns `None` for items that must be dropped: a "TBD" time (no
/// schedule yet) or an unparsable id. Team names are kept verbatim, TBD
/// placeholders included, so bracket slots still show up in tournament
/// calendars.
fn build_match(fields: MatchFields, date_label: &str, tz: Tz) -> Option<Match> {
    if fields.time == TBD {
        debug!(
            home = %fields.home_team,
            away = %fields.away_team,
            "skipping match without a scheduled time"
        );
        return None;
    }
    let Some(id) = fields.id else {
        debug!("skipping match item without a parsable id");
        return None;
    };

    let start_timestamp = parse_start(date_label, &fields.time, tz);

    Some(Match {
        id,
        start_timestamp,
        home_team: fields.home_team,
        away_team: fields.away_team,
        event: fields.event,
        series: fields.series,
    })
}

/// Parse a date label and time into a unix timestamp, or 0 on failure.
///
/// A label ending in "Today" stands for the current date in `tz`; the
/// explicit date those labels also carry is recomputed rather than
/// trusted, so a stale page cannot shift the fixture.
fn parse_start(date_label: &str, time: &str, tz: Tz) -> i64 {
    let Ok(time) = NaiveTime::parse_from_str(time.trim(), MATCH_TIME_FORMAT) else {
        debug!(time, "failed to parse match time");
        return 0;
    };

    let date = if date_label.trim_end().ends_with(TODAY_SUFFIX) {
        Some(Utc::now().with_timezone(&tz).date_naive())
    } else {
        let label = date_label.trim();
        NaiveDate::parse_from_str(label, MATCH_DATE_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(label, MATCH_DATE_FORMAT_ALT))
            .ok()
    };
    let Some(date) = date else {
        debug!(date_label, "failed to parse date label");
        return 0;
    };

    tz.from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|dt| dt.timestamp())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: Tz = crate::timezone::DEFAULT_TZ;

    const LISTING_PAGE: &str = r#"
        <html><body><div id="wrapper">
        <div class="col mod-1">
            <div class="wf-label mod-large">Sat, February 7, 2026</div>
            <div class="wf-card">
                <a href="/490001/team-a-vs-team-b" class="wf-module-item match-item">
                    <div class="match-item-time">3:00 PM</div>
                    <div class="match-item-vs">
                        <div class="match-item-vs-team">
                            <div class="match-item-vs-team-name"><div class="text-of">Team A</div></div>
                        </div>
                        <div class="match-item-vs-team">
                            <div class="match-item-vs-team-name"><div class="text-of">Team B</div></div>
                        </div>
                    </div>
                    <div class="match-item-event text-of">
                        <div class="match-item-event-series text-of">Group A</div>
                        Region Kickoff
                    </div>
                </a>
                <a href="/490002/team-c-vs-team-d" class="wf-module-item match-item">
                    <div class="match-item-time">TBD</div>
                    <div class="match-item-vs">
                        <div class="match-item-vs-team">
                            <div class="match-item-vs-team-name"><div class="text-of">Team C</div></div>
                        </div>
                        <div class="match-item-vs-team">
                            <div class="match-item-vs-team-name"><div class="text-of">Team D</div></div>
                        </div>
                    </div>
                    <div class="match-item-event text-of">
                        <div class="match-item-event-series text-of">Group B</div>
                        Region Kickoff
                    </div>
                </a>
            </div>
            <div class="wf-label mod-large">Sun, February 8, 2026</div>
            <div class="wf-card mod-header"><div class="wf-title">Filters</div></div>
        </div>
        </div></body></html>
    "#;

    #[test]
    fn extracts_matches_in_document_order() {
        let matches = parse_matches_page(LISTING_PAGE, chrono_tz::Europe::Berlin).unwrap();
        assert_eq!(matches.len(), 1);

        let m = &matches[0];
        assert_eq!(m.id, 490001);
        assert_eq!(m.home_team, "Team A");
        assert_eq!(m.away_team, "Team B");
        assert_eq!(m.event, "Region Kickoff");
        assert_eq!(m.series, "Group A");

        let expected = chrono_tz::Europe::Berlin
            .with_ymd_and_hms(2026, 2, 7, 15, 0, 0)
            .unwrap()
            .timestamp();
        assert_eq!(m.start_timestamp, expected);
    }

    #[test]
    fn tbd_time_is_dropped() {
        let matches = parse_matches_page(LISTING_PAGE, chrono_tz::Europe::Berlin).unwrap();
        assert!(matches.iter().all(|m| m.home_team != "Team C"));
    }

    #[test]
    fn header_card_is_not_a_match_card() {
        let matches = parse_matches_page(LISTING_PAGE, chrono_tz::Europe::Berlin).unwrap();
        // The Feb 8 label is followed by a mod-header card only.
        assert!(matches.iter().all(|m| m.id != 490002));
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn missing_container_yields_empty() {
        let matches =
            parse_matches_page("<html><body><p>nothing here</p></body></html>", DEFAULT)
                .unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn pairing_requires_card_immediately_after_label() {
        let nodes = vec![
            ListingNode::DateLabel("Sat, February 7, 2026".into()),
            ListingNode::Other,
            ListingNode::MatchCard(vec![MatchFields::default()]),
        ];
        assert!(pair_date_cards(&nodes).is_empty());
    }

    #[test]
    fn consumed_card_is_not_paired_twice() {
        let item = MatchFields {
            id: Some(1),
            ..MatchFields::default()
        };
        let nodes = vec![
            ListingNode::DateLabel("Sat, February 7, 2026".into()),
            ListingNode::MatchCard(vec![item.clone(), item.clone()]),
            ListingNode::DateLabel("Sun, February 8, 2026".into()),
            ListingNode::MatchCard(vec![item]),
        ];
        let pairs = pair_date_cards(&nodes);
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].0, "Sat, February 7, 2026");
        assert_eq!(pairs[2].0, "Sun, February 8, 2026");
    }

    #[test]
    fn consecutive_labels_use_the_nearest_one() {
        let item = MatchFields {
            id: Some(1),
            ..MatchFields::default()
        };
        let nodes = vec![
            ListingNode::DateLabel("Sat, February 7, 2026".into()),
            ListingNode::DateLabel("Sun, February 8, 2026".into()),
            ListingNode::MatchCard(vec![item]),
        ];
        let pairs = pair_date_cards(&nodes);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "Sun, February 8, 2026");
    }

    #[test]
    fn today_label_uses_current_date() {
        let tz = chrono_tz::Europe::Berlin;
        let ts = parse_start("Sat, February 7Today", "3:00 PM", tz);
        let today = Utc::now().with_timezone(&tz).date_naive();
        let expected = tz
            .from_local_datetime(&today.and_time(NaiveTime::from_hms_opt(15, 0, 0).unwrap()))
            .earliest()
            .unwrap()
            .timestamp();
        assert_eq!(ts, expected);
    }

    #[test]
    fn abbreviated_month_format_is_accepted() {
        let tz = chrono_tz::UTC;
        let ts = parse_start("Sat, Feb 7, 2026", "9:30 AM", tz);
        let expected = tz
            .with_ymd_and_hms(2026, 2, 7, 9, 30, 0)
            .unwrap()
            .timestamp();
        assert_eq!(ts, expected);
    }

    #[test]
    fn unparsable_label_yields_sentinel_timestamp() {
        assert_eq!(parse_start("Coming Soon", "3:00 PM", DEFAULT), 0);
        assert_eq!(parse_start("", "3:00 PM", DEFAULT), 0);
    }

    #[test]
    fn unparsable_time_yields_sentinel_timestamp() {
        assert_eq!(parse_start("Sat, February 7, 2026", "soon", DEFAULT), 0);
    }

    #[test]
    fn tbd_team_names_are_retained() {
        let fields = MatchFields {
            id: Some(7),
            time: "3:00 PM".into(),
            home_team: "TBD".into(),
            away_team: "Team B".into(),
            event: "Playoffs".into(),
            series: "Upper Final".into(),
        };
        let m = build_match(fields, "Sat, February 7, 2026", DEFAULT).unwrap();
        assert_eq!(m.home_team, "TBD");
    }

    #[test]
    fn item_without_id_is_dropped() {
        let fields = MatchFields {
            id: None,
            time: "3:00 PM".into(),
            ..MatchFields::default()
        };
        assert!(build_match(fields, "Sat, February 7, 2026", DEFAULT).is_none());
    }
}
