//! RFC 5545 calendar serialization.
//!
//! Output is deliberately minimal: one `VCALENDAR` with a `PUBLISH`
//! header and one `VEVENT` per match, built for calendar-subscription
//! clients that poll the generated files over webcal.

use chrono::{DateTime, Utc};

use crate::model::Match;

const PRODID: &str = "-//vlr-calendar//EN";

/// The listing does not know real match durations, so every event gets
/// a fixed two-hour slot.
const MATCH_DURATION_SECS: i64 = 2 * 60 * 60;

/// Escape text per RFC 5545. Backslash must go first so the backslashes
/// introduced for the other characters are not escaped again.
pub fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

/// Format an instant as a compact UTC "zulu" timestamp, e.g.
/// `20260207T150000Z`.
pub fn format_utc(instant: DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Deterministic event UID from the identifying fields, filtered to
/// alphanumerics plus `-_.@`. Regenerating the same fixture always
/// yields the same UID, so subscribed clients see an update rather than
/// a new event.
pub fn event_uid(m: &Match) -> String {
    format!("{}{}{}{}", m.event, m.series, m.home_team, m.away_team)
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '@'))
        .collect()
}

/// Build a complete calendar document for `matches`, titled `title`.
///
/// An empty match list still produces a valid header-only calendar;
/// team feeds must not break once a team is eliminated.
pub fn build_calendar(matches: &[Match], title: &str) -> String {
    build_calendar_at(matches, title, Utc::now())
}

/// Like [`build_calendar`] with an explicit `DTSTAMP` instant, which is
/// the only run-dependent field.
pub fn build_calendar_at(matches: &[Match], title: &str, now: DateTime<Utc>) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODID}"),
        format!("X-WR-CALNAME:{}", escape_text(title)),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
    ];
    for m in matches {
        lines.push(vevent(m, now));
    }
    lines.push("END:VCALENDAR".to_string());

    let mut document = lines.join("\r\n");
    document.push_str("\r\n");
    document
}

fn vevent(m: &Match, now: DateTime<Utc>) -> String {
    let start = DateTime::from_timestamp(m.start_timestamp, 0).unwrap_or_default();
    let end = DateTime::from_timestamp(m.start_timestamp + MATCH_DURATION_SECS, 0)
        .unwrap_or_default();
    let summary = format!("{} — {} vs {}", m.event, m.home_team, m.away_team);

    [
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}", event_uid(m)),
        format!("DTSTAMP:{}", format_utc(now)),
        format!("DTSTART:{}", format_utc(start)),
        format!("DTEND:{}", format_utc(end)),
        format!("SUMMARY:{}", escape_text(&summary)),
        format!("DESCRIPTION:{}", escape_text(&m.series)),
        "END:VEVENT".to_string(),
    ]
    .join("\r\n")
}
