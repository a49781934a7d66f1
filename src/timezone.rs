use ::scraper::{Html, Selector};
use chrono_tz::Tz;
use tracing::debug;

use crate::scraper::element_text;

/// Zone used for all time parsing when detection fails. Matches the
/// site's default display zone.
pub const DEFAULT_TZ: Tz = chrono_tz::America::Chicago;

/// Map a time-zone abbreviation shown on the site to a canonical zone.
///
/// Unknown abbreviations return `None`; callers substitute [`DEFAULT_TZ`].
pub fn resolve_abbreviation(abbr: &str) -> Option<Tz> {
    let tz = match abbr {
        "CET" | "CEST" => chrono_tz::Europe::Berlin,
        "PST" | "PDT" => chrono_tz::America::Los_Angeles,
        "EST" | "EDT" => chrono_tz::America::New_York,
        "BST" => chrono_tz::Europe::London,
        "GMT" | "UTC" => chrono_tz::UTC,
        _ => return None,
    };
    Some(tz)
}

/// Detect the site's current display time zone from landing-page HTML.
///
/// Looks for the first match-preview time element, whose text reads like
/// "11:00 PM CET", and resolves the trailing abbreviation. Returns `None`
/// when the element is missing, the text is not in the expected shape, or
/// the abbreviation is unknown.
pub fn detect_time_zone(html: &str) -> Option<Tz> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("div.h-match-preview-time.moment-tz-convert").ok()?;
    let Some(preview) = document.select(&selector).next() else {
        debug!("no preview time element found");
        return None;
    };

    let text = element_text(&preview);
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.len() < 3 {
        debug!(text = %text, "unexpected preview time format");
        return None;
    }

    let abbr = parts[parts.len() - 1];
    match resolve_abbreviation(abbr) {
        Some(tz) => {
            debug!(abbr, zone = %tz, "detected display time zone");
            Some(tz)
        }
        None => {
            debug!(abbr, "unrecognized time zone abbreviation");
            None
        }
    }
}
