use std::time::Duration;

use chrono_tz::Tz;
use tracing::{debug, error, instrument};

use crate::error::Result;
use crate::model::Match;
use crate::scraper::{self, matches::parse_matches_page, BASE_URL};
use crate::timezone::{self, DEFAULT_TZ};

/// The main entry point for scraping vlr.gg.
///
/// `VlrClient` wraps a [`reqwest::Client`] and exposes the upcoming-match
/// scrape used for calendar generation.
///
/// # Examples
///
/// ```no_run
/// # async fn example() {
/// use vlr_calendar::VlrClient;
///
/// let client = VlrClient::new();
/// let matches = client.scrape_upcoming_matches(5).await;
/// println!("found {} matches", matches.len());
/// # }
/// ```
pub struct VlrClient {
    http: reqwest::Client,
}

/// Deadline for each page fetch; a timed-out page is skipped like any
/// other fetch failure.
const PAGE_TIMEOUT: Duration = Duration::from_secs(30);

impl VlrClient {
    /// Create a new client with default settings.
    ///
    /// Panics if the TLS backend cannot be initialized, the same
    /// condition under which [`reqwest::Client::new`] panics.
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .timeout(PAGE_TIMEOUT)
            .build()
            .expect("failed to build http client");
        Self { http }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { http: client }
    }

    /// Scrape the upcoming-matches listing across `pages` pages.
    ///
    /// The site's display time zone is resolved once up front, falling
    /// back to [`DEFAULT_TZ`]. Pages are fetched sequentially; a failed
    /// page is logged and skipped so a partial result still comes back.
    /// This never fails outright: a total failure is an empty vec.
    #[instrument(skip(self))]
    pub async fn scrape_upcoming_matches(&self, pages: u8) -> Vec<Match> {
        let tz = self.detect_time_zone().await.unwrap_or(DEFAULT_TZ);
        debug!(zone = %tz, "interpreting listed times");

        let mut bodies = Vec::new();
        for page in 1..=pages {
            let url = format!("{BASE_URL}/matches?page={page}");
            bodies.push((page, scraper::fetch_page(&self.http, &url).await));
        }
        collect_matches(bodies, tz)
    }

    /// Resolve the site's current display time zone from the landing page.
    #[instrument(skip(self))]
    pub async fn detect_time_zone(&self) -> Option<Tz> {
        match scraper::fetch_page(&self.http, BASE_URL).await {
            Ok(body) => timezone::detect_time_zone(&body),
            Err(e) => {
                error!(error = %e, "failed to fetch landing page for zone detection");
                None
            }
        }
    }
}

impl Default for VlrClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse each successfully fetched page body in page order, skipping
/// failed and unparsable pages. A total failure is an empty vec, so a
/// partial result always comes back and nothing propagates upward.
fn collect_matches(bodies: impl IntoIterator<Item = (u8, Result<String>)>, tz: Tz) -> Vec<Match> {
    let mut matches = Vec::new();
    for (page, body) in bodies {
        let body = match body {
            Ok(body) => body,
            Err(e) => {
                error!(page, error = %e, "skipping matches page");
                continue;
            }
        };
        match parse_matches_page(&body, tz) {
            Ok(page_matches) => {
                debug!(page, count = page_matches.len(), "parsed matches page");
                matches.extend(page_matches);
            }
            Err(e) => error!(page, error = %e, "skipping unparsable matches page"),
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VlrError;
    use chrono::{NaiveTime, TimeZone, Utc};

    const PAGE_ONE: &str = r#"
        <html><body><div id="wrapper">
        <div class="col mod-1">
            <div class="wf-label mod-large">Sat, February 7Today</div>
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
            </div>
        </div>
        </div></body></html>
    "#;

    fn failed_page(page: u8) -> (u8, crate::Result<String>) {
        (
            page,
            Err(VlrError::UnexpectedStatus {
                url: format!("{BASE_URL}/matches?page={page}"),
                status: reqwest::StatusCode::BAD_GATEWAY,
            }),
        )
    }

    #[test]
    fn failed_page_is_skipped_and_partial_result_returned() {
        let tz = chrono_tz::Europe::Berlin;
        let bodies = vec![(1, Ok(PAGE_ONE.to_string())), failed_page(2)];
        let matches = collect_matches(bodies, tz);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].home_team, "Team A");
        assert_eq!(matches[0].away_team, "Team B");
        assert_eq!(matches[0].event, "Region Kickoff");

        // The "Today" label resolves to 3:00 PM on the current date in
        // the supplied zone.
        let today = Utc::now().with_timezone(&tz).date_naive();
        let expected = tz
            .from_local_datetime(&today.and_time(NaiveTime::from_hms_opt(15, 0, 0).unwrap()))
            .earliest()
            .unwrap()
            .timestamp();
        assert_eq!(matches[0].start_timestamp, expected);
    }

    #[test]
    fn total_failure_yields_empty_not_error() {
        let matches = collect_matches(vec![failed_page(1), failed_page(2)], DEFAULT_TZ);
        assert!(matches.is_empty());
    }

    #[tokio::test]
    #[ignore = "hits live vlr.gg"]
    async fn test_scrape_upcoming_matches() {
        let client = VlrClient::new();
        let matches = client.scrape_upcoming_matches(1).await;
        assert!(!matches.is_empty());
        println!("{:#?}", matches);
    }
}
