use serde::Serialize;

/// A generated calendar: its display name and the file it was written to.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarSource {
    pub name: String,
    pub file_name: String,
}

/// The calendars generated for one region.
#[derive(Debug, Clone, Serialize)]
pub struct RegionFeed {
    pub name: String,
    pub tournaments: Vec<CalendarSource>,
    pub teams: Vec<CalendarSource>,
}

/// Everything the index page needs to reference the generated calendars.
#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub all_matches: CalendarSource,
    pub global_tournaments: Vec<CalendarSource>,
    pub regions: Vec<RegionFeed>,
}
