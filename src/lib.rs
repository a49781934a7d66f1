//! Generate subscribable ICS calendar feeds from the vlr.gg
//! upcoming-matches listing.
//!
//! The pipeline: [`VlrClient::scrape_upcoming_matches`] turns N listing
//! pages into [`model::Match`] values (interpreting listed times in the
//! site's detected display zone), [`aggregate`] slices them per
//! tournament and per team, and [`ics::build_calendar`] serializes each
//! slice into an RFC 5545 document.

pub use client::VlrClient;
pub use error::{Result, VlrError};
pub use scraper::matches::parse_matches_page;

pub mod aggregate;
mod client;
pub mod error;
pub mod ics;
pub mod model;
pub mod regions;
pub(crate) mod scraper;
pub mod site;
pub mod timezone;
pub mod utils;
