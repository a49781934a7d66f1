use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use vlr_calendar::model::{CalendarSource, Match, RegionFeed, SiteData};
use vlr_calendar::regions::{vct_regions, GLOBAL_TOURNAMENTS, VCT_TOURNAMENTS};
use vlr_calendar::{aggregate, ics, site, utils, VlrClient};

/// Generate subscribable calendar feeds from upcoming VLR matches.
#[derive(Parser, Debug)]
#[command(name = "vlr-calendar", version)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Number of listing pages to scrape
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..))]
    pages: u8,

    /// Output directory for generated files
    #[arg(long, default_value = "./publish")]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    debug!(pages = args.pages, output_dir = %args.output_dir.display(), "starting scrape");
    let client = VlrClient::new();
    let all_matches = client.scrape_upcoming_matches(args.pages).await;
    info!(count = all_matches.len(), "scraped upcoming matches");
    if all_matches.is_empty() {
        bail!("no matches scraped");
    }

    let ics_dir = args.output_dir.join("ics");
    tokio::fs::create_dir_all(&ics_dir)
        .await
        .with_context(|| format!("creating {}", ics_dir.display()))?;

    info!("generating calendar files");
    let data = generate_calendars(&all_matches, &ics_dir).await?;

    info!("building index page");
    let page = site::build_index_page(&data);
    let index_path = args.output_dir.join("index.html");
    tokio::fs::write(&index_path, page)
        .await
        .with_context(|| format!("writing {}", index_path.display()))?;

    Ok(())
}

/// Write one calendar per region tournament and team, per global
/// tournament, and the combined sorted feed; return what the index page
/// needs to reference them.
async fn generate_calendars(all_matches: &[Match], out_dir: &Path) -> anyhow::Result<SiteData> {
    let by_event = aggregate::group_by_event(all_matches);
    let by_team = aggregate::group_by_team(all_matches);
    let empty = Vec::new();

    let mut region_feeds = Vec::new();
    for region in vct_regions() {
        let mut feed = RegionFeed {
            name: region.name.to_string(),
            tournaments: Vec::new(),
            teams: Vec::new(),
        };
        for tournament in region.tournaments {
            let name = tournament.to_string();
            let matches = by_event.get(&name).unwrap_or(&empty);
            feed.tournaments
                .push(write_calendar(matches, &name, out_dir).await?);
        }
        for team in region.teams {
            let name = team.to_string();
            let matches = by_team.get(&name).unwrap_or(&empty);
            feed.teams
                .push(write_calendar(matches, &name, out_dir).await?);
        }
        region_feeds.push(feed);
    }

    let mut global_sources = Vec::new();
    for tournament in GLOBAL_TOURNAMENTS {
        let name = tournament.to_string();
        let matches = by_event.get(&name).unwrap_or(&empty);
        global_sources.push(write_calendar(matches, &name, out_dir).await?);
    }

    let vct_matches = aggregate::global_matches(&by_event, VCT_TOURNAMENTS);
    let all_source = write_calendar(&vct_matches, "All VCT Matches", out_dir).await?;

    Ok(SiteData {
        all_matches: all_source,
        global_tournaments: global_sources,
        regions: region_feeds,
    })
}

/// Write `<sanitized name>.ics` into `out_dir`. Groups without matches
/// still get a file so existing subscriptions keep resolving.
async fn write_calendar(
    matches: &[Match],
    name: &str,
    out_dir: &Path,
) -> anyhow::Result<CalendarSource> {
    if matches.is_empty() {
        debug!(name, "no matches for calendar");
    }
    let content = ics::build_calendar(matches, name);
    let file_name = format!("{}.ics", utils::sanitized_file_name(name));
    let path = out_dir.join(&file_name);
    tokio::fs::write(&path, content)
        .await
        .with_context(|| format!("writing {}", path.display()))?;
    info!(name, file = %path.display(), "wrote calendar");

    Ok(CalendarSource {
        name: name.to_string(),
        file_name,
    })
}
