//! Static index page for the generated calendars: one subscribable row
//! per calendar, grouped by region, with the subscription links filled
//! in client-side from the page's own location.

use crate::model::{CalendarSource, RegionFeed, SiteData};

/// One subscribable row on the index page.
fn node(name: &str, file_name: &str, level: u8) -> String {
    format!(
        r#"<div class="node level-{level}">
    <span class="label">{name}</span>
    <div class="links" data-file="{file_name}"></div>
</div>
"#
    )
}

fn region_block(region: &RegionFeed) -> String {
    let tourney_rows: String = region
        .tournaments
        .iter()
        .map(|s| node(&format!("🏆 {}", s.name), &s.file_name, 2))
        .collect();
    let team_rows: String = region
        .teams
        .iter()
        .map(|s| node(&format!("🎮 {}", s.name), &s.file_name, 2))
        .collect();

    format!(
        r#"<div class="category-header">{}</div>
{tourney_rows}{team_rows}"#,
        region.name
    )
}

fn global_block(sources: &[CalendarSource]) -> String {
    sources
        .iter()
        .map(|s| node(&format!("🌍 {}", s.name), &s.file_name, 1))
        .collect()
}

/// Render the full index page.
pub fn build_index_page(data: &SiteData) -> String {
    let all_matches = node(&data.all_matches.name, &data.all_matches.file_name, 1);
    let globals = global_block(&data.global_tournaments);
    let regions: String = data.regions.iter().map(region_block).collect();

    format!(
        r#"<!DOCTYPE html>
<html>
{PAGE_HEAD}
<body>
<div class="container">
    <header>
        <h1>VCT Calendar for upcoming matches</h1>
        <p class="subtitle">Click to subscribe to the respective calendar</p>
    </header>
    <div class="tree-root">
        <h1>VCT Calendar Hub</h1>
        {all_matches}{globals}{regions}
    </div>
    {PAGE_SCRIPT}
</div>
</body>
</html>
"#
    )
}

const PAGE_HEAD: &str = r#"<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>VCT Calendar Hub</title>
    <style>
        :root {
            --bg-color: #131314;
            --card-bg: #1e1f20;
            --text-main: #e3e3e3;
            --text-dim: #b4b4b4;
            --accent-blue: #8ab4f8;
            --accent-green: #34a853;
            --border-color: #444746;
            --hover-bg: #2b2c2f;
        }
        body {
            background-color: var(--bg-color);
            color: var(--text-main);
            font-family: 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
            margin: 0;
            padding: 40px 20px;
            display: flex;
            justify-content: center;
        }
        .container { max-width: 800px; width: 100%; }
        header {
            margin-bottom: 40px;
            border-bottom: 1px solid var(--border-color);
            padding-bottom: 20px;
        }
        h1 { font-size: 2rem; font-weight: 500; margin: 0 0 10px 0; }
        .subtitle { color: var(--text-dim); font-size: 1.1rem; }
        .tree-root { list-style: none; padding: 0; }
        .node {
            margin: 10px 0;
            padding: 12px 16px;
            background: var(--card-bg);
            border: 1px solid var(--border-color);
            border-radius: 8px;
            display: flex;
            justify-content: space-between;
            align-items: center;
            transition: background 0.2s;
        }
        .node:hover { background: var(--hover-bg); }
        .label { font-weight: 500; display: flex; align-items: center; gap: 10px; }
        .level-1 { margin-left: 0; border-left: 4px solid var(--accent-blue); }
        .level-2 { margin-left: 30px; border-color: #555; }
        .links { display: flex; gap: 10px; }
        .btn {
            text-decoration: none;
            font-size: 0.8rem;
            padding: 6px 10px;
            border-radius: 6px;
            border: 1px solid transparent;
            transition: all 0.2s;
            cursor: pointer;
            background: transparent;
            white-space: nowrap;
        }
        .btn-google { color: var(--accent-blue); border-color: rgba(138, 180, 248, 0.3); }
        .btn-google:hover { background: rgba(138, 180, 248, 0.1); }
        .btn-apple { color: #fff; border-color: rgba(255, 255, 255, 0.2); }
        .btn-apple:hover { background: rgba(255, 255, 255, 0.1); }
        .btn-copy { color: var(--text-dim); border-color: var(--border-color); }
        .btn-copy:hover { border-color: var(--text-dim); background: rgba(255, 255, 255, 0.05); }
        .btn-copy.success { color: var(--accent-green); border-color: var(--accent-green); }
        .category-header {
            color: var(--accent-blue);
            text-transform: uppercase;
            font-size: 0.75rem;
            letter-spacing: 1.5px;
            margin: 30px 0 10px 30px;
        }
    </style>
</head>"#;

const PAGE_SCRIPT: &str = r#"<script>
    const BASE_URL = window.location.host
        + window.location.pathname.replace(/index\.html$/, '')
        + 'ics/';

    document.querySelectorAll('.links').forEach(div => {
        const fileName = div.getAttribute('data-file');
        const publicUrl = `https://${BASE_URL}${fileName}`;

        const gLink = document.createElement('a');
        gLink.className = 'btn btn-google';
        gLink.href = `https://www.google.com/calendar/render?cid=webcal://${BASE_URL}${fileName}`;
        gLink.target = "_blank";
        gLink.innerText = "Google";

        const aLink = document.createElement('a');
        aLink.className = 'btn btn-apple';
        aLink.href = `webcal://${BASE_URL}${fileName}`;
        aLink.innerText = "Apple";

        const cBtn = document.createElement('button');
        cBtn.className = 'btn btn-copy';
        cBtn.innerText = "Copy Link";
        cBtn.onclick = () => copyToClipboard(publicUrl, cBtn);

        div.appendChild(gLink);
        div.appendChild(aLink);
        div.appendChild(cBtn);
    });

    function copyToClipboard(text, btn) {
        navigator.clipboard.writeText(text).then(() => {
            const originalText = btn.innerText;
            btn.innerText = "Copied!";
            btn.classList.add('success');
            setTimeout(() => {
                btn.innerText = originalText;
                btn.classList.remove('success');
            }, 2000);
        });
    }
</script>"#;
