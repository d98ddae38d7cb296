//! Earthquake listing HTML parser
//!
//! Parses the seismos.gr listing page HTML
//! (https://www.seismos.gr/seismoi-lista) into structured records.

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use super::types::QuakeRecord;

/// Anchors carrying the `list-group-item` class anywhere below a `list-group` container
const ENTRY_SELECTOR: &str = ".list-group a.list-group-item";
const TITLE_SELECTOR: &str = "h4";
const MAGNITUDE_SELECTOR: &str = "span";
const TIMEAGO_SELECTOR: &str = "p";

/// Separator between the date/time prefix and the description in a heading
const TITLE_SEPARATOR: &str = " - ";

/// Heading text decomposed into its parts. Missing parts are empty.
#[derive(Debug, Default, PartialEq, Eq)]
struct RawTitleParts {
    title: String,
    date: String,
    time: String,
}

/// Split "2024-05-01 14:32 - Strong quake near X" into
/// ("2024-05-01", "14:32", "Strong quake near X")
fn split_title(raw: &str) -> RawTitleParts {
    let mut segments = raw.splitn(2, TITLE_SEPARATOR);
    let head = segments.next().unwrap_or_default();
    let title = segments.next().unwrap_or_default();

    let mut date_time = head.split(' ');
    let date = date_time.next().unwrap_or_default();
    let time = date_time.next().unwrap_or_default();

    RawTitleParts {
        title: title.to_string(),
        date: date.to_string(),
        time: time.to_string(),
    }
}

/// Text content of the first descendant matching `selector`, or empty.
fn first_text(entry: &ElementRef<'_>, selector: &Selector) -> String {
    entry
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default()
}

struct EntrySelectors {
    entry: Selector,
    title: Selector,
    magnitude: Selector,
    timeago: Selector,
}

impl EntrySelectors {
    fn new() -> Option<Self> {
        let parse = |css: &str| match Selector::parse(css) {
            Ok(sel) => Some(sel),
            Err(e) => {
                warn!("Invalid CSS selector {:?}: {:?}", css, e);
                None
            }
        };

        Some(Self {
            entry: parse(ENTRY_SELECTOR)?,
            title: parse(TITLE_SELECTOR)?,
            magnitude: parse(MAGNITUDE_SELECTOR)?,
            timeago: parse(TIMEAGO_SELECTOR)?,
        })
    }
}

/// Parse the listing page HTML into [`QuakeRecord`]s, in document order.
///
/// Never fails: malformed markup yields whatever entries the parser could
/// recover, and an entry missing its heading, badge or paragraph gets empty
/// strings for those fields. `base_url` is prepended verbatim to each
/// entry's `href`.
pub fn extract(html: &str, base_url: &str) -> Vec<QuakeRecord> {
    let Some(selectors) = EntrySelectors::new() else {
        return Vec::new();
    };

    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        debug!("Recovered from {} HTML parse errors", document.errors.len());
    }

    let records: Vec<QuakeRecord> = document
        .select(&selectors.entry)
        .map(|entry| {
            let parts = split_title(&first_text(&entry, &selectors.title));
            let href = entry.value().attr("href").unwrap_or_default();

            QuakeRecord {
                link: format!("{}{}", base_url, href),
                title: parts.title,
                magnitude: first_text(&entry, &selectors.magnitude),
                timeago: first_text(&entry, &selectors.timeago),
                date: parts.date,
                time: parts.time,
            }
        })
        .collect();

    debug!("Extracted {} quake entries", records.len());
    records
}
