use std::path::PathBuf;
use std::time::Duration;

/// Public listing search page. The GET for the listing and the POST for a
/// municipality both go to this URL.
pub const LISTING_URL: &str = "https://www.kulturarv.dk/fbb/fredningsliste.htm";

/// Flat directory holding every cached page.
pub const DATA_DIR: &str = "data";

/// Pause between sequential bulk fetches.
pub const FETCH_PAUSE: Duration = Duration::from_secs(5);

/// Cache name of the top-level listing page.
pub const LISTING_PAGE: &str = "mainpage";

/// Registry-system prefix that marks a cached municipality result page.
pub const MUNICIPALITY_PAGE_PREFIX: &str = "26919";

/// Fixed run-wide settings, built once in main and handed to each component.
#[derive(Debug, Clone)]
pub struct Config {
    pub listing_url: String,
    pub data_dir: PathBuf,
    pub pause: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listing_url: LISTING_URL.to_string(),
            data_dir: PathBuf::from(DATA_DIR),
            pause: FETCH_PAUSE,
        }
    }
}

/// Identity fields attached to every outbound request, supplied once on the
/// command line.
#[derive(Debug, Clone)]
pub struct RequestHeaders {
    pub user_agent: String,
    pub from: Option<String>,
}
